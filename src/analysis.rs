use advisor::{Advisor, MarginAdvisor};
use analytics::{AnalyticsError, EconomicModel, EconomicReport};
use configuration::Config;
use core_types::{MarginTip, UnitEconomics};
use serde::Serialize;

/// One complete set of user inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scenario {
    pub economics: UnitEconomics,
    pub max_quantity: f64,
}

/// Everything the presentation and export layers need for one scenario.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    #[serde(flatten)]
    pub report: EconomicReport,
    pub tip: MarginTip,
}

/// Runs the economic model and the advisor side by side.
pub struct Pipeline {
    model: EconomicModel,
    advisor: Box<dyn Advisor>,
}

impl Pipeline {
    pub fn new(model: EconomicModel, advisor: Box<dyn Advisor>) -> Self {
        Self { model, advisor }
    }

    /// Builds the pipeline from the sampling and advisory sections of the config.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let model = EconomicModel::with_points(config.sampling.num_points)?;
        let advisor = MarginAdvisor::new(config.advisory)?;
        Ok(Self::new(model, Box::new(advisor)))
    }

    pub fn num_points(&self) -> usize {
        self.model.num_points()
    }

    pub fn run(&self, scenario: &Scenario) -> Result<Analysis, AnalyticsError> {
        let report = self.model.evaluate(&scenario.economics, scenario.max_quantity)?;
        let tip = self.advisor.advise(&scenario.economics);

        tracing::debug!(
            break_even = ?report.break_even,
            ?tip,
            "Scenario analysed."
        );
        Ok(Analysis { report, tip })
    }
}
