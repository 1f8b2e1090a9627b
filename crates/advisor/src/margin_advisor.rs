use crate::error::AdvisorError;
use crate::Advisor;
use configuration::AdvisoryParams;
use core_types::{MarginTip, UnitEconomics};

/// A concrete `Advisor` driven by a single margin-ratio threshold.
///
/// Branches are checked in priority order: a non-positive margin first, then
/// a margin ratio below the threshold, otherwise the margin is healthy.
#[derive(Debug, Clone)]
pub struct MarginAdvisor {
    params: AdvisoryParams,
}

impl MarginAdvisor {
    /// Creates a new `MarginAdvisor` with the given configuration parameters.
    pub fn new(params: AdvisoryParams) -> Result<Self, AdvisorError> {
        let ratio = params.thin_margin_ratio;
        if !(ratio > 0.0 && ratio < 1.0) {
            return Err(AdvisorError::InvalidParameters(format!(
                "thin_margin_ratio must be between 0 and 1, got {}",
                ratio
            )));
        }
        Ok(Self { params })
    }

    pub fn classify(&self, price: f64, unit_cost: f64) -> MarginTip {
        classify_with_ratio(price, unit_cost, self.params.thin_margin_ratio)
    }
}

impl Default for MarginAdvisor {
    fn default() -> Self {
        Self {
            params: AdvisoryParams::default(),
        }
    }
}

impl Advisor for MarginAdvisor {
    fn advise(&self, economics: &UnitEconomics) -> MarginTip {
        let tip = self.classify(economics.price(), economics.unit_cost());
        if tip == MarginTip::LowOrNoMargin {
            tracing::warn!(
                price = economics.price(),
                unit_cost = economics.unit_cost(),
                "Price does not exceed unit cost; no profit is possible."
            );
        }
        tip
    }
}

/// Classifies a margin with the default 15% thin-margin threshold.
pub fn classify_margin(price: f64, unit_cost: f64) -> MarginTip {
    classify_with_ratio(price, unit_cost, AdvisoryParams::default().thin_margin_ratio)
}

fn classify_with_ratio(price: f64, unit_cost: f64, thin_margin_ratio: f64) -> MarginTip {
    let margin = price - unit_cost;
    // A zero price always lands here, so the ratio below never divides by zero.
    if margin <= 0.0 {
        return MarginTip::LowOrNoMargin;
    }
    if price > 0.0 && margin / price < thin_margin_ratio {
        return MarginTip::ThinMargin;
    }
    MarginTip::HealthyMargin
}
