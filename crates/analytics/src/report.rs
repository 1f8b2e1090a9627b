use core_types::{BreakEvenPoint, Sample, UnitEconomics};
use serde::Serialize;

/// The output of one `EconomicModel::evaluate` call.
///
/// This struct is the data transfer object handed to the presentation and
/// export layers. It is rebuilt on every input change, never patched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EconomicReport {
    pub economics: UnitEconomics,
    pub max_quantity: f64,
    pub sample: Sample,
    pub break_even: Option<BreakEvenPoint>, // None when price <= unit cost
}

impl EconomicReport {
    /// True when the break-even quantity falls inside the sampled domain.
    pub fn break_even_in_range(&self) -> bool {
        self.break_even
            .is_some_and(|point| point.quantity <= self.max_quantity)
    }
}
