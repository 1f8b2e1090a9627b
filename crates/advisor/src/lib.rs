//! # BusinessGraph Advisor
//!
//! Turns the per-unit margin of a product into one of three advisory
//! categories. The result is a `MarginTip` value; wording is left to the
//! presentation layer.

use core_types::{MarginTip, UnitEconomics};

pub mod error;
pub mod margin_advisor;

pub use error::AdvisorError;
pub use margin_advisor::{MarginAdvisor, classify_margin};

/// Selects advice for a set of unit economics.
///
/// Implementations must be total: every valid `UnitEconomics` maps to
/// exactly one category.
pub trait Advisor: Send + Sync {
    fn advise(&self, economics: &UnitEconomics) -> MarginTip;
}
