use crate::error::AnalyticsError;
use crate::report::EconomicReport;
use core_types::{BreakEvenPoint, Sample, SamplePoint, UnitEconomics};

/// Number of quantity points sampled when the caller does not choose one.
pub const DEFAULT_NUM_POINTS: usize = 500;

/// A stateless calculator for the linear revenue/cost/profit model of one product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EconomicModel {
    num_points: usize,
}

impl Default for EconomicModel {
    fn default() -> Self {
        Self {
            num_points: DEFAULT_NUM_POINTS,
        }
    }
}

impl EconomicModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a model sampling `num_points` quantities per series.
    pub fn with_points(num_points: usize) -> Result<Self, AnalyticsError> {
        if num_points < 2 {
            return Err(AnalyticsError::NotEnoughPoints(num_points));
        }
        Ok(Self { num_points })
    }

    pub fn num_points(&self) -> usize {
        self.num_points
    }

    /// Runs both calculations for one set of inputs.
    ///
    /// # Arguments
    ///
    /// * `economics` - Validated price, unit cost and fixed cost.
    /// * `max_quantity` - Upper bound of the sampled quantity domain.
    ///
    /// # Returns
    ///
    /// A `Result` containing the `EconomicReport` or an `AnalyticsError`.
    pub fn evaluate(
        &self,
        economics: &UnitEconomics,
        max_quantity: f64,
    ) -> Result<EconomicReport, AnalyticsError> {
        let sample = self.compute_series(economics, max_quantity)?;
        let break_even = self.compute_break_even(economics);

        Ok(EconomicReport {
            economics: *economics,
            max_quantity,
            sample,
            break_even,
        })
    }

    /// Samples revenue, cost and profit at evenly spaced quantities over
    /// `[0, max_quantity]`, both endpoints included.
    pub fn compute_series(
        &self,
        economics: &UnitEconomics,
        max_quantity: f64,
    ) -> Result<Sample, AnalyticsError> {
        if !max_quantity.is_finite() || max_quantity <= 0.0 {
            return Err(AnalyticsError::InvalidMaxQuantity(max_quantity));
        }

        let points: Vec<SamplePoint> = linspace(max_quantity, self.num_points)
            .map(|quantity| SamplePoint::at(economics, quantity))
            .collect();

        if let Some(point) = points
            .iter()
            .find(|p| !(p.revenue.is_finite() && p.cost.is_finite() && p.profit.is_finite()))
        {
            return Err(AnalyticsError::NonFiniteResult(point.quantity));
        }

        tracing::debug!(
            num_points = points.len(),
            max_quantity,
            "Sampled revenue, cost and profit series."
        );

        Ok(Sample::from_points(points))
    }

    /// Solves `profit(q) = 0` for the single root of the linear model.
    ///
    /// Returns `None` whenever price does not exceed unit cost, including the
    /// zero-margin, zero-fixed-cost case where every quantity breaks even.
    /// Also `None` when the margin is so small that the root overflows `f64`.
    pub fn compute_break_even(&self, economics: &UnitEconomics) -> Option<BreakEvenPoint> {
        let margin = economics.margin();
        if margin <= 0.0 {
            tracing::debug!(margin, "No break-even: price does not exceed unit cost.");
            return None;
        }

        let quantity = economics.fixed_cost() / margin;
        let revenue = economics.revenue_at(quantity);
        if !(quantity.is_finite() && revenue.is_finite()) {
            tracing::warn!(margin, "Break-even quantity is not representable.");
            return None;
        }
        Some(BreakEvenPoint { quantity, revenue })
    }
}

/// Yields `num_points` values evenly spaced over `[0, stop]`.
///
/// Values are computed as `i * step` rather than accumulated, and the last
/// value is pinned to `stop` so rounding never moves the endpoint.
fn linspace(stop: f64, num_points: usize) -> impl Iterator<Item = f64> {
    let last = num_points - 1;
    let step = stop / last as f64;
    (0..num_points).map(move |i| if i == last { stop } else { i as f64 * step })
}
