use crate::error::CoreError;
use serde::{Deserialize, Serialize};

/// The three scalar inputs of the linear cost/revenue model.
///
/// Construction through [`UnitEconomics::new`] guarantees every field is finite
/// and non-negative, which is what keeps the downstream solvers free of NaN.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UnitEconomics {
    price: f64,
    unit_cost: f64,
    fixed_cost: f64,
}

impl UnitEconomics {
    pub fn new(price: f64, unit_cost: f64, fixed_cost: f64) -> Result<Self, CoreError> {
        check_non_negative("price", price)?;
        check_non_negative("unit_cost", unit_cost)?;
        check_non_negative("fixed_cost", fixed_cost)?;
        Ok(Self {
            price,
            unit_cost,
            fixed_cost,
        })
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn unit_cost(&self) -> f64 {
        self.unit_cost
    }

    pub fn fixed_cost(&self) -> f64 {
        self.fixed_cost
    }

    /// Per-unit contribution before fixed costs.
    pub fn margin(&self) -> f64 {
        self.price - self.unit_cost
    }

    /// T(x) = price * x
    pub fn revenue_at(&self, quantity: f64) -> f64 {
        self.price * quantity
    }

    /// S(x) = unit_cost * x + fixed_cost
    pub fn cost_at(&self, quantity: f64) -> f64 {
        self.unit_cost * quantity + self.fixed_cost
    }

    /// P(x) = T(x) - S(x)
    pub fn profit_at(&self, quantity: f64) -> f64 {
        self.revenue_at(quantity) - self.cost_at(quantity)
    }
}

fn check_non_negative(field: &str, value: f64) -> Result<(), CoreError> {
    if !value.is_finite() {
        return Err(CoreError::invalid(field, format!("{} is not a finite number", value)));
    }
    if value < 0.0 {
        return Err(CoreError::invalid(field, format!("{} must not be negative", value)));
    }
    Ok(())
}

/// One row of the sampled curve table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplePoint {
    pub quantity: f64,
    pub revenue: f64,
    pub cost: f64,
    pub profit: f64,
}

impl SamplePoint {
    /// Evaluates the model at `quantity`. Profit is derived from the two
    /// computed values so that `revenue - cost == profit` holds exactly.
    pub fn at(economics: &UnitEconomics, quantity: f64) -> Self {
        let revenue = economics.revenue_at(quantity);
        let cost = economics.cost_at(quantity);
        Self {
            quantity,
            revenue,
            cost,
            profit: revenue - cost,
        }
    }
}

/// The discretized curve data used for charting and export.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sample {
    points: Vec<SamplePoint>,
}

impl Sample {
    pub fn from_points(points: Vec<SamplePoint>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[SamplePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&SamplePoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&SamplePoint> {
        self.points.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SamplePoint> {
        self.points.iter()
    }

    /// Splits the table into the aligned series a chart consumes.
    pub fn series(&self) -> ChartSeries {
        let mut series = ChartSeries::with_capacity(self.points.len());
        for point in &self.points {
            series.quantity.push(point.quantity);
            series.revenue.push(point.revenue);
            series.cost.push(point.cost);
            series.profit.push(point.profit);
        }
        series
    }
}

impl<'a> IntoIterator for &'a Sample {
    type Item = &'a SamplePoint;
    type IntoIter = std::slice::Iter<'a, SamplePoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Column-oriented view of a [`Sample`]: quantity against revenue, cost and profit.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartSeries {
    pub quantity: Vec<f64>,
    pub revenue: Vec<f64>,
    pub cost: Vec<f64>,
    pub profit: Vec<f64>,
}

impl ChartSeries {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            quantity: Vec::with_capacity(capacity),
            revenue: Vec::with_capacity(capacity),
            cost: Vec::with_capacity(capacity),
            profit: Vec::with_capacity(capacity),
        }
    }
}

/// Quantity at which profit crosses zero, with the revenue earned there.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BreakEvenPoint {
    pub quantity: f64,
    pub revenue: f64,
}
