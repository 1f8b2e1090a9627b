use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalyticsError {
    #[error("Maximum quantity must be a finite number greater than zero, got {0}")]
    InvalidMaxQuantity(f64),

    #[error("At least 2 sample points are required to span a range, got {0}")]
    NotEnoughPoints(usize),

    #[error("Revenue, cost or profit overflowed to a non-finite value at quantity {0}")]
    NonFiniteResult(f64),
}
