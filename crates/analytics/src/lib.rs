//! # BusinessGraph Analytics Engine
//!
//! This crate turns the three scalar inputs of a single product (price, unit
//! cost, fixed cost) into the curves a small business owner needs to see:
//! revenue, total cost and profit over a quantity range, plus the break-even
//! point.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of the
//!   terminal, files or languages. It depends only on `core-types` (Layer 0).
//! - **Stateless Calculation:** The `EconomicModel` holds nothing but its
//!   sampling resolution. Every call recomputes from scratch, so results can be
//!   shared freely across threads.
//!
//! ## Public API
//!
//! - `EconomicModel`: sampling and the break-even solver.
//! - `EconomicReport`: the sampled table together with the optional break-even.
//! - `AnalyticsError`: the specific error types that can be returned from this crate.

pub mod engine;
pub mod error;
pub mod report;

pub use engine::{DEFAULT_NUM_POINTS, EconomicModel};
pub use error::AnalyticsError;
pub use report::EconomicReport;
