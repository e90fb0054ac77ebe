//! Utility modules
//!
//! Shared numeric helpers:
//! - Trend: least-squares line fit and dispersion over reading histories

pub mod trend;

pub use trend::{linear_trend, mean_and_std, LinearTrend};
