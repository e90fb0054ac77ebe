//! Severity Engine
//!
//! Turns raw readings into the health levels shown on tiles, alerts and the
//! dashboard headline.
//!
//! ## Architecture
//! - `band.rs` - Validated `{min, ideal, max}` thresholds and reading comparison
//! - `classifier.rs` - Severity levels, configurable warning margin, worst-of reduction
//! - `metric.rs` - Metric tiles with derived status and a sliding history window

pub mod band;
pub mod classifier;
pub mod metric;

pub use band::{BandComparison, BandFit, ThresholdBand};
pub use classifier::{classify, worst_of, Classifier, ClassifierConfig, Severity};
pub use metric::{History, Metric, DEFAULT_HISTORY_LEN};
