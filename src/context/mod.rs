//! Sensor Context Store
//!
//! Immutable per-chamber snapshots handed to the assistant and the dashboard.
//!
//! ## Architecture
//! - `sensor_context.rs` - SensorContext, thresholds, history and deviation detection
//! - `mock_context.rs` - Built-in snapshots (FZ-402) and dashboard tiles

pub mod sensor_context;
pub mod mock_context;

pub use sensor_context::{
    Deviation, Sensor, SensorContext, SensorHistory, SensorReadings, SensorThresholds,
    DEFAULT_SAMPLE_INTERVAL_MINUTES,
};
pub use mock_context::{dashboard_metrics, fz402_pinning, fz402_recovered};
