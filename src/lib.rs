//! Sporacle Core
//!
//! Monitoring logic for a mushroom-farm dashboard: severity of sensor
//! readings, lifecycle progress per chamber, the Sporcbot assistant, and the
//! alert/task workflow.
//!
//! Modules:
//! - `severity/`: Threshold bands, severity classification, metric tiles
//! - `context/`: Chamber sensor snapshots
//! - `lifecycle/`: Phase resolution and progress timelines
//! - `assistant/`: Keyword rules, reply templates, chat sessions
//! - `tasks/`: Alerts, tasks, workers
//! - `dashboard`: Chamber headline and progress cards
//! - `config`: JSON farm configuration
//!
//! Everything is synchronous and operates on immutable snapshots; the only
//! parallelism is building progress cards across chambers.

pub mod error;
pub mod utils;
pub mod severity;
pub mod context;
pub mod lifecycle;
pub mod assistant;
pub mod tasks;
pub mod dashboard;
pub mod config;

// Re-export commonly used types
pub use error::{ConfigError, TaskError};
pub use severity::{worst_of, Classifier, ClassifierConfig, Metric, Severity, ThresholdBand};
pub use context::{Sensor, SensorContext};
pub use lifecycle::{current_phase, days_remaining, progress_fraction, MushroomLifecycle, Phase};
pub use assistant::{respond, ChatSession};
pub use tasks::TaskBoard;
pub use dashboard::{progress_cards, summarize_chamber, ChamberSummary, ProgressCard};
pub use config::FarmConfig;
