//! Task & Alert Workflow
//!
//! ## Architecture
//! - `model.rs` - Alert, Task, Worker records and status enums
//! - `alerts.rs` - Alerts derived from out-of-band sensor readings
//! - `board.rs` - TaskBoard: assignment, completion, notes
//! - `mock_board.rs` - Demo alerts, tasks and workers

pub mod model;
pub mod alerts;
pub mod board;
pub mod mock_board;

pub use model::{relative_time, Alert, Task, TaskStatus, Worker, WorkerStatus};
pub use alerts::{alerts_from_context, suggested_action};
pub use board::{TaskBoard, CORRECTIVE_ACTION_TITLE};
pub use mock_board::{demo_alerts, demo_board, demo_tasks, demo_workers};
