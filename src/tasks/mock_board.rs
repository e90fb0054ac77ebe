//! Built-in task board
//!
//! Demo alerts, tasks and workers. Timestamps are placed relative to `now`.

use chrono::{DateTime, Duration, Utc};

use super::board::TaskBoard;
use super::model::{Alert, Task, TaskStatus, Worker, WorkerStatus};
use crate::severity::Severity;

pub fn demo_alerts(now: DateTime<Utc>) -> Vec<Alert> {
    vec![
        Alert {
            id: "a1".to_string(),
            chamber: "Chamber 1 - Shiitake".to_string(),
            timestamp: now - Duration::minutes(18),
            message: "Humidity dropped below 80%".to_string(),
            action: "Run misting system for 12 mins".to_string(),
            severity: Severity::Warning,
        },
        Alert {
            id: "a2".to_string(),
            chamber: "Chamber 3 - Button".to_string(),
            timestamp: now - Duration::minutes(105),
            message: "CO2 Levels Critical (>1200ppm)".to_string(),
            action: "Check ventilation intake fans".to_string(),
            severity: Severity::Critical,
        },
    ]
}

pub fn demo_tasks(now: DateTime<Utc>) -> Vec<Task> {
    vec![
        Task {
            id: "t1".to_string(),
            title: "Fix Fan".to_string(),
            location: "Chamber 2".to_string(),
            assigned_to: None,
            status: TaskStatus::Pending,
            timestamp: now - Duration::hours(2),
            description: "Main intake fan making noise. Check bearings.".to_string(),
        },
        Task {
            id: "t2".to_string(),
            title: "Misting Cycle".to_string(),
            location: "Chamber 3".to_string(),
            assigned_to: None,
            status: TaskStatus::InProgress,
            timestamp: now - Duration::minutes(15),
            description: "Manual misting required due to sensor calibration.".to_string(),
        },
    ]
}

pub fn demo_workers() -> Vec<Worker> {
    [
        ("w1", "John Doe", WorkerStatus::Available),
        ("w2", "Maria S.", WorkerStatus::Busy),
        ("w3", "Alex T.", WorkerStatus::Available),
    ]
    .into_iter()
    .map(|(id, name, status)| Worker {
        id: id.to_string(),
        name: name.to_string(),
        status,
    })
    .collect()
}

pub fn demo_board(now: DateTime<Utc>) -> TaskBoard {
    TaskBoard::new(demo_alerts(now), demo_tasks(now), demo_workers())
}
