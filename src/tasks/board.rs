//! Task Board
//!
//! Open alerts, the task list and the worker roster for the Tasks screen.
//! Assigning an alert turns it into a corrective-action task.

use chrono::{DateTime, Utc};
use rustc_hash::FxHashMap;

use super::model::{Alert, Task, TaskStatus, Worker, WorkerStatus};
use crate::error::TaskError;

pub const CORRECTIVE_ACTION_TITLE: &str = "Corrective Action";

#[derive(Debug, Clone, Default)]
pub struct TaskBoard {
    alerts: Vec<Alert>,
    tasks: Vec<Task>,
    workers: Vec<Worker>,
    notes: FxHashMap<String, Vec<String>>,
    next_task_id: u64,
}

impl TaskBoard {
    pub fn new(alerts: Vec<Alert>, tasks: Vec<Task>, workers: Vec<Worker>) -> Self {
        Self {
            alerts,
            tasks,
            workers,
            notes: FxHashMap::default(),
            next_task_id: 0,
        }
    }

    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    /// Tasks, newest first
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn workers(&self) -> &[Worker] {
        &self.workers
    }

    pub fn available_workers(&self) -> impl Iterator<Item = &Worker> {
        self.workers
            .iter()
            .filter(|w| w.status == WorkerStatus::Available)
    }

    pub fn task(&self, task_id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == task_id)
    }

    /// Add alerts that are not already on the board
    pub fn raise_alerts(&mut self, alerts: impl IntoIterator<Item = Alert>) {
        for alert in alerts {
            if !self.alerts.iter().any(|a| a.id == alert.id) {
                self.alerts.push(alert);
            }
        }
    }

    /// Convert an alert into a pending corrective-action task at the top of
    /// the list, optionally assigned to a worker.
    pub fn assign_alert(
        &mut self,
        alert_id: &str,
        worker_id: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<&Task, TaskError> {
        let alert_index = self
            .alerts
            .iter()
            .position(|a| a.id == alert_id)
            .ok_or_else(|| TaskError::UnknownAlert(alert_id.to_string()))?;

        let assigned_to = match worker_id {
            Some(id) => Some(
                self.workers
                    .iter()
                    .find(|w| w.id == id)
                    .map(|w| w.name.clone())
                    .ok_or_else(|| TaskError::UnknownWorker(id.to_string()))?,
            ),
            None => None,
        };

        let alert = self.alerts.remove(alert_index);
        let task = Task {
            id: self.fresh_task_id(),
            title: CORRECTIVE_ACTION_TITLE.to_string(),
            location: alert.chamber,
            assigned_to,
            status: TaskStatus::Pending,
            timestamp: now,
            description: format!("{}. Suggested: {}", alert.message, alert.action),
        };

        tracing::info!(
            "Alert {} assigned as task {} ({})",
            alert.id,
            task.id,
            task.assigned_to.as_deref().unwrap_or("unassigned")
        );

        self.tasks.insert(0, task);
        Ok(&self.tasks[0])
    }

    pub fn complete_task(&mut self, task_id: &str) -> Result<(), TaskError> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == task_id)
            .ok_or_else(|| TaskError::UnknownTask(task_id.to_string()))?;
        task.status = TaskStatus::Completed;
        Ok(())
    }

    /// Attach a trimmed, non-empty note to a task
    pub fn add_note(&mut self, task_id: &str, text: &str) -> Result<(), TaskError> {
        if self.task(task_id).is_none() {
            return Err(TaskError::UnknownTask(task_id.to_string()));
        }

        let text = text.trim();
        if text.is_empty() {
            tracing::warn!("Rejected empty note for task {}", task_id);
            return Err(TaskError::EmptyNote(task_id.to_string()));
        }

        self.notes
            .entry(task_id.to_string())
            .or_default()
            .push(text.to_string());
        Ok(())
    }

    /// Notes for a task, oldest first
    pub fn notes(&self, task_id: &str) -> &[String] {
        self.notes.get(task_id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn open_task_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.status.is_open()).count()
    }

    fn fresh_task_id(&mut self) -> String {
        loop {
            self.next_task_id += 1;
            let id = format!("t-{}", self.next_task_id);
            if self.task(&id).is_none() {
                return id;
            }
        }
    }
}
