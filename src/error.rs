//! Error types
//!
//! Configuration problems are rejected when a snapshot is built or loaded,
//! so the classifier, resolver and assistant stay total over valid input.

use thiserror::Error;

/// Invalid configuration snapshot (thresholds, lifecycle tables).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("threshold band for '{metric}' is inverted: min {min} > max {max}")]
    InvertedBand { metric: String, min: f64, max: f64 },

    #[error("ideal value {ideal} for '{metric}' lies outside its band [{min}, {max}]")]
    IdealOutsideBand {
        metric: String,
        min: f64,
        ideal: f64,
        max: f64,
    },

    #[error("threshold band for '{metric}' contains a non-finite bound")]
    NonFiniteBound { metric: String },

    #[error("lifecycle for {chamber} must span at least one day (total_days = {total_days})")]
    EmptyLifecycle { chamber: String, total_days: u32 },

    #[error("phase '{phase}' in {chamber} must start on day 1 or later and last at least one day")]
    InvalidPhase { chamber: String, phase: String },

    #[error("phases in {chamber} cover {covered} days but the lifecycle only has {total_days}")]
    PhasesExceedLifecycle {
        chamber: String,
        covered: u32,
        total_days: u32,
    },

    #[error("chamber id '{0}' appears more than once")]
    DuplicateChamber(String),

    #[error("warning margin must be a finite, non-negative fraction (got {0})")]
    InvalidMargin(f64),
}

/// Task board operation that refers to missing entities or carries no content.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskError {
    #[error("no open alert with id '{0}'")]
    UnknownAlert(String),

    #[error("no task with id '{0}'")]
    UnknownTask(String),

    #[error("no worker with id '{0}'")]
    UnknownWorker(String),

    #[error("note for task '{0}' is empty")]
    EmptyNote(String),
}
