//! Metrics
//!
//! One monitored quantity: its latest reading, its band and a fixed-length
//! history window for sparklines. Status is always derived from the reading.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use super::band::ThresholdBand;
use super::classifier::{Classifier, Severity};

/// Default number of readings kept for a sparkline
pub const DEFAULT_HISTORY_LEN: usize = 8;

/// Fixed-capacity sliding window of readings, oldest first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<f64>", into = "Vec<f64>")]
pub struct History {
    capacity: usize,
    readings: VecDeque<f64>,
}

impl History {
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            readings: VecDeque::with_capacity(capacity),
        }
    }

    /// Append a reading, dropping the oldest once the window is full
    pub fn push(&mut self, value: f64) {
        if self.readings.len() == self.capacity {
            self.readings.pop_front();
        }
        self.readings.push_back(value);
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn latest(&self) -> Option<f64> {
        self.readings.back().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.readings.iter().copied()
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.readings.iter().copied().collect()
    }
}

impl From<Vec<f64>> for History {
    fn from(readings: Vec<f64>) -> Self {
        let mut history = History::with_capacity(readings.len().max(DEFAULT_HISTORY_LEN));
        for value in readings {
            history.push(value);
        }
        history
    }
}

impl From<History> for Vec<f64> {
    fn from(history: History) -> Self {
        history.readings.into_iter().collect()
    }
}

/// A monitored quantity shown as a dashboard tile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub id: String,
    pub label: String,
    pub unit: String,

    /// Latest reading; `None` while the sensor is offline
    pub value: Option<f64>,

    pub band: ThresholdBand,

    pub history: History,
}

impl Metric {
    pub fn new(id: &str, label: &str, unit: &str, band: ThresholdBand) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            unit: unit.to_string(),
            value: None,
            band,
            history: History::with_capacity(DEFAULT_HISTORY_LEN),
        }
    }

    /// Record a new reading and slide the history window
    pub fn record(&mut self, value: f64) {
        self.value = Some(value);
        self.history.push(value);
    }

    /// Mark the sensor as unavailable; history is kept
    pub fn mark_offline(&mut self) {
        self.value = None;
    }

    /// Current severity, computed from the reading and band
    pub fn status(&self, classifier: &Classifier) -> Severity {
        classifier.classify_reading(self.value, &self.band)
    }

    /// Format the reading for a tile, e.g. "22.5 °C" or "-- °C" when offline
    pub fn display_value(&self) -> String {
        match self.value {
            Some(v) => format!("{} {}", v, self.unit),
            None => format!("-- {}", self.unit),
        }
    }
}
