//! Lifecycle definitions
//!
//! A cultivation timeline is an ordered list of named phases, each covering
//! `[start_day, start_day + duration)`. Phases are contiguous by convention;
//! gaps are allowed and resolve to the "Unknown Phase" sentinel.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::ConfigError;

/// One stage of a cultivation lifecycle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phase {
    pub name: String,
    /// First day of the phase (1-based)
    pub start_day: u32,
    /// Length in days
    pub duration: u32,
}

impl Phase {
    pub fn new(name: &str, start_day: u32, duration: u32) -> Self {
        Self {
            name: name.to_string(),
            start_day,
            duration,
        }
    }

    /// First day after the phase
    pub fn end_day(&self) -> u32 {
        self.start_day.saturating_add(self.duration)
    }

    pub fn contains_day(&self, day: u32) -> bool {
        day >= self.start_day && day < self.end_day()
    }

    pub fn is_completed_by(&self, day: u32) -> bool {
        day >= self.end_day()
    }
}

/// Most varieties have three or four phases
pub type Phases = SmallVec<[Phase; 4]>;

/// Cultivation timeline of one chamber
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MushroomLifecycle {
    pub variety_name: String,
    pub chamber_id: String,
    pub current_day: u32,
    pub total_days: u32,
    pub phases: Phases,
}

impl MushroomLifecycle {
    /// Build and validate a lifecycle
    pub fn new(
        variety_name: &str,
        chamber_id: &str,
        current_day: u32,
        total_days: u32,
        phases: impl IntoIterator<Item = Phase>,
    ) -> Result<Self, ConfigError> {
        let lifecycle = Self {
            variety_name: variety_name.to_string(),
            chamber_id: chamber_id.to_string(),
            current_day,
            total_days,
            phases: phases.into_iter().collect(),
        };
        lifecycle.validate()?;
        Ok(lifecycle)
    }

    /// Check the table invariants: a non-empty timeline, well-formed phases,
    /// and total phase length not exceeding the timeline.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.total_days == 0 {
            return Err(ConfigError::EmptyLifecycle {
                chamber: self.chamber_id.clone(),
                total_days: self.total_days,
            });
        }

        for phase in &self.phases {
            if phase.start_day == 0 || phase.duration == 0 {
                return Err(ConfigError::InvalidPhase {
                    chamber: self.chamber_id.clone(),
                    phase: phase.name.clone(),
                });
            }
        }

        let covered = self.covered_days();
        if covered > u64::from(self.total_days) {
            return Err(ConfigError::PhasesExceedLifecycle {
                chamber: self.chamber_id.clone(),
                covered: u32::try_from(covered).unwrap_or(u32::MAX),
                total_days: self.total_days,
            });
        }

        Ok(())
    }

    /// Sum of phase durations
    pub fn covered_days(&self) -> u64 {
        self.phases.iter().map(|p| u64::from(p.duration)).sum()
    }

    /// Same timeline on a different day
    pub fn on_day(&self, day: u32) -> Self {
        Self {
            current_day: day,
            ..self.clone()
        }
    }
}
