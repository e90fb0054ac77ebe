//! Progress timeline layout
//!
//! Segments of the stacked progress bar and the state of each phase in the
//! expanded phase list.

use serde::Serialize;

use super::phase::MushroomLifecycle;
use super::resolver::{current_phase, progress_fraction};

/// State of a phase relative to the current day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SegmentState {
    Completed,
    Current,
    Upcoming,
}

/// One bar segment
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhaseSegment {
    pub name: String,
    pub duration: u32,
    /// Share of the bar, `duration / total_days`
    pub width_fraction: f64,
    pub state: SegmentState,
}

/// Full bar layout for one chamber
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineLayout {
    pub segments: Vec<PhaseSegment>,
    /// Position of the "today" marker in `[0, 1]`
    pub marker_fraction: f64,
}

/// Lay out the phases of a lifecycle as bar segments.
///
/// A timeline that is ready for harvest has every phase completed.
pub fn timeline_layout(lifecycle: &MushroomLifecycle) -> TimelineLayout {
    let day = lifecycle.current_day;
    let total = f64::from(lifecycle.total_days);
    let harvest_ready = current_phase(lifecycle).is_harvest_ready();

    let segments = lifecycle
        .phases
        .iter()
        .map(|phase| {
            let state = if harvest_ready || phase.is_completed_by(day) {
                SegmentState::Completed
            } else if phase.contains_day(day) {
                SegmentState::Current
            } else {
                SegmentState::Upcoming
            };

            PhaseSegment {
                name: phase.name.clone(),
                duration: phase.duration,
                width_fraction: if total > 0.0 {
                    f64::from(phase.duration) / total
                } else {
                    0.0
                },
                state,
            }
        })
        .collect();

    TimelineLayout {
        segments,
        marker_fraction: progress_fraction(lifecycle),
    }
}
