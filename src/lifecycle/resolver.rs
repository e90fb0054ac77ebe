//! Lifecycle Phase Resolver
//!
//! Resolves the active phase of a timeline and the derived progress values
//! shown on each progress card.

use super::phase::{MushroomLifecycle, Phase};

/// Label shown once the timeline has run its course
pub const READY_FOR_HARVEST: &str = "Ready for Harvest";

/// Label shown when no phase covers the current day
pub const UNKNOWN_PHASE: &str = "Unknown Phase";

/// Days-remaining threshold at which a card is flagged
pub const HARVEST_IMMINENT_DAYS: u32 = 5;

/// Outcome of phase resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrentPhase<'a> {
    /// A phase covers the current day
    Active(&'a Phase),
    /// The timeline has run its course
    ReadyForHarvest,
    /// No phase matches but days remain (gap in the table)
    Unknown,
}

impl<'a> CurrentPhase<'a> {
    pub fn phase_name(&self) -> &'a str {
        match self {
            CurrentPhase::Active(phase) => &phase.name,
            CurrentPhase::ReadyForHarvest => READY_FOR_HARVEST,
            CurrentPhase::Unknown => UNKNOWN_PHASE,
        }
    }

    pub fn is_harvest_ready(&self) -> bool {
        matches!(self, CurrentPhase::ReadyForHarvest)
    }
}

/// Resolve the phase for the lifecycle's current day.
///
/// A completed timeline (`current_day >= total_days`) is ready for harvest
/// even when a phase table runs up to its last day. Otherwise the first phase
/// containing the day wins, and a gap yields [`CurrentPhase::Unknown`].
pub fn current_phase(lifecycle: &MushroomLifecycle) -> CurrentPhase<'_> {
    let day = lifecycle.current_day;
    if day >= lifecycle.total_days {
        return CurrentPhase::ReadyForHarvest;
    }

    match lifecycle.phases.iter().find(|p| p.contains_day(day)) {
        Some(phase) => CurrentPhase::Active(phase),
        None => {
            tracing::debug!(
                "No phase covers day {} of {} in {}",
                day,
                lifecycle.total_days,
                lifecycle.chamber_id
            );
            CurrentPhase::Unknown
        }
    }
}

/// `max(0, total_days - current_day)`
pub fn days_remaining(lifecycle: &MushroomLifecycle) -> u32 {
    lifecycle.total_days.saturating_sub(lifecycle.current_day)
}

/// `min(1, current_day / total_days)`; 0 for an empty timeline
pub fn progress_fraction(lifecycle: &MushroomLifecycle) -> f64 {
    if lifecycle.total_days == 0 {
        return 0.0;
    }
    (f64::from(lifecycle.current_day) / f64::from(lifecycle.total_days)).min(1.0)
}

/// Harvest is close enough to flag the card
pub fn is_harvest_imminent(lifecycle: &MushroomLifecycle) -> bool {
    days_remaining(lifecycle) <= HARVEST_IMMINENT_DAYS
}

/// Badge text, e.g. "7 Days Left" or "HARVEST NOW"
pub fn remaining_label(lifecycle: &MushroomLifecycle) -> String {
    match days_remaining(lifecycle) {
        0 => "HARVEST NOW".to_string(),
        days => format!("{} Days Left", days),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::phase::Phase;
    use approx::assert_relative_eq;

    fn lifecycle(current_day: u32, total_days: u32, phases: Vec<Phase>) -> MushroomLifecycle {
        MushroomLifecycle {
            variety_name: "Test".to_string(),
            chamber_id: "Chamber T".to_string(),
            current_day,
            total_days,
            phases: phases.into_iter().collect(),
        }
    }

    fn shiitake(current_day: u32) -> MushroomLifecycle {
        lifecycle(
            current_day,
            100,
            vec![
                Phase::new("Mycelial Run", 1, 60),
                Phase::new("Pinning Induction", 61, 20),
                Phase::new("Fruiting & Harvest", 81, 20),
            ],
        )
    }

    #[test]
    fn test_resolves_first_matching_phase() {
        let lc = shiitake(45);
        let phase = current_phase(&lc);
        assert_eq!(phase.phase_name(), "Mycelial Run");
        assert!(!phase.is_harvest_ready());

        assert_eq!(current_phase(&shiitake(61)).phase_name(), "Pinning Induction");
        assert_eq!(current_phase(&shiitake(99)).phase_name(), "Fruiting & Harvest");
    }

    #[test]
    fn test_ready_for_harvest_at_total_days() {
        // The last phase nominally runs through day 100, but the timeline is done
        let lc = shiitake(100);
        let phase = current_phase(&lc);
        assert_eq!(phase.phase_name(), READY_FOR_HARVEST);
        assert!(phase.is_harvest_ready());

        assert!(current_phase(&shiitake(140)).is_harvest_ready());
        assert!(!current_phase(&shiitake(99)).is_harvest_ready());
    }

    #[test]
    fn test_trailing_gap_before_total_days_is_unknown() {
        let lc = lifecycle(34, 35, vec![Phase::new("Run", 1, 15), Phase::new("Fruit", 16, 18)]);
        assert_eq!(current_phase(&lc), CurrentPhase::Unknown);
        assert!(current_phase(&lc.on_day(35)).is_harvest_ready());
    }

    #[test]
    fn test_gap_yields_unknown_phase() {
        let lc = lifecycle(
            15,
            30,
            vec![Phase::new("Run", 1, 10), Phase::new("Fruit", 20, 10)],
        );
        assert_eq!(current_phase(&lc), CurrentPhase::Unknown);
        assert_eq!(current_phase(&lc).phase_name(), UNKNOWN_PHASE);

        // Day 0 precedes every phase
        assert_eq!(current_phase(&lc.on_day(0)), CurrentPhase::Unknown);
    }

    #[test]
    fn test_days_remaining_never_negative() {
        assert_eq!(days_remaining(&lifecycle(28, 35, Vec::new())), 7);
        assert_eq!(days_remaining(&lifecycle(40, 35, Vec::new())), 0);
    }

    #[test]
    fn test_progress_fraction() {
        assert_relative_eq!(progress_fraction(&lifecycle(45, 100, Vec::new())), 0.45, epsilon = 1e-12);
        assert_relative_eq!(progress_fraction(&lifecycle(140, 100, Vec::new())), 1.0, epsilon = 1e-12);
        assert_eq!(progress_fraction(&lifecycle(0, 0, Vec::new())), 0.0);
    }

    #[test]
    fn test_remaining_label_and_imminence() {
        let lc = lifecycle(28, 35, Vec::new());
        assert_eq!(remaining_label(&lc), "7 Days Left");
        assert!(!is_harvest_imminent(&lc));

        let lc = lc.on_day(30);
        assert!(is_harvest_imminent(&lc));

        let lc = lc.on_day(35);
        assert_eq!(remaining_label(&lc), "HARVEST NOW");
    }
}
