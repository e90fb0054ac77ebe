//! Dashboard Summary
//!
//! Overall chamber headline from the metric tiles, and progress cards for a
//! set of chamber lifecycles.

use rayon::prelude::*;
use serde::Serialize;

use crate::lifecycle::{
    current_phase, days_remaining, is_harvest_imminent, progress_fraction, remaining_label,
    timeline_layout, MushroomLifecycle, TimelineLayout,
};
use crate::severity::{Classifier, Metric, Severity};

// ============================================================================
// Chamber headline
// ============================================================================

/// One tile as rendered on the dashboard
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TileStatus {
    pub id: String,
    pub label: String,
    pub display_value: String,
    pub status: Severity,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChamberSummary {
    pub overall: Severity,
    pub headline: &'static str,
    pub tiles: Vec<TileStatus>,
}

impl ChamberSummary {
    pub fn attention_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.status.needs_attention()).count()
    }
}

pub fn summarize_chamber(metrics: &[Metric], classifier: &Classifier) -> ChamberSummary {
    let tiles: Vec<TileStatus> = metrics
        .iter()
        .map(|m| TileStatus {
            id: m.id.clone(),
            label: m.label.clone(),
            display_value: m.display_value(),
            status: m.status(classifier),
        })
        .collect();

    let overall = classifier.worst_of(metrics);
    ChamberSummary {
        overall,
        headline: overall.headline(),
        tiles,
    }
}

// ============================================================================
// Progress cards
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressCard {
    pub chamber_id: String,
    pub variety_name: String,
    pub current_day: u32,
    pub total_days: u32,
    pub phase_name: String,
    pub days_remaining: u32,
    pub remaining_label: String,
    pub progress: f64,
    pub harvest_imminent: bool,
    pub timeline: TimelineLayout,
}

pub fn progress_card(lifecycle: &MushroomLifecycle) -> ProgressCard {
    ProgressCard {
        chamber_id: lifecycle.chamber_id.clone(),
        variety_name: lifecycle.variety_name.clone(),
        current_day: lifecycle.current_day,
        total_days: lifecycle.total_days,
        phase_name: current_phase(lifecycle).phase_name().to_string(),
        days_remaining: days_remaining(lifecycle),
        remaining_label: remaining_label(lifecycle),
        progress: progress_fraction(lifecycle),
        harvest_imminent: is_harvest_imminent(lifecycle),
        timeline: timeline_layout(lifecycle),
    }
}

/// Build cards for every chamber in parallel; output keeps input order
pub fn progress_cards(lifecycles: &[MushroomLifecycle]) -> Vec<ProgressCard> {
    let cards: Vec<ProgressCard> = lifecycles.par_iter().map(progress_card).collect();
    tracing::debug!("Built {} progress cards", cards.len());
    cards
}
