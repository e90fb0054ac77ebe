//! Lifecycle Tracking
//!
//! Cultivation timelines per chamber and the values derived from them for the
//! progress screen.
//!
//! ## Architecture
//! - `phase.rs` - Phase and MushroomLifecycle definitions + table validation
//! - `resolver.rs` - Current phase, days remaining, progress fraction
//! - `timeline.rs` - Stacked progress-bar segments and phase states
//! - `tables.rs` - Built-in tables for the seven demo chambers

pub mod phase;
pub mod resolver;
pub mod timeline;
pub mod tables;

pub use phase::{MushroomLifecycle, Phase, Phases};
pub use resolver::{
    current_phase, days_remaining, is_harvest_imminent, progress_fraction, remaining_label,
    CurrentPhase, HARVEST_IMMINENT_DAYS, READY_FOR_HARVEST, UNKNOWN_PHASE,
};
pub use timeline::{timeline_layout, PhaseSegment, SegmentState, TimelineLayout};
pub use tables::chamber_lifecycles;
