//! Built-in lifecycle tables
//!
//! Cultivation timelines for the seven demo chambers.

use super::phase::{MushroomLifecycle, Phase};

/// Lifecycle table for every demo chamber, in chamber order
pub fn chamber_lifecycles() -> Vec<MushroomLifecycle> {
    vec![
        lifecycle("Shiitake", "Chamber 1", 45, 100, &[
            ("Mycelial Run", 1, 60),
            ("Pinning Induction", 61, 20),
            ("Fruiting & Harvest", 81, 20),
        ]),
        lifecycle("Oyster", "Chamber 2", 28, 35, &[
            ("Mycelial Run", 1, 15),
            ("Pinning Induction", 16, 5),
            ("Fruiting & Harvest", 21, 14),
        ]),
        lifecycle("Button", "Chamber 3", 90, 105, &[
            ("Phase 1", 1, 30),
            ("Phase 2", 31, 40),
            ("Pinning & Casing", 71, 15),
            ("Fruiting & Harvest", 86, 19),
        ]),
        lifecycle("Milky", "Chamber 4", 30, 55, &[
            ("Mycelial Run", 1, 25),
            ("Casing & Pinning", 26, 10),
            ("Fruiting & Harvest", 36, 19),
        ]),
        lifecycle("Lion's Mane", "Chamber 5", 10, 45, &[
            ("Mycelial Run", 1, 20),
            ("Pinning Induction", 21, 5),
            ("Fruiting & Harvest", 26, 19),
        ]),
        lifecycle("Enoki", "Chamber 6", 48, 50, &[
            ("Mycelial Run", 1, 30),
            ("Pinning Induction", 31, 10),
            ("Fruiting", 41, 9),
            ("Harvest Window", 50, 1),
        ]),
        lifecycle("Portobello", "Chamber 7", 5, 70, &[
            ("Incubation/Run", 1, 40),
            ("Casing & Pinning", 41, 10),
            ("Fruiting & Harvest", 51, 19),
        ]),
    ]
}

fn lifecycle(
    variety: &str,
    chamber: &str,
    current_day: u32,
    total_days: u32,
    phases: &[(&str, u32, u32)],
) -> MushroomLifecycle {
    MushroomLifecycle {
        variety_name: variety.to_string(),
        chamber_id: chamber.to_string(),
        current_day,
        total_days,
        phases: phases
            .iter()
            .map(|&(name, start, duration)| Phase::new(name, start, duration))
            .collect(),
    }
}
