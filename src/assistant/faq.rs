//! Grower FAQ
//!
//! Static question/answer pairs offered as quick prompts in the chat widget.

use serde::Serialize;

/// Number of FAQ questions offered as suggested prompts
pub const SUGGESTED_PROMPT_COUNT: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

const fn entry(question: &'static str, answer: &'static str) -> FaqEntry {
    FaqEntry { question, answer }
}

pub const SPORCBOT_FAQ: [FaqEntry; 12] = [
    entry("Optimal CO2 during pinning?", "Maintain 800–1200 ppm. Use frequent fresh air exchanges to avoid spikes."),
    entry("Ideal humidity for fruiting?", "Keep 85–95% RH. Prefer short mist pulses to avoid pooling."),
    entry("Best temperature for oyster?", "Target 20–22°C (range 18–24°C) for consistent cap formation."),
    entry("CO2 rising at night — fix?", "Add low-speed ventilation cycles (10–15 min/hr) overnight; verify intake filters."),
    entry("Caps yellowing — cause?", "Likely low humidity or heat. Increase RH and diffuse lighting; check hotspots."),
    entry("Post-harvest misting?", "Mist 8–12 minutes immediately, then hold ~90% RH for 2–3 hours to rehydrate."),
    entry("Assign corrective action fast?", "Open Alerts, tap Assign Task, select worker, add duration and notes, confirm."),
    entry("Flat RH but rising CO2?", "Ventilation inadequate. Increase air exchanges; inspect dampers and obstructions."),
    entry("Stems elongating?", "High CO2 or poor light diffusion. Improve airflow and adjust light angle/intensity."),
    entry("Misting: long vs pulses?", "Prefer 1–2 min pulses spaced 10–15 min; reduces pooling and bacterial risk."),
    entry("Shiitake vs oyster conditions?", "Shiitake browning at lower RH and cooler temps (16–20°C); longer rest between flushes."),
    entry("Basic PPE for maintenance?", "N95/KN95, nitrile gloves, eye protection; sanitize hands/tools between chambers."),
];

/// Questions shown as quick prompts
pub fn suggested_prompts() -> &'static [FaqEntry] {
    &SPORCBOT_FAQ[..SUGGESTED_PROMPT_COUNT]
}

/// Answer for a FAQ question, ignoring case and surrounding whitespace
pub fn faq_answer(question: &str) -> Option<&'static str> {
    let question = question.trim();
    SPORCBOT_FAQ
        .iter()
        .find(|e| e.question.eq_ignore_ascii_case(question))
        .map(|e| e.answer)
}
