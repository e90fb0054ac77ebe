//! Sporcbot Assistant
//!
//! Rule-based chat assistant answering grower questions from a chamber's
//! sensor snapshot. No language model is involved: replies come from an
//! ordered keyword table and fixed templates.
//!
//! ## Architecture
//! - `rules.rs` - Ordered keyword rule table and the `respond` entry point
//! - `responses.rs` - Status and single-sensor reply templates
//! - `forecast.rs` - CO2 trend projection for prediction requests
//! - `anomaly.rs` - Latest-reading anomaly screen for contamination requests
//! - `faq.rs` - Static FAQ used for suggested prompts
//! - `session.rs` - Chat transcript, opening greeting, thinking delay

pub mod rules;
pub mod responses;
pub mod forecast;
pub mod anomaly;
pub mod faq;
pub mod session;

pub use rules::{classify_query, respond, Category, Rule, RULES};
pub use responses::FALLBACK_RESPONSE;
pub use forecast::{forecast_co2, Co2Forecast, FORECAST_HORIZON_MINUTES};
pub use anomaly::{screen_anomalies, Anomaly, ANOMALY_SIGMA, NO_ANOMALY_RESPONSE};
pub use faq::{faq_answer, FaqEntry, SPORCBOT_FAQ, SUGGESTED_PROMPT_COUNT};
pub use session::{opening_greeting, thinking_delay, ChatMessage, ChatSession, Sender};
