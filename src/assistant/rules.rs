//! Assistant Rule Table
//!
//! Ordered keyword rules mapping a user message to a response category.
//! Matching is case-insensitive substring containment and the first rule
//! with a matching keyword wins, so "check co2 status" is a status request.

use serde::Serialize;

use super::anomaly::contamination_report;
use super::forecast::prediction_report;
use super::responses::{
    co2_report, greeting, humidity_report, status_report, temperature_report, FALLBACK_RESPONSE,
};
use crate::context::SensorContext;

/// Response category selected for a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Status,
    Co2,
    Humidity,
    Temperature,
    Prediction,
    Contamination,
    Greeting,
    Fallback,
}

impl Category {
    pub fn display_text(&self) -> &'static str {
        match self {
            Category::Status => "Status",
            Category::Co2 => "CO2",
            Category::Humidity => "Humidity",
            Category::Temperature => "Temperature",
            Category::Prediction => "Prediction",
            Category::Contamination => "Contamination",
            Category::Greeting => "Greeting",
            Category::Fallback => "Fallback",
        }
    }
}

/// One dispatch rule
pub struct Rule {
    pub category: Category,
    pub keywords: &'static [&'static str],
    handler: fn(&SensorContext) -> String,
}

impl Rule {
    pub fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|k| lowered.contains(k))
    }
}

/// Dispatch order
pub static RULES: [Rule; 7] = [
    Rule {
        category: Category::Status,
        keywords: &["status", "health", "how is", "check"],
        handler: status_report,
    },
    Rule {
        category: Category::Co2,
        keywords: &["co2"],
        handler: co2_report,
    },
    Rule {
        category: Category::Humidity,
        keywords: &["humidity", "rh"],
        handler: humidity_report,
    },
    Rule {
        category: Category::Temperature,
        keywords: &["temp"],
        handler: temperature_report,
    },
    Rule {
        category: Category::Prediction,
        keywords: &["predict", "future", "trend"],
        handler: prediction_report,
    },
    Rule {
        category: Category::Contamination,
        keywords: &["contam", "mold", "clean"],
        handler: contamination_report,
    },
    Rule {
        category: Category::Greeting,
        keywords: &["hello", "hi", "hey"],
        handler: greeting,
    },
];

fn find_rule(text: &str) -> Option<&'static Rule> {
    let lowered = text.to_lowercase();
    RULES.iter().find(|rule| rule.matches(&lowered))
}

/// Category a message would be answered with
pub fn classify_query(text: &str) -> Category {
    find_rule(text).map_or(Category::Fallback, |rule| rule.category)
}

/// Answer a single user message against a sensor snapshot.
///
/// Pure and total: the same `(text, ctx)` always yields the same reply, and
/// unmatched or empty input gets the fallback text.
pub fn respond(text: &str, ctx: &SensorContext) -> String {
    match find_rule(text) {
        Some(rule) => {
            tracing::debug!("Message routed to {} rule", rule.category.display_text());
            (rule.handler)(ctx)
        }
        None => {
            tracing::debug!("No rule matched, using fallback");
            FALLBACK_RESPONSE.to_string()
        }
    }
}
