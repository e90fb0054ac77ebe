//! Chat Session
//!
//! Append-only transcript for one open chat window. Opening an empty session
//! posts a greeting that summarizes current deviations; closing clears it.

use std::time::Duration;

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Serialize;

use super::faq::{suggested_prompts, FaqEntry};
use super::rules::respond;
use crate::context::SensorContext;
use crate::severity::{worst_of, Classifier, Severity};

/// Bounds of the cosmetic "thinking" pause, in seconds
pub const THINKING_DELAY_SECS: (f64, f64) = (1.2, 2.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMessage {
    pub id: String,
    pub sender: Sender,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    next_id: u64,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Post the opening greeting if the transcript is empty
    pub fn open(&mut self, ctx: &SensorContext, classifier: &Classifier, now: DateTime<Utc>) {
        if self.messages.is_empty() {
            let text = opening_greeting(ctx, classifier);
            self.push(Sender::Bot, text, now);
        }
    }

    /// Append a user message and the assistant's reply.
    ///
    /// Blank input is ignored and returns `None`.
    pub fn submit(
        &mut self,
        text: &str,
        ctx: &SensorContext,
        now: DateTime<Utc>,
    ) -> Option<&ChatMessage> {
        if text.trim().is_empty() {
            tracing::debug!("Ignoring blank chat input");
            return None;
        }

        let reply = respond(text, ctx);
        self.push(Sender::User, text.to_string(), now);
        self.push(Sender::Bot, reply, now);
        self.messages.last()
    }

    /// Clear the transcript
    pub fn close(&mut self) {
        self.messages.clear();
    }

    /// FAQ prompts to offer, shown after the greeting and after each reply
    pub fn suggested_prompts(&self) -> &'static [FaqEntry] {
        match self.messages.last() {
            Some(last) if last.sender == Sender::Bot => suggested_prompts(),
            _ => &[],
        }
    }

    fn push(&mut self, sender: Sender, text: String, timestamp: DateTime<Utc>) {
        self.next_id += 1;
        self.messages.push(ChatMessage {
            id: format!("msg-{}", self.next_id),
            sender,
            text,
            timestamp,
        });
    }
}

/// Greeting naming the chamber and the sensors currently out of band
pub fn opening_greeting(ctx: &SensorContext, classifier: &Classifier) -> String {
    let deviations = ctx.deviations(classifier);
    let phase = ctx.phase.to_lowercase();

    let summary = if deviations.is_empty() {
        format!(
            "All monitored sensors are within their thresholds for the current {} {} phase.",
            ctx.variety, phase
        )
    } else {
        let labels: Vec<&str> = deviations.iter().map(|d| d.sensor.label()).collect();
        let level = match worst_of(deviations.iter().map(|d| d.severity)) {
            Severity::Critical => "critical deviations",
            _ => "deviations",
        };
        format!(
            "I've detected {} in {} for the current {} {} phase.",
            level,
            join_labels(&labels),
            ctx.variety,
            phase
        )
    };

    format!(
        "Hello. I am Sporcbot, monitoring Chamber {}. \n\n{} \n\nHow can I help you resolve this?",
        ctx.chamber_id, summary
    )
}

/// "A", "A and B", "A, B and C"
fn join_labels(labels: &[&str]) -> String {
    match labels {
        [] => String::new(),
        [only] => only.to_string(),
        [init @ .., last] => format!("{} and {}", init.join(", "), last),
    }
}

/// Cosmetic pause before showing a reply
pub fn thinking_delay<R: Rng + ?Sized>(rng: &mut R) -> Duration {
    let (low, high) = THINKING_DELAY_SECS;
    Duration::from_secs_f64(rng.gen_range(low..high))
}
