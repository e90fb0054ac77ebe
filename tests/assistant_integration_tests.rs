//! Assistant Integration Tests
//!
//! Drives the assistant through the public API against the built-in FZ-402
//! snapshot and a config-loaded variant.

use chrono::{DateTime, Utc};
use sporacle_core::assistant::{
    classify_query, Category, ChatSession, Sender, FALLBACK_RESPONSE, NO_ANOMALY_RESPONSE,
};
use sporacle_core::context::{fz402_pinning, fz402_recovered};
use sporacle_core::tasks::{alerts_from_context, demo_board, TaskStatus};
use sporacle_core::{respond, Classifier, FarmConfig, Severity};

// Prompts covering every category, in rule order
const PROMPTS: &[(&str, Category)] = &[
    ("How is chamber FZ-402 doing?", Category::Status),
    ("CO2?", Category::Co2),
    ("what's the humidity", Category::Humidity),
    ("temp", Category::Temperature),
    ("predict the next 45 minutes", Category::Prediction),
    ("any contamination?", Category::Contamination),
    ("hey", Category::Greeting),
    ("xyzabc", Category::Fallback),
];

fn now() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(1_700_000_000, 0).unwrap()
}

#[test]
fn test_prompt_categories() {
    for (prompt, expected) in PROMPTS {
        assert_eq!(classify_query(prompt), *expected, "prompt: {}", prompt);
    }
}

#[test]
fn test_every_category_answers() {
    let ctx = fz402_pinning();
    for (prompt, _) in PROMPTS {
        assert!(!respond(prompt, &ctx).is_empty(), "empty reply for {}", prompt);
    }
}

#[test]
fn test_co2_status_question() {
    let reply = respond("What's the CO2 status?", &fz402_pinning());
    assert!(reply.starts_with("Analysis for Chamber FZ-402"));
    assert!(reply.contains("1250"));
    assert!(reply.contains("Increase fresh air exchange (FAE)"));
}

#[test]
fn test_status_follows_context() {
    let reply = respond("status", &fz402_recovered());
    assert!(reply.contains("within optimal parameters"));
}

#[test]
fn test_prediction_from_history() {
    let reply = respond("show me the trend", &fz402_pinning());
    assert!(reply.contains("+50 PPM/10min"));
    assert!(reply.contains("1475 PPM"));
}

#[test]
fn test_contamination_screen_on_demo_history() {
    // "check" belongs to the status rule, which is tried first
    assert_eq!(classify_query("mold check?"), Category::Status);
    assert_eq!(respond("is it clean", &fz402_pinning()), NO_ANOMALY_RESPONSE);
}

#[test]
fn test_fallback_and_idempotence() {
    let ctx = fz402_pinning();
    assert_eq!(respond("xyzabc", &ctx), FALLBACK_RESPONSE);
    for (prompt, _) in PROMPTS {
        assert_eq!(respond(prompt, &ctx), respond(prompt, &ctx));
    }
}

#[test]
fn test_chat_round_trip() {
    let ctx = fz402_pinning();
    let classifier = Classifier::default();
    let mut session = ChatSession::new();

    session.open(&ctx, &classifier, now());
    assert!(session.messages()[0].text.contains("Chamber FZ-402"));

    session.submit("co2", &ctx, now());
    session.submit("", &ctx, now());
    session.submit("hello", &ctx, now());

    let senders: Vec<Sender> = session.messages().iter().map(|m| m.sender).collect();
    assert_eq!(
        senders,
        vec![Sender::Bot, Sender::User, Sender::Bot, Sender::User, Sender::Bot]
    );
    assert_eq!(session.suggested_prompts().len(), 6);

    session.close();
    assert!(session.messages().is_empty());
}

#[test]
fn test_alerts_feed_task_board() {
    let ctx = fz402_pinning();
    let mut board = demo_board(now());
    board.raise_alerts(alerts_from_context(&ctx, &Classifier::default(), now()));
    assert_eq!(board.alerts().len(), 5);

    let critical = board
        .alerts()
        .iter()
        .find(|a| a.severity == Severity::Critical && a.chamber.starts_with("FZ-402"))
        .unwrap()
        .id
        .clone();
    let task = board.assign_alert(&critical, Some("w3"), now()).unwrap();
    assert_eq!(task.status, TaskStatus::Pending);
    assert_eq!(task.assigned_to.as_deref(), Some("Alex T."));
    assert!(task.description.starts_with("CO2 above 1000 PPM (1250 PPM). Suggested: "));
    assert_eq!(board.open_task_count(), 3);
}

#[test]
fn test_config_context_drives_replies() {
    let json = r#"{"context": {
        "chamber_id": "B-7", "variety": "Shiitake", "phase": "Fruiting",
        "sensors": {"temp": 17, "humidity": 88, "co2": 900, "airflow": 120},
        "thresholds": {
            "temp": {"min": 12, "ideal": 16, "max": 20},
            "humidity": {"min": 80, "ideal": 85, "max": 90},
            "co2": {"min": 400, "ideal": 600, "max": 1000}
        }
    }}"#;
    let config = FarmConfig::from_json(json).unwrap();

    assert_eq!(
        respond("status", &config.context),
        "Chamber B-7 is currently within optimal parameters for Shiitake in the Fruiting phase."
    );
    assert!(respond("trend", &config.context).starts_with("Prediction unavailable"));
}
