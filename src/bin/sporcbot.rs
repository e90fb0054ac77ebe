// Sporcbot command-line chat
//
// Purpose: Print the farm summary and answer prompts read from stdin
// Usage: cargo run --features cli --bin sporcbot
//        SPORACLE_CONFIG=farm.json cargo run --features cli --bin sporcbot

use std::io::{self, BufRead, Write};

use anyhow::Context;
use chrono::Utc;
use sporacle_core::assistant::thinking_delay;
use sporacle_core::context::dashboard_metrics;
use sporacle_core::tasks::alerts_from_context;
use sporacle_core::{progress_cards, summarize_chamber, ChatSession, FarmConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    // Default log level: info for our crate, warn for others
                    "sporacle_core=info,warn".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    // Configuration from environment variables
    let config = match std::env::var("SPORACLE_CONFIG") {
        Ok(path) => FarmConfig::load(&path)?,
        Err(_) => {
            tracing::info!("SPORACLE_CONFIG not set, using built-in demo farm");
            FarmConfig::default()
        }
    };
    let simulate_delay = std::env::var("SPORCBOT_DELAY").is_ok();
    let classifier = config.classifier()?;
    let ctx = &config.context;
    let now = Utc::now();

    // Farm summary
    let summary = summarize_chamber(&dashboard_metrics(), &classifier);
    println!("=== {} ===", summary.headline);
    for tile in &summary.tiles {
        println!("  {:<18} {:>10}  {}", tile.label, tile.display_value, tile.status.display_text());
    }

    let alerts = alerts_from_context(ctx, &classifier, now);
    if !alerts.is_empty() {
        println!();
        println!("Alerts for {}:", ctx.chamber_id);
        for alert in &alerts {
            println!("  [{}] {} -> {}", alert.severity.display_text(), alert.message, alert.action);
        }
    }

    println!();
    println!("Lifecycle progress:");
    for card in progress_cards(&config.lifecycles) {
        println!(
            "  {:<10} {:<12} day {:>3}/{:<3} {:<20} {}",
            card.chamber_id,
            card.variety_name,
            card.current_day,
            card.total_days,
            card.phase_name,
            card.remaining_label
        );
    }

    // Chat loop
    let mut session = ChatSession::new();
    session.open(ctx, &classifier, now);
    println!();
    for message in session.messages() {
        println!("Sporcbot: {}", message.text);
    }
    print_prompts(&session);

    let stdin = io::stdin();
    let mut rng = rand::thread_rng();
    loop {
        print!("> ");
        io::stdout().flush().context("Failed to flush stdout")?;

        let mut line = String::new();
        let read = stdin.lock().read_line(&mut line).context("Failed to read stdin")?;
        if read == 0 || line.trim() == "/quit" {
            break;
        }

        if simulate_delay {
            std::thread::sleep(thinking_delay(&mut rng));
        }

        if let Some(reply) = session.submit(line.trim_end(), ctx, Utc::now()) {
            println!("Sporcbot: {}", reply.text);
            print_prompts(&session);
        }
    }

    session.close();
    tracing::info!("Chat closed");
    Ok(())
}

fn print_prompts(session: &ChatSession) {
    let prompts = session.suggested_prompts();
    if prompts.is_empty() {
        return;
    }
    println!("Try asking:");
    for entry in prompts {
        println!("  - {}", entry.question);
    }
}
