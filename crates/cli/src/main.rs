//! Interactive command-line front end
//!
//! Reads user messages line by line from stdin and prints one assistant
//! reply per message. The session and its transcript live for the
//! lifetime of the process; nothing is persisted.

use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use banking_agent_agent::Session;
use banking_agent_config::{load_settings, Settings};
use banking_agent_llm::{OllamaConfig, OllamaProcessBackend};
use banking_agent_prefilter::Classifier;

/// Initialize tracing from settings; `RUST_LOG` overrides the
/// configured level when set.
fn init_tracing(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.observability.log_level));

    if settings.observability.log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let env = std::env::var("BANKING_AGENT_ENV").ok();
    let settings = match load_settings(env.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load configuration ({e}), falling back to defaults");
            Settings::default()
        }
    };

    init_tracing(&settings);
    tracing::info!(
        model = %settings.model.name,
        binary = %settings.model.binary,
        "Starting banking assistant"
    );

    let backend = Arc::new(OllamaProcessBackend::new(OllamaConfig {
        binary: settings.model.binary.clone(),
        model: settings.model.name.clone(),
        timeout: Duration::from_secs(settings.model.timeout_secs),
    }));

    if !backend.is_available().await {
        tracing::warn!(
            binary = %settings.model.binary,
            "Model runner not reachable; queries that need the model will fail"
        );
    }

    let classifier = Classifier::new(settings.prefilter.greeting_threshold);
    let mut session = Session::new(classifier, backend);

    println!("Banking assistant ready. Type a message, or press Ctrl-D to exit.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let reply = session.respond(input).await;
        println!("{reply}");
    }

    tracing::info!(
        session_id = %session.id(),
        turns = session.transcript().len(),
        "Session ended"
    );
    Ok(())
}
