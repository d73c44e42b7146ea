//! Demo entrypoint.
//!
//! Seeds the tracking store with mock analytics data, runs the scripted
//! walkthrough when demo mode is enabled, and prints the aggregated
//! dashboard view.

use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use ai_navigator::adapters::analytics::{MockDataGenerator, TrackingStore};
use ai_navigator::application::ChatSession;
use ai_navigator::config::AppConfig;
use ai_navigator::ports::EventSink;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    info!(version = env!("CARGO_PKG_VERSION"), "ai-navigator starting");

    let store = Arc::new(seed_store(&config));
    info!(
        sessions = store.sessions()?.len(),
        "tracking store seeded with mock analytics"
    );

    if config.demo.enabled && config.demo.auto {
        run_walkthrough(&config, store.clone()).await?;
    } else {
        warn!("demo mode disabled; set AI_NAVIGATOR__DEMO__ENABLED=true for a walkthrough");
    }

    let stats = store.aggregate_stats()?;
    println!("{}", serde_json::to_string_pretty(&stats)?);

    Ok(())
}

fn seed_store(config: &AppConfig) -> TrackingStore {
    let mut generator = match config.analytics.mock_seed {
        Some(seed) => MockDataGenerator::with_seed(seed),
        None => MockDataGenerator::from_entropy(),
    };
    let (sessions, interactions) = generator.fixtures(config.analytics.mock_session_count);
    TrackingStore::with_fixtures(sessions, interactions)
}

async fn run_walkthrough(
    config: &AppConfig,
    store: Arc<TrackingStore>,
) -> Result<(), Box<dyn std::error::Error>> {
    let sink: Arc<dyn EventSink> = store;
    let mut session = ChatSession::open(config, sink, None).await?;
    let outcome = session.run_demo_auto().await?;

    for message in session.transcript() {
        info!(sender = ?message.sender(), content = message.content(), "transcript");
    }
    if let Some(rec) = outcome.recommendation {
        println!("{}", serde_json::to_string_pretty(&rec)?);
    }
    session.close().await?;
    Ok(())
}
