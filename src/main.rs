//! Game history API entry point.

use anyhow::{Context, Result};
use game_history::{http, seed, Config, InMemoryRepository};
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    setup_logging();

    let config = Config::from_env().context("invalid configuration")?;
    info!(
        service = %config.service_name,
        environment = %config.environment,
        version = %config.version,
        "starting"
    );

    let games = match &config.seed_path {
        Some(path) => seed::load_games(path)?,
        None => seed::sample_games(),
    };
    let repo = InMemoryRepository::with_games(games).context("failed to seed repository")?;

    http::serve(config, repo).await.context("server error")
}

fn setup_logging() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
