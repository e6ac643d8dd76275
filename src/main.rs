//! # Spodemy API Main Entry Point
//!
//! Loads configuration, prepares the database and serves the HTTP API.

use spodemy::{
    config::ConfigLoader,
    db, seeds,
    server::{AppState, run_server},
    telemetry::init_tracing,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration from layered env files and variables
    let config = ConfigLoader::new().load()?;

    init_tracing(&config)?;

    tracing::info!(profile = %config.profile, "Loaded configuration");
    if let Ok(redacted_json) = config.redacted_json() {
        tracing::debug!(config = %redacted_json, "Effective configuration");
    }

    let db = db::init_pool(&config).await?;

    if config.auto_migrate {
        db::run_migrations(&db).await?;
    }

    seeds::seed_all(&db, &config).await?;

    run_server(AppState::new(config, db)).await
}
