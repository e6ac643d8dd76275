//! Schema migration runner.
//!
//! Applies, reverts or lists migrations against the configured database
//! without starting the HTTP server.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use spodemy::{
    config::ConfigLoader,
    db::init_pool,
    migration::{Migrator, MigratorTrait},
    telemetry::init_tracing,
};

#[derive(Parser)]
#[command(name = "migrate", about = "Manage the Spodemy database schema")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Apply pending migrations (all of them unless --steps is given)
    Up {
        #[arg(short = 'n', long = "steps")]
        steps: Option<u32>,
    },
    /// Revert applied migrations, newest first (one unless --steps is given)
    Down {
        #[arg(short = 'n', long = "steps", default_value_t = 1)]
        steps: u32,
    },
    /// List applied and pending migrations
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = ConfigLoader::new()
        .load()
        .context("Failed to load configuration")?;
    init_tracing(&config)?;

    let db = init_pool(&config).await?;

    match cli.command {
        Command::Up { steps } => {
            Migrator::up(&db, steps).await.context("Migration up failed")?;
            tracing::info!(?steps, "Migrations applied");
        }
        Command::Down { steps } => {
            Migrator::down(&db, Some(steps))
                .await
                .context("Migration down failed")?;
            tracing::info!(steps, "Migrations reverted");
        }
        Command::Status => {
            for migration in Migrator::get_applied_migrations(&db).await? {
                println!("applied  {}", migration.name());
            }
            for migration in Migrator::get_pending_migrations(&db).await? {
                println!("pending  {}", migration.name());
            }
        }
    }

    Ok(())
}
