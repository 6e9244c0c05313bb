use anyhow::Context;
use clap::{Parser, Subcommand};
use database::{AlbumStore, DbRepository, MemoryAlbumStore};
use std::path::PathBuf;
use std::sync::Arc;
use web_server::AppState;

/// The entry point for the album service.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Held until exit so buffered log lines get flushed.
    let _log_guard = configuration::init_tracing()?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve(args) => handle_serve(args).await,
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// A small REST service for a table of music albums.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Connect to the database and serve the album API.
    Serve(ServeArgs),
}

#[derive(Parser)]
struct ServeArgs {
    /// Path to the settings file. Defaults to `config.toml` if present.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Keep albums in process memory instead of PostgreSQL.
    #[arg(long)]
    memory: bool,
}

// ==============================================================================
// Serve Command Logic
// ==============================================================================

/// Connects, verifies the database once, then serves until terminated.
///
/// A failed connection or ping ends the process; there is no retry.
async fn handle_serve(args: ServeArgs) -> anyhow::Result<()> {
    let settings = configuration::load_settings(args.config.as_deref())
        .context("Failed to load settings")?;

    let store: Arc<dyn AlbumStore> = if args.memory {
        tracing::warn!("Using the in-memory album store; data is lost on exit.");
        Arc::new(MemoryAlbumStore::new())
    } else {
        let pool = database::connect(&settings.database)
            .await
            .context("Failed to connect to the database")?;
        database::ping(&pool)
            .await
            .context("Failed to ping the database")?;
        tracing::info!("connected to database");
        Arc::new(DbRepository::new(pool))
    };

    web_server::run_server(&settings.server.address(), AppState::new(store)).await
}
