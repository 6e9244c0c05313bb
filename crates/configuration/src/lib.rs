use crate::error::ConfigError;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod logging;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use logging::init_tracing;
pub use settings::{DatabaseSettings, ServerSettings, Settings};

/// The file looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// Loads the application settings.
///
/// Built-in defaults are layered under the TOML file, and `DATABASE_URL`
/// (from the environment or a `.env` file) overrides `database.url`. When
/// `path` is `None` the default `config.toml` is optional; an explicit path
/// must exist.
pub fn load_settings(path: Option<&Path>) -> Result<Settings, ConfigError> {
    // A missing .env file is not an error.
    dotenvy::dotenv().ok();
    let database_url = std::env::var("DATABASE_URL").ok();

    let (path, required) = match path {
        Some(path) => (path, true),
        None => (Path::new(DEFAULT_CONFIG_FILE), false),
    };
    tracing::info!(path = %path.display(), "Loading settings.");
    settings::build(path, required, database_url)
}
