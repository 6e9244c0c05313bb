use crate::error::ConfigError;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "info,tower_http=debug";

/// Installs the global tracing subscriber.
///
/// Output goes through a non-blocking stdout writer so request handlers never
/// wait on the terminal. The returned guard flushes buffered lines on drop and
/// must be held for the life of the process.
pub fn init_tracing() -> Result<WorkerGuard, ConfigError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let (writer, guard) = tracing_appender::non_blocking(std::io::stdout());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_target(true)
        .try_init()
        .map_err(|e| ConfigError::Tracing(e.to_string()))?;

    Ok(guard)
}
