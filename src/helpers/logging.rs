//! Logging setup
//!
//! Console output always; a daily rolling file when a log directory is given.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::constants::LOG_FILE_PREFIX;
use crate::error::{Error, Result};

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global tracing subscriber.
///
/// The returned guard flushes the file writer on drop and must be held for
/// the lifetime of the process.
pub fn init_logging(log_dir: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let registry = tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt::layer().with_target(false));

    let Some(dir) = log_dir else {
        registry.try_init().map_err(|e| Error::Invalid {
            message: format!("Failed to install subscriber: {e}"),
        })?;
        return Ok(None);
    };

    let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    registry
        .with(fmt::layer().with_ansi(false).with_writer(writer))
        .try_init()
        .map_err(|e| Error::Invalid {
            message: format!("Failed to install subscriber: {e}"),
        })?;

    Ok(Some(guard))
}
