//! Logging init: daily file under `<home>/logs`, never the terminal.
//!
//! The interactive client owns stdout/stderr, so tracing output always
//! goes to a file. If the log directory cannot be created the process
//! runs without a subscriber.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
pub use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::paths;

const LOG_FILE_PREFIX: &str = "nightvolt.log";

/// Initializes logging into the default logs directory.
///
/// Keep the returned guard alive for the lifetime of the process; dropping
/// it flushes and stops the background writer.
pub fn init(default_filter: &str) -> Result<WorkerGuard> {
    init_in(&paths::logs_dir(), default_filter)
}

/// Initializes logging into `dir`.
///
/// `RUST_LOG` wins over `default_filter` when set.
pub fn init_in(dir: &Path, default_filter: &str) -> Result<WorkerGuard> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {e}"))?;

    tracing::info!("logging initialized at {}", dir.display());
    Ok(guard)
}
