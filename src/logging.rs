//! File logging
//!
//! The terminal belongs to the UI while it runs, so log output goes to a
//! date-stamped file under the project data directory instead of stderr.

use color_eyre::Result;
use std::fs;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{self, LoggingConfig};

/// Directory holding the log files
pub fn logs_dir() -> Result<PathBuf> {
    Ok(config::project_dirs()?.data_local_dir().join("logs"))
}

fn log_file_name() -> String {
    format!("lobby-{}.log", chrono::Local::now().format("%Y-%m-%d"))
}

/// Installs the global subscriber. Keep the guard alive until exit so buffered
/// lines are flushed.
pub fn init(settings: &LoggingConfig) -> Result<WorkerGuard> {
    let dir = logs_dir()?;
    fs::create_dir_all(&dir)?;

    let appender = tracing_appender::rolling::never(&dir, log_file_name());
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .try_init()?;

    tracing::info!(dir = %dir.display(), "logging started");
    Ok(guard)
}
