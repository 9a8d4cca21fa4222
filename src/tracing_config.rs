//! Logging initialisation.
//!
//! `RUST_LOG` always wins; otherwise the level from the settings file is used.
//! `STANDBY_LOG_FORMAT=json` switches every layer to JSON output.

use std::{env, io};

use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{Builder, Rotation},
};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    Result, StandbyError,
    config::{ConfigPaths, LogLevel},
};

const DAYS_TO_KEEP: usize = 7;

fn env_filter(default_level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level.as_directive()))
}

fn json_requested() -> bool {
    env::var("STANDBY_LOG_FORMAT").is_ok_and(|format| format == "json")
}

/// Initialize tracing for one-shot CLI commands
///
/// Logs go to stderr so command output on stdout stays clean. Only warnings
/// and errors are shown unless `RUST_LOG` says otherwise.
///
/// # Errors
/// Returns error if a global subscriber is already installed
pub fn init_cli_mode() -> Result<()> {
    let registry = tracing_subscriber::registry().with(env_filter(LogLevel::Warn));

    let result = if json_requested() {
        registry
            .with(fmt::layer().json().with_writer(io::stderr))
            .try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(io::stderr),
            )
            .try_init()
    };

    result.map_err(|e| StandbyError::Logging(e.to_string()))
}

/// Initialize tracing with file output
///
/// Used by the long-running preview and widget modes. Writes to stderr and to
/// a daily rolling file in the log directory. The returned guard flushes the
/// file writer when dropped and must be held for the life of the process.
///
/// # Errors
/// Returns error if the log directory or file cannot be created, or if a
/// global subscriber is already installed
pub fn init_with_file(level: LogLevel) -> Result<WorkerGuard> {
    let log_dir = ConfigPaths::log_dir()?;

    let file_appender = Builder::new()
        .rotation(Rotation::DAILY)
        .max_log_files(DAYS_TO_KEEP)
        .filename_prefix("standby-clock")
        .filename_suffix("log")
        .build(&log_dir)
        .map_err(|e| StandbyError::Logging(e.to_string()))?;
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let registry = tracing_subscriber::registry().with(env_filter(level));

    let result = if json_requested() {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_level(true)
                    .with_writer(io::stderr),
            )
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_level(true)
                    .with_writer(non_blocking)
                    .with_ansi(false),
            )
            .try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    .pretty()
                    .with_target(true)
                    .with_level(true)
                    .with_thread_names(true)
                    .with_writer(io::stderr),
            )
            .with(
                fmt::layer()
                    .compact()
                    .with_target(true)
                    .with_level(true)
                    .with_writer(non_blocking)
                    .with_ansi(false),
            )
            .try_init()
    };

    result.map_err(|e| StandbyError::Logging(e.to_string()))?;

    Ok(guard)
}
