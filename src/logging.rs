//! Tracing subscriber setup
//!
//! The library only emits `tracing` events; applications pick where they go.
//! Both initializers honour `RUST_LOG` and fall back to `info`.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

use crate::constants::{DEFAULT_LOG_FILTER, ENV_LOG_FILTER};
use crate::error::{FetchError, Result};

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(ENV_LOG_FILTER).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Send log output to stderr
///
/// Returns `false` when a global subscriber was already installed, in which
/// case nothing changes.
#[must_use = "false means another subscriber is already installed"]
pub fn init_stderr() -> bool {
    let init_result = tracing_subscriber::registry()
        .with(env_filter())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();

    if let Err(err) = init_result {
        tracing::warn!(error = %err, "tracing already initialized; skipping stderr setup");
        return false;
    }
    true
}

/// Send log output to `directory/file_name` through a background writer
///
/// Keep the returned guard alive for as long as logs should be flushed.
///
/// # Errors
/// [`FetchError::Configuration`] if the log file cannot be created or a
/// global subscriber is already installed.
pub fn init_file(directory: impl AsRef<Path>, file_name: &str) -> Result<WorkerGuard> {
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(directory.as_ref())
        .map_err(|e| FetchError::Configuration(format!("Failed to open log file: {e}")))?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(env_filter())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .try_init()
        .map_err(|e| FetchError::Configuration(format!("Failed to install file logger: {e}")))?;

    Ok(guard)
}
