// Rust guideline compliant 2026-10-19

//! Tracing subscriber setup shared by the server and the CLI.

use crate::ServerError;
use std::fs::OpenOptions;
use std::path::Path;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, EnvFilter};

/// Log line encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One JSON object per event.
    #[default]
    Json,
    /// Human-readable lines.
    Text,
}

/// Installs the global tracing subscriber.
///
/// Events go to `log_file` through a non-blocking writer when set, and to
/// stderr otherwise. `RUST_LOG`, when present, overrides `log_level`.
///
/// # Arguments
///
/// * `log_level` - One of error, warn, info, debug, trace
/// * `log_file` - Optional file to append to
/// * `format` - Line encoding
///
/// # Returns
///
/// A guard that flushes the file writer on drop, if a file is used and this
/// call installed the subscriber. When a subscriber is already installed the
/// existing one is kept and `None` is returned.
///
/// # Errors
///
/// Returns an error if the level is unknown or the file cannot be opened.
pub fn init_tracing(
    log_level: &str,
    log_file: Option<&Path>,
    format: LogFormat,
) -> Result<Option<WorkerGuard>, ServerError> {
    let level = parse_log_level(log_level)?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_string().to_lowercase()));

    if let Some(path) = log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let (writer, guard) = tracing_appender::non_blocking(file);
        let builder = fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_ansi(false)
            .with_writer(writer);
        let installed = match format {
            LogFormat::Json => tracing::subscriber::set_global_default(builder.json().finish()),
            LogFormat::Text => tracing::subscriber::set_global_default(builder.finish()),
        };
        if let Err(err) = installed {
            tracing::debug!(
                error = %err,
                log_file = %path.display(),
                "subscriber already installed, log file not attached"
            );
            return Ok(None);
        }
        return Ok(Some(guard));
    }

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);
    let installed = match format {
        LogFormat::Json => tracing::subscriber::set_global_default(builder.json().finish()),
        LogFormat::Text => tracing::subscriber::set_global_default(builder.finish()),
    };
    if let Err(err) = installed {
        tracing::debug!(error = %err, "subscriber already installed");
    }
    Ok(None)
}

fn parse_log_level(level: &str) -> Result<Level, ServerError> {
    match level.to_lowercase().as_str() {
        "error" => Ok(Level::ERROR),
        "warn" => Ok(Level::WARN),
        "info" => Ok(Level::INFO),
        "debug" => Ok(Level::DEBUG),
        "trace" => Ok(Level::TRACE),
        other => Err(ServerError::InvalidLogLevel(other.to_string())),
    }
}
