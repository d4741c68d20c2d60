//! Logging Infrastructure
//!
//! Structured logging setup with support for both development and production environments.
//! Features:
//! - Pretty console output in development, JSON in production
//! - Optional daily rotating application logs (deleted after 14 days)

use std::fs;
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Application log files older than this are removed by [`cleanup_old_logs`]
pub const LOG_RETENTION_DAYS: i64 = 14;

const LOG_FILE_PREFIX: &str = "bistro-server";

/// Clean up old application log files
///
/// Daily files are named `bistro-server.YYYY-MM-DD`. Returns the number of
/// files removed.
pub fn cleanup_old_logs(log_dir: &Path, today: chrono::NaiveDate) -> anyhow::Result<usize> {
    let cutoff = today - chrono::Duration::days(LOG_RETENTION_DAYS);
    let mut removed = 0;

    if !log_dir.exists() {
        return Ok(removed);
    }

    for entry in fs::read_dir(log_dir)? {
        let path = entry?.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if let Some(date_part) = name
            .strip_prefix(LOG_FILE_PREFIX)
            .and_then(|rest| rest.strip_prefix('.'))
            && let Ok(date) = chrono::NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
            && date < cutoff
        {
            fs::remove_file(&path)?;
            removed += 1;
            tracing::info!(file = %name, "Deleted old log file");
        }
    }

    Ok(removed)
}

/// Initialize the logger (console only)
pub fn init_logger(level: &str, json_format: bool) -> anyhow::Result<()> {
    init_logger_with_file(level, json_format, None)
}

/// Initialize the logging system with optional daily rotating logs
///
/// # Arguments
/// * `level` - Log level (e.g., "info", "debug", "warn"), overridden by `RUST_LOG`
/// * `json_format` - Whether to use JSON format (true for production, false for development)
/// * `log_dir` - Optional directory for file logging
pub fn init_logger_with_file(
    level: &str,
    json_format: bool,
    log_dir: Option<&str>,
) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let console_layer = if json_format {
        fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .with_file(true)
            .with_line_number(true)
            .boxed()
    } else {
        fmt::layer().pretty().with_target(false).boxed()
    };

    let file_layer = match log_dir {
        Some(dir) => {
            let log_dir = Path::new(dir);
            fs::create_dir_all(log_dir)?;
            let appender = RollingFileAppender::new(Rotation::DAILY, log_dir, LOG_FILE_PREFIX);
            Some(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_writer(std::sync::Mutex::new(appender))
                    .boxed(),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()?;

    Ok(())
}
