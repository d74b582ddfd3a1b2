//! Logging Infrastructure
//!
//! Console logging (plain or JSON) plus an optional daily rotating file
//! (`floor.YYYY-MM-DD`) with age-based cleanup.

use std::fs;
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::FloorConfig;

/// Prefix of rotated log files
pub const LOG_FILE_PREFIX: &str = "floor";

/// Delete rotated log files older than `keep_days`
///
/// Returns the number of files removed. Files not matching
/// `floor.YYYY-MM-DD` are left alone.
pub fn cleanup_old_logs(log_dir: &Path, keep_days: i64) -> anyhow::Result<usize> {
    let cutoff = chrono::Local::now().date_naive() - chrono::Duration::days(keep_days);
    let mut removed = 0;

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
            tracing::info!(file = %name, "Deleted old log file");
            removed += 1;
        }
    }

    Ok(removed)
}

/// Initialize the logging system
///
/// # Arguments
/// * `level` - Log level (e.g., "info", "debug"); `RUST_LOG` wins when set
/// * `json_format` - JSON console output (production)
/// * `log_dir` - Optional directory for daily rotating JSON log files
pub fn init_logger_with_file(level: &str, json_format: bool, log_dir: Option<&Path>) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let console_layer = if json_format {
        fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .with_thread_ids(true)
            .boxed()
    } else {
        fmt::layer().with_target(true).boxed()
    };

    let file_layer = match log_dir {
        Some(dir) => {
            fs::create_dir_all(dir)?;
            let appender = RollingFileAppender::new(Rotation::DAILY, dir, LOG_FILE_PREFIX);
            Some(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
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

/// Initialize the logging system (console only)
pub fn init_logger(level: &str, json_format: bool) -> anyhow::Result<()> {
    init_logger_with_file(level, json_format, None)
}

/// Initialize logging from a [`FloorConfig`]
pub fn init_from_config(config: &FloorConfig) -> anyhow::Result<()> {
    init_logger_with_file(
        &config.log_level,
        config.log_json,
        config.log_dir.as_deref().map(Path::new),
    )
}
