//! Logging setup
//!
//! The library itself only talks to the `log` facade. Applications that want
//! those records can install a `fern` dispatcher from a [`LoggingConfig`].

use anyhow::{Context, Result};
use chrono::Utc;
use log::LevelFilter;
use std::str::FromStr;

use crate::config::LoggingConfig;

/// Parse a level name ("off", "error", "warn", "info", "debug", "trace")
pub fn level_filter(level: &str) -> Result<LevelFilter> {
    LevelFilter::from_str(level.trim()).map_err(|_| anyhow::anyhow!("Unknown log level '{}'", level))
}

/// Render one log line as `[HH:MM:SS.mmm LEVEL target] message`
pub fn format_line(level: log::Level, target: &str, message: &std::fmt::Arguments) -> String {
    let timestamp = Utc::now().format("%H:%M:%S%.3f");
    format!("[{} {} {}] {}", timestamp, level, target, message)
}

/// Install the global logger described by `config`
///
/// Does nothing when logging is disabled. Records go to `config.file` when
/// set, otherwise to stderr.
///
/// # Errors
/// Fails on an unknown level, an unwritable log file, or when a global logger
/// is already installed.
pub fn setup_logging(config: &LoggingConfig) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }

    let level = level_filter(&config.level)?;
    let dispatch = fern::Dispatch::new()
        .format(|out, message, record| out.finish(format_args!("{}", format_line(record.level(), record.target(), message))))
        .level(level);

    let dispatch = match &config.file {
        Some(path) => dispatch.chain(
            fern::log_file(path).with_context(|| format!("Failed to open log file: {}", path.display()))?,
        ),
        None => dispatch.chain(std::io::stderr()),
    };

    dispatch.apply().context("Failed to install logger")?;
    log::debug!("Logging initialized at level {}", level);
    Ok(())
}
