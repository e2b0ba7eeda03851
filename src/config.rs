//! Configuration for datekit
//!
//! Nothing here changes what the helpers in [`crate::dates`] compute. A
//! [`Config`] only picks the date format of [`WorkSchedule`](crate::schedule::WorkSchedule)s
//! built with `from_config` and the logger installed by
//! [`setup_logging`](crate::logger::setup_logging).

use crate::constants::{DEFAULT_LOG_LEVEL, SCHEDULE_DATE_FORMAT};
use crate::logger;
use anyhow::{Context, Result};
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub formats: FormatConfig,
    pub logging: LoggingConfig,
}

/// Date format configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// Date format for work schedule input and output
    pub schedule_date_format: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging
    pub enabled: bool,
    /// Minimum level: "off", "error", "warn", "info", "debug" or "trace"
    pub level: String,
    /// Log file; stderr when unset
    pub file: Option<PathBuf>,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            schedule_date_format: SCHEDULE_DATE_FORMAT.to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: DEFAULT_LOG_LEVEL.to_string(),
            file: None,
        }
    }
}

impl Config {
    /// Parse and validate a TOML document; missing keys take their defaults
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).context("Failed to parse config")?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        Self::from_toml(&content).with_context(|| format!("Invalid config file: {}", path.as_ref().display()))
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let format = &self.formats.schedule_date_format;
        if format.trim().is_empty() {
            anyhow::bail!("schedule_date_format cannot be empty");
        }
        if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
            anyhow::bail!("Invalid schedule_date_format '{}'", format);
        }

        // Schedules read dates back in, so the format must not lose the date
        let sample = chrono::NaiveDate::from_ymd_opt(2025, 1, 31).context("Invalid sample date")?;
        let rendered = sample.format(format).to_string();
        match chrono::NaiveDate::parse_from_str(&rendered, format) {
            Ok(parsed) if parsed == sample => {}
            Ok(parsed) => anyhow::bail!(
                "schedule_date_format '{}' is lossy: {} read back as {}",
                format,
                sample,
                parsed
            ),
            Err(e) => anyhow::bail!("Invalid schedule_date_format '{}': {}", format, e),
        }

        logger::level_filter(&self.logging.level).context("Invalid logging configuration")?;

        Ok(())
    }
}
