//! Configuration loading and management
//!
//! Configuration is loaded from `~/.config/daylabel/config.toml`
//!
//! This module follows the XDG Base Directory Specification:
//! - Config: `$XDG_CONFIG_HOME/daylabel/` (~/.config/daylabel/)
//! - State/Logs: `$XDG_STATE_HOME/daylabel/` (~/.local/state/daylabel/)

use crate::error::{Error, Result};
use crate::zone::Zone;
use chrono::format::{Item, StrftimeItems};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Returns a best-effort home directory path.
fn home_dir() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Returns XDG_CONFIG_HOME or ~/.config
fn xdg_config_home() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".config"))
}

/// Returns XDG_STATE_HOME or ~/.local/state
fn xdg_state_home() -> PathBuf {
    std::env::var("XDG_STATE_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".local/state"))
}

/// Main configuration struct
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// Divider label strings and thresholds
    #[serde(default)]
    pub labels: LabelConfig,

    /// Calendar used for day comparisons
    #[serde(default)]
    pub calendar: CalendarConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Strings and thresholds used by [`crate::DateLabeler`]
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct LabelConfig {
    /// Label for instants on the same calendar day as now
    #[serde(default = "default_today")]
    pub today: String,

    /// Label for instants on the calendar day before now
    #[serde(default = "default_yesterday")]
    pub yesterday: String,

    /// Template for recent instants; `{n}` is replaced by the day count
    #[serde(default = "default_days_ago")]
    pub days_ago: String,

    /// Largest elapsed day count that still uses the `days_ago` template
    #[serde(default = "default_recent_days")]
    pub recent_days: u32,

    /// strftime format for older instants
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            today: default_today(),
            yesterday: default_yesterday(),
            days_ago: default_days_ago(),
            recent_days: default_recent_days(),
            date_format: default_date_format(),
        }
    }
}

impl LabelConfig {
    /// Validate configuration, returning error message if invalid
    pub fn validate(&self) -> Result<()> {
        if self.recent_days == 0 {
            return Err(Error::Config(
                "labels.recent_days must be at least 1".to_string(),
            ));
        }
        if !self.days_ago.contains("{n}") {
            return Err(Error::Config(
                "labels.days_ago must contain the {n} placeholder".to_string(),
            ));
        }
        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(Error::Config(format!(
                "labels.date_format is not a valid strftime format: {:?}",
                self.date_format
            )));
        }
        Ok(())
    }
}

fn default_today() -> String {
    "Today".to_string()
}

fn default_yesterday() -> String {
    "Yesterday".to_string()
}

fn default_days_ago() -> String {
    "{n} days ago".to_string()
}

fn default_recent_days() -> u32 {
    7
}

/// Full month name, unpadded day, year ("June 1, 2025")
pub const DEFAULT_DATE_FORMAT: &str = "%B %-d, %Y";

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

/// Calendar configuration
#[derive(Debug, Deserialize, Default)]
pub struct CalendarConfig {
    /// "local", "utc", or a fixed offset such as "+02:00"
    #[serde(default)]
    pub zone: Zone,
}

/// Logging configuration
#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Maximum number of log files to keep
    #[serde(default = "default_max_log_files")]
    pub max_files: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            max_files: default_max_log_files(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_max_log_files() -> usize {
    5
}

impl Config {
    /// Load configuration from the default path
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            tracing::info!("No config file found at {:?}, using defaults", config_path);
            return Ok(Config::default());
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read config file {:?}: {}", path, e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;

        config.labels.validate()?;
        tracing::debug!(path = %path.display(), zone = %config.calendar.zone, "Loaded config");

        Ok(config)
    }

    /// Returns the default config file path
    ///
    /// `$XDG_CONFIG_HOME/daylabel/config.toml` (~/.config/daylabel/config.toml)
    pub fn config_path() -> PathBuf {
        xdg_config_home().join("daylabel").join("config.toml")
    }

    /// Returns the state directory path (for logs)
    ///
    /// `$XDG_STATE_HOME/daylabel/` (~/.local/state/daylabel/)
    pub fn state_dir() -> PathBuf {
        xdg_state_home().join("daylabel")
    }
}
