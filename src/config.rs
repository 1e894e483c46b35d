//! Configuration module for the notice board.

use serde::Deserialize;
use std::path::Path;

use chrono_tz::Tz;

use crate::{NoticeError, Result};

/// Environment variable overriding the announcements table path.
pub const ENV_ANNOUNCEMENTS_PATH: &str = "NOTICEBOARD_ANNOUNCEMENTS";

/// Environment variable overriding the user table path.
pub const ENV_USERS_PATH: &str = "NOTICEBOARD_USERS";

/// Board presentation configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct BoardConfig {
    /// Title shown above the announcement list.
    #[serde(default = "default_board_name")]
    pub name: String,
    /// Timezone used to pick "today" for new announcements (e.g., "UTC").
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

fn default_board_name() -> String {
    "Event and Announcement Board".to_string()
}

fn default_timezone() -> String {
    "UTC".to_string()
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            name: default_board_name(),
            timezone: default_timezone(),
        }
    }
}

/// Flat-file storage configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Path to the announcements table.
    #[serde(default = "default_announcements_path")]
    pub announcements_path: String,
    /// Path to the user credentials table.
    #[serde(default = "default_users_path")]
    pub users_path: String,
}

fn default_announcements_path() -> String {
    "announcements.csv".to_string()
}

fn default_users_path() -> String {
    "user_data.csv".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            announcements_path: default_announcements_path(),
            users_path: default_users_path(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Path to the log file.
    #[serde(default = "default_log_file")]
    pub file: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file() -> String {
    "logs/noticeboard.log".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: default_log_file(),
        }
    }
}

/// Terminal configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct TerminalConfig {
    /// Hide password input when stdin is a terminal.
    #[serde(default = "default_mask_passwords")]
    pub mask_passwords: bool,
}

fn default_mask_passwords() -> bool {
    true
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            mask_passwords: default_mask_passwords(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// Board presentation.
    #[serde(default)]
    pub board: BoardConfig,
    /// Backing table locations.
    #[serde(default)]
    pub storage: StorageConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Terminal configuration.
    #[serde(default)]
    pub terminal: TerminalConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(NoticeError::Io)?;
        Self::parse(&content)
    }

    /// Load configuration from a TOML file and apply environment variable overrides.
    pub fn load_with_env<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| NoticeError::Config(format!("config parse error: {e}")))
    }

    /// Apply environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `NOTICEBOARD_ANNOUNCEMENTS`: announcements table path
    /// - `NOTICEBOARD_USERS`: user credentials table path
    pub fn apply_env_overrides(&mut self) {
        if let Ok(path) = std::env::var(ENV_ANNOUNCEMENTS_PATH) {
            if !path.is_empty() {
                self.storage.announcements_path = path;
            }
        }
        if let Ok(path) = std::env::var(ENV_USERS_PATH) {
            if !path.is_empty() {
                self.storage.users_path = path;
            }
        }
    }

    /// Validate the configuration.
    ///
    /// Returns an error if a storage path is empty or the timezone is unknown.
    pub fn validate(&self) -> Result<()> {
        if self.storage.announcements_path.trim().is_empty() {
            return Err(NoticeError::Config(
                "storage.announcements_path must not be empty".to_string(),
            ));
        }
        if self.storage.users_path.trim().is_empty() {
            return Err(NoticeError::Config(
                "storage.users_path must not be empty".to_string(),
            ));
        }
        self.timezone()?;
        Ok(())
    }

    /// Parsed board timezone.
    pub fn timezone(&self) -> Result<Tz> {
        self.board.timezone.parse::<Tz>().map_err(|_| {
            NoticeError::Config(format!("unknown timezone: {}", self.board.timezone))
        })
    }
}
