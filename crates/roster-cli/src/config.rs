//! Configuration for the roster CLI
//!
//! Configuration is loaded with the following priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables (ROSTER_*)
//! 3. Config file (`--config`, or ~/.config/roster/config.toml)
//! 4. Default values

use std::path::{Path, PathBuf};

use roster_core::logging_facility::Profile;
use roster_core::{ExError, ExErrorKind};
use serde::{Deserialize, Serialize};

pub const ENV_DB_PATH: &str = "ROSTER_DB_PATH";
pub const ENV_LOG_PROFILE: &str = "ROSTER_LOG_PROFILE";

/// Database configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// SQLite database file
    pub path: PathBuf,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: dirs::data_dir()
                .map(|p| p.join("roster").join("roster.db"))
                .unwrap_or_else(|| PathBuf::from("roster.db")),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `development`, `production` or `test`
    pub profile: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            profile: Profile::default().as_str().to_string(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RosterConfig {
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}

impl RosterConfig {
    /// Load configuration from `path`, or from the default location
    ///
    /// An explicit path must exist. A missing default file yields the
    /// default config.
    pub fn load(path: Option<&Path>) -> Result<Self, ExError> {
        if let Some(path) = path {
            return Self::load_from_file(path);
        }

        match Self::default_config_path() {
            Some(path) if path.exists() => Self::load_from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, ExError> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            ExError::new(ExErrorKind::Io)
                .with_op("read_config")
                .with_entity_id(path.display().to_string())
                .with_message(e.to_string())
        })?;
        toml::from_str(&contents).map_err(|e| {
            ExError::new(ExErrorKind::Config)
                .with_op("parse_config")
                .with_entity_id(path.display().to_string())
                .with_message(format!("Failed to parse config: {}", e))
        })
    }

    /// Get the default config file path
    ///
    /// Returns `~/.config/roster/config.toml` on Linux
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("roster").join("config.toml"))
    }

    /// Apply environment variable overrides
    ///
    /// Supported variables:
    /// - ROSTER_DB_PATH: Database file
    /// - ROSTER_LOG_PROFILE: Logging profile
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(ENV_DB_PATH) {
            self.database.path = PathBuf::from(path);
        }

        if let Some(profile) = lookup(ENV_LOG_PROFILE) {
            self.logging.profile = profile;
        }

        self
    }

    /// Apply CLI flag overrides
    pub fn with_cli_overrides(mut self, db: Option<PathBuf>) -> Self {
        if let Some(path) = db {
            self.database.path = path;
        }
        self
    }

    /// Load configuration with all overrides applied
    ///
    /// Priority: CLI > env > config file > defaults
    pub fn load_with_overrides(path: Option<&Path>, db: Option<PathBuf>) -> Result<Self, ExError> {
        Ok(Self::load(path)?.with_env_overrides().with_cli_overrides(db))
    }

    /// Parsed logging profile
    pub fn log_profile(&self) -> Result<Profile, ExError> {
        self.logging.profile.parse()
    }
}
