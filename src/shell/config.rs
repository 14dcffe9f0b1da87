//! Session configuration.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::engine::DEFAULT_ERROR_TOKEN;

/// Errors that can occur while loading a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read
    #[error("Failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration is not valid JSON for this schema
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// A field holds a value the session cannot use
    #[error("Invalid config field '{field}': {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Settings for a [`Session`](super::Session).
///
/// Every field has a default, so a config file only needs the fields it
/// changes.
///
/// ```rust
/// use tallypad::shell::SessionConfig;
///
/// let config = SessionConfig::from_json(r#"{ "name": "Desk Calc" }"#).unwrap();
/// assert_eq!(config.name, "Desk Calc");
/// assert_eq!(config.error_token, "Error");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Name used in the welcome line
    pub name: String,
    /// Version used in the welcome line
    pub version: String,
    /// Display text after a failed evaluation
    pub error_token: String,
    /// strftime pattern for log timestamps
    pub time_format: String,
    /// Maximum number of log entries kept, unbounded if unset
    pub log_capacity: Option<usize>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            name: "Calculator".to_string(),
            version: "1.0".to_string(),
            error_token: DEFAULT_ERROR_TOKEN.to_string(),
            time_format: "%H:%M:%S".to_string(),
            log_capacity: None,
        }
    }
}

impl SessionConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Check the fields a session relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.error_token.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "error_token",
                reason: "must not be empty".to_string(),
            });
        }
        if self.log_capacity == Some(0) {
            return Err(ConfigError::Invalid {
                field: "log_capacity",
                reason: "must be at least 1".to_string(),
            });
        }
        check_time_format(&self.time_format)
    }
}

/// Reject a strftime pattern chrono cannot render.
pub(crate) fn check_time_format(pattern: &str) -> Result<(), ConfigError> {
    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return Err(ConfigError::Invalid {
            field: "time_format",
            reason: format!("'{pattern}' is not a valid strftime pattern"),
        });
    }
    Ok(())
}
