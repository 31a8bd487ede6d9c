//! Configuration loading for the arena context.
//!
//! Every field has a default, so an empty document yields a working
//! configuration.

use std::path::Path;

use clash_core::error::DomainError;
use serde::Deserialize;

use crate::domain::event_log::{MAX_LOG, MAX_LOG_CAPACITY};

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        #[from]
        source: serde_yaml::Error,
    },

    /// The document parsed but holds an unusable value.
    #[error(transparent)]
    Invalid(#[from] DomainError),
}

/// Arena settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ArenaConfig {
    /// Number of records the activity log keeps.
    pub log_capacity: usize,
    /// Fallback tracing filter when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            log_capacity: MAX_LOG,
            log_filter: "info".to_owned(),
        }
    }
}

impl ArenaConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Yaml`] if it is not valid YAML, or
    /// [`ConfigError::Invalid`] if a value is out of range.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML, or
    /// [`ConfigError::Invalid`] if a value is out of range.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(yaml)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks value ranges.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Configuration` if `log_capacity` is outside
    /// `1..=MAX_LOG_CAPACITY` or `log_filter` is blank.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.log_capacity == 0 {
            return Err(DomainError::Configuration(
                "log_capacity must be at least 1".into(),
            ));
        }
        if self.log_capacity > MAX_LOG_CAPACITY {
            return Err(DomainError::Configuration(format!(
                "log_capacity must be at most {MAX_LOG_CAPACITY}, got {}",
                self.log_capacity
            )));
        }
        if self.log_filter.trim().is_empty() {
            return Err(DomainError::Configuration(
                "log_filter must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Installs the global tracing subscriber using `log_filter` as fallback.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Telemetry` if a subscriber is already installed
    /// or the filter does not parse.
    pub fn init_tracing(&self) -> Result<(), DomainError> {
        clash_core::telemetry::init_tracing(&self.log_filter)
    }
}
