//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An action was rejected before any state changed.
    #[error("invalid action: {0}")]
    InvalidAction(String),

    /// A configuration value is out of range.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The tracing subscriber could not be installed.
    #[error("telemetry error: {0}")]
    Telemetry(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_action_display_includes_reason() {
        let err = DomainError::InvalidAction("points must be positive, got 0".into());
        assert_eq!(
            err.to_string(),
            "invalid action: points must be positive, got 0"
        );
    }

    #[test]
    fn test_configuration_display_includes_reason() {
        let err = DomainError::Configuration("log capacity must be at least 1".into());
        assert_eq!(
            err.to_string(),
            "configuration error: log capacity must be at least 1"
        );
    }
}
