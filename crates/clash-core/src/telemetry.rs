//! Tracing subscriber setup for hosts embedding the arena.

use tracing_subscriber::EnvFilter;

use crate::error::DomainError;

/// Builds the log filter: `RUST_LOG` when set, otherwise `default_directive`.
///
/// # Errors
///
/// Returns `DomainError::Telemetry` if `default_directive` is needed and does
/// not parse.
pub fn env_filter(default_directive: &str) -> Result<EnvFilter, DomainError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => parse_filter(default_directive),
    }
}

/// Parses a filter directive such as `info` or `clash_arena=debug`.
///
/// # Errors
///
/// Returns `DomainError::Telemetry` if the directive does not parse.
pub fn parse_filter(directive: &str) -> Result<EnvFilter, DomainError> {
    EnvFilter::try_new(directive)
        .map_err(|e| DomainError::Telemetry(format!("invalid log filter: {e}")))
}

/// Installs a global JSON `fmt` subscriber.
///
/// # Errors
///
/// Returns `DomainError::Telemetry` if the filter is invalid or a global
/// subscriber has already been set.
pub fn init_tracing(default_directive: &str) -> Result<(), DomainError> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_directive)?)
        .json()
        .try_init()
        .map_err(|e| DomainError::Telemetry(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_filter_accepts_level_directive() {
        assert!(env_filter("info").is_ok());
    }

    #[test]
    fn test_parse_filter_keeps_target_directive() {
        let filter = parse_filter("clash_arena=debug").unwrap();
        assert_eq!(filter.to_string(), "clash_arena=debug");
    }

    #[test]
    fn test_parse_filter_rejects_unknown_level() {
        match parse_filter("clash_arena=loudest") {
            Err(DomainError::Telemetry(msg)) => assert!(msg.starts_with("invalid log filter")),
            other => panic!("expected Telemetry error, got {other:?}"),
        }
    }

    #[test]
    fn test_init_tracing_twice_reports_telemetry_error() {
        // Arrange
        let _ = init_tracing("debug");

        // Act
        let second = init_tracing("debug");

        // Assert
        match second {
            Err(DomainError::Telemetry(_)) => {}
            other => panic!("expected Telemetry error, got {other:?}"),
        }
    }
}
