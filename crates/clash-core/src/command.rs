//! Command abstractions.

use uuid::Uuid;

/// Trait implemented by every request to change arena state.
pub trait Command: Send + Sync + std::fmt::Debug {
    /// Stable dotted name of the command, recorded in log fields.
    fn command_type(&self) -> &'static str;

    /// Correlation ID linking the command to the records and log lines it produces.
    fn correlation_id(&self) -> Uuid;
}
