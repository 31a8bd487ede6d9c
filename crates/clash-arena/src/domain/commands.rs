//! Commands for the arena context.

use clash_core::command::Command;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::team::Team;

/// An action a team can perform, as supplied by the host's action catalog.
///
/// Points stay a raw integer here so that a bad catalog entry is rejected
/// at dispatch rather than at load time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionDescriptor {
    /// Human-readable action description.
    pub label: String,
    /// Points the action awards.
    pub points: i64,
}

/// Command to credit a team for an action and log it.
#[derive(Debug, Clone)]
pub struct DispatchAction {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The team performing the action.
    pub team: Team,
    /// Human-readable action description.
    pub label: String,
    /// Points to award. Must be positive.
    pub points: i64,
}

impl DispatchAction {
    /// Builds a dispatch for `team` from a catalog entry.
    #[must_use]
    pub fn from_descriptor(
        team: Team,
        descriptor: &ActionDescriptor,
        correlation_id: Uuid,
    ) -> Self {
        Self {
            correlation_id,
            team,
            label: descriptor.label.clone(),
            points: descriptor.points,
        }
    }
}

impl Command for DispatchAction {
    fn command_type(&self) -> &'static str {
        "arena.dispatch_action"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_descriptor_copies_catalog_entry() {
        // Arrange
        let descriptor = ActionDescriptor {
            label: "Funny message".to_owned(),
            points: 1,
        };
        let correlation_id = Uuid::new_v4();

        // Act
        let command = DispatchAction::from_descriptor(Team::Premium, &descriptor, correlation_id);

        // Assert
        assert_eq!(command.team, Team::Premium);
        assert_eq!(command.label, "Funny message");
        assert_eq!(command.points, 1);
        assert_eq!(command.correlation_id(), correlation_id);
        assert_eq!(command.command_type(), "arena.dispatch_action");
    }

    #[test]
    fn test_descriptor_rejects_fractional_points_when_deserializing() {
        let result: Result<ActionDescriptor, _> =
            serde_json::from_str(r#"{"label": "Half point", "points": 0.5}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_descriptor_catalog_loads_from_yaml() {
        let yaml = "- label: Funny message\n  points: 1\n- label: Hot take\n  points: 3\n";
        let catalog: Vec<ActionDescriptor> = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog[1].points, 3);
    }
}
