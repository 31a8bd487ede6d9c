//! Command handlers for the arena context.
//!
//! This module contains application-level command handler functions that
//! orchestrate domain logic: validate, mutate the session, report.

use clash_core::clock::Clock;
use clash_core::command::Command;
use clash_core::error::DomainError;
use clash_core::event::DomainEvent;
use clash_core::ids::IdGenerator;
use tracing::{info, instrument, warn};

use crate::domain::aggregates::ArenaSession;
use crate::domain::commands::DispatchAction;
use crate::domain::events::ActionRecord;

/// Handles the `DispatchAction` command: credits the team, records the
/// action in the log and returns the new record.
///
/// A rejected action leaves the session untouched and is logged at `warn`;
/// callers that treat rejections as no-ops may simply drop the error.
///
/// # Errors
///
/// Returns `DomainError::InvalidAction` if the label is blank or the points
/// are not a valid positive amount.
#[instrument(
    skip_all,
    fields(
        command = command.command_type(),
        session_id = %session.id,
        correlation_id = %command.correlation_id(),
        team = %command.team,
    )
)]
pub fn handle_dispatch_action(
    command: &DispatchAction,
    session: &mut ArenaSession,
    clock: &dyn Clock,
    ids: &mut dyn IdGenerator,
) -> Result<ActionRecord, DomainError> {
    match session.dispatch(command, clock, ids) {
        Ok(record) => {
            let scores = session.scores();
            info!(
                event_type = record.event_type(),
                record_id = %record.event_id(),
                points = record.points(),
                gold_score = scores.gold,
                premium_score = scores.premium,
                "action recorded"
            );
            Ok(record)
        }
        Err(err) => {
            warn!(points = command.points, error = %err, "action rejected");
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use clash_core::aggregate::AggregateRoot;
    use clash_core::error::DomainError;
    use clash_test_support::{FixedClock, SequentialIdGenerator, fixed_now};
    use uuid::Uuid;

    use crate::application::command_handlers::handle_dispatch_action;
    use crate::domain::aggregates::ArenaSession;
    use crate::domain::commands::{ActionDescriptor, DispatchAction};
    use crate::domain::team::Team;

    #[test]
    fn test_handle_dispatch_action_returns_recorded_action() {
        // Arrange
        let clock = FixedClock(fixed_now());
        let mut ids = SequentialIdGenerator::new();
        let mut session = ArenaSession::new(Uuid::new_v4());
        let descriptor = ActionDescriptor {
            label: "Funny message".to_owned(),
            points: 1,
        };
        let command = DispatchAction::from_descriptor(Team::Gold, &descriptor, Uuid::new_v4());

        // Act
        let record = handle_dispatch_action(&command, &mut session, &clock, &mut ids).unwrap();

        // Assert
        assert_eq!(record.team(), Team::Gold);
        assert_eq!(record.points(), 1);
        assert_eq!(record.correlation_id(), command.correlation_id);
        assert_eq!(session.scores().gold, 1);
        assert_eq!(session.version(), 1);
    }

    #[test]
    fn test_handle_dispatch_action_propagates_rejection() {
        // Arrange
        let clock = FixedClock(fixed_now());
        let mut ids = SequentialIdGenerator::new();
        let mut session = ArenaSession::new(Uuid::new_v4());
        let command = DispatchAction {
            correlation_id: Uuid::new_v4(),
            team: Team::Premium,
            label: "Nothing".to_owned(),
            points: 0,
        };

        // Act
        let result = handle_dispatch_action(&command, &mut session, &clock, &mut ids);

        // Assert
        match result {
            Err(DomainError::InvalidAction(msg)) => {
                assert_eq!(msg, "points must be positive, got 0");
            }
            other => panic!("expected InvalidAction, got {other:?}"),
        }
        assert_eq!(session.version(), 0);
        assert!(session.log().is_empty());
    }
}
