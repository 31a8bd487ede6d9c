//! Domain events for the arena context.

use chrono::{DateTime, Utc};
use clash_core::event::DomainEvent;
use serde::Serialize;
use uuid::Uuid;

use super::scores::Points;
use super::team::Team;

/// Event type name for a recorded action.
pub const ACTION_RECORDED_EVENT_TYPE: &str = "arena.action_recorded";

/// Immutable record of one scoring action.
///
/// Fields are private and records can only be built inside this crate, so
/// every record in a session came through validated dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionRecord {
    id: Uuid,
    team: Team,
    label: String,
    points: Points,
    timestamp: DateTime<Utc>,
    sequence: u64,
    correlation_id: Uuid,
}

impl ActionRecord {
    /// Builds a record from already validated parts.
    #[must_use]
    pub(crate) const fn new(
        id: Uuid,
        team: Team,
        label: String,
        points: Points,
        timestamp: DateTime<Utc>,
        sequence: u64,
        correlation_id: Uuid,
    ) -> Self {
        Self {
            id,
            team,
            label,
            points,
            timestamp,
            sequence,
            correlation_id,
        }
    }

    /// Unique record identifier.
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Team credited by this action.
    #[must_use]
    pub const fn team(&self) -> Team {
        self.team
    }

    /// Human-readable action description.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Points awarded.
    #[must_use]
    pub const fn points(&self) -> u32 {
        self.points.get()
    }

    pub(crate) const fn validated_points(&self) -> Points {
        self.points
    }

    /// Creation time.
    #[must_use]
    pub const fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// 1-based position in the session's dispatch history.
    #[must_use]
    pub const fn sequence(&self) -> u64 {
        self.sequence
    }

    /// Correlation ID of the command that produced this record.
    #[must_use]
    pub const fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

impl DomainEvent for ActionRecord {
    fn event_id(&self) -> Uuid {
        self.id
    }

    fn event_type(&self) -> &'static str {
        ACTION_RECORDED_EVENT_TYPE
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

#[cfg(test)]
mod tests {
    use clash_test_support::fixed_now;

    use super::*;

    #[test]
    fn test_domain_event_view_matches_record_fields() {
        // Arrange
        let id = Uuid::from_u128(7);
        let correlation_id = Uuid::new_v4();
        let record = ActionRecord::new(
            id,
            Team::Gold,
            "Funny message".to_owned(),
            Points::new(1).unwrap(),
            fixed_now(),
            1,
            correlation_id,
        );

        // Assert
        assert_eq!(record.event_id(), id);
        assert_eq!(record.event_type(), ACTION_RECORDED_EVENT_TYPE);
        assert_eq!(record.occurred_at(), fixed_now());
        assert_eq!(record.team(), Team::Gold);
        assert_eq!(record.label(), "Funny message");
        assert_eq!(record.points(), 1);
        assert_eq!(record.sequence(), 1);
        assert_eq!(record.correlation_id(), correlation_id);
    }

    #[test]
    fn test_record_serializes_points_as_plain_integer() {
        let record = ActionRecord::new(
            Uuid::from_u128(1),
            Team::Premium,
            "Hot take".to_owned(),
            Points::new(3).unwrap(),
            fixed_now(),
            4,
            Uuid::from_u128(99),
        );

        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["points"], 3);
        assert_eq!(json["team"], "premium");
        assert_eq!(json["label"], "Hot take");
    }
}
