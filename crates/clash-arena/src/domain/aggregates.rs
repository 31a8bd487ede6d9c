//! Aggregate roots for the arena context.

use std::num::NonZeroUsize;

use chrono::{DateTime, Utc};
use clash_core::aggregate::AggregateRoot;
use clash_core::clock::Clock;
use clash_core::error::DomainError;
use clash_core::ids::IdGenerator;
use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

use super::commands::DispatchAction;
use super::event_log::EventLog;
use super::events::ActionRecord;
use super::metrics::{DerivedMetrics, SharePercentages};
use super::scores::{ScoreState, ScoreStore};
use super::team::Team;
use crate::config::ArenaConfig;

/// The aggregate root for one running scoreboard session.
///
/// Owns the score counters and the activity log. Both only change through
/// [`ArenaSession::dispatch`].
#[derive(Debug)]
pub struct ArenaSession {
    /// Aggregate identifier.
    pub id: Uuid,
    /// Current version (accepted actions).
    pub(crate) version: u64,
    scores: ScoreStore,
    log: EventLog,
    last_timestamp: Option<DateTime<Utc>>,
}

/// Everything a renderer needs, captured at one instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArenaSnapshot {
    /// The session identifier.
    pub session_id: Uuid,
    /// Gold's accumulated points.
    pub gold_score: u64,
    /// Premium's accumulated points.
    pub premium_score: u64,
    /// Retained records, newest first.
    pub log_entries: Vec<ActionRecord>,
    /// Score shares in percent.
    pub shares: SharePercentages,
    /// Rotation speed of the dominance indicator.
    pub rotation_speed: f64,
    /// Tilt of the dominance indicator.
    pub tension_angle: f64,
    /// Leading team, if any.
    pub leader: Option<Team>,
    /// Number of accepted actions.
    pub version: u64,
}

impl ArenaSession {
    /// Creates a session with zero scores and an empty log of default capacity.
    #[must_use]
    pub fn new(id: Uuid) -> Self {
        Self::with_log(id, EventLog::new())
    }

    /// Creates a session using the log capacity from `config`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Configuration` if `config` fails
    /// [`ArenaConfig::validate`].
    pub fn with_config(id: Uuid, config: &ArenaConfig) -> Result<Self, DomainError> {
        config.validate()?;
        let capacity = NonZeroUsize::new(config.log_capacity).ok_or_else(|| {
            DomainError::Configuration("log_capacity must be at least 1".into())
        })?;
        Ok(Self::with_log(id, EventLog::with_capacity(capacity)))
    }

    fn with_log(id: Uuid, log: EventLog) -> Self {
        Self {
            id,
            version: 0,
            scores: ScoreStore::new(),
            log,
            last_timestamp: None,
        }
    }

    /// Validates `command`, credits the team and logs a new record.
    ///
    /// The record gets a fresh id from `ids` and a timestamp from `clock`,
    /// raised to the previous record's timestamp if the clock went backwards.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidAction` if the label is blank or the
    /// points are not a valid positive amount. The session is unchanged.
    pub fn dispatch(
        &mut self,
        command: &DispatchAction,
        clock: &dyn Clock,
        ids: &mut dyn IdGenerator,
    ) -> Result<ActionRecord, DomainError> {
        let label = command.label.trim();
        if label.is_empty() {
            return Err(DomainError::InvalidAction(
                "action label must not be empty".into(),
            ));
        }
        let points = self.scores.check(command.team, command.points)?;

        let now = clock.now();
        let timestamp = self.last_timestamp.map_or(now, |last| last.max(now));
        let record = ActionRecord::new(
            ids.next_id(),
            command.team,
            label.to_owned(),
            points,
            timestamp,
            self.version + 1,
            command.correlation_id,
        );

        self.apply_record(record.clone());
        Ok(record)
    }

    /// Current counters.
    #[must_use]
    pub const fn scores(&self) -> ScoreState {
        self.scores.state()
    }

    /// The activity log.
    #[must_use]
    pub const fn log(&self) -> &EventLog {
        &self.log
    }

    /// Read-only snapshot of scores, log and derived parameters.
    #[must_use]
    pub fn snapshot(&self) -> ArenaSnapshot {
        let scores = self.scores.state();
        let metrics = DerivedMetrics::from_scores(&scores);
        ArenaSnapshot {
            session_id: self.id,
            gold_score: scores.gold,
            premium_score: scores.premium,
            log_entries: self.log.to_vec(),
            shares: metrics.shares,
            rotation_speed: metrics.rotation_speed,
            tension_angle: metrics.tension_angle,
            leader: metrics.leader,
            version: self.version,
        }
    }

    /// Applies a record built by [`ArenaSession::dispatch`]. Private so that
    /// unvalidated records cannot reach the counters or the log.
    fn apply_record(&mut self, record: ActionRecord) {
        self.scores.credit(record.team(), record.validated_points());
        self.last_timestamp = Some(record.timestamp());
        if let Some(evicted) = self.log.append(record) {
            debug!(
                session_id = %self.id,
                evicted_id = %evicted.id(),
                evicted_sequence = evicted.sequence(),
                "activity log full, evicted oldest record"
            );
        }
        self.version += 1;
    }
}

impl AggregateRoot for ArenaSession {
    type Event = ActionRecord;

    fn aggregate_id(&self) -> Uuid {
        self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}
