//! Query handlers for the arena context.
//!
//! This module turns a session snapshot into read-only view DTOs that a
//! UI host can serialize as-is.

use serde::Serialize;
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::domain::aggregates::ArenaSession;
use crate::domain::events::ActionRecord;
use crate::domain::team::Team;

/// Read-only view of one log entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionRecordView {
    /// The record identifier.
    pub id: Uuid,
    /// Team credited.
    pub team: Team,
    /// Action description.
    pub label: String,
    /// Points awarded.
    pub points: u32,
    /// Creation time, RFC 3339.
    pub timestamp: String,
}

impl From<&ActionRecord> for ActionRecordView {
    fn from(record: &ActionRecord) -> Self {
        Self {
            id: record.id(),
            team: record.team(),
            label: record.label().to_owned(),
            points: record.points(),
            timestamp: record.timestamp().to_rfc3339(),
        }
    }
}

/// Read-only view of an arena session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArenaView {
    /// The session identifier.
    pub session_id: Uuid,
    /// Gold's accumulated points.
    pub gold_score: u64,
    /// Premium's accumulated points.
    pub premium_score: u64,
    /// Gold's share in percent.
    pub gold_percentage: f64,
    /// Premium's share in percent.
    pub premium_percentage: f64,
    /// Rotation speed of the dominance indicator.
    pub rotation_speed: f64,
    /// Tilt of the dominance indicator.
    pub tension_angle: f64,
    /// Leading team, if any.
    pub leader: Option<Team>,
    /// Retained log entries, newest first.
    pub log_entries: Vec<ActionRecordView>,
    /// Number of accepted actions.
    pub version: u64,
}

/// Builds the view of `session` for rendering.
#[instrument(skip_all, fields(session_id = %session.id))]
pub fn get_arena_view(session: &ArenaSession) -> ArenaView {
    let snapshot = session.snapshot();
    debug!(
        version = snapshot.version,
        log_len = snapshot.log_entries.len(),
        "building arena view"
    );
    ArenaView {
        session_id: snapshot.session_id,
        gold_score: snapshot.gold_score,
        premium_score: snapshot.premium_score,
        gold_percentage: snapshot.shares.gold,
        premium_percentage: snapshot.shares.premium,
        rotation_speed: snapshot.rotation_speed,
        tension_angle: snapshot.tension_angle,
        leader: snapshot.leader,
        log_entries: snapshot.log_entries.iter().map(ActionRecordView::from).collect(),
        version: snapshot.version,
    }
}
