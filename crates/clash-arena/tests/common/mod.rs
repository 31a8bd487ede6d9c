//! Shared helpers for arena integration tests.
#![allow(dead_code)]

use clash_arena::application::command_handlers::handle_dispatch_action;
use clash_arena::domain::aggregates::ArenaSession;
use clash_arena::domain::commands::DispatchAction;
use clash_arena::domain::events::ActionRecord;
use clash_arena::domain::team::Team;
use clash_core::error::DomainError;
use clash_test_support::{FixedClock, SequentialIdGenerator, fixed_now};
use uuid::Uuid;

pub const EPSILON: f64 = 1e-9;

/// A session plus the deterministic clock and id source used to drive it.
pub struct Harness {
    pub session: ArenaSession,
    pub clock: FixedClock,
    pub ids: SequentialIdGenerator,
}

impl Harness {
    pub fn new() -> Self {
        Self {
            session: ArenaSession::new(Uuid::new_v4()),
            clock: FixedClock(fixed_now()),
            ids: SequentialIdGenerator::new(),
        }
    }

    /// Dispatch an action through the command handler.
    pub fn dispatch(&mut self, team: Team, points: i64) -> Result<ActionRecord, DomainError> {
        let command = DispatchAction {
            correlation_id: Uuid::new_v4(),
            team,
            label: format!("{team} +{points}"),
            points,
        };
        handle_dispatch_action(&command, &mut self.session, &self.clock, &mut self.ids)
    }
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {expected}, got {actual}"
    );
}
