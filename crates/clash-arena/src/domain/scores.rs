//! Team score counters.

use std::num::NonZeroU32;

use clash_core::error::DomainError;
use serde::{Deserialize, Serialize};

use super::team::Team;

/// A validated, strictly positive point value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Points(NonZeroU32);

impl Points {
    /// Validates a raw point value coming from an action dispatch.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidAction` if `raw` is zero, negative, or
    /// larger than `u32::MAX`.
    pub fn new(raw: i64) -> Result<Self, DomainError> {
        if raw <= 0 {
            return Err(DomainError::InvalidAction(format!(
                "points must be positive, got {raw}"
            )));
        }
        u32::try_from(raw)
            .ok()
            .and_then(NonZeroU32::new)
            .map(Self)
            .ok_or_else(|| DomainError::InvalidAction(format!("points out of range: {raw}")))
    }

    /// The point value as an integer.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }
}

/// Snapshot of both team counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreState {
    /// Points accumulated by team gold.
    pub gold: u64,
    /// Points accumulated by team premium.
    pub premium: u64,
}

impl ScoreState {
    /// Score of a single team.
    #[must_use]
    pub const fn of(&self, team: Team) -> u64 {
        match team {
            Team::Gold => self.gold,
            Team::Premium => self.premium,
        }
    }

    /// Combined score of both teams.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.gold.saturating_add(self.premium)
    }
}

/// Holds the two counters. Scores only ever go up.
#[derive(Debug, Clone, Default)]
pub struct ScoreStore {
    state: ScoreState,
}

impl ScoreStore {
    /// Creates a store with both counters at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current counters.
    #[must_use]
    pub const fn state(&self) -> ScoreState {
        self.state
    }

    /// Validates that `points` may be credited to `team` without changing
    /// anything.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidAction` if `points` is not positive or
    /// crediting it would overflow the team counter or the combined total.
    pub fn check(&self, team: Team, points: i64) -> Result<Points, DomainError> {
        let points = Points::new(points)?;
        let fits = self
            .state
            .of(team)
            .checked_add(u64::from(points.get()))
            .and_then(|next| next.checked_add(self.state.of(team.other())))
            .is_some();
        if !fits {
            return Err(DomainError::InvalidAction(format!(
                "crediting {} points to {team} would overflow the score",
                points.get()
            )));
        }
        Ok(points)
    }

    /// Adds `points` to `team`'s counter and returns the new counters.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidAction` under the same conditions as
    /// [`ScoreStore::check`]; the counters are then left untouched.
    pub fn apply(&mut self, team: Team, points: i64) -> Result<ScoreState, DomainError> {
        let points = self.check(team, points)?;
        self.credit(team, points);
        Ok(self.state)
    }

    /// Adds already validated points. Saturates instead of wrapping.
    pub(crate) fn credit(&mut self, team: Team, points: Points) {
        let counter = match team {
            Team::Gold => &mut self.state.gold,
            Team::Premium => &mut self.state.premium,
        };
        *counter = counter.saturating_add(u64::from(points.get()));
    }
}
