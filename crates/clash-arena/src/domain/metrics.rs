//! Pure derivations from scores to visualization parameters.
//!
//! Nothing here holds state: every function maps its arguments to a value
//! and returns the same value for the same arguments.

use serde::{Deserialize, Serialize};

use super::scores::ScoreState;
use super::team::Team;

/// Rotation speed when no points have been scored.
pub const BASE_ROTATION_SPEED: f64 = 20.0;
/// Rotation speed lost per point scored.
pub const ROTATION_DECAY_PER_POINT: f64 = 0.05;
/// Rotation speed never drops below this.
pub const MIN_ROTATION_SPEED: f64 = 3.0;
/// Degrees of tilt per percentage point away from an even split.
pub const TENSION_GAIN: f64 = 1.5;
/// Largest tilt in either direction.
pub const MAX_TENSION_ANGLE: f64 = 50.0 * TENSION_GAIN;

/// Each team's share of the combined score, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SharePercentages {
    /// Gold's share, `0..=100`.
    pub gold: f64,
    /// Premium's share, `0..=100`.
    pub premium: f64,
}

impl SharePercentages {
    /// Share of the given team.
    #[must_use]
    pub const fn of(&self, team: Team) -> f64 {
        match team {
            Team::Gold => self.gold,
            Team::Premium => self.premium,
        }
    }
}

/// Returns each team's share of `gold + premium`. With no points at all the
/// split is an even 50/50.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn share_percentages(gold: u64, premium: u64) -> SharePercentages {
    if gold == 0 && premium == 0 {
        return SharePercentages {
            gold: 50.0,
            premium: 50.0,
        };
    }
    let total = gold as f64 + premium as f64;
    SharePercentages {
        gold: 100.0 * gold as f64 / total,
        premium: 100.0 * premium as f64 / total,
    }
}

/// Animation rotation speed for a combined score: `max(3, 20 - 0.05 * total)`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn rotation_speed(total_score: u64) -> f64 {
    ROTATION_DECAY_PER_POINT
        .mul_add(-(total_score as f64), BASE_ROTATION_SPEED)
        .max(MIN_ROTATION_SPEED)
}

/// Signed tilt for gold's share: `(gold_pct - 50) * 1.5`.
///
/// `gold_pct` is clamped to `0..=100`, so the angle stays within
/// `-75..=75`. Positive favours gold.
#[must_use]
pub fn tension_angle(gold_pct: f64) -> f64 {
    (gold_pct.clamp(0.0, 100.0) - 50.0) * TENSION_GAIN
}

/// The team with strictly more points, or `None` on a tie.
#[must_use]
pub fn leader(scores: &ScoreState) -> Option<Team> {
    match scores.gold.cmp(&scores.premium) {
        std::cmp::Ordering::Greater => Some(Team::Gold),
        std::cmp::Ordering::Less => Some(Team::Premium),
        std::cmp::Ordering::Equal => None,
    }
}

/// All derived parameters for one score state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedMetrics {
    /// Score shares.
    pub shares: SharePercentages,
    /// Rotation speed of the dominance indicator.
    pub rotation_speed: f64,
    /// Tilt of the dominance indicator.
    pub tension_angle: f64,
    /// Leading team, if any.
    pub leader: Option<Team>,
}

impl DerivedMetrics {
    /// Derives every parameter from `scores`.
    #[must_use]
    pub fn from_scores(scores: &ScoreState) -> Self {
        let shares = share_percentages(scores.gold, scores.premium);
        Self {
            shares,
            rotation_speed: rotation_speed(scores.total()),
            tension_angle: tension_angle(shares.gold),
            leader: leader(scores),
        }
    }
}
