//! Clash Arena — two-team scoreboard bounded context.
//!
//! Responsible for team scores, the capped activity log, and the derived
//! parameters (shares, rotation speed, tension angle) that drive the
//! dominance indicator.

pub mod application;
pub mod config;
pub mod domain;
