//! Domain model for the arena context.

pub mod aggregates;
pub mod commands;
pub mod event_log;
pub mod events;
pub mod metrics;
pub mod scores;
pub mod team;
