//! Clash Core — shared domain abstractions.
//!
//! This crate defines the traits and types the arena context depends on:
//! time, identity, commands, events and errors. It contains no scoreboard
//! logic.

pub mod aggregate;
pub mod clock;
pub mod command;
pub mod error;
pub mod event;
pub mod ids;
pub mod telemetry;
