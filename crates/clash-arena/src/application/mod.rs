//! Application services for the arena context.

pub mod command_handlers;
pub mod query_handlers;
