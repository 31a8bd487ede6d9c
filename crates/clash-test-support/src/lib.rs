//! Shared test clocks and id generators for the Clash Arena scoreboard.

mod clock;
mod ids;

pub use clock::{FixedClock, SequenceClock, fixed_now};
pub use ids::SequentialIdGenerator;
