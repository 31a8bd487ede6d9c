//! Test clocks — deterministic `Clock` implementations for tests.

use std::sync::Mutex;

use chrono::{DateTime, TimeZone, Utc};
use clash_core::clock::Clock;

/// Fixed timestamp shared by tests that do not care about the exact time.
///
/// # Panics
///
/// Never in practice: the literal date is valid.
#[must_use]
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap()
}

/// A clock that always returns a fixed point in time.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// A clock that returns timestamps from a predetermined sequence, repeating
/// the last one once the sequence is exhausted. Used to simulate a wall clock
/// that jumps backwards.
#[derive(Debug)]
pub struct SequenceClock {
    values: Vec<DateTime<Utc>>,
    index: Mutex<usize>,
}

impl SequenceClock {
    /// Create a new `SequenceClock` with the given timestamps.
    ///
    /// # Panics
    ///
    /// Panics if `values` is empty.
    #[must_use]
    pub fn new(values: Vec<DateTime<Utc>>) -> Self {
        assert!(!values.is_empty(), "SequenceClock needs at least one value");
        Self {
            values,
            index: Mutex::new(0),
        }
    }
}

impl Clock for SequenceClock {
    fn now(&self) -> DateTime<Utc> {
        let mut index = self.index.lock().unwrap();
        let value = self.values[(*index).min(self.values.len() - 1)];
        *index += 1;
        value
    }
}
