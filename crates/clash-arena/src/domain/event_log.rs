//! Capped, newest-first log of recorded actions.

use std::collections::VecDeque;
use std::num::NonZeroUsize;

use super::events::ActionRecord;

/// Default number of records the log keeps.
pub const MAX_LOG: usize = 50;

/// Largest capacity a configuration may request.
pub const MAX_LOG_CAPACITY: usize = 10_000;

/// Fixed-capacity log. The head is the most recent record; once full, every
/// append evicts exactly one record from the tail.
#[derive(Debug, Clone)]
pub struct EventLog {
    entries: VecDeque<ActionRecord>,
    capacity: usize,
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new()
    }
}

impl EventLog {
    /// Creates an empty log holding at most [`MAX_LOG`] records.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: VecDeque::with_capacity(MAX_LOG + 1),
            capacity: MAX_LOG,
        }
    }

    /// Creates an empty log with a custom capacity.
    ///
    /// Storage grows with the records actually appended, so a large
    /// capacity allocates nothing up front.
    #[must_use]
    pub fn with_capacity(capacity: NonZeroUsize) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity: capacity.get(),
        }
    }

    /// Inserts `record` at the head and returns the evicted tail record, if
    /// the log was already full.
    pub fn append(&mut self, record: ActionRecord) -> Option<ActionRecord> {
        self.entries.push_front(record);
        if self.entries.len() > self.capacity {
            self.entries.pop_back()
        } else {
            None
        }
    }

    /// Maximum number of retained records.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of retained records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most recent retained record.
    #[must_use]
    pub fn newest(&self) -> Option<&ActionRecord> {
        self.entries.front()
    }

    /// Oldest retained record.
    #[must_use]
    pub fn oldest(&self) -> Option<&ActionRecord> {
        self.entries.back()
    }

    /// Retained records, newest first.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &ActionRecord> {
        self.entries.iter()
    }

    /// Owned copy of the retained records, newest first.
    #[must_use]
    pub fn to_vec(&self) -> Vec<ActionRecord> {
        self.entries.iter().cloned().collect()
    }
}
