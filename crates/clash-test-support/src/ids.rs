//! Test ids — a counting `IdGenerator` so assertions can name exact ids.

use clash_core::ids::IdGenerator;
use uuid::Uuid;

/// Hands out `Uuid::from_u128(1)`, `Uuid::from_u128(2)`, and so on.
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    issued: u128,
}

impl SequentialIdGenerator {
    /// Create a generator whose first id is `Uuid::from_u128(1)`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of ids handed out so far.
    #[must_use]
    pub fn issued(&self) -> u128 {
        self.issued
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> Uuid {
        self.issued += 1;
        Uuid::from_u128(self.issued)
    }
}
