//! Identifier generation abstraction.
//!
//! Records only need ids that are unique within a session. Production code
//! uses time-ordered v7 UUIDs; tests inject a counter so ids are predictable.

use uuid::Uuid;

/// Source of unique identifiers for newly created records.
pub trait IdGenerator: Send + Sync {
    /// Returns an identifier that has not been handed out before.
    fn next_id(&mut self) -> Uuid;
}

/// Production generator backed by `Uuid::now_v7`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidV7Generator;

impl IdGenerator for UuidV7Generator {
    fn next_id(&mut self) -> Uuid {
        Uuid::now_v7()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_uuid_v7_generator_never_repeats() {
        // Arrange
        let mut ids = UuidV7Generator;

        // Act
        let generated: HashSet<Uuid> = (0..1_000).map(|_| ids.next_id()).collect();

        // Assert
        assert_eq!(generated.len(), 1_000);
    }

    #[test]
    fn test_uuid_v7_generator_produces_version_seven() {
        let mut ids = UuidV7Generator;
        assert_eq!(ids.next_id().get_version_num(), 7);
    }
}
