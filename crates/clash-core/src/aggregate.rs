//! Aggregate root abstraction.

use uuid::Uuid;

use crate::event::DomainEvent;

/// Read side shared by aggregate roots.
///
/// Mutation is not part of the trait: each aggregate applies its events
/// through a private method called only from its validating command methods.
pub trait AggregateRoot: Send + Sync {
    /// The event type this aggregate produces.
    type Event: DomainEvent;

    /// Returns the aggregate identifier.
    fn aggregate_id(&self) -> Uuid;

    /// Returns the current version (number of events applied).
    fn version(&self) -> u64;
}
