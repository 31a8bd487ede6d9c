//! Domain event abstractions.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Trait that all domain events implement.
///
/// Events are immutable facts: once built, none of these values change.
pub trait DomainEvent: Send + Sync + std::fmt::Debug {
    /// Unique identifier of this event.
    fn event_id(&self) -> Uuid;

    /// Returns the event type name (used in log fields).
    fn event_type(&self) -> &'static str;

    /// When the event was created.
    fn occurred_at(&self) -> DateTime<Utc>;
}
