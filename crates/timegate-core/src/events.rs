//! Events emitted when a collection's active subset changes

use serde::Serialize;

/// Events emitted by a shared collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum CollectionEvent<I> {
    /// Entity availability changed
    AvailabilityChanged { identifier: I, available: bool },

    /// Backing collection was replaced
    Reloaded { entity_count: usize },
}
