//! Mutex-guarded collection for refreshing callers

use std::collections::BTreeSet;
use std::fmt;
use std::sync::{Mutex, MutexGuard};
use timegate_util::{Result, Timestamp, TimegateError};
use tracing::{debug, info};

use crate::{AvailabilityDiff, CollectionEvent, EntityCollection};

struct State<I> {
    collection: EntityCollection<I>,
    last_active: BTreeSet<I>,
    last_checked: Timestamp,
}

/// Owns an [`EntityCollection`] and serializes every replacement of it.
///
/// Remembers the active subset from the last observation so callers
/// that refresh periodically get only the changes as events.
pub struct SharedCollection<I> {
    state: Mutex<State<I>>,
}

impl<I> SharedCollection<I>
where
    I: Ord + Clone + fmt::Debug,
{
    pub fn new(collection: EntityCollection<I>, now: Timestamp) -> Self {
        info!(entity_count = collection.len(), "Shared collection initialized");

        let last_active = collection.active_identifiers(now);
        Self {
            state: Mutex::new(State {
                collection,
                last_active,
                last_checked: now,
            }),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, State<I>>> {
        self.state
            .lock()
            .map_err(|_| TimegateError::internal("collection lock poisoned"))
    }

    /// Swap in a freshly loaded collection.
    ///
    /// Availability changes are reported against the previous observation,
    /// so entities dropped from the collection show up as unavailable.
    pub fn replace(
        &self,
        collection: EntityCollection<I>,
        now: Timestamp,
    ) -> Result<Vec<CollectionEvent<I>>> {
        let mut state = self.lock()?;
        let entity_count = collection.len();
        state.collection = collection;

        info!(entity_count, "Collection reloaded");

        let mut events = vec![CollectionEvent::Reloaded { entity_count }];
        events.extend(Self::observe(&mut state, now));
        Ok(events)
    }

    /// Report availability changes since the last observation
    pub fn poll(&self, now: Timestamp) -> Result<Vec<CollectionEvent<I>>> {
        let mut state = self.lock()?;
        Ok(Self::observe(&mut state, now))
    }

    fn observe(state: &mut State<I>, now: Timestamp) -> Vec<CollectionEvent<I>> {
        let active = state.collection.active_identifiers(now);
        let diff = AvailabilityDiff::between(&state.last_active, &active);

        debug!(
            since = %state.last_checked,
            %now,
            became_available = diff.became_available.len(),
            became_unavailable = diff.became_unavailable.len(),
            "Observed collection"
        );

        for identifier in &diff.became_available {
            info!(identifier = ?identifier, "Entity became available");
        }
        for identifier in &diff.became_unavailable {
            info!(identifier = ?identifier, "Entity became unavailable");
        }

        state.last_active = active;
        state.last_checked = now;
        diff.into_events()
    }

    pub fn active_identifiers(&self, now: Timestamp) -> Result<BTreeSet<I>> {
        Ok(self.lock()?.collection.active_identifiers(now))
    }

    pub fn is_available(&self, identifier: &I, now: Timestamp) -> Result<bool> {
        let state = self.lock()?;
        state
            .collection
            .get(identifier)
            .map(|entity| entity.is_available(now))
            .ok_or_else(|| TimegateError::not_found(format!("{:?}", identifier)))
    }

    pub fn next_boundary_after(&self, now: Timestamp) -> Result<Option<Timestamp>> {
        Ok(self.lock()?.collection.next_boundary_after(now))
    }

    pub fn len(&self) -> Result<usize> {
        Ok(self.lock()?.collection.len())
    }
}
