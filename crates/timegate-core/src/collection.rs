//! Collections of time-limited entities

use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;
use timegate_util::{Result, Timestamp, TimegateError};

use crate::{CollectionEvent, TimeLimitedEntity};

/// Entities whose availability changed between two observations
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AvailabilityDiff<I> {
    pub became_available: Vec<I>,
    pub became_unavailable: Vec<I>,
}

impl<I: Ord + Clone> AvailabilityDiff<I> {
    /// Diff two active identifier sets
    pub fn between(before: &BTreeSet<I>, after: &BTreeSet<I>) -> Self {
        Self {
            became_available: after.difference(before).cloned().collect(),
            became_unavailable: before.difference(after).cloned().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.became_available.is_empty() && self.became_unavailable.is_empty()
    }

    pub fn into_events(self) -> Vec<CollectionEvent<I>> {
        let shown = self
            .became_available
            .into_iter()
            .map(|identifier| CollectionEvent::AvailabilityChanged {
                identifier,
                available: true,
            });
        let hidden = self
            .became_unavailable
            .into_iter()
            .map(|identifier| CollectionEvent::AvailabilityChanged {
                identifier,
                available: false,
            });
        shown.chain(hidden).collect()
    }
}

/// An ordered set of entities with unique identifiers
#[derive(Debug, Clone, Serialize)]
pub struct EntityCollection<I> {
    entities: Vec<TimeLimitedEntity<I>>,
}

impl<I> Default for EntityCollection<I> {
    fn default() -> Self {
        Self {
            entities: Vec::new(),
        }
    }
}

impl<I> EntityCollection<I>
where
    I: Ord + Clone + fmt::Debug,
{
    pub fn new(entities: Vec<TimeLimitedEntity<I>>) -> Result<Self> {
        let mut seen = BTreeSet::new();
        for entity in &entities {
            if !seen.insert(entity.identifier()) {
                return Err(TimegateError::duplicate(format!(
                    "{:?}",
                    entity.identifier()
                )));
            }
        }

        Ok(Self { entities })
    }

    pub fn get(&self, identifier: &I) -> Option<&TimeLimitedEntity<I>> {
        self.entities.iter().find(|e| e.identifier() == identifier)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TimeLimitedEntity<I>> + '_ {
        self.entities.iter()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Entities available at `now`, in collection order
    pub fn active_at(&self, now: Timestamp) -> Vec<&TimeLimitedEntity<I>> {
        self.entities
            .iter()
            .filter(|entity| entity.is_available(now))
            .collect()
    }

    pub fn active_identifiers(&self, now: Timestamp) -> BTreeSet<I> {
        self.entities
            .iter()
            .filter(|entity| entity.is_available(now))
            .map(|entity| entity.identifier().clone())
            .collect()
    }

    pub fn diff(&self, earlier: Timestamp, later: Timestamp) -> AvailabilityDiff<I> {
        AvailabilityDiff::between(
            &self.active_identifiers(earlier),
            &self.active_identifiers(later),
        )
    }

    pub fn changed_between(&self, earlier: Timestamp, later: Timestamp) -> bool {
        !self.diff(earlier, later).is_empty()
    }

    /// Earliest instant after `now` at which any entity may change
    pub fn next_boundary_after(&self, now: Timestamp) -> Option<Timestamp> {
        self.entities
            .iter()
            .filter_map(|entity| entity.next_boundary_after(now))
            .min()
    }
}

impl<'a, I> IntoIterator for &'a EntityCollection<I> {
    type Item = &'a TimeLimitedEntity<I>;
    type IntoIter = std::slice::Iter<'a, TimeLimitedEntity<I>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entities.iter()
    }
}
