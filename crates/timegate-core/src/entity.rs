//! Time-limited entities

use serde::Serialize;
use std::fmt;
use timegate_util::{InvalidArgument, Timestamp};
use tracing::debug;

use crate::{Activation, AvailabilityDefaults, FallbackPolicy, Interval};

/// Content whose availability is governed by a fixed set of intervals.
///
/// The interval set is validated once at construction: no two intervals
/// may overlap and the empty placeholder may only appear on its own.
/// Entities are immutable afterwards, so every query is a pure function
/// of `now`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeLimitedEntity<I> {
    identifier: I,
    intervals: Vec<Interval>,
    fallback: FallbackPolicy,
}

impl<I> TimeLimitedEntity<I>
where
    I: Ord + Clone + fmt::Debug,
{
    /// Build an entity with the default fallback policy
    pub fn new(intervals: Vec<Interval>, identifier: I) -> Result<Self, InvalidArgument> {
        Self::with_fallback(intervals, identifier, FallbackPolicy::default())
    }

    /// Build an entity using the defaults of a content kind
    pub fn for_kind<K>(
        intervals: Vec<Interval>,
        identifier: I,
        kind: &K,
    ) -> Result<Self, InvalidArgument>
    where
        K: AvailabilityDefaults + ?Sized,
    {
        Self::with_fallback(intervals, identifier, kind.fallback_policy())
    }

    pub fn with_fallback(
        intervals: Vec<Interval>,
        identifier: I,
        fallback: FallbackPolicy,
    ) -> Result<Self, InvalidArgument> {
        if let Err(e) = validate_intervals(&intervals) {
            debug!(identifier = ?identifier, error = %e, "Rejected interval set");
            return Err(e);
        }

        Ok(Self {
            identifier,
            intervals,
            fallback,
        })
    }

    pub fn identifier(&self) -> &I {
        &self.identifier
    }

    /// All intervals in insertion order, including a placeholder if present
    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    pub fn fallback(&self) -> FallbackPolicy {
        self.fallback
    }

    /// Intervals that can take effect, skipping the empty placeholder
    pub fn valid_intervals(&self) -> impl Iterator<Item = &Interval> + '_ {
        self.intervals
            .iter()
            .filter(|interval| !interval.activation().is_empty())
    }

    /// Valid intervals that are current at `now`
    pub fn current_intervals(&self, now: Timestamp) -> impl Iterator<Item = &Interval> + '_ {
        self.valid_intervals()
            .filter(move |interval| interval.is_current(now))
    }

    fn has_no_real_intervals(&self) -> bool {
        match self.intervals.as_slice() {
            [] => true,
            [only] => only.activation().is_empty(),
            _ => false,
        }
    }

    /// Decide whether the entity is available at `now`.
    ///
    /// Without real intervals the `available_without_intervals` fallback
    /// applies. Otherwise a current activating interval wins, a current
    /// deactivating one hides the content, and with nothing current the
    /// `available_outside_intervals` fallback applies.
    pub fn is_available(&self, now: Timestamp) -> bool {
        if self.has_no_real_intervals() {
            return self.fallback.available_without_intervals;
        }

        let mut any_current = false;
        for interval in self.current_intervals(now) {
            if interval.activation() == Activation::Activates {
                return true;
            }
            any_current = true;
        }

        if any_current {
            false
        } else {
            self.fallback.available_outside_intervals
        }
    }

    /// Earliest interval bound strictly after `now`.
    ///
    /// The answer of [`is_available`](Self::is_available) cannot change
    /// before this instant.
    pub fn next_boundary_after(&self, now: Timestamp) -> Option<Timestamp> {
        self.valid_intervals()
            .flat_map(|interval| [interval.start(), interval.end()])
            .flatten()
            .filter(|bound| *bound > now)
            .min()
    }
}

fn validate_intervals(intervals: &[Interval]) -> Result<(), InvalidArgument> {
    let unbounded = intervals.iter().filter(|i| i.is_unbounded()).count();
    if unbounded > 1 {
        return Err(InvalidArgument::MultipleUnbounded { count: unbounded });
    }

    for (first, a) in intervals.iter().enumerate() {
        for (offset, b) in intervals[first + 1..].iter().enumerate() {
            if a.overlaps_with(b) {
                return Err(InvalidArgument::OverlappingIntervals {
                    first,
                    second: first + 1 + offset,
                });
            }
        }
    }

    Ok(())
}
