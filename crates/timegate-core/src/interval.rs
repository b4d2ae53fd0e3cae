//! Time intervals with an activation tag

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use timegate_util::{InvalidArgument, Timestamp, format_timestamp};

/// What an interval does to its content while it is current
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Activation {
    Activates,
    Deactivates,
    /// Placeholder for an entity without real intervals
    Empty,
}

impl Activation {
    pub fn from_flag(activate: Option<bool>) -> Self {
        match activate {
            Some(true) => Activation::Activates,
            Some(false) => Activation::Deactivates,
            None => Activation::Empty,
        }
    }

    pub fn as_flag(self) -> Option<bool> {
        match self {
            Activation::Activates => Some(true),
            Activation::Deactivates => Some(false),
            Activation::Empty => None,
        }
    }

    pub fn is_empty(self) -> bool {
        self == Activation::Empty
    }
}

impl fmt::Display for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Activation::Activates => "activates",
            Activation::Deactivates => "deactivates",
            Activation::Empty => "empty",
        };
        f.write_str(s)
    }
}

/// An immutable time range with optional open ends.
///
/// A missing `start` means unbounded in the past, a missing `end` means
/// unbounded in the future. Both bounds are exclusive when deciding
/// whether the interval is current.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Interval {
    start: Option<Timestamp>,
    end: Option<Timestamp>,
    activation: Activation,
}

impl Interval {
    /// Build an interval, rejecting inconsistent input.
    ///
    /// A bounded interval must say whether it activates or deactivates,
    /// and an activation flag needs at least one bound. Omitting all
    /// three yields the [`Activation::Empty`] placeholder.
    pub fn new(
        start: Option<Timestamp>,
        end: Option<Timestamp>,
        activate: Option<bool>,
    ) -> Result<Self, InvalidArgument> {
        let bounded = start.is_some() || end.is_some();

        match (bounded, activate) {
            (true, None) => return Err(InvalidArgument::BoundsWithoutActivation),
            (false, Some(_)) => return Err(InvalidArgument::ActivationWithoutBounds),
            _ => {}
        }

        if let (Some(s), Some(e)) = (start, end)
            && s > e
        {
            return Err(InvalidArgument::ReversedBounds {
                start: format_timestamp(&s),
                end: format_timestamp(&e),
            });
        }

        Ok(Self {
            start,
            end,
            activation: Activation::from_flag(activate),
        })
    }

    /// The no-op placeholder interval
    pub fn empty() -> Self {
        Self {
            start: None,
            end: None,
            activation: Activation::Empty,
        }
    }

    pub fn activating(
        start: Option<Timestamp>,
        end: Option<Timestamp>,
    ) -> Result<Self, InvalidArgument> {
        Self::new(start, end, Some(true))
    }

    pub fn deactivating(
        start: Option<Timestamp>,
        end: Option<Timestamp>,
    ) -> Result<Self, InvalidArgument> {
        Self::new(start, end, Some(false))
    }

    pub fn start(&self) -> Option<Timestamp> {
        self.start
    }

    pub fn end(&self) -> Option<Timestamp> {
        self.end
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    /// True when the interval has neither a start nor an end
    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Whether `now` falls strictly inside the interval.
    ///
    /// Empty intervals are never current.
    pub fn is_current(&self, now: Timestamp) -> bool {
        if self.activation.is_empty() {
            return false;
        }

        let started = self.start.is_none_or(|start| start < now);
        let not_ended = self.end.is_none_or(|end| end > now);
        started && not_ended
    }

    /// Whether the two intervals may share an instant.
    ///
    /// Intervals are disjoint only when one provably ends at or before the
    /// other starts; a missing bound can never prove separation.
    pub fn overlaps_with(&self, other: &Interval) -> bool {
        if let (Some(start), Some(other_end)) = (self.start, other.end)
            && start >= other_end
        {
            return false;
        }

        if let (Some(end), Some(other_start)) = (self.end, other.start)
            && other_start >= end
        {
            return false;
        }

        true
    }

    /// Time left until the end of the interval, if it is current and bounded above
    pub fn remaining(&self, now: Timestamp) -> Option<Duration> {
        if !self.is_current(now) {
            return None;
        }
        let end = self.end?;
        end.signed_duration_since(now).to_std().ok()
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let start = self
            .start
            .map(|s| format_timestamp(&s))
            .unwrap_or_else(|| "-inf".to_string());
        let end = self
            .end
            .map(|e| format_timestamp(&e))
            .unwrap_or_else(|| "+inf".to_string());
        write!(f, "({}, {}) {}", start, end, self.activation)
    }
}
