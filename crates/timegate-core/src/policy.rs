//! Fallback availability policy

use serde::{Deserialize, Serialize};

/// Availability to report when no interval decides the question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FallbackPolicy {
    /// Used when the entity has no intervals, or only the empty placeholder
    pub available_without_intervals: bool,
    /// Used when the entity has intervals but none is current
    pub available_outside_intervals: bool,
}

impl FallbackPolicy {
    pub const fn new(available_without_intervals: bool, available_outside_intervals: bool) -> Self {
        Self {
            available_without_intervals,
            available_outside_intervals,
        }
    }

    pub const fn with_without_intervals(mut self, available: bool) -> Self {
        self.available_without_intervals = available;
        self
    }

    pub const fn with_outside_intervals(mut self, available: bool) -> Self {
        self.available_outside_intervals = available;
        self
    }
}

impl Default for FallbackPolicy {
    fn default() -> Self {
        Self::new(true, false)
    }
}

/// Implemented by content kinds that carry their own fallback defaults
pub trait AvailabilityDefaults {
    fn fallback_policy(&self) -> FallbackPolicy {
        FallbackPolicy::default()
    }
}

impl AvailabilityDefaults for FallbackPolicy {
    fn fallback_policy(&self) -> FallbackPolicy {
        *self
    }
}
