//! Error types for timegate

use thiserror::Error;

/// Rejected construction input for an interval or a time-limited entity.
///
/// Only raised while building values; queries on a constructed
/// interval or entity never fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidArgument {
    #[error("activation flag given for an interval with neither start nor end")]
    ActivationWithoutBounds,

    #[error("interval has a bound but no activation flag")]
    BoundsWithoutActivation,

    #[error("interval start {start} is after its end {end}")]
    ReversedBounds { start: String, end: String },

    #[error("overlapping ranges: interval #{first} overlaps interval #{second}")]
    OverlappingIntervals { first: usize, second: usize },

    #[error("empty/unbounded range present: {count} intervals have neither start nor end")]
    MultipleUnbounded { count: usize },
}

/// Error type for the layers built around the availability core
#[derive(Debug, Error)]
pub enum TimegateError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(#[from] InvalidArgument),

    #[error("Duplicate identifier: {0}")]
    DuplicateIdentifier(String),

    #[error("Entity not found: {0}")]
    EntityNotFound(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl TimegateError {
    pub fn duplicate(id: impl Into<String>) -> Self {
        Self::DuplicateIdentifier(id.into())
    }

    pub fn not_found(id: impl Into<String>) -> Self {
        Self::EntityNotFound(id.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, TimegateError>;
