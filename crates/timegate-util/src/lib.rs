//! Shared utilities for timegate
//!
//! This crate provides:
//! - ID types (ContentId)
//! - Time utilities (mockable wall clock, parsing and formatting helpers)
//! - Error types
//! - Default paths for the catalog file

mod error;
mod ids;
mod paths;
mod time;

pub use error::*;
pub use ids::*;
pub use paths::*;
pub use time::*;
