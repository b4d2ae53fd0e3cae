//! Availability core for time-limited content
//!
//! This crate decides whether a piece of content is active at a given
//! instant:
//! - Intervals with optional open ends and an activation tag
//! - Time-limited entities validated against overlapping intervals
//! - Fallback policy for entities with no interval in effect
//! - Collections that report which entities changed availability

mod collection;
mod entity;
mod events;
mod interval;
mod policy;
mod shared;

pub use collection::*;
pub use entity::*;
pub use events::*;
pub use interval::*;
pub use policy::*;
pub use shared::*;
