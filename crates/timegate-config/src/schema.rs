//! Raw catalog schema (as parsed from TOML)

use serde::{Deserialize, Serialize};

/// Raw catalog as parsed from TOML
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawConfig {
    /// Config schema version
    pub config_version: u32,

    /// Fallback defaults for every entity
    #[serde(default)]
    pub defaults: RawDefaults,

    /// Time-limited entities
    #[serde(default)]
    pub entities: Vec<RawEntity>,
}

/// Catalog-wide fallback policy
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawDefaults {
    /// Availability of entities without intervals (default: true)
    pub available_without_intervals: Option<bool>,

    /// Availability when no interval is current (default: false)
    pub available_outside_intervals: Option<bool>,
}

/// Raw entity definition
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawEntity {
    /// Unique stable ID
    pub id: String,

    /// Intervals in insertion order
    #[serde(default)]
    pub intervals: Vec<RawInterval>,

    /// Overrides the catalog default
    pub available_without_intervals: Option<bool>,

    /// Overrides the catalog default
    pub available_outside_intervals: Option<bool>,
}

/// Interval bounds and activation flag
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawInterval {
    /// Start timestamp (RFC 3339 or `YYYY-MM-DD HH:MM:SS` local)
    pub start: Option<String>,

    /// End timestamp (RFC 3339 or `YYYY-MM-DD HH:MM:SS` local)
    pub end: Option<String>,

    /// true activates, false deactivates, absent for the empty placeholder
    pub activate: Option<bool>,
}
