//! Catalog parsing and validation for timegate
//!
//! Supports TOML catalogs with:
//! - Versioned schema
//! - Entity definitions with activating and deactivating intervals
//! - Catalog-wide and per-entity fallback policy
//! - Validation with clear error messages

mod catalog;
mod schema;
mod validation;

pub use catalog::*;
pub use schema::*;
pub use validation::*;

use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read catalog file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Validation failed: {errors:?}")]
    ValidationFailed { errors: Vec<ValidationError> },

    #[error("Unsupported config version: {0}")]
    UnsupportedVersion(u32),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Load and validate a catalog from a TOML file
pub fn load_config(path: impl AsRef<Path>) -> ConfigResult<Catalog> {
    let path = path.as_ref();
    debug!(path = %path.display(), "Loading catalog");
    let content = std::fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parse and validate a catalog from a TOML string
pub fn parse_config(content: &str) -> ConfigResult<Catalog> {
    let raw: RawConfig = toml::from_str(content)?;

    if raw.config_version != CURRENT_CONFIG_VERSION {
        return Err(ConfigError::UnsupportedVersion(raw.config_version));
    }

    let errors = validate_config(&raw);
    if !errors.is_empty() {
        debug!(error_count = errors.len(), "Catalog failed validation");
        return Err(ConfigError::ValidationFailed { errors });
    }

    let catalog =
        Catalog::from_raw(raw).map_err(|errors| ConfigError::ValidationFailed { errors })?;
    debug!(entity_count = catalog.entities.len(), "Catalog parsed");
    Ok(catalog)
}

/// Current supported config version
pub const CURRENT_CONFIG_VERSION: u32 = 1;
