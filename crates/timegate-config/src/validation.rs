//! Catalog validation

use crate::schema::{RawConfig, RawEntity, RawInterval};
use std::collections::HashSet;
use thiserror::Error;
use timegate_core::{Interval, TimeLimitedEntity};
use timegate_util::{InvalidArgument, parse_timestamp};

/// Validation error
#[derive(Debug, Clone, Error)]
pub enum ValidationError {
    #[error("Duplicate entity ID: {0}")]
    DuplicateEntityId(String),

    #[error("Entity #{0} has an empty ID")]
    EmptyEntityId(usize),

    #[error("Entity '{entity_id}' interval #{index}: invalid timestamp '{value}': {message}")]
    InvalidTimestamp {
        entity_id: String,
        index: usize,
        value: String,
        message: String,
    },

    #[error("Entity '{entity_id}' interval #{index}: {source}")]
    InvalidInterval {
        entity_id: String,
        index: usize,
        source: InvalidArgument,
    },

    #[error("Entity '{entity_id}': {source}")]
    InvalidEntity {
        entity_id: String,
        source: InvalidArgument,
    },
}

/// Validate a raw catalog, collecting every problem found
pub fn validate_config(config: &RawConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let mut seen_ids = HashSet::new();
    for (position, entity) in config.entities.iter().enumerate() {
        if entity.id.trim().is_empty() {
            errors.push(ValidationError::EmptyEntityId(position));
        } else if !seen_ids.insert(&entity.id) {
            errors.push(ValidationError::DuplicateEntityId(entity.id.clone()));
        }
    }

    for entity in &config.entities {
        errors.extend(validate_entity(entity));
    }

    errors
}

fn validate_entity(entity: &RawEntity) -> Vec<ValidationError> {
    match build_intervals(entity) {
        Ok(intervals) => match TimeLimitedEntity::new(intervals, entity.id.clone()) {
            Ok(_) => Vec::new(),
            Err(source) => vec![ValidationError::InvalidEntity {
                entity_id: entity.id.clone(),
                source,
            }],
        },
        Err(errors) => errors,
    }
}

/// Build every interval of an entity, or report all the broken ones
pub fn build_intervals(entity: &RawEntity) -> Result<Vec<Interval>, Vec<ValidationError>> {
    let mut intervals = Vec::with_capacity(entity.intervals.len());
    let mut errors = Vec::new();

    for (index, raw) in entity.intervals.iter().enumerate() {
        match build_interval(raw, &entity.id, index) {
            Ok(interval) => intervals.push(interval),
            Err(mut e) => errors.append(&mut e),
        }
    }

    if errors.is_empty() {
        Ok(intervals)
    } else {
        Err(errors)
    }
}

fn build_interval(
    raw: &RawInterval,
    entity_id: &str,
    index: usize,
) -> Result<Interval, Vec<ValidationError>> {
    let mut errors = Vec::new();

    let mut parse_bound = |value: &Option<String>| {
        value.as_deref().and_then(|s| match parse_timestamp(s) {
            Ok(ts) => Some(ts),
            Err(message) => {
                errors.push(ValidationError::InvalidTimestamp {
                    entity_id: entity_id.to_string(),
                    index,
                    value: s.to_string(),
                    message,
                });
                None
            }
        })
    };

    let start = parse_bound(&raw.start);
    let end = parse_bound(&raw.end);

    if !errors.is_empty() {
        return Err(errors);
    }

    Interval::new(start, end, raw.activate).map_err(|source| {
        vec![ValidationError::InvalidInterval {
            entity_id: entity_id.to_string(),
            index,
            source,
        }]
    })
}
