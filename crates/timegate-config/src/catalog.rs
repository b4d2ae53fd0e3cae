//! Validated catalog structures

use crate::schema::{RawConfig, RawDefaults, RawEntity};
use crate::validation::{ValidationError, build_intervals};
use timegate_core::{EntityCollection, FallbackPolicy, TimeLimitedEntity};
use timegate_util::{ContentId, Result};

/// Validated catalog ready to be handed to a collection
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Catalog-wide fallback policy
    pub defaults: FallbackPolicy,

    /// Validated entities, in file order
    pub entities: Vec<TimeLimitedEntity<ContentId>>,
}

impl Catalog {
    /// Convert from raw config, reporting every entity that fails to build
    pub fn from_raw(raw: RawConfig) -> std::result::Result<Self, Vec<ValidationError>> {
        let defaults = resolve_defaults(&raw.defaults);

        let mut entities = Vec::with_capacity(raw.entities.len());
        let mut errors = Vec::new();

        for raw_entity in &raw.entities {
            match build_entity(raw_entity, defaults) {
                Ok(entity) => entities.push(entity),
                Err(mut e) => errors.append(&mut e),
            }
        }

        if errors.is_empty() {
            Ok(Self { defaults, entities })
        } else {
            Err(errors)
        }
    }

    /// Get entity by ID
    pub fn get_entity(&self, id: &ContentId) -> Option<&TimeLimitedEntity<ContentId>> {
        self.entities.iter().find(|e| e.identifier() == id)
    }

    pub fn into_collection(self) -> Result<EntityCollection<ContentId>> {
        EntityCollection::new(self.entities)
    }
}

fn resolve_defaults(raw: &RawDefaults) -> FallbackPolicy {
    let base = FallbackPolicy::default();
    FallbackPolicy::new(
        raw.available_without_intervals
            .unwrap_or(base.available_without_intervals),
        raw.available_outside_intervals
            .unwrap_or(base.available_outside_intervals),
    )
}

fn build_entity(
    raw: &RawEntity,
    defaults: FallbackPolicy,
) -> std::result::Result<TimeLimitedEntity<ContentId>, Vec<ValidationError>> {
    let intervals = build_intervals(raw)?;

    let fallback = FallbackPolicy::new(
        raw.available_without_intervals
            .unwrap_or(defaults.available_without_intervals),
        raw.available_outside_intervals
            .unwrap_or(defaults.available_outside_intervals),
    );

    TimeLimitedEntity::with_fallback(intervals, ContentId::new(raw.id.clone()), fallback).map_err(
        |source| {
            vec![ValidationError::InvalidEntity {
                entity_id: raw.id.clone(),
                source,
            }]
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::RawInterval;

    fn raw_entity(id: &str, outside: Option<bool>) -> RawEntity {
        RawEntity {
            id: id.into(),
            intervals: vec![RawInterval {
                start: Some("2025-01-01T00:00:00Z".into()),
                end: Some("2025-02-01T00:00:00Z".into()),
                activate: Some(true),
            }],
            available_without_intervals: None,
            available_outside_intervals: outside,
        }
    }

    #[test]
    fn entity_overrides_catalog_defaults() {
        let raw = RawConfig {
            config_version: 1,
            defaults: RawDefaults {
                available_without_intervals: Some(false),
                available_outside_intervals: None,
            },
            entities: vec![raw_entity("plain", None), raw_entity("lenient", Some(true))],
        };

        let catalog = Catalog::from_raw(raw).unwrap();
        assert_eq!(catalog.defaults, FallbackPolicy::new(false, false));

        let plain = catalog.get_entity(&ContentId::new("plain")).unwrap();
        assert_eq!(plain.fallback(), FallbackPolicy::new(false, false));

        let lenient = catalog.get_entity(&ContentId::new("lenient")).unwrap();
        assert_eq!(lenient.fallback(), FallbackPolicy::new(false, true));
    }

    #[test]
    fn into_collection_keeps_order() {
        let raw = RawConfig {
            config_version: 1,
            defaults: RawDefaults::default(),
            entities: vec![raw_entity("b", None), raw_entity("a", None)],
        };

        let collection = Catalog::from_raw(raw).unwrap().into_collection().unwrap();
        let ids: Vec<_> = collection.iter().map(|e| e.identifier().as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }
}
