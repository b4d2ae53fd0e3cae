//! Integration tests for timegate
//!
//! These tests load catalogs end to end and evaluate them the way a
//! refreshing list layer would.

use chrono::{Duration, Local, TimeZone, Utc};
use std::io::Write;
use timegate_config::{ConfigError, load_config, parse_config};
use timegate_core::{CollectionEvent, SharedCollection};
use timegate_util::{ContentId, InvalidArgument, Timestamp};

const CATALOG: &str = r#"
config_version = 1

[defaults]
available_without_intervals = true
available_outside_intervals = false

[[entities]]
id = "welcome"

[[entities]]
id = "winter-sale"
[[entities.intervals]]
start = "2025-12-01T00:00:00Z"
end = "2026-01-01T00:00:00Z"
activate = true

[[entities]]
id = "summer-blackout"
available_outside_intervals = true
[[entities.intervals]]
start = "2025-07-01T00:00:00Z"
end = "2025-08-01T00:00:00Z"
activate = false

[[entities]]
id = "launch"
[[entities.intervals]]
start = "2025-10-01T00:00:00Z"
activate = true
"#;

fn utc(y: i32, m: u32, d: u32) -> Timestamp {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0)
        .unwrap()
        .with_timezone(&Local)
}

fn ids(names: &[&str]) -> Vec<ContentId> {
    names.iter().map(|n| ContentId::new(*n)).collect()
}

#[test]
fn test_catalog_availability_over_the_year() {
    let collection = parse_config(CATALOG).unwrap().into_collection().unwrap();
    assert_eq!(collection.len(), 4);

    let active = |ts: Timestamp| -> Vec<ContentId> {
        collection
            .active_at(ts)
            .into_iter()
            .map(|e| e.identifier().clone())
            .collect()
    };

    assert_eq!(active(utc(2025, 3, 1)), ids(&["welcome", "summer-blackout"]));
    assert_eq!(active(utc(2025, 7, 15)), ids(&["welcome"]));
    assert_eq!(
        active(utc(2025, 12, 15)),
        ids(&["welcome", "winter-sale", "summer-blackout", "launch"])
    );
    assert_eq!(
        active(utc(2026, 2, 1)),
        ids(&["welcome", "summer-blackout", "launch"])
    );
}

#[test]
fn test_boundary_instants_are_excluded() {
    let collection = parse_config(CATALOG).unwrap().into_collection().unwrap();
    let sale = collection.get(&ContentId::new("winter-sale")).unwrap();

    assert!(!sale.is_available(utc(2025, 12, 1)));
    assert!(sale.is_available(utc(2025, 12, 1) + Duration::seconds(1)));
    assert!(!sale.is_available(utc(2026, 1, 1)));
}

#[test]
fn test_diff_between_timestamps() {
    let collection = parse_config(CATALOG).unwrap().into_collection().unwrap();

    let diff = collection.diff(utc(2025, 6, 15), utc(2025, 7, 15));
    assert!(diff.became_available.is_empty());
    assert_eq!(diff.became_unavailable, ids(&["summer-blackout"]));

    assert!(!collection.changed_between(utc(2025, 3, 1), utc(2025, 6, 1)));
    assert_eq!(
        collection.next_boundary_after(utc(2025, 3, 1)),
        Some(utc(2025, 7, 1))
    );
}

#[test]
fn test_refresh_cycle_emits_events() {
    let collection = parse_config(CATALOG).unwrap().into_collection().unwrap();
    let shared = SharedCollection::new(collection, utc(2025, 9, 15));

    let events = shared.poll(utc(2025, 10, 15)).unwrap();
    assert_eq!(
        events,
        vec![CollectionEvent::AvailabilityChanged {
            identifier: ContentId::new("launch"),
            available: true,
        }]
    );

    let reloaded = parse_config(
        r#"
        config_version = 1
        [[entities]]
        id = "welcome"
        "#,
    )
    .unwrap()
    .into_collection()
    .unwrap();

    let events = shared.replace(reloaded, utc(2025, 10, 16)).unwrap();
    assert_eq!(events[0], CollectionEvent::Reloaded { entity_count: 1 });
    assert!(events.contains(&CollectionEvent::AvailabilityChanged {
        identifier: ContentId::new("launch"),
        available: false,
    }));
    assert!(events.contains(&CollectionEvent::AvailabilityChanged {
        identifier: ContentId::new("summer-blackout"),
        available: false,
    }));
}

#[test]
fn test_overlapping_catalog_rejected() {
    let result = parse_config(
        r#"
        config_version = 1
        [[entities]]
        id = "clash"
        [[entities.intervals]]
        start = "2025-01-01T00:00:00Z"
        end = "2025-03-01T00:00:00Z"
        activate = true
        [[entities.intervals]]
        start = "2025-02-01T00:00:00Z"
        end = "2025-04-01T00:00:00Z"
        activate = false
        "#,
    );

    match result {
        Err(ConfigError::ValidationFailed { errors }) => {
            assert_eq!(errors.len(), 1);
            assert!(errors[0].to_string().contains("overlapping ranges"));
        }
        other => panic!("expected overlap rejection, got {other:?}"),
    }
}

#[test]
fn test_placeholder_interval_catalog() {
    let single = parse_config(
        r#"
        config_version = 1
        [[entities]]
        id = "placeholder"
        available_without_intervals = false
        [[entities.intervals]]
        "#,
    )
    .unwrap();
    assert!(!single.entities[0].is_available(utc(2025, 1, 1)));

    let double = parse_config(
        r#"
        config_version = 1
        [[entities]]
        id = "placeholder"
        [[entities.intervals]]
        [[entities.intervals]]
        "#,
    );
    match double {
        Err(ConfigError::ValidationFailed { errors }) => {
            assert!(matches!(
                &errors[0],
                timegate_config::ValidationError::InvalidEntity {
                    source: InvalidArgument::MultipleUnbounded { count: 2 },
                    ..
                }
            ));
        }
        other => panic!("expected unbounded rejection, got {other:?}"),
    }
}

#[test]
fn test_load_catalog_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(CATALOG.as_bytes()).unwrap();

    let catalog = load_config(file.path()).unwrap();
    assert_eq!(catalog.entities.len(), 4);
    assert!(catalog.defaults.available_without_intervals);
}
