//! Round-trip and failure-path coverage for the JSON store.

use chrono::NaiveDate;

use subtrack::domain::{BillingCycle, Subscription, SubscriptionCategory};
use subtrack::storage::{JsonStorage, StorageBackend};

fn sample() -> Subscription {
    Subscription::new(
        "Stream",
        9.99,
        SubscriptionCategory::Media,
        BillingCycle::Monthly,
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
    )
    .with_notes("family plan")
    .with_color_hex("34C759")
}

#[test]
fn missing_file_loads_an_empty_collection() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonStorage::with_path(dir.path().join("subscriptions.json"));
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn save_then_load_round_trips_all_fields() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonStorage::with_path(dir.path().join("subscriptions.json"));
    let subscription = sample();
    store.save(std::slice::from_ref(&subscription)).unwrap();
    let loaded = store.load().unwrap();
    assert_eq!(loaded, vec![subscription]);
}

#[test]
fn save_creates_missing_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonStorage::with_path(dir.path().join("nested/data/subscriptions.json"));
    store.save(&[sample()]).unwrap();
    assert_eq!(store.load().unwrap().len(), 1);
}

#[test]
fn reset_truncates_the_collection() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonStorage::with_path(dir.path().join("subscriptions.json"));
    store.save(&[sample()]).unwrap();
    store.reset().unwrap();
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn newer_schema_versions_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("subscriptions.json");
    std::fs::write(
        &path,
        r#"{"schema_version": 99, "subscriptions": []}"#,
    )
    .unwrap();
    let store = JsonStorage::with_path(&path);
    assert!(store.load().is_err());
}

#[test]
fn corrupt_json_surfaces_a_serde_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("subscriptions.json");
    std::fs::write(&path, "{not json").unwrap();
    let store = JsonStorage::with_path(&path);
    assert!(store.load().is_err());
}
