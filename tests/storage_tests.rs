// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Persisted slot round-trip and fail-soft load tests.

use serde_json::json;
use std::fs;
use tempfile::TempDir;
use workout_tracker::models::{Coords, Workout, WorkoutDetails, WorkoutType};
use workout_tracker::storage::WorkoutStore;

fn store_in(dir: &TempDir) -> WorkoutStore {
    WorkoutStore::new(dir.path().join("workouts.json"))
}

fn running(distance: f64, duration: f64, cadence: f64) -> Workout {
    Workout::new(
        WorkoutType::Running,
        Coords(10.0, 20.0),
        distance,
        duration,
        cadence,
    )
}

fn cycling(distance: f64, duration: f64, elevation: f64) -> Workout {
    Workout::new(
        WorkoutType::Cycling,
        Coords(-33.5, 151.2),
        distance,
        duration,
        elevation,
    )
}

fn running_record(id: &str) -> serde_json::Value {
    json!({
        "type": "running",
        "id": id,
        "date": "2024-03-09T12:30:45Z",
        "coords": [10.0, 20.0],
        "distance": 5.0,
        "duration": 30.0,
        "description": "Running on March 9",
        "cadence": 160.0,
        "pace": 6.0
    })
}

#[test]
fn round_trip_preserves_order_subtype_and_fields() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    let saved = vec![running(5.0, 30.0, 160.0), cycling(20.0, 60.0, -200.0)];
    store.save(&saved).unwrap();

    let loaded = store.load();
    assert_eq!(loaded, saved);
    assert_eq!(loaded[0].workout_type(), WorkoutType::Running);
    assert_eq!(loaded[1].workout_type(), WorkoutType::Cycling);
}

#[test]
fn derived_fields_are_trusted_verbatim_on_reload() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    // Inconsistent pace (should be 6.0 for 5km/30min); the store must not
    // recompute it.
    let mut record = running_record("0000000001");
    record["pace"] = json!(99.0);
    fs::write(store.path(), json!([record]).to_string()).unwrap();

    let loaded = store.load();
    assert_eq!(loaded.len(), 1);
    assert_eq!(
        loaded[0].details,
        WorkoutDetails::Running {
            cadence: 160.0,
            pace: 99.0
        }
    );
}

#[test]
fn cold_start_yields_empty_collection() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    // Absent slot
    assert!(store.load().is_empty());

    // Slot holding JSON null
    fs::write(store.path(), "null").unwrap();
    assert!(store.load().is_empty());

    // Slot holding a non-array value
    fs::write(store.path(), "{\"type\":\"running\"}").unwrap();
    assert!(store.load().is_empty());

    // Malformed slot
    fs::write(store.path(), "not json at all {{{").unwrap();
    assert!(store.load().is_empty());

    // Empty array
    fs::write(store.path(), "[]").unwrap();
    assert!(store.load().is_empty());
}

#[test]
fn unknown_discriminant_is_dropped_without_aborting_load() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    let rowing = json!({
        "type": "rowing",
        "id": "0000000002",
        "date": "2024-03-09T12:30:45Z",
        "coords": [0.0, 0.0],
        "distance": 2.0,
        "duration": 10.0,
        "description": "Rowing on March 9",
        "strokes": 500
    });
    let slot = json!([running_record("0000000001"), rowing, running_record("0000000003")]);
    fs::write(store.path(), slot.to_string()).unwrap();

    let loaded = store.load();
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[0].id, "0000000001");
    assert_eq!(loaded[1].id, "0000000003");
}

#[test]
fn record_that_fails_hydration_is_dropped() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    let mut truncated = running_record("0000000002");
    truncated.as_object_mut().unwrap().remove("cadence");
    let slot = json!([running_record("0000000001"), truncated]);
    fs::write(store.path(), slot.to_string()).unwrap();

    let loaded = store.load();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].id, "0000000001");
}

#[test]
fn load_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    store
        .save(&[running(5.0, 30.0, 160.0), cycling(20.0, 60.0, 0.0)])
        .unwrap();

    assert_eq!(store.load(), store.load());
}

#[test]
fn save_overwrites_prior_contents() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    store.save(&[running(5.0, 30.0, 160.0)]).unwrap();
    let replacement = vec![cycling(40.0, 120.0, 800.0)];
    store.save(&replacement).unwrap();

    assert_eq!(store.load(), replacement);
}

#[test]
fn save_creates_missing_parent_directories() {
    let dir = TempDir::new().unwrap();
    let store = WorkoutStore::new(dir.path().join("nested/deeper/workouts.json"));

    store.save(&[running(5.0, 30.0, 160.0)]).unwrap();
    assert_eq!(store.load().len(), 1);
}

#[test]
fn clear_removes_the_slot() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    store.save(&[running(5.0, 30.0, 160.0)]).unwrap();
    store.clear().unwrap();
    assert!(store.load().is_empty());
    assert!(!store.path().exists());

    // Clearing an absent slot is fine
    store.clear().unwrap();
}

#[test]
fn persisted_record_shape_matches_the_slot_contract() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    store.save(&[cycling(20.0, 60.0, -200.0)]).unwrap();

    let raw = fs::read_to_string(store.path()).unwrap();
    let slot: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let record = &slot.as_array().unwrap()[0];

    assert_eq!(record["type"], "cycling");
    assert_eq!(record["coords"], json!([-33.5, 151.2]));
    assert_eq!(record["distance"], 20.0);
    assert_eq!(record["duration"], 60.0);
    assert_eq!(record["elevation"], -200.0);
    assert_eq!(record["speed"], 20.0);
    assert_eq!(record["id"].as_str().unwrap().len(), 10);
    assert!(record["description"].is_string());
    assert!(record["date"].is_string());
}
