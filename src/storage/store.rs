// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout collection persistence in a single JSON slot.
//!
//! The slot holds the full serialized collection; every save overwrites it
//! wholesale. Loads are fail-soft: a missing, unreadable or malformed slot
//! resolves to an empty collection, and a record whose discriminant is
//! unknown is dropped without aborting the rest of the load.

use crate::error::AppError;
use crate::models::Workout;
use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// File-backed slot for the serialized workout collection.
#[derive(Debug, Clone)]
pub struct WorkoutStore {
    path: PathBuf,
}

impl WorkoutStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serialize the full collection, in order, overwriting any prior slot
    /// contents. Every own field is persisted, including derived pace/speed.
    pub fn save(&self, workouts: &[Workout]) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| AppError::Storage(e.to_string()))?;
            }
        }

        let json =
            serde_json::to_string(workouts).map_err(|e| AppError::Storage(e.to_string()))?;
        fs::write(&self.path, json).map_err(|e| AppError::Storage(e.to_string()))?;

        tracing::debug!(count = workouts.len(), "Saved workout collection");
        Ok(())
    }

    /// Load the stored collection, preserving its order.
    ///
    /// Never raises: an absent slot or one that does not hold a JSON array is
    /// a cold start and yields an empty collection. Derived fields are copied
    /// verbatim, not recomputed.
    pub fn load(&self) -> Vec<Workout> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) => {
                if e.kind() != ErrorKind::NotFound {
                    tracing::warn!(error = %e, "Workout slot unreadable, starting empty");
                }
                return Vec::new();
            }
        };

        let records = match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Array(records)) => records,
            Ok(_) => {
                tracing::warn!("Workout slot does not hold an array, starting empty");
                return Vec::new();
            }
            Err(e) => {
                tracing::warn!(error = %e, "Workout slot is malformed, starting empty");
                return Vec::new();
            }
        };

        records.into_iter().filter_map(hydrate).collect()
    }

    /// Remove the slot entirely (whole-collection reset).
    pub fn clear(&self) -> Result<(), AppError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::Storage(e.to_string())),
        }
    }
}

/// Rebuild one typed workout from a stored record, dispatching on its `type`
/// discriminant. Unknown discriminants and records that no longer hydrate
/// into their variant are dropped; the rest of the slot still loads.
fn hydrate(record: Value) -> Option<Workout> {
    let Some(discriminant) = record.get("type").and_then(Value::as_str).map(str::to_owned)
    else {
        tracing::warn!("Dropping workout record without a type discriminant");
        return None;
    };

    match discriminant.as_str() {
        "running" | "cycling" => match serde_json::from_value::<Workout>(record) {
            Ok(workout) => Some(workout),
            Err(e) => {
                tracing::warn!(
                    workout_type = %discriminant,
                    error = %e,
                    "Dropping workout record that failed to hydrate"
                );
                None
            }
        },
        unknown => {
            tracing::warn!(workout_type = %unknown, "Dropping workout record with unknown type");
            None
        }
    }
}
