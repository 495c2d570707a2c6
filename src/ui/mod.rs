// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Collaborator contracts for the map, form, list and error surfaces.
//!
//! The coordinator only ever talks to these traits; rendering fidelity and
//! widget behavior live entirely behind them. The console implementations in
//! [`console`] are the shims the binary wires in.

pub mod console;

use crate::models::{Coords, Workout, WorkoutType};
use serde::{Deserialize, Serialize};

/// Geographic point of a map click.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// Click event emitted by the map collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapClick {
    pub latlng: LatLng,
}

/// Raw form submission payload.
///
/// Both metric fields are always present; the one that does not apply to the
/// chosen type is ignored by the factory.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSubmission {
    #[serde(rename = "type")]
    pub workout_type: WorkoutType,
    pub distance: f64,
    pub duration: f64,
    pub cadence: f64,
    pub elevation: f64,
    pub coords: Coords,
}

impl WorkoutSubmission {
    /// The variant metric that applies to the chosen type.
    pub fn extra_metric(&self) -> f64 {
        match self.workout_type {
            WorkoutType::Running => self.cadence,
            WorkoutType::Cycling => self.elevation,
        }
    }
}

/// Map collaborator. Initialization (geolocation acquisition) is the one
/// genuinely asynchronous operation in the system.
#[async_trait::async_trait]
pub trait MapView {
    async fn init(&mut self) -> Result<(), MapError>;
    fn render_marker(&mut self, workout: &Workout);
    fn move_to(&mut self, workout: &Workout);
}

/// Workout list renderer.
pub trait ListView {
    fn render(&mut self, workout: &Workout);

    fn render_all(&mut self, workouts: &[Workout]) {
        for workout in workouts {
            self.render(workout);
        }
    }
}

/// Workout entry form.
pub trait WorkoutForm {
    fn show(&mut self, location: Coords);
    fn close(&mut self);
}

/// User-facing error surface.
pub trait Notifier {
    fn notify(&mut self, message: &str);
}

/// Map collaborator failures.
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("Geolocation unavailable: {0}")]
    Geolocation(String),

    #[error("Map widget error: {0}")]
    Widget(String),
}
