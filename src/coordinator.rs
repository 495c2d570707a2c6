// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! End-to-end workout flow coordination.
//!
//! The coordinator is the only mutable owner of the workout collection and
//! sequences the core workflow:
//! 1. A map click opens the form seeded with the click location
//! 2. Form submission is validated
//! 3. Valid input becomes a workout, appended to the collection
//! 4. A map marker and a list row are rendered
//! 5. The full collection is saved to the slot
//!
//! All handlers run synchronously, one at a time; only map initialization at
//! startup is asynchronous, and it never touches the collection.

use crate::models::{Coords, Workout};
use crate::storage::WorkoutStore;
use crate::ui::{ListView, MapClick, MapView, Notifier, WorkoutForm, WorkoutSubmission};
use crate::validation;

/// Message surfaced when geolocation / map startup fails.
const POSITION_ERROR_MESSAGE: &str = "Could not get your position! Please try again.";

/// Where the coordinator is between events.
#[derive(Debug, Clone, Copy, PartialEq)]
enum State {
    /// No pending input.
    Idle,
    /// The form is open, seeded with a click location.
    AwaitingInput(Coords),
}

/// Stateful mediator between the map, form, list renderer, validator,
/// factory and store.
pub struct Coordinator<M, L, F, N> {
    workouts: Vec<Workout>,
    state: State,
    store: WorkoutStore,
    map: M,
    list: L,
    form: F,
    notifier: N,
}

impl<M, L, F, N> Coordinator<M, L, F, N>
where
    M: MapView,
    L: ListView,
    F: WorkoutForm,
    N: Notifier,
{
    pub fn new(store: WorkoutStore, map: M, list: L, form: F, notifier: N) -> Self {
        Self {
            workouts: Vec::new(),
            state: State::Idle,
            store,
            map,
            list,
            form,
            notifier,
        }
    }

    /// Application start: load the stored collection, render it, then bring
    /// up the map. A map failure is surfaced once; the list and the
    /// collection stay fully usable without it.
    pub async fn startup(&mut self) {
        self.workouts = self.store.load();
        tracing::info!(count = self.workouts.len(), "Loaded stored workouts");
        self.list.render_all(&self.workouts);

        match self.map.init().await {
            Ok(()) => {
                for workout in &self.workouts {
                    self.map.render_marker(workout);
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Map initialization failed");
                self.notifier.notify(POSITION_ERROR_MESSAGE);
            }
        }
    }

    /// Map click: open the form seeded with the click location.
    pub fn handle_map_click(&mut self, event: MapClick) {
        let coords = Coords(event.latlng.lat, event.latlng.lng);
        self.state = State::AwaitingInput(coords);
        self.form.show(coords);
    }

    /// Form submission: validate, then commit.
    ///
    /// On invalid input the error surface is notified and the form stays open
    /// for correction. On valid input the commit ordering is fixed: construct,
    /// append, marker render, row render, save. Renders are optimistic; the
    /// save is best-effort and its failure is only logged.
    pub fn handle_submit(&mut self, submission: WorkoutSubmission) {
        let State::AwaitingInput(_) = self.state else {
            tracing::warn!("Ignoring form submission with no pending location");
            return;
        };

        if let Err(e) = validation::validate(
            submission.workout_type,
            submission.distance,
            submission.duration,
            submission.extra_metric(),
        ) {
            self.notifier.notify(&e.to_string());
            return;
        }

        let workout = Workout::new(
            submission.workout_type,
            submission.coords,
            submission.distance,
            submission.duration,
            submission.extra_metric(),
        );
        tracing::info!(
            id = %workout.id,
            workout_type = %submission.workout_type,
            "Workout committed"
        );

        self.workouts.push(workout.clone());
        self.map.render_marker(&workout);
        self.list.render(&workout);

        if let Err(e) = self.store.save(&self.workouts) {
            tracing::error!(error = %e, "Failed to save workout collection");
        }

        self.form.close();
        self.state = State::Idle;
    }

    /// List-row selection: center the map on that workout. Unknown ids are
    /// ignored; no state transition either way.
    pub fn handle_row_selected(&mut self, id: &str) {
        if let Some(workout) = self.workouts.iter().find(|w| w.id == id) {
            self.map.move_to(workout);
        }
    }

    /// Remove every stored workout (the only removal path; individual
    /// workouts are never deleted or mutated).
    pub fn reset(&mut self) -> crate::error::Result<()> {
        self.store.clear()?;
        self.workouts.clear();
        self.state = State::Idle;
        tracing::info!("Workout collection reset");
        Ok(())
    }

    /// The owned collection, in insertion (= display) order.
    pub fn workouts(&self) -> &[Workout] {
        &self.workouts
    }
}
