// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data models for the application.

pub mod workout;

pub use workout::{Coords, MetricField, Workout, WorkoutDetails, WorkoutType};
