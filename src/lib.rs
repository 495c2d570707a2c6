// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Workout Tracker: log map-anchored running and cycling workouts
//!
//! This crate provides the core of a map-based workout journal: the workout
//! domain model and its validation rules, the polymorphic persisted slot, and
//! the coordinator that sequences creation, validation, rendering and
//! persistence between the external map, form and list collaborators.

pub mod config;
pub mod coordinator;
pub mod error;
pub mod models;
pub mod storage;
pub mod ui;
pub mod validation;

pub use coordinator::Coordinator;
