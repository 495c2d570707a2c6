// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Persistence layer (single JSON slot).

pub mod store;

pub use store::WorkoutStore;
