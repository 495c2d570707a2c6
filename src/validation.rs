// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Pure validation of raw workout input.
//!
//! Stateless; no access to the collection or the store. Inputs that pass here
//! go straight to the factory, which performs no re-validation.

use crate::models::WorkoutType;

/// True iff every value is a finite real number (rejects NaN and infinities).
pub fn is_finite_number(values: &[f64]) -> bool {
    values.iter().all(|v| v.is_finite())
}

/// True iff every value is strictly greater than zero.
pub fn is_positive(values: &[f64]) -> bool {
    values.iter().all(|v| *v > 0.0)
}

/// Validation failures, carrying the user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Running inputs must be positive numbers!")]
    Running,

    #[error("Cycling distance and duration must be positive numbers!")]
    Cycling,
}

/// Running input: distance, duration and cadence must all be finite and
/// strictly positive.
pub fn validate_running(
    distance: f64,
    duration: f64,
    cadence: f64,
) -> Result<(), ValidationError> {
    let inputs = [distance, duration, cadence];
    if !is_finite_number(&inputs) || !is_positive(&inputs) {
        return Err(ValidationError::Running);
    }
    Ok(())
}

/// Cycling input: all three values must be finite; distance and duration must
/// be strictly positive. Elevation has no sign constraint (flat and downhill
/// routes are valid).
pub fn validate_cycling(
    distance: f64,
    duration: f64,
    elevation: f64,
) -> Result<(), ValidationError> {
    if !is_finite_number(&[distance, duration, elevation]) || !is_positive(&[distance, duration]) {
        return Err(ValidationError::Cycling);
    }
    Ok(())
}

/// Dispatch on the workout discriminant. `extra` is cadence for running and
/// elevation for cycling.
pub fn validate(
    workout_type: WorkoutType,
    distance: f64,
    duration: f64,
    extra: f64,
) -> Result<(), ValidationError> {
    match workout_type {
        WorkoutType::Running => validate_running(distance, duration, extra),
        WorkoutType::Cycling => validate_cycling(distance, duration, extra),
    }
}
