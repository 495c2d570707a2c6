// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout entity: common fields plus the running/cycling variant.
//!
//! Inputs are assumed already validated (see [`crate::validation`]); the
//! factory performs no re-validation. Derived metrics (pace, speed) and the
//! description are computed exactly once at construction and persisted as-is.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Geographic point as (latitude, longitude). Serializes as a 2-element array.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coords(pub f64, pub f64);

impl Coords {
    pub fn lat(&self) -> f64 {
        self.0
    }

    pub fn lng(&self) -> f64 {
        self.1
    }
}

/// Workout discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutType {
    Running,
    Cycling,
}

impl WorkoutType {
    /// Lowercase discriminant as it appears in persisted records.
    pub fn label(&self) -> &'static str {
        match self {
            WorkoutType::Running => "running",
            WorkoutType::Cycling => "cycling",
        }
    }

    /// Emoji badge shown next to the workout title and in marker popups.
    pub fn badge(&self) -> &'static str {
        match self {
            WorkoutType::Running => "🏃‍♂️",
            WorkoutType::Cycling => "🚴‍♀️",
        }
    }

    /// CSS class of the marker popup for this variant.
    pub fn popup_class(&self) -> &'static str {
        match self {
            WorkoutType::Running => "running-popup",
            WorkoutType::Cycling => "cycling-popup",
        }
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Variant-specific fields, tagged with the `type` discriminant.
///
/// Flattened into [`Workout`], so a persisted record is one flat object
/// carrying `type` alongside the common fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum WorkoutDetails {
    Running {
        /// Steps per minute
        cadence: f64,
        /// Minutes per km, duration / distance
        pace: f64,
    },
    Cycling {
        /// Elevation gain in meters; zero and negative are valid
        elevation: f64,
        /// Km per hour, distance / (duration / 60)
        speed: f64,
    },
}

/// A display-ready `{icon, value, unit}` triple for one variant metric.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricField {
    pub icon: &'static str,
    pub value: String,
    pub unit: &'static str,
}

/// A logged workout, anchored to a geographic point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    /// Last 10 digits of the millisecond creation timestamp. Not guaranteed
    /// unique: two workouts created within the same truncation window collide.
    pub id: String,
    /// Creation timestamp, immutable after construction
    pub date: DateTime<Utc>,
    /// Anchor point as (lat, lng)
    pub coords: Coords,
    /// Distance in kilometers
    pub distance: f64,
    /// Duration in minutes
    pub duration: f64,
    /// `"<Capitalized type> on <Month> <Day>"`, derived at construction
    pub description: String,
    #[serde(flatten)]
    pub details: WorkoutDetails,
}

impl Workout {
    /// Build a workout from validated input.
    ///
    /// `extra` is the variant metric: cadence for running, elevation for
    /// cycling. The derived pace/speed is computed here and never recomputed.
    pub fn new(
        workout_type: WorkoutType,
        coords: Coords,
        distance: f64,
        duration: f64,
        extra: f64,
    ) -> Self {
        Self::new_at(Utc::now(), workout_type, coords, distance, duration, extra)
    }

    /// Build a workout with an explicit creation time.
    pub fn new_at(
        date: DateTime<Utc>,
        workout_type: WorkoutType,
        coords: Coords,
        distance: f64,
        duration: f64,
        extra: f64,
    ) -> Self {
        let details = match workout_type {
            WorkoutType::Running => WorkoutDetails::Running {
                cadence: extra,
                pace: duration / distance,
            },
            WorkoutType::Cycling => WorkoutDetails::Cycling {
                elevation: extra,
                speed: distance / (duration / 60.0),
            },
        };

        Self {
            id: derive_id(date),
            date,
            coords,
            distance,
            duration,
            description: describe(workout_type, date),
            details,
        }
    }

    /// The discriminant of this workout's variant.
    pub fn workout_type(&self) -> WorkoutType {
        match self.details {
            WorkoutDetails::Running { .. } => WorkoutType::Running,
            WorkoutDetails::Cycling { .. } => WorkoutType::Cycling,
        }
    }

    /// Ordered variant-specific metric fields for rendering: pace then
    /// cadence for running, speed then elevation for cycling.
    ///
    /// This is the one extension point renderers use to show variant detail
    /// without knowing which variant they hold.
    pub fn metric_fields(&self) -> Vec<MetricField> {
        match self.details {
            WorkoutDetails::Running { cadence, pace } => vec![
                MetricField {
                    icon: "⚡️",
                    value: format!("{pace:.1}"),
                    unit: "min/km",
                },
                MetricField {
                    icon: "🦶🏼",
                    value: format_metric(cadence),
                    unit: "spm",
                },
            ],
            WorkoutDetails::Cycling { elevation, speed } => vec![
                MetricField {
                    icon: "⚡️",
                    value: format!("{speed:.1}"),
                    unit: "km/h",
                },
                MetricField {
                    icon: "⛰",
                    value: format_metric(elevation),
                    unit: "m",
                },
            ],
        }
    }
}

/// Decimal string of the millisecond timestamp, truncated to its last 10
/// characters. Collisions within a truncation window are accepted (no retry).
fn derive_id(date: DateTime<Utc>) -> String {
    let millis = date.timestamp_millis().to_string();
    let start = millis.len().saturating_sub(10);
    millis[start..].to_string()
}

/// `"Running on August 24"` style label; the month renders as a word.
fn describe(workout_type: WorkoutType, date: DateTime<Utc>) -> String {
    format!(
        "{} on {}",
        capitalize(workout_type.label()),
        date.format("%B %-d")
    )
}

fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Plain number rendering: integers without a trailing `.0`.
fn format_metric(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
