// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Console implementations of the collaborator contracts.
//!
//! Deliberately thin: they print what a real map, list and form would draw,
//! so the binary can exercise the full flow from a terminal. No domain logic
//! lives here.

use super::{ListView, MapError, MapView, Notifier, WorkoutForm};
use crate::models::{Coords, Workout};
use std::env;

/// Fallback position when no geolocation override is set.
const FALLBACK_POSITION: Coords = Coords(37.7749, -122.4194);

/// Terminal stand-in for the map widget.
#[derive(Debug, Default)]
pub struct ConsoleMap {
    ready: bool,
}

#[async_trait::async_trait]
impl MapView for ConsoleMap {
    async fn init(&mut self) -> Result<(), MapError> {
        let position = current_position().await?;
        self.ready = true;
        println!(
            "[map] centered on ({:.4}, {:.4}), zoom 13",
            position.lat(),
            position.lng()
        );
        Ok(())
    }

    fn render_marker(&mut self, workout: &Workout) {
        if !self.ready {
            return;
        }
        println!(
            "[map] {} marker at ({:.4}, {:.4}): {} {}",
            workout.workout_type().popup_class(),
            workout.coords.lat(),
            workout.coords.lng(),
            workout.workout_type().badge(),
            workout.description
        );
    }

    fn move_to(&mut self, workout: &Workout) {
        if !self.ready {
            return;
        }
        println!(
            "[map] moving to ({:.4}, {:.4})",
            workout.coords.lat(),
            workout.coords.lng()
        );
    }
}

/// Stand-in for the browser geolocation API: an env override, else a fixed
/// fallback position.
async fn current_position() -> Result<Coords, MapError> {
    match env::var("WORKOUT_HOME_POSITION") {
        Ok(raw) => parse_position(&raw)
            .ok_or_else(|| MapError::Geolocation(format!("cannot parse position {raw:?}"))),
        Err(_) => Ok(FALLBACK_POSITION),
    }
}

fn parse_position(raw: &str) -> Option<Coords> {
    let (lat, lng) = raw.split_once(',')?;
    Some(Coords(
        lat.trim().parse().ok()?,
        lng.trim().parse().ok()?,
    ))
}

/// Prints workout rows the way the sidebar list would render them.
#[derive(Debug, Default)]
pub struct ConsoleList;

impl ListView for ConsoleList {
    fn render(&mut self, workout: &Workout) {
        let metrics: Vec<String> = workout
            .metric_fields()
            .into_iter()
            .map(|f| format!("{} {} {}", f.icon, f.value, f.unit))
            .collect();
        println!(
            "[list] #{} {} {} | 📍 {} km | ⏱ {} min | {}",
            workout.id,
            workout.workout_type().badge(),
            workout.description,
            workout.distance,
            workout.duration,
            metrics.join(" | ")
        );
    }
}

/// Prints the entry-form prompt.
#[derive(Debug, Default)]
pub struct ConsoleForm;

impl WorkoutForm for ConsoleForm {
    fn show(&mut self, location: Coords) {
        println!(
            "[form] new workout at ({:.4}, {:.4}): enter `running <km> <min> <spm>` or `cycling <km> <min> <m>`",
            location.lat(),
            location.lng()
        );
    }

    fn close(&mut self) {
        println!("[form] closed");
    }
}

/// Error banner analog: messages go to stderr.
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&mut self, message: &str) {
        eprintln!("⚠️  {message}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_position() {
        assert_eq!(parse_position("10.5, -20.25"), Some(Coords(10.5, -20.25)));
        assert_eq!(parse_position("37,122"), Some(Coords(37.0, 122.0)));
        assert_eq!(parse_position("garbage"), None);
        assert_eq!(parse_position("1.0;2.0"), None);
    }
}
