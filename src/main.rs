// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout Tracker console app
//!
//! Wires the coordinator to console collaborators and drives the three
//! external events (map click, form submission, list-row selection) from a
//! stdin command loop.

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use workout_tracker::{
    config::Config,
    models::{Coords, WorkoutType},
    storage::WorkoutStore,
    ui::console::{ConsoleForm, ConsoleList, ConsoleMap, ConsoleNotifier},
    ui::{LatLng, MapClick, WorkoutSubmission},
    Coordinator,
};

type ConsoleCoordinator = Coordinator<ConsoleMap, ConsoleList, ConsoleForm, ConsoleNotifier>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let config = Config::from_env()?;
    tracing::info!(store = %config.store_path.display(), "Starting workout tracker");

    let store = WorkoutStore::new(&config.store_path);
    let mut coordinator = Coordinator::new(
        store,
        ConsoleMap::default(),
        ConsoleList::default(),
        ConsoleForm::default(),
        ConsoleNotifier::default(),
    );
    coordinator.startup().await;

    print_help();
    run_command_loop(&mut coordinator).await?;
    Ok(())
}

async fn run_command_loop(coordinator: &mut ConsoleCoordinator) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    // One pending click location stands in for the open form's seed coords.
    let mut pending: Option<Coords> = None;

    while let Some(line) = lines.next_line().await? {
        let args: Vec<&str> = line.split_whitespace().collect();
        match args.as_slice() {
            ["click", lat, lng] => match (lat.parse(), lng.parse()) {
                (Ok(lat), Ok(lng)) => {
                    pending = Some(Coords(lat, lng));
                    coordinator.handle_map_click(MapClick {
                        latlng: LatLng { lat, lng },
                    });
                }
                _ => eprintln!("click: expected two numbers"),
            },
            ["running", distance, duration, cadence] => {
                submit(
                    coordinator,
                    pending,
                    WorkoutType::Running,
                    distance,
                    duration,
                    cadence,
                );
            }
            ["cycling", distance, duration, elevation] => {
                submit(
                    coordinator,
                    pending,
                    WorkoutType::Cycling,
                    distance,
                    duration,
                    elevation,
                );
            }
            ["goto", id] => coordinator.handle_row_selected(id),
            ["reset"] => {
                if let Err(e) = coordinator.reset() {
                    eprintln!("reset failed: {e}");
                }
            }
            ["quit"] | ["exit"] => break,
            [] => {}
            _ => print_help(),
        }
    }

    Ok(())
}

/// Parse the three metric arguments and feed a submission payload to the
/// coordinator. The inapplicable metric field is sent as zero and ignored.
fn submit(
    coordinator: &mut ConsoleCoordinator,
    pending: Option<Coords>,
    workout_type: WorkoutType,
    distance: &str,
    duration: &str,
    extra: &str,
) {
    let Some(coords) = pending else {
        eprintln!("no location selected: `click <lat> <lng>` first");
        return;
    };
    let (Ok(distance), Ok(duration), Ok(extra)) =
        (distance.parse(), duration.parse(), extra.parse())
    else {
        eprintln!("{workout_type}: expected three numbers");
        return;
    };

    let (cadence, elevation) = match workout_type {
        WorkoutType::Running => (extra, 0.0),
        WorkoutType::Cycling => (0.0, extra),
    };
    coordinator.handle_submit(WorkoutSubmission {
        workout_type,
        distance,
        duration,
        cadence,
        elevation,
        coords,
    });
}

fn print_help() {
    println!("commands:");
    println!("  click <lat> <lng>                   select a spot on the map");
    println!("  running <km> <min> <spm>            log a run at the selected spot");
    println!("  cycling <km> <min> <elevation-m>    log a ride at the selected spot");
    println!("  goto <id>                           center the map on a workout");
    println!("  reset                               delete all stored workouts");
    println!("  quit");
}

/// Initialize logging with an env-driven filter.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .compact()
        .with_target(false);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("workout_tracker=info".parse().unwrap())
                .add_directive("warn".parse().unwrap()),
        )
        .with(format)
        .init();
}
