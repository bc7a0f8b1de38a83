//! Headless collision demo
//!
//! Slides a small triangle back and forth through a larger one at a fixed
//! step and prints the broad- and narrow-phase verdicts for every step.

use anyhow::{Context, Result};
use clap::{Arg, Command};
use log::info;

use collision_engine::foundation::logging::{self, LevelFilter};
use collision_engine::prelude::*;

const DEFAULT_LOG_LEVEL: &str = "info";

fn main() -> Result<()> {
    let matches = Command::new("collision_demo")
        .about("Runs a two-triangle collision scenario and reports the verdict per step")
        .arg(
            Arg::new("scene")
                .short('s')
                .long("scene")
                .value_name("FILE")
                .help("Scenario file (.toml or .ron); built-in defaults when omitted"),
        )
        .arg(
            Arg::new("frames")
                .short('n')
                .long("frames")
                .value_name("N")
                .help("Number of steps to run, overriding the scenario"),
        )
        .arg(
            Arg::new("frame-time")
                .long("frame-time")
                .value_name("SECONDS")
                .help("Simulated seconds per step, overriding the scenario"),
        )
        .arg(
            Arg::new("no-motion")
                .long("no-motion")
                .help("Keep the first triangle still")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("write-default")
                .long("write-default")
                .value_name("FILE")
                .help("Write the default scenario to FILE and exit"),
        )
        .arg(
            Arg::new("log-level")
                .short('l')
                .long("log-level")
                .value_name("LEVEL")
                .help("Log level (off, error, warn, info, debug, trace)")
                .default_value(DEFAULT_LOG_LEVEL),
        )
        .get_matches();

    let level: LevelFilter = matches
        .get_one::<String>("log-level")
        .map_or(DEFAULT_LOG_LEVEL, String::as_str)
        .parse()
        .context("Invalid log level")?;
    logging::init_with_level(level);

    if let Some(path) = matches.get_one::<String>("write-default") {
        ScenarioConfig::default()
            .save_to_file(path)
            .with_context(|| format!("Failed to write default scenario to {}", path))?;
        println!("Wrote default scenario to {}", path);
        return Ok(());
    }

    let mut scenario = match matches.get_one::<String>("scene") {
        Some(path) => ScenarioConfig::load_from_file(path)
            .with_context(|| format!("Failed to load scenario {}", path))?,
        None => ScenarioConfig::default(),
    };

    if let Some(frames) = matches.get_one::<String>("frames") {
        scenario.steps.frames = frames.parse().context("Invalid frame count")?;
    }
    if let Some(frame_time) = matches.get_one::<String>("frame-time") {
        scenario.steps.frame_time = frame_time.parse().context("Invalid frame time")?;
    }
    if matches.get_flag("no-motion") {
        scenario.motion.enabled = false;
    }

    scenario.validate().context("Invalid scenario")?;

    let tally = run_scenario(&scenario, |verdict| println!("{}", CollisionReport(*verdict)))?;

    println!(
        "{} steps: {} separated, {} near miss, {} colliding",
        tally.total(),
        tally.separated,
        tally.near_miss,
        tally.colliding
    );

    Ok(())
}

/// Step the scenario, handing each verdict to `report`
fn run_scenario(scenario: &ScenarioConfig, mut report: impl FnMut(&PairVerdict)) -> Result<VerdictTally> {
    let mut moving = scenario
        .triangle_a
        .to_triangle()
        .context("Invalid triangle_a")?;
    let stationary = scenario
        .triangle_b
        .to_triangle()
        .context("Invalid triangle_b")?;

    let system = PairCollisionSystem::with_tolerances(scenario.tolerances);
    let mut motion = PingPongMotion::new(scenario.motion);
    let colors = VerdictColors::default();
    let mut tally = VerdictTally::default();
    let mut previous: Option<PairVerdict> = None;

    info!(
        "Running '{}' for {} steps of {}s ({} narrow phase)",
        scenario.name,
        scenario.steps.frames,
        scenario.steps.frame_time,
        system.narrow_phase_name()
    );

    for frame in 0..scenario.steps.frames {
        let verdict = system.test_pair(&moving, &stationary);
        report(&verdict);
        tally.record(&verdict);

        if previous != Some(verdict) {
            let frame_colors = colors.frame_colors(&verdict);
            info!(
                "step {}: {} (triangle 1 {}, triangle 2 {})",
                frame,
                CollisionReport(verdict),
                rgb(&frame_colors.first_triangle),
                rgb(&frame_colors.second_triangle)
            );
            previous = Some(verdict);
        }

        motion.advance(&mut moving, scenario.steps.frame_time);
    }

    Ok(tally)
}

fn rgb(color: &Vec3) -> String {
    format!("rgb({:.1}, {:.1}, {:.1})", color.x, color.y, color.z)
}
