//! Asteroids entry point
//!
//! Runs the simulation headless for a fixed number of ticks, optionally with
//! a scripted pilot, and prints a JSON summary at the end.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use asteroids::game::GameStats;
use asteroids::input::Action;
use asteroids::renderer::LogRenderer;
use asteroids::{Config, Game};

#[derive(Debug, Parser)]
#[command(name = "asteroids", about = "Headless Asteroids simulation")]
struct Args {
    /// JSON config file (missing fields use defaults)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Number of ticks to run
    #[arg(long, default_value_t = 900)]
    ticks: u32,

    /// Fly the ship with a simple scripted pilot
    #[arg(long)]
    autopilot: bool,

    /// Log a frame summary every N frames
    #[arg(long, default_value_t = 30)]
    log_every: u64,
}

#[derive(Debug, Serialize)]
struct RunSummary {
    seed: u64,
    stats: GameStats,
    asteroids_left: usize,
    lasers_in_flight: usize,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => Config::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }

    log::info!("Asteroids (headless) starting, {} ticks", args.ticks);

    let dt = config.dt();
    let seed = config.seed;
    let mut game = Game::new(config).context("starting game")?;
    let mut renderer = LogRenderer::new(args.log_every);

    for n in 0..args.ticks {
        if args.autopilot {
            pilot(&mut game, n);
        }
        game.frame(dt, &mut renderer)?;
    }

    let state = game.state();
    let summary = RunSummary {
        seed,
        stats: game.stats(),
        asteroids_left: state.asteroids.len(),
        lasers_in_flight: state.ship.lasers.len(),
    };
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

/// Spin slowly, tap the trigger, and give short bursts of thrust
fn pilot(game: &mut Game, n: u32) {
    if n % 90 < 20 {
        game.press(Action::RotateLeft);
    } else {
        game.release(Action::RotateLeft);
    }

    if n % 120 < 10 {
        game.press(Action::Thrust);
    } else {
        game.release(Action::Thrust);
    }

    if n % 6 == 0 {
        game.press(Action::Shoot);
    } else {
        game.release(Action::Shoot);
    }
}
