//! Game driver
//!
//! Owns the simulation state and runs one frame at a time:
//! clock fires → buffered intents are taken → sim ticks → renderer paints.

use crate::clock::FixedClock;
use crate::config::Config;
use crate::error::Error;
use crate::input::{Action, IntentBuffer, Intents};
use crate::renderer::{Renderer, Snapshot};
use crate::sim::{SimEvent, SimState, tick};

/// Running totals, useful for headless runs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct GameStats {
    pub ticks: u64,
    pub lasers_fired: u32,
    pub asteroids_destroyed: u32,
    pub ship_losses: u32,
    pub belts_cleared: u32,
}

/// Game instance holding all state
pub struct Game {
    state: SimState,
    input: IntentBuffer,
    clock: FixedClock,
    stats: GameStats,
}

impl Game {
    pub fn new(config: Config) -> Result<Self, Error> {
        let input = IntentBuffer::new(config.keys.clone());
        let clock = FixedClock::new(config.dt());
        let state = SimState::new(config)?;

        Ok(Self {
            state,
            input,
            clock,
            stats: GameStats::default(),
        })
    }

    /// Start over with a new seed, keeping everything else
    pub fn restart(&mut self, seed: u64) -> Result<(), Error> {
        let mut config = self.state.config.clone();
        config.seed = seed;
        self.state = SimState::new(config)?;
        self.input.clear();
        self.clock.reset();
        self.stats = GameStats::default();
        log::info!("Game restarted with seed: {}", seed);
        Ok(())
    }

    pub fn state(&self) -> &SimState {
        &self.state
    }

    pub fn stats(&self) -> GameStats {
        self.stats
    }

    pub fn key_down(&mut self, code: &str) -> bool {
        self.input.key_down(code)
    }

    pub fn key_up(&mut self, code: &str) -> bool {
        self.input.key_up(code)
    }

    pub fn press(&mut self, action: Action) {
        self.input.press(action);
    }

    pub fn release(&mut self, action: Action) {
        self.input.release(action);
    }

    /// Window lost focus: let go of every key
    pub fn blur(&mut self) {
        self.input.clear();
    }

    /// Run the ticks due after `elapsed` seconds, then paint once
    ///
    /// Returns the number of ticks run.
    pub fn frame<R: Renderer>(&mut self, elapsed: f32, renderer: &mut R) -> Result<u32, Error> {
        let ticks = self.clock.advance(elapsed);
        for _ in 0..ticks {
            let intents = self.input.take();
            self.step(&intents)?;
        }
        renderer.paint(&Snapshot::capture(&self.state));
        Ok(ticks)
    }

    /// Run exactly one tick with the given intents
    ///
    /// Fails only if a cleared belt cannot be replaced, which needs a config
    /// that was changed after validation.
    pub fn step(&mut self, intents: &Intents) -> Result<Vec<SimEvent>, Error> {
        let dt = self.clock.dt();
        let events = tick(&mut self.state, intents, dt);
        self.stats.ticks += 1;
        for event in &events {
            self.handle_event(event)?;
        }
        Ok(events)
    }

    fn handle_event(&mut self, event: &SimEvent) -> Result<(), Error> {
        match event {
            SimEvent::LaserFired { .. } => self.stats.lasers_fired += 1,
            SimEvent::AsteroidDestroyed { .. } => self.stats.asteroids_destroyed += 1,
            SimEvent::ShipExploded { .. } => self.stats.ship_losses += 1,
            SimEvent::BeltCleared => {
                self.stats.belts_cleared += 1;
                log::info!("Belt cleared, spawning a new one");
                self.state.new_belt()?;
            }
            SimEvent::LaserExpired { .. } | SimEvent::ShipRespawned => {}
        }
        Ok(())
    }
}
