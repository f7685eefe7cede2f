//! Game state and core simulation types
//!
//! The whole simulation is one [`SimState`] value: the tick routine is its only
//! writer and the renderer reads it between ticks.

use std::f32::consts::FRAC_PI_2;

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::belt::generate_belt;
use crate::config::Config;
use crate::consts::{MIN_ASTEROID_VERTICES, NOSE_OFFSET};
use crate::error::{EntityError, Error};
use crate::heading_vector;
use crate::input::Rotation;

/// A laser bolt fired by the ship
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Laser {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Distance traveled so far (pixels)
    pub dist: f32,
}

impl Laser {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel, dist: 0.0 }
    }
}

/// An asteroid with a fixed jagged silhouette
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asteroid {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Rotation of the silhouette (radians)
    pub phase: f32,
    /// Silhouette spin (radians/sec)
    #[serde(default)]
    pub spin: f32,
    radius: f32,
    /// Per-vertex radius multipliers, one per vertex
    offsets: Vec<f32>,
}

impl Asteroid {
    /// Build an asteroid; the vertex count is the number of offsets
    pub fn new(
        pos: Vec2,
        vel: Vec2,
        radius: f32,
        phase: f32,
        offsets: Vec<f32>,
    ) -> Result<Self, EntityError> {
        if radius.is_nan() || radius < 0.0 {
            return Err(EntityError::NegativeRadius(radius));
        }
        if offsets.len() < MIN_ASTEROID_VERTICES {
            return Err(EntityError::TooFewVertices {
                found: offsets.len(),
                min: MIN_ASTEROID_VERTICES,
            });
        }
        Ok(Self {
            pos,
            vel,
            phase,
            spin: 0.0,
            radius,
            offsets,
        })
    }

    /// Round, motionless asteroid (handy for scripted setups)
    pub fn round(pos: Vec2, radius: f32, vertices: usize) -> Result<Self, EntityError> {
        Self::new(pos, Vec2::ZERO, radius, 0.0, vec![1.0; vertices])
    }

    pub fn with_spin(mut self, spin: f32) -> Self {
        self.spin = spin;
        self
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.offsets.len()
    }

    #[inline]
    pub fn offsets(&self) -> &[f32] {
        &self.offsets
    }
}

/// The player's ship
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ship {
    pub pos: Vec2,
    /// Heading (radians, screen space, π/2 = up)
    pub heading: f32,
    pub radius: f32,
    /// Velocity (pixels/sec)
    pub vel: Vec2,
    /// Current rotation rate (radians/sec)
    pub rotation: f32,
    pub turning: Rotation,
    pub thrusting: bool,
    /// Cleared by a shot, re-armed when the shoot intent is released
    pub can_shoot: bool,
    /// Ticks left in the explosion (0 = alive)
    pub explode_ticks: u32,
    /// Ticks left in the current blink phase
    pub blink_ticks: u32,
    /// Blink phases left in the invulnerability window
    pub blink_count: u32,
    pub lasers: Vec<Laser>,
}

impl Ship {
    /// Fresh ship at the screen center with full invulnerability
    pub fn new(config: &Config) -> Self {
        Self {
            pos: config.center(),
            heading: FRAC_PI_2,
            radius: config.ship_radius(),
            vel: Vec2::ZERO,
            rotation: 0.0,
            turning: Rotation::None,
            thrusting: false,
            can_shoot: true,
            explode_ticks: 0,
            blink_ticks: config.blink_ticks(),
            blink_count: config.blink_count(),
            lasers: Vec::new(),
        }
    }

    #[inline]
    pub fn is_exploding(&self) -> bool {
        self.explode_ticks > 0
    }

    /// Post-respawn window where asteroids pass through the ship
    #[inline]
    pub fn is_invulnerable(&self) -> bool {
        self.blink_count > 0
    }

    /// Drawn this tick (hidden while exploding and on odd blink phases)
    #[inline]
    pub fn is_visible(&self) -> bool {
        !self.is_exploding() && self.blink_count % 2 == 0
    }

    /// Point lasers leave from
    pub fn nose(&self) -> Vec2 {
        self.pos + heading_vector(self.heading) * self.radius * NOSE_OFFSET
    }

    /// Start the explosion countdown
    pub fn explode(&mut self, ticks: u32) {
        self.explode_ticks = ticks.max(1);
    }
}

/// Things that happened during a tick, in the order they happened
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SimEvent {
    LaserFired { pos: Vec2 },
    LaserExpired { pos: Vec2 },
    AsteroidDestroyed { pos: Vec2, radius: f32 },
    /// Last asteroid is gone
    BeltCleared,
    ShipExploded { pos: Vec2 },
    ShipRespawned,
}

/// RNG state wrapper for serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    pub stream: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed, stream: 0 }
    }

    /// Fresh generator for the next batch of random draws
    pub fn next_rng(&mut self) -> Pcg32 {
        let rng = Pcg32::seed_from_u64(self.seed.wrapping_add(self.stream));
        self.stream += 1;
        rng
    }
}

/// Complete simulation state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimState {
    pub config: Config,
    pub rng_state: RngState,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub ship: Ship,
    /// Live asteroids, in creation order
    pub asteroids: Vec<Asteroid>,
}

impl SimState {
    /// Validate the config, place the ship and generate the starting belt
    pub fn new(config: Config) -> Result<Self, Error> {
        config.validate()?;

        let mut state = Self {
            rng_state: RngState::new(config.seed),
            time_ticks: 0,
            ship: Ship::new(&config),
            asteroids: Vec::new(),
            config,
        };
        state.new_belt()?;

        log::info!(
            "New game: seed {}, {} asteroids",
            state.config.seed,
            state.asteroids.len()
        );
        Ok(state)
    }

    /// Replace the asteroids with a freshly generated belt around the ship
    pub fn new_belt(&mut self) -> Result<(), EntityError> {
        let mut rng = self.rng_state.next_rng();
        self.asteroids = generate_belt(&self.config, self.ship.pos, &mut rng)?;
        Ok(())
    }

    /// Fixed timestep for this state's config
    #[inline]
    pub fn dt(&self) -> f32 {
        self.config.dt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asteroid_rejects_bad_shapes() {
        assert_eq!(
            Asteroid::round(Vec2::ZERO, -1.0, 8),
            Err(EntityError::NegativeRadius(-1.0))
        );
        assert_eq!(
            Asteroid::round(Vec2::ZERO, 10.0, 2),
            Err(EntityError::TooFewVertices { found: 2, min: 3 })
        );
        assert!(matches!(
            Asteroid::round(Vec2::ZERO, f32::NAN, 8),
            Err(EntityError::NegativeRadius(r)) if r.is_nan()
        ));

        let asteroid = Asteroid::round(Vec2::ZERO, 10.0, 7).unwrap();
        assert_eq!(asteroid.vertex_count(), 7);
        assert_eq!(asteroid.offsets().len(), asteroid.vertex_count());
    }

    #[test]
    fn test_new_ship() {
        let config = Config::default();
        let ship = Ship::new(&config);
        assert_eq!(ship.pos, Vec2::new(400.0, 300.0));
        assert_eq!(ship.vel, Vec2::ZERO);
        assert!(ship.is_invulnerable());
        assert!(ship.is_visible());
        assert!(!ship.is_exploding());

        // Nose points straight up, 4/3 radius from center
        let nose = ship.nose();
        assert!((nose.x - 400.0).abs() < 0.001);
        assert!((nose.y - (300.0 - 20.0)).abs() < 0.001);
    }

    #[test]
    fn test_explode_never_zero_ticks() {
        let mut ship = Ship::new(&Config::default());
        ship.explode(0);
        assert!(ship.is_exploding());
        assert!(!ship.is_visible());
    }

    #[test]
    fn test_new_state_validates_config() {
        let config = Config {
            tick_rate: -5.0,
            ..Default::default()
        };
        assert!(matches!(SimState::new(config), Err(Error::Config(_))));
    }

    #[test]
    fn test_same_seed_same_belt() {
        let config = Config {
            seed: 7,
            ..Default::default()
        };
        let a = SimState::new(config.clone()).unwrap();
        let b = SimState::new(config).unwrap();
        assert_eq!(a.asteroids, b.asteroids);
    }

    #[test]
    fn test_new_belt_draws_new_stream() {
        let mut state = SimState::new(Config::default()).unwrap();
        let first = state.asteroids.clone();
        state.new_belt().unwrap();
        assert_eq!(state.asteroids.len(), first.len());
        assert_ne!(state.asteroids, first);
    }
}
