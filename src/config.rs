//! Startup configuration
//!
//! Every tunable the simulation reads lives here. Durations are in seconds,
//! distances in pixels, and speeds per second; the per-tick values the
//! simulation actually counts with are derived from the tick rate.

use std::f32::consts::PI;
use std::fs;
use std::path::{Path, PathBuf};

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::input::KeyBindings;

/// Why a configuration could not be used
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config value `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Game configuration, fixed at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Simulation ticks per second
    pub tick_rate: f32,
    /// Friction coefficient of space (0 = none, 1 = lots)
    pub friction: f32,

    // === Lasers ===
    /// Maximum lasers on screen at once
    pub laser_max: usize,
    /// Laser speed in pixels per second
    pub laser_speed: f32,
    /// Maximum laser travel as a fraction of screen width
    pub laser_range: f32,

    // === Asteroids ===
    /// Jaggedness of the asteroids (0 = none, 1 = lots)
    pub asteroid_jaggedness: f32,
    /// Starting number of asteroids
    pub asteroid_count: usize,
    /// Starting asteroid size (diameter) in pixels
    pub asteroid_size: f32,
    /// Max starting speed of asteroids per axis, pixels per second
    pub asteroid_speed: f32,
    /// Average number of vertices on each asteroid
    pub asteroid_vertices: usize,
    /// Max spin of an asteroid silhouette in radians per second
    pub asteroid_spin: f32,

    // === Ship ===
    /// Duration of the explosion in seconds
    pub ship_explode_duration: f32,
    /// Duration of one blink phase during invulnerability in seconds
    pub ship_blink_duration: f32,
    /// Duration of post-respawn invulnerability in seconds
    pub ship_invulnerability_duration: f32,
    /// Ship height in pixels
    pub ship_size: f32,
    /// Turn speed in degrees per second
    pub ship_turn_speed: f32,
    /// Acceleration of the ship in pixels per second squared
    pub ship_thrust: f32,

    // === Screen ===
    pub screen_width: f32,
    pub screen_height: f32,

    /// Seed for asteroid generation
    pub seed: u64,

    /// Key code to action mapping for the input source
    pub keys: KeyBindings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_rate: 30.0,
            friction: 0.7,

            laser_max: 10,
            laser_speed: 500.0,
            laser_range: 0.6,

            asteroid_jaggedness: 0.4,
            asteroid_count: 3,
            asteroid_size: 100.0,
            asteroid_speed: 50.0,
            asteroid_vertices: 10,
            asteroid_spin: 0.0,

            ship_explode_duration: 0.5,
            ship_blink_duration: 0.1,
            ship_invulnerability_duration: 3.0,
            ship_size: 30.0,
            ship_turn_speed: 360.0,
            ship_thrust: 150.0,

            screen_width: 800.0,
            screen_height: 600.0,

            seed: 0,

            keys: KeyBindings::default(),
        }
    }
}

impl Config {
    /// Parse a (possibly partial) JSON config; missing fields take defaults
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Check that every value is usable by the simulation
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn invalid(field: &'static str, reason: &'static str) -> Result<(), ConfigError> {
            Err(ConfigError::Invalid { field, reason })
        }

        let positive = [
            ("tick_rate", self.tick_rate),
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("ship_size", self.ship_size),
            ("ship_blink_duration", self.ship_blink_duration),
        ];
        for (field, value) in positive {
            if !value.is_finite() {
                return invalid(field, "must be finite");
            }
            if value <= 0.0 {
                return invalid(field, "must be positive");
            }
        }
        if !(0.0..1.0).contains(&self.asteroid_jaggedness) {
            return invalid("asteroid_jaggedness", "must be in [0, 1)");
        }
        if self.asteroid_vertices < 2 * crate::consts::MIN_ASTEROID_VERTICES {
            return invalid("asteroid_vertices", "must be at least 6");
        }

        let non_negative = [
            ("friction", self.friction),
            ("laser_speed", self.laser_speed),
            ("laser_range", self.laser_range),
            ("asteroid_size", self.asteroid_size),
            ("asteroid_speed", self.asteroid_speed),
            ("asteroid_spin", self.asteroid_spin),
            ("ship_explode_duration", self.ship_explode_duration),
            ("ship_invulnerability_duration", self.ship_invulnerability_duration),
            ("ship_turn_speed", self.ship_turn_speed),
            ("ship_thrust", self.ship_thrust),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() {
                return invalid(field, "must be finite");
            }
            if value < 0.0 {
                return invalid(field, "must not be negative");
            }
        }

        Ok(())
    }

    /// Fixed timestep in seconds
    #[inline]
    pub fn dt(&self) -> f32 {
        1.0 / self.tick_rate
    }

    /// Screen dimensions as a vector
    #[inline]
    pub fn screen(&self) -> Vec2 {
        Vec2::new(self.screen_width, self.screen_height)
    }

    /// Screen center (ship spawn point)
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.screen() / 2.0
    }

    #[inline]
    pub fn ship_radius(&self) -> f32 {
        self.ship_size / 2.0
    }

    #[inline]
    pub fn asteroid_radius(&self) -> f32 {
        self.asteroid_size / 2.0
    }

    /// Turn rate in radians per second
    #[inline]
    pub fn turn_rate(&self) -> f32 {
        self.ship_turn_speed / 180.0 * PI
    }

    /// Distance a laser may travel before it fizzles
    #[inline]
    pub fn laser_max_distance(&self) -> f32 {
        self.laser_range * self.screen_width
    }

    /// Radius painters use for a laser bolt
    #[inline]
    pub fn laser_draw_radius(&self) -> f32 {
        self.ship_size / 15.0
    }

    /// Closest an asteroid may start to the ship's center
    #[inline]
    pub fn min_spawn_distance(&self) -> f32 {
        self.asteroid_size * 2.0 + self.ship_radius()
    }

    /// Explosion length in ticks
    pub fn explode_ticks(&self) -> u32 {
        ticks_for(self.ship_explode_duration, self.tick_rate)
    }

    /// Ticks per blink phase (never zero)
    pub fn blink_ticks(&self) -> u32 {
        ticks_for(self.ship_blink_duration, self.tick_rate).max(1)
    }

    /// Number of blink phases that make up the invulnerability window
    pub fn blink_count(&self) -> u32 {
        (self.ship_invulnerability_duration / self.ship_blink_duration).ceil() as u32
    }
}

/// Round a duration up to whole ticks
fn ticks_for(seconds: f32, tick_rate: f32) -> u32 {
    (seconds * tick_rate).ceil() as u32
}
