//! Asteroids - a fixed-tick arcade simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ship, asteroids, lasers, collisions)
//! - `input`: Key events to per-tick intents
//! - `clock`: Fixed timestep driver
//! - `renderer`: Read-only snapshot and shape geometry for painters
//! - `game`: Glue that runs clock → intents → tick → paint
//! - `config`: Startup configuration

pub mod clock;
pub mod config;
pub mod error;
pub mod game;
pub mod input;
pub mod renderer;
pub mod sim;

pub use config::{Config, ConfigError};
pub use error::{EntityError, Error};
pub use game::Game;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Longest wall-clock frame the clock will account for (seconds)
    pub const MAX_FRAME_TIME: f32 = 0.25;

    /// Give up looking for a clear spot for an asteroid after this many tries
    pub const MAX_PLACEMENT_ATTEMPTS: u32 = 100;

    /// Laser spawn offset from ship center, in ship radii (the nose)
    pub const NOSE_OFFSET: f32 = 4.0 / 3.0;

    /// Fewest vertices an asteroid outline may have
    pub const MIN_ASTEROID_VERTICES: usize = 3;
}

/// Normalized angle to [-π, π]
///
/// Constant time for any finite input; float rounding can land exactly on π.
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    use std::f32::consts::{PI, TAU};
    (angle + PI).rem_euclid(TAU) - PI
}

/// Unit vector for a heading in screen space (y grows downward, 0 = right, π/2 = up)
#[inline]
pub fn heading_vector(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), -angle.sin())
}
