//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (creation order)
//! - No rendering or platform dependencies

pub mod belt;
pub mod collision;
pub mod state;
pub mod tick;
pub mod wrap;

pub use belt::{generate_belt, new_asteroid};
pub use collision::{LaserHit, circles_overlap, find_laser_hits, point_in_circle};
pub use state::{Asteroid, Laser, RngState, Ship, SimEvent, SimState};
pub use tick::{advance, tick};
pub use wrap::{wrap_body, wrap_point};
