//! Rendering boundary
//!
//! The simulation never draws. After each frame's ticks a [`Snapshot`] is
//! taken and handed to a [`Renderer`], which only reads it.

pub mod shapes;

use glam::Vec2;
use serde::Serialize;

use crate::sim::SimState;

/// What a painter needs to know about the ship
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShipView {
    pub pos: Vec2,
    pub heading: f32,
    pub radius: f32,
    pub visible: bool,
    pub exploding: bool,
    pub thrusting: bool,
}

/// What a painter needs to know about an asteroid
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AsteroidView<'a> {
    pub pos: Vec2,
    pub radius: f32,
    pub phase: f32,
    pub offsets: &'a [f32],
}

/// What a painter needs to know about a laser
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LaserView {
    pub pos: Vec2,
    pub radius: f32,
}

/// Read-only view of one frame
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot<'a> {
    pub tick: u64,
    pub screen: Vec2,
    pub ship: ShipView,
    pub asteroids: Vec<AsteroidView<'a>>,
    pub lasers: Vec<LaserView>,
}

impl<'a> Snapshot<'a> {
    pub fn capture(state: &'a SimState) -> Self {
        let ship = &state.ship;
        let laser_radius = state.config.laser_draw_radius();

        Self {
            tick: state.time_ticks,
            screen: state.config.screen(),
            ship: ShipView {
                pos: ship.pos,
                heading: ship.heading,
                radius: ship.radius,
                visible: ship.is_visible(),
                exploding: ship.is_exploding(),
                thrusting: ship.thrusting,
            },
            asteroids: state
                .asteroids
                .iter()
                .map(|a| AsteroidView {
                    pos: a.pos,
                    radius: a.radius(),
                    phase: a.phase,
                    offsets: a.offsets(),
                })
                .collect(),
            lasers: ship
                .lasers
                .iter()
                .map(|l| LaserView {
                    pos: l.pos,
                    radius: laser_radius,
                })
                .collect(),
        }
    }
}

/// Anything that can paint a frame
pub trait Renderer {
    fn paint(&mut self, snapshot: &Snapshot<'_>);
}

/// Headless renderer that logs a one-line summary every `every` frames
#[derive(Debug, Clone)]
pub struct LogRenderer {
    every: u64,
    frames: u64,
}

impl LogRenderer {
    pub fn new(every: u64) -> Self {
        Self {
            every: every.max(1),
            frames: 0,
        }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Renderer for LogRenderer {
    fn paint(&mut self, snapshot: &Snapshot<'_>) {
        if self.frames % self.every == 0 {
            let ship = &snapshot.ship;
            let state = if ship.exploding {
                "exploding"
            } else if ship.visible {
                "visible"
            } else {
                "blinking"
            };
            log::info!(
                "tick {}: ship ({:.0}, {:.0}) {}, {} asteroids, {} lasers",
                snapshot.tick,
                ship.pos.x,
                ship.pos.y,
                state,
                snapshot.asteroids.len(),
                snapshot.lasers.len()
            );
        }
        self.frames += 1;
    }
}
