//! Collision detection between lasers, asteroids and the ship
//!
//! Everything is a circle (lasers are points), so every test is a center
//! distance compared against a radius.

use glam::Vec2;

use super::state::{Asteroid, Laser, Ship};

/// A laser that struck an asteroid this tick
#[derive(Debug, Clone, PartialEq)]
pub struct LaserHit {
    /// Index into the laser list before removal
    pub laser: usize,
    /// Index into the asteroid list before removal
    pub asteroid: usize,
    pub asteroid_pos: Vec2,
    pub asteroid_radius: f32,
}

/// True if a point lies strictly inside a circle
#[inline]
pub fn point_in_circle(point: Vec2, center: Vec2, radius: f32) -> bool {
    point.distance(center) < radius
}

/// True if two circles overlap (touching does not count)
#[inline]
pub fn circles_overlap(a: Vec2, ra: f32, b: Vec2, rb: f32) -> bool {
    a.distance(b) < ra + rb
}

/// Pair every laser with the first asteroid it is inside
///
/// Lasers are tested in order against asteroids in order; each asteroid can
/// absorb only one laser. When a laser is inside two asteroids, the earlier
/// one in the list takes the hit, not necessarily the nearest.
pub fn find_laser_hits(lasers: &[Laser], asteroids: &[Asteroid]) -> Vec<LaserHit> {
    let mut taken = vec![false; asteroids.len()];
    let mut hits = Vec::new();

    for (li, laser) in lasers.iter().enumerate() {
        let target = asteroids.iter().enumerate().find(|(ai, asteroid)| {
            !taken[*ai] && point_in_circle(laser.pos, asteroid.pos, asteroid.radius())
        });

        if let Some((ai, asteroid)) = target {
            taken[ai] = true;
            hits.push(LaserHit {
                laser: li,
                asteroid: ai,
                asteroid_pos: asteroid.pos,
                asteroid_radius: asteroid.radius(),
            });
        }
    }

    hits
}

/// Remove every laser and asteroid involved in a hit
pub fn remove_hits(lasers: &mut Vec<Laser>, asteroids: &mut Vec<Asteroid>, hits: &[LaserHit]) {
    retain_unhit(lasers, hits.iter().map(|h| h.laser));
    retain_unhit(asteroids, hits.iter().map(|h| h.asteroid));
}

fn retain_unhit<T>(items: &mut Vec<T>, hit: impl Iterator<Item = usize>) {
    let mut doomed = vec![false; items.len()];
    for i in hit {
        doomed[i] = true;
    }
    let mut index = 0;
    items.retain(|_| {
        let keep = !doomed[index];
        index += 1;
        keep
    });
}

/// First asteroid overlapping the ship, if any
pub fn ship_asteroid_collision(ship: &Ship, asteroids: &[Asteroid]) -> Option<usize> {
    asteroids
        .iter()
        .position(|a| circles_overlap(ship.pos, ship.radius, a.pos, a.radius()))
}
