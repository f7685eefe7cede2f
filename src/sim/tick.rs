//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically.

use glam::Vec2;

use super::collision::{find_laser_hits, remove_hits, ship_asteroid_collision};
use super::state::{Laser, Ship, SimEvent, SimState};
use super::wrap::{wrap_body, wrap_point};
use crate::input::Intents;
use crate::{heading_vector, normalize_angle};

/// Advance the state by one fixed timestep, consuming and returning it
pub fn advance(mut state: SimState, intents: &Intents, dt: f32) -> SimState {
    tick(&mut state, intents, dt);
    state
}

/// Advance the game state by one fixed timestep
///
/// Returns what happened during the tick, in order.
pub fn tick(state: &mut SimState, intents: &Intents, dt: f32) -> Vec<SimEvent> {
    let SimState {
        config,
        ship,
        asteroids,
        time_ticks,
        ..
    } = state;
    let screen = config.screen();
    let mut events = Vec::new();

    // Sampled once so the explosion runs for exactly its tick count
    let exploding = ship.is_exploding();

    // Apply intents
    ship.turning = intents.rotation;
    ship.rotation = intents.rotation.sign() * config.turn_rate();
    ship.thrusting = intents.thrusting;
    if intents.shoot {
        if ship.can_shoot && !exploding && ship.lasers.len() < config.laser_max {
            let laser = fire_laser(ship, config.laser_speed);
            log::debug!("Laser fired from ({:.0}, {:.0})", laser.pos.x, laser.pos.y);
            events.push(SimEvent::LaserFired { pos: laser.pos });
            ship.lasers.push(laser);
        }
        ship.can_shoot = false;
    } else {
        ship.can_shoot = true;
    }

    // Thrust, or coast down under friction
    if ship.thrusting {
        ship.vel += heading_vector(ship.heading) * config.ship_thrust * dt;
    } else if !exploding {
        ship.vel -= ship.vel * config.friction * dt;
    }

    ship.heading = normalize_angle(ship.heading + ship.rotation * dt);

    for asteroid in asteroids.iter_mut() {
        asteroid.pos += asteroid.vel * dt;
        asteroid.phase = normalize_angle(asteroid.phase + asteroid.spin * dt);
        let radius = asteroid.radius();
        wrap_body(&mut asteroid.pos, radius, screen);
    }

    // Move lasers, then drop the ones that have run out of range
    let max_dist = config.laser_max_distance();
    for laser in ship.lasers.iter_mut() {
        laser.pos += laser.vel * dt;
        laser.dist += laser.vel.length() * dt;
        wrap_point(&mut laser.pos, screen);
    }
    ship.lasers.retain(|laser| {
        let alive = laser.dist <= max_dist;
        if !alive {
            log::debug!("Laser expired at ({:.0}, {:.0})", laser.pos.x, laser.pos.y);
            events.push(SimEvent::LaserExpired { pos: laser.pos });
        }
        alive
    });

    // Laser vs asteroid
    let hits = find_laser_hits(&ship.lasers, asteroids);
    if !hits.is_empty() {
        remove_hits(&mut ship.lasers, asteroids, &hits);
        for hit in &hits {
            log::debug!(
                "Asteroid destroyed at ({:.0}, {:.0}), {} left",
                hit.asteroid_pos.x,
                hit.asteroid_pos.y,
                asteroids.len()
            );
            events.push(SimEvent::AsteroidDestroyed {
                pos: hit.asteroid_pos,
                radius: hit.asteroid_radius,
            });
        }
        if asteroids.is_empty() {
            events.push(SimEvent::BeltCleared);
        }
    }

    // Asteroid vs ship
    if !exploding && !ship.is_invulnerable() {
        if let Some(index) = ship_asteroid_collision(ship, asteroids) {
            log::info!(
                "Ship hit by asteroid {} at ({:.0}, {:.0})",
                index,
                ship.pos.x,
                ship.pos.y
            );
            ship.explode(config.explode_ticks());
            events.push(SimEvent::ShipExploded { pos: ship.pos });
        }
    }

    if !exploding {
        ship.pos += ship.vel * dt;
    }
    let radius = ship.radius;
    wrap_body(&mut ship.pos, radius, screen);

    if exploding {
        ship.explode_ticks -= 1;
        if ship.explode_ticks == 0 {
            *ship = Ship::new(config);
            log::info!("Ship respawned at ({:.0}, {:.0})", ship.pos.x, ship.pos.y);
            events.push(SimEvent::ShipRespawned);
        }
    } else if ship.blink_count > 0 {
        ship.blink_ticks = ship.blink_ticks.saturating_sub(1);
        if ship.blink_ticks == 0 {
            ship.blink_ticks = config.blink_ticks();
            ship.blink_count -= 1;
        }
    }

    *time_ticks += 1;
    events
}

/// New laser leaving the ship's nose along its heading
fn fire_laser(ship: &Ship, speed: f32) -> Laser {
    let dir: Vec2 = heading_vector(ship.heading);
    Laser::new(ship.nose(), dir * speed)
}
