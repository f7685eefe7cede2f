//! Asteroid belt generation
//!
//! Asteroids start somewhere random on screen, but never on top of the ship.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;

use super::state::Asteroid;
use crate::config::Config;
use crate::consts::MAX_PLACEMENT_ATTEMPTS;
use crate::error::EntityError;

/// Generate `config.asteroid_count` asteroids clear of `avoid`
pub fn generate_belt<R: Rng>(
    config: &Config,
    avoid: Vec2,
    rng: &mut R,
) -> Result<Vec<Asteroid>, EntityError> {
    (0..config.asteroid_count)
        .map(|_| {
            let pos = place_clear_of(config, avoid, rng);
            new_asteroid(config, pos, rng)
        })
        .collect()
}

/// Random on-screen point at least `min_spawn_distance` from `avoid`
///
/// Gives up after [`MAX_PLACEMENT_ATTEMPTS`] and keeps the last candidate, so
/// a screen too small for the clearance still gets its asteroids.
fn place_clear_of<R: Rng>(config: &Config, avoid: Vec2, rng: &mut R) -> Vec2 {
    let min_dist = config.min_spawn_distance();
    let mut candidate = random_point(config, rng);

    for _ in 1..MAX_PLACEMENT_ATTEMPTS {
        if candidate.distance(avoid) >= min_dist {
            return candidate;
        }
        candidate = random_point(config, rng);
    }

    if candidate.distance(avoid) < min_dist {
        log::warn!(
            "No clear spot {}px from the ship after {} tries, placing asteroid at ({:.0}, {:.0})",
            min_dist,
            MAX_PLACEMENT_ATTEMPTS,
            candidate.x,
            candidate.y
        );
    }
    candidate
}

fn random_point<R: Rng>(config: &Config, rng: &mut R) -> Vec2 {
    Vec2::new(
        rng.random::<f32>() * config.screen_width,
        rng.random::<f32>() * config.screen_height,
    )
}

/// One asteroid with random drift, facing and jagged outline
pub fn new_asteroid<R: Rng>(
    config: &Config,
    pos: Vec2,
    rng: &mut R,
) -> Result<Asteroid, EntityError> {
    let jag = config.asteroid_jaggedness;
    let min_vertices = config.asteroid_vertices / 2;
    let vertices = rng.random_range(min_vertices..=min_vertices + config.asteroid_vertices);
    let offsets = (0..vertices)
        .map(|_| rng.random::<f32>() * jag * 2.0 + 1.0 - jag)
        .collect();

    let vel = Vec2::new(
        random_axis_speed(config.asteroid_speed, rng),
        random_axis_speed(config.asteroid_speed, rng),
    );
    let phase = rng.random::<f32>() * TAU;
    // Scaled unit sample; the width of [-spin, spin] can overflow f32
    let spin = if config.asteroid_spin > 0.0 {
        (rng.random::<f32>() * 2.0 - 1.0) * config.asteroid_spin
    } else {
        0.0
    };

    Ok(Asteroid::new(pos, vel, config.asteroid_radius(), phase, offsets)?.with_spin(spin))
}

/// Up to `max` in either direction
fn random_axis_speed<R: Rng>(max: f32, rng: &mut R) -> f32 {
    let speed = rng.random::<f32>() * max;
    if rng.random_bool(0.5) { speed } else { -speed }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_belt_clear_of_ship() {
        let config = Config {
            asteroid_count: 20,
            ..Default::default()
        };
        let center = config.center();
        let mut rng = Pcg32::seed_from_u64(3);

        let belt = generate_belt(&config, center, &mut rng).unwrap();
        assert_eq!(belt.len(), 20);
        for asteroid in &belt {
            assert!(asteroid.pos.distance(center) >= config.min_spawn_distance());
        }
    }

    #[test]
    fn test_asteroid_shape_ranges() {
        let config = Config::default();
        let mut rng = Pcg32::seed_from_u64(11);

        for _ in 0..200 {
            let asteroid = new_asteroid(&config, Vec2::ZERO, &mut rng).unwrap();
            assert!((5..=15).contains(&asteroid.vertex_count()));
            assert_eq!(asteroid.radius(), 50.0);
            assert!(asteroid.vel.x.abs() <= 50.0 && asteroid.vel.y.abs() <= 50.0);
            assert!((0.0..=TAU).contains(&asteroid.phase));
            assert_eq!(asteroid.spin, 0.0);
            for &offset in asteroid.offsets() {
                assert!((0.6 - 1e-5..=1.4 + 1e-5).contains(&offset), "offset {offset}");
            }
        }
    }

    #[test]
    fn test_unsatisfiable_placement_still_places() {
        // Clearance is far larger than the screen
        let config = Config {
            screen_width: 100.0,
            screen_height: 100.0,
            ..Default::default()
        };
        let mut rng = Pcg32::seed_from_u64(5);

        let belt = generate_belt(&config, config.center(), &mut rng).unwrap();
        assert_eq!(belt.len(), config.asteroid_count);
        for asteroid in &belt {
            assert!((0.0..100.0).contains(&asteroid.pos.x));
            assert!((0.0..100.0).contains(&asteroid.pos.y));
        }
    }

    #[test]
    fn test_spin_within_limit() {
        let config = Config {
            asteroid_spin: 1.5,
            ..Default::default()
        };
        let mut rng = Pcg32::seed_from_u64(9);
        for _ in 0..50 {
            let asteroid = new_asteroid(&config, Vec2::ZERO, &mut rng).unwrap();
            assert!(asteroid.spin.abs() <= 1.5);
        }
    }

    #[test]
    fn test_huge_spin_generates() {
        let config = Config::from_json_str(r#"{ "asteroid_spin": 3e38 }"#).unwrap();
        let mut rng = Pcg32::seed_from_u64(9);
        for _ in 0..50 {
            let asteroid = new_asteroid(&config, Vec2::ZERO, &mut rng).unwrap();
            assert!(asteroid.spin.is_finite());
            assert!(asteroid.spin.abs() <= 3e38);
        }
    }
}
