//! Property tests over random seeds and input sequences

use asteroids::Config;
use asteroids::input::{Intents, Rotation};
use asteroids::sim::{SimEvent, SimState, tick, wrap_body, wrap_point};
use glam::Vec2;
use proptest::prelude::*;

fn intents() -> impl Strategy<Value = Intents> {
    (0u8..3, any::<bool>(), any::<bool>()).prop_map(|(turn, thrusting, shoot)| Intents {
        rotation: match turn {
            0 => Rotation::None,
            1 => Rotation::Left,
            _ => Rotation::Right,
        },
        thrusting,
        shoot,
    })
}

fn in_band(v: f32, margin: f32, size: f32) -> bool {
    v >= -margin && v <= size + margin
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn belt_starts_clear_of_ship(seed in any::<u64>(), count in 1usize..12) {
        let config = Config { seed, asteroid_count: count, ..Default::default() };
        let state = SimState::new(config).unwrap();

        prop_assert_eq!(state.asteroids.len(), count);
        for asteroid in &state.asteroids {
            prop_assert!(
                asteroid.pos.distance(state.ship.pos) >= state.config.min_spawn_distance()
            );
        }
    }

    #[test]
    fn wrap_keeps_bodies_in_band(x in -1e4f32..1e4, y in -1e4f32..1e4, r in 0f32..100.0) {
        let screen = Vec2::new(800.0, 600.0);
        let mut pos = Vec2::new(x, y);
        wrap_body(&mut pos, r, screen);
        prop_assert!(in_band(pos.x, r, screen.x));
        prop_assert!(in_band(pos.y, r, screen.y));

        let mut pos = Vec2::new(x, y);
        wrap_point(&mut pos, screen);
        prop_assert!(in_band(pos.x, 0.0, screen.x));
        prop_assert!(in_band(pos.y, 0.0, screen.y));
    }

    #[test]
    fn invariants_hold_every_tick(
        seed in any::<u64>(),
        inputs in prop::collection::vec(intents(), 1..300),
    ) {
        let config = Config { seed, asteroid_count: 6, ..Default::default() };
        let mut state = SimState::new(config).unwrap();
        let dt = state.dt();
        let screen = state.config.screen();
        let initial = state.asteroids.clone();

        for input in &inputs {
            let asteroids_before = state.asteroids.len();
            let protected = state.ship.is_invulnerable() || state.ship.is_exploding();

            let events = tick(&mut state, input, dt);

            let ship = &state.ship;
            prop_assert!(ship.lasers.len() <= state.config.laser_max);
            prop_assert!(in_band(ship.pos.x, ship.radius, screen.x));
            prop_assert!(in_band(ship.pos.y, ship.radius, screen.y));

            for laser in &ship.lasers {
                prop_assert!(laser.dist <= state.config.laser_max_distance());
                prop_assert!(in_band(laser.pos.x, 0.0, screen.x));
                prop_assert!(in_band(laser.pos.y, 0.0, screen.y));
            }

            for asteroid in &state.asteroids {
                let r = asteroid.radius();
                prop_assert!(in_band(asteroid.pos.x, r, screen.x));
                prop_assert!(in_band(asteroid.pos.y, r, screen.y));
                // Silhouettes never change
                prop_assert!(initial.iter().any(|a| a.offsets() == asteroid.offsets()));
            }

            let destroyed = events
                .iter()
                .filter(|e| matches!(e, SimEvent::AsteroidDestroyed { .. }))
                .count();
            prop_assert_eq!(state.asteroids.len() + destroyed, asteroids_before);

            if events.iter().any(|e| matches!(e, SimEvent::ShipExploded { .. })) {
                prop_assert!(!protected);
            }
        }
    }
}
