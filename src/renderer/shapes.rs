//! Shape generation for 2D primitives
//!
//! Pure geometry in screen space; painters stroke or fill the points however
//! they like.

use glam::Vec2;
use std::f32::consts::TAU;

use super::{AsteroidView, ShipView};

/// Explosion fireball radii as multiples of the ship radius, outermost first
pub const EXPLOSION_RINGS: [f32; 4] = [1.4, 1.2, 0.7, 0.3];

/// Ship triangle: nose, rear left, rear right
pub fn ship_outline(ship: &ShipView) -> [Vec2; 3] {
    let (sin, cos) = ship.heading.sin_cos();
    let (x, y, r) = (ship.pos.x, ship.pos.y, ship.radius);

    [
        Vec2::new(x + 4.0 / 3.0 * r * cos, y - 4.0 / 3.0 * r * sin),
        Vec2::new(
            x - r * (2.0 / 3.0 * cos + sin),
            y + r * (2.0 / 3.0 * sin - cos),
        ),
        Vec2::new(
            x - r * (2.0 / 3.0 * cos - sin),
            y + r * (2.0 / 3.0 * sin + cos),
        ),
    ]
}

/// Thruster flame behind the ship: rear left, tip, rear right
pub fn thruster_flame(ship: &ShipView) -> [Vec2; 3] {
    let (sin, cos) = ship.heading.sin_cos();
    let (x, y, r) = (ship.pos.x, ship.pos.y, ship.radius);

    [
        Vec2::new(
            x - r * (2.0 / 3.0 * cos + 0.5 * sin),
            y + r * (2.0 / 3.0 * sin - 0.5 * cos),
        ),
        Vec2::new(x - r * 5.0 / 3.0 * cos, y + r * 5.0 / 3.0 * sin),
        Vec2::new(
            x - r * (2.0 / 3.0 * cos - 0.5 * sin),
            y + r * (2.0 / 3.0 * sin + 0.5 * cos),
        ),
    ]
}

/// Whether the flame should be drawn at all
pub fn shows_flame(ship: &ShipView) -> bool {
    ship.thrusting && !ship.exploding
}

/// Explosion circles (center, radius), outermost first
pub fn explosion_rings(ship: &ShipView) -> [(Vec2, f32); 4] {
    EXPLOSION_RINGS.map(|scale| (ship.pos, ship.radius * scale))
}

/// Closed outline of an asteroid, one point per vertex
pub fn asteroid_outline(asteroid: &AsteroidView<'_>) -> Vec<Vec2> {
    let count = asteroid.offsets.len();
    asteroid
        .offsets
        .iter()
        .enumerate()
        .map(|(j, offset)| {
            let angle = asteroid.phase + j as f32 * TAU / count as f32;
            asteroid.pos + Vec2::new(angle.cos(), angle.sin()) * asteroid.radius * offset
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn ship_at(heading: f32) -> ShipView {
        ShipView {
            pos: Vec2::new(100.0, 100.0),
            heading,
            radius: 15.0,
            visible: true,
            exploding: false,
            thrusting: true,
        }
    }

    #[test]
    fn test_ship_outline_points_up() {
        let [nose, left, right] = ship_outline(&ship_at(FRAC_PI_2));
        assert!((nose - Vec2::new(100.0, 80.0)).length() < 0.001);
        // Rear corners sit below the center, mirrored left/right
        assert!((left - Vec2::new(85.0, 110.0)).length() < 0.001);
        assert!((right - Vec2::new(115.0, 110.0)).length() < 0.001);
    }

    #[test]
    fn test_flame_tip_behind_ship() {
        let [_, tip, _] = thruster_flame(&ship_at(0.0));
        assert!((tip - Vec2::new(75.0, 100.0)).length() < 0.001);
        assert!(shows_flame(&ship_at(0.0)));
    }

    #[test]
    fn test_explosion_rings_shrink() {
        let rings = explosion_rings(&ship_at(0.0));
        assert!((rings[0].1 - 21.0).abs() < 0.001);
        assert!(rings.windows(2).all(|w| w[0].1 > w[1].1));
    }

    #[test]
    fn test_round_asteroid_outline() {
        let offsets = [1.0; 4];
        let view = AsteroidView {
            pos: Vec2::new(50.0, 50.0),
            radius: 10.0,
            phase: 0.0,
            offsets: &offsets,
        };
        let outline = asteroid_outline(&view);
        assert_eq!(outline.len(), 4);
        assert!((outline[0] - Vec2::new(60.0, 50.0)).length() < 0.001);
        assert!((outline[1] - Vec2::new(50.0, 60.0)).length() < 0.001);
        for point in outline {
            assert!((point.distance(view.pos) - 10.0).abs() < 0.001);
        }
    }
}
