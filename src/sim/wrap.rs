//! Toroidal screen wrap
//!
//! Ships and asteroids slide fully off one edge before reappearing just
//! outside the opposite edge. Lasers are points and snap straight across.

use glam::Vec2;

/// Wrap a body of the given radius (leaves `[-r, size + r]` → opposite edge)
pub fn wrap_body(pos: &mut Vec2, radius: f32, screen: Vec2) {
    pos.x = wrap_axis(pos.x, radius, screen.x);
    pos.y = wrap_axis(pos.y, radius, screen.y);
}

/// Wrap a point exactly at the screen edges (`< 0` → size, `> size` → 0)
pub fn wrap_point(pos: &mut Vec2, screen: Vec2) {
    pos.x = wrap_axis(pos.x, 0.0, screen.x);
    pos.y = wrap_axis(pos.y, 0.0, screen.y);
}

#[inline]
fn wrap_axis(v: f32, margin: f32, size: f32) -> f32 {
    if v < -margin {
        size + margin
    } else if v > size + margin {
        -margin
    } else {
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN: Vec2 = Vec2::new(800.0, 600.0);

    #[test]
    fn test_body_wraps_past_radius() {
        let mut pos = Vec2::new(-16.0, 300.0);
        wrap_body(&mut pos, 15.0, SCREEN);
        assert_eq!(pos, Vec2::new(815.0, 300.0));

        let mut pos = Vec2::new(400.0, 616.0);
        wrap_body(&mut pos, 15.0, SCREEN);
        assert_eq!(pos, Vec2::new(400.0, -15.0));
    }

    #[test]
    fn test_body_inside_margin_untouched() {
        let mut pos = Vec2::new(-10.0, 610.0);
        wrap_body(&mut pos, 15.0, SCREEN);
        assert_eq!(pos, Vec2::new(-10.0, 610.0));
    }

    #[test]
    fn test_point_wraps_at_edge() {
        let mut pos = Vec2::new(-0.5, 600.5);
        wrap_point(&mut pos, SCREEN);
        assert_eq!(pos, Vec2::new(800.0, 0.0));
    }
}
