//! Spherical arena boundary
//!
//! The arena is a sphere centered at the origin. A body stays inside when its
//! center lies within `arena_radius - radius` of the center.

use glam::Vec3;

use super::body::Body;

/// Fixed arena center
pub const ARENA_CENTER: Vec3 = Vec3::ZERO;

/// Signed distance of the body's center past the inner offset sphere.
/// Positive means the body pokes through the arena wall.
#[inline]
pub fn arena_penetration(body: &Body, arena_radius: f32) -> f32 {
    (body.position - ARENA_CENTER).length() - (arena_radius - body.radius())
}

/// Pull a single body back onto the inner offset sphere if it is outside.
/// Returns whether the body was moved.
pub fn clamp_to_arena(body: &mut Body, arena_radius: f32) -> bool {
    let to_body = body.position - ARENA_CENTER;

    // A body sitting exactly on the center has no direction to clamp along
    if arena_penetration(body, arena_radius) > 0.0 && to_body != Vec3::ZERO {
        let limit = arena_radius - body.radius();
        body.position = ARENA_CENTER + to_body / to_body.length() * limit;
        true
    } else {
        false
    }
}

/// Clamp every body into the arena. Returns how many were moved.
pub fn apply_constraint(bodies: &mut [Body], arena_radius: f32) -> u32 {
    bodies
        .iter_mut()
        .map(|body| clamp_to_arena(body, arena_radius) as u32)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inside_body_untouched() {
        let mut body = Body::new(Vec3::new(50.0, 0.0, 0.0), 5.0, 0);
        assert!(!clamp_to_arena(&mut body, 100.0));
        assert_eq!(body.position, Vec3::new(50.0, 0.0, 0.0));
        assert!(arena_penetration(&body, 100.0) < 0.0);
    }

    #[test]
    fn test_outside_body_clamped_to_offset_sphere() {
        let mut body = Body::new(Vec3::new(0.0, -300.0, 400.0), 5.0, 0);
        assert!(clamp_to_arena(&mut body, 100.0));
        assert!((body.position.length() - 95.0).abs() < 1e-4);
        // Direction is preserved
        let dir = body.position.normalize();
        assert!((dir - Vec3::new(0.0, -0.6, 0.8)).length() < 1e-6);
        assert!(arena_penetration(&body, 100.0).abs() < 1e-4);
    }

    #[test]
    fn test_exactly_on_limit_is_not_moved() {
        let mut body = Body::new(Vec3::new(95.0, 0.0, 0.0), 5.0, 0);
        assert!(!clamp_to_arena(&mut body, 100.0));
    }

    #[test]
    fn test_clamp_keeps_previous_position() {
        let mut body = Body::new(Vec3::new(120.0, 0.0, 0.0), 5.0, 0);
        clamp_to_arena(&mut body, 100.0);
        // The pull-back shows up as inward velocity on the next integration
        assert_eq!(body.previous_position, Vec3::new(120.0, 0.0, 0.0));
        assert!(body.velocity().x < 0.0);
    }

    #[test]
    fn test_apply_constraint_counts_moves() {
        let mut bodies = vec![
            Body::new(Vec3::new(10.0, 0.0, 0.0), 2.0, 0),
            Body::new(Vec3::new(0.0, 200.0, 0.0), 2.0, 0),
            Body::new(Vec3::new(0.0, 0.0, -99.0), 2.0, 0),
        ];
        assert_eq!(apply_constraint(&mut bodies, 100.0), 2);
        for body in &bodies {
            assert!(arena_penetration(body, 100.0) <= 1e-4);
        }
    }

    #[test]
    fn test_clamp_moves_exactly_the_penetrating_bodies() {
        let cases = [
            (Vec3::new(94.9, 0.0, 0.0), false),
            (Vec3::new(95.1, 0.0, 0.0), true),
            (Vec3::new(0.0, -60.0, -80.0), true),
            (Vec3::new(-50.0, 50.0, 50.0), false),
            (Vec3::new(60.0, 60.0, 60.0), true),
        ];
        for (position, outside) in cases {
            let mut body = Body::new(position, 5.0, 0);
            assert_eq!(arena_penetration(&body, 100.0) > 0.0, outside, "{position}");
            assert_eq!(clamp_to_arena(&mut body, 100.0), outside, "{position}");
            assert!(arena_penetration(&body, 100.0) <= 1e-4, "{position}");
        }
    }

    #[test]
    fn test_centered_body_left_alone_when_arena_too_small() {
        // Radius exceeds the arena, but the center has no clamp direction
        let mut body = Body::new(Vec3::ZERO, 8.0, 0);
        assert!(arena_penetration(&body, 5.0) > 0.0);
        assert!(!clamp_to_arena(&mut body, 5.0));
        assert_eq!(body.position, Vec3::ZERO);
    }
}
