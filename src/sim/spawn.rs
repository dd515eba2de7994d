//! Seeded random body spawning
//!
//! The solver owns its own `Pcg32`, so identical seeds spawn identical bodies.

use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::body::Body;
use crate::consts::*;
use crate::pack_rgba;

/// Spawn RNG for a seed
pub fn spawn_rng(seed: u64) -> Pcg32 {
    Pcg32::seed_from_u64(seed)
}

/// Radius in `[MIN_SPAWN_RADIUS, MAX_SPAWN_RADIUS)`, biased toward small bodies
pub fn biased_radius(u: f32) -> f32 {
    u.powi(SPAWN_RADIUS_BIAS) * (MAX_SPAWN_RADIUS - MIN_SPAWN_RADIUS) + MIN_SPAWN_RADIUS
}

/// A body at rest somewhere on the spawn patch with a random opaque color
pub fn random_body<R: Rng>(rng: &mut R) -> Body {
    let x = rng.random::<f32>() * SPAWN_PATCH;
    let z = rng.random::<f32>() * SPAWN_PATCH;
    let radius = biased_radius(rng.random::<f32>());
    let tag = pack_rgba(rng.random(), rng.random(), rng.random(), 0xff);

    Body::new(Vec3::new(x, 0.0, z), radius, tag)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unpack_rgba;

    #[test]
    fn test_biased_radius_bounds() {
        assert_eq!(biased_radius(0.0), MIN_SPAWN_RADIUS);
        assert!(biased_radius(0.999_999) < MAX_SPAWN_RADIUS);
        // u^4 keeps the median well below the midpoint
        assert!(biased_radius(0.5) < 2.5);
    }

    #[test]
    fn test_random_bodies_in_documented_ranges() {
        let mut rng = spawn_rng(42);
        for _ in 0..500 {
            let body = random_body(&mut rng);
            assert!(body.radius() >= MIN_SPAWN_RADIUS && body.radius() < MAX_SPAWN_RADIUS);
            assert_eq!(body.position.y, 0.0);
            assert!((0.0..SPAWN_PATCH).contains(&body.position.x));
            assert!((0.0..SPAWN_PATCH).contains(&body.position.z));
            assert_eq!(body.velocity(), Vec3::ZERO);
            assert_eq!(unpack_rgba(body.tag)[3], 0xff);
        }
    }

    #[test]
    fn test_same_seed_same_bodies() {
        let mut a = spawn_rng(7);
        let mut b = spawn_rng(7);
        for _ in 0..20 {
            assert_eq!(random_body(&mut a), random_body(&mut b));
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut a = spawn_rng(1);
        let mut b = spawn_rng(2);
        let same = (0..10).all(|_| random_body(&mut a) == random_body(&mut b));
        assert!(!same);
    }
}
