//! Sphere-sphere collision detection and positional correction
//!
//! Pairs come from the uniform grid. A pair `(i, j)` is only handled from the
//! lower index, so processing order is fixed by storage order. The grid may
//! report the same neighbour several times; each report re-tests the pair.

use glam::Vec3;

use super::body::Body;
use super::partition::SpatialPartition;

/// Overlap between two spheres
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Unit vector from the second sphere toward the first
    pub normal: Vec3,
    /// How far the spheres overlap along `normal`
    pub penetration: f32,
    /// Center-to-center distance
    pub distance: f32,
}

/// Test two spheres for overlap.
///
/// Coincident centers yield no contact since there is no separating direction.
pub fn sphere_contact(a: &Body, b: &Body) -> Option<Contact> {
    let axis = a.position - b.position;
    let distance = axis.length();
    let reach = a.radius() + b.radius();

    if distance > 0.0 && distance < reach {
        Some(Contact {
            normal: axis / distance,
            penetration: reach - distance,
            distance,
        })
    } else {
        None
    }
}

/// Push two overlapping bodies apart, half the overlap each.
/// Returns whether a correction was applied.
pub fn separate(a: &mut Body, b: &mut Body) -> bool {
    match sphere_contact(a, b) {
        Some(contact) => {
            let shift = contact.normal * (0.5 * contact.penetration);
            a.position += shift;
            b.position -= shift;
            true
        }
        None => false,
    }
}

/// Resolve every overlapping pair reported by the grid.
///
/// `partition` must have been rebuilt from `bodies`. Returns the number of
/// corrections applied, counting repeats of the same pair.
pub fn resolve_collisions(bodies: &mut [Body], partition: &SpatialPartition) -> u32 {
    let mut corrections = 0;

    for i in 0..bodies.len() {
        // Query range is fixed before body i starts moving
        let range = partition.cell_range(&bodies[i]);

        for j in partition.candidates_in(range) {
            if j <= i {
                continue;
            }
            let (a, b) = pair_mut(bodies, i, j);
            if separate(a, b) {
                corrections += 1;
            }
        }
    }

    corrections
}

/// Two distinct mutable bodies, `i < j`
fn pair_mut(bodies: &mut [Body], i: usize, j: usize) -> (&mut Body, &mut Body) {
    debug_assert!(i < j);
    let (head, tail) = bodies.split_at_mut(j);
    (&mut head[i], &mut tail[0])
}
