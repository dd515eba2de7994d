//! Bodies and Störmer–Verlet integration
//!
//! Velocity is never stored. It is the difference between the current and
//! previous positions, so any positional correction made before `integrate`
//! is automatically reflected in the next step's motion.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// A simulated sphere
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub position: Vec3,
    pub previous_position: Vec3,
    /// Accumulated acceleration for the current substep
    pub acceleration: Vec3,
    radius: f32,
    /// Opaque render hint (packed RGBA), never read by the solver
    pub tag: u32,
}

impl Body {
    /// Create a body at rest.
    ///
    /// # Panics
    /// If `radius` is not positive and finite.
    pub fn new(position: Vec3, radius: f32, tag: u32) -> Self {
        assert!(
            radius.is_finite() && radius > 0.0,
            "body radius must be positive and finite, got {radius}"
        );
        Self {
            position,
            previous_position: position,
            acceleration: Vec3::ZERO,
            radius,
            tag,
        }
    }

    /// Create a body already moving by `displacement` per substep
    pub fn with_velocity(position: Vec3, displacement: Vec3, radius: f32, tag: u32) -> Self {
        let mut body = Self::new(position, radius, tag);
        body.previous_position = position - displacement;
        body
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Per-substep displacement implied by the position history
    #[inline]
    pub fn velocity(&self) -> Vec3 {
        self.position - self.previous_position
    }

    /// Add to the acceleration accumulator
    #[inline]
    pub fn accelerate(&mut self, acceleration: Vec3) {
        self.acceleration += acceleration;
    }

    /// Advance one substep and clear the accumulator
    pub fn integrate(&mut self, dt: f32) {
        let velocity = self.velocity();
        self.previous_position = self.position;
        self.position += velocity + self.acceleration * (dt * dt);
        self.acceleration = Vec3::ZERO;
    }

    pub fn view(&self) -> BodyView {
        BodyView {
            position: self.position,
            radius: self.radius,
            tag: self.tag,
        }
    }
}

/// Read-only snapshot handed to renderers and debug tools
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct BodyView {
    pub position: Vec3,
    pub radius: f32,
    pub tag: u32,
}
