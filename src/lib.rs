//! Verlet Arena - colliding spheres inside a spherical arena
//!
//! Core modules:
//! - `sim`: Deterministic solver (bodies, spatial grid, collisions, arena)
//! - `settings`: Serializable solver configuration

pub mod settings;
pub mod sim;

pub use settings::{SettingsError, SolverSettings};
pub use sim::{Body, BodyView, Solver, SolverStats};

/// Solver configuration constants
pub mod consts {
    use glam::Vec3;

    /// Fixed number of substeps per `Solver::update` call
    pub const SUBSTEPS: u32 = 8;

    /// Default gravity (cm/s², pointing down the Y axis)
    pub const GRAVITY: Vec3 = Vec3::new(0.0, -982.0, 0.0);

    /// Default arena radius
    pub const ARENA_RADIUS: f32 = 100.0;
    /// Default uniform grid cell edge length
    pub const CELL_SIZE: f32 = 50.0;
    /// Default RNG seed for body spawning
    pub const SEED: u64 = 0x5eed_cafe;

    /// Spawned bodies land in `[0, SPAWN_PATCH)` on X and Z, at Y = 0
    pub const SPAWN_PATCH: f32 = 10.0;
    /// Smallest spawned radius
    pub const MIN_SPAWN_RADIUS: f32 = 2.0;
    /// Largest spawned radius (exclusive)
    pub const MAX_SPAWN_RADIUS: f32 = 5.0;
    /// Exponent biasing spawned radii toward the small end
    pub const SPAWN_RADIUS_BIAS: i32 = 4;
}

/// Pack an RGBA color as `r | g << 8 | b << 16 | a << 24`
#[inline]
pub const fn pack_rgba(r: u8, g: u8, b: u8, a: u8) -> u32 {
    (r as u32) | ((g as u32) << 8) | ((b as u32) << 16) | ((a as u32) << 24)
}

/// Split a packed tag back into `[r, g, b, a]`
#[inline]
pub const fn unpack_rgba(tag: u32) -> [u8; 4] {
    [
        (tag & 0xff) as u8,
        ((tag >> 8) & 0xff) as u8,
        ((tag >> 16) & 0xff) as u8,
        (tag >> 24) as u8,
    ]
}
