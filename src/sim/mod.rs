//! Deterministic sphere simulation
//!
//! Everything the solver does lives here. This module must stay pure:
//! - Time step supplied by the caller, no clock sampling
//! - Seeded RNG only
//! - Stable iteration order (by body index)
//! - No rendering or platform dependencies

pub mod arena;
pub mod body;
pub mod collision;
pub mod partition;
pub mod solver;
pub mod spawn;

pub use arena::{ARENA_CENTER, apply_constraint, arena_penetration, clamp_to_arena};
pub use body::{Body, BodyView};
pub use collision::{Contact, resolve_collisions, separate, sphere_contact};
pub use partition::{CellKey, CellRange, SpatialPartition};
pub use solver::{Solver, SolverStats};
pub use spawn::{random_body, spawn_rng};
