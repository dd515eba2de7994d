//! Fixed-substep solver
//!
//! Owns the bodies, the broad-phase grid and the spawn RNG. Each `update`
//! runs `SUBSTEPS` passes of: gravity, arena clamp, grid rebuild, collision
//! correction, integration.

use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::arena;
use super::body::{Body, BodyView};
use super::collision;
use super::partition::SpatialPartition;
use super::spawn;
use crate::consts::SUBSTEPS;
use crate::settings::{self, SettingsError, SolverSettings};

/// Diagnostics snapshot for debug panels and logs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolverStats {
    pub body_count: usize,
    /// Average corrections per substep during the last update
    pub collisions_per_substep: f32,
    /// Total corrections during the last update
    pub last_update_collisions: u32,
    pub average_radius: f32,
    pub arena_radius: f32,
    pub cell_size: f32,
    /// Non-empty grid cells after the last rebuild
    pub occupied_cells: usize,
}

/// Verlet sphere solver
#[derive(Debug, Clone)]
pub struct Solver {
    bodies: Vec<Body>,
    partition: SpatialPartition,
    settings: SolverSettings,
    rng: Pcg32,
    radius_sum: f32,
    last_collisions: u32,
    collisions_per_substep: f32,
}

impl Default for Solver {
    fn default() -> Self {
        Self::build(SolverSettings::default())
    }
}

impl Solver {
    /// Create an empty solver, rejecting invalid settings
    pub fn new(settings: SolverSettings) -> Result<Self, SettingsError> {
        settings.validate()?;
        log::info!(
            "Solver ready: arena={}, cell={}, gravity={}, seed={}",
            settings.arena_radius,
            settings.cell_size,
            settings.gravity,
            settings.seed
        );
        Ok(Self::build(settings))
    }

    fn build(settings: SolverSettings) -> Self {
        Self {
            bodies: Vec::new(),
            partition: SpatialPartition::new(settings.cell_size),
            rng: spawn::spawn_rng(settings.seed),
            settings,
            radius_sum: 0.0,
            last_collisions: 0,
            collisions_per_substep: 0.0,
        }
    }

    /// Spawn a random body on the spawn patch. Returns its index.
    pub fn add_object(&mut self) -> usize {
        let body = spawn::random_body(&mut self.rng);
        self.add_body(body)
    }

    /// Append a caller-built body. Returns its index.
    pub fn add_body(&mut self, body: Body) -> usize {
        let index = self.bodies.len();
        self.radius_sum += body.radius();
        self.bodies.push(body);
        index
    }

    /// Remove every body
    pub fn clear(&mut self) {
        log::info!("Clearing {} bodies", self.bodies.len());
        self.bodies.clear();
        self.partition.clear();
        self.radius_sum = 0.0;
    }

    /// Advance the simulation by `dt` seconds
    pub fn update(&mut self, dt: f32) {
        let sub_dt = dt / SUBSTEPS as f32;
        let mut collisions = 0;

        for substep in 0..SUBSTEPS {
            for body in &mut self.bodies {
                body.accelerate(self.settings.gravity);
            }

            let clamped = arena::apply_constraint(&mut self.bodies, self.settings.arena_radius);

            self.partition.rebuild(&self.bodies);
            let resolved = collision::resolve_collisions(&mut self.bodies, &self.partition);
            collisions += resolved;

            for body in &mut self.bodies {
                body.integrate(sub_dt);
            }

            log::trace!("substep {substep}: clamped={clamped}, resolved={resolved}");
        }

        self.last_collisions = collisions;
        self.collisions_per_substep = collisions as f32 / SUBSTEPS as f32;

        log::debug!(
            "update dt={dt}: bodies={}, collisions/substep={}",
            self.bodies.len(),
            self.collisions_per_substep
        );
    }

    /// Visit every body in storage order
    pub fn for_each_body<F: FnMut(BodyView)>(&self, visit: F) {
        self.bodies().for_each(visit);
    }

    /// Lazy view over every body in storage order
    pub fn bodies(&self) -> impl ExactSizeIterator<Item = BodyView> + '_ {
        self.bodies.iter().map(Body::view)
    }

    pub fn body(&self, index: usize) -> Option<BodyView> {
        self.bodies.get(index).map(Body::view)
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Average corrections per substep during the last update
    pub fn collision_count(&self) -> f32 {
        self.collisions_per_substep
    }

    /// Total corrections during the last update
    pub fn last_update_collisions(&self) -> u32 {
        self.last_collisions
    }

    pub fn average_radius(&self) -> f32 {
        if self.bodies.is_empty() {
            0.0
        } else {
            self.radius_sum / self.bodies.len() as f32
        }
    }

    pub fn settings(&self) -> &SolverSettings {
        &self.settings
    }

    pub fn arena_radius(&self) -> f32 {
        self.settings.arena_radius
    }

    /// Resize the arena. Bodies are pulled in on the next update.
    pub fn set_arena_radius(&mut self, radius: f32) -> Result<(), SettingsError> {
        settings::validate_arena_radius(radius)?;
        log::info!("Arena radius: {} -> {}", self.settings.arena_radius, radius);
        self.settings.arena_radius = radius;
        Ok(())
    }

    pub fn cell_size(&self) -> f32 {
        self.settings.cell_size
    }

    /// Change the grid cell size used from the next update on
    pub fn set_cell_size(&mut self, size: f32) -> Result<(), SettingsError> {
        settings::validate_cell_size(size)?;
        log::info!("Cell size: {} -> {}", self.settings.cell_size, size);
        self.settings.cell_size = size;
        self.partition.set_cell_size(size);
        Ok(())
    }

    pub fn stats(&self) -> SolverStats {
        SolverStats {
            body_count: self.bodies.len(),
            collisions_per_substep: self.collisions_per_substep,
            last_update_collisions: self.last_collisions,
            average_radius: self.average_radius(),
            arena_radius: self.settings.arena_radius,
            cell_size: self.settings.cell_size,
            occupied_cells: self.partition.occupied_cells(),
        }
    }
}
