//! Uniform grid broad-phase
//!
//! Rebuilt from scratch every substep. A body is inserted into every cell its
//! bounding box touches, so queries may report the same index more than once.

use std::collections::HashMap;

use glam::{IVec3, Vec3};

use super::body::Body;

/// Integer coordinate of one grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellKey(pub IVec3);

/// Inclusive range of cells overlapped by a sphere
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRange {
    pub min: IVec3,
    pub max: IVec3,
}

impl CellRange {
    /// Cells covered by a sphere at `center` with `radius`
    pub fn around(center: Vec3, radius: f32, cell_size: f32) -> Self {
        let to_cell = |p: Vec3| (p / cell_size).floor().as_ivec3();
        Self {
            min: to_cell(center - Vec3::splat(radius)),
            max: to_cell(center + Vec3::splat(radius)),
        }
    }

    /// Every cell in the box, Z outermost and X innermost
    pub fn keys(self) -> impl Iterator<Item = CellKey> {
        let (min, max) = (self.min, self.max);
        (min.z..=max.z).flat_map(move |z| {
            (min.y..=max.y)
                .flat_map(move |y| (min.x..=max.x).map(move |x| CellKey(IVec3::new(x, y, z))))
        })
    }
}

/// Hash grid of body indices
#[derive(Debug, Clone)]
pub struct SpatialPartition {
    cells: HashMap<CellKey, Vec<usize>>,
    cell_size: f32,
}

impl SpatialPartition {
    pub fn new(cell_size: f32) -> Self {
        debug_assert!(cell_size > 0.0, "cell size must be positive");
        Self {
            cells: HashMap::new(),
            cell_size,
        }
    }

    #[inline]
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Change the cell edge length. Takes effect at the next rebuild.
    pub fn set_cell_size(&mut self, cell_size: f32) {
        debug_assert!(cell_size > 0.0, "cell size must be positive");
        self.cell_size = cell_size;
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    pub fn cell_range(&self, body: &Body) -> CellRange {
        CellRange::around(body.position, body.radius(), self.cell_size)
    }

    /// Append `index` to every cell the body overlaps
    pub fn insert(&mut self, body: &Body, index: usize) {
        for key in self.cell_range(body).keys() {
            self.cells.entry(key).or_default().push(index);
        }
    }

    /// Clear, then insert every body in index order
    pub fn rebuild(&mut self, bodies: &[Body]) {
        self.clear();
        for (index, body) in bodies.iter().enumerate() {
            self.insert(body, index);
        }
    }

    /// Lazily yield every index stored in the cells overlapped by `range`.
    /// Indices appear once per shared cell.
    pub fn candidates_in(&self, range: CellRange) -> impl Iterator<Item = usize> + '_ {
        range
            .keys()
            .filter_map(move |key| self.cells.get(&key))
            .flat_map(|ids| ids.iter().copied())
    }

    /// Lazily yield candidate neighbours of `body`, duplicates included
    pub fn candidates(&self, body: &Body) -> impl Iterator<Item = usize> + '_ {
        self.candidates_in(self.cell_range(body))
    }

    /// Callback form of [`SpatialPartition::candidates`]
    pub fn for_each_candidate<F: FnMut(usize)>(&self, body: &Body, visit: F) {
        self.candidates(body).for_each(visit);
    }

    /// Number of non-empty cells
    pub fn occupied_cells(&self) -> usize {
        self.cells.len()
    }

    /// Total stored indices, counting duplicates
    pub fn entry_count(&self) -> usize {
        self.cells.values().map(Vec::len).sum()
    }
}
