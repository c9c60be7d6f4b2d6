//! The core `Grid` trait and `dyn Grid` downcast support.

use mole_core::{CellId, Neighbours, Point3D};
use std::any::Any;

/// Capability interface for a discretized domain.
///
/// The resistance search depends only on this trait: how many cells
/// there are, which cells touch, and where each cell's centre lies.
/// Concrete backends ([`CartesianGrid`](crate::CartesianGrid)) implement
/// it to define their topology and geometry.
///
/// # Object Safety
///
/// This trait is designed for use as `dyn Grid`. Use `downcast_ref`
/// for opt-in specialization on concrete types.
///
/// # Thread Safety
///
/// Grids are immutable once built and are shared across independent
/// search runs and path readers, hence the `Send + Sync` bound.
pub trait Grid: Any + Send + Sync + 'static {
    /// Number of spatial dimensions (2 or 3).
    fn ndim(&self) -> usize;

    /// Total number of cells.
    fn cell_count(&self) -> usize;

    /// Enumerate the cells adjacent to `id`.
    ///
    /// Returns ids in a deterministic, backend-defined order. `id` must be
    /// below [`cell_count`](Self::cell_count).
    fn neighbours(&self, id: CellId) -> Neighbours;

    /// Geometric centre of a cell.
    fn center_of_cell(&self, id: CellId) -> Point3D;

    /// Per-axis refinement factors `[resx, resy, resz]`.
    fn refinement(&self) -> [usize; 3];

    /// Number of faces in the grid.
    fn face_count(&self) -> usize;

    /// Returns `true` if `id` names a cell of this grid.
    fn contains(&self, id: CellId) -> bool {
        id.0 < self.cell_count()
    }
}

impl dyn Grid {
    /// Attempt to downcast a trait object to a concrete grid type.
    pub fn downcast_ref<T: Grid>(&self) -> Option<&T> {
        (self as &dyn Any).downcast_ref::<T>()
    }
}
