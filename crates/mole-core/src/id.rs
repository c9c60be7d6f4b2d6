//! Strongly-typed cell identifier and the [`Neighbours`] list alias.

use smallvec::SmallVec;
use std::fmt;

/// Identifies a cell of a structured grid.
///
/// Ids are dense in `[0, cell_count)` and use row-major encoding:
/// `iz * ny * nx + iy * nx + ix`. An id is only meaningful together with
/// the grid that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellId(pub usize);

impl CellId {
    /// The id as a plain array index.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for CellId {
    fn from(v: usize) -> Self {
        Self(v)
    }
}

impl From<CellId> for usize {
    fn from(id: CellId) -> Self {
        id.0
    }
}

/// Adjacent cells of a cell.
///
/// Inline capacity of 26 covers the full 3D Moore neighbourhood, so
/// neighbour enumeration on structured grids never touches the heap.
pub type Neighbours = SmallVec<[CellId; 26]>;
