//! Minimum-resistance paths walked back through the predecessor forest.

use crate::error::SearchError;
use mole_core::{CellId, Point3D};
use mole_field::ScalarField;
use mole_space::Grid;
use std::io::{self, Write};

/// A chain of adjacent cells from a target back to the source that
/// reached it first.
///
/// Always non-empty: `cells()[0]` is the target and the last cell is a
/// source. A source queried as its own target yields a one-cell path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path {
    cells: Vec<CellId>,
}

impl Path {
    /// Walk `predecessors` from `target` until a cell without one.
    ///
    /// `sources` must be sorted. The walk is bounded by the number of
    /// cells, so a corrupt forest yields `BrokenChain` rather than a loop.
    pub(crate) fn reconstruct(
        target: CellId,
        predecessors: &[Option<CellId>],
        sources: &[CellId],
    ) -> Result<Self, SearchError> {
        let mut cells = vec![target];
        let mut current = target;
        for _ in 0..predecessors.len() {
            match predecessors[current.0] {
                Some(prev) => {
                    cells.push(prev);
                    current = prev;
                }
                None if sources.binary_search(&current).is_ok() => {
                    return Ok(Self { cells });
                }
                None => break,
            }
        }
        Err(SearchError::BrokenChain { cell: target })
    }

    /// Cells from target to source.
    pub fn cells(&self) -> &[CellId] {
        &self.cells
    }

    /// Number of cells on the path, both ends included.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if the path holds no cells, which never happens for a
    /// reconstructed path.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The cell the path was requested for.
    pub fn target(&self) -> CellId {
        self.cells[0]
    }

    /// The source the path ends at.
    pub fn source(&self) -> CellId {
        self.cells[self.cells.len() - 1]
    }

    /// Cell centres along the path.
    pub fn points(&self, grid: &dyn Grid) -> Vec<Point3D> {
        self.cells.iter().map(|&c| grid.center_of_cell(c)).collect()
    }

    /// Write one `x,y,z` line per cell centre, target first.
    pub fn write_csv<W: Write>(&self, mut writer: W, grid: &dyn Grid) -> io::Result<()> {
        for p in self.points(grid) {
            writeln!(writer, "{},{},{}", p.x, p.y, p.z)?;
        }
        writer.flush()
    }

    /// A per-cell mask: 1 on the path, 0 elsewhere.
    pub fn to_mask(&self, grid: &dyn Grid) -> ScalarField<u8> {
        let mut mask = ScalarField::filled(grid, 0u8);
        for &c in &self.cells {
            mask.set(c, 1);
        }
        mask
    }
}
