//! Per-cell search labels, tentative resistances and predecessors.

use crate::result::UNREACHABLE;
use mole_core::CellId;

/// Progress of a cell through the search.
///
/// Transitions are monotone: `Unvisited → Frontier → Finalized`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Label {
    /// Not yet reached by any source.
    #[default]
    Unvisited,
    /// Reached; resistance is tentative and the cell is queued.
    Frontier,
    /// Minimum resistance known; never revisited.
    Finalized,
}

/// Mutable state of one run, owned by the engine.
#[derive(Clone, Debug, Default)]
pub(crate) struct SearchState {
    labels: Vec<Label>,
    resistance: Vec<f64>,
    predecessor: Vec<Option<CellId>>,
}

impl SearchState {
    pub(crate) fn new(cell_count: usize) -> Self {
        Self {
            labels: vec![Label::Unvisited; cell_count],
            resistance: vec![UNREACHABLE; cell_count],
            predecessor: vec![None; cell_count],
        }
    }

    #[inline]
    pub(crate) fn label(&self, cell: CellId) -> Label {
        self.labels[cell.0]
    }

    #[inline]
    pub(crate) fn tentative(&self, cell: CellId) -> f64 {
        self.resistance[cell.0]
    }

    /// Seed a source: frontier at zero resistance, no predecessor.
    pub(crate) fn seed(&mut self, cell: CellId) {
        self.labels[cell.0] = Label::Frontier;
        self.resistance[cell.0] = 0.0;
        self.predecessor[cell.0] = None;
    }

    /// First contact with an unvisited cell.
    pub(crate) fn discover(&mut self, cell: CellId, from: CellId, resistance: f64) {
        debug_assert_eq!(self.labels[cell.0], Label::Unvisited);
        self.labels[cell.0] = Label::Frontier;
        self.resistance[cell.0] = resistance;
        self.predecessor[cell.0] = Some(from);
    }

    /// A cheaper route to a frontier cell.
    pub(crate) fn improve(&mut self, cell: CellId, from: CellId, resistance: f64) {
        debug_assert_eq!(self.labels[cell.0], Label::Frontier);
        self.resistance[cell.0] = resistance;
        self.predecessor[cell.0] = Some(from);
    }

    pub(crate) fn finalize(&mut self, cell: CellId, resistance: f64) {
        self.labels[cell.0] = Label::Finalized;
        self.resistance[cell.0] = resistance;
    }

    /// Hand the resistance and predecessor arrays over to a result.
    pub(crate) fn into_parts(self) -> (Vec<f64>, Vec<Option<CellId>>) {
        (self.resistance, self.predecessor)
    }
}
