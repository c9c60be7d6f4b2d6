//! Error types for the resistance search.

use mole_core::CellId;
use std::fmt;

/// Errors from constructing, running, or querying a search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchError {
    /// Results were requested before the run completed.
    NotReady,
    /// A path was requested for a cell no source reaches.
    Unreachable {
        /// The unreachable target.
        cell: CellId,
    },
    /// A queried cell id is not below the grid's cell count.
    CellOutOfRange {
        /// The offending id.
        cell: CellId,
        /// Number of cells in the grid.
        cell_count: usize,
    },
    /// A source cell id is not below the grid's cell count.
    SourceOutOfRange {
        /// The offending id.
        cell: CellId,
        /// Number of cells in the grid.
        cell_count: usize,
    },
    /// The conductivity field is not aligned with the grid.
    FieldMismatch {
        /// Number of cells in the grid.
        cells: usize,
        /// Number of values in the field.
        values: usize,
    },
    /// The run was cancelled through its [`CancelToken`](crate::CancelToken).
    Cancelled {
        /// Cells finalized before cancellation was observed.
        finalized: usize,
    },
    /// A predecessor chain did not end at a source.
    BrokenChain {
        /// The target whose chain was walked.
        cell: CellId,
    },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotReady => write!(f, "search has not completed"),
            Self::Unreachable { cell } => write!(f, "cell {cell} is not reachable from any source"),
            Self::CellOutOfRange { cell, cell_count } => {
                write!(f, "cell {cell} out of range for grid with {cell_count} cells")
            }
            Self::SourceOutOfRange { cell, cell_count } => {
                write!(f, "source {cell} out of range for grid with {cell_count} cells")
            }
            Self::FieldMismatch { cells, values } => {
                write!(f, "field has {values} values, grid has {cells} cells")
            }
            Self::Cancelled { finalized } => {
                write!(f, "search cancelled after finalizing {finalized} cells")
            }
            Self::BrokenChain { cell } => {
                write!(f, "predecessor chain from cell {cell} does not reach a source")
            }
        }
    }
}

impl std::error::Error for SearchError {}
