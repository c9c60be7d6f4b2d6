//! Error types for grid construction and spatial queries.

use mole_core::{CellId, Point3D};
use std::fmt;

/// Errors arising from grid construction or spatial queries.
#[derive(Debug, Clone, PartialEq)]
pub enum SpaceError {
    /// A physical point lies outside the grid extents.
    OutOfDomain {
        /// The offending point.
        point: Point3D,
        /// Human-readable description of the valid region.
        bounds: String,
    },
    /// A cell id is not below the grid's cell count.
    CellOutOfRange {
        /// The offending id.
        cell: CellId,
        /// Number of cells in the grid.
        cell_count: usize,
    },
    /// Attempted to construct a grid with zero cells along an axis.
    EmptyGrid {
        /// Axis name (`"nx"`, `"ny"`, `"nz"`).
        axis: &'static str,
    },
    /// A cell size is zero, negative, or not finite.
    InvalidCellSize {
        /// Axis name (`"dx"`, `"dy"`, `"dz"`).
        axis: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// A refinement factor is zero.
    InvalidRefinement {
        /// Axis name (`"resx"`, `"resy"`, `"resz"`).
        axis: &'static str,
        /// The rejected value.
        value: usize,
    },
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfDomain { point, bounds } => {
                write!(f, "point {point} is outside the domain {bounds}")
            }
            Self::CellOutOfRange { cell, cell_count } => {
                write!(f, "cell {cell} out of range for grid with {cell_count} cells")
            }
            Self::EmptyGrid { axis } => write!(f, "{axis} must be at least 1"),
            Self::InvalidCellSize { axis, value } => {
                write!(f, "{axis} must be finite and positive, got {value}")
            }
            Self::InvalidRefinement { axis, value } => {
                write!(f, "{axis} must be at least 1, got {value}")
            }
        }
    }
}

impl std::error::Error for SpaceError {}
