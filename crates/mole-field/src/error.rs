//! Error types for field construction, validation and import.

use mole_core::CellId;
use std::fmt;
use std::io;

/// Errors arising from building, validating or importing a field.
#[derive(Debug)]
pub enum FieldError {
    /// The number of values does not match the grid's cell count.
    LengthMismatch {
        /// Cell count of the grid.
        expected: usize,
        /// Number of values supplied.
        actual: usize,
    },
    /// A conductivity value is zero or negative.
    NonPositive {
        /// The offending cell.
        cell: CellId,
        /// Its value.
        value: f64,
    },
    /// A conductivity value is NaN or infinite.
    NonFinite {
        /// The offending cell.
        cell: CellId,
        /// Its value.
        value: f64,
    },
    /// Two distinct adjacent cells share a centre, so the edge between
    /// them has no length.
    ZeroDistance {
        /// First cell.
        a: CellId,
        /// Second cell.
        b: CellId,
    },
    /// The input ended before every coarse cell received a value.
    NotEnoughValues {
        /// Number of coarse values required.
        expected: usize,
        /// Number of values read.
        read: usize,
    },
    /// A token could not be parsed as a real number.
    Parse {
        /// The unparsable token.
        token: String,
        /// 1-based line number in the input.
        line: usize,
    },
    /// The requested import options cannot be combined.
    IncompatibleTransform {
        /// What went wrong.
        reason: String,
    },
    /// The operation requires a Cartesian grid.
    UnsupportedGrid,
    /// An I/O error occurred while reading or writing a field.
    Io(io::Error),
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { expected, actual } => {
                write!(f, "field has {actual} values, grid has {expected} cells")
            }
            Self::NonPositive { cell, value } => {
                write!(f, "conductivity at cell {cell} must be positive, got {value}")
            }
            Self::NonFinite { cell, value } => {
                write!(f, "conductivity at cell {cell} is not finite: {value}")
            }
            Self::ZeroDistance { a, b } => {
                write!(f, "adjacent cells {a} and {b} have coincident centres")
            }
            Self::NotEnoughValues { expected, read } => {
                write!(f, "not enough values: expected {expected}, read {read}")
            }
            Self::Parse { token, line } => {
                write!(f, "cannot parse '{token}' as a number on line {line}")
            }
            Self::IncompatibleTransform { reason } => {
                write!(f, "incompatible transform: {reason}")
            }
            Self::UnsupportedGrid => write!(f, "operation requires a Cartesian grid"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for FieldError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for FieldError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
