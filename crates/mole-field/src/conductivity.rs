//! Validated hydraulic conductivity field.

use crate::error::FieldError;
use crate::scalar::ScalarField;
use mole_core::CellId;
use mole_space::Grid;

/// A conductivity value per cell, checked once at construction.
///
/// Every value is finite and strictly positive, and no two adjacent cells
/// share a centre. Both are required by the series resistance model,
/// which divides by conductivity and multiplies by centre distance; a
/// `ConductivityField` can therefore be searched without further checks.
#[derive(Clone, Debug, PartialEq)]
pub struct ConductivityField {
    field: ScalarField<f64>,
}

impl ConductivityField {
    /// Validate `field` against `grid`.
    ///
    /// Returns `Err(FieldError::LengthMismatch)` if the field is not aligned
    /// with the grid, `NonFinite` / `NonPositive` for the first bad value,
    /// and `ZeroDistance` for the first pair of adjacent cells with
    /// coincident centres.
    pub fn new(grid: &dyn Grid, field: ScalarField<f64>) -> Result<Self, FieldError> {
        if field.len() != grid.cell_count() {
            return Err(FieldError::LengthMismatch {
                expected: grid.cell_count(),
                actual: field.len(),
            });
        }
        for (cell, &value) in field.iter() {
            if !value.is_finite() {
                return Err(FieldError::NonFinite { cell, value });
            }
            if value <= 0.0 {
                return Err(FieldError::NonPositive { cell, value });
            }
        }
        for i in 0..grid.cell_count() {
            let a = CellId(i);
            let ca = grid.center_of_cell(a);
            for b in grid.neighbours(a) {
                if b > a && ca.distance(&grid.center_of_cell(b)) == 0.0 {
                    return Err(FieldError::ZeroDistance { a, b });
                }
            }
        }
        Ok(Self { field })
    }

    /// Validate raw values against `grid`.
    pub fn from_values(grid: &dyn Grid, values: Vec<f64>) -> Result<Self, FieldError> {
        Self::new(grid, ScalarField::from_values(grid, values)?)
    }

    /// A field with the same conductivity `k` in every cell.
    pub fn uniform(grid: &dyn Grid, k: f64) -> Result<Self, FieldError> {
        Self::new(grid, ScalarField::filled(grid, k))
    }

    /// Conductivity at `id`.
    #[inline]
    pub fn get(&self, id: CellId) -> f64 {
        self.field.get(id)
    }

    /// Number of cells covered.
    pub fn len(&self) -> usize {
        self.field.len()
    }

    /// `true` if the field covers no cells.
    pub fn is_empty(&self) -> bool {
        self.field.is_empty()
    }

    /// The underlying scalar field.
    pub fn as_field(&self) -> &ScalarField<f64> {
        &self.field
    }

    /// Consume the wrapper and return the underlying scalar field.
    pub fn into_inner(self) -> ScalarField<f64> {
        self.field
    }
}
