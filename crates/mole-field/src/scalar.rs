//! Dense per-cell value container.

use crate::error::FieldError;
use mole_core::CellId;
use mole_space::Grid;
use std::fmt::Display;
use std::io::{self, Write};
use std::ops::{Index, IndexMut};

/// One value per cell, index-aligned with the grid's [`CellId`]s.
///
/// No interpolation and no bounds beyond the grid's cell count: `get` and
/// `set` are O(1) slice accesses and panic on an out-of-range id, like
/// slice indexing.
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarField<T> {
    values: Vec<T>,
}

impl<T: Copy> ScalarField<T> {
    /// A field with every cell set to `value`.
    pub fn filled(grid: &dyn Grid, value: T) -> Self {
        Self {
            values: vec![value; grid.cell_count()],
        }
    }

    /// Wrap existing values, checking that there is exactly one per cell.
    pub fn from_values(grid: &dyn Grid, values: Vec<T>) -> Result<Self, FieldError> {
        if values.len() != grid.cell_count() {
            return Err(FieldError::LengthMismatch {
                expected: grid.cell_count(),
                actual: values.len(),
            });
        }
        Ok(Self { values })
    }

    /// Value at `id`.
    #[inline]
    pub fn get(&self, id: CellId) -> T {
        self.values[id.0]
    }

    /// Overwrite the value at `id`.
    #[inline]
    pub fn set(&mut self, id: CellId, value: T) {
        self.values[id.0] = value;
    }

    /// Fill every cell with `value`.
    pub fn fill(&mut self, value: T) {
        self.values.fill(value);
    }
}

impl<T> ScalarField<T> {
    /// Number of cells covered.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// `true` if the field covers no cells.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Values in cell-id order.
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Consume the field and return its values in cell-id order.
    pub fn into_values(self) -> Vec<T> {
        self.values
    }

    /// Iterate `(id, value)` pairs in cell-id order.
    pub fn iter(&self) -> impl Iterator<Item = (CellId, &T)> + '_ {
        self.values.iter().enumerate().map(|(i, v)| (CellId(i), v))
    }
}

impl<T: Display> ScalarField<T> {
    /// Write one value per line in cell-id order.
    pub fn write_values<W: Write>(&self, mut writer: W) -> io::Result<()> {
        for v in &self.values {
            writeln!(writer, "{v}")?;
        }
        writer.flush()
    }
}

impl<T> Index<CellId> for ScalarField<T> {
    type Output = T;

    fn index(&self, id: CellId) -> &T {
        &self.values[id.0]
    }
}

impl<T> IndexMut<CellId> for ScalarField<T> {
    fn index_mut(&mut self, id: CellId) -> &mut T {
        &mut self.values[id.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mole_space::CartesianGrid;

    fn grid() -> CartesianGrid {
        CartesianGrid::new_2d(3, 2, 1.0, 1.0).unwrap()
    }

    #[test]
    fn filled_covers_every_cell() {
        let f = ScalarField::filled(&grid(), 7u8);
        assert_eq!(f.len(), 6);
        assert!(f.values().iter().all(|&v| v == 7));
    }

    #[test]
    fn get_set_and_index_agree() {
        let mut f = ScalarField::filled(&grid(), 0.0f64);
        f.set(CellId(4), 2.5);
        f[CellId(1)] = -1.0;
        assert_eq!(f.get(CellId(4)), 2.5);
        assert_eq!(f[CellId(1)], -1.0);
        assert_eq!(f.get(CellId(0)), 0.0);
    }

    #[test]
    fn from_values_checks_length() {
        let g = grid();
        assert!(ScalarField::from_values(&g, vec![1.0; 6]).is_ok());
        assert!(matches!(
            ScalarField::from_values(&g, vec![1.0; 5]),
            Err(FieldError::LengthMismatch {
                expected: 6,
                actual: 5
            })
        ));
    }

    #[test]
    fn write_values_one_per_line() {
        let f = ScalarField::from_values(&grid(), vec![1.0, 0.5, 2.0, 3.25, 10.0, 1e-3]).unwrap();
        let mut buf = Vec::new();
        f.write_values(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "1\n0.5\n2\n3.25\n10\n0.001\n");
    }

    #[test]
    fn iter_yields_ids_in_order() {
        let f = ScalarField::from_values(&grid(), vec![5, 4, 3, 2, 1, 0]).unwrap();
        let ids: Vec<_> = f.iter().map(|(id, _)| id.0).collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 4, 5]);
    }
}
