//! Text import of coarse fields onto a refined Cartesian grid.
//!
//! The input is a whitespace-separated list of reals, optionally preceded
//! by header lines, in coarse row-major order (x fastest, then y, then z).
//! Each coarse value is transformed and then replicated over the
//! `resx * resy * resz` fine cells it covers ("block-constant upsampling").

use crate::conductivity::ConductivityField;
use crate::error::FieldError;
use crate::scalar::ScalarField;
use crate::transform::{normal_score, Connectivity};
use mole_space::{CartesianGrid, Grid};
use std::io::BufRead;

/// How raw input values are turned into cell values.
///
/// Per coarse value `v`, in order: optional normal-score transform,
/// multiplication by `sqrt(variance)`, and `exp` when `log` is set.
#[derive(Clone, Debug, PartialEq)]
pub struct ImportOptions {
    /// Header lines to discard before reading values. Default: 0.
    pub skip_lines: usize,
    /// Variance the (standard normal) input is scaled to. Default: 1.0.
    pub variance: f64,
    /// Input holds log-conductivity; cell values are `exp(v)`. Default: true.
    pub log: bool,
    /// Optional normal-score transform. Requires `log`. Default: none.
    pub normal_score: Option<Connectivity>,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            skip_lines: 0,
            variance: 1.0,
            log: true,
            normal_score: None,
        }
    }
}

impl ImportOptions {
    /// Check that the options can be combined.
    pub fn validate(&self) -> Result<(), FieldError> {
        if self.normal_score.is_some() && !self.log {
            return Err(FieldError::IncompatibleTransform {
                reason: "normal-score transform requires log-conductivity input".to_string(),
            });
        }
        if !self.variance.is_finite() || self.variance < 0.0 {
            return Err(FieldError::IncompatibleTransform {
                reason: format!("variance must be finite and >= 0, got {}", self.variance),
            });
        }
        Ok(())
    }

    fn apply(&self, raw: f64) -> f64 {
        let mut v = match self.normal_score {
            Some(c) => normal_score(raw, c),
            None => raw,
        };
        v *= self.variance.sqrt();
        if self.log {
            v.exp()
        } else {
            v
        }
    }
}

/// Streams whitespace-separated reals, tracking line numbers.
struct Tokens<R> {
    reader: R,
    line: String,
    line_no: usize,
    pending: Vec<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
            line_no: 0,
            pending: Vec::new(),
        }
    }

    fn skip_lines(&mut self, n: usize) -> Result<(), FieldError> {
        for _ in 0..n {
            self.line.clear();
            if self.reader.read_line(&mut self.line)? == 0 {
                break;
            }
            self.line_no += 1;
        }
        Ok(())
    }

    fn next_value(&mut self) -> Result<Option<f64>, FieldError> {
        while self.pending.is_empty() {
            self.line.clear();
            if self.reader.read_line(&mut self.line)? == 0 {
                return Ok(None);
            }
            self.line_no += 1;
            self.pending = self.line.split_whitespace().rev().map(String::from).collect();
        }
        let Some(token) = self.pending.pop() else {
            return Ok(None);
        };
        token
            .parse::<f64>()
            .map(Some)
            .map_err(|_| FieldError::Parse {
                token,
                line: self.line_no,
            })
    }
}

/// Read a coarse field and upsample it onto `grid`.
///
/// `grid` must be a [`CartesianGrid`]; its refinement factors define the
/// block size. Values beyond the coarse cell count are ignored.
///
/// Returns `Err(FieldError::NotEnoughValues)` if the input ends early and
/// `Err(FieldError::Parse)` for a token that is not a number. The result is
/// not validated; see [`import_conductivity`].
pub fn import_scalar<R: BufRead>(
    grid: &dyn Grid,
    reader: R,
    options: &ImportOptions,
) -> Result<ScalarField<f64>, FieldError> {
    options.validate()?;
    let cart = grid
        .downcast_ref::<CartesianGrid>()
        .ok_or(FieldError::UnsupportedGrid)?;
    let [cx, cy, cz] = cart.coarse_cells();
    let [rx, ry, rz] = grid.refinement();
    let expected = cx * cy * cz;

    let mut tokens = Tokens::new(reader);
    tokens.skip_lines(options.skip_lines)?;

    let mut field = ScalarField::filled(grid, 0.0);
    let mut read = 0;
    for k in 0..cz {
        for j in 0..cy {
            for i in 0..cx {
                let raw = tokens
                    .next_value()?
                    .ok_or(FieldError::NotEnoughValues { expected, read })?;
                read += 1;
                let v = options.apply(raw);
                for z in rz * k..rz * (k + 1) {
                    for y in ry * j..ry * (j + 1) {
                        for x in rx * i..rx * (i + 1) {
                            field.set(cart.merge_ids(x, y, z), v);
                        }
                    }
                }
            }
        }
    }

    log::debug!(
        "imported {read} coarse values onto {} cells (refinement {rx}x{ry}x{rz})",
        field.len()
    );
    Ok(field)
}

/// Read a coarse conductivity field, upsample it onto `grid`, and
/// validate it.
pub fn import_conductivity<R: BufRead>(
    grid: &dyn Grid,
    reader: R,
    options: &ImportOptions,
) -> Result<ConductivityField, FieldError> {
    let field = import_scalar(grid, reader, options)?;
    ConductivityField::new(grid, field)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mole_core::CellId;

    fn raw() -> ImportOptions {
        ImportOptions {
            log: false,
            ..ImportOptions::default()
        }
    }

    #[test]
    fn reads_values_in_cell_order_without_refinement() {
        let g = CartesianGrid::new_2d(3, 2, 1.0, 1.0).unwrap();
        let f = import_scalar(&g, "1 2 3\n4 5 6\n".as_bytes(), &raw()).unwrap();
        assert_eq!(f.values(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn skips_header_lines() {
        let g = CartesianGrid::new_2d(2, 1, 1.0, 1.0).unwrap();
        let opts = ImportOptions {
            skip_lines: 2,
            ..raw()
        };
        let f = import_scalar(&g, "title\n2\n7.5\n8.5\n".as_bytes(), &opts).unwrap();
        assert_eq!(f.values(), &[7.5, 8.5]);
    }

    #[test]
    fn block_constant_upsampling() {
        let g = CartesianGrid::builder()
            .cells_2d(2, 1)
            .cell_size(1.0, 1.0, 1.0)
            .refinement(2, 2, 1)
            .build()
            .unwrap();
        let f = import_scalar(&g, "10 20".as_bytes(), &raw()).unwrap();
        // Fine grid is 4 x 2; left half from 10, right half from 20.
        assert_eq!(f.values(), &[10.0, 10.0, 20.0, 20.0, 10.0, 10.0, 20.0, 20.0]);
    }

    #[test]
    fn block_constant_upsampling_in_z() {
        let g = CartesianGrid::builder()
            .cells(1, 1, 2)
            .refinement(1, 1, 2)
            .build()
            .unwrap();
        let f = import_scalar(&g, "3\n4\n".as_bytes(), &raw()).unwrap();
        assert_eq!(f.values(), &[3.0, 3.0, 4.0, 4.0]);
    }

    #[test]
    fn log_input_is_exponentiated_after_variance_scaling() {
        let g = CartesianGrid::new_2d(2, 1, 1.0, 1.0).unwrap();
        let opts = ImportOptions {
            variance: 4.0,
            ..ImportOptions::default()
        };
        let f = import_scalar(&g, "0 0.5".as_bytes(), &opts).unwrap();
        assert_eq!(f.get(CellId(0)), 1.0);
        assert!((f.get(CellId(1)) - 1.0f64.exp()).abs() < 1e-12);
    }

    #[test]
    fn normal_score_is_applied_before_exp() {
        let g = CartesianGrid::new_2d(1, 1, 1.0, 1.0).unwrap();
        let opts = ImportOptions {
            normal_score: Some(Connectivity::Connected),
            ..ImportOptions::default()
        };
        let f = import_scalar(&g, "0.3".as_bytes(), &opts).unwrap();
        let expected = normal_score(0.3, Connectivity::Connected).exp();
        assert_eq!(f.get(CellId(0)), expected);
    }

    #[test]
    fn normal_score_without_log_is_rejected() {
        let g = CartesianGrid::new_2d(1, 1, 1.0, 1.0).unwrap();
        let opts = ImportOptions {
            normal_score: Some(Connectivity::Disconnected),
            ..raw()
        };
        assert!(matches!(
            import_scalar(&g, "1".as_bytes(), &opts),
            Err(FieldError::IncompatibleTransform { .. })
        ));
    }

    #[test]
    fn short_input_reports_count() {
        let g = CartesianGrid::new_2d(2, 2, 1.0, 1.0).unwrap();
        assert!(matches!(
            import_scalar(&g, "1 2 3".as_bytes(), &raw()),
            Err(FieldError::NotEnoughValues {
                expected: 4,
                read: 3
            })
        ));
    }

    #[test]
    fn bad_token_reports_line() {
        let g = CartesianGrid::new_2d(2, 2, 1.0, 1.0).unwrap();
        match import_scalar(&g, "1 2\n3 x\n".as_bytes(), &raw()) {
            Err(FieldError::Parse { token, line }) => {
                assert_eq!(token, "x");
                assert_eq!(line, 2);
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn import_conductivity_rejects_non_positive() {
        let g = CartesianGrid::new_2d(2, 1, 1.0, 1.0).unwrap();
        assert!(matches!(
            import_conductivity(&g, "1 -1".as_bytes(), &raw()),
            Err(FieldError::NonPositive { cell: CellId(1), .. })
        ));
    }

    #[test]
    fn extra_values_are_ignored() {
        let g = CartesianGrid::new_2d(1, 1, 1.0, 1.0).unwrap();
        let f = import_scalar(&g, "2 99 100".as_bytes(), &raw()).unwrap();
        assert_eq!(f.values(), &[2.0]);
    }
}
