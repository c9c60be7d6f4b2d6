//! The `config.json` run description.
//!
//! ```json
//! {
//!   "grid": {
//!     "dimensions": { "nx": 10, "ny": 10, "nz": 1 },
//!     "cell_size": { "dx": 1.0, "dy": 1.0, "dz": 1.0 },
//!     "refinement": { "refx": 1, "refy": 1, "refz": 1 }
//!   },
//!   "input": {
//!     "field": { "file": "field.txt", "skip": 0, "log": true },
//!     "source": { "file": "source.txt" },
//!     "target": { "file": "target.txt" }
//!   },
//!   "output": {
//!     "resistance": { "file": "res.txt" },
//!     "path": { "file": "path.txt" }
//!   }
//! }
//! ```
//!
//! Omitting `nz` (and `dz`) describes a 2D grid. Relative file names are
//! resolved against the directory holding the config.
//!
//! Older lazymole runs were described by a `config.yaml` with the same
//! key tree. Such a file must be converted to JSON by hand; the
//! `"cell size"` spelling of `cell_size` is still accepted.

use mole_field::{Connectivity, ImportOptions};
use mole_space::{CartesianGrid, SpaceError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// File name looked up in the config directory.
pub const CONFIG_FILE: &str = "config.json";

/// Errors from loading or validating a [`RunConfig`].
#[derive(Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    Io {
        /// File being read.
        path: PathBuf,
        /// Underlying error.
        source: io::Error,
    },
    /// The document is not valid JSON for a [`RunConfig`].
    Json(serde_json::Error),
    /// A cell count is zero.
    EmptyDimension {
        /// `"nx"`, `"ny"` or `"nz"`.
        axis: &'static str,
    },
    /// A cell size is zero, negative, or not finite.
    InvalidCellSize {
        /// `"dx"`, `"dy"` or `"dz"`.
        axis: &'static str,
        /// The rejected size.
        value: f64,
    },
    /// A refinement factor is zero.
    InvalidRefinement {
        /// `"refx"`, `"refy"` or `"refz"`.
        axis: &'static str,
    },
    /// A `file` entry is empty.
    EmptyFileName {
        /// Dotted key of the entry, e.g. `"input.source.file"`.
        key: &'static str,
    },
    /// The field import options cannot be combined.
    InvalidField {
        /// Description of the problem.
        reason: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "cannot read config '{}': {source}", path.display())
            }
            Self::Json(e) => write!(f, "malformed config: {e}"),
            Self::EmptyDimension { axis } => write!(f, "grid.dimensions.{axis} must be at least 1"),
            Self::InvalidCellSize { axis, value } => {
                write!(f, "grid.cell_size.{axis} must be finite and positive, got {value}")
            }
            Self::InvalidRefinement { axis } => {
                write!(f, "grid.refinement.{axis} must be at least 1")
            }
            Self::EmptyFileName { key } => write!(f, "{key} must not be empty"),
            Self::InvalidField { reason } => write!(f, "input.field: {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

/// Complete description of one driver run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunConfig {
    /// Grid geometry.
    pub grid: GridSection,
    /// Input files.
    pub input: InputSection,
    /// Output files.
    pub output: OutputSection,
}

/// `grid` section.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GridSection {
    /// Coarse cell counts.
    pub dimensions: Dimensions,
    /// Coarse cell sizes. Also read from `"cell size"`.
    #[serde(alias = "cell size")]
    pub cell_size: CellSize,
    /// Per-axis subdivision. Default: no refinement.
    #[serde(default)]
    pub refinement: Refinement,
}

/// `grid.dimensions`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Dimensions {
    /// Cells along x.
    pub nx: usize,
    /// Cells along y.
    pub ny: usize,
    /// Cells along z; absent for a 2D grid.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nz: Option<usize>,
}

/// `grid.cell_size`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CellSize {
    /// Size along x.
    pub dx: f64,
    /// Size along y.
    pub dy: f64,
    /// Size along z; ignored for a 2D grid. Default: 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dz: Option<f64>,
}

/// `grid.refinement`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Refinement {
    /// Subdivisions along x.
    #[serde(default = "one")]
    pub refx: usize,
    /// Subdivisions along y.
    #[serde(default = "one")]
    pub refy: usize,
    /// Subdivisions along z.
    #[serde(default = "one")]
    pub refz: usize,
}

impl Default for Refinement {
    fn default() -> Self {
        Self {
            refx: 1,
            refy: 1,
            refz: 1,
        }
    }
}

/// `input` section.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputSection {
    /// Conductivity field file and its import options.
    pub field: FieldInput,
    /// Whitespace-separated source cell ids.
    pub source: FileRef,
    /// Whitespace-separated target cell ids.
    pub target: FileRef,
}

/// `input.field`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldInput {
    /// Field file.
    pub file: PathBuf,
    /// Header lines to skip. Default: 0.
    #[serde(default)]
    pub skip: usize,
    /// Values are log-conductivities. Default: true.
    #[serde(default = "yes")]
    pub log: bool,
    /// Variance the standard normal input is scaled to. Default: 1.
    #[serde(default = "unit")]
    pub variance: f64,
    /// Optional normal-score transform. Default: none.
    #[serde(default)]
    pub normal_score: Option<NormalScore>,
}

/// Config spelling of [`Connectivity`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalScore {
    /// High values connected.
    Connected,
    /// Low values connected.
    Disconnected,
}

impl From<NormalScore> for Connectivity {
    fn from(n: NormalScore) -> Self {
        match n {
            NormalScore::Connected => Connectivity::Connected,
            NormalScore::Disconnected => Connectivity::Disconnected,
        }
    }
}

/// A `{ "file": ... }` entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileRef {
    /// Path, relative to the config directory unless absolute.
    pub file: PathBuf,
}

/// `output` section.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSection {
    /// Resistance map, one value per line.
    pub resistance: FileRef,
    /// Path of the nearest target, one `x,y,z` line per cell.
    pub path: FileRef,
}

fn one() -> usize {
    1
}

fn unit() -> f64 {
    1.0
}

fn yes() -> bool {
    true
}

impl RunConfig {
    /// Parse a config document. Does not validate.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read and validate `dir/config.json`.
    pub fn load(dir: &Path) -> Result<Self, ConfigError> {
        let path = dir.join(CONFIG_FILE);
        let text = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        let config = Self::from_json(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let d = self.grid.dimensions;
        for (axis, n) in [("nx", d.nx), ("ny", d.ny), ("nz", d.nz.unwrap_or(1))] {
            if n == 0 {
                return Err(ConfigError::EmptyDimension { axis });
            }
        }
        let s = self.grid.cell_size;
        for (axis, value) in [("dx", s.dx), ("dy", s.dy), ("dz", s.dz.unwrap_or(1.0))] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidCellSize { axis, value });
            }
        }
        let r = self.grid.refinement;
        for (axis, value) in [("refx", r.refx), ("refy", r.refy), ("refz", r.refz)] {
            if value == 0 {
                return Err(ConfigError::InvalidRefinement { axis });
            }
        }
        for (key, file) in [
            ("input.field.file", &self.input.field.file),
            ("input.source.file", &self.input.source.file),
            ("input.target.file", &self.input.target.file),
            ("output.resistance.file", &self.output.resistance.file),
            ("output.path.file", &self.output.path.file),
        ] {
            if file.as_os_str().is_empty() {
                return Err(ConfigError::EmptyFileName { key });
            }
        }
        self.import_options()
            .validate()
            .map_err(|e| ConfigError::InvalidField {
                reason: e.to_string(),
            })
    }

    /// Whether the grid is two-dimensional.
    pub fn is_2d(&self) -> bool {
        self.grid.dimensions.nz.is_none()
    }

    /// Build the (refined) grid described by the `grid` section.
    pub fn build_grid(&self) -> Result<CartesianGrid, SpaceError> {
        let d = self.grid.dimensions;
        let s = self.grid.cell_size;
        let r = self.grid.refinement;
        let builder = match d.nz {
            None => CartesianGrid::builder().cells_2d(d.nx, d.ny),
            Some(nz) => CartesianGrid::builder().cells(d.nx, d.ny, nz),
        };
        builder
            .cell_size(s.dx, s.dy, s.dz.unwrap_or(1.0))
            .refinement(r.refx, r.refy, r.refz)
            .build()
    }

    /// Field import options from `input.field`.
    pub fn import_options(&self) -> ImportOptions {
        let f = &self.input.field;
        ImportOptions {
            skip_lines: f.skip,
            variance: f.variance,
            log: f.log,
            normal_score: f.normal_score.map(Connectivity::from),
        }
    }
}

/// `file` relative to `dir`, unless already absolute.
pub fn resolve(dir: &Path, file: &Path) -> PathBuf {
    if file.is_absolute() {
        file.to_path_buf()
    } else {
        dir.join(file)
    }
}
