//! One end-to-end run: config in, resistance map and path out.

use crate::config::{resolve, RunConfig};
use crate::error::CliError;
use crate::ids::load_ids;
use mole_core::CellId;
use mole_field::import_conductivity;
use mole_search::{LazyMole, RunMetrics};
use mole_space::Grid;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// What a completed run found.
#[derive(Clone, Debug)]
pub struct RunSummary {
    /// The reachable target with the lowest resistance.
    pub target: CellId,
    /// Its minimum hydraulic resistance.
    pub resistance: f64,
    /// Cells on the exported path, target and source included.
    pub path_len: usize,
    /// Search counters.
    pub metrics: RunMetrics,
    /// Time spent in the search alone.
    pub search_time: Duration,
    /// Time for the whole run.
    pub total_time: Duration,
}

/// Run the configuration found in `config_dir`.
pub fn execute(config_dir: &Path) -> Result<RunSummary, CliError> {
    let start = Instant::now();

    info!("reading configuration from '{}'", config_dir.display());
    let config = RunConfig::load(config_dir)?;

    let grid = config.build_grid()?;
    info!(
        "grid: {} cells ({}D, refinement {:?})",
        grid.cell_count(),
        grid.ndim(),
        grid.refinement()
    );

    let source_path = resolve(config_dir, &config.input.source.file);
    let sources = load_ids(&source_path)?;
    info!("loaded {} source ids from '{}'", sources.len(), source_path.display());

    let target_path = resolve(config_dir, &config.input.target.file);
    let targets = load_ids(&target_path)?;
    info!("loaded {} target ids from '{}'", targets.len(), target_path.display());

    let field_path = resolve(config_dir, &config.input.field.file);
    let file = File::open(&field_path).map_err(CliError::io(&field_path))?;
    let field = import_conductivity(&grid, BufReader::new(file), &config.import_options())
        .map_err(|source| CliError::Field {
            path: field_path.clone(),
            source,
        })?;
    info!("loaded conductivity field from '{}'", field_path.display());

    let search_start = Instant::now();
    let mut mole = LazyMole::new(&grid, &field, &sources)?;
    let result = mole.run()?;
    let search_time = search_start.elapsed();
    debug!("search metrics: {:?}", result.metrics());

    let res_path = resolve(config_dir, &config.output.resistance.file);
    let out = File::create(&res_path).map_err(CliError::io(&res_path))?;
    result
        .write_resistances(BufWriter::new(out))
        .map_err(CliError::io(&res_path))?;
    info!("resistance map written to '{}'", res_path.display());

    let (target, resistance) =
        result
            .nearest_target(&targets)?
            .ok_or(CliError::NoReachableTarget {
                targets: targets.len(),
            })?;
    info!("minimum hydraulic resistance = {resistance}");
    info!("target id = {target}");

    let path = result.path(target)?;
    let path_file = resolve(config_dir, &config.output.path.file);
    let out = File::create(&path_file).map_err(CliError::io(&path_file))?;
    path.write_csv(BufWriter::new(out), &grid)
        .map_err(CliError::io(&path_file))?;
    info!(
        "least resistance path ({} cells) written to '{}'",
        path.len(),
        path_file.display()
    );

    let total_time = start.elapsed();
    info!(
        "time elapsed = {:.3}s (search {:.3}s)",
        total_time.as_secs_f64(),
        search_time.as_secs_f64()
    );

    Ok(RunSummary {
        target,
        resistance,
        path_len: path.len(),
        metrics: result.metrics().clone(),
        search_time,
        total_time,
    })
}
