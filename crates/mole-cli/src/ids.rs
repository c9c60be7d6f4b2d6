//! Source and target id files.

use crate::error::CliError;
use mole_core::CellId;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Read whitespace-separated cell ids from `reader`.
///
/// `origin` only labels errors. Range checks are left to the search.
pub fn parse_ids<R: BufRead>(reader: R, origin: &Path) -> Result<Vec<CellId>, CliError> {
    let mut ids = Vec::new();
    for (n, line) in reader.lines().enumerate() {
        let line = line.map_err(CliError::io(origin))?;
        for token in line.split_whitespace() {
            let id = token.parse::<usize>().map_err(|_| CliError::InvalidId {
                path: origin.to_path_buf(),
                token: token.to_string(),
                line: n + 1,
            })?;
            ids.push(CellId(id));
        }
    }
    Ok(ids)
}

/// Open `path` and read its ids.
pub fn load_ids(path: &Path) -> Result<Vec<CellId>, CliError> {
    let file = File::open(path).map_err(CliError::io(path))?;
    parse_ids(BufReader::new(file), path)
}
