//! Frozen outcome of a completed search.

use crate::error::SearchError;
use crate::metrics::RunMetrics;
use crate::path::Path;
use mole_core::CellId;
use std::io::{self, Write};

/// Resistance of a cell no source reaches.
pub const UNREACHABLE: f64 = f64::MAX;

/// Minimum resistances and the shortest-path forest of one run.
///
/// Immutable once built; `Send + Sync`, so it can be shared behind an
/// `Arc` by any number of path readers.
#[derive(Clone, Debug)]
pub struct SearchResult {
    resistances: Vec<f64>,
    predecessors: Vec<Option<CellId>>,
    order: Vec<CellId>,
    sources: Vec<CellId>,
    metrics: RunMetrics,
}

impl SearchResult {
    pub(crate) fn new(
        resistances: Vec<f64>,
        predecessors: Vec<Option<CellId>>,
        order: Vec<CellId>,
        sources: Vec<CellId>,
        metrics: RunMetrics,
    ) -> Self {
        debug_assert_eq!(resistances.len(), predecessors.len());
        debug_assert!(sources.windows(2).all(|w| w[0] < w[1]));
        Self {
            resistances,
            predecessors,
            order,
            sources,
            metrics,
        }
    }

    /// Number of cells covered.
    pub fn cell_count(&self) -> usize {
        self.resistances.len()
    }

    fn check(&self, cell: CellId) -> Result<(), SearchError> {
        if cell.0 < self.resistances.len() {
            Ok(())
        } else {
            Err(SearchError::CellOutOfRange {
                cell,
                cell_count: self.resistances.len(),
            })
        }
    }

    /// Minimum resistances in cell-id order; [`UNREACHABLE`] where no
    /// source reaches.
    pub fn resistances(&self) -> &[f64] {
        &self.resistances
    }

    /// Minimum resistance from any source to `cell`.
    ///
    /// Unreachable cells report [`UNREACHABLE`].
    pub fn resistance(&self, cell: CellId) -> Result<f64, SearchError> {
        self.check(cell)?;
        Ok(self.resistances[cell.0])
    }

    /// Whether some source reaches `cell`. `false` for ids out of range.
    pub fn is_reachable(&self, cell: CellId) -> bool {
        self.resistances
            .get(cell.0)
            .is_some_and(|&r| r != UNREACHABLE)
    }

    /// The neighbour `cell` was finally reached from; `None` for sources
    /// and unreachable cells.
    pub fn predecessor(&self, cell: CellId) -> Result<Option<CellId>, SearchError> {
        self.check(cell)?;
        Ok(self.predecessors[cell.0])
    }

    /// Minimum-resistance path from `target` back to its source.
    pub fn path(&self, target: CellId) -> Result<Path, SearchError> {
        self.check(target)?;
        if !self.is_reachable(target) {
            return Err(SearchError::Unreachable { cell: target });
        }
        Path::reconstruct(target, &self.predecessors, &self.sources)
    }

    /// The reachable target with the lowest resistance.
    ///
    /// The first of equally resistant targets wins. `Ok(None)` if no
    /// target is reachable.
    pub fn nearest_target(&self, targets: &[CellId]) -> Result<Option<(CellId, f64)>, SearchError> {
        let mut best: Option<(CellId, f64)> = None;
        for &t in targets {
            self.check(t)?;
            let r = self.resistances[t.0];
            if r == UNREACHABLE {
                continue;
            }
            if best.is_none_or(|(_, b)| r < b) {
                best = Some((t, r));
            }
        }
        Ok(best)
    }

    /// Cells in the order they were finalized; resistances along it never
    /// decrease.
    pub fn finalization_order(&self) -> &[CellId] {
        &self.order
    }

    /// Distinct source cells, ascending.
    pub fn sources(&self) -> &[CellId] {
        &self.sources
    }

    /// Work counters of the run.
    pub fn metrics(&self) -> &RunMetrics {
        &self.metrics
    }

    /// Write one resistance per line in cell-id order.
    ///
    /// Unreachable cells are written as `1.7976931348623157e308`, which
    /// reads back as [`UNREACHABLE`].
    pub fn write_resistances<W: Write>(&self, mut writer: W) -> io::Result<()> {
        for &r in &self.resistances {
            if r == UNREACHABLE {
                writeln!(writer, "{r:e}")?;
            } else {
                writeln!(writer, "{r}")?;
            }
        }
        writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line() -> SearchResult {
        // 0-1-2 reached from 0; 3 cut off.
        SearchResult::new(
            vec![0.0, 1.0, 2.5, UNREACHABLE],
            vec![None, Some(CellId(0)), Some(CellId(1)), None],
            vec![CellId(0), CellId(1), CellId(2)],
            vec![CellId(0)],
            RunMetrics::default(),
        )
    }

    #[test]
    fn queries_check_range() {
        let r = line();
        assert_eq!(
            r.resistance(CellId(4)),
            Err(SearchError::CellOutOfRange {
                cell: CellId(4),
                cell_count: 4
            })
        );
        assert!(r.predecessor(CellId(9)).is_err());
        assert!(!r.is_reachable(CellId(9)));
    }

    #[test]
    fn unreachable_path_is_an_error() {
        let r = line();
        assert_eq!(r.resistance(CellId(3)), Ok(UNREACHABLE));
        assert_eq!(
            r.path(CellId(3)),
            Err(SearchError::Unreachable { cell: CellId(3) })
        );
    }

    #[test]
    fn nearest_target_skips_unreachable_and_keeps_first_tie() {
        let r = line();
        assert_eq!(
            r.nearest_target(&[CellId(3), CellId(2), CellId(1)]),
            Ok(Some((CellId(1), 1.0)))
        );
        assert_eq!(r.nearest_target(&[CellId(3)]), Ok(None));
        assert_eq!(r.nearest_target(&[]), Ok(None));

        let tied = SearchResult::new(
            vec![0.0, 1.0, 1.0],
            vec![None, Some(CellId(0)), Some(CellId(0))],
            vec![],
            vec![CellId(0)],
            RunMetrics::default(),
        );
        assert_eq!(
            tied.nearest_target(&[CellId(2), CellId(1)]),
            Ok(Some((CellId(2), 1.0)))
        );
    }

    #[test]
    fn export_round_trips_sentinel() {
        let mut out = Vec::new();
        line().write_resistances(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let back: Vec<f64> = text.lines().map(|l| l.parse().unwrap()).collect();
        assert_eq!(back, vec![0.0, 1.0, 2.5, UNREACHABLE]);
        assert_eq!(text.lines().nth(1), Some("1"));
    }

    #[test]
    fn result_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SearchResult>();
    }
}
