//! Per-run counters for the resistance search.

/// Work counters collected while a search runs.
///
/// Populated by [`LazyMole::run`](crate::LazyMole::run) and carried by the
/// resulting [`SearchResult`](crate::SearchResult). A cancelled and resumed
/// run accumulates across both calls.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunMetrics {
    /// Cells moved to the finalized state.
    pub finalized: usize,
    /// Queue insertions, sources included.
    pub pushes: usize,
    /// Successful in-place priority decreases.
    pub decrease_keys: usize,
    /// Edge resistances evaluated.
    pub relaxations: usize,
    /// Wall-clock time spent in the search loop, in microseconds.
    pub elapsed_us: u64,
}
