//! The multi-source minimum-resistance search.

use crate::cancel::CancelToken;
use crate::error::SearchError;
use crate::metrics::RunMetrics;
use crate::path::Path;
use crate::queue::IndexedHeap;
use crate::resistance::{ResistanceModel, SeriesResistance};
use crate::result::SearchResult;
use crate::state::{Label, SearchState};
use mole_core::CellId;
use mole_field::ConductivityField;
use mole_space::Grid;
use std::time::Instant;

/// Lazy label-correcting search from a set of source cells.
///
/// Cells start `Unvisited`. Sources are seeded at zero resistance; the
/// frontier cell with the lowest tentative resistance is repeatedly
/// finalized and its neighbours relaxed, until the frontier is empty.
/// A frontier cell's resistance and predecessor change only on a strictly
/// lower candidate, so among equally resistant routes the first one found
/// is kept.
///
/// The grid and field are borrowed for the engine's lifetime and may be
/// shared by any number of engines.
///
/// # Lifecycle
///
/// ```text
///   new ──► run ──► ready (result, path, resistance)
///            │
///            └──► Cancelled ──► run again (resumes)
/// ```
pub struct LazyMole<'g, M = SeriesResistance> {
    grid: &'g dyn Grid,
    field: &'g ConductivityField,
    model: M,
    state: SearchState,
    queue: IndexedHeap,
    sources: Vec<CellId>,
    order: Vec<CellId>,
    cancel: Option<CancelToken>,
    metrics: RunMetrics,
    result: Option<SearchResult>,
}

impl<'g> LazyMole<'g, SeriesResistance> {
    /// Prepare a search with the default series-resistance model.
    ///
    /// Duplicate sources are collapsed; an empty source list is allowed
    /// and leaves every cell unreachable.
    pub fn new(
        grid: &'g dyn Grid,
        field: &'g ConductivityField,
        sources: &[CellId],
    ) -> Result<Self, SearchError> {
        Self::with_model(grid, field, sources, SeriesResistance)
    }
}

impl<'g, M: ResistanceModel> LazyMole<'g, M> {
    /// Prepare a search with a custom edge model.
    ///
    /// Returns `Err(SearchError::FieldMismatch)` if the field does not
    /// cover the grid and `Err(SearchError::SourceOutOfRange)` for a source
    /// id outside it.
    pub fn with_model(
        grid: &'g dyn Grid,
        field: &'g ConductivityField,
        sources: &[CellId],
        model: M,
    ) -> Result<Self, SearchError> {
        let n = grid.cell_count();
        if field.len() != n {
            return Err(SearchError::FieldMismatch {
                cells: n,
                values: field.len(),
            });
        }
        if let Some(&bad) = sources.iter().find(|s| s.0 >= n) {
            return Err(SearchError::SourceOutOfRange {
                cell: bad,
                cell_count: n,
            });
        }

        let mut sources = sources.to_vec();
        sources.sort_unstable();
        sources.dedup();

        let mut state = SearchState::new(n);
        let mut queue = IndexedHeap::new(n);
        let mut metrics = RunMetrics::default();
        for &s in &sources {
            state.seed(s);
            queue.push(s, 0.0);
            metrics.pushes += 1;
        }

        Ok(Self {
            grid,
            field,
            model,
            state,
            queue,
            sources,
            order: Vec::with_capacity(n),
            cancel: None,
            metrics,
            result: None,
        })
    }

    /// Attach a cancellation token, checked before every extraction.
    pub fn with_cancel(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// The grid searched over.
    pub fn grid(&self) -> &'g dyn Grid {
        self.grid
    }

    /// Distinct sources, ascending.
    pub fn sources(&self) -> &[CellId] {
        &self.sources
    }

    /// Whether [`run`](Self::run) has completed.
    pub fn is_ready(&self) -> bool {
        self.result.is_some()
    }

    /// Counters so far, including those of a cancelled attempt.
    pub fn metrics(&self) -> &RunMetrics {
        &self.metrics
    }

    /// Run the search to completion.
    ///
    /// Idempotent: once ready, further calls return the same result without
    /// recomputation. If the cancellation token fires, returns
    /// `Err(SearchError::Cancelled)` and keeps the partial state; a later
    /// call (after [`CancelToken::reset`]) resumes where it stopped.
    pub fn run(&mut self) -> Result<&SearchResult, SearchError> {
        if self.result.is_none() {
            let start = Instant::now();
            let outcome = self.drain();
            let elapsed = u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX);
            self.metrics.elapsed_us = self.metrics.elapsed_us.saturating_add(elapsed);
            outcome?;
            self.result = Some(self.freeze());
        }
        self.result.as_ref().ok_or(SearchError::NotReady)
    }

    fn drain(&mut self) -> Result<(), SearchError> {
        loop {
            if self.cancel.as_ref().is_some_and(CancelToken::is_cancelled) {
                log::debug!(
                    "search cancelled after {} of {} cells",
                    self.metrics.finalized,
                    self.grid.cell_count()
                );
                return Err(SearchError::Cancelled {
                    finalized: self.metrics.finalized,
                });
            }
            let Some((cell, resistance)) = self.queue.pop() else {
                return Ok(());
            };
            debug_assert_eq!(self.state.label(cell), Label::Frontier);
            self.state.finalize(cell, resistance);
            self.order.push(cell);
            self.metrics.finalized += 1;

            for next in self.grid.neighbours(cell) {
                let label = self.state.label(next);
                if label == Label::Finalized {
                    continue;
                }
                let candidate =
                    resistance + self.model.resistance(self.grid, self.field, cell, next);
                self.metrics.relaxations += 1;
                match label {
                    Label::Unvisited => {
                        self.state.discover(next, cell, candidate);
                        self.queue.push(next, candidate);
                        self.metrics.pushes += 1;
                    }
                    Label::Frontier if candidate < self.state.tentative(next) => {
                        self.state.improve(next, cell, candidate);
                        if self.queue.decrease_key(next, candidate) {
                            self.metrics.decrease_keys += 1;
                        }
                    }
                    _ => {}
                }
            }
        }
    }

    fn freeze(&mut self) -> SearchResult {
        let (resistances, predecessors) = std::mem::take(&mut self.state).into_parts();
        let reached = self.order.len();
        log::debug!(
            "search finished: {reached}/{} cells reached from {} sources, {} pushes, {} decrease-keys, {}us",
            resistances.len(),
            self.sources.len(),
            self.metrics.pushes,
            self.metrics.decrease_keys,
            self.metrics.elapsed_us
        );
        SearchResult::new(
            resistances,
            predecessors,
            std::mem::take(&mut self.order),
            self.sources.clone(),
            self.metrics.clone(),
        )
    }

    /// The completed result.
    pub fn result(&self) -> Result<&SearchResult, SearchError> {
        self.result.as_ref().ok_or(SearchError::NotReady)
    }

    /// Minimum resistance of `cell`; see [`SearchResult::resistance`].
    pub fn resistance(&self, cell: CellId) -> Result<f64, SearchError> {
        self.result()?.resistance(cell)
    }

    /// Minimum-resistance path to `target`; see [`SearchResult::path`].
    pub fn path(&self, target: CellId) -> Result<Path, SearchError> {
        self.result()?.path(target)
    }

    /// Consume the engine, keeping only its result.
    pub fn into_result(self) -> Result<SearchResult, SearchError> {
        self.result.ok_or(SearchError::NotReady)
    }
}
