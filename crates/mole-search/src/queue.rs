//! Indexed binary min-heap with decrease-key.
//!
//! Every cell owns a handle slot holding its current position in the heap
//! array, so a queued cell's priority can be lowered in place in
//! O(log n). Each cell is queued at most once; the queue never holds stale
//! duplicates.

use mole_core::CellId;

/// Handle value of a cell that is not in the heap.
const NOT_QUEUED: usize = usize::MAX;

#[derive(Clone, Copy, Debug)]
struct Entry {
    priority: f64,
    cell: CellId,
}

impl Entry {
    /// Ascending priority; equal priorities fall back to the lower id so
    /// that extraction order is deterministic.
    #[inline]
    fn precedes(&self, other: &Entry) -> bool {
        self.priority < other.priority
            || (self.priority == other.priority && self.cell < other.cell)
    }
}

/// A min-priority queue over the cells of one grid.
///
/// # Examples
///
/// ```
/// use mole_core::CellId;
/// use mole_search::IndexedHeap;
///
/// let mut heap = IndexedHeap::new(4);
/// heap.push(CellId(2), 5.0);
/// heap.push(CellId(3), 1.0);
/// heap.decrease_key(CellId(2), 0.5);
/// assert_eq!(heap.pop(), Some((CellId(2), 0.5)));
/// assert_eq!(heap.pop(), Some((CellId(3), 1.0)));
/// assert_eq!(heap.pop(), None);
/// ```
#[derive(Clone, Debug)]
pub struct IndexedHeap {
    heap: Vec<Entry>,
    handles: Vec<usize>,
}

impl IndexedHeap {
    /// An empty heap able to hold cells `0..cell_count`.
    pub fn new(cell_count: usize) -> Self {
        Self {
            heap: Vec::new(),
            handles: vec![NOT_QUEUED; cell_count],
        }
    }

    /// Number of queued cells.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// `true` if no cell is queued.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Whether `cell` is currently queued.
    pub fn contains(&self, cell: CellId) -> bool {
        self.handles[cell.0] != NOT_QUEUED
    }

    /// Current priority of a queued cell.
    pub fn priority(&self, cell: CellId) -> Option<f64> {
        match self.handles[cell.0] {
            NOT_QUEUED => None,
            pos => Some(self.heap[pos].priority),
        }
    }

    /// Queue `cell` with `priority`. The cell must not already be queued.
    pub fn push(&mut self, cell: CellId, priority: f64) {
        debug_assert!(!self.contains(cell), "cell {cell} queued twice");
        let pos = self.heap.len();
        self.heap.push(Entry { priority, cell });
        self.handles[cell.0] = pos;
        self.sift_up(pos);
    }

    /// Lower the priority of a queued cell.
    ///
    /// Returns `false`, leaving the heap unchanged, if the cell is not
    /// queued or `priority` is not lower than its current one.
    pub fn decrease_key(&mut self, cell: CellId, priority: f64) -> bool {
        let pos = self.handles[cell.0];
        if pos == NOT_QUEUED || !(priority < self.heap[pos].priority) {
            return false;
        }
        self.heap[pos].priority = priority;
        self.sift_up(pos);
        true
    }

    /// Remove and return the cell with the lowest priority.
    pub fn pop(&mut self) -> Option<(CellId, f64)> {
        if self.heap.is_empty() {
            return None;
        }
        let last = self.heap.len() - 1;
        self.swap(0, last);
        let top = self.heap.pop()?;
        self.handles[top.cell.0] = NOT_QUEUED;
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some((top.cell, top.priority))
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.handles[self.heap[a].cell.0] = a;
        self.handles[self.heap[b].cell.0] = b;
    }

    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if !self.heap[pos].precedes(&self.heap[parent]) {
                break;
            }
            self.swap(pos, parent);
            pos = parent;
        }
    }

    fn sift_down(&mut self, mut pos: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * pos + 1;
            let right = left + 1;
            let mut best = pos;
            if left < len && self.heap[left].precedes(&self.heap[best]) {
                best = left;
            }
            if right < len && self.heap[right].precedes(&self.heap[best]) {
                best = right;
            }
            if best == pos {
                break;
            }
            self.swap(pos, best);
            pos = best;
        }
    }
}
