use std::collections::HashSet;

/// DirtyTracker collects encoded cell indices changed since the last flush.
/// Marking the same cell twice keeps a single entry.
#[derive(Clone, Debug, Default)]
pub struct DirtyTracker {
    cells: HashSet<usize>,
}

impl DirtyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a changed cell (idempotent)
    pub fn mark(&mut self, index: usize) {
        self.cells.insert(index);
    }

    /// Hand over everything marked so far and start empty again
    pub fn drain(&mut self) -> HashSet<usize> {
        std::mem::take(&mut self.cells)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Forget pending changes without rendering them
    pub fn clear(&mut self) {
        self.cells.clear();
    }
}
