use super::{Ant, DirtyTracker, Grid, engine};
use crate::error::ConfigError;
use std::collections::HashSet;

/// Simulation bundles everything a step touches: the grid, the ant,
/// the step counter and the set of cells awaiting repaint.
#[derive(Clone, Debug)]
pub struct Simulation {
    grid: Grid,
    ant: Ant,
    steps: u64,
    dirty: DirtyTracker,
}

impl Simulation {
    /// Empty grid with the ant centered and facing up
    pub fn new(cols: usize, rows: usize) -> Result<Self, ConfigError> {
        let grid = Grid::new(cols, rows)?;
        Ok(Self::with_ant(grid, None))
    }

    /// Start from an arbitrary grid. `None` centers the ant.
    pub fn with_ant(grid: Grid, ant: Option<Ant>) -> Self {
        let ant = ant.unwrap_or_else(|| Ant::centered(&grid));
        let (x, y) = grid.wrap(ant.x as isize, ant.y as isize);
        Self {
            ant: Ant::new(x, y, ant.heading),
            grid,
            steps: 0,
            dirty: DirtyTracker::new(),
        }
    }

    /// Advance one step and queue the flipped cell for repaint
    pub fn step(&mut self) -> engine::StepOutcome {
        let outcome = engine::step(&mut self.grid, self.ant);
        self.ant = outcome.ant;
        self.dirty.mark(outcome.changed);
        self.steps += 1;
        outcome
    }

    /// Run `count` steps back to back
    pub fn step_many(&mut self, count: usize) {
        for _ in 0..count {
            self.step();
        }
    }

    /// Back to an empty grid and a centered ant, same dimensions
    pub fn reset(&mut self) {
        self.grid.clear();
        self.ant = Ant::centered(&self.grid);
        self.steps = 0;
        self.dirty.clear();
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn ant(&self) -> Ant {
        self.ant
    }

    pub fn step_count(&self) -> u64 {
        self.steps
    }

    pub fn dirty(&self) -> &DirtyTracker {
        &self.dirty
    }

    /// Cells changed since the previous call
    pub fn drain_dirty(&mut self) -> HashSet<usize> {
        self.dirty.drain()
    }
}
