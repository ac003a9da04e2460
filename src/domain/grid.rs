use super::Cell;
use crate::error::ConfigError;

/// Grid is the ant's toroidal world.
/// Every coordinate is wrapped internally, so callers never bounds-check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially empty
    pub fn new(width: usize, height: usize) -> Result<Self, ConfigError> {
        if width == 0 || height == 0 {
            return Err(ConfigError::EmptyGrid { cols: width, rows: height });
        }

        Ok(Self {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
        })
    }

    /// Get grid dimensions as (cols, rows)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Encode a coordinate as `y * cols + x` after wrapping it
    pub const fn encode(&self, x: usize, y: usize) -> usize {
        (y % self.height) * self.width + (x % self.width)
    }

    /// Inverse of [`Grid::encode`]
    pub const fn decode(&self, index: usize) -> (usize, usize) {
        (index % self.width, index / self.width)
    }

    /// Wrap a signed coordinate onto the torus
    pub const fn wrap(&self, x: isize, y: isize) -> (usize, usize) {
        (
            x.rem_euclid(self.width as isize) as usize,
            y.rem_euclid(self.height as isize) as usize,
        )
    }

    pub fn get(&self, x: usize, y: usize) -> Cell {
        self.cells[self.encode(x, y)]
    }

    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        let idx = self.encode(x, y);
        self.cells[idx] = cell;
    }

    /// Cell at an already-encoded index
    pub fn at(&self, index: usize) -> Cell {
        self.cells[index % self.cells.len()]
    }

    /// Clear all cells to empty
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = Cell::Empty);
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_filled()).count()
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (idx % self.width, idx / self.width, cell))
    }
}
