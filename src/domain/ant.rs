use super::Grid;

/// Compass heading, encoded 0..=3 in clockwise order starting at Up.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Heading {
    #[default]
    Up = 0,
    Right = 1,
    Down = 2,
    Left = 3,
}

impl Heading {
    const ALL: [Heading; 4] = [Heading::Up, Heading::Right, Heading::Down, Heading::Left];

    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Heading for an index taken modulo 4
    pub const fn from_index(index: u8) -> Self {
        Self::ALL[(index % 4) as usize]
    }

    /// Quarter turn clockwise: `(h + 1) mod 4`
    pub const fn turn_right(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Quarter turn counterclockwise: `(h + 3) mod 4`
    pub const fn turn_left(self) -> Self {
        Self::from_index(self.index() + 3)
    }

    /// Unit step in screen space (y grows downwards)
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Heading::Up => (0, -1),
            Heading::Right => (1, 0),
            Heading::Down => (0, 1),
            Heading::Left => (-1, 0),
        }
    }
}

/// The ant's position and heading.
///
/// Ant is a plain value: every step produces a new one instead of mutating
/// the old, so the previous state stays available to whoever kept it.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Ant {
    pub x: usize,
    pub y: usize,
    pub heading: Heading,
}

impl Ant {
    pub const fn new(x: usize, y: usize, heading: Heading) -> Self {
        Self { x, y, heading }
    }

    /// Ant in the middle of the grid, facing up
    pub const fn centered(grid: &Grid) -> Self {
        let (cols, rows) = grid.dimensions();
        Self::new(cols / 2, rows / 2, Heading::Up)
    }

    pub const fn facing(self, heading: Heading) -> Self {
        Self { heading, ..self }
    }

    /// One cell forward, wrapping on both axes
    pub const fn advance(self, grid: &Grid) -> Self {
        let (dx, dy) = self.heading.offset();
        let (x, y) = grid.wrap(self.x as isize + dx, self.y as isize + dy);
        Self { x, y, heading: self.heading }
    }
}
