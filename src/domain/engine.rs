//! The Langton's Ant transition rule.
//!
//! On an empty cell the ant turns right, on a filled cell it turns left.
//! Either way it flips the cell it stood on and moves one cell forward.

use super::{Ant, Cell, Grid};

/// What a single step did.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct StepOutcome {
    /// The ant after turning and moving
    pub ant: Ant,
    /// Encoded index (`y * cols + x`) of the cell that was flipped
    pub changed: usize,
    /// State the flipped cell had before the step
    pub previous: Cell,
}

/// Apply one step of the rule to `grid`, returning the new ant.
pub fn step(grid: &mut Grid, ant: Ant) -> StepOutcome {
    let cell = grid.get(ant.x, ant.y);
    grid.set(ant.x, ant.y, cell.flip());

    let heading = match cell {
        Cell::Empty => ant.heading.turn_right(),
        Cell::Filled => ant.heading.turn_left(),
    };

    StepOutcome {
        ant: ant.facing(heading).advance(grid),
        changed: grid.encode(ant.x, ant.y),
        previous: cell,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Heading;

    #[test]
    fn test_empty_cell_turns_right() {
        let mut grid = Grid::new(5, 5).unwrap();
        let out = step(&mut grid, Ant::new(2, 2, Heading::Up));

        assert_eq!(grid.get(2, 2), Cell::Filled);
        assert_eq!(out.ant, Ant::new(3, 2, Heading::Right));
        assert_eq!(out.changed, 12);
        assert_eq!(out.previous, Cell::Empty);
    }

    #[test]
    fn test_filled_cell_turns_left() {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.set(2, 2, Cell::Filled);
        let out = step(&mut grid, Ant::new(2, 2, Heading::Up));

        assert_eq!(grid.get(2, 2), Cell::Empty);
        assert_eq!(out.ant, Ant::new(1, 2, Heading::Left));
        assert_eq!(out.previous, Cell::Filled);
    }

    #[test]
    fn test_single_row_grid() {
        let mut grid = Grid::new(3, 1).unwrap();
        let mut ant = Ant::new(0, 0, Heading::Right);
        // Right -> Down: y wraps back onto the only row
        ant = step(&mut grid, ant).ant;
        assert_eq!(ant, Ant::new(0, 0, Heading::Down));
        // Filled -> turn left to Right
        ant = step(&mut grid, ant).ant;
        assert_eq!(ant, Ant::new(1, 0, Heading::Right));
        assert_eq!(grid.get(0, 0), Cell::Empty);
    }

    #[test]
    fn test_single_cell_grid() {
        let mut grid = Grid::new(1, 1).unwrap();
        let mut ant = Ant::new(0, 0, Heading::Up);
        for i in 0..8 {
            let out = step(&mut grid, ant);
            assert_eq!((out.ant.x, out.ant.y), (0, 0));
            assert_eq!(out.changed, 0);
            assert_eq!(out.previous.is_filled(), i % 2 == 1);
            ant = out.ant;
        }
    }
}
