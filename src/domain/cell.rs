/// Cell is a single square of the ant's world.
/// The ant leaves a trail by flipping cells between Empty and Filled.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Cell {
    #[default]
    Empty,
    Filled,
}

impl Cell {
    /// Check if the cell carries trail
    pub const fn is_filled(self) -> bool {
        matches!(self, Cell::Filled)
    }

    /// The opposite state
    pub const fn flip(self) -> Self {
        match self {
            Cell::Filled => Cell::Empty,
            Cell::Empty => Cell::Filled,
        }
    }
}
