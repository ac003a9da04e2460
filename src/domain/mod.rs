mod cell;
mod grid;
mod ant;
mod dirty;
mod simulation;
pub mod engine;

pub use cell::Cell;
pub use grid::Grid;
pub use ant::{Ant, Heading};
pub use dirty::DirtyTracker;
pub use simulation::Simulation;
pub use engine::StepOutcome;
