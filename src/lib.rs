// Domain layer - the automaton itself
pub mod domain;

// Application layer - animation loop and control surface
pub mod application;

// Infrastructure layer - rendering, UI, input
pub mod rendering;
pub mod ui;
pub mod input;

pub mod config;
pub mod error;

// Re-exports for convenience
pub use domain::{Ant, Cell, DirtyTracker, Grid, Heading, Simulation};
pub use application::{AnimationDriver, ControlPort, RunState};
pub use rendering::{FrameBuffer, Renderer, Screen, Surface};
pub use config::{Layout, Settings};
pub use error::ConfigError;
