mod control;
mod driver;
mod scheduler;

pub use control::ControlPort;
pub use driver::{AnimationDriver, RunState};
pub use scheduler::{Scheduler, TickHandle};
