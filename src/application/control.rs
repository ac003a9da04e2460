use crate::error::ConfigError;

/// Entry points the UI glue drives. The core never reaches into UI state;
/// buttons, sliders and window events just call these.
pub trait ControlPort {
    /// STOPPED -> RUNNING. No-op when already running.
    fn start(&mut self);

    /// RUNNING -> STOPPED and cancel any pending tick. Idempotent.
    fn stop(&mut self);

    /// Stop, empty the grid, recenter the ant, zero the counter, full redraw.
    fn reset(&mut self);

    /// Speed consulted by the next tick
    fn set_speed(&mut self, value: u32);

    fn speed(&self) -> u32;

    fn step_count(&self) -> u64;

    fn is_running(&self) -> bool;

    /// The pixel surface changed size; reset against the new dimensions.
    fn on_resize(&mut self, width: u32, height: u32) -> Result<(), ConfigError>;

    /// Start when stopped, stop when running
    fn toggle(&mut self) {
        if self.is_running() {
            self.stop();
        } else {
            self.start();
        }
    }
}
