use tracing::{debug, info, warn};

use super::control::ControlPort;
use super::scheduler::{Scheduler, TickHandle};
use crate::config::Layout;
use crate::domain::Simulation;
use crate::error::ConfigError;
use crate::rendering::{Renderer, Surface};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Stopped,
    Running,
}

/// AnimationDriver orchestrates the simulation.
/// Each live tick runs a batch of steps, then one incremental render pass,
/// then schedules the next tick.
pub struct AnimationDriver<S: Surface> {
    simulation: Simulation,
    renderer: Renderer,
    surface: S,
    speed: u32,
    state: RunState,
    scheduler: Scheduler,
}

impl<S: Surface> AnimationDriver<S> {
    /// Size the grid to fit `surface` and paint the initial frame
    pub fn new(mut surface: S, cell_size: u32, speed: u32) -> Result<Self, ConfigError> {
        let (width, height) = surface.size();
        let layout = Layout::from_surface(width, height, cell_size)?;
        let simulation = Simulation::new(layout.cols, layout.rows)?;
        let renderer = Renderer::new(cell_size);
        renderer.full_redraw(&mut surface, simulation.grid(), simulation.ant());

        info!(cols = layout.cols, rows = layout.rows, cell_size, "simulation ready");

        Ok(Self {
            simulation,
            renderer,
            surface,
            speed,
            state: RunState::Stopped,
            scheduler: Scheduler::new(),
        })
    }

    /// `floor(speed / 10) + 1`, read fresh every tick
    pub fn updates_per_tick(&self) -> usize {
        (self.speed / 10) as usize + 1
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn simulation(&self) -> &Simulation {
        &self.simulation
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Called once per host frame. Runs the pending tick, if any.
    /// Returns whether a tick body executed.
    pub fn on_frame(&mut self) -> bool {
        match self.scheduler.take_due() {
            Some(handle) => self.run_tick(handle),
            None => false,
        }
    }

    /// Run a tick body for the handle `take_due` just handed out.
    /// Stale, reused or foreign handles do nothing.
    pub fn run_tick(&mut self, handle: TickHandle) -> bool {
        if self.state != RunState::Running || !self.scheduler.claim(handle) {
            return false;
        }

        let updates = self.updates_per_tick();
        self.simulation.step_many(updates);

        let dirty = self.simulation.drain_dirty();
        let repainted = self.renderer.incremental_redraw(
            &mut self.surface,
            self.simulation.grid(),
            self.simulation.ant(),
            &dirty,
        );
        debug!(updates, repainted, steps = self.simulation.step_count(), "tick");

        self.scheduler.schedule();
        true
    }

    fn redraw_all(&mut self) {
        self.renderer.full_redraw(
            &mut self.surface,
            self.simulation.grid(),
            self.simulation.ant(),
        );
    }
}

impl<S: Surface> ControlPort for AnimationDriver<S> {
    fn start(&mut self) {
        if self.state == RunState::Running {
            return;
        }
        self.state = RunState::Running;
        self.scheduler.schedule();
        info!(speed = self.speed, "started");
    }

    fn stop(&mut self) {
        self.scheduler.cancel();
        if self.state == RunState::Running {
            self.state = RunState::Stopped;
            info!(steps = self.simulation.step_count(), "stopped");
        }
    }

    fn reset(&mut self) {
        self.stop();
        self.simulation.reset();
        self.redraw_all();
        info!("reset");
    }

    fn set_speed(&mut self, value: u32) {
        self.speed = value;
    }

    fn speed(&self) -> u32 {
        self.speed
    }

    fn step_count(&self) -> u64 {
        self.simulation.step_count()
    }

    fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    fn on_resize(&mut self, width: u32, height: u32) -> Result<(), ConfigError> {
        self.stop();

        let layout = match Layout::from_surface(width, height, self.renderer.cell_size()) {
            Ok(layout) => layout,
            Err(err) => {
                warn!(width, height, %err, "resize rejected, keeping previous grid");
                return Err(err);
            }
        };

        self.simulation = Simulation::new(layout.cols, layout.rows)?;
        self.surface.resize(width, height);
        self.redraw_all();
        info!(width, height, cols = layout.cols, rows = layout.rows, "resized");
        Ok(())
    }
}
