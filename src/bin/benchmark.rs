//! Render cost comparison: full redraw against incremental flush

use std::time::Instant;
use langtons_ant::{ConfigError, FrameBuffer, Renderer, Simulation};

const CELL_SIZE: u32 = 4;
const WARMUP_STEPS: usize = 20_000;

/// Average milliseconds for one full redraw of a warmed-up grid
fn benchmark_full(size: u32, iterations: u32) -> Result<f64, ConfigError> {
    let cells = (size / CELL_SIZE) as usize;
    let mut sim = Simulation::new(cells, cells)?;
    sim.step_many(WARMUP_STEPS);
    let renderer = Renderer::new(CELL_SIZE);
    let mut surface = FrameBuffer::new(size, size);

    let start = Instant::now();
    for _ in 0..iterations {
        renderer.full_redraw(&mut surface, sim.grid(), sim.ant());
    }
    Ok(start.elapsed().as_secs_f64() * 1000.0 / iterations as f64)
}

/// Average milliseconds for one tick's incremental flush of `batch` steps
fn benchmark_incremental(size: u32, batch: usize, iterations: u32) -> Result<f64, ConfigError> {
    let cells = (size / CELL_SIZE) as usize;
    let mut sim = Simulation::new(cells, cells)?;
    sim.step_many(WARMUP_STEPS);
    sim.drain_dirty();
    let renderer = Renderer::new(CELL_SIZE);
    let mut surface = FrameBuffer::new(size, size);
    renderer.full_redraw(&mut surface, sim.grid(), sim.ant());

    let mut elapsed = 0.0;
    for _ in 0..iterations {
        sim.step_many(batch);
        let dirty = sim.drain_dirty();
        let start = Instant::now();
        renderer.incremental_redraw(&mut surface, sim.grid(), sim.ant(), &dirty);
        elapsed += start.elapsed().as_secs_f64();
    }
    Ok(elapsed * 1000.0 / iterations as f64)
}

fn main() -> Result<(), ConfigError> {
    println!("=== Langton's Ant Render Benchmark ===\n");

    let sizes = [200, 400, 800, 1600, 3200];
    let iterations = 50;
    // speed 50 -> 6 steps per tick, speed 100 -> 11
    let batches = [6, 11];

    println!("{:>10} {:>12} {:>14} {:>14} {:>10}",
        "Pixels", "Full", "Incr(6)", "Incr(11)", "Speedup");
    println!("{:-<66}", "");

    for size in sizes {
        let full_ms = benchmark_full(size, iterations)?;
        let incr: Vec<f64> = batches
            .iter()
            .map(|&batch| benchmark_incremental(size, batch, iterations))
            .collect::<Result<_, _>>()?;

        let speedup = if incr[1] > 0.0 { full_ms / incr[1] } else { 0.0 };

        println!(
            "{:>10} {:>12.3} {:>14.4} {:>14.4} {:>9.0}x",
            format!("{}x{}", size, size),
            full_ms,
            incr[0],
            incr[1],
            speedup
        );
    }

    Ok(())
}
