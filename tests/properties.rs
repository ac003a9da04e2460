//! Property tests for stepping, dirty tracking and rendering.

use std::collections::HashSet;

use langtons_ant::{
    AnimationDriver, Ant, Cell, ControlPort, FrameBuffer, Grid, Heading, Renderer, Simulation,
    domain::engine,
};
use proptest::prelude::*;

/// A grid of up to 12x12 with arbitrary contents plus an ant somewhere on it
fn world() -> impl Strategy<Value = (Grid, Ant)> {
    (1usize..=12, 1usize..=12).prop_flat_map(|(cols, rows)| {
        (
            proptest::collection::vec(any::<bool>(), cols * rows),
            0..cols,
            0..rows,
            0u8..4,
        )
            .prop_map(move |(cells, x, y, heading)| {
                let mut grid = Grid::new(cols, rows).unwrap();
                for (i, filled) in cells.into_iter().enumerate() {
                    if filled {
                        grid.set(i % cols, i / cols, Cell::Filled);
                    }
                }
                (grid, Ant::new(x, y, Heading::from_index(heading)))
            })
    })
}

proptest! {
    /// Empty cells turn the ant right and become filled; filled cells turn it left and empty
    #[test]
    fn prop_turn_and_flip((grid, ant) in world()) {
        let mut grid = grid;
        let before = grid.get(ant.x, ant.y);
        let outcome = engine::step(&mut grid, ant);

        prop_assert_eq!(grid.get(ant.x, ant.y), before.flip());
        let expected = match before {
            Cell::Empty => (ant.heading.index() + 1) % 4,
            Cell::Filled => (ant.heading.index() + 3) % 4,
        };
        prop_assert_eq!(outcome.ant.heading.index(), expected);
    }

    /// The ant never leaves the grid
    #[test]
    fn prop_toroidal_bound((grid, ant) in world(), steps in 1usize..200) {
        let (cols, rows) = grid.dimensions();
        let mut sim = Simulation::with_ant(grid, Some(ant));
        for _ in 0..steps {
            let ant = sim.step().ant;
            prop_assert!(ant.x < cols && ant.y < rows);
        }
    }

    /// Only the flipped cell changes and the ant moves exactly one cell
    #[test]
    fn prop_step_is_local((grid, ant) in world()) {
        let mut after = grid.clone();
        let outcome = engine::step(&mut after, ant);
        let (cols, rows) = grid.dimensions();

        for (x, y, cell) in grid.iter_cells() {
            if (x, y) != (ant.x, ant.y) {
                prop_assert_eq!(after.get(x, y), cell);
            }
        }
        let dx = (outcome.ant.x + cols - ant.x) % cols;
        let dy = (outcome.ant.y + rows - ant.y) % rows;
        let (ox, oy) = outcome.ant.heading.offset();
        prop_assert_eq!(dx, ox.rem_euclid(cols as isize) as usize);
        prop_assert_eq!(dy, oy.rem_euclid(rows as isize) as usize);
    }

    /// k steps dirty at most k cells, and a drain leaves nothing behind
    #[test]
    fn prop_dirty_set_bound((grid, ant) in world(), k in 0usize..100) {
        let mut sim = Simulation::with_ant(grid, Some(ant));
        sim.step_many(k);
        let drained = sim.drain_dirty();
        prop_assert!(drained.len() <= k);
        prop_assert!(sim.dirty().is_empty());
        prop_assert_eq!(sim.step_count(), k as u64);
    }

    /// Incremental flushes reproduce a full redraw pixel for pixel
    #[test]
    fn prop_render_equivalence(
        (grid, ant) in world(),
        cell_size in 1u32..5,
        margin in 0u32..4,
        batches in proptest::collection::vec(1usize..15, 1..8),
    ) {
        let (cols, rows) = grid.dimensions();
        let width = cols as u32 * cell_size + margin;
        let height = rows as u32 * cell_size + margin;
        let renderer = Renderer::new(cell_size);

        let mut sim = Simulation::with_ant(grid, Some(ant));
        let mut incremental = FrameBuffer::new(width, height);
        renderer.full_redraw(&mut incremental, sim.grid(), sim.ant());

        for batch in batches {
            sim.step_many(batch);
            let dirty: HashSet<usize> = sim.drain_dirty();
            renderer.incremental_redraw(&mut incremental, sim.grid(), sim.ant(), &dirty);

            let mut full = FrameBuffer::new(width, height);
            renderer.full_redraw(&mut full, sim.grid(), sim.ant());
            prop_assert_eq!(&incremental, &full);
        }
    }

    /// Each tick adds exactly floor(speed / 10) + 1 steps
    #[test]
    fn prop_tick_step_count(speeds in proptest::collection::vec(0u32..300, 1..10)) {
        let mut driver = AnimationDriver::new(FrameBuffer::new(48, 48), 4, 0).unwrap();
        driver.start();

        let mut expected = 0u64;
        for speed in speeds {
            driver.set_speed(speed);
            prop_assert!(driver.on_frame());
            expected += (speed / 10) as u64 + 1;
            prop_assert_eq!(driver.step_count(), expected);
            prop_assert!(driver.simulation().dirty().is_empty());
        }
    }
}
