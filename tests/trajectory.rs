//! Fixed five-step trajectory on a 5x5 grid, ant at (2, 2) facing up.

use langtons_ant::{Ant, Cell, Grid, Heading, Simulation};

#[test]
fn five_step_regression_fixture() {
    let mut sim = Simulation::new(5, 5).unwrap();
    assert_eq!(sim.ant(), Ant::new(2, 2, Heading::Up));

    let expected = [
        ((2, 2), Cell::Filled, Ant::new(3, 2, Heading::Right)),
        ((3, 2), Cell::Filled, Ant::new(3, 3, Heading::Down)),
        ((3, 3), Cell::Filled, Ant::new(2, 3, Heading::Left)),
        ((2, 3), Cell::Filled, Ant::new(2, 2, Heading::Up)),
        ((2, 2), Cell::Empty, Ant::new(1, 2, Heading::Left)),
    ];

    for (i, ((x, y), cell, ant)) in expected.into_iter().enumerate() {
        let outcome = sim.step();
        assert_eq!(sim.grid().get(x, y), cell, "cell after step {}", i + 1);
        assert_eq!(outcome.ant, ant, "ant after step {}", i + 1);
        assert_eq!(outcome.changed, sim.grid().encode(x, y));
        assert_eq!(sim.step_count(), i as u64 + 1);
    }

    assert_eq!(sim.grid().filled_count(), 3);
}

#[test]
fn highway_eventually_leaves_any_small_neighbourhood() {
    // From an empty grid the ant starts building its highway near step 10k;
    // on a large torus that shows up as the ant drifting far from the start.
    let mut sim = Simulation::new(400, 400).unwrap();
    sim.step_many(15_000);
    let ant = sim.ant();
    let dx = (ant.x as isize - 200).abs();
    let dy = (ant.y as isize - 200).abs();
    assert!(dx.max(dy) > 50, "ant still at ({}, {})", ant.x, ant.y);
}

#[test]
fn same_start_same_trajectory() {
    let mut a = Simulation::new(31, 17).unwrap();
    let mut b = Simulation::with_ant(Grid::new(31, 17).unwrap(), None);
    for _ in 0..2_000 {
        assert_eq!(a.step(), b.step());
    }
    assert_eq!(a.grid(), b.grid());
}
