use std::str::FromStr;

use itertools::Itertools;
use proptest::prelude::*;

use crate::{Boundary, Cell, Config, GridState, SimulationEngine};

const GLIDER: [&str; 5] = [
    "
    .o....
    ..o...
    ooo...
    ......
    ......
    ......",
    "
    ......
    o.o...
    .oo...
    .o....
    ......
    ......",
    "
    ......
    ..o...
    o.o...
    .oo...
    ......
    ......",
    "
    ......
    .o....
    ..oo..
    .oo...
    ......
    ......",
    "
    ......
    ..o...
    ...o..
    .ooo..
    ......
    ......",
];

fn torus(s: &str) -> GridState {
    GridState::from_str(s).unwrap().with_boundary(Boundary::Toroidal)
}

fn dedent(s: &str) -> String {
    GridState::from_str(s).unwrap().to_string()
}

fn step(s: &str) -> String {
    let mut engine = SimulationEngine::from_grid(torus(s));
    engine.advance();
    engine.grid().to_string()
}

mod patterns {
    use super::*;

    #[test]
    fn test_block() {
        // Block is constant.
        let block = "
            ....
            .oo.
            .oo.
            ....";
        assert_eq!(step(block), dedent(block));
    }

    #[test]
    fn test_boat() {
        let boat = "
            .....
            .oo..
            .o.o.
            ..o..
            .....";
        assert_eq!(step(boat), dedent(boat));
    }

    #[test]
    fn test_blinker() {
        // Blinker blinks with period 2.
        let state_1 = "
            .....
            .....
            .ooo.
            .....
            .....";
        let state_2 = "
            .....
            ..o..
            ..o..
            ..o..
            .....";
        assert_ne!(dedent(state_1), dedent(state_2));
        assert_eq!(step(state_1), dedent(state_2));
        assert_eq!(step(state_2), dedent(state_1));
    }

    #[test]
    fn test_glider() {
        for (a, b) in GLIDER.into_iter().tuple_windows() {
            assert_eq!(step(a), dedent(b));
        }
    }

    #[test]
    fn test_glider_translates() {
        // After four generations the glider has moved one cell down and right.
        let glider = GridState::from_str(".o.\n..o\nooo").unwrap();
        let mut engine = SimulationEngine::new(Config::new(8, 8)).unwrap();
        engine.stamp(&glider, 2, 2).unwrap();
        engine.advance_by(4);
        let mut expected = SimulationEngine::new(Config::new(8, 8)).unwrap();
        expected.stamp(&glider, 3, 3).unwrap();
        assert_eq!(engine.grid(), expected.grid());
        assert_eq!(engine.generation(), 4);
    }

    #[test]
    fn test_glider_wraps() {
        // A glider on a torus comes back to where it started.
        let start = torus(GLIDER[0]);
        let mut engine = SimulationEngine::from_grid(start.clone());
        engine.advance_by(4 * 6);
        assert_eq!(engine.grid(), &start);
        assert_eq!(engine.population(), 5);
    }

    #[test]
    fn test_clamped_edge() {
        // A blinker against a clamped wall loses the cells that would be born
        // outside the grid, leaving a domino that dies.
        let mut engine = SimulationEngine::from_grid(GridState::from_str("ooo\n...").unwrap());
        engine.advance();
        assert_eq!(engine.grid().to_string(), ".o.\n.o.");
        engine.advance();
        assert_eq!(engine.population(), 0);
    }

    #[test]
    fn test_single_cell_neighbours() {
        let mut engine = SimulationEngine::new(Config::new(6, 4)).unwrap();
        engine.toggle(5, 3).unwrap();
        let counts = (0..4)
            .map(|y| (0..6).map(|x| engine.live_neighbours(x, y).unwrap()).join(""))
            .join("\n");
        assert_eq!(counts, "100011\n000000\n100011\n100010");
    }
}

mod seeding {
    use super::*;

    #[test]
    fn test_seed_reproducible() {
        let config = Config::new(64, 48).with_density(0.5).with_rng_seed(1234);
        let a = SimulationEngine::seeded(config).unwrap();
        let b = SimulationEngine::seeded(config).unwrap();
        assert_eq!(a.grid(), b.grid());
        assert!(a.population() > 0 && a.population() < 64 * 48);
    }

    #[test]
    fn test_seed_rejects_density() {
        let mut engine = SimulationEngine::new(Config::new(4, 4)).unwrap();
        engine.toggle(0, 0).unwrap();
        assert!(engine.seed(1.01, 0).is_err());
        assert_eq!(engine.grid().get(0, 0), Ok(Cell::Alive));
    }
}

proptest! {
    #[test]
    fn proptest_advance_deterministic(seed in any::<u64>(), density in 0.0f64..1.0) {
        let config = Config::new(24, 17).with_density(density).with_rng_seed(seed);
        let mut a = SimulationEngine::seeded(config).unwrap();
        let mut b = a.clone();
        a.advance_by(3);
        b.advance_by(3);
        prop_assert_eq!(a.grid(), b.grid());
    }

    #[test]
    fn proptest_toggle_twice(seed in any::<u64>(), x in -50isize..50, y in -50isize..50) {
        let config = Config::new(12, 9).with_rng_seed(seed);
        let mut engine = SimulationEngine::seeded(config).unwrap();
        engine.advance();
        let before = engine.grid().clone();
        engine.toggle(x, y).unwrap();
        prop_assert_ne!(engine.grid(), &before);
        engine.toggle(x, y).unwrap();
        prop_assert_eq!(engine.grid(), &before);
        prop_assert_eq!(engine.generation(), 1);
    }

    #[test]
    fn proptest_torus_wraps(seed in any::<u64>(), x in 0isize..10, y in 0isize..7, kx in -3isize..3, ky in -3isize..3) {
        let engine = SimulationEngine::seeded(Config::new(10, 7).with_rng_seed(seed)).unwrap();
        let grid = engine.grid();
        prop_assert_eq!(grid.get(x + 10 * kx, y + 7 * ky), grid.get(x, y));
        prop_assert_eq!(grid.live_neighbours(x + 10 * kx, y), grid.live_neighbours(x, y));
    }

    #[test]
    fn proptest_clamped_rejects_outside(x in -20isize..20, y in -20isize..20) {
        let config = Config::new(8, 5).with_boundary(Boundary::Clamped);
        let mut engine = SimulationEngine::new(config).unwrap();
        let inside = (0..8).contains(&x) && (0..5).contains(&y);
        prop_assert_eq!(engine.grid().get(x, y).is_ok(), inside);
        prop_assert_eq!(engine.toggle(x, y).is_ok(), inside);
    }
}
