//! Initial grid contents.

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{cell::Cell, config::check_density, error::Result, grid::GridState};

/// Set every cell alive with probability `density`, drawing from a generator
/// seeded with `rng_seed` in row-major order. Equal seeds give equal grids.
pub fn fill_random(grid: &mut GridState, density: f64, rng_seed: u64) -> Result<()> {
    check_density(density)?;
    let mut rng = StdRng::seed_from_u64(rng_seed);
    for cell in grid.cells_mut() {
        *cell = rng.random_bool(density).into();
    }
    Ok(())
}

/// Replace the grid with the built-in showcase: a cross, both diagonals, a
/// ring about the centre, a parabola and a quartic curve.
pub fn fill_showcase(grid: &mut GridState) {
    let (width, height) = grid.dimensions();
    let (w, h) = (width as i64, height as i64);
    let (cx, cy) = (w / 2, h / 2);
    let inner = (h - 10).div_euclid(2).pow(2);
    let outer = cy.pow(2);
    for (i, cell) in grid.cells_mut().iter_mut().enumerate() {
        let (x, y) = ((i % width) as i64, (i / width) as i64);
        let (dx, dy) = (x - cx, y - cy);
        let r2 = dx.saturating_pow(2).saturating_add(dy.saturating_pow(2));
        let alive = x == cx
            || y == cy
            || x == y
            || x == w - y
            || (inner < r2 && r2 < outer)
            || y == cy - dx.saturating_pow(2) / 100
            || y == cy - dx.saturating_pow(4) / 1_000_000;
        *cell = Cell::from(alive);
    }
}
