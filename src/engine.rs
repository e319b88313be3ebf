use log::{debug, trace};
use rayon::prelude::*;

use crate::{
    cell::Cell,
    config::Config,
    error::{Error, Result},
    generator,
    grid::{Boundary, GridState},
};

/// Owns a grid and moves it forward one generation at a time.
///
/// All mutation goes through `&mut self`, so a generation can never be edited
/// while it is being advanced. Share an engine between threads behind a mutex.
#[derive(Clone, Debug)]
pub struct SimulationEngine {
    config: Config,
    grid: GridState,
    // Receives the next generation during `advance`, then holds the previous one.
    scratch: Vec<Cell>,
    generation: u64,
}

impl SimulationEngine {
    /// An engine with an empty grid.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let grid = GridState::new(config.width, config.height, config.boundary)?;
        debug!(
            "new {}x{} {:?} simulation",
            config.width, config.height, config.boundary
        );
        Ok(Self::with_config(config, grid))
    }

    /// An engine whose grid is seeded from the configured density and seed.
    pub fn seeded(config: Config) -> Result<Self> {
        let mut engine = Self::new(config)?;
        engine.seed(config.density, config.rng_seed)?;
        Ok(engine)
    }

    /// An engine starting from an existing grid, keeping its size and boundary.
    pub fn from_grid(grid: GridState) -> Self {
        let (width, height) = grid.dimensions();
        let config = Config::new(width, height).with_boundary(grid.boundary());
        Self::with_config(config, grid)
    }

    fn with_config(config: Config, grid: GridState) -> Self {
        let (width, height) = grid.dimensions();
        Self {
            config,
            grid,
            scratch: vec![Cell::Dead; width * height],
            generation: 0,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn grid(&self) -> &GridState {
        &self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.grid.population()
    }

    pub fn live_neighbours(&self, x: isize, y: isize) -> Result<u8> {
        self.grid.live_neighbours(x, y)
    }

    /// Replace the grid with its next generation.
    pub fn advance(&mut self) {
        let (width, _) = self.grid.dimensions();
        let grid = &self.grid;
        self.scratch
            .par_chunks_mut(width)
            .enumerate()
            .for_each(|(y, row)| {
                for (x, next) in row.iter_mut().enumerate() {
                    *next = grid.cell(x, y).next(grid.count_neighbours(x, y));
                }
            });
        self.grid.swap_cells(&mut self.scratch);
        self.generation += 1;
        trace!(
            "generation {}: population {}",
            self.generation,
            self.grid.population()
        );
    }

    pub fn advance_by(&mut self, generations: u64) {
        for _ in 0..generations {
            self.advance();
        }
    }

    /// Flip the cell at `(x, y)` and return its new state. The generation is
    /// unchanged.
    pub fn toggle(&mut self, x: isize, y: isize) -> Result<Cell> {
        let cell = !self.grid.get(x, y)?;
        self.grid.set(x, y, cell)?;
        Ok(cell)
    }

    /// Randomly fill the grid and restart at generation 0.
    pub fn seed(&mut self, density: f64, rng_seed: u64) -> Result<()> {
        generator::fill_random(&mut self.grid, density, rng_seed)?;
        self.generation = 0;
        debug!(
            "seeded with density {density} and seed {rng_seed}: population {}",
            self.grid.population()
        );
        Ok(())
    }

    /// Draw the showcase pattern and restart at generation 0.
    pub fn showcase(&mut self) {
        generator::fill_showcase(&mut self.grid);
        self.generation = 0;
        debug!("showcase: population {}", self.grid.population());
    }

    /// Kill every cell and restart at generation 0.
    pub fn clear(&mut self) {
        self.grid.cells_mut().fill(Cell::Dead);
        self.generation = 0;
        debug!("cleared");
    }

    /// Replace the grid with `grid`, which must have the same dimensions, and
    /// restart at generation 0. The engine's boundary policy is kept.
    pub fn load(&mut self, grid: GridState) -> Result<()> {
        if grid.dimensions() != self.grid.dimensions() {
            return Err(Error::SizeMismatch {
                expected: self.grid.dimensions(),
                found: grid.dimensions(),
            });
        }
        self.grid = grid.with_boundary(self.grid.boundary());
        self.generation = 0;
        debug!("loaded grid: population {}", self.grid.population());
        Ok(())
    }

    /// Bring the live cells of `pattern` to life with its top left corner at
    /// `(x, y)`. Under the clamped policy nothing is written unless every live
    /// cell lands on the grid.
    pub fn stamp(&mut self, pattern: &GridState, x: isize, y: isize) -> Result<()> {
        let (width, height) = self.grid.dimensions();
        // Wrap the corner first so the offsets below cannot overflow on a torus.
        let (ox, oy) = match self.grid.boundary() {
            Boundary::Toroidal => (
                x.rem_euclid(width as isize),
                y.rem_euclid(height as isize),
            ),
            Boundary::Clamped => (x, y),
        };
        let targets = pattern
            .live_cells()
            .map(|(px, py)| {
                let tx = ox.checked_add(px as isize);
                let ty = oy.checked_add(py as isize);
                tx.zip(ty).ok_or(Error::OutOfBounds {
                    x,
                    y,
                    width,
                    height,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        for &(tx, ty) in &targets {
            self.grid.get(tx, ty)?;
        }
        for (tx, ty) in targets {
            self.grid.set(tx, ty, Cell::Alive)?;
        }
        Ok(())
    }
}
