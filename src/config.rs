use crate::{
    error::{Error, Result},
    grid::Boundary,
};

const DEFAULT_WIDTH: usize = 240;
const DEFAULT_HEIGHT: usize = 240;
const DEFAULT_DENSITY: f64 = 0.5;
const DEFAULT_RNG_SEED: u64 = 0xC0FF_EE00;

/// Settings fixed when a simulation is built.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    pub width: usize,
    pub height: usize,
    pub boundary: Boundary,
    /// Probability that a cell starts alive when the grid is seeded.
    pub density: f64,
    pub rng_seed: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            boundary: Boundary::default(),
            density: DEFAULT_DENSITY,
            rng_seed: DEFAULT_RNG_SEED,
        }
    }
}

impl Config {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn with_boundary(self, boundary: Boundary) -> Self {
        Self { boundary, ..self }
    }

    pub fn with_density(self, density: f64) -> Self {
        Self { density, ..self }
    }

    pub fn with_rng_seed(self, rng_seed: u64) -> Self {
        Self { rng_seed, ..self }
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        check_density(self.density)
    }
}

pub(crate) fn check_density(density: f64) -> Result<()> {
    if (0.0..=1.0).contains(&density) {
        Ok(())
    } else {
        Err(Error::InvalidDensity(density))
    }
}
