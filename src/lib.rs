//! Conway's Game of Life on a fixed-size grid.
//!
//! A [`SimulationEngine`] owns a [`GridState`] and advances it one generation
//! at a time. Drivers read the grid to draw it and forward clicks to
//! [`SimulationEngine::toggle`].

mod cell;
mod config;
mod engine;
mod error;
pub mod generator;
mod grid;

#[cfg(test)]
mod tests;

pub use crate::{
    cell::Cell,
    config::Config,
    engine::SimulationEngine,
    error::{Error, Result},
    grid::{Boundary, GridState},
};
