use std::{
    fmt::{Display, Write},
    str::FromStr,
};

use itertools::Itertools;

use crate::{
    cell::Cell,
    error::{Error, Result},
};

/// How coordinates outside the grid are resolved.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Boundary {
    /// Coordinates wrap modulo the dimensions, so every cell has 8 neighbours.
    #[default]
    Toroidal,
    /// Coordinates outside the grid are rejected. Neighbours that would fall
    /// outside count as dead.
    Clamped,
}

/// The cells of one generation, stored row-major.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GridState {
    width: usize,
    height: usize,
    boundary: Boundary,
    cells: Vec<Cell>,
}

impl GridState {
    pub fn new(width: usize, height: usize, boundary: Boundary) -> Result<Self> {
        let Some(len) = width.checked_mul(height).filter(|&len| len > 0) else {
            return Err(Error::InvalidDimensions { width, height });
        };
        // Coordinates are signed, so every index must fit in an isize.
        if isize::try_from(len).is_err() {
            return Err(Error::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            boundary,
            cells: vec![Cell::Dead; len],
        })
    }

    pub fn with_boundary(self, boundary: Boundary) -> Self {
        Self { boundary, ..self }
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn boundary(&self) -> Boundary {
        self.boundary
    }

    pub fn get(&self, x: isize, y: isize) -> Result<Cell> {
        let i = self.index(x, y)?;
        Ok(self.cells[i])
    }

    pub fn set(&mut self, x: isize, y: isize, cell: Cell) -> Result<()> {
        let i = self.index(x, y)?;
        self.cells[i] = cell;
        Ok(())
    }

    /// Number of live neighbours of `(x, y)`, resolved through the boundary
    /// policy. The cell itself is never counted.
    pub fn live_neighbours(&self, x: isize, y: isize) -> Result<u8> {
        let (x, y) = self.resolve(x, y).ok_or_else(|| self.out_of_bounds(x, y))?;
        Ok(self.count_neighbours(x, y))
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Coordinates of every live cell in row-major order.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .positions(|c| c.is_alive())
            .map(|i| (i % self.width, i / self.width))
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width)
    }
}

impl GridState {
    /// Map `(x, y)` onto the grid, or `None` if the clamped policy rejects it.
    fn resolve(&self, x: isize, y: isize) -> Option<(usize, usize)> {
        let (w, h) = (self.width as isize, self.height as isize);
        match self.boundary {
            Boundary::Toroidal => Some((x.rem_euclid(w) as usize, y.rem_euclid(h) as usize)),
            Boundary::Clamped if (0..w).contains(&x) && (0..h).contains(&y) => {
                Some((x as usize, y as usize))
            }
            Boundary::Clamped => None,
        }
    }

    fn index(&self, x: isize, y: isize) -> Result<usize> {
        let (x, y) = self.resolve(x, y).ok_or_else(|| self.out_of_bounds(x, y))?;
        Ok(y * self.width + x)
    }

    fn out_of_bounds(&self, x: isize, y: isize) -> Error {
        Error::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        }
    }

    /// `(x, y)` must already be on the grid.
    pub(crate) fn cell(&self, x: usize, y: usize) -> Cell {
        self.cells[y * self.width + x]
    }

    pub(crate) fn count_neighbours(&self, x: usize, y: usize) -> u8 {
        neighbours((x as isize, y as isize))
            .filter_map(|(nx, ny)| self.resolve(nx, ny))
            .filter(|&(nx, ny)| self.cell(nx, ny).is_alive())
            .count() as u8
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Install `next` as this grid's cells, leaving the old cells in `next`.
    pub(crate) fn swap_cells(&mut self, next: &mut Vec<Cell>) {
        debug_assert_eq!(next.len(), self.cells.len());
        std::mem::swap(&mut self.cells, next);
    }
}

fn neighbours((x, y): (isize, isize)) -> impl Iterator<Item = (isize, isize)> {
    (-1..=1)
        .cartesian_product(-1..=1)
        .filter(|&d| d != (0, 0))
        .map(move |(dx, dy)| (x + dx, y + dy))
}

impl FromStr for GridState {
    type Err = Error;

    /// Parse a pattern drawn with `o` for live cells and `.` or space for dead
    /// ones. Surrounding blank lines and common indentation are ignored. The
    /// result uses the clamped boundary.
    fn from_str(s: &str) -> Result<Self> {
        let lines = s.lines().map(str::trim_end).collect_vec();
        let first = lines.iter().position(|l| !l.is_empty());
        let last = lines.iter().rposition(|l| !l.is_empty());
        let (Some(first), Some(last)) = (first, last) else {
            return Err(Error::InvalidDimensions {
                width: 0,
                height: 0,
            });
        };
        let indent = lines[first..=last]
            .iter()
            .filter(|l| !l.is_empty())
            .map(|l| l.chars().take_while(|&c| c == ' ').count())
            .min()
            .unwrap_or_default();
        let rows = lines[first..=last]
            .iter()
            .map(|l| l.get(indent..).unwrap_or_default())
            .collect_vec();
        let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or_default();
        let mut grid = GridState::new(width, rows.len(), Boundary::Clamped)?;
        for (y, row) in rows.into_iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                let cell = match ch {
                    'o' | 'O' => Cell::Alive,
                    '.' | ' ' => Cell::Dead,
                    _ => {
                        return Err(Error::Parse {
                            ch,
                            line: first + y + 1,
                            column: indent + x + 1,
                        });
                    }
                };
                grid.cells[y * width + x] = cell;
            }
        }
        Ok(grid)
    }
}

impl Display for GridState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                f.write_char('\n')?;
            }
            for cell in row {
                f.write_char(if cell.is_alive() { 'o' } else { '.' })?;
            }
        }
        Ok(())
    }
}
