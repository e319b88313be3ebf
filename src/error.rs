use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: isize,
        y: isize,
        width: usize,
        height: usize,
    },
    #[error("grid dimensions must be non-zero, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    #[error("density {0} is not within [0, 1]")]
    InvalidDensity(f64),
    #[error("unexpected character {ch:?} at line {line}, column {column}")]
    Parse {
        ch: char,
        line: usize,
        column: usize,
    },
    #[error("expected a {}x{} grid, found {}x{}", expected.0, expected.1, found.0, found.1)]
    SizeMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
