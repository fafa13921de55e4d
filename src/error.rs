//! Error type shared by the engine, the automaton helpers and the C ABI.

use thiserror::Error;

/// Every failure the engine can report. All of them are recoverable.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LifeError {
    #[error("grid dimensions must be positive, got {columns}x{rows}")]
    InvalidDimension { columns: i64, rows: i64 },

    #[error("density divisor must be at least 1, got {0}")]
    InvalidDensity(i64),

    #[error("resolution must be at least 1 pixel per cell, got {0}")]
    InvalidResolution(u32),

    #[error("cell ({x}, {y}) is outside the {columns}x{rows} grid")]
    OutOfBounds {
        x: i64,
        y: i64,
        columns: usize,
        rows: usize,
    },

    #[error("no grid has been seeded yet")]
    NotInitialized,

    #[error("cell buffer holds {actual} cells but the grid needs {expected}")]
    CellCountMismatch { expected: usize, actual: usize },

    #[error("entropy source failed: {0}")]
    Entropy(String),
}

pub type Result<T, E = LifeError> = std::result::Result<T, E>;

/// Status code returned by a successful `tl_*` call.
pub const STATUS_OK: i32 = 0;
/// Status code returned when a `tl_*` call receives a null handle.
pub const STATUS_NULL: i32 = 1;

impl LifeError {
    /// Status code reported across the C ABI.
    pub fn status_code(&self) -> i32 {
        match self {
            LifeError::InvalidDimension { .. } | LifeError::CellCountMismatch { .. } => 2,
            LifeError::InvalidDensity(_) | LifeError::InvalidResolution(_) => 3,
            LifeError::OutOfBounds { .. } => 4,
            LifeError::NotInitialized => 5,
            LifeError::Entropy(_) => 6,
        }
    }
}
