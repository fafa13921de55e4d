//! Random initial populations.
//!
//! Each cell draws one uniformly distributed byte and is alive iff
//! `byte % density == 0`.

use rand::rngs::OsRng;
use rand::{RngCore, TryRngCore};

use super::grid::Grid;
use crate::config::SeedConfig;
use crate::error::{LifeError, Result};

/// Overwrite every cell from `bytes`, byte `i` deciding cell `i`.
///
/// `density` must already be validated as at least 1.
pub(crate) fn populate(grid: &mut Grid, bytes: &[u8], density: u32) {
    for (cell, &byte) in grid.cells.iter_mut().zip(bytes) {
        *cell = u32::from(byte) % density == 0;
    }
}

/// Seed a new grid from a caller-supplied generator.
pub fn seed_grid<R: RngCore + ?Sized>(config: &SeedConfig, rng: &mut R) -> Result<Grid> {
    let (columns, rows, density) = config.validate()?;
    let mut bytes = vec![0u8; columns * rows];
    rng.fill_bytes(&mut bytes);

    let mut grid = Grid::dead(columns, rows);
    populate(&mut grid, &bytes, density);
    Ok(grid)
}

/// Seed a new grid from the operating system's entropy source.
///
/// The source is only touched for the single draw below.
pub fn seed_grid_from_os(config: &SeedConfig) -> Result<Grid> {
    let (columns, rows, density) = config.validate()?;
    let mut bytes = vec![0u8; columns * rows];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|e| LifeError::Entropy(e.to_string()))?;

    let mut grid = Grid::dead(columns, rows);
    populate(&mut grid, &bytes, density);
    Ok(grid)
}
