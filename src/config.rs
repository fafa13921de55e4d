//! Seeding and viewport configuration.
//!
//! Both structs are plain data with serde derives so a presentation layer can
//! keep them in its own settings file. They are read once per seed and never
//! mutated by the engine.

use serde::{Deserialize, Serialize};

use crate::automaton::grid::checked_dimensions;
use crate::error::{LifeError, Result};

pub const DEFAULT_RESOLUTION: u32 = 8;
pub const DEFAULT_DENSITY: i64 = 2;

/// Parameters for one seed operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedConfig {
    pub columns: i64,
    pub rows: i64,
    /// A cell starts alive with probability 1/density (capped by the byte range).
    pub density: i64,
}

impl SeedConfig {
    pub fn new(columns: i64, rows: i64, density: i64) -> Self {
        Self {
            columns,
            rows,
            density,
        }
    }

    /// Check the parameters and return `(columns, rows, density)` in the
    /// types the automaton works with.
    pub fn validate(&self) -> Result<(usize, usize, u32)> {
        let (columns, rows) = checked_dimensions(self.columns, self.rows)?;
        if self.density < 1 {
            return Err(LifeError::InvalidDensity(self.density));
        }
        // Anything above the byte range behaves like 256: only a zero byte survives.
        let density = self.density.min(u32::MAX as i64) as u32;
        Ok((columns, rows, density))
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            columns: 1,
            rows: 1,
            density: DEFAULT_DENSITY,
        }
    }
}

/// Pixel-space settings supplied by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    /// Edge length of one cell in pixels.
    pub resolution: u32,
    pub density: i64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_RESOLUTION,
            density: DEFAULT_DENSITY,
        }
    }
}

impl ViewportConfig {
    fn checked_resolution(&self) -> Result<i64> {
        if self.resolution == 0 {
            return Err(LifeError::InvalidResolution(self.resolution));
        }
        Ok(self.resolution as i64)
    }

    /// Derive the seed parameters for a drawing surface of the given size.
    ///
    /// Partial cells at the right and bottom edges are dropped.
    pub fn seed_config(&self, width_px: u32, height_px: u32) -> Result<SeedConfig> {
        let resolution = self.checked_resolution()?;
        Ok(SeedConfig {
            columns: width_px as i64 / resolution,
            rows: height_px as i64 / resolution,
            density: self.density,
        })
    }

    /// Map a pixel position to the cell under it.
    ///
    /// The result is not bounds checked; pass it to `Engine::toggle`, which
    /// rejects anything off the grid.
    pub fn cell_at(&self, px: i64, py: i64) -> Result<(i64, i64)> {
        let resolution = self.checked_resolution()?;
        Ok((px.div_euclid(resolution), py.div_euclid(resolution)))
    }
}
