//! The stateful Game of Life engine.
//!
//! An [`Engine`] starts unseeded. `seed` (or `load`) installs a grid and
//! resets the generation counter; after that the grid can be stepped,
//! edited and queried. Every grid operation on an unseeded engine fails with
//! [`LifeError::NotInitialized`].
//!
//! The engine does no locking. Callers serialize `step` and `toggle`.

use rand::RngCore;
use tracing::{debug, trace};

use crate::automaton::grid::{checked_index, Grid};
use crate::automaton::{region, seeding, stepping};
use crate::config::SeedConfig;
use crate::error::{LifeError, Result};

/// Grids with at least this many cells step on the rayon pool.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 1 << 16;

/// What just happened to the engine's grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    /// A new grid was seeded or loaded. The generation is 0.
    Seeded,
    /// One cell was set by `toggle`.
    Toggled { x: usize, y: usize },
    /// A rectangle of cells was overwritten by `import_region`.
    Imported,
    /// The grid advanced one generation.
    Stepped,
}

/// Receives a notification after every successful mutation.
///
/// This is the hook a presentation layer uses to schedule a repaint without
/// polling. Closures taking `(Change, u64, &Grid)` implement it.
pub trait Observer {
    fn notify(&mut self, change: Change, generation: u64, grid: &Grid);
}

impl<F> Observer for F
where
    F: FnMut(Change, u64, &Grid),
{
    fn notify(&mut self, change: Change, generation: u64, grid: &Grid) {
        self(change, generation, grid)
    }
}

struct World {
    grid: Grid,
    generation: u64,
}

/// Owns the current grid and its generation counter.
pub struct Engine {
    world: Option<World>,
    observer: Option<Box<dyn Observer>>,
    parallel_threshold: usize,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Create an unseeded engine.
    pub fn new() -> Self {
        Self {
            world: None,
            observer: None,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }

    /// Step grids of at least `cells` cells in parallel. `usize::MAX` keeps
    /// every step serial.
    pub fn with_parallel_threshold(mut self, cells: usize) -> Self {
        self.parallel_threshold = cells;
        self
    }

    /// Install the observer, replacing any previous one.
    pub fn set_observer<O: Observer + 'static>(&mut self, observer: O) {
        self.observer = Some(Box::new(observer));
    }

    pub fn clear_observer(&mut self) {
        self.observer = None;
    }

    pub fn is_seeded(&self) -> bool {
        self.world.is_some()
    }

    /// Seed a fresh random grid from the OS entropy source.
    pub fn seed(&mut self, config: &SeedConfig) -> Result<&Grid> {
        let grid = seeding::seed_grid_from_os(config)?;
        log_seed(config, &grid);
        Ok(self.install(grid))
    }

    /// Seed a fresh random grid from `rng`.
    pub fn seed_with_rng<R: RngCore + ?Sized>(
        &mut self,
        config: &SeedConfig,
        rng: &mut R,
    ) -> Result<&Grid> {
        let grid = seeding::seed_grid(config, rng)?;
        log_seed(config, &grid);
        Ok(self.install(grid))
    }

    /// Replace the current grid with `grid` and reset the generation.
    pub fn load(&mut self, grid: Grid) -> &Grid {
        debug!(
            columns = grid.columns(),
            rows = grid.rows(),
            population = grid.population(),
            "loaded grid"
        );
        self.install(grid)
    }

    fn install(&mut self, grid: Grid) -> &Grid {
        let world = self.world.insert(World { grid, generation: 0 });
        if let Some(observer) = self.observer.as_mut() {
            observer.notify(Change::Seeded, 0, &world.grid);
        }
        &world.grid
    }

    /// Set cell `(x, y)` to `alive`.
    ///
    /// Off-grid coordinates fail with `OutOfBounds` and leave the grid as it
    /// was. The generation counter is not touched.
    pub fn toggle(&mut self, x: i64, y: i64, alive: bool) -> Result<()> {
        let world = self.world.as_mut().ok_or(LifeError::NotInitialized)?;
        let idx = checked_index(&world.grid, x, y)?;
        world.grid.cells[idx] = alive;

        trace!(x, y, alive, "set cell");
        if let Some(observer) = self.observer.as_mut() {
            let change = Change::Toggled {
                x: x as usize,
                y: y as usize,
            };
            observer.notify(change, world.generation, &world.grid);
        }
        Ok(())
    }

    /// Advance one generation and return the new grid.
    pub fn step(&mut self) -> Result<&Grid> {
        let world = self.world.as_mut().ok_or(LifeError::NotInitialized)?;

        let parallel = world.grid.cells.len() >= self.parallel_threshold;
        world.grid = if parallel {
            stepping::step_grid_parallel(&world.grid)
        } else {
            stepping::step_grid(&world.grid)
        };
        world.generation += 1;

        trace!(generation = world.generation, parallel, "stepped");
        if let Some(observer) = self.observer.as_mut() {
            observer.notify(Change::Stepped, world.generation, &world.grid);
        }
        Ok(&world.grid)
    }

    /// Overwrite a clamped rectangle from a row-major byte buffer.
    ///
    /// Returns the number of bytes read; 0 means nothing was written.
    pub fn import_region(
        &mut self,
        in_buf: &[u8],
        min_x: i64,
        min_y: i64,
        max_x: i64,
        max_y: i64,
    ) -> Result<u64> {
        let world = self.world.as_mut().ok_or(LifeError::NotInitialized)?;
        let read = region::import_region(&mut world.grid, in_buf, min_x, min_y, max_x, max_y);

        if read > 0 {
            trace!(min_x, min_y, max_x, max_y, read, "imported region");
            if let Some(observer) = self.observer.as_mut() {
                observer.notify(Change::Imported, world.generation, &world.grid);
            }
        }
        Ok(read)
    }

    /// Copy a clamped rectangle of the grid out as row-major 0/1 bytes.
    pub fn extract_region(
        &self,
        out_buf: &mut [u8],
        min_x: i64,
        min_y: i64,
        max_x: i64,
        max_y: i64,
    ) -> Result<u64> {
        let grid = &self.world()?.grid;
        Ok(region::extract_region(grid, out_buf, min_x, min_y, max_x, max_y))
    }

    fn world(&self) -> Result<&World> {
        self.world.as_ref().ok_or(LifeError::NotInitialized)
    }

    pub fn current_generation(&self) -> Result<u64> {
        Ok(self.world()?.generation)
    }

    pub fn cell_state(&self, x: i64, y: i64) -> Result<bool> {
        let grid = &self.world()?.grid;
        let idx = checked_index(grid, x, y)?;
        Ok(grid.cells[idx])
    }

    /// `(columns, rows)` of the current grid.
    pub fn dimensions(&self) -> Result<(usize, usize)> {
        Ok(self.world()?.grid.dimensions())
    }

    pub fn grid(&self) -> Result<&Grid> {
        Ok(&self.world()?.grid)
    }

    pub fn population(&self) -> Result<usize> {
        Ok(self.world()?.grid.population())
    }
}

fn log_seed(config: &SeedConfig, grid: &Grid) {
    debug!(
        columns = grid.columns(),
        rows = grid.rows(),
        density = config.density,
        population = grid.population(),
        "seeded grid"
    );
}
