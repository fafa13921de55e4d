//! Grid storage, cell addressing and toroidal neighbour counting.

use crate::error::{LifeError, Result};

/// A `columns × rows` field of cells whose edges wrap around.
///
/// Cells are stored row-major in a single `Vec`, so cell `(x, y)` lives at
/// `y * columns + x`. Every coordinate inside the bounds has a state.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    pub(crate) columns: usize,
    pub(crate) rows: usize,
    pub(crate) cells: Vec<bool>,
}

/// Validate grid dimensions supplied as signed integers.
///
/// Rejects non-positive sizes and sizes whose cell count cannot be allocated.
pub fn checked_dimensions(columns: i64, rows: i64) -> Result<(usize, usize)> {
    let invalid = LifeError::InvalidDimension { columns, rows };
    if columns <= 0 || rows <= 0 {
        return Err(invalid);
    }
    match (usize::try_from(columns), usize::try_from(rows)) {
        (Ok(c), Ok(r)) if c.checked_mul(r).is_some_and(|n| n <= isize::MAX as usize) => {
            Ok((c, r))
        }
        _ => Err(invalid),
    }
}

impl Grid {
    /// Create a grid with every cell dead.
    pub fn new(columns: i64, rows: i64) -> Result<Self> {
        let (columns, rows) = checked_dimensions(columns, rows)?;
        Ok(Self::dead(columns, rows))
    }

    pub(crate) fn dead(columns: usize, rows: usize) -> Self {
        Self {
            columns,
            rows,
            cells: vec![false; columns * rows],
        }
    }

    /// Build a grid from a row-major cell buffer.
    pub fn from_cells(columns: i64, rows: i64, cells: Vec<bool>) -> Result<Self> {
        let (columns, rows) = checked_dimensions(columns, rows)?;
        let expected = columns * rows;
        if cells.len() != expected {
            return Err(LifeError::CellCountMismatch {
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self {
            columns,
            rows,
            cells,
        })
    }

    /// Build a grid with exactly the listed cells alive.
    pub fn with_alive(columns: i64, rows: i64, alive: &[(i64, i64)]) -> Result<Self> {
        let mut grid = Self::new(columns, rows)?;
        for &(x, y) in alive {
            let idx = checked_index(&grid, x, y)?;
            grid.cells[idx] = true;
        }
        Ok(grid)
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// `(columns, rows)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.columns, self.rows)
    }

    /// Row-major view of every cell.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// State of `(x, y)`, or `None` when the coordinate is off the grid.
    pub fn get(&self, x: i64, y: i64) -> Option<bool> {
        checked_index(self, x, y).ok().map(|idx| self.cells[idx])
    }

    /// Number of alive cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Coordinates of every alive cell in row-major order.
    pub fn alive_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let columns = self.columns;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, alive)| **alive)
            .map(move |(idx, _)| (idx % columns, idx / columns))
    }
}

/// Linear index of an in-bounds coordinate.
#[inline]
pub fn index_of(grid: &Grid, x: usize, y: usize) -> usize {
    y * grid.columns + x
}

/// Check if coordinates are within grid bounds.
#[inline]
pub fn in_bounds(grid: &Grid, x: i64, y: i64) -> bool {
    x >= 0 && y >= 0 && (x as u64) < grid.columns as u64 && (y as u64) < grid.rows as u64
}

/// Linear index of `(x, y)`, or `OutOfBounds`.
pub fn checked_index(grid: &Grid, x: i64, y: i64) -> Result<usize> {
    if !in_bounds(grid, x, y) {
        return Err(LifeError::OutOfBounds {
            x,
            y,
            columns: grid.columns,
            rows: grid.rows,
        });
    }
    Ok(index_of(grid, x as usize, y as usize))
}

/// Wrap a possibly negative coordinate onto `0..len`.
#[inline]
pub fn wrap(v: i64, len: usize) -> usize {
    v.rem_euclid(len as i64) as usize
}

/// Count alive cells among the eight offsets around `(x, y)`.
///
/// Each offset wraps independently. An offset that wraps back onto `(x, y)`
/// itself (a grid one cell wide or tall) is skipped; other cells on grids
/// narrower than three can still be counted more than once.
pub fn count_neighbors(grid: &Grid, x: usize, y: usize) -> u8 {
    let mut count = 0;

    for dy in -1i64..=1 {
        let ny = wrap(y as i64 + dy, grid.rows);
        for dx in -1i64..=1 {
            let nx = wrap(x as i64 + dx, grid.columns);
            if nx == x && ny == y {
                continue;
            }
            if grid.cells[index_of(grid, nx, ny)] {
                count += 1;
            }
        }
    }

    count
}
