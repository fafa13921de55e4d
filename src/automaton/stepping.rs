//! Generation stepping with the B3/S23 rule on a torus.

use rayon::prelude::*;

use super::grid::{count_neighbors, index_of, Grid};

/// Next state of one cell given its current state and alive neighbour count.
///
/// B3/S23 rules:
/// - Birth: a dead cell with exactly 3 neighbours becomes alive
/// - Death: an alive cell with fewer than 2 or more than 3 neighbours dies
/// - Anything else keeps its state
#[inline]
pub fn next_state(alive: bool, neighbours: u8) -> bool {
    if !alive && neighbours == 3 {
        true
    } else if alive && !(2..=3).contains(&neighbours) {
        false
    } else {
        alive
    }
}

fn fill_row(grid: &Grid, y: usize, row: &mut [bool]) {
    for (x, cell) in row.iter_mut().enumerate() {
        let neighbours = count_neighbors(grid, x, y);
        *cell = next_state(grid.cells[index_of(grid, x, y)], neighbours);
    }
}

/// Compute the next generation from `grid`, leaving it untouched.
pub fn step_grid(grid: &Grid) -> Grid {
    let mut next = Grid::dead(grid.columns, grid.rows);

    for (y, row) in next.cells.chunks_mut(grid.columns).enumerate() {
        fill_row(grid, y, row);
    }

    next
}

/// Same as [`step_grid`], with rows distributed over the rayon pool.
pub fn step_grid_parallel(grid: &Grid) -> Grid {
    let mut next = Grid::dead(grid.columns, grid.rows);

    next.cells
        .par_chunks_mut(grid.columns)
        .enumerate()
        .for_each(|(y, row)| fill_row(grid, y, row));

    next
}
