//! Bulk copy of rectangular cell regions to and from byte buffers.

use super::grid::{index_of, Grid};

/// Clamp a `[min, max)` rectangle to the grid. Returns `None` when empty.
fn clamp_region(
    grid: &Grid,
    min_x: i64,
    min_y: i64,
    max_x: i64,
    max_y: i64,
) -> Option<(usize, usize, usize, usize)> {
    let columns = grid.columns as i64;
    let rows = grid.rows as i64;

    let min_x = min_x.clamp(0, columns);
    let min_y = min_y.clamp(0, rows);
    let max_x = max_x.clamp(0, columns);
    let max_y = max_y.clamp(0, rows);

    if min_x >= max_x || min_y >= max_y {
        return None;
    }
    Some((min_x as usize, min_y as usize, max_x as usize, max_y as usize))
}

/// Extract a rectangular region of the grid into a flat buffer.
///
/// # Layout
/// Row-major: y changes slowest, x fastest. Alive cells are written as 1,
/// dead cells as 0. Coordinates are clamped to the grid.
///
/// # Returns
/// Number of bytes written, or 0 if the region is empty or the buffer too small.
pub fn extract_region(
    grid: &Grid,
    out_buf: &mut [u8],
    min_x: i64,
    min_y: i64,
    max_x: i64,
    max_y: i64,
) -> u64 {
    let Some((min_x, min_y, max_x, max_y)) = clamp_region(grid, min_x, min_y, max_x, max_y) else {
        return 0;
    };

    let width = max_x - min_x;
    let total_size = width * (max_y - min_y);
    if out_buf.len() < total_size {
        return 0;
    }

    for (out_row, y) in out_buf.chunks_mut(width).zip(min_y..max_y) {
        let start = index_of(grid, min_x, y);
        for (out, &alive) in out_row.iter_mut().zip(&grid.cells[start..start + width]) {
            *out = u8::from(alive);
        }
    }

    total_size as u64
}

/// Import a rectangular region from a flat buffer into the grid.
///
/// # Layout
/// Same as [`extract_region`]. Any non-zero byte means alive.
///
/// # Returns
/// Number of bytes read, or 0 if the region is empty or the buffer too short.
pub fn import_region(
    grid: &mut Grid,
    in_buf: &[u8],
    min_x: i64,
    min_y: i64,
    max_x: i64,
    max_y: i64,
) -> u64 {
    let Some((min_x, min_y, max_x, max_y)) = clamp_region(grid, min_x, min_y, max_x, max_y) else {
        return 0;
    };

    let width = max_x - min_x;
    let total_size = width * (max_y - min_y);
    if in_buf.len() < total_size {
        return 0;
    }

    for (in_row, y) in in_buf.chunks(width).zip(min_y..max_y) {
        let start = index_of(grid, min_x, y);
        for (cell, &value) in grid.cells[start..start + width].iter_mut().zip(in_row) {
            *cell = value != 0;
        }
    }

    total_size as u64
}
