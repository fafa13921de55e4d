//! Bulk cell transfer for rendering and pattern pasting.

use crate::engine::Engine;

/// Copies the whole grid into `out_buf`, row-major, one byte per cell
/// (1 = alive, 0 = dead).
///
/// # Safety
/// - `ptr` must be a valid pointer to an Engine, or null
/// - `out_buf` must point to at least `len` writable bytes, or be null
///
/// # Returns
/// Number of bytes written, or 0 if a pointer is null, the engine is
/// unseeded, or `len` is smaller than `columns * rows`.
#[no_mangle]
pub unsafe extern "C" fn tl_extract_cells(ptr: *const Engine, out_buf: *mut u8, len: usize) -> u64 {
    if ptr.is_null() || out_buf.is_null() {
        return 0;
    }

    let engine = &*ptr;
    let Ok((columns, rows)) = engine.dimensions() else {
        return 0;
    };

    let out_slice = std::slice::from_raw_parts_mut(out_buf, len);
    engine
        .extract_region(out_slice, 0, 0, columns as i64, rows as i64)
        .unwrap_or(0)
}

/// Extracts a rectangular region `[min, max)` into a flat output buffer.
///
/// # Layout
/// Row-major (y slowest, x fastest). Matches `tl_import_region`.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Engine, or null
/// - `out_buf` must point to a buffer with at least
///   `(max_x - min_x) * (max_y - min_y)` bytes
///
/// # Returns
/// Number of bytes written, or 0 on error.
#[no_mangle]
pub unsafe extern "C" fn tl_extract_region(
    ptr: *const Engine,
    out_buf: *mut u8,
    min_x: i32,
    min_y: i32,
    max_x: i32,
    max_y: i32,
) -> u64 {
    if ptr.is_null() || out_buf.is_null() {
        return 0;
    }

    let engine = &*ptr;
    let len = region_len(min_x, min_y, max_x, max_y);
    let out_slice = std::slice::from_raw_parts_mut(out_buf, len);
    engine
        .extract_region(
            out_slice,
            min_x.into(),
            min_y.into(),
            max_x.into(),
            max_y.into(),
        )
        .unwrap_or(0)
}

/// Imports a rectangular region `[min, max)` from a flat buffer.
///
/// # Layout
/// Row-major, matching `tl_extract_region`. Non-zero bytes are alive.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Engine, or null
/// - `in_buf` must point to a buffer with at least
///   `(max_x - min_x) * (max_y - min_y)` bytes
///
/// # Returns
/// Number of bytes read, or 0 on error.
#[no_mangle]
pub unsafe extern "C" fn tl_import_region(
    ptr: *mut Engine,
    in_buf: *const u8,
    min_x: i32,
    min_y: i32,
    max_x: i32,
    max_y: i32,
) -> u64 {
    if ptr.is_null() || in_buf.is_null() {
        return 0;
    }

    let engine = &mut *ptr;
    let len = region_len(min_x, min_y, max_x, max_y);
    let in_slice = std::slice::from_raw_parts(in_buf, len);
    engine
        .import_region(
            in_slice,
            min_x.into(),
            min_y.into(),
            max_x.into(),
            max_y.into(),
        )
        .unwrap_or(0)
}

/// Byte count of the unclamped rectangle the caller promised to provide.
/// 0 if that count is too large to describe a slice.
fn region_len(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> usize {
    let width = (i64::from(max_x) - i64::from(min_x)).max(0) as u64;
    let height = (i64::from(max_y) - i64::from(min_y)).max(0) as u64;
    width
        .checked_mul(height)
        .and_then(|len| isize::try_from(len).ok())
        .map_or(0, |len| len as usize)
}
