//! Seeding, cell access, and stepping.

use super::status;
use crate::config::SeedConfig;
use crate::engine::Engine;
use crate::error::{LifeError, STATUS_NULL, STATUS_OK};

/// Seeds a random `columns × rows` grid, each cell alive with probability
/// 1/`density`. Resets the generation counter.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Engine, or null
///
/// # Returns
/// 0 on success, 1 for a null pointer, 2 for bad dimensions, 3 for a bad
/// density, 6 if the entropy source failed.
#[no_mangle]
pub unsafe extern "C" fn tl_seed(ptr: *mut Engine, columns: i32, rows: i32, density: i32) -> i32 {
    if ptr.is_null() {
        return STATUS_NULL;
    }

    let engine = &mut *ptr;
    let config = SeedConfig::new(columns.into(), rows.into(), density.into());
    status(engine.seed(&config).map(|_| ()))
}

/// Sets a cell to alive (non-zero) or dead (0).
///
/// # Safety
/// - `ptr` must be a valid pointer to an Engine, or null
///
/// # Returns
/// 0 on success, 1 for a null pointer, 4 if out of bounds (grid unchanged),
/// 5 if the engine is unseeded.
#[no_mangle]
pub unsafe extern "C" fn tl_toggle(ptr: *mut Engine, x: i32, y: i32, alive: u8) -> i32 {
    if ptr.is_null() {
        return STATUS_NULL;
    }

    let engine = &mut *ptr;
    status(engine.toggle(x.into(), y.into(), alive != 0))
}

/// Gets the state of a cell.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Engine, or null
///
/// # Returns
/// 1 if alive, 0 if dead, or the negated status code on failure
/// (-1 null, -4 out of bounds, -5 unseeded).
#[no_mangle]
pub unsafe extern "C" fn tl_get_cell(ptr: *const Engine, x: i32, y: i32) -> i32 {
    if ptr.is_null() {
        return -STATUS_NULL;
    }

    let engine = &*ptr;
    match engine.cell_state(x.into(), y.into()) {
        Ok(alive) => i32::from(alive),
        Err(err) => -err.status_code(),
    }
}

/// Advances the grid by one generation.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Engine, or null
///
/// # Returns
/// 0 on success, 1 for a null pointer, 5 if the engine is unseeded.
#[no_mangle]
pub unsafe extern "C" fn tl_step(ptr: *mut Engine) -> i32 {
    if ptr.is_null() {
        return STATUS_NULL;
    }

    let engine = &mut *ptr;
    status(engine.step().map(|_| ()))
}

/// Writes the grid dimensions to `out_columns` and `out_rows`.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Engine, or null
/// - `out_columns` and `out_rows` must be valid for writes, or null
///
/// # Returns
/// 0 on success, 1 if any pointer is null, 5 if the engine is unseeded.
#[no_mangle]
pub unsafe extern "C" fn tl_dimensions(
    ptr: *const Engine,
    out_columns: *mut u32,
    out_rows: *mut u32,
) -> i32 {
    if ptr.is_null() || out_columns.is_null() || out_rows.is_null() {
        return STATUS_NULL;
    }

    let engine = &*ptr;
    match engine.dimensions() {
        Ok((columns, rows)) => {
            // Seeding takes i32 sizes, so both fit in u32.
            *out_columns = columns as u32;
            *out_rows = rows as u32;
            STATUS_OK
        }
        Err(err) => LifeError::status_code(&err),
    }
}
