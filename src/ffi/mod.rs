//! C ABI for presentation shells written in other languages.
//!
//! All functions are `#[no_mangle] extern "C"` and operate on an opaque
//! `*mut Engine` handle from `tl_create`. They are thin wrappers: null checks,
//! pointer-to-slice conversion and error-to-status mapping. The logic lives in
//! [`crate::engine`].
//!
//! Status codes: 0 ok, 1 null pointer, otherwise [`LifeError::status_code`].

pub mod grid;
pub mod lifecycle;
pub mod region;

pub use grid::{tl_dimensions, tl_get_cell, tl_seed, tl_step, tl_toggle};
pub use lifecycle::{tl_create, tl_destroy, tl_get_generation};
pub use region::{tl_extract_cells, tl_extract_region, tl_import_region};

use crate::error::{LifeError, Result, STATUS_OK};

fn status(result: Result<()>) -> i32 {
    match result {
        Ok(()) => STATUS_OK,
        Err(err) => LifeError::status_code(&err),
    }
}
