//! Core automaton logic and grid operations.
//!
//! Free functions over [`Grid`]: creation and addressing, random seeding,
//! stepping, and bulk region copies. The [`crate::engine`] module composes
//! them into the stateful engine, and `ffi/` exposes that engine over a C ABI.

pub mod grid;
pub mod region;
pub mod seeding;
pub mod stepping;

pub use grid::{checked_index, count_neighbors, in_bounds, index_of, wrap, Grid};
pub use region::{extract_region, import_region};
pub use seeding::{seed_grid, seed_grid_from_os};
pub use stepping::{next_state, step_grid, step_grid_parallel};
