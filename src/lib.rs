//! Torus Life - Conway's Game of Life on a wraparound grid
//!
//! The [`Engine`] owns one grid and its generation counter and exposes seed,
//! toggle, step and query operations. Rendering, timers and input belong to
//! the host; it feeds the engine configuration and edits, and reads cells
//! and the generation back (directly, through an [`Observer`], or over the
//! C ABI in [`ffi`]).

pub mod automaton;
pub mod config;
pub mod engine;
pub mod error;
pub mod ffi;

#[cfg(test)]
mod tests;

pub use automaton::Grid;
pub use config::{SeedConfig, ViewportConfig};
pub use engine::{Change, Engine, Observer};
pub use error::{LifeError, Result};
