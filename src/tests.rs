//! End-to-end behaviour of the engine through its public API.

use proptest::prelude::*;

use crate::automaton::{count_neighbors, step_grid, step_grid_parallel, Grid};
use crate::config::{SeedConfig, ViewportConfig};
use crate::engine::Engine;
use crate::error::LifeError;

const GLIDER: [(i64, i64); 5] = [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)];

fn engine_with(columns: i64, rows: i64, alive: &[(i64, i64)]) -> Engine {
    let mut engine = Engine::new();
    engine.load(Grid::with_alive(columns, rows, alive).unwrap());
    engine
}

fn shifted(grid: &Grid, dx: usize, dy: usize) -> Grid {
    let (columns, rows) = grid.dimensions();
    let mut cells = vec![false; columns * rows];
    for (x, y) in grid.alive_cells() {
        cells[((y + dy) % rows) * columns + (x + dx) % columns] = true;
    }
    Grid::from_cells(columns as i64, rows as i64, cells).unwrap()
}

#[test]
fn test_toroidal_adjacency() {
    let mut engine = engine_with(3, 3, &[(0, 0)]);

    // (2, 2) reaches (0, 0) across both seams
    assert_eq!(count_neighbors(engine.grid().unwrap(), 2, 2), 1);

    // Every cell ends up with at most one neighbour, so nothing survives
    engine.step().unwrap();
    assert_eq!(engine.population(), Ok(0));
}

#[test]
fn test_birth() {
    let mut engine = engine_with(3, 3, &[(0, 0), (1, 0), (2, 0)]);
    assert_eq!(engine.cell_state(1, 1), Ok(false));

    engine.step().unwrap();
    assert_eq!(engine.cell_state(1, 1), Ok(true));
}

#[test]
fn test_death_by_isolation() {
    let mut engine = engine_with(5, 5, &[(2, 2)]);
    engine.step().unwrap();
    assert_eq!(engine.cell_state(2, 2), Ok(false));

    let mut engine = engine_with(5, 5, &[(1, 1), (2, 1)]);
    engine.step().unwrap();
    assert_eq!(engine.cell_state(1, 1), Ok(false));
    assert_eq!(engine.cell_state(2, 1), Ok(false));

    // A single row wraps every vertical offset back onto the cell itself
    let mut engine = engine_with(5, 1, &[(2, 0)]);
    assert_eq!(count_neighbors(engine.grid().unwrap(), 2, 0), 0);
    engine.step().unwrap();
    assert_eq!(engine.cell_state(2, 0), Ok(false));

    let mut engine = engine_with(1, 1, &[(0, 0)]);
    engine.step().unwrap();
    assert_eq!(engine.population(), Ok(0));
}

#[test]
fn test_death_by_overcrowding() {
    let mut engine = engine_with(5, 5, &[(2, 2), (1, 1), (3, 1), (1, 3), (3, 3)]);
    engine.step().unwrap();
    assert_eq!(engine.cell_state(2, 2), Ok(false));

    let mut engine = engine_with(5, 5, &[(2, 2), (1, 2), (3, 2), (2, 1), (2, 3), (1, 1)]);
    engine.step().unwrap();
    assert_eq!(engine.cell_state(2, 2), Ok(false));
}

#[test]
fn test_survival() {
    // Two neighbours
    let mut engine = engine_with(5, 5, &[(1, 2), (2, 2), (3, 2)]);
    engine.step().unwrap();
    assert_eq!(engine.cell_state(2, 2), Ok(true));

    // Three neighbours
    let mut engine = engine_with(5, 5, &[(1, 2), (2, 2), (3, 2), (2, 1)]);
    engine.step().unwrap();
    assert_eq!(engine.cell_state(2, 2), Ok(true));
}

#[test]
fn test_glider_wraps_around_torus() {
    let start = Grid::with_alive(8, 8, &GLIDER).unwrap();
    let mut engine = Engine::new();
    engine.load(start.clone());

    for _ in 0..4 {
        engine.step().unwrap();
    }
    assert_eq!(engine.grid().unwrap(), &shifted(&start, 1, 1));

    for _ in 4..32 {
        engine.step().unwrap();
    }
    assert_eq!(engine.grid().unwrap(), &start);
    assert_eq!(engine.current_generation(), Ok(32));
}

#[test]
fn test_generation_monotonic_and_reset_on_seed() {
    let mut engine = Engine::new();
    engine.seed(&SeedConfig::new(16, 16, 3)).unwrap();
    assert_eq!(engine.current_generation(), Ok(0));

    for expected in 1..=10u64 {
        engine.step().unwrap();
        assert_eq!(engine.current_generation(), Ok(expected));
    }

    engine.toggle(0, 0, true).unwrap();
    assert_eq!(engine.current_generation(), Ok(10));

    engine.seed(&SeedConfig::new(4, 4, 3)).unwrap();
    assert_eq!(engine.current_generation(), Ok(0));
    assert_eq!(engine.dimensions(), Ok((4, 4)));
}

#[test]
fn test_bounds_enforcement() {
    let mut engine = engine_with(4, 3, &GLIDER[..3]);
    let before = engine.grid().unwrap().clone();

    assert!(matches!(
        engine.toggle(-1, 0, true),
        Err(LifeError::OutOfBounds { x: -1, y: 0, .. })
    ));
    assert!(matches!(
        engine.toggle(4, 0, true),
        Err(LifeError::OutOfBounds { x: 4, y: 0, .. })
    ));
    assert!(matches!(
        engine.cell_state(0, 3),
        Err(LifeError::OutOfBounds { .. })
    ));
    assert_eq!(engine.grid().unwrap(), &before);
}

#[test]
fn test_seed_density_one() {
    let mut engine = Engine::new();
    let grid = engine.seed(&SeedConfig::new(30, 20, 1)).unwrap();
    assert_eq!(grid.population(), 600);
}

#[test]
fn test_seed_rejects_invalid_input() {
    let mut engine = Engine::new();
    assert!(matches!(
        engine.seed(&SeedConfig::new(0, 0, 2)),
        Err(LifeError::InvalidDimension { .. })
    ));
    assert!(matches!(
        engine.seed(&SeedConfig::new(2, 2, 0)),
        Err(LifeError::InvalidDensity(0))
    ));
}

#[test]
fn test_viewport_drives_engine() {
    let viewport = ViewportConfig {
        resolution: 10,
        density: 1,
    };
    let mut engine = Engine::new();
    engine.seed(&viewport.seed_config(640, 480).unwrap()).unwrap();
    assert_eq!(engine.dimensions(), Ok((64, 48)));

    let (x, y) = viewport.cell_at(639, 479).unwrap();
    engine.toggle(x, y, false).unwrap();
    assert_eq!(engine.cell_state(63, 47), Ok(false));

    // A drag that leaves the surface is reported, not applied
    let (x, y) = viewport.cell_at(100, 480).unwrap();
    assert!(matches!(
        engine.toggle(x, y, false),
        Err(LifeError::OutOfBounds { x: 10, y: 48, .. })
    ));
    assert_eq!(engine.population(), Ok(64 * 48 - 1));
}

fn arb_grid() -> impl Strategy<Value = Grid> {
    (1i64..12, 1i64..12).prop_flat_map(|(columns, rows)| {
        prop::collection::vec(any::<bool>(), (columns * rows) as usize)
            .prop_map(move |cells| Grid::from_cells(columns, rows, cells).unwrap())
    })
}

proptest! {
    /// Stepping is a pure function of the grid
    #[test]
    fn prop_step_is_deterministic(grid in arb_grid()) {
        let mut a = Engine::new();
        let mut b = Engine::new();
        a.load(grid.clone());
        b.load(grid);
        prop_assert_eq!(a.step().unwrap(), b.step().unwrap());
    }

    /// The rayon path produces the same grid as the serial one
    #[test]
    fn prop_parallel_matches_serial(grid in arb_grid()) {
        prop_assert_eq!(step_grid(&grid), step_grid_parallel(&grid));
    }

    /// A torus has no preferred origin: shifting commutes with stepping
    #[test]
    fn prop_step_commutes_with_shift(grid in arb_grid(), dx in 0usize..12, dy in 0usize..12) {
        prop_assert_eq!(
            step_grid(&shifted(&grid, dx, dy)),
            shifted(&step_grid(&grid), dx, dy)
        );
    }

    /// Setting a cell to its current value changes nothing
    #[test]
    fn prop_toggle_to_current_value_is_identity(grid in arb_grid(), x in 0i64..12, y in 0i64..12) {
        let mut engine = Engine::new();
        engine.load(grid.clone());
        let x = x % grid.columns() as i64;
        let y = y % grid.rows() as i64;

        let current = engine.cell_state(x, y).unwrap();
        engine.toggle(x, y, current).unwrap();
        prop_assert_eq!(engine.grid().unwrap(), &grid);
    }

    /// Rejected edits never touch the grid
    #[test]
    fn prop_out_of_bounds_toggle_is_noop(grid in arb_grid(), x in -20i64..20, y in -20i64..20) {
        prop_assume!(grid.get(x, y).is_none());
        let mut engine = Engine::new();
        engine.load(grid.clone());

        let is_out_of_bounds = matches!(
            engine.toggle(x, y, true),
            Err(LifeError::OutOfBounds { .. })
        );
        prop_assert!(is_out_of_bounds);
        prop_assert_eq!(engine.grid().unwrap(), &grid);
    }
}
