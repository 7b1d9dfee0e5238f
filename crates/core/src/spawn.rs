//! Spawn module - places new tiles on empty cells
//!
//! The target cell is drawn uniformly among the empty ones. Instead of
//! collecting coordinates, the empties are counted and the k-th one is picked,
//! so spawning never allocates.

use crate::grid::Grid;
use crate::rng::SimpleRng;
use crate::types::{Cell, SPAWN_HIGH, SPAWN_LOW, SPAWN_TWO_PERCENT};

/// A tile placed by the spawner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Spawn {
    pub row: usize,
    pub col: usize,
    pub value: Cell,
}

/// Place one new tile on a uniformly chosen empty cell
///
/// Returns `None` and leaves the grid untouched when it is full.
pub fn spawn_tile<const N: usize>(grid: &mut Grid<N>, rng: &mut SimpleRng) -> Option<Spawn> {
    let empty = grid.empty_count();
    if empty == 0 {
        return None;
    }

    let pick = rng.next_range(empty as u32) as usize;
    let (row, col, _) = grid.cells().filter(|&(_, _, v)| v == 0).nth(pick)?;

    let value = if rng.chance(SPAWN_TWO_PERCENT) {
        SPAWN_LOW
    } else {
        SPAWN_HIGH
    };
    grid.set(row, col, value);
    Some(Spawn { row, col, value })
}
