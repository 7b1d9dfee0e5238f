//! Rotation module - turns every move into a move to the left
//!
//! Only [`merge_line`] knows how tiles slide, and it always slides toward index 0.
//! A move in any other direction rotates the grid so that direction faces left,
//! merges every row, then applies the inverse turns.
//!
//! | Direction | Turns to face left | Turns back |
//! |-----------|--------------------|------------|
//! | Left      | none               | none       |
//! | Right     | Cw, Cw             | Ccw, Ccw   |
//! | Up        | Ccw                | Cw         |
//! | Down      | Cw                 | Ccw        |
//!
//! Rotations build a fresh grid from the source; a grid is never written while
//! it is being read.

use crate::grid::Grid;
use crate::merge::merge_line;
use crate::types::Direction;

/// A quarter turn of the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Turn {
    Cw,
    Ccw,
}

impl Turn {
    pub fn inverse(self) -> Self {
        match self {
            Turn::Cw => Turn::Ccw,
            Turn::Ccw => Turn::Cw,
        }
    }

    pub fn apply<const N: usize>(self, grid: &Grid<N>) -> Grid<N> {
        match self {
            Turn::Cw => rotate_cw(grid),
            Turn::Ccw => rotate_ccw(grid),
        }
    }
}

/// Quarter turn clockwise: the left column becomes the top row
pub fn rotate_cw<const N: usize>(grid: &Grid<N>) -> Grid<N> {
    let src = grid.rows();
    let mut out = [[0; N]; N];
    for (i, row) in out.iter_mut().enumerate() {
        for (j, cell) in row.iter_mut().enumerate() {
            *cell = src[N - 1 - j][i];
        }
    }
    Grid::from_rows(out)
}

/// Quarter turn counter-clockwise: the right column becomes the top row
pub fn rotate_ccw<const N: usize>(grid: &Grid<N>) -> Grid<N> {
    let src = grid.rows();
    let mut out = [[0; N]; N];
    for (i, row) in out.iter_mut().enumerate() {
        for (j, cell) in row.iter_mut().enumerate() {
            *cell = src[j][N - 1 - i];
        }
    }
    Grid::from_rows(out)
}

/// Turns that bring `direction` to face left
pub fn turns_to_left(direction: Direction) -> &'static [Turn] {
    match direction {
        Direction::Left => &[],
        Direction::Right => &[Turn::Cw, Turn::Cw],
        Direction::Up => &[Turn::Ccw],
        Direction::Down => &[Turn::Cw],
    }
}

/// Apply a turn sequence in order
pub fn apply_turns<const N: usize>(grid: &Grid<N>, turns: &[Turn]) -> Grid<N> {
    turns.iter().fold(*grid, |g, t| t.apply(&g))
}

/// Undo a turn sequence (inverse turns in reverse order)
pub fn undo_turns<const N: usize>(grid: &Grid<N>, turns: &[Turn]) -> Grid<N> {
    turns.iter().rev().fold(*grid, |g, t| t.inverse().apply(&g))
}

/// Result of shifting a whole grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shift<const N: usize> {
    pub grid: Grid<N>,
    pub score: u64,
    pub changed: bool,
}

/// Shift every tile toward `direction`, merging along the way
///
/// Pure: the input grid is left untouched and no tile is spawned.
pub fn shift<const N: usize>(grid: &Grid<N>, direction: Direction) -> Shift<N> {
    let turns = turns_to_left(direction);
    let mut work = apply_turns(grid, turns);

    let mut score = 0u64;
    let mut changed = false;
    for row in work.rows_mut().iter_mut() {
        let merged = merge_line(*row);
        *row = merged.line;
        score = score.saturating_add(merged.score);
        changed |= merged.changed;
    }

    Shift {
        grid: undo_turns(&work, turns),
        score,
        changed,
    }
}

/// Whether shifting toward `direction` would change the grid
pub fn can_shift<const N: usize>(grid: &Grid<N>, direction: Direction) -> bool {
    shift(grid, direction).changed
}
