//! Grid module - the square playfield
//!
//! The grid is an N x N matrix of cells stored row-major as nested arrays, so a
//! whole grid is `Copy` and can be snapshotted without allocation.
//! Coordinates: (row, col), both ranging 0..N from the top-left corner.
//! A cell value of 0 means empty; occupied cells hold powers of two >= 2.

use crate::types::{Cell, GRID_SIZE};

/// The game grid - N columns x N rows (N defaults to the 4x4 playfield)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid<const N: usize = GRID_SIZE> {
    rows: [[Cell; N]; N],
}

impl<const N: usize> Grid<N> {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self { rows: [[0; N]; N] }
    }

    /// Create a grid from explicit rows
    pub fn from_rows(rows: [[Cell; N]; N]) -> Self {
        Self { rows }
    }

    /// Side length of the grid
    pub fn size(&self) -> usize {
        N
    }

    /// Get cell at (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Set cell at (row, col)
    /// Returns false if out of bounds
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> bool {
        match self.rows.get_mut(row).and_then(|r| r.get_mut(col)) {
            Some(slot) => {
                *slot = cell;
                true
            }
            None => false,
        }
    }

    pub fn rows(&self) -> &[[Cell; N]; N] {
        &self.rows
    }

    pub(crate) fn rows_mut(&mut self) -> &mut [[Cell; N]; N] {
        &mut self.rows
    }

    /// Iterate over all cells with their coordinates, row by row
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(r, row)| row.iter().enumerate().map(move |(c, &v)| (r, c, v)))
    }

    /// Number of empty cells
    pub fn empty_count(&self) -> usize {
        self.cells().filter(|&(_, _, v)| v == 0).count()
    }

    pub fn is_full(&self) -> bool {
        self.empty_count() == 0
    }

    /// Largest tile on the board (0 for an empty board)
    pub fn max_tile(&self) -> Cell {
        self.cells().map(|(_, _, v)| v).max().unwrap_or(0)
    }

    /// Sum of all tile values
    pub fn sum(&self) -> u64 {
        self.cells().map(|(_, _, v)| v as u64).sum()
    }

    /// Clear the entire grid
    pub fn clear(&mut self) {
        self.rows = [[0; N]; N];
    }
}

impl<const N: usize> Default for Grid<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> From<[[Cell; N]; N]> for Grid<N> {
    fn from(rows: [[Cell; N]; N]) -> Self {
        Self::from_rows(rows)
    }
}

/// Whether a cell value may appear on a grid: empty, or a power of two >= 2
pub fn is_valid_cell(cell: Cell) -> bool {
    cell == 0 || (cell >= 2 && cell.is_power_of_two())
}
