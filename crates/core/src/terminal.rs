//! Terminal detection - is any move left?
//!
//! A grid is terminal when every cell is occupied and no two orthogonal
//! neighbours are equal. Equality is symmetric, so only the right and lower
//! neighbour of each cell are checked.

use crate::grid::Grid;

/// True when no move can change the grid
pub fn is_terminal<const N: usize>(grid: &Grid<N>) -> bool {
    let rows = grid.rows();
    for r in 0..N {
        for c in 0..N {
            let v = rows[r][c];
            if v == 0 {
                return false;
            }
            if c + 1 < N && rows[r][c + 1] == v {
                return false;
            }
            if r + 1 < N && rows[r + 1][c] == v {
                return false;
            }
        }
    }
    true
}

/// Inverse of [`is_terminal`]
pub fn has_moves<const N: usize>(grid: &Grid<N>) -> bool {
    !is_terminal(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rotate::can_shift;
    use crate::types::Direction;

    const LOCKED: [[u32; 4]; 4] = [[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]];

    #[test]
    fn test_locked_grid_is_terminal() {
        assert!(is_terminal(&Grid::from_rows(LOCKED)));
    }

    #[test]
    fn test_one_empty_cell_is_not_terminal() {
        let mut grid = Grid::from_rows(LOCKED);
        grid.set(2, 1, 0);
        assert!(!is_terminal(&grid));
        assert!(has_moves(&grid));
    }

    #[test]
    fn test_horizontal_pair_is_not_terminal() {
        let mut grid = Grid::from_rows(LOCKED);
        grid.set(3, 3, 4);
        assert!(!is_terminal(&grid));
    }

    #[test]
    fn test_vertical_pair_is_not_terminal() {
        let mut grid = Grid::from_rows(LOCKED);
        grid.set(0, 0, 4);
        assert!(!is_terminal(&grid));
    }

    #[test]
    fn test_empty_grid_is_not_terminal() {
        assert!(!is_terminal(&Grid::<4>::new()));
    }

    #[test]
    fn test_agrees_with_shift() {
        let grids = [
            Grid::from_rows(LOCKED),
            Grid::from_rows([[2, 4, 8, 16], [32, 64, 128, 256], [2, 4, 8, 16], [32, 64, 128, 128]]),
            Grid::from_rows([[2, 4, 8, 16], [16, 8, 4, 2], [2, 4, 8, 16], [16, 8, 4, 2]]),
        ];
        for grid in grids {
            let movable = Direction::ALL.iter().any(|&d| can_shift(&grid, d));
            assert_eq!(is_terminal(&grid), !movable);
        }
    }
}
