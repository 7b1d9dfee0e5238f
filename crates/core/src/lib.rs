//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the board-transformation rules of the game.
//! It has **zero dependencies** on UI, persistence, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical spawns
//! - **Testable**: Every rule is a plain function over a [`Grid`]
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Allocation-free**: Grids are `Copy` arrays and line merging uses `ArrayVec`
//!
//! # Module Structure
//!
//! - [`grid`]: N x N playfield (4 x 4 by default)
//! - [`merge`]: compaction and pairwise merge of a single line
//! - [`rotate`]: quarter turns and the direction-to-left adapter ([`shift`])
//! - [`spawn`]: places a 2 or 4 on a random empty cell
//! - [`terminal`]: detects grids with no move left
//! - [`rng`]: seeded LCG used by the spawner
//!
//! # Game Rules
//!
//! - A move slides every tile as far as it goes toward one edge
//! - Two equal tiles that meet merge into one of double value, crediting that
//!   value to the score; a tile merges at most once per move
//! - A move that changes nothing spawns nothing
//! - The game ends when no direction changes the grid
//!
//! # Example
//!
//! ```
//! use tui_2048_core::{is_terminal, shift, spawn_tile, Grid, SimpleRng};
//! use tui_2048_types::Direction;
//!
//! let grid = Grid::from_rows([[2, 2, 4, 0], [0; 4], [0; 4], [0; 4]]);
//! let moved = shift(&grid, Direction::Left);
//! assert_eq!(moved.grid.rows()[0], [4, 4, 0, 0]);
//! assert_eq!(moved.score, 4);
//!
//! let mut next = moved.grid;
//! if moved.changed {
//!     spawn_tile(&mut next, &mut SimpleRng::new(1));
//! }
//! assert!(!is_terminal(&next));
//! ```

pub mod grid;
pub mod merge;
pub mod rng;
pub mod rotate;
pub mod spawn;
pub mod terminal;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use grid::{is_valid_cell, Grid};
pub use merge::{merge_line, LineMerge};
pub use rng::SimpleRng;
pub use rotate::{can_shift, rotate_ccw, rotate_cw, shift, turns_to_left, Shift, Turn};
pub use spawn::{spawn_tile, Spawn};
pub use terminal::{has_moves, is_terminal};
