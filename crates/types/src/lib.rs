//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, session control, terminal rendering).
//!
//! # Grid Dimensions
//!
//! The playfield is a square of [`GRID_SIZE`] x [`GRID_SIZE`] cells, indexed
//! `(row, col)` from the top-left corner. A cell holds `0` when empty, otherwise
//! a power of two that is at least 2.
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_MS` | 50 | Input poll timeout per frame |
//! | `DEFAULT_TIME_LIMIT_SECS` | 180 | Session countdown |
//!
//! # Spawning
//!
//! New tiles are a 2 with probability [`SPAWN_TWO_PERCENT`]% and a 4 otherwise.
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, Status, GRID_SIZE};
//!
//! assert_eq!(Direction::ALL.len(), 4);
//! assert_eq!(Direction::Up.as_str(), "up");
//! assert!(Status::default().playable());
//! assert_eq!(GRID_SIZE, 4);
//! ```

/// Grid dimension (the board is `GRID_SIZE` x `GRID_SIZE`)
pub const GRID_SIZE: usize = 4;

/// Number of tiles placed on an empty board when a session starts
pub const START_TILES: usize = 2;

/// Frame loop poll interval (in milliseconds)
pub const FRAME_MS: u32 = 50;

/// Session countdown (in seconds)
pub const DEFAULT_TIME_LIMIT_SECS: u64 = 180;

/// Chance, out of 100, that a spawned tile is a 2 rather than a 4
pub const SPAWN_TWO_PERCENT: u32 = 90;

/// Value of a freshly spawned tile in the common case
pub const SPAWN_LOW: Cell = 2;

/// Value of a freshly spawned tile in the rare case
pub const SPAWN_HIGH: Cell = 4;

/// Largest tile a 4x4 board can hold (2^17)
///
/// Sixteen cells holding 2^16 down to 4 plus a spawned 4 collapse into this
/// tile; nothing larger fits on the board.
pub const MAX_TILE: Cell = 1 << 17;

/// A single grid cell (`0` = empty)
pub type Cell = u32;

/// Direction of a move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

/// Game actions
///
/// `Save`, `Load` and `ToggleTheme` are carried through the same channel as the
/// gameplay actions but are served by the persistence and rendering layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Move(Direction),
    Undo,
    TogglePause,
    Save,
    Load,
    ToggleTheme,
    Restart,
}

/// Session status shown to the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Status {
    #[default]
    Active,
    Paused,
    Over,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Active => "active",
            Status::Paused => "paused",
            Status::Over => "over",
        }
    }

    /// Whether directional input is accepted
    pub fn playable(&self) -> bool {
        matches!(self, Status::Active)
    }
}
