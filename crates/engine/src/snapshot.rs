use crate::types::{Cell, Status, GRID_SIZE};

/// Read-only view of a session handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub grid: [[Cell; GRID_SIZE]; GRID_SIZE],
    pub score: u64,
    pub high_score: u64,
    pub remaining_secs: u64,
    pub status: Status,
    pub max_tile: Cell,
    /// Moves that changed the board this session.
    pub moves: u32,
    pub undo_depth: usize,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.grid = [[0; GRID_SIZE]; GRID_SIZE];
        self.score = 0;
        self.high_score = 0;
        self.remaining_secs = 0;
        self.status = Status::Active;
        self.max_tile = 0;
        self.moves = 0;
        self.undo_depth = 0;
    }

    pub fn playable(&self) -> bool {
        self.status.playable()
    }

    pub fn paused(&self) -> bool {
        self.status == Status::Paused
    }

    pub fn game_over(&self) -> bool {
        self.status == Status::Over
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            grid: [[0; GRID_SIZE]; GRID_SIZE],
            score: 0,
            high_score: 0,
            remaining_secs: 0,
            status: Status::Active,
            max_tile: 0,
            moves: 0,
            undo_depth: 0,
        }
    }
}
