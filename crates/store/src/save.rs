//! Save-file: the board and score as a JSON record.
//!
//! ```json
//! {"board": [[2, 0, 0, 0], [0, 4, 0, 0], [0, 0, 0, 0], [0, 0, 0, 2]], "score": 12}
//! ```
//!
//! Reads and writes are whole-file. A record is validated completely before
//! any of it is returned, so a bad file never reaches the live session.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::{is_valid_cell, Grid};
use crate::error::StoreError;
use crate::types::{Cell, GRID_SIZE, MAX_TILE};

/// Highest score a 4x4 game can reach.
///
/// Building a tile of 2^k from 2s credits (k-1) * 2^k, so every point of board
/// value is credited at most 16 times, and the board never holds more than
/// sixteen `MAX_TILE`s.
pub const MAX_SCORE: u64 = 16 * (GRID_SIZE * GRID_SIZE) as u64 * MAX_TILE as u64;

/// On-disk shape of a saved game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveRecord {
    pub board: Vec<Vec<Cell>>,
    pub score: u64,
}

impl SaveRecord {
    pub fn new(grid: &Grid, score: u64) -> Self {
        Self {
            board: grid.rows().iter().map(|row| row.to_vec()).collect(),
            score,
        }
    }

    /// Check dimensions, tile values and score, then build the grid.
    pub fn to_grid(&self) -> Result<Grid, StoreError> {
        if self.score > MAX_SCORE {
            return Err(StoreError::malformed(format!(
                "score {} is above the reachable maximum {}",
                self.score, MAX_SCORE
            )));
        }
        if self.board.len() != GRID_SIZE {
            return Err(StoreError::malformed(format!(
                "expected {} rows, found {}",
                GRID_SIZE,
                self.board.len()
            )));
        }

        let mut rows = [[0; GRID_SIZE]; GRID_SIZE];
        for (r, row) in self.board.iter().enumerate() {
            if row.len() != GRID_SIZE {
                return Err(StoreError::malformed(format!(
                    "row {} has {} cells, expected {}",
                    r,
                    row.len(),
                    GRID_SIZE
                )));
            }
            for (c, &value) in row.iter().enumerate() {
                if !is_valid_cell(value) || value > MAX_TILE {
                    return Err(StoreError::malformed(format!(
                        "cell ({}, {}) holds {}, which is not a tile value",
                        r, c, value
                    )));
                }
                rows[r][c] = value;
            }
        }
        Ok(Grid::from_rows(rows))
    }
}

/// Location of the save-file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveFile {
    path: PathBuf,
}

impl SaveFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrite the save-file with `record`.
    pub fn save(&self, record: &SaveRecord) -> Result<(), StoreError> {
        let mut buf = Vec::with_capacity(256);
        serde_json::to_writer(&mut buf, record)?;
        std::fs::write(&self.path, &buf).map_err(|e| StoreError::io(&self.path, e))?;
        info!(path = %self.path.display(), score = record.score, "game saved");
        Ok(())
    }

    /// Read and validate the save-file.
    ///
    /// `Ok(None)` means there is no save yet.
    pub fn load(&self) -> Result<Option<(Grid, u64)>, StoreError> {
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no save file");
                return Ok(None);
            }
            Err(e) => return Err(StoreError::io(&self.path, e)),
        };

        let record: SaveRecord = serde_json::from_slice(&bytes)?;
        let grid = record.to_grid()?;
        Ok(Some((grid, record.score)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Grid {
        Grid::from_rows([[2, 0, 0, 0], [0, 4, 0, 0], [0, 0, 0, 0], [0, 0, 0, 2048]])
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let file = SaveFile::new(dir.path().join("save.json"));

        file.save(&SaveRecord::new(&grid(), 96)).unwrap();
        let (loaded, score) = file.load().unwrap().unwrap();
        assert_eq!(loaded, grid());
        assert_eq!(score, 96);
    }

    #[test]
    fn record_uses_board_and_score_keys() {
        let json = serde_json::to_value(SaveRecord::new(&grid(), 4)).unwrap();
        assert_eq!(json["score"], 4);
        assert_eq!(json["board"][3][3], 2048);
    }

    #[test]
    fn missing_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let file = SaveFile::new(dir.path().join("absent.json"));
        assert!(file.load().unwrap().is_none());
    }

    #[test]
    fn rejects_wrong_dimensions() {
        let record = SaveRecord {
            board: vec![vec![0; 4]; 3],
            score: 0,
        };
        assert!(matches!(record.to_grid(), Err(StoreError::Malformed { .. })));

        let record = SaveRecord {
            board: vec![vec![0; 4], vec![0; 4], vec![0; 5], vec![0; 4]],
            score: 0,
        };
        assert!(matches!(record.to_grid(), Err(StoreError::Malformed { .. })));
    }

    #[test]
    fn rejects_non_tile_values() {
        let mut board = vec![vec![0; 4]; 4];
        board[1][2] = 6;
        let record = SaveRecord { board, score: 0 };
        let err = record.to_grid().unwrap_err();
        assert!(err.to_string().contains("(1, 2)"));
    }

    #[test]
    fn rejects_tiles_and_scores_out_of_reach() {
        let mut board = vec![vec![0; 4]; 4];
        board[0][0] = MAX_TILE;
        let record = SaveRecord { board, score: MAX_SCORE };
        assert!(record.to_grid().is_ok());

        let mut board = vec![vec![0; 4]; 4];
        board[0][0] = 1 << 31;
        board[0][1] = 1 << 31;
        let record = SaveRecord { board, score: 0 };
        let err = record.to_grid().unwrap_err();
        assert!(err.to_string().contains("(0, 0)"));

        let record = SaveRecord {
            board: vec![vec![0; 4]; 4],
            score: u64::MAX,
        };
        assert!(matches!(record.to_grid(), Err(StoreError::Malformed { .. })));
    }

    #[test]
    fn oversized_save_file_never_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("save.json");
        std::fs::write(
            &path,
            r#"{"board": [[2147483648,2147483648,0,0],[0,0,0,0],[0,0,0,0],[0,0,0,0]], "score": 0}"#,
        )
        .unwrap();
        assert!(matches!(
            SaveFile::new(&path).load(),
            Err(StoreError::Malformed { .. })
        ));
    }

    #[test]
    fn rejects_garbage_and_missing_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("save.json");
        let file = SaveFile::new(&path);

        std::fs::write(&path, "not json").unwrap();
        assert!(matches!(file.load(), Err(StoreError::Json { .. })));

        std::fs::write(&path, r#"{"board": [[0,0,0,0],[0,0,0,0],[0,0,0,0],[0,0,0,0]]}"#).unwrap();
        assert!(matches!(file.load(), Err(StoreError::Json { .. })));

        std::fs::write(&path, r#"{"board": [[0,0,0,0]], "score": -3}"#).unwrap();
        assert!(file.load().is_err());
    }
}
