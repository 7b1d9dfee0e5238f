//! Persistence for saved games and the high score.
//!
//! Both files are read and written whole, synchronously. A missing file means
//! "no data yet"; everything else that goes wrong comes back as a
//! [`StoreError`] for the caller to report without stopping the game.

pub mod error;
pub mod high_score;
pub mod save;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use error::StoreError;
pub use high_score::HighScoreFile;
pub use save::{SaveFile, SaveRecord, MAX_SCORE};
