//! Persistence error types.

use derive_more::{Display, Error};

/// Failure while reading or writing a save-file or high-score file.
///
/// None of these are fatal: the caller reports them and keeps playing.
#[derive(Debug, Display, Error)]
pub enum StoreError {
    /// The file exists but could not be read or written.
    #[display("i/o error on {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    /// The save-file is not valid JSON for a save record.
    #[display("save file is not valid JSON: {source}")]
    Json { source: serde_json::Error },
    /// The save-file parsed but its contents cannot be a board.
    #[display("save file is malformed: {reason}")]
    Malformed { reason: String },
    /// The high-score file does not hold a single non-negative integer.
    #[display("high score file is malformed: {content:?}")]
    BadHighScore { content: String },
}

impl StoreError {
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            source,
        }
    }

    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::Malformed {
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(source: serde_json::Error) -> Self {
        Self::Json { source }
    }
}
