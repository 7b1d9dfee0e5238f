//! High-score file: a single decimal integer.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::StoreError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighScoreFile {
    path: PathBuf,
}

impl HighScoreFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stored high score; 0 when the file does not exist yet.
    pub fn read(&self) -> Result<u64, StoreError> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(StoreError::io(&self.path, e)),
        };
        text.trim()
            .parse()
            .map_err(|_| StoreError::BadHighScore { content: text })
    }

    pub fn write(&self, score: u64) -> Result<(), StoreError> {
        std::fs::write(&self.path, score.to_string())
            .map_err(|e| StoreError::io(&self.path, e))?;
        info!(path = %self.path.display(), score, "high score written");
        Ok(())
    }

    /// Write `max(score, stored)` and return it.
    ///
    /// An unreadable previous value counts as 0.
    pub fn record(&self, score: u64) -> Result<u64, StoreError> {
        let best = self.read().unwrap_or(0).max(score);
        self.write(best)?;
        Ok(best)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_reads_as_zero() {
        let dir = tempfile::tempdir().unwrap();
        let file = HighScoreFile::new(dir.path().join("hs.txt"));
        assert_eq!(file.read().unwrap(), 0);
    }

    #[test]
    fn write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let file = HighScoreFile::new(dir.path().join("hs.txt"));
        file.write(2048).unwrap();
        assert_eq!(file.read().unwrap(), 2048);
    }

    #[test]
    fn tolerates_trailing_newline() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hs.txt");
        std::fs::write(&path, "512\n").unwrap();
        assert_eq!(HighScoreFile::new(&path).read().unwrap(), 512);
    }

    #[test]
    fn garbage_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hs.txt");
        std::fs::write(&path, "lots").unwrap();
        assert!(matches!(
            HighScoreFile::new(&path).read(),
            Err(StoreError::BadHighScore { .. })
        ));
    }

    #[test]
    fn record_keeps_the_maximum() {
        let dir = tempfile::tempdir().unwrap();
        let file = HighScoreFile::new(dir.path().join("hs.txt"));
        assert_eq!(file.record(300).unwrap(), 300);
        assert_eq!(file.record(100).unwrap(), 300);
        assert_eq!(file.record(900).unwrap(), 900);
        assert_eq!(file.read().unwrap(), 900);
    }
}
