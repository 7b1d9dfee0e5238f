//! Start-up configuration from environment variables.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `TUI_2048_SAVE_PATH` | `savefile.json` |
//! | `TUI_2048_HIGHSCORE_PATH` | `highscore.txt` |
//! | `TUI_2048_TIME_LIMIT_SECS` | `180` |
//! | `TUI_2048_SEED` | derived from the wall clock |
//! | `TUI_2048_LOG_PATH` | unset (no logging) |
//! | `TUI_2048_LOG` | `info` |
//!
//! Values that fail to parse fall back to the default.

use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::types::DEFAULT_TIME_LIMIT_SECS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub save_path: PathBuf,
    pub high_score_path: PathBuf,
    pub time_limit: Duration,
    pub seed: u32,
    pub log_path: Option<PathBuf>,
    pub log_filter: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (the environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .and_then(|s| if s.is_empty() { None } else { Some(s) })
        };

        let save_path = non_empty("TUI_2048_SAVE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("savefile.json"));
        let high_score_path = non_empty("TUI_2048_HIGHSCORE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("highscore.txt"));

        let time_limit_secs = non_empty("TUI_2048_TIME_LIMIT_SECS")
            .and_then(|s| s.parse::<u64>().ok())
            .filter(|&s| s > 0)
            .unwrap_or(DEFAULT_TIME_LIMIT_SECS);

        let seed = non_empty("TUI_2048_SEED")
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(clock_seed);

        let log_path = non_empty("TUI_2048_LOG_PATH").map(PathBuf::from);
        let log_filter = non_empty("TUI_2048_LOG").unwrap_or_else(|| "info".to_string());

        Self {
            save_path,
            high_score_path,
            time_limit: Duration::from_secs(time_limit_secs),
            seed,
            log_path,
            log_filter,
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}
