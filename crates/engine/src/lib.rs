//! Session engine.
//!
//! Orchestrates the pure rules in [`tui_2048_core`] into a playable session:
//! snapshot for undo, shift, spawn when something changed, check for a stuck
//! board, and keep the countdown. Renderers read a [`GameSnapshot`]; they
//! never see the live grid.
//!
//! ```
//! use std::time::{Duration, Instant};
//! use tui_2048_engine::Session;
//! use tui_2048_types::{Direction, Status};
//!
//! let now = Instant::now();
//! let mut session = Session::new(1, Duration::from_secs(180), 0, now);
//! session.apply_move(Direction::Up, now);
//! let snap = session.snapshot(now);
//! assert_eq!(snap.status, Status::Active);
//! assert_eq!(snap.undo_depth, 1);
//! ```

pub mod countdown;
pub mod session;
pub mod snapshot;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use countdown::Countdown;
pub use session::{ActionOutcome, HistoryEntry, MoveOutcome, Session};
pub use snapshot::GameSnapshot;
