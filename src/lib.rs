//! Terminal 2048 (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_2048::{core, engine, input, store, term, types}`
//! and holds the start-up [`config`] shared by the binary and its tests.

pub mod config;

pub use tui_2048_core as core;
pub use tui_2048_engine as engine;
pub use tui_2048_input as input;
pub use tui_2048_store as store;
pub use tui_2048_term as term;
pub use tui_2048_types as types;
