//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It avoids widget/layout libraries and instead renders into a simple
//! framebuffer that can be flushed to a terminal backend.
//!
//! Goals:
//! - Keep the engine deterministic and testable
//! - Render only from a [`GameSnapshot`](tui_2048_engine::GameSnapshot)
//! - Keep themes a pure rendering concern

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod theme;

pub use tui_2048_engine as engine;
pub use tui_2048_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use theme::Theme;
