//! Terminal rendering module.
//!
//! A small, game-oriented rendering layer: entities are blitted into a
//! framebuffer by [`Scene`], [`GameView`] lays out a whole frame, and
//! [`TerminalRenderer`] flushes it to the terminal.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep clipping and layout pure so they can be unit-tested
//! - Touch the terminal only in `renderer`

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod scene;

pub use tui_runner_core as core;
pub use tui_runner_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Palette, GAME_OVER_MESSAGE};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use scene::{Layer, Scene};
