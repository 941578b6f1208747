//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]s. Polling
//! stays with the caller, which reads at most one key per tick.

pub mod map;

pub use tui_runner_types as types;

pub use map::{handle_key_event, should_quit};
