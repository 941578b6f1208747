//! TUI Runner (workspace facade crate).
//!
//! Re-exports the member crates as `tui_runner::{core,input,term,types}` so the
//! binary, integration tests and benches share one import path.

pub use tui_runner_core as core;
pub use tui_runner_input as input;
pub use tui_runner_term as term;
pub use tui_runner_types as types;
