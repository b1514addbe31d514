//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::ShellInput`] edits for the
//! command line and [`crate::types::GameAction`]s for the mounted games. Kept
//! free of any UI state so the mapping can be tested on its own.

pub mod map;

pub use termfolio_types as types;

pub use map::{handle_key_event, handle_shell_key, is_actionable, should_quit};
