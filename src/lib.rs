//! termfolio (workspace facade crate).
//!
//! A portfolio presented as a terminal: a handful of text commands plus
//! Snake, Tetris, Minesweeper and a rocket animation. The implementation
//! lives in the crates under `crates/`; this package re-exports them as
//! `termfolio::{core,input,term,types}` and ships the binary.

pub use termfolio_core as core;
pub use termfolio_input as input;
pub use termfolio_term as term;
pub use termfolio_types as types;
