//! Terminal rendering for the portfolio.
//!
//! Screens are drawn into a plain framebuffer of styled cells (no widget
//! toolkit) and flushed by [`TerminalRenderer`], which only rewrites the
//! cells that changed since the previous frame.
//!
//! - [`ShellView`]: history and prompt
//! - [`GameView`]: Snake, Tetris, Minesweeper and the rocket
//! - [`SessionView`]: chooses between the loader, a game and the shell

pub mod fb;
pub mod game_view;
pub mod layout;
pub mod renderer;
pub mod screen;
pub mod shell_view;
pub mod theme;

pub use termfolio_core as core;
pub use termfolio_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::GameView;
pub use layout::{BoardFrame, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use screen::SessionView;
pub use shell_view::{wrap_line, ShellView};
