//! Core logic module - pure, deterministic, and testable
//!
//! Everything the portfolio does lives here: the three mini-games, the rocket
//! animation, the loader, the command table, the typewriter and the terminal
//! session that ties them together. No terminal I/O happens in this crate;
//! callers feed it key actions and elapsed milliseconds.
//!
//! # Module Structure
//!
//! - [`snake`]: 20x20 snake with growth and collision
//! - [`tetris`]: 10x20 well, matrix rotation and line clearing
//! - [`minesweeper`]: 8x8 field with iterative flood-fill reveal
//! - [`rocket`]: three-frame launch animation
//! - [`loader`]: start-up screen
//! - [`commands`]: the command table and dispatcher
//! - [`typewriter`]: per-character text reveal
//! - [`session`]: the shell that owns history, input and the active game
//! - [`config`]: environment configuration
//! - [`rng`]: seeded LCG shared by all games
//!
//! # Example
//!
//! ```
//! use termfolio_core::{AppConfig, TerminalSession};
//! use termfolio_core::types::{GameAction, GameKind};
//!
//! let config = AppConfig { skip_loader: true, ..AppConfig::default() };
//! let mut session = TerminalSession::new(&config);
//!
//! session.run_command("SNAKE");
//! assert_eq!(session.active_kind(), Some(GameKind::Snake));
//!
//! session.handle_action(GameAction::Exit);
//! assert_eq!(session.active_kind(), None);
//! ```
//!
//! # Timing
//!
//! Call [`TerminalSession::tick`](session::TerminalSession::tick) every frame
//! with the elapsed time. Each game keeps its own accumulator and steps once
//! its interval has passed.

pub mod commands;
pub mod config;
pub mod loader;
pub mod minesweeper;
pub mod rng;
pub mod rocket;
pub mod session;
pub mod snake;
pub mod tetris;
pub mod typewriter;

pub use termfolio_types as types;

pub use commands::{dispatch, Dispatch};
pub use config::AppConfig;
pub use loader::Loader;
pub use minesweeper::{MineCell, MineField, MinesStatus, MinesweeperGame, RevealOutcome, Tile};
pub use rng::SimpleRng;
pub use rocket::RocketAnimation;
pub use session::{ActiveGame, TerminalSession};
pub use snake::{SnakeGame, SnakeStatus, SnakeStep};
pub use tetris::{Board, DropOutcome, Piece, Shape, TetrisGame, TetrisStatus};
pub use typewriter::{Keystroke, Typewriter};
