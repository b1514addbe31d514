//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, so they can
//! be shared by the game logic, the key mapping and the terminal views.
//!
//! # Board Dimensions
//!
//! | Game | Width | Height | Notes |
//! |------|-------|--------|-------|
//! | Snake | 20 | 20 | starts at (10, 10) heading up |
//! | Tetris | 10 | 20 | pieces spawn at (3, 0) |
//! | Minesweeper | 8 | 8 | 10 mines |
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Main loop frame (~60 FPS) |
//! | `SNAKE_TICK_MS` | 150 | One snake move |
//! | `TETRIS_TICK_MS` | 500 | One gravity step |
//! | `ROCKET_FRAME_MS` | 200 | One animation frame |
//! | `TYPE_CHAR_MS` | 20 | One typed character |
//! | `LOADER_MS` | 2000 | Loading screen duration |
//!
//! # Examples
//!
//! ```
//! use termfolio_types::{Direction, GameKind, Point};
//!
//! let up = Direction::Up;
//! assert!(up.is_opposite(Direction::Down));
//! assert_eq!(Point::new(3, 3).step(up), Point::new(3, 2));
//!
//! assert_eq!(GameKind::from_str("TETRIS"), Some(GameKind::Tetris));
//! ```

/// Main loop frame interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Snake grid side length (square board)
pub const SNAKE_BOARD_SIZE: u8 = 20;

/// Snake move interval
pub const SNAKE_TICK_MS: u32 = 150;

/// Starting head cell of the snake
pub const SNAKE_START: Point = Point::new(10, 10);

/// Food cell of a fresh game
pub const SNAKE_FIRST_FOOD: Point = Point::new(5, 5);

/// Tetris board width in cells (10 columns)
pub const TETRIS_COLS: u8 = 10;

/// Tetris board height in cells (20 rows)
pub const TETRIS_ROWS: u8 = 20;

/// Gravity interval for the falling piece
pub const TETRIS_TICK_MS: u32 = 500;

/// Origin of every freshly spawned piece (x, y)
pub const TETRIS_SPAWN: (i8, i8) = (3, 0);

/// Points awarded for each row cleared by a single merge
pub const TETRIS_LINE_SCORE: u32 = 100;

/// Minesweeper grid side length (square board)
pub const MINES_BOARD_SIZE: u8 = 8;

/// Number of mines placed on a fresh board
pub const MINES_COUNT: u8 = 10;

/// Rocket animation frame interval
pub const ROCKET_FRAME_MS: u32 = 200;

/// Per-character typewriter delay
pub const TYPE_CHAR_MS: u32 = 20;

/// How long the loading screen stays up
pub const LOADER_MS: u32 = 2000;

/// Prompt shown before the input line and echoed commands
pub const PROMPT: &str = "$";

/// A grid coordinate. `x` grows to the right, `y` grows downwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i8,
    pub y: i8,
}

impl Point {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step in `dir`.
    pub fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Whether the point lies inside a `width` x `height` grid anchored at the origin.
    pub fn in_bounds(self, width: u8, height: u8) -> bool {
        self.x >= 0 && self.y >= 0 && (self.x as i16) < width as i16 && (self.y as i16) < height as i16
    }
}

/// The four cardinal directions used by arrow keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit vector (dx, dy) for this direction.
    ///
    /// ```
    /// use termfolio_types::Direction;
    ///
    /// assert_eq!(Direction::Up.delta(), (0, -1));
    /// assert_eq!(Direction::Right.delta(), (1, 0));
    /// ```
    pub fn delta(self) -> (i8, i8) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }
}

/// The screens a command can mount in place of the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameKind {
    Snake,
    Tetris,
    Minesweeper,
    Rocket,
}

impl GameKind {
    /// Parse a game kind from its command name (case-insensitive)
    ///
    /// ```
    /// use termfolio_types::GameKind;
    ///
    /// assert_eq!(GameKind::from_str("snake"), Some(GameKind::Snake));
    /// assert_eq!(GameKind::from_str("Rocket"), Some(GameKind::Rocket));
    /// assert_eq!(GameKind::from_str("chess"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "snake" => Some(GameKind::Snake),
            "tetris" => Some(GameKind::Tetris),
            "minesweeper" => Some(GameKind::Minesweeper),
            "rocket" => Some(GameKind::Rocket),
            _ => None,
        }
    }

    /// Command name that launches this game
    pub fn as_str(&self) -> &'static str {
        match self {
            GameKind::Snake => "snake",
            GameKind::Tetris => "tetris",
            GameKind::Minesweeper => "minesweeper",
            GameKind::Rocket => "rocket",
        }
    }
}

/// Game actions produced by the key mapping.
///
/// Each game interprets the arrows in its own way: Snake turns, Tetris moves
/// (left/right), drops (down) and rotates (up), Minesweeper moves its cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Up,
    Down,
    Left,
    Right,
    /// Enter or Space
    Confirm,
    /// Toggle a flag (Minesweeper)
    Flag,
    /// Leave the game and return to the terminal
    Exit,
}

impl GameAction {
    /// The arrow direction carried by this action, if any.
    pub fn direction(self) -> Option<Direction> {
        match self {
            GameAction::Up => Some(Direction::Up),
            GameAction::Down => Some(Direction::Down),
            GameAction::Left => Some(Direction::Left),
            GameAction::Right => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Edits applied to the terminal input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellInput {
    Insert(char),
    Backspace,
    Submit,
}

/// The seven tetromino kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds, in table order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn portfolio_timing_defaults() {
        assert_eq!(SNAKE_TICK_MS, 150);
        assert_eq!(TETRIS_TICK_MS, 500);
        assert_eq!(ROCKET_FRAME_MS, 200);
        assert_eq!(TYPE_CHAR_MS, 20);
        assert_eq!(LOADER_MS, 2000);
    }

    #[test]
    fn point_bounds() {
        assert!(Point::new(0, 0).in_bounds(8, 8));
        assert!(Point::new(7, 7).in_bounds(8, 8));
        assert!(!Point::new(8, 0).in_bounds(8, 8));
        assert!(!Point::new(0, -1).in_bounds(8, 8));
    }

    #[test]
    fn action_directions() {
        assert_eq!(GameAction::Left.direction(), Some(Direction::Left));
        assert_eq!(GameAction::Flag.direction(), None);
    }
}
