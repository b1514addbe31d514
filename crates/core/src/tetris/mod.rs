//! Tetris game state
//!
//! One piece falls at a time on a single stable [`TETRIS_TICK_MS`] cadence.
//! When it can no longer fall it is merged into the board, full rows are
//! cleared for [`TETRIS_LINE_SCORE`] points each, and a new random piece
//! spawns at the top. A spawn that collides ends the game.

pub mod board;
pub mod piece;

pub use board::Board;
pub use piece::{Piece, Shape};

use crate::rng::SimpleRng;
use crate::types::{GameAction, TETRIS_LINE_SCORE, TETRIS_TICK_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TetrisStatus {
    Falling,
    GameOver,
}

/// What a drop step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// Piece moved down one row
    Fell,
    /// Piece merged; `lines` rows were cleared and a new piece spawned
    Locked { lines: u32 },
    /// Piece merged and the next spawn collided
    ToppedOut { lines: u32 },
    /// Game already over
    Idle,
}

#[derive(Debug, Clone)]
pub struct TetrisGame {
    board: Board,
    active: Option<Piece>,
    score: u32,
    lines: u32,
    status: TetrisStatus,
    rng: SimpleRng,
    drop_timer_ms: u32,
}

impl TetrisGame {
    /// Empty board with a random first piece at the spawn origin
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let first = Piece::spawn(rng.next_piece());
        Self::with_board(Board::new(), first, rng.fork_seed())
    }

    /// Start from a prepared board and falling piece.
    pub fn with_board(board: Board, active: Piece, seed: u32) -> Self {
        Self {
            board,
            active: Some(active),
            score: 0,
            lines: 0,
            status: TetrisStatus::Falling,
            rng: SimpleRng::new(seed),
            drop_timer_ms: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn status(&self) -> TetrisStatus {
        self.status
    }

    pub fn game_over(&self) -> bool {
        self.status == TetrisStatus::GameOver
    }

    /// Whether every cell of `piece` is inside the walls, above the floor and empty
    pub fn fits(&self, piece: &Piece) -> bool {
        piece.cells().all(|(x, y)| self.board.is_free(x, y))
    }

    /// Shift the active piece horizontally. Blocked moves are ignored.
    pub fn try_move(&mut self, dx: i8) -> bool {
        if self.game_over() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };
        let moved = active.shifted(dx, 0);
        if !self.fits(&moved) {
            return false;
        }
        self.active = Some(moved);
        true
    }

    /// Rotate the active piece 90° clockwise in place. Blocked rotations are ignored.
    pub fn try_rotate(&mut self) -> bool {
        if self.game_over() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };
        let rotated = active.rotated();
        if !self.fits(&rotated) {
            return false;
        }
        self.active = Some(rotated);
        true
    }

    /// Move the piece down one row, or lock it if it is resting.
    pub fn drop(&mut self) -> DropOutcome {
        if self.game_over() {
            return DropOutcome::Idle;
        }
        let Some(active) = self.active else {
            return DropOutcome::Idle;
        };

        let lowered = active.shifted(0, 1);
        if self.fits(&lowered) {
            self.active = Some(lowered);
            return DropOutcome::Fell;
        }

        let lines = self.lock(active);
        let next = Piece::spawn(self.rng.next_piece());
        if self.fits(&next) {
            self.active = Some(next);
            DropOutcome::Locked { lines }
        } else {
            self.active = None;
            self.status = TetrisStatus::GameOver;
            tracing::info!(score = self.score, lines = self.lines, "tetris topped out");
            DropOutcome::ToppedOut { lines }
        }
    }

    fn lock(&mut self, piece: Piece) -> u32 {
        self.board.merge(piece.cells(), piece.kind);
        let cleared = self.board.clear_full_rows().len() as u32;
        if cleared > 0 {
            self.lines += cleared;
            self.score += cleared * TETRIS_LINE_SCORE;
            tracing::debug!(cleared, score = self.score, "rows cleared");
        }
        cleared
    }

    /// Gravity: one drop per elapsed [`TETRIS_TICK_MS`].
    pub fn tick(&mut self, elapsed_ms: u32) -> Option<DropOutcome> {
        if self.game_over() {
            return None;
        }
        self.drop_timer_ms += elapsed_ms;
        if self.drop_timer_ms < TETRIS_TICK_MS {
            return None;
        }
        self.drop_timer_ms -= TETRIS_TICK_MS;
        Some(self.drop())
    }

    /// Apply a key action. Exit is handled by the session.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Left => self.try_move(-1),
            GameAction::Right => self.try_move(1),
            GameAction::Down => !matches!(self.drop(), DropOutcome::Idle),
            GameAction::Up => self.try_rotate(),
            _ => false,
        }
    }
}

impl Default for TetrisGame {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    fn game_with(kind: PieceKind) -> TetrisGame {
        TetrisGame::with_board(Board::new(), Piece::spawn(kind), 1)
    }

    #[test]
    fn test_move_is_blocked_by_walls() {
        let mut game = game_with(PieceKind::O);
        let mut moved = 0;
        for _ in 0..10 {
            if game.try_move(-1) {
                moved += 1;
            }
        }
        assert_eq!(moved, 3);
        assert_eq!(game.active().unwrap().x, 0);
    }

    #[test]
    fn test_rotation_blocked_at_wall_is_ignored() {
        let mut game = game_with(PieceKind::I);
        assert!(game.try_rotate());
        // Vertical I at the right wall.
        while game.try_move(1) {}
        let before = game.active();
        // Horizontal I would stick out of the right wall.
        assert!(!game.try_rotate());
        assert_eq!(game.active(), before);
    }

    #[test]
    fn test_drop_locks_at_floor() {
        let mut game = game_with(PieceKind::O);
        for _ in 0..18 {
            assert_eq!(game.drop(), DropOutcome::Fell);
        }
        assert_eq!(game.drop(), DropOutcome::Locked { lines: 0 });
        assert_eq!(game.board().filled_count(), 4);
        assert!(game.board().is_filled(3, 19));
    }

    #[test]
    fn test_tick_waits_for_interval() {
        let mut game = game_with(PieceKind::T);
        assert_eq!(game.tick(TETRIS_TICK_MS - 1), None);
        assert_eq!(game.tick(1), Some(DropOutcome::Fell));
        assert_eq!(game.active().unwrap().y, 1);
    }

    #[test]
    fn test_actions_ignored_after_game_over() {
        let mut board = Board::new();
        for x in 0..10 {
            board.set(x, 1, Some(PieceKind::Z));
        }
        board.set(9, 1, None);
        let mut game = TetrisGame::with_board(board, Piece::spawn(PieceKind::I), 4);
        assert!(matches!(game.drop(), DropOutcome::ToppedOut { .. }));
        assert!(game.game_over());
        assert!(!game.apply_action(GameAction::Left));
        assert!(!game.apply_action(GameAction::Up));
        assert!(!game.apply_action(GameAction::Down));
        assert_eq!(game.tick(10_000), None);
    }
}
