//! GameView: maps a mounted game into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::minesweeper::{MineCell, MinesStatus, MinesweeperGame, Tile};
use crate::core::rocket::RocketAnimation;
use crate::core::snake::SnakeGame;
use crate::core::tetris::TetrisGame;
use crate::core::ActiveGame;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::layout::{BoardFrame, Viewport};
use crate::theme;
use crate::types::{
    PieceKind, Point, MINES_BOARD_SIZE, SNAKE_BOARD_SIZE, TETRIS_COLS, TETRIS_ROWS,
};

pub const SNAKE_HINT: &str = "Use Arrow keys to steer, ESC to exit";
pub const SNAKE_GAME_OVER: &str = "💀 Game Over! Press ESC to exit";
pub const TETRIS_HINT: &str =
    "Use Arrow keys: Left/Right to move, Up to rotate, Down to drop, ESC to exit";
pub const TETRIS_GAME_OVER: &str = "💀 Game Over! Press ESC to exit";
pub const MINES_HINT: &str = "Use Arrow keys to move, Enter/Space to reveal, F to flag";
pub const MINES_LOST: &str = "💥 Game Over! Press ESC to exit";
pub const MINES_WON: &str = "🏆 You Won! Press ESC to exit";
pub const ROCKET_HINT: &str = "Press ESC to exit";

/// Renders whichever game is mounted.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    /// Board cell width in terminal columns (Snake and Tetris).
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self { cell_w: 2 }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self { cell_w: cell_w.max(1) }
    }

    pub fn render_into(&self, game: &ActiveGame, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::fg(theme::TEXT).into_cell(' '));

        match game {
            ActiveGame::Snake(g) => self.render_snake(g, viewport, fb),
            ActiveGame::Tetris(g) => self.render_tetris(g, viewport, fb),
            ActiveGame::Minesweeper(g) => render_minesweeper(g, viewport, fb),
            ActiveGame::Rocket(r) => render_rocket(r, viewport, fb),
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, game: &ActiveGame, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(game, viewport, &mut fb);
        fb
    }

    fn render_snake(&self, game: &SnakeGame, viewport: Viewport, fb: &mut FrameBuffer) {
        let side = SNAKE_BOARD_SIZE as u16;
        let frame = BoardFrame::centered(viewport, side, side, self.cell_w, 1);
        draw_well(&frame, fb);

        if let Some(food) = game.food().and_then(to_cell) {
            frame.fill_cell(fb, food.0, food.1, '█', CellStyle::fg(theme::ALERT).on(theme::WELL));
        }
        let head = game.head();
        for p in game.body() {
            let Some((x, y)) = to_cell(p) else {
                continue;
            };
            let mut style = CellStyle::fg(theme::TEXT).on(theme::WELL);
            if Some(p) == head {
                style = style.bold();
            }
            frame.fill_cell(fb, x, y, '█', style);
        }

        let mut score = String::with_capacity(16);
        score.push_str("Score: ");
        score.push_str(&game.score().to_string());
        frame.put_status(fb, &score, theme::text());

        if game.game_over() {
            frame.put_hint(fb, SNAKE_GAME_OVER, theme::alert());
        } else {
            frame.put_hint(fb, SNAKE_HINT, theme::hint());
        }
    }

    fn render_tetris(&self, game: &TetrisGame, viewport: Viewport, fb: &mut FrameBuffer) {
        let frame = BoardFrame::centered(
            viewport,
            TETRIS_COLS as u16,
            TETRIS_ROWS as u16,
            self.cell_w,
            1,
        );
        draw_well(&frame, fb);

        let board = game.board();
        for y in 0..TETRIS_ROWS {
            for x in 0..TETRIS_COLS {
                if let Some(kind) = board.get(x as i8, y as i8).flatten() {
                    frame.fill_cell(fb, x as u16, y as u16, '█', piece_style(kind));
                }
            }
        }

        if let Some(active) = game.active() {
            for (x, y) in active.cells() {
                if x >= 0 && (x as u8) < TETRIS_COLS && y >= 0 && (y as u8) < TETRIS_ROWS {
                    frame.fill_cell(fb, x as u16, y as u16, '█', piece_style(active.kind).bold());
                }
            }
        }

        if game.game_over() {
            frame.put_status(fb, TETRIS_GAME_OVER, theme::alert());
        } else {
            let mut score = String::with_capacity(16);
            score.push_str("Score: ");
            score.push_str(&game.score().to_string());
            frame.put_status(fb, &score, theme::text());
        }
        frame.put_hint(fb, TETRIS_HINT, theme::hint());

        draw_tetris_panel(fb, &frame, game, viewport);
    }
}

fn draw_well(frame: &BoardFrame, fb: &mut FrameBuffer) {
    frame.fill_interior(fb, '·', CellStyle::fg(theme::GRID_DOT).on(theme::WELL).dim());
    frame.draw_border(fb, theme::frame());
}

fn to_cell(p: Point) -> Option<(u16, u16)> {
    if p.x < 0 || p.y < 0 {
        return None;
    }
    Some((p.x as u16, p.y as u16))
}

fn piece_style(kind: PieceKind) -> CellStyle {
    let fg = match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::S => Rgb::new(100, 220, 120),
        PieceKind::Z => Rgb::new(220, 80, 80),
        PieceKind::J => Rgb::new(80, 120, 220),
        PieceKind::L => Rgb::new(255, 165, 0),
    };
    CellStyle::fg(fg).on(theme::WELL)
}

/// SCORE / LINES to the right of the well, when there is room.
fn draw_tetris_panel(fb: &mut FrameBuffer, frame: &BoardFrame, game: &TetrisGame, viewport: Viewport) {
    let panel_x = frame.x.saturating_add(frame.outer_width()).saturating_add(2);
    if panel_x >= viewport.width || viewport.width - panel_x < 8 {
        return;
    }

    let label = theme::text().bold();
    let value = theme::text();
    let mut y = frame.y;
    fb.put_str(panel_x, y, "SCORE", label);
    y = y.saturating_add(1);
    fb.put_u32(panel_x, y, game.score(), value);
    y = y.saturating_add(2);
    fb.put_str(panel_x, y, "LINES", label);
    y = y.saturating_add(1);
    fb.put_u32(panel_x, y, game.lines(), value);
}

fn render_minesweeper(game: &MinesweeperGame, viewport: Viewport, fb: &mut FrameBuffer) {
    let side = MINES_BOARD_SIZE as u16;
    // Three columns per cell so the cursor brackets fit.
    let frame = BoardFrame::centered(viewport, side, side, 3, 1);
    frame.fill_interior(fb, ' ', CellStyle::fg(theme::TEXT).on(theme::WELL));
    frame.draw_border(fb, theme::frame());

    let cursor = game.cursor();
    for y in 0..MINES_BOARD_SIZE as i8 {
        for x in 0..MINES_BOARD_SIZE as i8 {
            let p = Point::new(x, y);
            let Some(cell) = game.field().get(p) else {
                continue;
            };
            let (glyph, style) = mine_glyph(cell);
            let (px, py) = frame.cell_origin(x as u16, y as u16);
            if p == cursor {
                let bracket = theme::gold();
                fb.put_char(px, py, '[', bracket.on(theme::WELL));
                fb.put_char(px + 1, py, glyph, style);
                fb.put_char(px + 2, py, ']', bracket.on(theme::WELL));
            } else {
                fb.put_char(px + 1, py, glyph, style);
            }
        }
    }

    match game.status() {
        MinesStatus::Playing => frame.put_status(fb, MINES_HINT, theme::text()),
        MinesStatus::Lost => frame.put_status(fb, MINES_LOST, theme::alert()),
        MinesStatus::Won => frame.put_status(fb, MINES_WON, theme::gold()),
    }

    let flags = game.field().cells().iter().filter(|c| c.flagged).count();
    let mut counts = String::with_capacity(24);
    counts.push_str("Mines: ");
    counts.push_str(&game.field().mine_count().to_string());
    counts.push_str("  Flags: ");
    counts.push_str(&flags.to_string());
    frame.put_hint(fb, &counts, theme::hint());
}

fn mine_glyph(cell: &MineCell) -> (char, CellStyle) {
    let base = CellStyle::fg(theme::TEXT).on(theme::WELL);
    if cell.flagged {
        return ('⚑', CellStyle::fg(theme::ALERT).on(theme::WELL).bold());
    }
    if !cell.revealed {
        return ('■', base.dim());
    }
    match cell.tile {
        Tile::Mine => ('✱', CellStyle::fg(theme::ALERT).on(theme::WELL).bold()),
        Tile::Clear(0) => (' ', base),
        Tile::Clear(n) => (char::from(b'0' + n), CellStyle::fg(number_color(n)).on(theme::WELL).bold()),
    }
}

fn number_color(n: u8) -> Rgb {
    match n {
        1 => Rgb::new(96, 165, 250),
        2 => theme::TEXT,
        3 => theme::ALERT,
        4 => Rgb::new(167, 139, 250),
        _ => theme::GOLD,
    }
}

fn render_rocket(rocket: &RocketAnimation, viewport: Viewport, fb: &mut FrameBuffer) {
    let rows = rocket.frame();
    // Frame rows, a blank row, then the hint.
    let block_h = rows.len() as u16 + 2;
    let top = viewport.height.saturating_sub(block_h) / 2;
    for (i, row) in rows.iter().enumerate() {
        fb.put_str_centered(0, viewport.width, top + i as u16, row, theme::text());
    }
    fb.put_str_centered(0, viewport.width, top + block_h - 1, ROCKET_HINT, theme::hint());
}
