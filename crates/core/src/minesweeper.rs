//! Minesweeper game state
//!
//! An 8x8 field with 10 mines. Revealing a zero-count cell opens its whole
//! connected zero region plus the numbered cells bordering it; the fill uses an
//! explicit stack.

use arrayvec::ArrayVec;

use crate::rng::SimpleRng;
use crate::types::{Direction, GameAction, Point, MINES_BOARD_SIZE, MINES_COUNT};

const SIDE: usize = MINES_BOARD_SIZE as usize;
const FIELD_SIZE: usize = SIDE * SIDE;

/// What lies under a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Mine,
    /// Number of mines among the 8 neighbours
    Clear(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MineCell {
    pub tile: Tile,
    pub revealed: bool,
    pub flagged: bool,
}

impl MineCell {
    const HIDDEN_CLEAR: MineCell = MineCell {
        tile: Tile::Clear(0),
        revealed: false,
        flagged: false,
    };

    pub fn is_mine(&self) -> bool {
        self.tile == Tile::Mine
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MinesStatus {
    Playing,
    Lost,
    Won,
}

/// Result of a reveal request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealOutcome {
    /// Cell was already open, flagged, or the game is over
    Ignored,
    /// `cells` cells were opened
    Opened { cells: usize },
    /// Opened the last safe cell
    Cleared { cells: usize },
    /// Stepped on a mine
    Exploded,
}

/// The 8 neighbours of `p` that lie on the field
pub fn neighbors(p: Point) -> ArrayVec<Point, 8> {
    let mut out = ArrayVec::new();
    for dy in -1..=1 {
        for dx in -1..=1 {
            if dx == 0 && dy == 0 {
                continue;
            }
            let n = Point::new(p.x + dx, p.y + dy);
            if n.in_bounds(MINES_BOARD_SIZE, MINES_BOARD_SIZE) {
                out.push(n);
            }
        }
    }
    out
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MineField {
    cells: [MineCell; FIELD_SIZE],
}

impl MineField {
    /// Place [`MINES_COUNT`] mines at random distinct cells.
    pub fn generate(rng: &mut SimpleRng) -> Self {
        let mut mines: ArrayVec<Point, FIELD_SIZE> = ArrayVec::new();
        while mines.len() < MINES_COUNT as usize {
            let p = Point::new(
                rng.next_range(SIDE as u32) as i8,
                rng.next_range(SIDE as u32) as i8,
            );
            if !mines.contains(&p) {
                mines.push(p);
            }
        }
        Self::from_mines(&mines)
    }

    /// Build a field with mines exactly at `mines`, then compute the counts.
    pub fn from_mines(mines: &[Point]) -> Self {
        let mut cells = [MineCell::HIDDEN_CLEAR; FIELD_SIZE];
        for &m in mines {
            if let Some(i) = Self::index(m) {
                cells[i].tile = Tile::Mine;
            }
        }

        for i in 0..FIELD_SIZE {
            if cells[i].is_mine() {
                continue;
            }
            let p = Point::new((i % SIDE) as i8, (i / SIDE) as i8);
            let count = neighbors(p)
                .iter()
                .filter_map(|n| Self::index(*n))
                .filter(|&j| cells[j].is_mine())
                .count();
            cells[i].tile = Tile::Clear(count as u8);
        }

        Self { cells }
    }

    #[inline(always)]
    fn index(p: Point) -> Option<usize> {
        if !p.in_bounds(MINES_BOARD_SIZE, MINES_BOARD_SIZE) {
            return None;
        }
        Some(p.y as usize * SIDE + p.x as usize)
    }

    pub fn get(&self, p: Point) -> Option<&MineCell> {
        Self::index(p).map(|i| &self.cells[i])
    }

    fn get_mut(&mut self, p: Point) -> Option<&mut MineCell> {
        Self::index(p).map(|i| &mut self.cells[i])
    }

    pub fn cells(&self) -> &[MineCell] {
        &self.cells
    }

    pub fn mine_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_mine()).count()
    }

    /// Safe cells still hidden
    pub fn hidden_safe_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|c| !c.is_mine() && !c.revealed)
            .count()
    }

    pub fn revealed_count(&self) -> usize {
        self.cells.iter().filter(|c| c.revealed).count()
    }

    /// Open `start` and, through zero-count cells, everything connected to it.
    /// Flagged cells are never opened. Returns the number of cells opened.
    fn flood_reveal(&mut self, start: Point) -> usize {
        let mut opened = 0;
        let mut stack = vec![start];

        while let Some(p) = stack.pop() {
            let Some(cell) = self.get_mut(p) else {
                continue;
            };
            if cell.revealed || cell.flagged {
                continue;
            }
            cell.revealed = true;
            opened += 1;
            if cell.tile == Tile::Clear(0) {
                stack.extend(neighbors(p));
            }
        }

        opened
    }
}

#[derive(Debug, Clone)]
pub struct MinesweeperGame {
    field: MineField,
    cursor: Point,
    status: MinesStatus,
}

impl MinesweeperGame {
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        Self::with_field(MineField::generate(&mut rng))
    }

    pub fn with_field(field: MineField) -> Self {
        Self {
            field,
            cursor: Point::new(0, 0),
            status: MinesStatus::Playing,
        }
    }

    pub fn field(&self) -> &MineField {
        &self.field
    }

    pub fn cursor(&self) -> Point {
        self.cursor
    }

    pub fn status(&self) -> MinesStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status != MinesStatus::Playing
    }

    /// Move the cursor one cell, clamped to the field edges.
    pub fn move_cursor(&mut self, dir: Direction) -> bool {
        let next = self.cursor.step(dir);
        if !next.in_bounds(MINES_BOARD_SIZE, MINES_BOARD_SIZE) {
            return false;
        }
        self.cursor = next;
        true
    }

    pub fn reveal(&mut self, p: Point) -> RevealOutcome {
        if self.is_finished() {
            return RevealOutcome::Ignored;
        }
        let Some(cell) = self.field.get_mut(p) else {
            return RevealOutcome::Ignored;
        };
        if cell.revealed || cell.flagged {
            return RevealOutcome::Ignored;
        }

        if cell.is_mine() {
            cell.revealed = true;
            self.status = MinesStatus::Lost;
            tracing::info!(x = p.x, y = p.y, "mine revealed");
            return RevealOutcome::Exploded;
        }

        let cells = self.field.flood_reveal(p);
        if self.field.hidden_safe_count() == 0 {
            self.status = MinesStatus::Won;
            tracing::info!("minefield cleared");
            return RevealOutcome::Cleared { cells };
        }
        RevealOutcome::Opened { cells }
    }

    /// Toggle a flag on a hidden cell. Revealed cells are left alone.
    pub fn toggle_flag(&mut self, p: Point) -> bool {
        if self.is_finished() {
            return false;
        }
        match self.field.get_mut(p) {
            Some(cell) if !cell.revealed => {
                cell.flagged = !cell.flagged;
                true
            }
            _ => false,
        }
    }

    /// Apply a key action at the cursor. Exit is handled by the session.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        if self.is_finished() {
            return false;
        }
        if let Some(dir) = action.direction() {
            return self.move_cursor(dir);
        }
        match action {
            GameAction::Confirm => !matches!(self.reveal(self.cursor), RevealOutcome::Ignored),
            GameAction::Flag => self.toggle_flag(self.cursor),
            _ => false,
        }
    }
}

impl Default for MinesweeperGame {
    fn default() -> Self {
        Self::new(1)
    }
}
