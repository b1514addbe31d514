//! Snake game state
//!
//! The snake lives on a 20x20 grid and advances one cell every
//! [`SNAKE_TICK_MS`]. Body cells are stored head first.

use std::collections::VecDeque;

use crate::rng::SimpleRng;
use crate::types::{
    Direction, GameAction, Point, SNAKE_BOARD_SIZE, SNAKE_FIRST_FOOD, SNAKE_START, SNAKE_TICK_MS,
};

const CELL_COUNT: usize = (SNAKE_BOARD_SIZE as usize) * (SNAKE_BOARD_SIZE as usize);

/// Lifecycle of a snake round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnakeStatus {
    Running,
    GameOver,
}

/// Result of a single move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnakeStep {
    /// Moved one cell, tail dropped
    Moved,
    /// Moved onto the food and grew by one
    Ate,
    /// Hit a wall or the body
    Crashed,
    /// Game already over; nothing happened
    Idle,
}

#[derive(Debug, Clone)]
pub struct SnakeGame {
    body: VecDeque<Point>,
    direction: Direction,
    /// Direction of the last completed move; reversal checks use this.
    moved: Direction,
    food: Option<Point>,
    score: u32,
    status: SnakeStatus,
    rng: SimpleRng,
    step_timer_ms: u32,
}

impl SnakeGame {
    /// A fresh round: one segment at the center heading up, food at (5, 5).
    pub fn new(seed: u32) -> Self {
        Self::from_parts(vec![SNAKE_START], Direction::Up, Some(SNAKE_FIRST_FOOD), seed)
    }

    /// Build a round from explicit parts (head first).
    pub fn from_parts(body: Vec<Point>, direction: Direction, food: Option<Point>, seed: u32) -> Self {
        Self {
            body: body.into_iter().collect(),
            direction,
            moved: direction,
            food,
            score: 0,
            status: SnakeStatus::Running,
            rng: SimpleRng::new(seed),
            step_timer_ms: 0,
        }
    }

    pub fn body(&self) -> impl Iterator<Item = Point> + '_ {
        self.body.iter().copied()
    }

    pub fn head(&self) -> Option<Point> {
        self.body.front().copied()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn contains(&self, p: Point) -> bool {
        self.body.contains(&p)
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn food(&self) -> Option<Point> {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn status(&self) -> SnakeStatus {
        self.status
    }

    pub fn game_over(&self) -> bool {
        self.status == SnakeStatus::GameOver
    }

    /// Change heading. Returns false when the turn would fold the snake back
    /// onto its neck.
    pub fn turn(&mut self, dir: Direction) -> bool {
        if dir.is_opposite(self.moved) {
            return false;
        }
        self.direction = dir;
        true
    }

    /// Advance the snake by one cell.
    pub fn step(&mut self) -> SnakeStep {
        if self.status == SnakeStatus::GameOver {
            return SnakeStep::Idle;
        }
        let Some(head) = self.head() else {
            return SnakeStep::Idle;
        };

        let next = head.step(self.direction);
        if !next.in_bounds(SNAKE_BOARD_SIZE, SNAKE_BOARD_SIZE) || self.contains(next) {
            self.status = SnakeStatus::GameOver;
            tracing::info!(score = self.score, length = self.len(), "snake crashed");
            return SnakeStep::Crashed;
        }

        self.moved = self.direction;
        self.body.push_front(next);

        if self.food == Some(next) {
            self.score += 1;
            self.place_food();
            return SnakeStep::Ate;
        }

        self.body.pop_back();
        SnakeStep::Moved
    }

    /// Accumulate elapsed time and move once per [`SNAKE_TICK_MS`].
    pub fn tick(&mut self, elapsed_ms: u32) -> Option<SnakeStep> {
        if self.status == SnakeStatus::GameOver {
            return None;
        }
        self.step_timer_ms += elapsed_ms;
        if self.step_timer_ms < SNAKE_TICK_MS {
            return None;
        }
        self.step_timer_ms -= SNAKE_TICK_MS;
        Some(self.step())
    }

    /// Apply a key action. Exit is handled by the session.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        if self.status == SnakeStatus::GameOver {
            return false;
        }
        match action.direction() {
            Some(dir) => self.turn(dir),
            None => false,
        }
    }

    /// Move the food to a uniformly random free cell.
    fn place_food(&mut self) {
        let side = SNAKE_BOARD_SIZE as usize;
        let mut occupied = [false; CELL_COUNT];
        for p in &self.body {
            occupied[p.y as usize * side + p.x as usize] = true;
        }

        let free = CELL_COUNT - occupied.iter().filter(|o| **o).count();
        if free == 0 {
            self.food = None;
            self.status = SnakeStatus::GameOver;
            tracing::info!(score = self.score, "snake filled the board");
            return;
        }

        let pick = self.rng.next_range(free as u32) as usize;
        self.food = occupied
            .iter()
            .enumerate()
            .filter(|(_, o)| !**o)
            .nth(pick)
            .map(|(i, _)| Point::new((i % side) as i8, (i / side) as i8));
    }
}

impl Default for SnakeGame {
    fn default() -> Self {
        Self::new(1)
    }
}
