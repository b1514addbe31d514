//! Minesweeper game behaviour through the public API

use termfolio::core::{MineField, MinesStatus, MinesweeperGame, RevealOutcome, Tile};
use termfolio::types::{GameAction, Point, MINES_BOARD_SIZE, MINES_COUNT};

fn p(x: i8, y: i8) -> Point {
    Point::new(x, y)
}

#[test]
fn test_generated_field_has_ten_mines() {
    for seed in [1, 2, 3, 99, 12345] {
        let game = MinesweeperGame::new(seed);
        assert_eq!(game.field().mine_count(), MINES_COUNT as usize);
        assert_eq!(game.field().revealed_count(), 0);
        assert_eq!(game.cursor(), p(0, 0));
    }
}

#[test]
fn test_counts_cover_eight_neighbours() {
    let field = MineField::from_mines(&[p(1, 1), p(2, 2)]);
    assert_eq!(field.get(p(0, 0)).map(|c| c.tile), Some(Tile::Clear(1)));
    assert_eq!(field.get(p(1, 2)).map(|c| c.tile), Some(Tile::Clear(2)));
    assert_eq!(field.get(p(2, 2)).map(|c| c.tile), Some(Tile::Mine));
}

#[test]
fn test_zero_cascade_stops_at_numbers() {
    // A wall of mines down column 4.
    let mines: Vec<Point> = (0..8).map(|y| p(4, y)).collect();
    let mut game = MinesweeperGame::with_field(MineField::from_mines(&mines));

    assert_eq!(game.reveal(p(0, 0)), RevealOutcome::Opened { cells: 32 });
    assert!(game.field().get(p(3, 7)).is_some_and(|c| c.revealed));
    assert!(game.field().get(p(5, 0)).is_some_and(|c| !c.revealed));
    assert_eq!(game.status(), MinesStatus::Playing);
}

#[test]
fn test_flag_then_reveal_does_nothing() {
    let mut game = MinesweeperGame::with_field(MineField::from_mines(&[p(7, 7)]));
    assert!(game.toggle_flag(p(2, 2)));
    assert_eq!(game.reveal(p(2, 2)), RevealOutcome::Ignored);
    assert_eq!(game.field().revealed_count(), 0);
}

#[test]
fn test_flagged_cells_survive_the_cascade() {
    let mut game = MinesweeperGame::with_field(MineField::from_mines(&[p(7, 7)]));
    game.toggle_flag(p(3, 3));

    assert_eq!(game.reveal(p(0, 0)), RevealOutcome::Opened { cells: 62 });
    assert!(game.field().get(p(3, 3)).is_some_and(|c| !c.revealed && c.flagged));

    assert!(game.toggle_flag(p(3, 3)));
    assert_eq!(game.reveal(p(3, 3)), RevealOutcome::Cleared { cells: 1 });
    assert_eq!(game.status(), MinesStatus::Won);
}

#[test]
fn test_mine_loses_and_freezes_the_board() {
    let mut game = MinesweeperGame::with_field(MineField::from_mines(&[p(0, 0)]));
    assert!(game.apply_action(GameAction::Confirm));
    assert_eq!(game.status(), MinesStatus::Lost);
    assert!(game.field().get(p(0, 0)).is_some_and(|c| c.revealed));

    assert!(!game.apply_action(GameAction::Right));
    assert!(!game.apply_action(GameAction::Flag));
    assert_eq!(game.cursor(), p(0, 0));
}

#[test]
fn test_revealed_cells_cannot_be_flagged() {
    let mut game = MinesweeperGame::with_field(MineField::from_mines(&[p(0, 0), p(7, 7)]));
    game.reveal(p(1, 1));
    assert!(!game.toggle_flag(p(1, 1)));
}

#[test]
fn test_cursor_clamps_at_edges() {
    let mut game = MinesweeperGame::new(3);
    assert!(!game.apply_action(GameAction::Up));
    assert!(!game.apply_action(GameAction::Left));
    for _ in 0..MINES_BOARD_SIZE + 2 {
        game.apply_action(GameAction::Right);
        game.apply_action(GameAction::Down);
    }
    let edge = MINES_BOARD_SIZE as i8 - 1;
    assert_eq!(game.cursor(), p(edge, edge));
}
