//! Snake game behaviour through the public API

use termfolio::core::{SnakeGame, SnakeStep};
use termfolio::types::{
    Direction, GameAction, Point, SNAKE_BOARD_SIZE, SNAKE_TICK_MS, TICK_MS,
};

#[test]
fn test_new_round_layout() {
    let game = SnakeGame::new(1);
    assert_eq!(game.head(), Some(Point::new(10, 10)));
    assert_eq!(game.len(), 1);
    assert_eq!(game.direction(), Direction::Up);
    assert_eq!(game.food(), Some(Point::new(5, 5)));
    assert_eq!(game.score(), 0);
}

#[test]
fn test_moves_once_per_interval() {
    let mut game = SnakeGame::new(1);
    assert_eq!(game.tick(SNAKE_TICK_MS - 1), None);
    assert_eq!(game.tick(1), Some(SnakeStep::Moved));
    assert_eq!(game.head(), Some(Point::new(10, 9)));
    assert_eq!(game.len(), 1);
}

#[test]
fn test_eating_grows_and_moves_food() {
    let mut game = SnakeGame::from_parts(
        vec![Point::new(5, 6)],
        Direction::Up,
        Some(Point::new(5, 5)),
        7,
    );
    assert_eq!(game.step(), SnakeStep::Ate);
    assert_eq!(game.len(), 2);
    assert_eq!(game.score(), 1);

    let food = game.food().expect("food is placed");
    assert!(food.in_bounds(SNAKE_BOARD_SIZE, SNAKE_BOARD_SIZE));
    assert!(!game.contains(food));
}

#[test]
fn test_wall_ends_the_round() {
    let mut game = SnakeGame::from_parts(vec![Point::new(0, 0)], Direction::Up, None, 1);
    assert_eq!(game.step(), SnakeStep::Crashed);
    assert!(game.game_over());
    assert_eq!(game.head(), Some(Point::new(0, 0)));

    assert_eq!(game.step(), SnakeStep::Idle);
    assert_eq!(game.tick(SNAKE_TICK_MS * 4), None);
    assert!(!game.apply_action(GameAction::Left));
}

#[test]
fn test_running_into_the_tail_is_a_crash() {
    // A 2x2 loop heading down into its own tail.
    let body = vec![
        Point::new(5, 5),
        Point::new(6, 5),
        Point::new(6, 6),
        Point::new(5, 6),
    ];
    let mut game = SnakeGame::from_parts(body, Direction::Down, None, 1);
    assert_eq!(game.step(), SnakeStep::Crashed);
    assert!(game.game_over());
}

#[test]
fn test_two_quick_turns_cannot_fold_back() {
    let body = vec![Point::new(10, 10), Point::new(10, 11)];
    let mut game = SnakeGame::from_parts(body, Direction::Up, None, 1);

    assert!(game.apply_action(GameAction::Left));
    // Still heading up as far as the body is concerned.
    assert!(!game.apply_action(GameAction::Down));
    assert_eq!(game.direction(), Direction::Left);

    assert_eq!(game.step(), SnakeStep::Moved);
    assert_eq!(game.head(), Some(Point::new(9, 10)));
    assert!(game.apply_action(GameAction::Down));
}

#[test]
fn test_non_direction_actions_are_ignored() {
    let mut game = SnakeGame::new(1);
    assert!(!game.apply_action(GameAction::Confirm));
    assert!(!game.apply_action(GameAction::Flag));
    assert_eq!(game.direction(), Direction::Up);
}

#[test]
fn test_frame_time_carries_between_moves() {
    let mut game = SnakeGame::from_parts(vec![Point::new(10, 19)], Direction::Up, None, 1);
    let mut moves = 0;
    // 94 frames of 16 ms is 1504 ms: ten full 150 ms intervals.
    for _ in 0..94 {
        if game.tick(TICK_MS).is_some() {
            moves += 1;
        }
    }
    assert_eq!(moves, 10);
    assert_eq!(game.head(), Some(Point::new(10, 9)));
}

#[test]
fn test_filling_the_board_ends_the_round() {
    let side = SNAKE_BOARD_SIZE as i8;
    // Serpentine over every cell; the last one is left for the food.
    let mut path = Vec::new();
    for y in 0..side {
        for i in 0..side {
            let x = if y % 2 == 0 { i } else { side - 1 - i };
            path.push(Point::new(x, y));
        }
    }
    let food = path.pop().unwrap();
    assert_eq!(food, Point::new(0, side - 1));
    path.reverse();
    assert_eq!(path.len(), 399);

    let mut game = SnakeGame::from_parts(path, Direction::Left, Some(food), 1);
    assert_eq!(game.step(), SnakeStep::Ate);
    assert_eq!(game.len(), 400);
    assert_eq!(game.food(), None);
    assert!(game.game_over());
    assert_eq!(game.tick(SNAKE_TICK_MS), None);
}
