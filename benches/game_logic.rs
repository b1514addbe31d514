use criterion::{black_box, criterion_group, criterion_main, Criterion};
use termfolio::core::{
    AppConfig, Board, MineField, MinesweeperGame, SnakeGame, TerminalSession, TetrisGame,
};
use termfolio::term::{FrameBuffer, SessionView, Viewport};
use termfolio::types::{PieceKind, Point, TICK_MS};

fn bench_snake_tick(c: &mut Criterion) {
    let mut game = SnakeGame::new(12345);

    c.bench_function("snake_tick_16ms", |b| {
        b.iter(|| {
            if game.game_over() {
                game = SnakeGame::new(12345);
            }
            game.tick(black_box(TICK_MS));
        })
    });
}

fn bench_tetris_tick(c: &mut Criterion) {
    let mut game = TetrisGame::new(12345);

    c.bench_function("tetris_tick_16ms", |b| {
        b.iter(|| {
            if game.game_over() {
                game = TetrisGame::new(12345);
            }
            game.tick(black_box(TICK_MS));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            // Fill bottom 4 rows
            for y in 16..20 {
                for x in 0..10 {
                    board.set(x, y, Some(PieceKind::I));
                }
            }
            board.clear_full_rows();
        })
    });
}

fn bench_flood_reveal(c: &mut Criterion) {
    let field = MineField::from_mines(&[Point::new(7, 7)]);

    c.bench_function("minesweeper_flood_reveal", |b| {
        b.iter(|| {
            let mut game = MinesweeperGame::with_field(field.clone());
            game.reveal(black_box(Point::new(0, 0)));
        })
    });
}

fn bench_shell_render(c: &mut Criterion) {
    let mut session = TerminalSession::new(&AppConfig {
        skip_loader: true,
        ..AppConfig::default()
    });
    for cmd in ["help", "about", "experience"] {
        session.run_command(cmd);
        session.flush_typing();
    }
    let view = SessionView::default();
    let viewport = Viewport::new(120, 40);
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);

    c.bench_function("shell_render_120x40", |b| {
        b.iter(|| {
            view.render_into(black_box(&session), viewport, &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_snake_tick,
    bench_tetris_tick,
    bench_line_clear,
    bench_flood_reveal,
    bench_shell_render
);
criterion_main!(benches);
