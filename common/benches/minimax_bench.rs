use criterion::{criterion_group, criterion_main, Criterion};
use common::games::SessionRng;
use common::games::tictactoe::{best_move, calculate_move, Board, Difficulty, Mark};

fn mid_game_board() -> Board {
    Board::from_cells([
        Mark::X, Mark::Empty, Mark::Empty,
        Mark::Empty, Mark::O, Mark::Empty,
        Mark::Empty, Mark::Empty, Mark::X,
    ])
}

fn bench_best_move_empty_board() {
    best_move(&Board::new());
}

fn bench_best_move_mid_game() {
    best_move(&mid_game_board());
}

fn bench_full_game() {
    let mut board = Board::new();
    let mut current_mark = Mark::O;
    while let Some(index) = best_move(&board) {
        board = board.with_mark(index, current_mark);
        current_mark = current_mark.opponent().unwrap();
        if common::games::tictactoe::check_outcome(&board).is_over() {
            break;
        }
    }
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    group.bench_function("best_move_empty", |b| {
        b.iter(bench_best_move_empty_board)
    });

    group.bench_function("best_move_mid_game", |b| {
        b.iter(bench_best_move_mid_game)
    });

    group.bench_function("full_game", |b| {
        b.iter(bench_full_game)
    });

    let board = mid_game_board();
    let mut session_rng = SessionRng::new(42);
    group.bench_function("medium_move_mid_game", |b| {
        b.iter(|| calculate_move(Difficulty::Medium, &board, &mut session_rng))
    });

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
