use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gomoku::board::{Board, Pos};
use gomoku::eval::evaluate;
use gomoku::rules::is_winning;
use gomoku::search::Searcher;

fn midgame_board() -> Board {
    let mut board = Board::new();
    for (r, c) in [(7, 7), (7, 8), (8, 7), (6, 6), (8, 8), (9, 9), (6, 8)] {
        board.apply_move(Pos::new(r, c));
    }
    board
}

fn search_benchmark(c: &mut Criterion) {
    let board = midgame_board();

    for depth in [1u8, 2] {
        c.bench_function(&format!("search_depth_{}", depth), |b| {
            b.iter(|| {
                let mut board = board.clone();
                let mut searcher = Searcher::new();
                // prevent the result from being optimized away
                black_box(searcher.best_move(&mut board, black_box(depth)))
            })
        });
    }
}

fn eval_benchmark(c: &mut Criterion) {
    let board = midgame_board();
    let side = board.side_to_move();

    c.bench_function("evaluate", |b| b.iter(|| black_box(evaluate(black_box(&board), side))));
    c.bench_function("is_winning", |b| {
        b.iter(|| black_box(is_winning(black_box(&board), board.opponent())))
    });
}

criterion_group!(benches, search_benchmark, eval_benchmark);
criterion_main!(benches);
