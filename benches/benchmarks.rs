use criterion::{criterion_group, criterion_main, Criterion};
use packed_four::game::Game;
use packed_four::PackedBoard;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::hint::black_box;

/// Play ~12 random moves on a fresh board to create a realistic mid-game position.
/// Uses a fixed seed for reproducibility across benchmark runs.
fn setup_midgame() -> PackedBoard {
    let mut board = PackedBoard::new();
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..12 {
        let moves = board.legal_moves();
        let column = *moves.choose(&mut rng).unwrap();
        board.apply_move(column).unwrap();
    }
    board
}

// ---------------------------------------------------------------------------
// Microbenchmarks
// ---------------------------------------------------------------------------

fn bench_column_height(c: &mut Criterion) {
    let board = setup_midgame();
    c.bench_function("column_height", |b| {
        b.iter(|| {
            (0..packed_four::COLUMNS)
                .map(|column| black_box(&board).column_height(column))
                .sum::<u8>()
        })
    });
}

fn bench_apply_move(c: &mut Criterion) {
    let board = setup_midgame();
    let column = board.legal_moves()[0];
    c.bench_function("apply_move", |b| {
        b.iter_batched(
            || board,
            |mut board| {
                black_box(board.apply_move(column).unwrap());
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

fn bench_is_winning_cell(c: &mut Criterion) {
    let board = setup_midgame();
    let column = (0..packed_four::COLUMNS)
        .find(|&column| board.column_height(column) > 0)
        .unwrap();
    let row = board.column_height(column) as usize - 1;
    c.bench_function("is_winning_cell", |b| {
        b.iter(|| black_box(board.is_winning_cell(column, row)))
    });
}

fn bench_decode_cells(c: &mut Criterion) {
    let board = setup_midgame();
    c.bench_function("decode_cells", |b| b.iter(|| black_box(board.cells())));
}

// ---------------------------------------------------------------------------
// Integration benchmarks
// ---------------------------------------------------------------------------

fn bench_random_playout(c: &mut Criterion) {
    c.bench_function("random_playout", |b| {
        b.iter(|| {
            let mut game = Game::new();
            let mut rng = StdRng::seed_from_u64(123);
            while !game.is_over() {
                let moves = game.legal_moves();
                let column = moves.choose(&mut rng).unwrap();
                game.make_move(*column).unwrap();
            }
            black_box(game.outcome())
        })
    });
}

criterion_group!(
    benches,
    bench_column_height,
    bench_apply_move,
    bench_is_winning_cell,
    bench_decode_cells,
    bench_random_playout,
);
criterion_main!(benches);
