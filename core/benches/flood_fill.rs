use std::hint::black_box;

use bombs_core::*;
use criterion::{BatchSize, Criterion, criterion_group, criterion_main};

const SIZES: [(Coord, CellCount); 3] = [(10, 30), (64, 400), (255, 6000)];

fn placement(c: &mut Criterion) {
    let mut group = c.benchmark_group("placement");
    for (side, mines) in SIZES {
        group.bench_function(format!("{side}x{side}/{mines}"), |b| {
            let mut seed = 0;
            b.iter_batched(
                || {
                    seed += 1;
                    (Board::new(side, side, mines).unwrap(), seed)
                },
                |(mut board, seed)| {
                    board.place_mines((side / 2, side / 2), seed).unwrap();
                    black_box(board)
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn open_board(c: &mut Criterion) {
    let mut group = c.benchmark_group("flood_fill");
    for (side, _) in SIZES {
        // no mines, a single reveal floods the whole board
        group.bench_function(format!("{side}x{side}/empty"), |b| {
            b.iter_batched(
                || {
                    let mut board = Board::new(side, side, 0).unwrap();
                    board.place_mines((0, 0), 0).unwrap();
                    board
                },
                |mut board| black_box(board.reveal((side - 1, side - 1)).unwrap()),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, placement, open_board);
criterion_main!(benches);
