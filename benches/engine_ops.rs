use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use game_1024::engine::{oracle, slide, Board, Move, Spawner};
use game_1024::Game;
use rand::{rngs::StdRng, SeedableRng};
use std::hint::black_box;

fn corpus() -> Vec<Board> {
    let mut rng = StdRng::seed_from_u64(42);
    let spawner = Spawner::default();
    let mut boards = Vec::new();
    // Empty and two-tile starts
    let mut b = Board::new(4, 4).unwrap();
    boards.push(b.clone());
    spawner.place_random(&mut b, &mut rng).unwrap();
    spawner.place_random(&mut b, &mut rng).unwrap();
    boards.push(b.clone());
    // Derive a variety of densities deterministically
    let seq = [Move::Left, Move::Up, Move::Right, Move::Down];
    for i in 0..20 {
        if slide::compact(&mut b, seq[i % seq.len()]) {
            spawner.place_random(&mut b, &mut rng).unwrap();
        }
        boards.push(b.clone());
    }
    boards
}

fn bench_compact(c: &mut Criterion) {
    for dir in Move::ALL {
        c.bench_function(&format!("compact/{dir}"), |bch| {
            let boards = corpus();
            bch.iter_batched(
                || boards.clone(),
                |mut boards| {
                    let mut moved = 0u32;
                    for bd in &mut boards { moved += slide::compact(bd, dir) as u32; }
                    black_box(moved)
                },
                BatchSize::SmallInput,
            )
        });
    }
}

fn bench_game_slide(c: &mut Criterion) {
    c.bench_function("game/slide_cycle", |bch| {
        bch.iter_batched(
            || {
                let mut g = Game::seeded(4, 4, 2048, 9).unwrap();
                g.reset().unwrap();
                g
            },
            |mut g| {
                for dir in [Move::Left, Move::Down, Move::Right, Move::Up].repeat(16) {
                    g.slide(dir).unwrap();
                }
                black_box(g.history_len())
            },
            BatchSize::SmallInput,
        )
    });
    c.bench_function("game/slide_undo", |bch| {
        let mut g = Game::seeded(4, 4, 2048, 3).unwrap();
        g.reset().unwrap();
        bch.iter(|| {
            let changed = g.slide(Move::Left).unwrap();
            g.undo().unwrap();
            black_box(changed)
        })
    });
}

fn bench_oracle(c: &mut Criterion) {
    c.bench_function("oracle/has_move_left", |bch| {
        let boards = corpus();
        bch.iter(|| boards.iter().filter(|bd| oracle::has_move_left(bd)).count())
    });
    c.bench_function("oracle/available_moves", |bch| {
        let boards = corpus();
        bch.iter(|| boards.iter().map(|bd| oracle::available_moves(bd).len()).sum::<usize>())
    });
}

criterion_group!(engine_ops, bench_compact, bench_game_slide, bench_oracle);
criterion_main!(engine_ops);
