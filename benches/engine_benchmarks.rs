//! Benchmarks for chess engine performance.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use alphabeta_chess::board::{best_move_with_rng, evaluate, Position};

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
const MIDDLEGAME: &str = "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4";

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");

    let mut startpos = Position::new();
    for depth in 1..=3 {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| startpos.perft(black_box(depth)))
        });
    }

    let mut kiwipete = Position::from_fen(KIWIPETE);
    for depth in 1..=2 {
        group.bench_with_input(BenchmarkId::new("kiwipete", depth), &depth, |b, &depth| {
            b.iter(|| kiwipete.perft(black_box(depth)))
        });
    }

    group.finish();
}

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    let mut startpos = Position::new();
    group.bench_function("startpos", |b| b.iter(|| black_box(startpos.legal_moves())));

    let mut middlegame = Position::from_fen(MIDDLEGAME);
    group.bench_function("middlegame", |b| {
        b.iter(|| black_box(middlegame.legal_moves()))
    });

    let mut kiwipete = Position::from_fen(KIWIPETE);
    group.bench_function("kiwipete", |b| b.iter(|| black_box(kiwipete.legal_moves())));

    let kiwipete = Position::from_fen(KIWIPETE);
    group.bench_function("kiwipete_pseudo", |b| {
        b.iter(|| black_box(kiwipete.pseudo_legal_moves()))
    });

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(10);

    let middlegame = Position::from_fen(MIDDLEGAME);
    for concurrency in [1, 4] {
        group.bench_with_input(
            BenchmarkId::new("middlegame_depth3", concurrency),
            &concurrency,
            |b, &concurrency| {
                b.iter(|| {
                    let mut rng = StdRng::seed_from_u64(0);
                    best_move_with_rng(black_box(&middlegame), 3, concurrency, &mut rng)
                })
            },
        );
    }

    group.finish();
}

fn bench_eval(c: &mut Criterion) {
    let mut group = c.benchmark_group("eval");

    let startpos = Position::new();
    group.bench_function("startpos", |b| b.iter(|| evaluate(black_box(&startpos))));

    let kiwipete = Position::from_fen(KIWIPETE);
    group.bench_function("kiwipete", |b| b.iter(|| evaluate(black_box(&kiwipete))));

    group.finish();
}

criterion_group!(
    benches,
    bench_perft,
    bench_movegen,
    bench_search,
    bench_eval
);
criterion_main!(benches);
