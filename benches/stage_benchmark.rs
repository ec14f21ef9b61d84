//! Benchmarks for stage and shop generation and move generation.
//!
//! Stage generation runs once per battle and is the hot path of `sweep`.

#![allow(missing_docs)]

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use gambit::game::{IdSequence, UnitKind, gen_shop, gen_stage, victory_shop_rng};
use gambit::sweep::{SweepConfig, run_sweep};
use gambit::{Position, RulesEngine};

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

fn bench_gen_stage(c: &mut Criterion) {
    let army = [UnitKind::Knight, UnitKind::Bishop, UnitKind::Rook, UnitKind::Pawn];

    c.bench_function("gen_stage_round_3", |b| {
        b.iter(|| gen_stage(black_box(42), black_box(3), black_box(&army)));
    });

    c.bench_function("gen_stage_round_12", |b| {
        b.iter(|| gen_stage(black_box(42), black_box(12), black_box(&army)));
    });
}

fn bench_gen_shop(c: &mut Criterion) {
    c.bench_function("gen_shop", |b| {
        b.iter(|| {
            let mut rng = victory_shop_rng(black_box(42), black_box(5));
            gen_shop(&mut rng, &mut IdSequence::new())
        });
    });
}

fn bench_legal_moves(c: &mut Criterion) {
    let start = Position::starting();
    let Ok(kiwipete) = Position::from_fen(KIWIPETE) else {
        return;
    };

    c.bench_function("legal_moves_start", |b| {
        b.iter(|| black_box(&start).legal_moves());
    });

    c.bench_function("legal_moves_kiwipete", |b| {
        b.iter(|| black_box(&kiwipete).legal_moves());
    });
}

fn bench_sweep(c: &mut Criterion) {
    // 100 seeds x 10 rounds, parallel over seeds
    let config = SweepConfig {
        base_seed: 1,
        seeds: 100,
        rounds: 10,
        army: vec![UnitKind::Knight, UnitKind::Rook],
    };

    c.bench_function("sweep_100x10", |b| {
        b.iter(|| run_sweep(black_box(&config)));
    });
}

criterion_group!(benches, bench_gen_stage, bench_gen_shop, bench_legal_moves, bench_sweep);
criterion_main!(benches);
