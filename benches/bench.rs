use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use std::time::Duration;
use sudoku_solver::solver::board::Board;
use sudoku_solver::solver::engine::Backtracker;
use sudoku_solver::solver::presets;
use sudoku_solver::solver::selection::MinCandidates;

fn bench_presets(c: &mut Criterion) {
    let mut group = c.benchmark_group("presets");
    group.measurement_time(Duration::from_secs(10));

    group.bench_function("basic/row-major", |b| {
        b.iter(|| Backtracker::new(black_box(presets::BASIC)).solve());
    });

    group.bench_function("basic/min-candidates", |b| {
        b.iter(|| Backtracker::with_selector(black_box(presets::BASIC), MinCandidates).solve());
    });

    group.bench_function("tricky/row-major", |b| {
        b.iter(|| Backtracker::new(black_box(presets::TRICKY)).solve());
    });

    group.bench_function("tricky/min-candidates", |b| {
        b.iter(|| Backtracker::with_selector(black_box(presets::TRICKY), MinCandidates).solve());
    });

    group.finish();
}

fn bench_empty_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("empty-grid");

    group.bench_function("row-major", |b| {
        b.iter(|| Backtracker::new(black_box(Board::empty())).solve());
    });

    group.bench_function("min-candidates", |b| {
        b.iter(|| Backtracker::with_selector(black_box(Board::empty()), MinCandidates).solve());
    });

    group.finish();
}

criterion_group!(benches, bench_presets, bench_empty_grid);
criterion_main!(benches);
