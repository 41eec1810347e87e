//! Benchmarks for conversion and analysis.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use game_analyzer::analysis::{
    mixed_strategy_dominance, rationalizability, AnalysisConfig, AnalysisReport,
};
use game_analyzer::extensive::extensive_to_normal_form;
use game_analyzer::games::{players, prisoners_dilemma, random_bimatrix, random_game_tree};

fn pd_conversion_benchmark(c: &mut Criterion) {
    let tree = prisoners_dilemma().unwrap();
    let players = players();

    c.bench_function("pd_to_normal_form", |b| {
        b.iter(|| extensive_to_normal_form(black_box(&tree), &players).unwrap())
    });
}

fn random_conversion_benchmark(c: &mut Criterion) {
    let tree = random_game_tree(8, 8, -9..=9, 42).unwrap();
    let players = players();

    c.bench_function("random_8x8_to_normal_form", |b| {
        b.iter(|| extensive_to_normal_form(black_box(&tree), &players).unwrap())
    });
}

fn mixed_dominance_benchmark(c: &mut Criterion) {
    let game = random_bimatrix(3, 3, -9..=9, 42).unwrap();
    let players = players();
    let config = AnalysisConfig::default();

    c.bench_function("mixed_dominance_3x3", |b| {
        b.iter(|| mixed_strategy_dominance(black_box(&game), &players, &config).unwrap())
    });
}

fn elimination_benchmark(c: &mut Criterion) {
    let game = random_bimatrix(10, 10, -9..=9, 42).unwrap();
    let players = players();
    let config = AnalysisConfig::default();

    c.bench_function("rationalizability_10x10", |b| {
        b.iter(|| rationalizability(black_box(&game), &players, &config).unwrap())
    });
}

fn full_report_benchmark(c: &mut Criterion) {
    let game = random_bimatrix(3, 3, -9..=9, 42).unwrap();
    let config = AnalysisConfig::default();

    c.bench_function("full_report_3x3", |b| {
        b.iter(|| AnalysisReport::analyze(black_box(&game), &config).unwrap())
    });
}

criterion_group!(
    benches,
    pd_conversion_benchmark,
    random_conversion_benchmark,
    mixed_dominance_benchmark,
    elimination_benchmark,
    full_report_benchmark
);
criterion_main!(benches);
