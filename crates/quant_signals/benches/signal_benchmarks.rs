//! Criterion benchmarks for the indicator suite.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use quant_signals::{momentum_oscillator, trend_stop, volatility_index};

fn synthetic_prices(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| 100.0 + (i as f64 * 0.1).sin() * 5.0 + i as f64 * 0.01)
        .collect()
}

/// Benchmark the oscillator and trend stop across history lengths.
fn bench_indicators(c: &mut Criterion) {
    let mut group = c.benchmark_group("indicators");

    for n in [100, 10_000] {
        let prices = synthetic_prices(n);
        group.bench_with_input(BenchmarkId::new("momentum", n), &prices, |b, p| {
            b.iter(|| momentum_oscillator(black_box(p), 14).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("trend_stop", n), &prices, |b, p| {
            b.iter(|| trend_stop(black_box(p), 0.02, 0.2).unwrap())
        });
    }

    group.finish();
}

fn bench_volatility_index(c: &mut Criterion) {
    let quotes = synthetic_prices(2_000);
    c.bench_function("volatility_index_1000_pairs", |b| {
        b.iter(|| volatility_index(black_box(&quotes), 30.0).unwrap())
    });
}

criterion_group!(benches, bench_indicators, bench_volatility_index);
criterion_main!(benches);
