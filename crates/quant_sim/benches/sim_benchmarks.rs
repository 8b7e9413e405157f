//! Criterion benchmarks for GBM path simulation.
//!
//! Compares sequential and rayon-parallel runs across trial counts.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use quant_sim::{GbmParams, GbmPathSimulator, NormalSampler, SimulationConfig};

fn simulator(trials: usize, parallel: bool) -> GbmPathSimulator {
    let config = SimulationConfig::builder()
        .steps(252)
        .trials(trials)
        .seed(42)
        .parallel(parallel)
        .build()
        .expect("valid benchmark config");
    GbmPathSimulator::new(config)
}

/// Benchmark path simulation with and without the rayon pool.
fn bench_gbm_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("gbm_paths");
    let params = GbmParams::new(100.0, 0.0002, 0.01);

    for trials in [100, 1_000, 10_000] {
        let sequential = simulator(trials, false);
        group.bench_with_input(
            BenchmarkId::new("sequential", trials),
            &sequential,
            |b, sim| b.iter(|| sim.simulate(black_box(params)).unwrap()),
        );

        let parallel = simulator(trials, true);
        group.bench_with_input(
            BenchmarkId::new("parallel", trials),
            &parallel,
            |b, sim| b.iter(|| sim.simulate(black_box(params)).unwrap()),
        );
    }

    group.finish();
}

/// Benchmark batch normal generation.
fn bench_normal_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("normal_fill");

    for size in [1_000, 100_000] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let mut sampler = NormalSampler::from_seed(7);
            let mut buffer = vec![0.0; size];
            b.iter(|| sampler.fill_standard_normal(black_box(&mut buffer)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_gbm_paths, bench_normal_fill);
criterion_main!(benches);
