//! Criterion benchmarks for the π estimation kernel.
//!
//! Benchmarks cover:
//! - Raw sampling throughput (hit-counting loop)
//! - Sequential estimation at increasing budgets
//! - Parallel estimation at increasing budgets and worker counts
//!
//! The sequential/parallel pairs at equal budgets are the speedup
//! measurement this crate exists for.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use quadrant_core::mc::{count_hits, PiEstimator, SimulationConfig};
use quadrant_core::rng::SamplerRng;

/// Seeded estimator for a fixed benchmark configuration.
fn bench_estimator(n_samples: u64, n_workers: Option<usize>) -> PiEstimator {
    let mut builder = SimulationConfig::builder().n_samples(n_samples).seed(42);
    if let Some(n_workers) = n_workers {
        builder = builder.n_workers(n_workers);
    }
    PiEstimator::new(builder.build().unwrap()).unwrap()
}

/// Benchmark the raw hit-counting loop (foundation for both paths).
fn bench_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("sampling");

    for n_samples in [1_000u64, 10_000, 100_000] {
        group.bench_with_input(
            BenchmarkId::new("count_hits", n_samples),
            &n_samples,
            |b, &n| {
                let mut rng = SamplerRng::from_seed(42);
                b.iter(|| black_box(count_hits(&mut rng, n)));
            },
        );
    }

    group.finish();
}

/// Benchmark sequential estimation with varying sample budgets.
fn bench_sequential(c: &mut Criterion) {
    let mut group = c.benchmark_group("estimate_sequential");
    group.sample_size(20);

    for n_samples in [100_000u64, 1_000_000, 10_000_000] {
        group.bench_with_input(
            BenchmarkId::from_parameter(n_samples),
            &n_samples,
            |b, &n| {
                let estimator = bench_estimator(n, None);
                b.iter(|| black_box(estimator.run_sequential()));
            },
        );
    }

    group.finish();
}

/// Benchmark parallel estimation with varying sample budgets.
fn bench_parallel(c: &mut Criterion) {
    let mut group = c.benchmark_group("estimate_parallel");
    group.sample_size(20);

    for n_samples in [100_000u64, 1_000_000, 10_000_000] {
        group.bench_with_input(
            BenchmarkId::from_parameter(n_samples),
            &n_samples,
            |b, &n| {
                let estimator = bench_estimator(n, None);
                b.iter(|| black_box(estimator.run_parallel().unwrap()));
            },
        );
    }

    group.finish();
}

/// Benchmark parallel scaling across explicit worker counts.
fn bench_worker_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("worker_scaling");
    group.sample_size(20);

    let n_samples = 1_000_000u64;
    for n_workers in [1usize, 2, 4, 8] {
        group.bench_with_input(
            BenchmarkId::new("workers", n_workers),
            &n_workers,
            |b, &w| {
                let estimator = bench_estimator(n_samples, Some(w));
                b.iter(|| black_box(estimator.run_parallel().unwrap()));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_sampling,
    bench_sequential,
    bench_parallel,
    bench_worker_scaling
);
criterion_main!(benches);
