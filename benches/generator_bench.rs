//! Benchmarks for Showcase dataset generation and filtering
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use showcase::data::*;

fn bench_generators(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");

    for size in [100, 1000, 10000] {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("scatter_{}", size), |b| {
            let mut generator = DataGenerator::seeded(1);
            b.iter(|| generator.scatter(black_box(size)))
        });

        group.bench_function(format!("time_series_{}", size), |b| {
            let mut generator = DataGenerator::seeded(1);
            b.iter(|| generator.time_series(black_box(size)).unwrap())
        });
    }

    group.finish();
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter");

    for size in [1000, 10000] {
        let points = DataGenerator::seeded(2).scatter(size);
        let filters = Filters::new(50.0).category("A");

        group.throughput(Throughput::Elements(size as u64));
        group.bench_function(format!("scatter_{}", size), |b| {
            b.iter(|| filters.apply(black_box(points.clone())))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_generators, bench_filter);
criterion_main!(benches);
