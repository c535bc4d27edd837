//! Benchmark for the hash-backed set operations.
//!
//! Run with `--features fxhash` or `--features ahash` to compare hashers.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use slicekit::set::{diff, unique, unique_stable};
use std::hint::black_box;

fn repeating(size: u64) -> Vec<u64> {
    (0..size).map(|index| (index * 7919) % (size / 4 + 1)).collect()
}

// =============================================================================
// unique Benchmark
// =============================================================================

fn benchmark_unique(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("unique");

    for size in [100, 1000, 10000] {
        let values = repeating(size);

        group.bench_with_input(BenchmarkId::new("unique", size), &values, |bencher, values| {
            bencher.iter(|| black_box(unique(black_box(values))));
        });

        group.bench_with_input(
            BenchmarkId::new("unique_stable", size),
            &values,
            |bencher, values| {
                bencher.iter(|| black_box(unique_stable(black_box(values))));
            },
        );

        // Sort and dedup a copy
        group.bench_with_input(BenchmarkId::new("Vec::dedup", size), &values, |bencher, values| {
            bencher.iter(|| {
                let mut copy = black_box(values).clone();
                copy.sort_unstable();
                copy.dedup();
                black_box(copy)
            });
        });
    }

    group.finish();
}

// =============================================================================
// diff Benchmark
// =============================================================================

fn benchmark_diff(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("diff");

    for size in [100, 1000, 10000] {
        let before = repeating(size);
        let after: Vec<u64> = before.iter().map(|value| value + 1).collect();

        group.bench_with_input(
            BenchmarkId::new("diff", size),
            &(before, after),
            |bencher, (before, after)| {
                bencher.iter(|| black_box(diff(black_box(before), black_box(after))));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, benchmark_unique, benchmark_diff);
criterion_main!(benches);
