//! Traversal construction benchmark.
//!
//! Measures the cost of producing each traversal order from a collection of
//! pseudo-random elements, and of walking a produced traversal by cursor
//! versus by iterator.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use ordered_collection::collection::{OrderedCollection, TraversalOrder};
use std::hint::black_box;

const SIZES: [u64; 3] = [100, 1000, 10000];

/// Builds a collection with a deterministic, unsorted element sequence.
fn generate_collection(size: u64) -> OrderedCollection<u64> {
    (0..size)
        .map(|index| index.wrapping_mul(2_654_435_761) % (size * 4))
        .collect()
}

fn benchmark_produce(criterion: &mut Criterion) {
    for order in TraversalOrder::ALL {
        let mut group = criterion.benchmark_group(format!("produce_{}", order.name()));

        for size in SIZES {
            let collection = generate_collection(size);
            group.bench_with_input(BenchmarkId::new("traverse", size), &size, |bencher, _| {
                bencher.iter(|| black_box(collection.traverse(black_box(order))));
            });
        }

        group.finish();
    }
}

fn benchmark_walk(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("walk_middle_out");

    for size in SIZES {
        let traversal = generate_collection(size).middle_out_order();

        group.bench_with_input(BenchmarkId::new("cursor", size), &size, |bencher, _| {
            bencher.iter(|| {
                let mut sum = 0u64;
                let mut cursor = traversal.begin();
                while let Ok(value) = cursor.current() {
                    sum = sum.wrapping_add(*value);
                    cursor.advance();
                }
                black_box(sum)
            });
        });

        group.bench_with_input(BenchmarkId::new("iterator", size), &size, |bencher, _| {
            bencher.iter(|| {
                black_box(
                    traversal
                        .iter()
                        .fold(0u64, |sum, value| sum.wrapping_add(*value)),
                )
            });
        });
    }

    group.finish();
}

fn benchmark_remove(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("remove");

    for size in SIZES {
        let collection = generate_collection(size);
        let target = collection.as_slice()[collection.len() / 2];
        group.bench_with_input(BenchmarkId::new("middle", size), &size, |bencher, _| {
            bencher.iter_batched(
                || collection.clone(),
                |mut collection| black_box(collection.remove(&target)),
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_produce, benchmark_walk, benchmark_remove);
criterion_main!(benches);
