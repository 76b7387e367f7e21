//! Sorters compared against `slice::sort` / `slice::sort_unstable`.
//!
//! Run with: cargo bench --bench sort

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use nexus_array::{DynArray, MergeSorter, QuickSorter, SequenceSorter};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

const SIZES: [usize; 3] = [1_000, 10_000, 100_000];

fn random_input(len: usize, range: u64) -> Vec<u64> {
    let mut rng = SmallRng::seed_from_u64(1234567890);
    (0..len).map(|_| rng.random_range(0..range)).collect()
}

// ============================================================================
// Random Input
// ============================================================================

fn bench_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_random");

    for len in SIZES {
        group.throughput(Throughput::Elements(len as u64));
        let input = random_input(len, u64::MAX);

        group.bench_with_input(BenchmarkId::new("quick/three_way", len), &input, |b, input| {
            let sorter = QuickSorter::natural();
            b.iter(|| {
                let mut array = DynArray::from(input.as_slice());
                sorter.sort(&mut array).unwrap();
                black_box(array)
            });
        });

        group.bench_with_input(BenchmarkId::new("quick/hoare", len), &input, |b, input| {
            let sorter = QuickSorter::hoare(u64::cmp);
            b.iter(|| {
                let mut array = DynArray::from(input.as_slice());
                sorter.sort(&mut array).unwrap();
                black_box(array)
            });
        });

        group.bench_with_input(BenchmarkId::new("merge", len), &input, |b, input| {
            let sorter = MergeSorter::natural();
            b.iter(|| {
                let mut array = DynArray::from(input.as_slice());
                sorter.sort(&mut array).unwrap();
                black_box(array)
            });
        });

        group.bench_with_input(BenchmarkId::new("dyn_array/sort", len), &input, |b, input| {
            b.iter(|| {
                let mut array = DynArray::from(input.as_slice());
                array.sort();
                black_box(array)
            });
        });

        group.bench_with_input(BenchmarkId::new("std/sort_unstable", len), &input, |b, input| {
            b.iter(|| {
                let mut vec = input.clone();
                vec.sort_unstable();
                black_box(vec)
            });
        });

        group.bench_with_input(BenchmarkId::new("std/sort", len), &input, |b, input| {
            b.iter(|| {
                let mut vec = input.clone();
                vec.sort();
                black_box(vec)
            });
        });
    }

    group.finish();
}

// ============================================================================
// Few Distinct Keys (three-way partitioning's best case)
// ============================================================================

fn bench_duplicates(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_duplicates");

    let len = 100_000;
    group.throughput(Throughput::Elements(len as u64));
    let input = random_input(len, 8);

    group.bench_function("quick/three_way", |b| {
        let sorter = QuickSorter::natural();
        b.iter(|| {
            let mut vec = input.clone();
            sorter.sort(&mut vec).unwrap();
            black_box(vec)
        });
    });

    group.bench_function("quick/hoare", |b| {
        let sorter = QuickSorter::hoare(u64::cmp);
        b.iter(|| {
            let mut vec = input.clone();
            sorter.sort(&mut vec).unwrap();
            black_box(vec)
        });
    });

    group.bench_function("std/sort_unstable", |b| {
        b.iter(|| {
            let mut vec = input.clone();
            vec.sort_unstable();
            black_box(vec)
        });
    });

    group.finish();
}

criterion_group!(benches, bench_random, bench_duplicates);
criterion_main!(benches);
