//! Append and middle-insert paths compared against `Vec`.
//!
//! Run with: cargo bench --bench push

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use nexus_array::DynArray;

const COUNT: usize = 100_000;
const INSERTS: usize = 2_000;

// ============================================================================
// Push
// ============================================================================

fn bench_push(c: &mut Criterion) {
    let mut group = c.benchmark_group("push");
    group.throughput(Throughput::Elements(COUNT as u64));

    group.bench_function("dyn_array/grow", |b| {
        b.iter(|| {
            let mut array = DynArray::new();
            for i in 0..COUNT as u64 {
                array.push(black_box(i)).unwrap();
            }
            black_box(array)
        });
    });

    group.bench_function("vec/grow", |b| {
        b.iter(|| {
            let mut vec = Vec::new();
            for i in 0..COUNT as u64 {
                vec.push(black_box(i));
            }
            black_box(vec)
        });
    });

    // Pre-allocate ONCE, reuse via clear()
    let mut array = DynArray::with_capacity(COUNT).unwrap();
    group.bench_function("dyn_array/preallocated", |b| {
        b.iter(|| {
            for i in 0..COUNT as u64 {
                array.push(black_box(i)).unwrap();
            }
            array.clear();
        });
    });

    let mut vec = Vec::with_capacity(COUNT);
    group.bench_function("vec/preallocated", |b| {
        b.iter(|| {
            for i in 0..COUNT as u64 {
                vec.push(black_box(i));
            }
            vec.clear();
        });
    });

    group.finish();
}

// ============================================================================
// Insert at front (worst-case shift)
// ============================================================================

fn bench_insert_front(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_front");
    group.throughput(Throughput::Elements(INSERTS as u64));

    group.bench_function("dyn_array", |b| {
        b.iter(|| {
            let mut array = DynArray::with_capacity(INSERTS).unwrap();
            for i in 0..INSERTS as u64 {
                array.insert(0, black_box(i)).unwrap();
            }
            black_box(array)
        });
    });

    group.bench_function("vec", |b| {
        b.iter(|| {
            let mut vec = Vec::with_capacity(INSERTS);
            for i in 0..INSERTS as u64 {
                vec.insert(0, black_box(i));
            }
            black_box(vec)
        });
    });

    group.bench_function("dyn_array/insert_all", |b| {
        let batch: Vec<u64> = (0..INSERTS as u64).collect();
        b.iter(|| {
            let mut array = DynArray::from(vec![0u64; 16]);
            array.insert_all(8, batch.iter().copied()).unwrap();
            black_box(array)
        });
    });

    group.finish();
}

criterion_group!(benches, bench_push, bench_insert_front);
criterion_main!(benches);
