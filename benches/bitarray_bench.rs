//! Performance benchmarks for BitArray operations.
//!
//! These benchmarks measure the lock-guarded hot paths:
//! - set / get / toggle (single uncontended lock acquisition each)
//! - reset and num_set across buffer sizes
//! - contended access from multiple threads

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lockbit::BitArray;
use std::sync::Arc;
use std::thread;

// =============================================================================
// Single Bit Operations
// =============================================================================

fn bench_set(c: &mut Criterion) {
    let ba = BitArray::new(10000);

    c.bench_function("set", |b| {
        let mut i = 0;
        b.iter(|| {
            ba.set(black_box(i % 10000)).unwrap();
            i += 1;
        });
    });
}

fn bench_get(c: &mut Criterion) {
    let ba = BitArray::new(10000);
    for p in 0..10000 {
        ba.set(p).unwrap();
    }

    c.bench_function("get", |b| {
        let mut i = 0;
        b.iter(|| {
            let _ = ba.get(black_box(i % 10000)).unwrap();
            i += 1;
        });
    });
}

fn bench_unset(c: &mut Criterion) {
    let ba = BitArray::new(10000);

    c.bench_function("unset", |b| {
        let mut i = 0;
        b.iter(|| {
            ba.unset(black_box(i % 10000)).unwrap();
            i += 1;
        });
    });
}

fn bench_toggle(c: &mut Criterion) {
    let ba = BitArray::new(10000);

    c.bench_function("toggle", |b| {
        let mut i = 0;
        b.iter(|| {
            let _ = ba.toggle(black_box(i % 10000)).unwrap();
            i += 1;
        });
    });
}

fn bench_rejected_position(c: &mut Criterion) {
    let ba = BitArray::new(100);

    c.bench_function("rejected_position", |b| {
        b.iter(|| {
            let _ = ba.set(black_box(100));
        });
    });
}

// =============================================================================
// Bulk and Counting Operations
// =============================================================================

fn bench_reset(c: &mut Criterion) {
    let mut group = c.benchmark_group("reset");

    for size in [32, 1024, 16384].iter() {
        let ba = BitArray::new(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| ba.reset());
        });
    }
    group.finish();
}

fn bench_num_set(c: &mut Criterion) {
    let mut group = c.benchmark_group("num_set");

    for size in [32, 1024, 16384].iter() {
        let ba = BitArray::new(*size);
        for p in (0..*size).step_by(5) {
            ba.set(p).unwrap();
        }
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| black_box(ba.num_set()));
        });
    }
    group.finish();
}

// =============================================================================
// Contention
// =============================================================================

fn bench_contended_set(c: &mut Criterion) {
    let mut group = c.benchmark_group("contended_set");
    group.sample_size(20);

    for threads in [2, 4, 8].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(threads), threads, |b, &n| {
            b.iter(|| {
                let ba = Arc::new(BitArray::new(4096));
                let handles: Vec<_> = (0..n)
                    .map(|t| {
                        let ba = Arc::clone(&ba);
                        thread::spawn(move || {
                            for p in (t..4096).step_by(n) {
                                ba.set(p).unwrap();
                            }
                        })
                    })
                    .collect();
                for h in handles {
                    h.join().unwrap();
                }
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_set,
    bench_get,
    bench_unset,
    bench_toggle,
    bench_rejected_position,
    bench_reset,
    bench_num_set,
    bench_contended_set,
);
criterion_main!(benches);
