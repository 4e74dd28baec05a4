//! Benchmarks for MinHeap.
//!
//! Compares against std `BinaryHeap<Reverse<_>>` holding the same
//! (priority, payload) pairs.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use nexus_minheap::MinHeap;
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::hint::black_box;

const SIZES: [usize; 3] = [64, 1024, 16 * 1024];

/// Deterministic scramble so both heaps see the same input.
fn priority(i: usize, n: usize) -> u64 {
    ((i * 7 + 13) % n) as u64
}

// ============================================================================
// Fill then drain
// ============================================================================

fn bench_fill_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill_drain");

    for &n in &SIZES {
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::new("nexus_minheap", n), &n, |b, &n| {
            b.iter(|| {
                let mut heap: MinHeap<u64, u64> = MinHeap::new();
                for i in 0..n {
                    heap.insert(i as u64, black_box(priority(i, n))).unwrap();
                }
                while let Some(entry) = heap.extract_min() {
                    black_box(entry);
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("std_binary_heap", n), &n, |b, &n| {
            b.iter(|| {
                let mut heap = BinaryHeap::new();
                for i in 0..n {
                    heap.push(Reverse((black_box(priority(i, n)), i as u64)));
                }
                while let Some(entry) = heap.pop() {
                    black_box(entry);
                }
            });
        });
    }

    group.finish();
}

// ============================================================================
// Steady state: one insert + one extract at a fixed size
// ============================================================================

fn bench_steady_state(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_extract_steady");

    for &n in &SIZES {
        group.bench_with_input(BenchmarkId::new("nexus_minheap", n), &n, |b, &n| {
            let mut heap: MinHeap<u64, u64> = MinHeap::try_with_capacity(n + 1).unwrap();
            for i in 0..n {
                heap.insert(i as u64, priority(i, n)).unwrap();
            }
            let mut next = n;
            b.iter(|| {
                heap.insert(next as u64, black_box(priority(next, n))).unwrap();
                next += 1;
                black_box(heap.extract_min())
            });
        });

        group.bench_with_input(BenchmarkId::new("std_binary_heap", n), &n, |b, &n| {
            let mut heap = BinaryHeap::with_capacity(n + 1);
            for i in 0..n {
                heap.push(Reverse((priority(i, n), i as u64)));
            }
            let mut next = n;
            b.iter(|| {
                heap.push(Reverse((black_box(priority(next, n)), next as u64)));
                next += 1;
                black_box(heap.pop())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_fill_drain, bench_steady_state);
criterion_main!(benches);
