//! Traversal and queue-operation benchmarks
//!
//! Compares the cached priority queue against the plain binary heap for the
//! workload the cache is built for: repeated full traversals in priority
//! order with few insertions in between.
//!
//! ## Running
//!
//! ```bash
//! cargo bench --bench queue_perf
//!
//! # Only the traversal group
//! cargo bench --bench queue_perf -- 'traversal/'
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rust_amortized_pq::binary::BinaryHeap;
use rust_amortized_pq::compare::NaturalOrder;
use rust_amortized_pq::{Heap, PriorityQueue};

/// Linear congruential generator for reproducible inputs
struct Lcg {
    state: u64,
}

impl Lcg {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.state >> 33
    }
}

fn random_values(n: usize, seed: u64) -> Vec<u64> {
    let mut rng = Lcg::new(seed);
    (0..n).map(|_| rng.next_u64()).collect()
}

/// Sum of a full ordered traversal of a plain heap, which has to sort a copy
fn traverse_binary(heap: &BinaryHeap<u64, NaturalOrder>) -> u64 {
    let mut sorted = heap.as_slice().to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    sorted.iter().fold(0u64, |acc, v| acc.wrapping_add(*v))
}

fn traverse_queue(queue: &mut PriorityQueue<u64, NaturalOrder>) -> u64 {
    let mut acc = 0u64;
    queue.for_each(|v, _| acc = acc.wrapping_add(*v));
    acc
}

fn benchmark_repeated_traversal(c: &mut Criterion) {
    let mut group = c.benchmark_group("traversal");

    for &size in &[1_000usize, 10_000, 100_000] {
        let values = random_values(size, 42);

        group.bench_with_input(BenchmarkId::new("binary_heap", size), &values, |b, vs| {
            let heap = BinaryHeap::from_vec_with(vs.clone(), NaturalOrder);
            b.iter(|| black_box(traverse_binary(&heap)))
        });

        group.bench_with_input(BenchmarkId::new("cached_queue", size), &values, |b, vs| {
            let mut queue = PriorityQueue::from_vec_with(vs.clone(), NaturalOrder);
            b.iter(|| black_box(traverse_queue(&mut queue)))
        });

        // one insertion between traversals forces a drain every time
        group.bench_with_input(
            BenchmarkId::new("cached_queue_with_insert", size),
            &values,
            |b, vs| {
                let mut queue = PriorityQueue::from_vec_with(vs.clone(), NaturalOrder);
                let mut rng = Lcg::new(7);
                b.iter(|| {
                    queue.enqueue(rng.next_u64());
                    black_box(traverse_queue(&mut queue))
                })
            },
        );
    }

    group.finish();
}

fn benchmark_push_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_pop");

    for &size in &[1_000usize, 10_000] {
        let values = random_values(size, 1234);

        group.bench_with_input(BenchmarkId::new("binary_heap", size), &values, |b, vs| {
            b.iter(|| {
                let mut heap = BinaryHeap::with_capacity(vs.len(), NaturalOrder);
                for v in vs {
                    heap.push(*v);
                }
                while let Some(v) = heap.pop() {
                    black_box(v);
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("cached_queue", size), &values, |b, vs| {
            b.iter(|| {
                let mut queue = PriorityQueue::with_capacity(vs.len(), NaturalOrder);
                for v in vs {
                    queue.enqueue(*v);
                }
                while let Ok(v) = queue.dequeue() {
                    black_box(v);
                }
            })
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_repeated_traversal, benchmark_push_pop);
criterion_main!(benches);
