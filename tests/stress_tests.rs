//! Stress tests that push the queues through long workloads
//!
//! These tests perform large numbers of operations in various patterns
//! to catch edge cases and verify correctness under load.

use rust_amortized_pq::binary::BinaryHeap;
use rust_amortized_pq::compare::{NaturalOrder, Reversed};
use rust_amortized_pq::{Heap, PriorityQueue};

/// Test massive numbers of pushes and pops
fn test_massive_operations<H: Heap<i32>>(mut heap: H) {
    for i in 0..1000 {
        heap.push(i);
    }

    assert_eq!(heap.len(), 1000);

    for i in 0..1000 {
        assert_eq!(heap.pop(), Some(i));
    }

    assert!(heap.is_empty());
}

/// Test alternating push and pop
fn test_alternating_ops<H: Heap<i32>>(mut heap: H) {
    for i in 0..200 {
        heap.push(i * 2);
        heap.push(i * 2 + 1);

        let popped = heap.pop();
        assert!(popped.is_some());
    }

    assert_eq!(heap.len(), 200);
    let mut last = i32::MIN;
    while let Some(value) = heap.pop() {
        assert!(value >= last);
        last = value;
    }
    assert!(heap.is_empty());
}

/// Test many duplicate values
fn test_many_duplicates<H: Heap<i32>>(mut heap: H) {
    for i in 0..500 {
        heap.push(i % 10);
    }

    let mut counts = [0usize; 10];
    let mut last = i32::MIN;
    while let Some(value) = heap.pop() {
        assert!(value >= last);
        last = value;
        counts[value as usize] += 1;
    }
    assert!(counts.iter().all(|&c| c == 50));
}

#[test]
fn test_binary_heap_massive() {
    test_massive_operations(BinaryHeap::with_comparator(Reversed(NaturalOrder)));
}

#[test]
fn test_priority_queue_massive() {
    test_massive_operations(PriorityQueue::with_comparator(Reversed(NaturalOrder)));
}

#[test]
fn test_binary_heap_alternating() {
    test_alternating_ops(BinaryHeap::with_comparator(Reversed(NaturalOrder)));
}

#[test]
fn test_priority_queue_alternating() {
    test_alternating_ops(PriorityQueue::with_comparator(Reversed(NaturalOrder)));
}

#[test]
fn test_binary_heap_duplicates() {
    test_many_duplicates(BinaryHeap::with_comparator(Reversed(NaturalOrder)));
}

#[test]
fn test_priority_queue_duplicates() {
    test_many_duplicates(PriorityQueue::with_comparator(Reversed(NaturalOrder)));
}

/// Interleave traversals with every other operation so the queue keeps
/// switching between draining its heap and serving from the cache
#[test]
fn test_traversals_under_load() {
    let mut queue = PriorityQueue::with_comparator(NaturalOrder);
    let mut model: Vec<i64> = Vec::new();

    for round in 0..300i64 {
        let value = (round * 7919) % 1009;
        queue.enqueue(value);
        model.push(value);

        if round % 4 == 0 {
            let mut seen = Vec::with_capacity(queue.len());
            queue.for_each(|v, _| seen.push(*v));
            model.sort_unstable_by(|a, b| b.cmp(a));
            assert_eq!(seen, model);
        }

        if round % 3 == 0 {
            model.sort_unstable_by(|a, b| b.cmp(a));
            assert_eq!(queue.dequeue().ok(), Some(model.remove(0)));
        }
    }

    model.sort_unstable_by(|a, b| b.cmp(a));
    assert_eq!(queue.into_sorted_vec(), model);
}

/// Repeated traversals with no new elements must not disturb the queue
#[test]
fn test_many_traversals_without_mutation() {
    let mut queue: PriorityQueue<u64> = (0..2000u64).map(|i| (i * 31) % 2003).collect();
    let expected: Vec<u64> = queue.iter().copied().collect();

    for _ in 0..50 {
        assert!(queue.iter().copied().eq(expected.iter().copied()));
        assert_eq!(queue.pending(), 0);
    }
    assert_eq!(queue.len(), 2000);
}
