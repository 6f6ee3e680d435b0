//! Common traits for the queue data structures
//!
//! - [`Heap`]: the base contract shared by [`BinaryHeap`](crate::binary::BinaryHeap)
//!   and [`PriorityQueue`](crate::queue::PriorityQueue)
//! - [`QueueError`]: the single failure mode of the facade
//!
//! Unlike `std::collections::BinaryHeap`, "priority" is decided by a
//! [`Comparator`](crate::compare::Comparator) supplied at construction: the
//! element that compares `Greater` than every other is returned first.

use std::fmt;

/// Error type for queue operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    /// `peek` or `dequeue` was called on a queue with no elements
    EmptyQueue,
}

impl fmt::Display for QueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueueError::EmptyQueue => write!(f, "priority queue is empty"),
        }
    }
}

impl std::error::Error for QueueError {}

/// Base trait for comparator-ordered heaps
///
/// This trait provides a simple API similar to Rust's `BinaryHeap`:
/// - `push` inserts an element and returns the new length
/// - `pop` removes and returns the highest-ranked element
/// - `peek` returns the highest-ranked element without removing it
///
/// Construction is left to each implementation since every heap needs a
/// comparator.
///
/// # Example
///
/// ```rust
/// use rust_amortized_pq::Heap;
/// use rust_amortized_pq::binary::BinaryHeap;
///
/// let mut heap: BinaryHeap<i32> = BinaryHeap::new();
/// heap.push(3);
/// heap.push(1);
/// heap.push(2);
///
/// assert_eq!(heap.peek(), Some(&3));
/// assert_eq!(heap.pop(), Some(3));
/// ```
pub trait Heap<T> {
    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element, returning the new number of elements
    ///
    /// # Time Complexity
    /// O(log n)
    fn push(&mut self, item: T) -> usize;

    /// Returns the highest-ranked element without removing it
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Option<&T>;

    /// Removes and returns the highest-ranked element
    ///
    /// # Time Complexity
    /// O(log n)
    fn pop(&mut self) -> Option<T>;
}
