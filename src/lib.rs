//! Comparator-driven priority queue with an amortizing sorted cache
//!
//! This crate provides a priority queue whose ordering rule is supplied at
//! construction, and which remembers its sorted order between full traversals.
//!
//! # Structures
//!
//! - **[`BinaryHeap`](binary::BinaryHeap)**: array-backed binary heap ordered by a
//!   [`Comparator`]; O(log n) push and pop, O(n) construction from a `Vec`
//! - **[`SortedCache`](sorted_cache::SortedCache)**: a drained, already ordered
//!   snapshot consumed from the front in O(1)
//! - **[`PriorityQueue`]**: a heap plus a sorted cache behind one interface;
//!   `peek` and `dequeue` merge the two, and `for_each` reuses the cache so that
//!   repeated traversals without new elements cost O(n) rather than O(n log n)
//!
//! # Ordering
//!
//! The element that compares `Greater` than all others comes out first. The
//! default policy, [`DefaultOrder`], compares numbers numerically and
//! everything else as text; see [`compare`] for the other policies.
//!
//! # Example
//!
//! ```rust
//! use rust_amortized_pq::{PriorityQueue, QueueError};
//!
//! let mut queue: PriorityQueue<i32> = PriorityQueue::from_vec(vec![3, 4, 1, 7, 6, 4]);
//! assert_eq!(queue.peek(), Ok(&7));
//!
//! let mut order = Vec::new();
//! while let Ok(top) = queue.dequeue() {
//!     order.push(top);
//! }
//! assert_eq!(order, [7, 6, 4, 4, 3, 1]);
//! assert_eq!(queue.dequeue(), Err(QueueError::EmptyQueue));
//! ```

pub mod binary;
pub mod compare;
pub mod queue;
pub mod sorted_cache;
pub mod traits;

// Re-export the main types for convenience
pub use compare::{Comparator, DefaultOrder};
pub use queue::PriorityQueue;
pub use traits::{Heap, QueueError};
