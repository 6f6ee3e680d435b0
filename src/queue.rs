//! Priority queue with an amortizing sorted cache
//!
//! [`PriorityQueue`] pairs a [`BinaryHeap`] with a [`SortedCache`]:
//!
//! - New elements always go into the heap.
//! - A full traversal ([`for_each`](PriorityQueue::for_each),
//!   [`iter`](PriorityQueue::iter)) with elements pending in the heap drains
//!   everything into the cache in priority order, then walks the cache.
//! - A traversal when the heap is empty walks the cache without touching it,
//!   so repeated traversals with no `enqueue` in between cost O(n) each
//!   instead of O(n log n).
//! - `peek` and `dequeue` merge both sources: whichever front ranks higher
//!   under the comparator is the queue's front, with the heap winning ties.
//!
//! # Time Complexity
//!
//! | Operation  | Complexity                                              |
//! |------------|---------------------------------------------------------|
//! | `enqueue`  | O(log h)                                                |
//! | `dequeue`  | O(log h), O(1) when taken from the cache                |
//! | `peek`     | O(1)                                                    |
//! | `for_each` | O(n log n) with pending heap elements, O(n) otherwise   |
//!
//! where `h` is the number of elements in the heap and `n` the queue length.
//!
//! # Example
//!
//! ```rust
//! use rust_amortized_pq::PriorityQueue;
//!
//! let mut queue = PriorityQueue::from_vec(vec!["a", "b", "d"]);
//!
//! let mut seen = Vec::new();
//! queue.for_each(|item, _| seen.push(*item));
//! assert_eq!(seen, ["d", "b", "a"]);
//!
//! queue.enqueue("c");
//! assert_eq!(queue.dequeue(), Ok("d"));
//! assert_eq!(queue.dequeue(), Ok("c"));
//! assert_eq!(queue.len(), 2);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;

use log::debug;

use crate::binary::BinaryHeap;
use crate::compare::{Comparator, DefaultOrder};
use crate::sorted_cache::SortedCache;
use crate::traits::{Heap, QueueError};

/// Where the queue's current front lives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Source {
    Heap,
    Cache,
}

/// A comparator-ordered priority queue that caches its sorted order
///
/// The highest-ranked element under the comparator comes out first. See the
/// [module documentation](self) for how the heap and the cache interact.
#[derive(Clone)]
pub struct PriorityQueue<T, C = DefaultOrder> {
    /// Elements enqueued since the last traversal; owns the comparator
    heap: BinaryHeap<T, C>,
    /// The remaining suffix of the last traversal
    cache: SortedCache<T>,
}

impl<T> PriorityQueue<T, DefaultOrder> {
    /// Creates an empty queue ordered by [`DefaultOrder`]
    pub fn new() -> Self {
        Self::with_comparator(DefaultOrder)
    }

    /// Creates a queue holding `items`, ordered by [`DefaultOrder`]
    ///
    /// # Time Complexity
    /// O(n)
    pub fn from_vec(items: Vec<T>) -> Self
    where
        DefaultOrder: Comparator<T>,
    {
        Self::from_vec_with(items, DefaultOrder)
    }
}

impl<T, C> PriorityQueue<T, C> {
    /// Creates an empty queue ordered by `cmp`
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            heap: BinaryHeap::with_comparator(cmp),
            cache: SortedCache::new(),
        }
    }

    /// Creates an empty queue ordered by `cmp` with heap room for `capacity` elements
    pub fn with_capacity(capacity: usize, cmp: C) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity, cmp),
            cache: SortedCache::new(),
        }
    }

    /// Returns the comparator this queue is ordered by
    pub fn comparator(&self) -> &C {
        self.heap.comparator()
    }

    /// Returns the number of elements waiting in the heap
    pub fn pending(&self) -> usize {
        self.heap.as_slice().len()
    }

    /// Returns the number of elements held in the sorted cache
    pub fn cached(&self) -> usize {
        self.cache.len()
    }

    /// Removes every element
    pub fn clear(&mut self) {
        self.heap.clear();
        self.cache.clear();
    }
}

impl<T, C: Comparator<T>> PriorityQueue<T, C> {
    /// Creates a queue holding `items`, ordered by `cmp`
    ///
    /// # Time Complexity
    /// O(n)
    pub fn from_vec_with(items: Vec<T>, cmp: C) -> Self {
        Self {
            heap: BinaryHeap::from_vec_with(items, cmp),
            cache: SortedCache::new(),
        }
    }

    /// Returns the number of elements in the queue
    #[doc(alias = "size")]
    pub fn len(&self) -> usize {
        self.heap.len() + self.cache.len()
    }

    /// Returns `true` if neither the heap nor the cache holds an element
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Picks the source holding the front of the queue
    ///
    /// The heap root wins unless the cache front strictly outranks it.
    fn front(&self) -> Option<(Source, &T)> {
        match (self.heap.peek(), self.cache.peek_front()) {
            (None, None) => None,
            (Some(root), None) => Some((Source::Heap, root)),
            (None, Some(front)) => Some((Source::Cache, front)),
            (Some(root), Some(front)) => {
                if self.heap.comparator().compare(root, front) == Ordering::Less {
                    Some((Source::Cache, front))
                } else {
                    Some((Source::Heap, root))
                }
            }
        }
    }

    /// Removes the front from whichever source holds it
    fn take_front(&mut self) -> Option<T> {
        let (source, _) = self.front()?;
        match source {
            Source::Heap => self.heap.pop(),
            Source::Cache => self.cache.consume_front(),
        }
    }

    /// Drains the heap and the cache into a fresh cache, in priority order
    ///
    /// Does nothing when the heap is empty: the cache already holds every
    /// element in order.
    fn materialize(&mut self) {
        if self.heap.is_empty() {
            return;
        }

        let pending = self.heap.len();
        let mut sorted = Vec::with_capacity(self.len());
        while let Some(item) = self.take_front() {
            sorted.push(item);
        }
        debug!(
            "materialized sorted cache: {} elements ({} from heap)",
            sorted.len(),
            pending
        );
        self.cache = SortedCache::from_vec(sorted);
    }

    /// Returns the highest-ranked element without removing it
    ///
    /// # Errors
    /// Returns [`QueueError::EmptyQueue`] if the queue is empty.
    pub fn peek(&self) -> Result<&T, QueueError> {
        self.front()
            .map(|(_, top)| top)
            .ok_or(QueueError::EmptyQueue)
    }

    /// Removes and returns the highest-ranked element
    ///
    /// # Errors
    /// Returns [`QueueError::EmptyQueue`] if the queue is empty; the queue is
    /// left untouched.
    pub fn dequeue(&mut self) -> Result<T, QueueError> {
        self.take_front().ok_or(QueueError::EmptyQueue)
    }

    /// Adds an element, returning the new length of the queue
    ///
    /// The element goes into the heap even if the cache is non-empty. The
    /// returned length counts cached elements too, not just the heap.
    pub fn enqueue(&mut self, item: T) -> usize {
        self.heap.push(item);
        self.len()
    }

    /// Visits every element in priority order with its position
    ///
    /// Leaves the queue's contents unchanged. Pending heap elements are merged
    /// into the sorted cache first, so calling this again before the next
    /// `enqueue` visits the same sequence in O(n).
    pub fn for_each<F>(&mut self, mut visit: F)
    where
        F: FnMut(&T, usize),
    {
        for (index, item) in self.iter().enumerate() {
            visit(item, index);
        }
    }

    /// Like [`for_each`](Self::for_each), stopping at the first error `visit` returns
    ///
    /// The queue is fully materialized before the first visit, so an error
    /// never loses elements.
    pub fn try_for_each<E, F>(&mut self, mut visit: F) -> Result<(), E>
    where
        F: FnMut(&T, usize) -> Result<(), E>,
    {
        self.iter()
            .enumerate()
            .try_for_each(|(index, item)| visit(item, index))
    }

    /// Iterates every element in priority order without removing any
    ///
    /// Takes `&mut self` because pending heap elements are moved into the
    /// sorted cache first.
    pub fn iter(&mut self) -> Iter<'_, T> {
        self.materialize();
        Iter {
            inner: self.cache.iter(),
        }
    }

    /// Consumes the queue, returning its elements in priority order
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        self.materialize();
        self.cache.into_iter().collect()
    }
}

impl<T, C: Comparator<T>> Heap<T> for PriorityQueue<T, C> {
    fn is_empty(&self) -> bool {
        self.heap.is_empty() && self.cache.is_empty()
    }

    fn len(&self) -> usize {
        self.heap.len() + self.cache.len()
    }

    fn push(&mut self, item: T) -> usize {
        self.enqueue(item)
    }

    fn peek(&self) -> Option<&T> {
        self.front().map(|(_, top)| top)
    }

    fn pop(&mut self) -> Option<T> {
        self.take_front()
    }
}

impl<T, C: Default> Default for PriorityQueue<T, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T: fmt::Debug, C> fmt::Debug for PriorityQueue<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("heap", &self.heap.as_slice())
            .field("cache", &self.cache)
            .finish()
    }
}

impl<T> From<Vec<T>> for PriorityQueue<T, DefaultOrder>
where
    DefaultOrder: Comparator<T>,
{
    fn from(items: Vec<T>) -> Self {
        Self::from_vec(items)
    }
}

impl<T> FromIterator<T> for PriorityQueue<T, DefaultOrder>
where
    DefaultOrder: Comparator<T>,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T, C: Comparator<T>> Extend<T> for PriorityQueue<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.enqueue(item);
        }
    }
}

impl<T, C: Comparator<T>> IntoIterator for PriorityQueue<T, C> {
    type Item = T;
    type IntoIter = IntoIter<T, C>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { queue: self }
    }
}

/// Borrowing iterator over a materialized queue, created by [`PriorityQueue::iter`]
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    inner: std::collections::vec_deque::Iter<'a, T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator that dequeues in priority order
#[derive(Clone)]
pub struct IntoIter<T, C> {
    queue: PriorityQueue<T, C>,
}

impl<T, C: Comparator<T>> Iterator for IntoIter<T, C> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.queue.take_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.queue.len();
        (len, Some(len))
    }
}

impl<T, C: Comparator<T>> ExactSizeIterator for IntoIter<T, C> {}

impl<T, C: Comparator<T>> FusedIterator for IntoIter<T, C> {}
