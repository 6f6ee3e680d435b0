//! Comparator-ordered binary heap
//!
//! An array-backed complete binary tree: the element at index `i` has its
//! children at `2i + 1` and `2i + 2`. Every parent compares `>=` its children
//! under the heap's [`Comparator`], so the root is always the highest-ranked
//! element.
//!
//! # Time Complexity
//!
//! | Operation  | Complexity |
//! |------------|------------|
//! | `push`     | O(log n)   |
//! | `pop`      | O(log n)   |
//! | `peek`     | O(1)       |
//! | `from_vec` | O(n)       |
//!
//! # Ties
//!
//! Equal elements are not interchangeable in general (a comparator may look at
//! one field only), so the tie behaviour is fixed:
//!
//! - `push` keeps swimming an element past parents it equals, so the most
//!   recently pushed of several equal elements tends toward the root.
//! - `pop` sinks using strict comparisons: a left child wins over an equal
//!   right child, and a node equal to its best child stays where it is.
//!
//! # Example
//!
//! ```rust
//! use rust_amortized_pq::Heap;
//! use rust_amortized_pq::binary::BinaryHeap;
//!
//! let mut heap: BinaryHeap<i32> = BinaryHeap::from_vec(vec![3, 4, 1, 7, 6, 4]);
//! heap.push(5);
//!
//! assert_eq!(heap.pop(), Some(7));
//! assert_eq!(heap.pop(), Some(6));
//! assert_eq!(heap.pop(), Some(5));
//! ```

use std::cmp::Ordering;

use crate::compare::{Comparator, DefaultOrder};
use crate::traits::Heap;

/// A binary max-heap ordered by a comparator
#[derive(Debug, Clone)]
pub struct BinaryHeap<T, C = DefaultOrder> {
    /// The tree, stored breadth-first
    data: Vec<T>,
    cmp: C,
}

impl<T> BinaryHeap<T, DefaultOrder> {
    /// Creates an empty heap ordered by [`DefaultOrder`]
    pub fn new() -> Self {
        Self::with_comparator(DefaultOrder)
    }

    /// Builds a heap from `items` ordered by [`DefaultOrder`]
    pub fn from_vec(items: Vec<T>) -> Self
    where
        DefaultOrder: Comparator<T>,
    {
        Self::from_vec_with(items, DefaultOrder)
    }
}

impl<T, C> BinaryHeap<T, C> {
    /// Creates an empty heap ordered by `cmp`
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            data: Vec::new(),
            cmp,
        }
    }

    /// Creates an empty heap ordered by `cmp` with room for `capacity` elements
    pub fn with_capacity(capacity: usize, cmp: C) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            cmp,
        }
    }

    /// Returns the comparator this heap is ordered by
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Returns the elements in heap (breadth-first) order
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consumes the heap, returning its elements in heap order
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Removes every element
    pub fn clear(&mut self) {
        self.data.clear();
    }
}

impl<T, C: Comparator<T>> BinaryHeap<T, C> {
    /// Builds a heap from `items` ordered by `cmp`
    ///
    /// Sinks every node from `n / 2` down to the root, which is O(n).
    pub fn from_vec_with(items: Vec<T>, cmp: C) -> Self {
        let mut heap = Self { data: items, cmp };
        for index in (0..=heap.data.len() / 2).rev() {
            heap.sift_down(index);
        }
        heap
    }

    fn compare(&self, a: usize, b: usize) -> Ordering {
        self.cmp.compare(&self.data[a], &self.data[b])
    }

    /// Move element at index up to maintain heap property
    ///
    /// Swaps past equal parents as well as lesser ones.
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.compare(index, parent) == Ordering::Less {
                break;
            }
            self.data.swap(index, parent);
            index = parent;
        }
    }

    /// Move element at index down to maintain heap property
    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut largest = index;

            if left < len && self.compare(left, largest) == Ordering::Greater {
                largest = left;
            }
            if right < len && self.compare(right, largest) == Ordering::Greater {
                largest = right;
            }

            if largest == index {
                break;
            }
            self.data.swap(index, largest);
            index = largest;
        }
    }
}

impl<T, C: Comparator<T>> Heap<T> for BinaryHeap<T, C> {
    fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn push(&mut self, item: T) -> usize {
        self.data.push(item);
        self.sift_up(self.data.len() - 1);
        self.data.len()
    }

    fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    fn pop(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }

        let result = self.data.swap_remove(0);
        if !self.data.is_empty() {
            self.sift_down(0);
        }

        Some(result)
    }
}

impl<T, C: Default> Default for BinaryHeap<T, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}
