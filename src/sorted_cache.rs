//! Sorted snapshot of a drained heap
//!
//! A [`SortedCache`] holds elements in the order they were drained from a
//! heap (highest-ranked first) and hands them out from the front. The
//! `cursor` counts how many have been handed out since the snapshot was taken;
//! consumed elements are gone and are never visited again.
//!
//! Once the last element is consumed the cache drops its buffer and returns
//! to the empty state with `cursor == 0`.

use std::collections::vec_deque::{self, VecDeque};

use log::trace;

/// An ordered sequence consumed from the front
#[derive(Debug, Clone)]
pub struct SortedCache<T> {
    /// The unconsumed suffix, highest-ranked first
    items: VecDeque<T>,
    /// Elements consumed since the snapshot was taken
    cursor: usize,
}

impl<T> SortedCache<T> {
    /// Creates an empty cache
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
            cursor: 0,
        }
    }

    /// Wraps an already ordered sequence, highest-ranked first
    pub fn from_vec(ordered: Vec<T>) -> Self {
        Self {
            items: VecDeque::from(ordered),
            cursor: 0,
        }
    }

    /// Returns the next unconsumed element
    pub fn peek_front(&self) -> Option<&T> {
        self.items.front()
    }

    /// Removes and returns the next unconsumed element
    ///
    /// Consuming the last element resets the cache.
    pub fn consume_front(&mut self) -> Option<T> {
        let item = self.items.pop_front()?;
        self.cursor += 1;
        if self.items.is_empty() {
            trace!("sorted cache exhausted after {} elements", self.cursor);
            self.clear();
        }
        Some(item)
    }

    /// Returns the number of unconsumed elements
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` once every element has been consumed
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns how many elements have been consumed since the snapshot
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Iterates the unconsumed elements in order without consuming them
    pub fn iter(&self) -> vec_deque::Iter<'_, T> {
        self.items.iter()
    }

    /// Drops every element and releases the buffer
    pub fn clear(&mut self) {
        self.items = VecDeque::new();
        self.cursor = 0;
    }
}

impl<T> Default for SortedCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> IntoIterator for SortedCache<T> {
    type Item = T;
    type IntoIter = vec_deque::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
