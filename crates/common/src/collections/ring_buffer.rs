#![forbid(unsafe_code)]

//! A fixed-capacity FIFO buffer with overwrite-on-full semantics.
//!
//! [`RingBuffer`] keeps its elements in insertion order while bounding its
//! length by a caller-provided capacity: when [`push`](RingBuffer::push)
//! finds the buffer full, the oldest element is dropped before the new one
//! is appended ("keep last N"). This is the storage primitive behind the
//! bounded analytics event log.
//!
//! # Complexity
//! `push`, `pop`, `len`, `is_empty`, `is_full`, `capacity`, and `iter` are
//! all O(1); `to_vec` is O(n).
//!
//! # Panic Safety
//! Public methods do not panic; there are no `unwrap`/`expect` calls in the
//! implementation.

use std::collections::VecDeque;

/// A fixed-capacity buffer that evicts its oldest element when full.
///
/// # Examples
///
/// ```rust
/// use storelens_common::collections::RingBuffer;
///
/// let mut buffer = RingBuffer::new(2);
/// buffer.push("a");
/// buffer.push("b");
/// buffer.push("c"); // evicts "a"
///
/// assert_eq!(buffer.to_vec(), vec!["b", "c"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RingBuffer<T> {
    buf: VecDeque<T>,
    capacity: usize,
}

impl<T> RingBuffer<T> {
    /// Creates a buffer holding at most `capacity` elements.
    ///
    /// A capacity of zero is clamped to `1` so that the buffer always has
    /// at least one slot.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self { buf: VecDeque::with_capacity(capacity), capacity }
    }

    /// Appends an element, evicting the oldest one first when full.
    pub fn push(&mut self, item: T) {
        if self.is_full() {
            let _ = self.buf.pop_front();
        }
        self.buf.push_back(item);
    }

    /// Removes and returns the oldest element.
    #[must_use]
    pub fn pop(&mut self) -> Option<T> {
        self.buf.pop_front()
    }

    /// Number of elements currently stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` when no elements are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Returns `true` when the buffer has reached its capacity.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.buf.len() == self.capacity
    }

    /// Maximum number of elements the buffer retains.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterates over the retained elements, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.buf.iter()
    }

    /// Removes every element while keeping the capacity.
    pub fn clear(&mut self) {
        self.buf.clear();
    }
}

impl<T: Clone> RingBuffer<T> {
    /// Snapshot of the retained elements in insertion order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.buf.iter().cloned().collect()
    }
}
