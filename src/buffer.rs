//! Fixed-capacity ring buffer
//!
//! A circular FIFO queue over a single boxed slice with two cursors:
//! - `head` points at the oldest element
//! - `tail` points at the slot the next push writes to
//!
//! `head == tail` is ambiguous between "empty" and "full", so the buffer
//! carries an explicit `is_full` flag. Pushing into a full buffer evicts the
//! oldest element instead of failing.
//!
//! The buffer is not synchronised. Wrap it in a mutex (or keep a single
//! owner) when sharing it across threads.

use tracing::{debug, trace, warn};

use crate::config::BufferConfig;
use crate::errors::{Result, RingBufferError};

/// Circular FIFO queue with overwrite-on-full semantics.
#[derive(Debug, Clone)]
pub struct RingBuffer<T> {
    /// Slots outside the logical `[head, head + len)` range are always `None`
    storage: Box<[Option<T>]>,
    head: usize,
    tail: usize,
    is_full: bool,
}

impl<T> RingBuffer<T> {
    /// Create an empty buffer with exactly `capacity` slots.
    ///
    /// Fails with [`RingBufferError::InvalidCapacity`] for a zero capacity and
    /// with [`RingBufferError::AllocationFailure`] when the storage cannot be
    /// reserved. No partially built buffer is ever returned.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(RingBufferError::InvalidCapacity {
                requested: capacity,
            });
        }

        let mut slots = Vec::new();
        slots
            .try_reserve_exact(capacity)
            .map_err(|_| RingBufferError::AllocationFailure { capacity })?;
        slots.resize_with(capacity, || None);

        debug!(capacity, "Ring buffer created");

        Ok(Self {
            storage: slots.into_boxed_slice(),
            head: 0,
            tail: 0,
            is_full: false,
        })
    }

    /// Create a buffer sized from the `[buffer]` configuration section.
    pub fn from_config(config: &BufferConfig) -> Result<Self> {
        Self::new(config.capacity)
    }

    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Number of queued elements, derived from the cursors and the full flag.
    pub fn len(&self) -> usize {
        if self.is_full {
            self.capacity()
        } else if self.tail >= self.head {
            self.tail - self.head
        } else {
            self.capacity() - self.head + self.tail
        }
    }

    pub fn is_empty(&self) -> bool {
        !self.is_full && self.head == self.tail
    }

    pub fn is_full(&self) -> bool {
        self.is_full
    }

    /// True once [`destroy`](Self::destroy) has released the storage.
    pub fn is_destroyed(&self) -> bool {
        self.storage.is_empty()
    }

    /// Append `item`, dropping the oldest element if the buffer is full.
    ///
    /// Never fails. Pushing into a destroyed buffer drops `item`.
    pub fn push(&mut self, item: T) {
        drop(self.push_evicting(item));
    }

    /// Append `item` and hand back whatever had to make room for it.
    ///
    /// Returns the evicted oldest element when the buffer was full, `None`
    /// otherwise. A destroyed buffer has no slot to write to, so `item`
    /// itself comes back.
    pub fn push_evicting(&mut self, item: T) -> Option<T> {
        if self.is_destroyed() {
            warn!("Push into a destroyed ring buffer, item not stored");
            return Some(item);
        }

        let was_full = self.is_full;
        // When full, tail == head and this slot holds the oldest element
        let evicted = self.storage[self.tail].replace(item);
        debug_assert_eq!(evicted.is_some(), was_full);

        self.tail = self.advance(self.tail);
        if was_full {
            self.head = self.advance(self.head);
            debug!(head = self.head, "Buffer full, evicted oldest element");
        }
        self.is_full = self.tail == self.head;

        trace!(
            head = self.head,
            tail = self.tail,
            full = self.is_full,
            "push"
        );

        evicted
    }

    /// Remove and return the oldest element, or `None` when empty.
    ///
    /// Popping an empty buffer leaves it untouched.
    pub fn pop(&mut self) -> Option<T> {
        if self.is_empty() {
            debug!("Buffer is empty, nothing to pop");
            return None;
        }

        let item = self.storage[self.head].take();
        self.head = self.advance(self.head);
        self.is_full = false;

        trace!(head = self.head, tail = self.tail, "pop");
        item
    }

    /// Borrow the oldest element without removing it.
    pub fn peek(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.storage[self.head].as_ref()
    }

    /// Iterate from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        let capacity = self.capacity();
        (0..self.len())
            .filter_map(move |offset| self.storage[(self.head + offset) % capacity].as_ref())
    }

    /// Drop every queued element in FIFO order. The storage is kept.
    pub fn clear(&mut self) {
        while !self.is_empty() {
            drop(self.pop());
        }
    }

    /// Drain all elements, then release the backing storage.
    ///
    /// Afterwards capacity, cursors and the full flag are zeroed. Calling it
    /// again is a no-op.
    pub fn destroy(&mut self) {
        if self.is_destroyed() {
            return;
        }

        let drained = self.len();
        self.clear();

        self.storage = Box::default();
        self.head = 0;
        self.tail = 0;
        self.is_full = false;

        debug!(drained, "Ring buffer destroyed");
    }

    fn advance(&self, index: usize) -> usize {
        (index + 1) % self.capacity()
    }
}
