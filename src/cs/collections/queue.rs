//! # Ring-buffer Queue
//!
//! A FIFO queue over a fixed-size slot buffer addressed as a ring: `head`
//! points at the front element and the back sits `len` slots further on,
//! wrapping modulo the capacity. Dequeue just advances `head`, so it is O(1)
//! instead of shifting every remaining element forward.
//!
//! When the ring is full, enqueue allocates a buffer of twice the capacity
//! (minimum 1) and unrolls the ring into it so the front lands at slot 0.

use std::fmt;

use super::buffer::{self, Slots};
use super::dynamic_array::DEFAULT_CAPACITY;
use crate::error::ContainerError;

pub struct Queue<T> {
    data: Slots<T>,
    head: usize,
    len: usize,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Queue {
            data: buffer::allocate(capacity),
            head: 0,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Adds `value` at the back. Amortized O(1).
    pub fn enqueue(&mut self, value: T) {
        if self.len == self.capacity() {
            self.grow();
        }
        let tail = self.slot(self.len);
        self.data[tail] = Some(value);
        self.len += 1;
    }

    /// Removes and returns the front element. O(1).
    pub fn dequeue(&mut self) -> Result<T, ContainerError> {
        if self.len == 0 {
            return Err(ContainerError::Underflow("dequeue from empty queue"));
        }
        let value = self.data[self.head].take();
        self.head = self.slot(1);
        self.len -= 1;
        value.ok_or(ContainerError::Underflow("dequeue from empty queue"))
    }

    /// Returns the front element without removing it.
    pub fn peek(&self) -> Result<&T, ContainerError> {
        if self.len == 0 {
            return Err(ContainerError::Underflow("peek from empty queue"));
        }
        self.data[self.head]
            .as_ref()
            .ok_or(ContainerError::Underflow("peek from empty queue"))
    }

    /// Iterates front to back.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        (0..self.len).filter_map(move |offset| self.data[self.slot(offset)].as_ref())
    }

    /// Physical index of the element `offset` places behind the front.
    fn slot(&self, offset: usize) -> usize {
        (self.head + offset) % self.capacity()
    }

    fn grow(&mut self) {
        let new_capacity = buffer::grown_capacity(self.capacity());
        log::trace!(
            "queue resize: {} -> {} (len {})",
            self.capacity(),
            new_capacity,
            self.len
        );
        let (wrapped, front) = self.data.split_at_mut(self.head);
        self.data = buffer::relocate(front.iter_mut().chain(wrapped.iter_mut()), new_capacity);
        self.head = 0;
    }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.enqueue(value);
        }
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Queue::new();
        queue.extend(iter);
        queue
    }
}
