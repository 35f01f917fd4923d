//! # Dynamic Array
//!
//! A growable array backed by a fixed-size slot buffer that is reallocated by
//! hand, rather than delegating growth to `Vec`.
//!
//! ## Key Features
//! - **Amortized O(1) append**: when full, capacity doubles (minimum 1) and the
//!   elements are moved across in order. Over `n` appends the total copy work is
//!   bounded by a geometric series, i.e. O(n).
//! - **Positional insert/remove** in O(n), shifting the tail right or left.
//! - **Checked access**: every positional operation returns a
//!   [`ContainerError::IndexError`] instead of panicking.
//! - **No automatic shrinking**: capacity only decreases through
//!   [`DynamicArray::shrink_to_fit`].
//!
//! ## Example
//! ```rust
//! use order_stats::collections::DynamicArray;
//!
//! let mut arr = DynamicArray::with_capacity(1);
//! for x in [10, 20, 30] {
//!     arr.append(x);
//! }
//! arr.insert(0, 5).unwrap();
//! assert_eq!(arr.access(0), Ok(&5));
//! assert_eq!(arr.len(), 4);
//! assert_eq!(arr.capacity(), 4);
//! ```

use std::fmt;

use super::buffer::{self, Slots};
use crate::error::ContainerError;

/// Initial capacity used by [`DynamicArray::new`].
pub const DEFAULT_CAPACITY: usize = 16;

pub struct DynamicArray<T> {
    data: Slots<T>,
    len: usize,
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DynamicArray<T> {
    /// Creates an empty array with room for [`DEFAULT_CAPACITY`] elements.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty array with room for `capacity` elements. A capacity of
    /// zero is allowed; the first append then grows it to one.
    pub fn with_capacity(capacity: usize) -> Self {
        DynamicArray {
            data: buffer::allocate(capacity),
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

    /// Inserts `value` at `index`, shifting later elements one slot right.
    ///
    /// # Returns
    /// * `Ok(())` - If `index` is in `0..=len`
    /// * `Err(ContainerError::IndexError)` - Otherwise; the array is unchanged
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), ContainerError> {
        if index > self.len {
            return Err(self.index_error(index));
        }
        self.reserve_one();
        self.data[self.len] = Some(value);
        self.data[index..=self.len].rotate_right(1);
        self.len += 1;
        Ok(())
    }

    /// Appends `value` at the end. Amortized O(1).
    pub fn append(&mut self, value: T) {
        self.reserve_one();
        self.data[self.len] = Some(value);
        self.len += 1;
    }

    /// Returns a reference to the element at `index`.
    pub fn access(&self, index: usize) -> Result<&T, ContainerError> {
        self.get(index).ok_or_else(|| self.index_error(index))
    }

    /// Like [`access`](Self::access) but returns `None` for a bad index.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.data[..self.len].get(index).and_then(Option::as_ref)
    }

    /// Replaces the element at `index`, returning the old one.
    pub fn set(&mut self, index: usize, value: T) -> Result<T, ContainerError> {
        if index >= self.len {
            return Err(self.index_error(index));
        }
        self.data[index]
            .replace(value)
            .ok_or_else(|| self.index_error(index))
    }

    /// Removes and returns the element at `index`, shifting later elements one
    /// slot left. Capacity is unchanged.
    pub fn remove(&mut self, index: usize) -> Result<T, ContainerError> {
        if index >= self.len {
            return Err(self.index_error(index));
        }
        let value = self.data[index].take();
        self.data[index..self.len].rotate_left(1);
        self.len -= 1;
        value.ok_or_else(|| self.index_error(index))
    }

    /// Removes and returns the last element, or `None` if empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        self.data[self.len].take()
    }

    pub fn last(&self) -> Option<&T> {
        self.len.checked_sub(1).and_then(|i| self.get(i))
    }

    /// Drops every element. Capacity is kept.
    pub fn clear(&mut self) {
        for slot in &mut self.data[..self.len] {
            *slot = None;
        }
        self.len = 0;
    }

    /// Reallocates the buffer to exactly `max(len, 1)` slots.
    pub fn shrink_to_fit(&mut self) {
        let target = self.len.max(buffer::MIN_CAPACITY);
        if target < self.capacity() {
            self.resize(target);
        }
    }

    /// Iterates front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            slots: self.data[..self.len].iter(),
        }
    }

    fn reserve_one(&mut self) {
        if self.len == self.capacity() {
            self.resize(buffer::grown_capacity(self.capacity()));
        }
    }

    fn resize(&mut self, new_capacity: usize) {
        log::trace!(
            "dynamic array resize: {} -> {} (len {})",
            self.capacity(),
            new_capacity,
            self.len
        );
        self.data = buffer::relocate(self.data[..self.len].iter_mut(), new_capacity);
    }

    fn index_error(&self, index: usize) -> ContainerError {
        ContainerError::IndexError {
            index,
            len: self.len,
        }
    }
}

impl<T: Clone> Clone for DynamicArray<T> {
    fn clone(&self) -> Self {
        DynamicArray {
            data: self.data.clone(),
            len: self.len,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for DynamicArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<T> Extend<T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.append(value);
        }
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut arr = DynamicArray::new();
        arr.extend(iter);
        arr
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator over a [`DynamicArray`].
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    slots: std::slice::Iter<'a, Option<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.slots.next().and_then(Option::as_ref)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.slots.next_back().and_then(Option::as_ref)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
