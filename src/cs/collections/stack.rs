use super::dynamic_array::DynamicArray;
use crate::error::ContainerError;

/// A LIFO stack on top of [`DynamicArray`]. Push and pop work at the tail, so
/// both are amortized O(1).
///
/// # Examples
/// ```
/// use order_stats::collections::Stack;
///
/// let mut stack = Stack::new();
/// stack.push(1);
/// stack.push(2);
/// assert_eq!(stack.peek(), Ok(&2));
/// assert_eq!(stack.pop(), Ok(2));
/// assert_eq!(stack.pop(), Ok(1));
/// assert!(stack.pop().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    items: DynamicArray<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Stack {
            items: DynamicArray::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Stack {
            items: DynamicArray::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, value: T) {
        self.items.append(value);
    }

    /// Removes and returns the top element.
    pub fn pop(&mut self) -> Result<T, ContainerError> {
        self.items
            .pop()
            .ok_or(ContainerError::Underflow("pop from empty stack"))
    }

    /// Returns the top element without removing it.
    pub fn peek(&self) -> Result<&T, ContainerError> {
        self.items
            .last()
            .ok_or(ContainerError::Underflow("peek from empty stack"))
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Stack {
            items: iter.into_iter().collect(),
        }
    }
}
