use std::fmt::{self, Debug, Display, Formatter};
use std::iter::Rev;
use std::slice;

use crate::collections::contiguous::List;
use crate::error::InvalidOperation;
use crate::util::fmt::display_list;

const EMPTY: InvalidOperation = InvalidOperation { reason: "the Stack is empty" };

/// A last-in-first-out collection, backed by a [`List`] so that it shares the same growth law.
///
/// Iteration and formatting go from the top of the Stack to the bottom, in the order elements
/// would be popped.
pub struct Stack<T> {
    pub(crate) inner: List<T>,
}

impl<T> Stack<T> {
    /// Creates a new, empty Stack. Memory will be allocated by the first push.
    pub const fn new() -> Stack<T> {
        Stack {
            inner: List::new(),
        }
    }

    pub fn with_cap(cap: usize) -> Stack<T> {
        Stack {
            inner: List::with_cap(cap),
        }
    }

    pub const fn len(&self) -> usize {
        self.inner.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub const fn cap(&self) -> usize {
        self.inner.cap()
    }

    /// Pushes `value` onto the top of the Stack.
    pub fn push(&mut self, value: T) {
        self.inner.push(value)
    }

    /// Removes and returns the value on top of the Stack.
    ///
    /// # Errors
    /// Returns [`InvalidOperation`] if the Stack is empty.
    ///
    /// # Examples
    /// ```
    /// # use chained_std::collections::contiguous::Stack;
    /// let mut stack = Stack::new();
    /// stack.push(1);
    /// stack.push(2);
    /// assert_eq!(stack.pop(), Ok(2));
    /// assert_eq!(stack.pop(), Ok(1));
    /// assert!(stack.pop().is_err());
    /// ```
    pub fn pop(&mut self) -> Result<T, InvalidOperation> {
        self.inner.pop().ok_or(EMPTY)
    }

    /// Returns a reference to the value on top of the Stack.
    ///
    /// # Errors
    /// Returns [`InvalidOperation`] if the Stack is empty.
    pub fn peek(&self) -> Result<&T, InvalidOperation> {
        self.inner.last().ok_or(EMPTY)
    }

    /// Drops every element, keeping the capacity.
    pub fn clear(&mut self) {
        self.inner.clear()
    }

    /// Returns an iterator over the Stack from top to bottom.
    pub fn iter(&self) -> Rev<slice::Iter<'_, T>> {
        self.inner.iter().rev()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for Stack<T> {
    /// Pushes every item in order, so the last item ends up on top.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.inner.extend(iter)
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Stack {
            inner: iter.into_iter().collect(),
        }
    }
}

impl<T: Clone> Clone for Stack<T> {
    fn clone(&self) -> Self {
        Stack {
            inner: self.inner.clone(),
        }
    }
}

impl<T: PartialEq> PartialEq for Stack<T> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T: Eq> Eq for Stack<T> {}

impl<T: Debug> Debug for Stack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Display> Display for Stack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        display_list(f, self.iter())
    }
}
