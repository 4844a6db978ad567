use std::fmt::{self, Debug, Display, Formatter};

use super::Iter;
use crate::collections::contiguous::HeapCollection;
use crate::error::InvalidOperation;
use crate::util::fmt::display_list;

const EMPTY: InvalidOperation = InvalidOperation { reason: "the Queue is empty" };

/// A first-in-first-out collection, stored as a ring buffer in a [`HeapCollection`].
///
/// The live elements start at `head` and may wrap around the end of the buffer. When the buffer is
/// full, growing it moves the elements to the start of a new block, in order, following the same
/// growth law as [`List`](super::super::List).
///
/// # Time Complexity
/// | Method | Complexity |
/// |-|-|
/// | `enqueue` | `O(1)`*, `O(n)` |
/// | `dequeue` | `O(1)` |
/// | `peek` | `O(1)` |
/// | `clear` | `O(n)` |
///
/// \* If the Queue is full, `enqueue` will take `O(n)`.
pub struct Queue<T> {
    pub(crate) buf: HeapCollection<T>,
    pub(crate) head: usize,
    pub(crate) len: usize,
}

impl<T> Queue<T> {
    /// Creates a new, empty Queue. Memory will be allocated by the first enqueue.
    pub const fn new() -> Queue<T> {
        Queue {
            buf: HeapCollection::new(),
            head: 0,
            len: 0,
        }
    }

    pub fn with_cap(cap: usize) -> Queue<T> {
        Queue {
            buf: HeapCollection::with_cap(cap),
            head: 0,
            len: 0,
        }
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub const fn cap(&self) -> usize {
        self.buf.cap()
    }

    /// Adds `value` to the back of the Queue, growing it first if it is full.
    ///
    /// # Examples
    /// ```
    /// # use chained_std::collections::contiguous::Queue;
    /// let mut queue = Queue::new();
    /// queue.enqueue('a');
    /// queue.enqueue('b');
    /// assert_eq!(queue.dequeue(), Ok('a'));
    /// assert_eq!(queue.peek(), Ok(&'b'));
    /// ```
    pub fn enqueue(&mut self, value: T) {
        if self.len == self.cap() {
            self.buf.grow(self.head, self.len);
            self.head = 0;
        }

        let index = self.physical_index(self.len);
        // SAFETY: The Queue isn't full, so the slot after the last element is free.
        unsafe { self.buf.memory().write(index, value); }
        self.len += 1;
    }

    /// Removes and returns the value at the front of the Queue.
    ///
    /// # Errors
    /// Returns [`InvalidOperation`] if the Queue is empty.
    pub fn dequeue(&mut self) -> Result<T, InvalidOperation> {
        if self.len == 0 {
            return Err(EMPTY);
        }

        // SAFETY: The Queue isn't empty, so the slot at head is initialized. It stops being live
        // when head moves past it.
        let value = unsafe { self.buf.memory().read(self.head) };
        self.head = self.physical_index(1);
        self.len -= 1;
        Ok(value)
    }

    /// Returns a reference to the value at the front of the Queue.
    ///
    /// # Errors
    /// Returns [`InvalidOperation`] if the Queue is empty.
    pub fn peek(&self) -> Result<&T, InvalidOperation> {
        if self.len == 0 {
            return Err(EMPTY);
        }

        // SAFETY: The Queue isn't empty, so the slot at head is initialized.
        Ok(unsafe { self.buf.memory().slot(self.head) })
    }

    /// Drops every element, keeping the capacity.
    pub fn clear(&mut self) {
        let (head, len) = (self.head, self.len);
        self.head = 0;
        self.len = 0;
        // SAFETY: The range was the live range before it was reset.
        unsafe { self.buf.drop_range(head, len); }
    }

    /// Returns an iterator over the Queue from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Converts a position relative to the front of the Queue into an index in the buffer.
    pub(crate) const fn physical_index(&self, offset: usize) -> usize {
        (self.head + offset) % self.cap()
    }
}

impl<T> Drop for Queue<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.enqueue(item);
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

impl<T, const N: usize> From<[T; N]> for Queue<T> {
    fn from(value: [T; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<T: Clone> Clone for Queue<T> {
    fn clone(&self) -> Self {
        let mut queue = Queue::with_cap(self.cap());
        queue.extend(self.iter().cloned());
        queue
    }
}

impl<T: PartialEq> PartialEq for Queue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Queue<T> {}

impl<T: Debug> Debug for Queue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Display> Display for Queue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        display_list(f, self.iter())
    }
}

// SAFETY: A Queue exclusively owns its elements.
unsafe impl<T: Send> Send for Queue<T> {}
// SAFETY: Shared references only provide shared access to elements.
unsafe impl<T: Sync> Sync for Queue<T> {}
