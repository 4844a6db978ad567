use std::borrow::{Borrow, BorrowMut};
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::ops::{Deref, DerefMut};
use std::ptr;
use std::slice;

use crate::collections::contiguous::HeapCollection;
use crate::error::IndexOutOfRange;
use crate::util::fmt::display_list;

/// A variable size contiguous collection, based on [`HeapCollection<T>`].
///
/// The first push allocates 16 slots and the capacity doubles whenever the List is full. Indexed
/// access is checked and returns an [`IndexOutOfRange`] instead of panicking; slice indexing
/// through [`Deref`] is available for the panicking equivalent.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the List.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push` | `O(1)`*, `O(n)` |
/// | `pop` | `O(1)` |
/// | `insert` | `O(n-i)` |
/// | `remove` | `O(n-i)` |
/// | `reserve` | `O(n)`**, `O(1)` |
/// | `clear` | `O(n)` |
///
/// \* If the List doesn't have enough capacity for the new element, `push` will take `O(n)`.
///
/// \** If the List has enough capacity already, `reserve` is `O(1)`.
pub struct List<T> {
    pub(crate) buf: HeapCollection<T>,
    pub(crate) len: usize,
}

impl<T> List<T> {
    /// Creates a new List with length and capacity 0. Memory will be allocated by the first push.
    ///
    /// # Examples
    /// ```
    /// # use chained_std::collections::contiguous::List;
    /// let list: List<u8> = List::new();
    /// assert_eq!(list.len(), 0);
    /// assert_eq!(list.cap(), 0);
    /// ```
    pub const fn new() -> List<T> {
        List {
            buf: HeapCollection::new(),
            len: 0,
        }
    }

    /// Creates a new List with capacity exactly equal to `cap`, allowing values to be added
    /// without reallocation.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn with_cap(cap: usize) -> List<T> {
        List {
            buf: HeapCollection::with_cap(cap),
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

    /// Pushes `value` onto the end of the List, growing it first if it is full.
    ///
    /// # Panics
    /// Panics if the memory layout of the List would have a size that exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use chained_std::collections::contiguous::List;
    /// let mut list = List::new();
    /// for i in 0..=5 {
    ///     list.push(i);
    /// }
    /// assert_eq!(&*list, &[0, 1, 2, 3, 4, 5]);
    /// assert_eq!(list.cap(), 16);
    /// ```
    pub fn push(&mut self, value: T) {
        if self.len == self.cap() {
            self.buf.grow(0, self.len);
        }

        // SAFETY: There is at least one free slot at len.
        unsafe { self.buf.memory().write(self.len, value); }
        self.len += 1;
    }

    /// Pops the last value off the end of the List, or returns None if it is empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }

        self.len -= 1;
        // SAFETY: The slot at the old last index is initialized, and is no longer considered live
        // now that len has been decremented.
        Some(unsafe { self.buf.memory().read(self.len) })
    }

    /// Inserts `value` at `index`, shifting every later element back by one. An `index` equal to
    /// the length appends.
    ///
    /// # Errors
    /// Returns [`IndexOutOfRange`] if `index` is greater than the length, in which case `value` is
    /// dropped.
    ///
    /// # Examples
    /// ```
    /// # use chained_std::collections::contiguous::List;
    /// let mut list = List::from([0, 1, 2]);
    /// list.insert(1, 100).unwrap();
    /// list.insert(1, 200).unwrap();
    /// list.insert(5, 300).unwrap();
    /// assert_eq!(&*list, &[0, 200, 100, 1, 2, 300]);
    /// assert!(list.insert(10, 400).is_err());
    /// ```
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), IndexOutOfRange> {
        if index > self.len {
            return Err(IndexOutOfRange { index, len: self.len });
        }

        if self.len == self.cap() {
            self.buf.grow(0, self.len);
        }

        // SAFETY: index <= len < cap, so both the shifted range and the written slot are within
        // the block. The slots from index onwards are initialized and are moved back by one.
        unsafe {
            let at = self.buf.memory().add(index);
            ptr::copy(at, at.add(1), self.len - index);
            at.write(value);
        }
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the element at `index`, shifting every later element forward by one.
    ///
    /// # Errors
    /// Returns [`IndexOutOfRange`] if `index` isn't less than the length.
    pub fn remove(&mut self, index: usize) -> Result<T, IndexOutOfRange> {
        self.check_index(index)?;

        // SAFETY: index < len, so the slot is initialized and the shifted range is within the
        // live elements.
        let value = unsafe {
            let at = self.buf.memory().add(index);
            let value = at.read();
            ptr::copy(at.add(1), at, self.len - index - 1);
            value
        };
        self.len -= 1;
        Ok(value)
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    /// Returns [`IndexOutOfRange`] if `index` isn't less than the length.
    pub fn get(&self, index: usize) -> Result<&T, IndexOutOfRange> {
        self.check_index(index)?;
        Ok(&self[index])
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    /// Returns [`IndexOutOfRange`] if `index` isn't less than the length.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfRange> {
        self.check_index(index)?;
        Ok(&mut self[index])
    }

    /// Drops every element, keeping the capacity.
    pub fn clear(&mut self) {
        let len = self.len;
        // Zero the length first, so a panicking destructor leaks instead of double dropping.
        self.len = 0;
        // SAFETY: The first len slots were initialized.
        unsafe { self.buf.drop_range(0, len); }
    }

    /// Grows the List to at least `cap` slots. Does nothing if it is already that large.
    ///
    /// # Panics
    /// Panics if the memory layout of the List would have a size that exceeds [`isize::MAX`].
    pub fn reserve(&mut self, cap: usize) {
        if cap <= self.cap() { return; }

        self.buf.realloc(cap, 0, self.len);
    }

    pub(crate) const fn check_index(&self, index: usize) -> Result<(), IndexOutOfRange> {
        if index < self.len {
            Ok(())
        } else {
            Err(IndexOutOfRange { index, len: self.len })
        }
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        self.clear();
        // The HeapCollection frees the block when it is dropped, after this.
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for List<T> {
    fn extend<A: IntoIterator<Item = T>>(&mut self, iter: A) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for List<T> {
    fn extend<A: IntoIterator<Item = &'a T>>(&mut self, iter: A) {
        self.extend(iter.into_iter().copied())
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let iter = value.into_iter();
        let mut list = List::with_cap(iter.size_hint().0);
        list.extend(iter);
        list
    }
}

impl<T, const N: usize> From<[T; N]> for List<T> {
    fn from(value: [T; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<T> Deref for List<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: The first len slots are initialized and the pointer is non-null and aligned,
        // dangling only when len is 0. The borrow of self prevents mutation.
        unsafe { slice::from_raw_parts(self.buf.as_non_null().as_ptr(), self.len) }
    }
}

impl<T> DerefMut for List<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As for deref, with the mutable borrow of self preventing any other access.
        unsafe { slice::from_raw_parts_mut(self.buf.as_non_null().as_ptr(), self.len) }
    }
}

impl<T> AsRef<[T]> for List<T> {
    fn as_ref(&self) -> &[T] {
        self
    }
}

impl<T> AsMut<[T]> for List<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T> Borrow<[T]> for List<T> {
    fn borrow(&self) -> &[T] {
        self
    }
}

impl<T> BorrowMut<[T]> for List<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        let mut list = Self::with_cap(self.cap());
        list.extend(self.iter().cloned());
        list
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for List<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        **self == *other
    }
}

impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Debug> Debug for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Display> Display for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        display_list(f, self.iter())
    }
}
