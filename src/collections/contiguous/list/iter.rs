use std::iter::FusedIterator;
use std::mem;
use std::slice;

use super::List;
use crate::collections::contiguous::HeapCollection;

impl<T> IntoIterator for List<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        let len = mem::take(&mut self.len);
        IntoIter {
            buf: mem::take(&mut self.buf),
            front: 0,
            back: len,
        }
    }
}

/// A type for owned iteration over a [`List`]. Produces values of type `T`, from front to back.
///
/// Any elements that haven't been produced are dropped along with the iterator.
pub struct IntoIter<T> {
    pub(crate) buf: HeapCollection<T>,
    pub(crate) front: usize,
    pub(crate) back: usize,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }

        // SAFETY: Slots between front and back are initialized and each is read once.
        let value = unsafe { self.buf.memory().read(self.front) };
        self.front += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }

        self.back -= 1;
        // SAFETY: Slots between front and back are initialized and each is read once.
        Some(unsafe { self.buf.memory().read(self.back) })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        // SAFETY: Only the slots between front and back are still initialized.
        unsafe { self.buf.drop_range(self.front, self.back - self.front); }
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;

    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut List<T> {
    type Item = &'a mut T;

    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
