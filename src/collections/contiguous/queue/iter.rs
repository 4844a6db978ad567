use std::iter::FusedIterator;

use super::Queue;

impl<T> IntoIterator for Queue<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

/// A type for owned iteration over a [`Queue`]. Produces values of type `T` in the order they
/// would be dequeued.
///
/// Any elements that haven't been produced are dropped along with the iterator.
pub struct IntoIter<T>(pub(crate) Queue<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.dequeue().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len(), Some(self.0.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            queue: self,
            offset: 0,
        }
    }
}

/// A type for borrowed iteration over a [`Queue`], from front to back.
pub struct Iter<'a, T> {
    pub(crate) queue: &'a Queue<T>,
    pub(crate) offset: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.offset >= self.queue.len() {
            return None;
        }

        let index = self.queue.physical_index(self.offset);
        self.offset += 1;
        // SAFETY: Every offset below len maps to an initialized slot, and the shared borrow of the
        // Queue prevents it from changing.
        Some(unsafe { self.queue.buf.memory().slot(index) })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.queue.len() - self.offset;
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            queue: self.queue,
            offset: self.offset,
        }
    }
}
