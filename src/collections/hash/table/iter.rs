use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::ptr::NonNull;

use super::{HashNode, HashTable, MetaData};
use crate::collections::hash::KeyStrategy;

impl<T, X: KeyStrategy<T>, S> IntoIterator for HashTable<T, X, S> {
    type Item = T;

    type IntoIter = IntoIter<T, X, S>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

/// A type for owned iteration over a [`HashTable`]. Produces values of type `T`, in the same order
/// as [`HashTable::iter`].
///
/// Entries are removed from the table one at a time, so dropping the iterator part way through
/// drops the remaining entries along with the table.
pub struct IntoIter<T, X: KeyStrategy<T>, S>(pub(crate) HashTable<T, X, S>);

impl<T, X: KeyStrategy<T>, S> Iterator for IntoIter<T, X, S> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len(), Some(self.0.len()))
    }
}

impl<T, X: KeyStrategy<T>, S> ExactSizeIterator for IntoIter<T, X, S> {}

impl<T, X: KeyStrategy<T>, S> FusedIterator for IntoIter<T, X, S> {}

impl<'a, T, X: KeyStrategy<T>, S> IntoIterator for &'a HashTable<T, X, S> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            cursor: Cursor::new(self.meta.first()),
            len: self.len(),
            _phantom: PhantomData,
        }
    }
}

/// Walks the occupied bucket list, then each bucket's chain.
struct Cursor<T> {
    meta: Option<NonNull<MetaData<T>>>,
    node: Option<NonNull<HashNode<T>>>,
}

impl<T> Cursor<T> {
    const fn new(meta: Option<NonNull<MetaData<T>>>) -> Cursor<T> {
        Cursor {
            meta,
            node: None,
        }
    }

    /// Returns the next occupied node. The caller must hold a borrow of the table for as long as
    /// the node is used.
    fn advance(&mut self) -> Option<NonNull<HashNode<T>>> {
        loop {
            if let Some(node) = self.node {
                // SAFETY: Nodes reached through the records of a borrowed table are live.
                let next = unsafe { node.as_ref() }.next;
                self.node = next.map(|next| next.as_non_null());
                return Some(node);
            }

            // SAFETY: Records of a borrowed table are live.
            let meta = unsafe { self.meta?.as_ref() };
            self.meta = meta.next;

            // SAFETY: Records point into the bucket array of the same table.
            if unsafe { meta.bucket.as_ref() }.is_occupied() {
                self.node = Some(meta.bucket);
            }
        }
    }
}

/// A type for borrowed iteration over a [`HashTable`]. Produces values of type `&T`.
///
/// See [`HashTable::iter`].
pub struct Iter<'a, T> {
    cursor: Cursor<T>,
    len: usize,
    _phantom: PhantomData<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.cursor.advance()?;
        self.len = self.len.saturating_sub(1);
        // SAFETY: The table is borrowed immutably for 'a.
        Some(unsafe { node.as_ref() }.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            cursor: Cursor {
                meta: self.cursor.meta,
                node: self.cursor.node,
            },
            len: self.len,
            _phantom: PhantomData,
        }
    }
}

/// A type for mutable borrowed iteration over a [`HashTable`]'s entries. Only exposed through
/// wrappers that prevent keys from being changed.
pub(crate) struct IterMut<'a, T> {
    cursor: Cursor<T>,
    len: usize,
    _phantom: PhantomData<&'a mut T>,
}

impl<T> IterMut<'_, T> {
    pub(crate) const fn new(meta: Option<NonNull<MetaData<T>>>, len: usize) -> Self {
        IterMut {
            cursor: Cursor::new(meta),
            len,
            _phantom: PhantomData,
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        let mut node = self.cursor.advance()?;
        self.len = self.len.saturating_sub(1);
        // SAFETY: The table is borrowed mutably for 'a and every node is yielded at most once.
        Some(unsafe { node.as_mut() }.value_mut())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}
