use std::iter::FusedIterator;

use super::Set;
use crate::collections::hash::table;
use crate::collections::hash::ValueKey;

impl<T: Eq, S> IntoIterator for Set<T, S> {
    type Item = T;

    type IntoIter = IntoIter<T, S>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self.inner.into_iter())
    }
}

/// A type for owned iteration over a [`Set`]. Produces values of type `T`.
pub struct IntoIter<T: Eq, S>(pub(crate) table::IntoIter<T, ValueKey, S>);

impl<T: Eq, S> Iterator for IntoIter<T, S> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T: Eq, S> ExactSizeIterator for IntoIter<T, S> {}

impl<T: Eq, S> FusedIterator for IntoIter<T, S> {}

impl<'a, T: Eq, S> IntoIterator for &'a Set<T, S> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter(self.inner.iter())
    }
}

/// A type for borrowed iteration over a [`Set`]. Produces values of type `&T`.
///
/// See [`Set::iter`].
pub struct Iter<'a, T>(pub(crate) table::Iter<'a, T>);

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter(self.0.clone())
    }
}
