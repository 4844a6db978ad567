use std::iter::FusedIterator;

use super::Map;
use crate::collections::hash::table::{self, IterMut};
use crate::collections::hash::{KeyValuePair, PairKey};

impl<K: Eq, V, S> IntoIterator for Map<K, V, S> {
    type Item = (K, V);

    type IntoIter = IntoIter<K, V, S>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self.inner.into_iter())
    }
}

/// A type for owned iteration over a [`Map`]. Produces `(key, value)` tuples.
pub struct IntoIter<K: Eq, V, S>(pub(crate) table::IntoIter<KeyValuePair<K, V>, PairKey, S>);

impl<K: Eq, V, S> Iterator for IntoIter<K, V, S> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(KeyValuePair::into_tuple)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K: Eq, V, S> ExactSizeIterator for IntoIter<K, V, S> {}

impl<K: Eq, V, S> FusedIterator for IntoIter<K, V, S> {}

impl<'a, K: Eq, V, S> IntoIterator for &'a Map<K, V, S> {
    type Item = &'a KeyValuePair<K, V>;

    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        Iter(self.inner.iter())
    }
}

/// A type for borrowed iteration over a [`Map`]'s entries. Produces values of type
/// `&KeyValuePair<K, V>`.
///
/// See [`Map::iter`].
pub struct Iter<'a, K, V>(pub(crate) table::Iter<'a, KeyValuePair<K, V>>);

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = &'a KeyValuePair<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

/// A type for borrowed iteration over a [`Map`]'s keys. Produces values of type `&K`.
///
/// See [`Map::keys`].
pub struct Keys<'a, K, V>(pub(crate) Iter<'a, K, V>);

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|entry| &entry.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}

impl<K, V> FusedIterator for Keys<'_, K, V> {}

/// A type for borrowed iteration over a [`Map`]'s values. Produces values of type `&V`.
///
/// See [`Map::values`].
pub struct Values<'a, K, V>(pub(crate) Iter<'a, K, V>);

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|entry| &entry.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}

impl<K, V> FusedIterator for Values<'_, K, V> {}

/// A type for mutable borrowed iteration over a [`Map`]'s values. Produces values of type
/// `&mut V`. There is no mutable iterator over keys.
///
/// See [`Map::values_mut`].
pub struct ValuesMut<'a, K, V>(pub(crate) IterMut<'a, KeyValuePair<K, V>>);

impl<'a, K, V> Iterator for ValuesMut<'a, K, V> {
    type Item = &'a mut V;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|entry| &mut entry.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K, V> ExactSizeIterator for ValuesMut<'_, K, V> {}

impl<K, V> FusedIterator for ValuesMut<'_, K, V> {}
