use std::fmt::{self, Display, Formatter};

/// Selects which part of a stored entry acts as its key. A [`HashTable`](super::HashTable) only
/// ever hashes and compares the key returned here, so the same engine can back both a table of
/// plain values ([`ValueKey`]) and a table of [`KeyValuePair`]s ([`PairKey`]).
pub trait KeyStrategy<T> {
    type Key: Eq + ?Sized;

    fn key(entry: &T) -> &Self::Key;
}

/// The whole entry is the key, as in a [`Set`](super::Set).
#[derive(Debug, Clone, Copy)]
pub struct ValueKey;

impl<T: Eq> KeyStrategy<T> for ValueKey {
    type Key = T;

    fn key(entry: &T) -> &T {
        entry
    }
}

/// The entry is a [`KeyValuePair`] keyed by its first half, as in a [`Map`](super::Map).
#[derive(Debug, Clone, Copy)]
pub struct PairKey;

impl<K: Eq, V> KeyStrategy<KeyValuePair<K, V>> for PairKey {
    type Key = K;

    fn key(entry: &KeyValuePair<K, V>) -> &K {
        &entry.key
    }
}

/// A single entry of a [`Map`](super::Map).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyValuePair<K, V> {
    pub key: K,
    pub value: V,
}

impl<K, V> KeyValuePair<K, V> {
    pub const fn new(key: K, value: V) -> KeyValuePair<K, V> {
        KeyValuePair {
            key,
            value,
        }
    }

    pub fn into_tuple(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K, V> From<(K, V)> for KeyValuePair<K, V> {
    fn from((key, value): (K, V)) -> Self {
        KeyValuePair::new(key, value)
    }
}

impl<K: Display, V: Display> Display for KeyValuePair<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.value)
    }
}
