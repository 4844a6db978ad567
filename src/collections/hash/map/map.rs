use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};
use std::mem;
use std::ops::Index;

use super::{Iter, Keys, Values, ValuesMut};
use crate::collections::hash::{DefaultHashBuilder, HashTable, KeyHasher, KeyValuePair, PairKey, TableConfig};
use crate::error::{ArgumentOutOfRange, KeyNotFound};
use crate::util::fmt::display_list;
use crate::util::result::ResultExtension;

/// A map of keys to values, stored as [`KeyValuePair`]s in a separate-chaining [`HashTable`].
///
/// Keys are hashed with `S`, which defaults to [`DefaultHashBuilder`]. Any
/// [`BuildHasher`](std::hash::BuildHasher) works, as does a [`HashFn`](super::super::HashFn) for
/// keys that need a custom hash function.
///
/// It is a logic error for keys in a Map to be manipulated in a way that changes their hash.
/// Because of this, Map's API prevents mutable access to its keys.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of entries in the Map.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `add` / `insert` | `O(1)`*, `O(n)` |
/// | `at` / `find` | `O(1)`* |
/// | `remove` | `O(1)`* |
/// | `contains_key` | `O(1)`* |
/// | `contains_value` | `O(n)` |
/// | `clear` | `O(n)` |
///
/// \* Proportional to the length of the key's chain in the event of a hash collision. Inserting
/// takes `O(n)` when the Map has to grow first.
pub struct Map<K: Eq, V, S = DefaultHashBuilder> {
    pub(crate) inner: HashTable<KeyValuePair<K, V>, PairKey, S>,
}

impl<K: Eq, V, S: Default> Map<K, V, S> {
    /// Creates a new, empty Map with the default capacity, load factor and hasher.
    pub fn new() -> Map<K, V, S> {
        Map {
            inner: HashTable::new(),
        }
    }

    /// Creates a new Map with `cap` buckets. A capacity of 0 doesn't allocate.
    pub fn with_cap(cap: usize) -> Map<K, V, S> {
        Map {
            inner: HashTable::with_cap(cap),
        }
    }
}

impl<K: Eq, V, S> Map<K, V, S> {
    pub fn with_hasher(hasher: S) -> Map<K, V, S> {
        Map {
            inner: HashTable::with_hasher(hasher),
        }
    }

    pub fn with_cap_and_hasher(cap: usize, hasher: S) -> Map<K, V, S> {
        Map {
            inner: HashTable::with_cap_and_hasher(cap, hasher),
        }
    }

    /// Creates a new Map from the provided `config` and `hasher`.
    ///
    /// # Errors
    /// Returns [`ArgumentOutOfRange`] if the load factor doesn't lie within `(0, 1]`.
    pub fn with_config(config: TableConfig, hasher: S) -> Result<Map<K, V, S>, ArgumentOutOfRange> {
        Ok(Map {
            inner: HashTable::with_config(config, hasher)?,
        })
    }

    /// Returns the number of entries in the Map.
    pub const fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if the Map contains no entries.
    pub const fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the number of buckets in the Map.
    pub const fn cap(&self) -> usize {
        self.inner.cap()
    }

    pub const fn load_factor(&self) -> f64 {
        self.inner.load_factor()
    }

    pub const fn hasher(&self) -> &S {
        self.inner.hasher()
    }

    /// Removes every entry, keeping the current capacity.
    pub fn clear(&mut self) {
        self.inner.clear()
    }

    /// Returns the entry for `key`.
    ///
    /// # Errors
    /// Returns [`KeyNotFound`] if the Map has no entry for `key`.
    pub fn find<Q>(&self, key: &Q) -> Result<&KeyValuePair<K, V>, KeyNotFound>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
        S: KeyHasher<Q>,
    {
        self.inner.get(key).ok_or(KeyNotFound::KEY)
    }

    /// Returns a reference to the value associated with `key`.
    ///
    /// # Errors
    /// Returns [`KeyNotFound`] if the Map has no entry for `key`.
    pub fn at<Q>(&self, key: &Q) -> Result<&V, KeyNotFound>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
        S: KeyHasher<Q>,
    {
        self.find(key).map(|entry| &entry.value)
    }

    /// Returns a mutable reference to the value associated with `key`.
    ///
    /// # Errors
    /// Returns [`KeyNotFound`] if the Map has no entry for `key`.
    pub fn at_mut<Q>(&mut self, key: &Q) -> Result<&mut V, KeyNotFound>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
        S: KeyHasher<Q>,
    {
        self.inner.get_mut(key)
            .map(|entry| &mut entry.value)
            .ok_or(KeyNotFound::KEY)
    }

    /// Returns a reference to the value associated with `key`, or None if there isn't one.
    pub fn try_get_value<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
        S: KeyHasher<Q>,
    {
        self.inner.get(key).map(|entry| &entry.value)
    }

    /// Returns true if the Map contains an entry for `key`.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
        S: KeyHasher<Q>,
    {
        self.inner.contains(key)
    }

    /// Removes the entry for `key`. Returns false if there was no such entry.
    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
        S: KeyHasher<Q>,
    {
        self.inner.erase(key)
    }

    /// Removes the entry for `key`, returning its value if it existed.
    pub fn take<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
        S: KeyHasher<Q>,
    {
        self.inner.take(key).map(|entry| entry.value)
    }

    /// Returns an iterator over all entries in the Map, as references.
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.into_iter()
    }

    /// Returns an iterator over all keys in the Map, as references.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys(self.iter())
    }

    /// Returns an iterator over all values in the Map, as references.
    pub fn values(&self) -> Values<'_, K, V> {
        Values(self.iter())
    }

    /// Returns an iterator over all values in the Map, as mutable references.
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        ValuesMut(self.inner.iter_mut())
    }
}

impl<K: Eq, V: PartialEq, S> Map<K, V, S> {
    /// Returns true if any entry has a value equal to `value`. This checks every entry.
    pub fn contains_value(&self, value: &V) -> bool {
        self.values().any(|existing| existing == value)
    }
}

impl<K: Eq, V, S: KeyHasher<K>> Map<K, V, S> {
    /// Adds an entry for `key`, returning false (and dropping both `key` and `value`) if the Map
    /// already has one.
    pub fn add(&mut self, key: K, value: V) -> bool {
        self.inner.insert(KeyValuePair::new(key, value))
    }

    /// Inserts an entry for `key`, returning the previous value if there was one.
    ///
    /// As with the standard library, the key isn't changed if it already exists.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self.inner.get_mut(&key) {
            Some(existing) => Some(mem::replace(&mut existing.value, value)),
            None => {
                self.inner.insert(KeyValuePair::new(key, value));
                None
            },
        }
    }

    /// Grows the Map to at least `cap` buckets.
    pub fn reserve(&mut self, cap: usize) {
        self.inner.reserve(cap)
    }
}

impl<K, V, S, Q> Index<&Q> for Map<K, V, S>
where
    K: Eq + Borrow<Q>,
    Q: Eq + ?Sized,
    S: KeyHasher<Q>,
{
    type Output = V;

    /// # Panics
    /// Panics with the [`KeyNotFound`] message if the Map has no entry for `key`.
    fn index(&self, key: &Q) -> &Self::Output {
        self.at(key).throw()
    }
}

impl<K: Eq, V, S: Default> Default for Map<K, V, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Clone, V: Clone, S: KeyHasher<K> + Clone> Clone for Map<K, V, S> {
    fn clone(&self) -> Self {
        Map {
            inner: self.inner.clone(),
        }
    }
}

impl<K: Eq, V: PartialEq, S: KeyHasher<K>> PartialEq for Map<K, V, S> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<K: Eq, V: Eq, S: KeyHasher<K>> Eq for Map<K, V, S> {}

impl<K: Eq, V, S: KeyHasher<K>> Extend<(K, V)> for Map<K, V, S> {
    /// Inserts every pair, overwriting the values of keys that are already present.
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: Eq, V, S: KeyHasher<K> + Default> FromIterator<(K, V)> for Map<K, V, S> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Map::new();
        map.extend(iter);
        map
    }
}

impl<K: Eq, V, S: KeyHasher<K> + Default, const N: usize> From<[(K, V); N]> for Map<K, V, S> {
    fn from(value: [(K, V); N]) -> Self {
        value.into_iter().collect()
    }
}

impl<K: Eq + Debug, V: Debug, S> Debug for Map<K, V, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|entry| (&entry.key, &entry.value)))
            .finish()
    }
}

impl<K: Eq + Display, V: Display, S> Display for Map<K, V, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        display_list(f, self.iter())
    }
}
