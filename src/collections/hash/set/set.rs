use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};

use super::Iter;
use crate::collections::hash::{DefaultHashBuilder, HashTable, KeyHasher, TableConfig, ValueKey};
use crate::collections::traits::SetLike;
use crate::error::ArgumentOutOfRange;
use crate::util::fmt::display_list;

/// A set of unique values, stored in a separate-chaining [`HashTable`] that uses each value as its
/// own key.
///
/// Values are hashed with `S`, which defaults to [`DefaultHashBuilder`]. Lazy set operations are
/// available through [`SetLike`], while [`union`](Set::union) and [`intersect`](Set::intersect)
/// modify a Set in place.
///
/// It is a logic error for values in a Set to be manipulated in a way that changes their hash.
/// Because of this, there is no way to mutably borrow the values of a Set.
pub struct Set<T: Eq, S = DefaultHashBuilder> {
    pub(crate) inner: HashTable<T, ValueKey, S>,
}

impl<T: Eq, S: Default> Set<T, S> {
    /// Creates a new, empty Set with the default capacity, load factor and hasher.
    pub fn new() -> Set<T, S> {
        Set {
            inner: HashTable::new(),
        }
    }

    /// Creates a new Set with `cap` buckets. A capacity of 0 doesn't allocate.
    pub fn with_cap(cap: usize) -> Set<T, S> {
        Set {
            inner: HashTable::with_cap(cap),
        }
    }
}

impl<T: Eq, S> Set<T, S> {
    pub fn with_hasher(hasher: S) -> Set<T, S> {
        Set {
            inner: HashTable::with_hasher(hasher),
        }
    }

    pub fn with_cap_and_hasher(cap: usize, hasher: S) -> Set<T, S> {
        Set {
            inner: HashTable::with_cap_and_hasher(cap, hasher),
        }
    }

    /// Creates a new Set from the provided `config` and `hasher`.
    ///
    /// # Errors
    /// Returns [`ArgumentOutOfRange`] if the load factor doesn't lie within `(0, 1]`.
    pub fn with_config(config: TableConfig, hasher: S) -> Result<Set<T, S>, ArgumentOutOfRange> {
        Ok(Set {
            inner: HashTable::with_config(config, hasher)?,
        })
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

    pub const fn load_factor(&self) -> f64 {
        self.inner.load_factor()
    }

    pub const fn hasher(&self) -> &S {
        self.inner.hasher()
    }

    pub fn clear(&mut self) {
        self.inner.clear()
    }

    /// Returns an iterator over all values in the Set, as references.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Returns true if the Set contains a value equal to `value`.
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Eq + ?Sized,
        S: KeyHasher<Q>,
    {
        self.inner.contains(value)
    }

    /// Returns a reference to the stored value equal to `value`, if there is one.
    pub fn get<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Eq + ?Sized,
        S: KeyHasher<Q>,
    {
        self.inner.get(value)
    }

    /// Removes the value equal to `value`. Returns false if there was no such value.
    pub fn remove<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Eq + ?Sized,
        S: KeyHasher<Q>,
    {
        self.inner.erase(value)
    }

    /// Removes and returns the value equal to `value`, if there is one.
    pub fn take<Q>(&mut self, value: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Eq + ?Sized,
        S: KeyHasher<Q>,
    {
        self.inner.take(value)
    }
}

impl<T: Eq, S: KeyHasher<T>> Set<T, S> {
    /// Adds `value` to the Set, returning false (and dropping `value`) if an equal value is already
    /// present.
    pub fn add(&mut self, value: T) -> bool {
        self.inner.insert(value)
    }

    /// Adds `value`, replacing and returning any equal value already present.
    pub fn replace(&mut self, value: T) -> Option<T> {
        self.inner.replace(value)
    }

    /// Grows the Set to at least `cap` buckets.
    pub fn reserve(&mut self, cap: usize) {
        self.inner.reserve(cap)
    }

    /// Keeps only the values for which `keep` returns true.
    pub fn retain<F: FnMut(&T) -> bool>(&mut self, keep: F) {
        self.inner.retain(keep)
    }

    /// Removes every value that isn't also in `other`. (`self ∩= other`)
    pub fn intersect<S2: KeyHasher<T>>(&mut self, other: &Set<T, S2>) {
        self.inner.retain(|value| other.contains(value))
    }

    /// Returns true if `self` and `other` have at least one value in common.
    pub fn overlaps<S2: KeyHasher<T>>(&self, other: &Set<T, S2>) -> bool {
        if self.len() <= other.len() {
            self.iter().any(|value| other.contains(value))
        } else {
            other.iter().any(|value| self.contains(value))
        }
    }

    /// Returns true if `self` and `other` contain exactly the same values, regardless of order,
    /// capacity or hasher.
    pub fn set_equals<S2: KeyHasher<T>>(&self, other: &Set<T, S2>) -> bool {
        self.len() == other.len() && self.is_subset(other)
    }

    /// Returns true if every value of `self` is in `other`. (`self ⊆ other`)
    pub fn is_subset<S2: KeyHasher<T>>(&self, other: &Set<T, S2>) -> bool {
        self.len() <= other.len() && self.iter().all(|value| other.contains(value))
    }

    /// Returns true if every value of `other` is in `self`. (`self ⊇ other`)
    pub fn is_superset<S2: KeyHasher<T>>(&self, other: &Set<T, S2>) -> bool {
        other.is_subset(self)
    }
}

impl<T: Eq + Clone, S: KeyHasher<T>> Set<T, S> {
    /// Adds a copy of every value in `other` that isn't already present. (`self ∪= other`)
    pub fn union<S2>(&mut self, other: &Set<T, S2>) {
        for value in other {
            if !self.contains(value) {
                self.add(value.clone());
            }
        }
    }
}

impl<T: Eq + Clone, S: KeyHasher<T> + Clone> Set<T, S> {
    /// Creates a new Set containing every value in either `a` or `b`. The result uses the
    /// configuration and hasher of `a`.
    pub fn union_of(a: &Set<T, S>, b: &Set<T, S>) -> Set<T, S> {
        let mut result = a.clone();
        result.union(b);
        result
    }

    /// Creates a new Set containing every value in both `a` and `b`, in the order they appear in
    /// `a`. The result uses the hasher of `a`.
    pub fn intersect_of(a: &Set<T, S>, b: &Set<T, S>) -> Set<T, S> {
        let mut result = Set::with_hasher(a.hasher().clone());
        for value in a {
            if b.contains(value) {
                result.add(value.clone());
            }
        }
        result
    }
}

impl<T: Eq, S: KeyHasher<T>> SetLike<T> for Set<T, S> {
    type Iter<'a> = Iter<'a, T> where Self: 'a, T: 'a;

    fn contains(&self, item: &T) -> bool {
        Set::contains(self, item)
    }

    fn len(&self) -> usize {
        Set::len(self)
    }

    fn iter<'a>(&'a self) -> Self::Iter<'a> {
        Set::iter(self)
    }
}

impl<T: Eq, S: Default> Default for Set<T, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Clone, S: KeyHasher<T> + Clone> Clone for Set<T, S> {
    fn clone(&self) -> Self {
        Set {
            inner: self.inner.clone(),
        }
    }
}

impl<T: Eq, S: KeyHasher<T>> PartialEq for Set<T, S> {
    /// Equivalent to [`SetLike::set_equals`].
    fn eq(&self, other: &Self) -> bool {
        SetLike::set_equals(self, other)
    }
}

impl<T: Eq, S: KeyHasher<T>> Eq for Set<T, S> {}

impl<T: Eq, S: KeyHasher<T>> Extend<T> for Set<T, S> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.inner.extend(iter)
    }
}

impl<'a, T: Eq + Copy + 'a, S: KeyHasher<T>> Extend<&'a T> for Set<T, S> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.inner.extend(iter.into_iter().copied())
    }
}

impl<T: Eq, S: KeyHasher<T> + Default> FromIterator<T> for Set<T, S> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Set::new();
        set.extend(iter);
        set
    }
}

impl<T: Eq, S: KeyHasher<T> + Default, const N: usize> From<[T; N]> for Set<T, S> {
    fn from(value: [T; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<T: Eq + Debug, S> Debug for Set<T, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: Eq + Display, S> Display for Set<T, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        display_list(f, self.iter())
    }
}
