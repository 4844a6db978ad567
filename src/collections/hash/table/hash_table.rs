use std::borrow::Borrow;
use std::cmp;
use std::fmt::{self, Debug, Display, Formatter};
use std::marker::PhantomData;
use std::ptr::NonNull;

use log::debug;

use super::{HashNode, HashTableAllocator, Iter, IterMut, NodeRef, TableMetaData};
use crate::collections::hash::{DefaultHashBuilder, KeyHasher, KeyStrategy, TableConfig};
use crate::error::ArgumentOutOfRange;
use crate::util::fmt::display_list;
use crate::util::option::OptionExtension;

const MIN_ALLOCATED_CAP: usize = 2;

const GROWTH_FACTOR: usize = 2;

/// A hash table using separate chaining, storing entries of type `T` keyed by whatever the key
/// strategy `X` extracts from them. [`Map`](crate::collections::hash::Map) and
/// [`Set`](crate::collections::hash::Set) are thin wrappers around a HashTable.
///
/// Each bucket stores the first entry of its chain inline, with colliding entries appended in
/// individually allocated nodes. A separate list of the occupied buckets is kept alongside, so that
/// iteration, clearing and rehashing only ever visit buckets with entries in them.
///
/// Entries are iterated in the order their buckets were first occupied, and within a bucket in the
/// order they were inserted. This order changes whenever the table grows.
///
/// It is a logic error for the key of an entry to be manipulated in a way that changes its hash or
/// equality while it is in the table.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of entries in the HashTable.
/// - `b`: The number of occupied buckets.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(1)`*, `O(n)` |
/// | `get` | `O(1)`* |
/// | `erase` | `O(1)`* |
/// | `contains` | `O(1)`* |
/// | `clear` | `O(n)` |
/// | `reserve` | `O(n + b)`**, `O(1)` |
/// | `iter` | `O(n + b)` |
///
/// \* In the event of a hash collision, the bucket's chain is walked, so these take time
/// proportional to the length of the chain. `insert` takes `O(n)` if the table has to grow first.
///
/// \** Only if the capacity actually increases.
pub struct HashTable<T, X: KeyStrategy<T>, S = DefaultHashBuilder> {
    pub(crate) alloc: HashTableAllocator<T>,
    pub(crate) meta: TableMetaData<T>,
    pub(crate) len: usize,
    pub(crate) load_factor: f64,
    pub(crate) hasher: S,
    pub(crate) _strategy: PhantomData<fn() -> X>,
}

impl<T, X: KeyStrategy<T>, S: Default> HashTable<T, X, S> {
    /// Creates a new HashTable with the default capacity and load factor, and the default value
    /// for `S`.
    pub fn new() -> HashTable<T, X, S> {
        Self::with_hasher(S::default())
    }

    /// Creates a new HashTable with `cap` buckets, allowing insertions without rehashing until the
    /// load factor is reached. A capacity of 0 doesn't allocate.
    pub fn with_cap(cap: usize) -> HashTable<T, X, S> {
        Self::with_cap_and_hasher(cap, S::default())
    }
}

impl<T, X: KeyStrategy<T>, S> HashTable<T, X, S> {
    pub fn with_hasher(hasher: S) -> HashTable<T, X, S> {
        Self::from_parts(TableConfig::default(), hasher)
    }

    pub fn with_cap_and_hasher(cap: usize, hasher: S) -> HashTable<T, X, S> {
        Self::from_parts(TableConfig::with_cap(cap), hasher)
    }

    /// Creates a new HashTable from the provided `config` and `hasher`.
    ///
    /// # Errors
    /// Returns [`ArgumentOutOfRange`] if the load factor doesn't lie within `(0, 1]`.
    pub fn with_config(config: TableConfig, hasher: S) -> Result<HashTable<T, X, S>, ArgumentOutOfRange> {
        config.validate()?;
        Ok(Self::from_parts(config, hasher))
    }

    /// Returns the number of entries in the HashTable.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the HashTable contains no entries.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of buckets in the HashTable.
    pub const fn cap(&self) -> usize {
        self.alloc.capacity()
    }

    pub const fn load_factor(&self) -> f64 {
        self.load_factor
    }

    pub const fn hasher(&self) -> &S {
        &self.hasher
    }

    /// Returns the number of buckets with at least one entry.
    pub const fn occupied_buckets(&self) -> usize {
        self.meta.len()
    }

    /// Drops every entry, keeping the bucket array and its capacity. Clearing an empty table does
    /// nothing.
    pub fn clear(&mut self) {
        self.alloc.clear_memory(&mut self.meta);
        self.len = 0;
    }

    /// Returns an iterator over all entries, as references.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Returns an iterator over all entries, as mutable references. Kept private to the crate,
    /// because mutating keys in place would break the table.
    pub(crate) fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.meta.first(), self.len)
    }

    /// Removes and returns the first entry in iteration order.
    pub(crate) fn pop_front(&mut self) -> Option<T> {
        let (bucket, index) = {
            // SAFETY: The first record is live while the list is borrowed.
            let meta = unsafe { self.meta.first()?.as_ref() };
            (meta.bucket, meta.index)
        };
        // SAFETY: Records point into the current bucket array.
        let head = unsafe { &mut *bucket.as_ptr() };

        let value = head.take();
        if !head.refill_from_chain() {
            self.meta.remove_meta_data(index);
        }
        self.len -= 1;
        Some(value)
    }

    fn from_parts(config: TableConfig, hasher: S) -> HashTable<T, X, S> {
        let mut alloc = HashTableAllocator::new();
        alloc.allocate(config.capacity);

        HashTable {
            alloc,
            meta: TableMetaData::new(),
            len: 0,
            load_factor: config.load_factor,
            hasher,
            _strategy: PhantomData,
        }
    }
}

impl<T, X: KeyStrategy<T>, S: KeyHasher<X::Key>> HashTable<T, X, S> {
    /// Inserts `value`, growing the table first if the insertion would reach the load factor.
    /// Returns false without changing the table if an entry with an equal key already exists (in
    /// which case `value` is dropped).
    pub fn insert(&mut self, value: T) -> bool {
        self.insert_or_reject(value).is_ok()
    }

    /// Inserts `value`, returning it back in an [`Err`] if an entry with an equal key already
    /// exists.
    ///
    /// # Errors
    /// Returns `value` if its key is already present.
    pub fn insert_or_reject(&mut self, value: T) -> Result<(), T> {
        if self.should_grow() {
            self.grow();
        }

        // SAFETY: We've just grown if necessary, so the capacity isn't 0.
        let index = unsafe { self.index_of(X::key(&value)).unreachable() };
        let head = self.alloc.bucket_mut(index);

        if !head.is_occupied() {
            head.put(value);
            self.meta.add_meta_data(NonNull::from(head), index);
            self.len += 1;
            return Ok(());
        }

        let mut tail = head;
        loop {
            if X::key(tail.value()) == X::key(&value) {
                return Err(value);
            }
            match tail.next {
                Some(next) => tail = next.node_mut(),
                None => break,
            }
        }

        tail.next = Some(NodeRef::from_value(value));
        self.len += 1;
        Ok(())
    }

    /// Inserts `value`, replacing and returning any entry with an equal key.
    pub fn replace(&mut self, value: T) -> Option<T> {
        match self.get_node_mut(X::key(&value)) {
            Some(existing) => Some(existing.replace(value)),
            None => {
                let inserted = self.insert_or_reject(value);
                debug_assert!(inserted.is_ok(), "A missing key can't be rejected as a duplicate.");
                None
            },
        }
    }

    /// Grows the bucket array to hold at least `cap` buckets, rehashing every entry. Does nothing
    /// if the table already has that many buckets.
    pub fn reserve(&mut self, cap: usize) {
        if cap <= self.cap() { return; }

        self.realloc_with_cap(cap);
    }

    /// Removes every entry for which `keep` returns false. Each bucket is processed in chain order
    /// and the next bucket is looked up before the current one is modified, so emptying a bucket
    /// while walking the table is safe.
    ///
    /// `keep` is only ever called while the table is consistent, so a panic in it leaves every
    /// entry that hasn't been removed yet in place.
    pub fn retain<F: FnMut(&T) -> bool>(&mut self, mut keep: F) {
        let mut current = self.meta.first();

        while let Some(record) = current {
            let (bucket, index) = {
                // SAFETY: The record is live until remove_meta_data is called on its index below,
                // after which it isn't touched again.
                let meta = unsafe { record.as_ref() };
                current = meta.next;
                (meta.bucket, meta.index)
            };
            // SAFETY: Records point into the current bucket array.
            let head = unsafe { &mut *bucket.as_ptr() };

            // The head is removed last, so the rest of the chain stays linked behind it.
            let keep_head = keep(head.value());

            let mut prev = &mut *head;
            while let Some(link) = prev.next {
                let node = link.node_mut();

                if keep(node.value()) {
                    prev = node;
                } else {
                    prev.next = node.next.take();
                    self.len -= 1;
                    drop(link.take_node().take());
                }
            }

            if !keep_head {
                let removed = head.take();
                if !head.refill_from_chain() {
                    self.meta.remove_meta_data(index);
                }
                self.len -= 1;
                drop(removed);
            }
        }
    }
}

impl<T, X: KeyStrategy<T>, S> HashTable<T, X, S> {
    /// Returns a reference to the entry with a key equal to `key`, if there is one.
    pub fn get<Q>(&self, key: &Q) -> Option<&T>
    where
        // Q represents a borrowed form of the key, where equality and hashing carry over the
        // borrow.
        X::Key: Borrow<Q>,
        Q: Eq + ?Sized,
        S: KeyHasher<Q>,
    {
        let index = self.index_of(key)?;
        self.alloc.bucket(index)
            .chain()
            .find(|entry| X::key(entry).borrow() == key)
    }

    /// Returns true if there is an entry with a key equal to `key`.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        X::Key: Borrow<Q>,
        Q: Eq + ?Sized,
        S: KeyHasher<Q>,
    {
        self.get(key).is_some()
    }

    /// Removes the entry with a key equal to `key`, returning it if it existed.
    ///
    /// If the entry is the head of its bucket's chain, the next entry in the chain takes its
    /// place. A bucket left with no entries is dropped from the occupied bucket list.
    pub fn take<Q>(&mut self, key: &Q) -> Option<T>
    where
        X::Key: Borrow<Q>,
        Q: Eq + ?Sized,
        S: KeyHasher<Q>,
    {
        let index = self.index_of(key)?;
        let head = self.alloc.bucket_mut(index);

        if !head.is_occupied() { return None; }

        if X::key(head.value()).borrow() == key {
            let removed = head.take();
            if !head.refill_from_chain() {
                self.meta.remove_meta_data(index);
            }
            self.len -= 1;
            return Some(removed);
        }

        let mut prev = head;
        while let Some(current) = prev.next {
            let node = current.node_mut();

            if X::key(node.value()).borrow() == key {
                prev.next = node.next.take();
                self.len -= 1;
                return Some(current.take_node().take());
            }

            prev = node;
        }

        None
    }

    /// Removes the entry with a key equal to `key`. Returns false if there was no such entry.
    pub fn erase<Q>(&mut self, key: &Q) -> bool
    where
        X::Key: Borrow<Q>,
        Q: Eq + ?Sized,
        S: KeyHasher<Q>,
    {
        self.take(key).is_some()
    }

    pub(crate) fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut T>
    where
        X::Key: Borrow<Q>,
        Q: Eq + ?Sized,
        S: KeyHasher<Q>,
    {
        self.get_node_mut(key).map(|node| node.value_mut())
    }

    fn get_node_mut<Q>(&mut self, key: &Q) -> Option<&mut HashNode<T>>
    where
        X::Key: Borrow<Q>,
        Q: Eq + ?Sized,
        S: KeyHasher<Q>,
    {
        let index = self.index_of(key)?;
        let head = self.alloc.bucket_mut(index);

        if !head.is_occupied() { return None; }

        let mut node = head;
        loop {
            if X::key(node.value()).borrow() == key {
                return Some(node);
            }
            node = node.next?.node_mut();
        }
    }

    /// Calculates the bucket for the provided `key` (or None if the table has 0 capacity).
    pub(crate) fn index_of<Q: ?Sized>(&self, key: &Q) -> Option<usize>
    where
        S: KeyHasher<Q>,
    {
        let hash = self.hasher.hash_key(key);
        hash.checked_rem(self.cap() as u64).map(|i| i as usize)
    }

    /// Returns the number of entries stored in the bucket at `index`.
    #[cfg(test)]
    pub(crate) fn chain_len(&self, index: usize) -> usize {
        self.alloc.bucket(index).chain().count()
    }
}

impl<T, X: KeyStrategy<T>, S: KeyHasher<X::Key>> HashTable<T, X, S> {
    /// Determines whether inserting one more entry would bring the table up to its load factor,
    /// meaning that it should grow first.
    pub(crate) fn should_grow(&self) -> bool {
        (self.len + 1) as f64 >= self.cap() as f64 * self.load_factor
    }

    /// Grows the table by the growth factor (repeatedly, if a very low load factor requires it).
    pub(crate) fn grow(&mut self) {
        let mut new_cap = cmp::max(self.cap() * GROWTH_FACTOR, MIN_ALLOCATED_CAP);
        while (self.len + 1) as f64 >= new_cap as f64 * self.load_factor {
            new_cap = new_cap.checked_mul(GROWTH_FACTOR).expect("Capacity overflow!");
        }

        debug!("growing hash table with {} entries from {} to {} buckets", self.len, self.cap(), new_cap);
        self.realloc_with_cap(new_cap);
    }

    /// Rehashes every entry into a new bucket array with `new_cap` buckets.
    pub(crate) fn realloc_with_cap(&mut self, new_cap: usize) {
        let hasher = &self.hasher;
        self.alloc.reallocate(new_cap, &mut self.meta, |entry| hasher.hash_key(X::key(entry)));
    }
}

impl<T, X: KeyStrategy<T>, S> Drop for HashTable<T, X, S> {
    fn drop(&mut self) {
        // The allocator frees the bucket array when it is dropped, after this.
        self.alloc.clear_memory(&mut self.meta);
    }
}

impl<T, X: KeyStrategy<T>, S: Default> Default for HashTable<T, X, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, X, S> Clone for HashTable<T, X, S>
where
    T: Clone,
    X: KeyStrategy<T>,
    S: KeyHasher<X::Key> + Clone,
{
    /// Creates a deep copy with the same capacity, load factor and hasher. Every entry is
    /// reinserted, so the copy's iteration order may differ from the original's.
    fn clone(&self) -> Self {
        let config = TableConfig {
            capacity: self.cap(),
            load_factor: self.load_factor,
        };
        let mut table = Self::from_parts(config, self.hasher.clone());

        for entry in self.iter() {
            table.insert(entry.clone());
        }

        table
    }
}

impl<T, X, S> PartialEq for HashTable<T, X, S>
where
    T: PartialEq,
    X: KeyStrategy<T>,
    S: KeyHasher<X::Key>,
{
    /// Two tables are equal if they contain equal entries, regardless of order or capacity.
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len
            && self.iter().all(|entry| other.get(X::key(entry)) == Some(entry))
    }
}

impl<T, X: KeyStrategy<T>, S: KeyHasher<X::Key>> Extend<T> for HashTable<T, X, S> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T, X: KeyStrategy<T>, S: KeyHasher<X::Key> + Default> FromIterator<T> for HashTable<T, X, S> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}

// SAFETY: A HashTable exclusively owns all of its nodes and records, so sending it sends its
// entries along with it.
unsafe impl<T: Send, X: KeyStrategy<T>, S: Send> Send for HashTable<T, X, S> {}
// SAFETY: Shared references only provide shared access to entries, there's no interior mutability.
unsafe impl<T: Sync, X: KeyStrategy<T>, S: Sync> Sync for HashTable<T, X, S> {}

impl<T: Debug, X: KeyStrategy<T>, S: Debug> Debug for HashTable<T, X, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashTable")
            .field("buckets", &self.alloc)
            .field("len", &self.len)
            .field("cap", &self.cap())
            .field("load_factor", &self.load_factor)
            .field("hasher", &self.hasher)
            .finish()
    }
}

impl<T: Display, X: KeyStrategy<T>, S> Display for HashTable<T, X, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        display_list(f, self.iter())
    }
}
