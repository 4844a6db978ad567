use std::fmt::{self, Debug, Formatter};
use std::hash::{BuildHasher, Hash, Hasher};

/// Produces the hash used to pick a bucket for a key of type `K`.
///
/// Every [`BuildHasher`] is a KeyHasher for any `K: Hash`, so keys always hash by value. For keys
/// that need a hash computed some other way, wrap a function in a [`HashFn`].
pub trait KeyHasher<K: ?Sized> {
    fn hash_key(&self, key: &K) -> u64;
}

impl<K: Hash + ?Sized, B: BuildHasher> KeyHasher<K> for B {
    fn hash_key(&self, key: &K) -> u64 {
        self.hash_one(key)
    }
}

/// A plain function used as the hash for keys of type `K`.
///
/// The function is only ever called with keys of type `K`, so lookups through a borrowed form of
/// the key aren't available for tables using a HashFn.
pub struct HashFn<K: ?Sized>(pub fn(&K) -> u64);

impl<K: ?Sized> KeyHasher<K> for HashFn<K> {
    fn hash_key(&self, key: &K) -> u64 {
        (self.0)(key)
    }
}

impl<K: ?Sized> Clone for HashFn<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: ?Sized> Copy for HashFn<K> {}

impl<K: ?Sized> Debug for HashFn<K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("HashFn").field(&(self.0 as *const ())).finish()
    }
}

/// The hasher used by every table unless another `S` is chosen.
///
/// foldhash's fixed-seed state: fast, and deterministic across runs, so iteration order is
/// reproducible. It isn't resistant to adversarial keys.
pub type DefaultHashBuilder = foldhash::fast::FixedState;

/// A hasher that returns integers unchanged, so an integer key `k` lands in bucket `k % cap`.
///
/// Only the first write is kept as-is, and only if it is an integer. Every other write is folded
/// into the state with [`DefaultHashBuilder`], so strings and composite keys still spread across
/// buckets. Mostly useful for reasoning about (or deliberately forcing) bucket placement.
#[derive(Debug, Default, Clone, Copy)]
pub struct IdentityHasher {
    state: u64,
    written: bool,
}

impl IdentityHasher {
    fn fold<V: Hash>(&mut self, value: V) {
        self.state = DefaultHashBuilder::default().hash_one((self.state, value));
        self.written = true;
    }

    fn write_int(&mut self, i: u64) {
        if self.written {
            self.fold(i);
        } else {
            self.state = i;
            self.written = true;
        }
    }
}

impl Hasher for IdentityHasher {
    fn finish(&self) -> u64 {
        self.state
    }

    fn write(&mut self, bytes: &[u8]) {
        self.fold(bytes);
    }

    fn write_u8(&mut self, i: u8) {
        self.write_int(i as u64);
    }

    fn write_u16(&mut self, i: u16) {
        self.write_int(i as u64);
    }

    fn write_u32(&mut self, i: u32) {
        self.write_int(i as u64);
    }

    fn write_u64(&mut self, i: u64) {
        self.write_int(i);
    }

    fn write_usize(&mut self, i: usize) {
        self.write_int(i as u64);
    }

    fn write_i8(&mut self, i: i8) {
        self.write_int(i as u64);
    }

    fn write_i16(&mut self, i: i16) {
        self.write_int(i as u64);
    }

    fn write_i32(&mut self, i: i32) {
        self.write_int(i as u64);
    }

    fn write_i64(&mut self, i: i64) {
        self.write_int(i as u64);
    }

    fn write_isize(&mut self, i: isize) {
        self.write_int(i as u64);
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IdentityBuildHasher;

impl BuildHasher for IdentityBuildHasher {
    type Hasher = IdentityHasher;

    fn build_hasher(&self) -> Self::Hasher {
        IdentityHasher::default()
    }
}
