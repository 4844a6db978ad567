use std::fmt::{self, Debug, Formatter};
use std::fmt::Write;
use std::ptr::NonNull;

use log::trace;

use super::{HashNode, TableMetaData};
use crate::memory::Memory;
use crate::util::fmt::DebugRaw;

/// Owns the bucket array of a table. Manages the lifetime of every slot and chain node, but knows
/// nothing about keys: the table supplies hashes when buckets need to be recomputed.
pub(crate) struct HashTableAllocator<T> {
    pub(crate) data: Memory<HashNode<T>>,
    pub(crate) capacity: usize,
}

impl<T> HashTableAllocator<T> {
    pub const fn new() -> HashTableAllocator<T> {
        HashTableAllocator {
            data: Memory::null(),
            capacity: 0,
        }
    }

    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Allocates an empty bucket array with `capacity` buckets, replacing the current one. Does
    /// nothing if the capacity is unchanged. Returns the new capacity.
    ///
    /// The current array must not have any occupied buckets, use
    /// [`reallocate`](HashTableAllocator::reallocate) to resize a table with entries in it.
    pub fn allocate(&mut self, capacity: usize) -> usize {
        if capacity == self.capacity { return capacity; }

        self.dispose();
        self.data = Self::vacant_array(capacity);
        self.capacity = capacity;
        capacity
    }

    /// Moves every entry into a new array with `capacity` buckets, using `hash_of` to pick each
    /// entry's new bucket. Returns the new capacity.
    ///
    /// Only the buckets recorded in `meta` are visited, so empty buckets cost nothing. Entries
    /// land in the order they are found: a bucket's chain in order, then the next recorded
    /// bucket's. `meta` is replaced with records for the new array, and all old chain nodes,
    /// records and the old array are freed.
    pub fn reallocate<F>(&mut self, capacity: usize, meta: &mut TableMetaData<T>, hash_of: F) -> usize
    where
        F: Fn(&T) -> u64,
    {
        if capacity == self.capacity { return capacity; }

        let data = Self::vacant_array(capacity);
        let mut new_meta = TableMetaData::new();
        let mut moved = 0_usize;

        while let Some((bucket, _)) = meta.pop_front() {
            // SAFETY: Records only ever point into the current bucket array, which is still alive.
            let head = unsafe { &mut *bucket.as_ptr() };
            // Detach the chain first, so the old bucket never points at a freed node.
            let mut link = head.next.take();

            if head.is_occupied() {
                let value = head.take();
                let index = Self::index_for(hash_of(&value), capacity);
                Self::place(data, &mut new_meta, index, value);
                moved += 1;
            }

            while let Some(node_ref) = link {
                let mut node = node_ref.take_node();
                link = node.next.take();

                let value = node.take();
                let index = Self::index_for(hash_of(&value), capacity);
                Self::place(data, &mut new_meta, index, value);
                moved += 1;
            }
        }

        trace!("rehashed {} entries from {} to {} buckets", moved, self.capacity, capacity);

        self.dispose();
        self.data = data;
        self.capacity = capacity;
        *meta = new_meta;
        capacity
    }

    /// Destroys every entry reachable from `meta` and frees all records and chain nodes. The
    /// bucket array itself is kept, with every bucket vacant again. Returns the number of entries
    /// destroyed.
    pub fn clear_memory(&mut self, meta: &mut TableMetaData<T>) -> usize {
        let mut destroyed = 0_usize;

        while let Some((bucket, _)) = meta.pop_front() {
            // SAFETY: Records only ever point into the current bucket array.
            let head = unsafe { &mut *bucket.as_ptr() };
            let mut link = head.next.take();

            if head.is_occupied() {
                drop(head.take());
                destroyed += 1;
            }

            while let Some(node_ref) = link {
                let mut node = node_ref.take_node();
                link = node.next.take();
                drop(node.take());
                destroyed += 1;
            }
        }

        destroyed
    }

    /// Frees the bucket array. Any entries still in it are leaked, so
    /// [`clear_memory`](HashTableAllocator::clear_memory) should be called first.
    pub fn dispose(&mut self) {
        // SAFETY: data was allocated by vacant_array with exactly self.capacity slots (or is null
        // and deleting it does nothing). HashNode has no drop glue to skip.
        unsafe { self.data.delete(self.capacity) }
        self.capacity = 0;
    }

    pub fn bucket(&self, index: usize) -> &HashNode<T> {
        assert!(index < self.capacity, "Bucket {index} out of range for {} buckets!", self.capacity);
        // SAFETY: index is within the array and every slot was initialized as a vacant node.
        unsafe { self.data.slot(index) }
    }

    pub fn bucket_mut(&mut self, index: usize) -> &mut HashNode<T> {
        assert!(index < self.capacity, "Bucket {index} out of range for {} buckets!", self.capacity);
        // SAFETY: As above, and self is borrowed mutably so the slot isn't aliased by this type.
        unsafe { self.data.slot_mut(index) }
    }
}

impl<T> HashTableAllocator<T> {
    /// Allocates `capacity` buckets and writes a vacant node into each, so that every status flag
    /// is readable. No values are constructed.
    fn vacant_array(capacity: usize) -> Memory<HashNode<T>> {
        if capacity == 0 {
            return Memory::null();
        }

        let data = Memory::alloc(capacity);
        for index in 0..capacity {
            // SAFETY: index is within the freshly allocated range.
            unsafe { data.write(index, HashNode::vacant()) }
        }
        data
    }

    const fn index_for(hash: u64, capacity: usize) -> usize {
        (hash % capacity as u64) as usize
    }

    /// Puts `value` into the bucket at `index` of `data`, constructing it in place if the bucket
    /// is vacant or appending it to the bucket's chain otherwise.
    fn place(data: Memory<HashNode<T>>, meta: &mut TableMetaData<T>, index: usize, value: T) {
        // SAFETY: index comes from index_for with the capacity data was allocated with.
        let head = unsafe { data.slot_mut(index) };

        if head.is_occupied() {
            head.append(value);
        } else {
            head.put(value);
            meta.add_meta_data(NonNull::from(head), index);
        }
    }
}

impl<T> Drop for HashTableAllocator<T> {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl<T: Debug> Debug for HashTableAllocator<T> {
    /// Lists every bucket, showing empty ones as `-` and occupied ones as their whole chain.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(
            (0..self.capacity).map(|index| {
                let bucket = self.bucket(index);
                if !bucket.is_occupied() {
                    return DebugRaw("-".into());
                }

                let mut chain = String::new();
                for (position, entry) in bucket.chain().enumerate() {
                    let separator = if position == 0 { "" } else { " -> " };
                    // Writing to a String can't fail.
                    let _ = write!(chain, "{separator}{entry:?}");
                }
                DebugRaw(chain)
            })
        ).finish()
    }
}
