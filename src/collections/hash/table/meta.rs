use std::marker::PhantomData;
use std::ptr::NonNull;

use super::HashNode;
use crate::memory::Status;

/// A record of one occupied bucket.
pub(crate) struct MetaData<T> {
    pub next: Option<NonNull<MetaData<T>>>,
    /// Points into the bucket array, which the table owns. Never freed through here.
    pub bucket: NonNull<HashNode<T>>,
    pub index: usize,
    pub status: Status,
}

/// A singly linked list holding one [`MetaData`] per occupied bucket, in the order the buckets
/// were first occupied. Walking it visits every entry of the table without scanning empty buckets.
///
/// A tail pointer is kept so that appending doesn't have to walk the list.
pub(crate) struct TableMetaData<T> {
    head: Option<NonNull<MetaData<T>>>,
    tail: Option<NonNull<MetaData<T>>>,
    len: usize,
}

impl<T> TableMetaData<T> {
    pub const fn new() -> TableMetaData<T> {
        TableMetaData {
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// The number of occupied buckets.
    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn first(&self) -> Option<NonNull<MetaData<T>>> {
        self.head
    }

    /// Records that the bucket at `index`, found at `bucket`, has become occupied.
    pub fn add_meta_data(&mut self, bucket: NonNull<HashNode<T>>, index: usize) {
        let node = NonNull::from(Box::leak(Box::new(MetaData {
            next: None,
            bucket,
            index,
            status: Status::Valid,
        })));

        match self.tail {
            // SAFETY: tail always points at the last live node of this list.
            Some(mut tail) => unsafe { tail.as_mut().next = Some(node) },
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.len += 1;
    }

    /// Unlinks and frees the record for the bucket at `index`, wherever it is in the list. Returns
    /// false if no bucket with that index was recorded.
    pub fn remove_meta_data(&mut self, index: usize) -> bool {
        let mut prev: Option<NonNull<MetaData<T>>> = None;
        let mut current = self.head;

        while let Some(node) = current {
            // SAFETY: Every node reachable from head is live and owned by this list.
            let meta = unsafe { node.as_ref() };

            if meta.index == index {
                let next = meta.next;
                match prev {
                    // SAFETY: prev is the live node directly before this one.
                    Some(mut prev) => unsafe { prev.as_mut().next = next },
                    None => self.head = next,
                }
                if self.tail == Some(node) {
                    self.tail = prev;
                }
                self.len -= 1;

                // SAFETY: The node has been unlinked, so this is the only remaining pointer to it.
                drop(unsafe { Box::from_raw(node.as_ptr()) });
                return true;
            }

            prev = current;
            current = meta.next;
        }

        false
    }

    /// Unlinks and frees the first record, returning the bucket pointer and index it held.
    pub fn pop_front(&mut self) -> Option<(NonNull<HashNode<T>>, usize)> {
        let node = self.head?;
        // SAFETY: head is live and owned by this list. It is unlinked before being freed.
        let meta = unsafe { Box::from_raw(node.as_ptr()) };

        self.head = meta.next;
        if self.head.is_none() {
            self.tail = None;
        }
        self.len -= 1;

        Some((meta.bucket, meta.index))
    }

    #[cfg(test)]
    pub fn iter(&self) -> MetaIter<'_, T> {
        MetaIter {
            current: self.head,
            _phantom: PhantomData,
        }
    }
}

impl<T> Default for TableMetaData<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for TableMetaData<T> {
    fn drop(&mut self) {
        // Only the records are freed here, the buckets they point to belong to the table.
        while self.pop_front().is_some() {}
    }
}

#[cfg(test)]
pub(crate) struct MetaIter<'a, T> {
    current: Option<NonNull<MetaData<T>>>,
    _phantom: PhantomData<&'a MetaData<T>>,
}

#[cfg(test)]
impl<'a, T> Iterator for MetaIter<'a, T> {
    type Item = &'a MetaData<T>;

    fn next(&mut self) -> Option<Self::Item> {
        // SAFETY: The list can't be modified while it is borrowed by this iterator.
        let meta = unsafe { self.current?.as_ref() };
        debug_assert!(meta.status.is_valid());
        self.current = meta.next;
        Some(meta)
    }
}
