use std::mem::{self, MaybeUninit};
use std::ptr::NonNull;

use crate::memory::Status;

pub(crate) type Link<T> = Option<NodeRef<T>>;

// NOTE: Chain nodes are allocated with Box<T>, while chain heads live inline in the bucket array.
// Both use the same HashNode layout so that walking a chain never has to care which one it is on.

/// A pointer to a heap allocated [`HashNode`], owned by the `next` field of the node before it.
#[derive(Debug)]
pub(crate) struct NodeRef<T>(NonNull<HashNode<T>>);

impl<T> NodeRef<T> {
    /// Allocates a new occupied node holding `value`, with no successor.
    pub fn from_value(value: T) -> NodeRef<T> {
        NodeRef(NonNull::from(Box::leak(Box::new(HashNode::occupied(value)))))
    }

    pub fn node<'a>(&self) -> &'a HashNode<T> {
        // SAFETY: A NodeRef is only ever created from a live Box and is consumed by take_node, so
        // the pointer is valid for as long as the chain that owns it.
        unsafe { self.0.as_ref() }
    }

    #[allow(clippy::mut_from_ref)]
    pub fn node_mut<'a>(&self) -> &'a mut HashNode<T> {
        // SAFETY: As above. Each node has exactly one owning link, so there is never more than one
        // path to a mutable reference.
        unsafe { &mut *self.0.as_ptr() }
    }

    /// Frees the node's allocation, returning its contents. Taking the value out of the returned
    /// node (if occupied) is the responsibility of the caller.
    pub fn take_node(self) -> HashNode<T> {
        // SAFETY: The pointer was produced by Box::leak and is consumed here, once.
        unsafe { *Box::from_raw(self.0.as_ptr()) }
    }

    pub const fn as_non_null(self) -> NonNull<HashNode<T>> {
        self.0
    }
}

impl<T> Clone for NodeRef<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<T> {}

impl<T> PartialEq for NodeRef<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

/// One entry of a bucket's chain. The value is only initialized while the status is
/// [`Valid`](Status::Valid).
///
/// HashNode has no drop glue for its value. Whoever empties a node has to [`take`](HashNode::take)
/// the value out first.
pub(crate) struct HashNode<T> {
    pub value: MaybeUninit<T>,
    pub next: Link<T>,
    pub status: Status,
}

impl<T> HashNode<T> {
    /// A node that has never held a value, used to fill fresh bucket arrays.
    pub const fn vacant() -> HashNode<T> {
        HashNode {
            value: MaybeUninit::uninit(),
            next: None,
            status: Status::Invalid,
        }
    }

    pub const fn occupied(value: T) -> HashNode<T> {
        HashNode {
            value: MaybeUninit::new(value),
            next: None,
            status: Status::Valid,
        }
    }

    pub const fn is_occupied(&self) -> bool {
        matches!(self.status, Status::Valid)
    }

    pub fn value(&self) -> &T {
        debug_assert!(self.is_occupied(), "Read from a vacant HashNode!");
        // SAFETY: The value is initialized whenever the status is Valid, and nodes are only read
        // through chains that have been checked to be occupied.
        unsafe { self.value.assume_init_ref() }
    }

    pub fn value_mut(&mut self) -> &mut T {
        debug_assert!(self.is_occupied(), "Read from a vacant HashNode!");
        // SAFETY: As above.
        unsafe { self.value.assume_init_mut() }
    }

    /// Constructs `value` in a vacant node.
    pub fn put(&mut self, value: T) {
        debug_assert!(!self.is_occupied(), "Overwrote an occupied HashNode!");
        self.value.write(value);
        self.status = Status::Valid;
    }

    /// Moves the value out, leaving the node vacant. The link to the rest of the chain is kept.
    pub fn take(&mut self) -> T {
        debug_assert!(self.is_occupied(), "Took from a vacant HashNode!");
        self.status = Status::Invalid;
        // SAFETY: The node was occupied and is now marked vacant, so the value can't be read twice.
        unsafe { self.value.assume_init_read() }
    }

    pub fn replace(&mut self, value: T) -> T {
        mem::replace(self.value_mut(), value)
    }

    /// Fills a vacant head with the value of the next node in its chain, freeing that node.
    /// Returns false if there was no next node, in which case the head stays vacant.
    pub fn refill_from_chain(&mut self) -> bool {
        match self.next.take() {
            Some(next) => {
                let mut node = next.take_node();
                self.next = node.next.take();
                self.put(node.take());
                true
            },
            None => false,
        }
    }

    /// Appends `value` in a new heap node at the end of the chain starting at `self`.
    pub fn append(&mut self, value: T) {
        let mut tail = self;
        while let Some(next) = tail.next {
            tail = next.node_mut();
        }
        tail.next = Some(NodeRef::from_value(value));
    }

    /// Returns an iterator over the values of the chain starting at `self`, including `self` if it
    /// is occupied.
    pub fn chain(&self) -> Chain<'_, T> {
        Chain {
            node: if self.is_occupied() { Some(self) } else { None },
        }
    }
}

pub(crate) struct Chain<'a, T> {
    node: Option<&'a HashNode<T>>,
}

impl<'a, T> Iterator for Chain<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.node?;
        self.node = node.next.map(|next| next.node());
        Some(node.value())
    }
}
