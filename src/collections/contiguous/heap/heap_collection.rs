use std::cmp;
use std::ptr::{self, NonNull};

use log::trace;

use crate::memory::Memory;

/// The capacity allocated by the first growth of an empty HeapCollection.
pub const DEFAULT_CAPACITY: usize = 16;

const GROWTH_FACTOR: usize = 2;

/// An owned, contiguous block of uninitialized slots, shared by [`List`](super::super::List),
/// [`Stack`](super::super::Stack) and [`Queue`](super::super::Queue).
///
/// A HeapCollection only manages the allocation: it doesn't know which of its slots are
/// initialized, so the owning collection has to drop its elements before the HeapCollection is
/// dropped. The live elements are always described by a `head` index and a `len`, where the range
/// may wrap around the end of the block. Growing moves the live range to the start of the new
/// block, unwrapped.
///
/// The buffer starts unallocated. The first growth allocates [`DEFAULT_CAPACITY`] slots and every
/// growth after that doubles the capacity.
pub struct HeapCollection<T> {
    pub(crate) mem: Memory<T>,
    pub(crate) cap: usize,
}

impl<T> HeapCollection<T> {
    /// Creates a new HeapCollection with capacity 0. Nothing is allocated.
    pub const fn new() -> HeapCollection<T> {
        HeapCollection {
            mem: Memory::null(),
            cap: 0,
        }
    }

    /// Creates a new HeapCollection with exactly `cap` slots.
    ///
    /// # Panics
    /// Panics if the memory layout size exceeds [`isize::MAX`].
    pub fn with_cap(cap: usize) -> HeapCollection<T> {
        if cap == 0 {
            return Self::new();
        }

        HeapCollection {
            mem: Memory::alloc(cap),
            cap,
        }
    }

    /// Returns the number of slots in the HeapCollection.
    pub const fn cap(&self) -> usize {
        self.cap
    }

    /// Returns the underlying Memory. Its validity is only guaranteed while the capacity isn't 0.
    pub const fn memory(&self) -> Memory<T> {
        self.mem
    }

    /// Returns a pointer to the first slot, which is dangling if nothing is allocated.
    pub fn as_non_null(&self) -> NonNull<T> {
        NonNull::new(self.mem.as_ptr()).unwrap_or(NonNull::dangling())
    }

    /// Returns the capacity the next call to [`grow`](HeapCollection::grow) will produce.
    ///
    /// # Panics
    /// Panics if the capacity would overflow.
    pub fn next_cap(&self) -> usize {
        if self.cap == 0 {
            DEFAULT_CAPACITY
        } else {
            self.cap.checked_mul(GROWTH_FACTOR).expect("Capacity overflow!")
        }
    }

    /// Grows the HeapCollection following the growth law, moving the `len` live elements starting
    /// at `head` to the start of the new block. Returns the new capacity.
    ///
    /// # Panics
    /// Panics if the new capacity would overflow or the layout size exceeds [`isize::MAX`].
    pub fn grow(&mut self, head: usize, len: usize) -> usize {
        let new_cap = self.next_cap();
        self.realloc(new_cap, head, len);
        new_cap
    }

    /// Moves the `len` live elements starting at `head` (wrapping at the current capacity) into
    /// a new block of `new_cap` slots, where they start at index 0. The old block is freed.
    ///
    /// # Panics
    /// Panics if `new_cap` can't hold `len` elements or the layout size exceeds [`isize::MAX`].
    pub fn realloc(&mut self, new_cap: usize, head: usize, len: usize) {
        assert!(len <= new_cap && len <= self.cap, "Reallocation would lose elements!");

        trace!("reallocating heap collection with {} elements from {} to {} slots", len, self.cap, new_cap);

        let new_mem = if new_cap == 0 { Memory::null() } else { Memory::alloc(new_cap) };

        if len > 0 {
            let head = head % self.cap;
            let first = cmp::min(len, self.cap - head);

            // SAFETY: The live range is initialized and lies within the old block, split into the
            // part before the end of the block and the wrapped remainder. Both fit in the new block
            // because len <= new_cap.
            unsafe {
                new_mem.move_from(0, self.mem, head, first);
                new_mem.move_from(first, self.mem, 0, len - first);
            }
        }

        // SAFETY: The old block was allocated with self.cap slots and its live elements have been
        // moved out.
        unsafe { self.mem.delete(self.cap); }

        self.mem = new_mem;
        self.cap = new_cap;
    }

    /// Drops the `len` elements starting at `head`, wrapping at the capacity. The slots are left
    /// uninitialized.
    ///
    /// # Safety
    /// Every slot in the range must be initialized, and must not be read again until rewritten.
    pub unsafe fn drop_range(&mut self, head: usize, len: usize) {
        for offset in 0..len {
            let index = (head + offset) % self.cap;
            // SAFETY: The slot is initialized, as guaranteed by the caller.
            unsafe { ptr::drop_in_place(self.mem.add(index)); }
        }
    }
}

impl<T> Default for HeapCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for HeapCollection<T> {
    fn drop(&mut self) {
        // SAFETY: The block was allocated with self.cap slots. The owner drops its elements first.
        unsafe { self.mem.delete(self.cap); }
    }
}

// SAFETY: A HeapCollection exclusively owns its block.
unsafe impl<T: Send> Send for HeapCollection<T> {}
// SAFETY: Shared access to a HeapCollection only hands out shared access to its slots.
unsafe impl<T: Sync> Sync for HeapCollection<T> {}
