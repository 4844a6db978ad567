use std::alloc::{self, Layout};
use std::fmt::{self, Debug, Formatter};
use std::ptr::{self, NonNull};

use super::Status;

/// A typed, non-owning pointer to `count` slots of `T`, tagged as [`Valid`](Status::Valid) or
/// [`Invalid`](Status::Invalid).
///
/// Memory doesn't know how many slots it points to or which of them are initialized. Whoever calls
/// [`Memory::alloc`] is responsible for constructing and destroying values in the slots and for
/// calling [`Memory::delete`] with the same count once the allocation is no longer needed.
///
/// Deleting a Memory invalidates it, clearing both the pointer and the tag, so that stale copies of
/// the handle held by the same owner can be recognized with [`Memory::is_valid_memory`].
pub struct Memory<T> {
    pub(crate) ptr: *mut T,
    pub(crate) status: Status,
}

impl<T> Memory<T> {
    /// Creates an invalid Memory with a null pointer. Nothing is allocated.
    pub const fn null() -> Memory<T> {
        Memory {
            ptr: ptr::null_mut(),
            status: Status::Invalid,
        }
    }

    /// Allocates `count` uninitialized slots of `T` in the global allocator.
    ///
    /// Zero-sized layouts (either because `count` is 0 or `T` is a ZST) aren't allocated and
    /// receive a dangling, but still valid, pointer.
    ///
    /// # Panics
    /// Panics if the memory layout size exceeds [`isize::MAX`].
    ///
    /// # Errors
    /// Allocation failure isn't recoverable, [`alloc::handle_alloc_error`] is called instead.
    pub fn alloc(count: usize) -> Memory<T> {
        let layout = Self::make_layout(count);

        let ptr = if layout.size() == 0 {
            NonNull::dangling()
        } else {
            NonNull::new(
                // SAFETY: Zero-sized layouts have been guarded against.
                unsafe { alloc::alloc(layout).cast() }
            ).unwrap_or_else(|| alloc::handle_alloc_error(layout))
        };

        Memory {
            ptr: ptr.as_ptr(),
            status: Status::Valid,
        }
    }

    /// Frees the memory, which must have been allocated with [`Memory::alloc`] and exactly the
    /// same `count`. The handle is invalidated afterwards. Deleting invalid memory does nothing.
    ///
    /// No destructors are run, any initialized values still in the slots are leaked.
    ///
    /// # Safety
    /// `count` must match the count used to allocate the memory and no other copies of this
    /// handle may be used to access the memory after it has been deleted.
    pub unsafe fn delete(&mut self, count: usize) {
        if !self.is_valid_memory() { return; }

        let layout = Self::make_layout(count);
        if layout.size() != 0 {
            // SAFETY: ptr was allocated in the global allocator with this layout, as guaranteed by
            // the caller. Zero-sized layouts were never allocated.
            unsafe { alloc::dealloc(self.ptr.cast(), layout) }
        }

        self.invalidate();
    }

    /// Returns true if the pointer isn't null and the Memory hasn't been invalidated.
    pub const fn is_valid_memory(&self) -> bool {
        !self.ptr.is_null() && matches!(self.status, Status::Valid)
    }

    /// Marks the Memory as invalid and forgets its pointer, without freeing anything.
    pub const fn invalidate(&mut self) {
        self.ptr = ptr::null_mut();
        self.status = Status::Invalid;
    }

    pub const fn status(&self) -> Status {
        self.status
    }

    pub const fn as_ptr(&self) -> *mut T {
        self.ptr
    }

    /// Returns a pointer to the slot at `index`.
    ///
    /// # Safety
    /// The Memory must be valid and `index` must be within the allocated count (or equal to it, for
    /// a one-past-the-end pointer).
    pub const unsafe fn add(&self, index: usize) -> *mut T {
        // SAFETY: Bounds are the responsibility of the caller.
        unsafe { self.ptr.add(index) }
    }

    /// Writes `value` into the slot at `index` without reading or dropping the previous contents.
    ///
    /// # Safety
    /// The Memory must be valid and `index` must be within the allocated count.
    pub unsafe fn write(&self, index: usize, value: T) {
        // SAFETY: Bounds are the responsibility of the caller.
        unsafe { self.add(index).write(value) }
    }

    /// Moves the value out of the slot at `index`, leaving the slot logically uninitialized.
    ///
    /// # Safety
    /// The Memory must be valid, `index` must be within the allocated count and the slot must be
    /// initialized. The slot must not be read again until it is rewritten.
    pub unsafe fn read(&self, index: usize) -> T {
        // SAFETY: Initialization and bounds are the responsibility of the caller.
        unsafe { self.add(index).read() }
    }

    /// Returns a reference to the initialized slot at `index`.
    ///
    /// # Safety
    /// The Memory must be valid, `index` must be within the allocated count and the slot must be
    /// initialized. The returned lifetime is unbounded, the caller must not let it outlive the
    /// allocation or alias a mutable reference.
    pub const unsafe fn slot<'a>(&self, index: usize) -> &'a T {
        // SAFETY: Upheld by the caller.
        unsafe { &*self.ptr.add(index) }
    }

    /// Returns a mutable reference to the initialized slot at `index`.
    ///
    /// # Safety
    /// See [`Memory::slot`]. Additionally, no other reference to the slot may exist.
    #[allow(clippy::mut_from_ref)]
    pub unsafe fn slot_mut<'a>(&self, index: usize) -> &'a mut T {
        // SAFETY: Upheld by the caller.
        unsafe { &mut *self.ptr.add(index) }
    }

    /// Moves `count` values from `src` starting at `src_index` into this Memory starting at
    /// `dst_index`. The source slots are left logically uninitialized.
    ///
    /// # Safety
    /// Both Memory handles must be valid, refer to different allocations and both ranges must be
    /// within their allocated counts. The source range must be initialized and anything in the
    /// destination range is overwritten without being dropped.
    pub unsafe fn move_from(&self, dst_index: usize, src: Memory<T>, src_index: usize, count: usize) {
        // SAFETY: Upheld by the caller.
        unsafe { ptr::copy_nonoverlapping(src.add(src_index), self.add(dst_index), count) }
    }
}

impl<T> Memory<T> {
    /// A helper function to create a [`Layout`] for `count` elements of type `T`.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub(crate) fn make_layout(count: usize) -> Layout {
        Layout::array::<T>(count).expect("Capacity overflow!")
    }
}

impl<T> Clone for Memory<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Memory<T> {}

impl<T> Default for Memory<T> {
    fn default() -> Self {
        Self::null()
    }
}

impl<T> PartialEq for Memory<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr == other.ptr && self.status == other.status
    }
}

impl<T> Eq for Memory<T> {}

impl<T> From<Memory<T>> for *mut T {
    fn from(value: Memory<T>) -> Self {
        value.ptr
    }
}

impl<T> Debug for Memory<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Memory")
            .field("ptr", &self.ptr)
            .field("status", &self.status)
            .finish()
    }
}
