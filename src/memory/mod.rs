//! The raw memory layer that every collection in this crate allocates into.
//!
//! [`Memory<T>`] is deliberately thin: it remembers a typed pointer and whether that pointer may
//! still be used, nothing more. Ownership is tracked by the collections themselves, which pair
//! every [`Memory::alloc`] with a [`Memory::delete`] of the same size.

mod memory;
mod status;

pub use memory::*;
pub use status::*;
