//! Various general-purpose collection types.
//!
//! # Purpose
//! Two families of collections live here: the [`hash`] collections, which share a single
//! separate-chaining table, and the [`contiguous`] collections, which share a single growable
//! buffer. Each family is gated behind a feature of the same name.
//!
//! # Method
//! [`List`](contiguous::List) implements [`Deref<Target = [T]>`](std::ops::Deref) (and DerefMut),
//! which saves it from reimplementing most slice functionality. The hash collections are wrappers
//! that only decide which part of an entry acts as its key.

#[cfg(feature = "contiguous")]
pub mod contiguous;
#[cfg(feature = "hash")]
pub mod hash;
#[cfg(feature = "traits")]
pub mod traits;
