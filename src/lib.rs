//! This crate is a small standard library of collections, built on top of a single raw memory
//! layer.
//!
//! # Purpose
//! Each collection here manages its own memory. The hash collections share a separate-chaining
//! [`HashTable`](collections::hash::HashTable), where every bucket stores the head of its chain
//! inline, and the contiguous collections share a growable
//! [`HeapCollection`](collections::contiguous::HeapCollection). Both are built on
//! [`Memory`](memory::Memory), a typed pointer that knows whether it may still be used.
//!
//! # Method
//! This crate isn't intended to copy Rust's [`std`] but rather takes a lot of inspiration from
//! it, especially its APIs. Unsafe code is confined to the memory layer and the storage engines,
//! and every unsafe block states the invariant it relies on.
//!
//! # Error Handling
//! Specifically for a standard library, it is more ergonomic for functions to panic in some cases,
//! because users don't want to be forced to handle an error every time they invoke a method. For
//! example, a capacity overflow panics. Lookups and operations that depend on the state of a
//! collection return [`Result`]s instead.
//!
//! When this crate employs errors via [`Result`]s, it does so in a method that is strongly typed,
//! with a small struct for each kind of failure that implements [`Error`](std::error::Error), and
//! [`CollectionError`](error::CollectionError) to combine them using static dispatch.
//!
//! # Logging
//! Structural events, such as a table growing or a buffer reallocating, are reported through the
//! [`log`] facade at `debug` and `trace` level. No logger is installed by this crate.
//!
//! # Dependencies
//! This crate depends on some derive macros because they're helpful and remove the need for some
//! very repetitive programming, and on [`log`] for diagnostics. Library code doesn't use [`Vec`]
//! at all.

// #![warn(missing_docs)]
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;
pub mod error;
pub mod memory;

pub(crate) mod util;
