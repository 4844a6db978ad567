//! A module containing [`HashTable`], the engine behind [`Map`](super::Map) and
//! [`Set`](super::Set), and its iterators.
//!
//! The bucket array, chain nodes and occupied bucket records are managed by crate-private types in
//! this module: [`HashTable`] only decides where entries go.

mod alloc;
mod hash_table;
mod iter;
mod meta;
mod node;
mod tests;

pub(crate) use alloc::*;
pub use hash_table::*;
pub use iter::*;
pub(crate) use meta::*;
pub(crate) use node::*;
