//! A module containing [`HeapCollection`], the growable buffer behind every contiguous
//! collection.

mod heap_collection;
mod tests;

pub use heap_collection::*;
