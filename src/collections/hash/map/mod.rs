//! A module containing [`Map`] and associated types.
//!
//! The other types here provide owned and borrowed iteration over a map's entries, keys or values.
//! There is no mutable iterator over entries or keys because mutating the keys of a Map in place
//! would cause a logic error.
//!
//! [`Map`] is also re-exported under the parent module.

mod iter;
mod map;
mod tests;

pub use iter::*;
pub use map::*;
