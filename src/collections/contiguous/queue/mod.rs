//! A module containing [`Queue`] and its iterators.
//!
//! [`Queue`] is also re-exported under the parent module.

mod iter;
mod queue;

pub use iter::*;
pub use queue::*;
