//! A module containing [`Set`] and its iterators.
//!
//! There is no mutable iterator over the values of a Set because mutating them in place would
//! cause a logic error. Lazy set operations come from [`SetLike`](crate::collections::traits::SetLike).
//!
//! [`Set`] is also re-exported under the parent module.

mod iter;
mod set;
mod tests;

pub use iter::*;
pub use set::*;
