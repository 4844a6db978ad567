//! A module containing [`List`] and associated types.
//!
//! Currently, the only other included type is [`IntoIter`] for owned iteration over a List.
//! [`IterMut`](std::slice::IterMut) and [`Iter`](std::slice::Iter) from [`std::slice`] are used
//! for borrowed iteration.
//!
//! [`List`] is also re-exported under the parent module.

mod iter;
mod list;

pub use iter::*;
pub use list::*;
