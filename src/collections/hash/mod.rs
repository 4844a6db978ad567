//! Hash-based collections built on a separate-chaining [`HashTable`].
//!
//! [`Map`] and [`Set`] are thin wrappers that pick which part of an entry the table treats as the
//! key: a [`Set`] uses [`ValueKey`], a [`Map`] stores [`KeyValuePair`]s and uses [`PairKey`].
//! Every table hashes keys through a [`KeyHasher`], which defaults to [`DefaultHashBuilder`].

mod config;
mod hasher;
mod key;
pub mod map;
pub mod set;
pub mod table;

pub use config::*;
pub use hasher::*;
pub use key::*;

#[doc(inline)]
pub use map::Map;
#[doc(inline)]
pub use set::Set;
#[doc(inline)]
pub use table::HashTable;
