//! Traits shared between collection types.

pub mod set;

#[doc(inline)]
pub use set::SetLike;
