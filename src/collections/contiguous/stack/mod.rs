//! A module containing [`Stack`].
//!
//! [`Stack`] is also re-exported under the parent module.

mod stack;
mod tests;

pub use stack::*;
