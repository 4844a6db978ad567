//! The error types shared by every collection in this crate.
//!
//! Each kind of failure gets its own small struct so that methods can return exactly the error
//! they produce, with [`CollectionError`] available for callers that want to funnel them all into
//! one type.

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// An index was greater than or equal to the length of the collection.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Index {index} out of range for collection with {len} elements!")]
pub struct IndexOutOfRange {
    pub index: usize,
    pub len: usize,
}

/// A parameter was given a value outside of the range it accepts.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Argument `{param}` out of range: {value}!")]
pub struct ArgumentOutOfRange {
    pub param: &'static str,
    pub value: String,
}

impl ArgumentOutOfRange {
    pub fn new(param: &'static str, value: impl ToString) -> ArgumentOutOfRange {
        ArgumentOutOfRange {
            param,
            value: value.to_string(),
        }
    }
}

/// An operation isn't possible in the current state of the collection, e.g. popping from an
/// empty Stack.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid operation: {reason}!")]
pub struct InvalidOperation {
    pub reason: &'static str,
}

/// A lookup was made for a key that isn't present.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("No entry found for the provided `{param}`!")]
pub struct KeyNotFound {
    pub param: &'static str,
}

impl KeyNotFound {
    pub(crate) const KEY: KeyNotFound = KeyNotFound { param: "key" };
}

#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum CollectionError {
    IndexOutOfRange(IndexOutOfRange),
    ArgumentOutOfRange(ArgumentOutOfRange),
    InvalidOperation(InvalidOperation),
    KeyNotFound(KeyNotFound),
}
