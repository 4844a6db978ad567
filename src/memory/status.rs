use derive_more::IsVariant;

/// A tag recording whether a piece of memory (or a node living in it) currently holds something
/// that may be used.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, IsVariant)]
pub enum Status {
    Valid,
    #[default]
    Invalid,
}
