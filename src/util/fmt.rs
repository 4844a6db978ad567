use std::fmt::{self, Debug, Display, Formatter};

/// Writes a pre-rendered string verbatim as its [`Debug`] representation, used to mix
/// placeholders for empty buckets in with real entries.
pub struct DebugRaw(pub String);

impl Debug for DebugRaw {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Writes `items` as `[a, b, c]` using each item's [`Display`] implementation.
pub fn display_list<I>(f: &mut Formatter<'_>, items: I) -> fmt::Result
where
    I: IntoIterator,
    I::Item: Display,
{
    write!(f, "[")?;
    for (index, item) in items.into_iter().enumerate() {
        if index != 0 {
            write!(f, ", ")?;
        }
        write!(f, "{item}")?;
    }
    write!(f, "]")
}
