use crate::error::ArgumentOutOfRange;

/// The number of buckets a table starts with when no capacity is provided.
pub const DEFAULT_CAPACITY: usize = 16;

/// The occupancy ratio a table stays below unless configured otherwise.
pub const DEFAULT_LOAD_FACTOR: f64 = 0.75;

/// Construction parameters for a [`HashTable`](super::HashTable) and the types built on it.
///
/// # Examples
/// ```
/// # use chained_std::collections::hash::{Set, TableConfig};
/// let config = TableConfig { capacity: 4, load_factor: 1.0 };
/// let set: Set<u8> = Set::with_config(config, Default::default()).unwrap();
/// assert_eq!(set.cap(), 4);
///
/// assert!(TableConfig { capacity: 4, load_factor: 0.0 }.validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableConfig {
    /// The initial number of buckets. A capacity of 0 defers allocation until the first insert.
    pub capacity: usize,
    /// The threshold for `len / cap`, which must lie within `(0, 1]`. The table grows before an
    /// insert that would bring it up to this ratio.
    pub load_factor: f64,
}

impl TableConfig {
    /// Creates a config with the provided `capacity` and the default load factor.
    pub const fn with_cap(capacity: usize) -> TableConfig {
        TableConfig {
            capacity,
            load_factor: DEFAULT_LOAD_FACTOR,
        }
    }

    /// Checks that the load factor lies within `(0, 1]`.
    ///
    /// # Errors
    /// Returns [`ArgumentOutOfRange`] naming `load_factor` if it is NaN, not positive or greater
    /// than 1.
    pub fn validate(&self) -> Result<(), ArgumentOutOfRange> {
        if self.load_factor > 0.0 && self.load_factor <= 1.0 {
            Ok(())
        } else {
            Err(ArgumentOutOfRange::new("load_factor", self.load_factor))
        }
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        TableConfig::with_cap(DEFAULT_CAPACITY)
    }
}
