use std::cell::Cell;
use std::rc::Rc;

/// A type with no size, for checking that collections never touch storage for ZSTs.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ZeroSizedType;

/// A value that increments a shared counter every time any of its clones is dropped. Used to check
/// that manually managed slots are destroyed exactly once.
#[derive(Debug, Clone)]
pub struct CountedDrop(Rc<Cell<usize>>);

impl CountedDrop {
    pub fn new() -> CountedDrop {
        CountedDrop(Rc::new(Cell::new(0)))
    }

    /// The number of drops recorded so far. The handle being queried doesn't count itself until it
    /// is dropped too.
    pub fn count(&self) -> usize {
        self.0.get()
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}
