//! Contiguous collection types. [`List`] for indexed access, [`Stack`] and [`Queue`] for LIFO and
//! FIFO access, all backed by a growable [`HeapCollection`].

pub mod heap;
pub mod list;
pub mod queue;
pub mod stack;

#[doc(inline)]
pub use heap::{DEFAULT_CAPACITY, HeapCollection};
#[doc(inline)]
pub use list::List;
#[doc(inline)]
pub use queue::Queue;
#[doc(inline)]
pub use stack::Stack;
