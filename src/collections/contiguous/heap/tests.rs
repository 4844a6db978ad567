#![cfg(test)]

use super::*;
use crate::util::drop::CountedDrop;
use crate::util::panic::assert_panics;

#[test]
fn test_growth_law() {
    let mut heap = HeapCollection::<u32>::new();
    assert_eq!(heap.cap(), 0);
    assert!(!heap.memory().is_valid_memory(), "An empty HeapCollection shouldn't allocate.");

    assert_eq!(heap.grow(0, 0), DEFAULT_CAPACITY, "The first growth should use the default.");
    assert!(heap.memory().is_valid_memory());
    assert_eq!(heap.grow(0, 0), DEFAULT_CAPACITY * 2, "Later growth should double.");
    assert_eq!(heap.grow(0, 0), DEFAULT_CAPACITY * 4);
}

#[test]
fn test_grow_moves_elements() {
    let mut heap = HeapCollection::<String>::with_cap(3);
    // SAFETY: All indices are in bounds and each slot is read exactly once after being written.
    unsafe {
        for i in 0..3 {
            heap.memory().write(i, i.to_string());
        }

        heap.grow(0, 3);
        assert_eq!(heap.cap(), 6);
        for i in 0..3 {
            assert_eq!(heap.memory().read(i), i.to_string());
        }
    }
}

#[test]
fn test_grow_unwraps_range() {
    let mut heap = HeapCollection::<char>::with_cap(4);
    // SAFETY: The live range is [2, 3, 0, 1], all of which are written before being moved.
    unsafe {
        heap.memory().write(2, 'a');
        heap.memory().write(3, 'b');
        heap.memory().write(0, 'c');
        heap.memory().write(1, 'd');

        heap.grow(2, 4);
        assert_eq!(heap.cap(), 8);
        assert_eq!(
            [heap.memory().read(0), heap.memory().read(1), heap.memory().read(2), heap.memory().read(3)],
            ['a', 'b', 'c', 'd'],
            "Growing should move a wrapped range to the start of the new block, in order."
        );
    }
}

#[test]
fn test_drop_range() {
    let counter = CountedDrop::new();
    let mut heap = HeapCollection::with_cap(4);
    // SAFETY: Slots 3, 0 and 1 are written before being dropped.
    unsafe {
        heap.memory().write(3, counter.clone());
        heap.memory().write(0, counter.clone());
        heap.memory().write(1, counter.clone());

        heap.drop_range(3, 3);
    }
    assert_eq!(counter.count(), 3, "Every element in the wrapped range should be dropped.");

    drop(heap);
    assert_eq!(counter.count(), 3, "Dropping the HeapCollection itself shouldn't drop elements.");
}

#[test]
fn test_realloc_rejects_loss() {
    let mut heap = HeapCollection::<u8>::with_cap(4);
    assert_panics!(
        { heap.realloc(2, 0, 3); },
        "Shrinking below the number of live elements should panic."
    );
}
