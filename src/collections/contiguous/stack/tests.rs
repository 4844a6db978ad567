#![cfg(test)]

use super::*;
use crate::collections::contiguous::DEFAULT_CAPACITY;
use crate::error::InvalidOperation;
use crate::util::drop::CountedDrop;

#[test]
fn test_lifo() {
    let mut stack: Stack<_> = (1..=3).collect();

    assert_eq!(stack.peek(), Ok(&3));
    assert_eq!(stack.pop(), Ok(3));
    stack.push(4);
    assert_eq!(stack.pop(), Ok(4));
    assert_eq!(stack.pop(), Ok(2));
    assert_eq!(stack.pop(), Ok(1));
    assert!(stack.is_empty());
}

#[test]
fn test_empty() {
    let mut stack = Stack::<u8>::new();

    let err = stack.pop().expect_err("Popping an empty Stack should fail.");
    assert_eq!(err, InvalidOperation { reason: "the Stack is empty" });
    assert_eq!(err.to_string(), "Invalid operation: the Stack is empty!");
    assert!(stack.peek().is_err());
}

#[test]
fn test_growth() {
    let mut stack = Stack::new();
    for i in 0..=DEFAULT_CAPACITY {
        stack.push(i);
    }
    assert_eq!(stack.cap(), DEFAULT_CAPACITY * 2);
    assert_eq!(stack.peek(), Ok(&DEFAULT_CAPACITY));
}

#[test]
fn test_clear() {
    let counter = CountedDrop::new();
    let mut stack = Stack::new();
    stack.extend([counter.clone(), counter.clone(), counter.clone()]);

    stack.clear();
    assert_eq!(counter.count(), 3);
    stack.clear();
    assert_eq!(counter.count(), 3, "Clearing twice should be the same as clearing once.");
    assert_eq!(stack.len(), 0);
}

#[test]
fn test_iter_and_display() {
    let stack: Stack<_> = ["bottom", "middle", "top"].into_iter().collect();

    assert_eq!(stack.iter().copied().collect::<Vec<_>>(), ["top", "middle", "bottom"]);
    assert_eq!(stack.to_string(), "[top, middle, bottom]");
    assert_eq!(stack.clone(), stack);
}
