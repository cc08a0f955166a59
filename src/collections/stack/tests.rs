#![cfg(test)]

use super::*;

#[test]
fn test_empty() {
    let mut stack: Stack<u32> = Stack::new();
    assert!(stack.is_empty());
    assert_eq!(stack.len(), 0);
    assert_eq!(stack.peek(), None, "Peeking an empty Stack should yield None.");
    assert_eq!(stack.pop(), None, "Popping an empty Stack should yield None.");
}

#[test]
fn test_lifo_order() {
    let mut stack = Stack::new();
    for i in 0..50 {
        stack.push(i);
    }
    assert_eq!(stack.len(), 50);

    for i in (0..50).rev() {
        assert_eq!(stack.peek(), Some(&i), "Peek should show the newest element.");
        assert_eq!(stack.pop(), Some(i), "Elements should pop in reverse insertion order.");
    }
    assert!(stack.is_empty());
}

#[test]
fn test_interleaved() {
    let mut stack = Stack::new();
    stack.push("a");
    stack.push("b");
    assert_eq!(stack.pop(), Some("b"));
    stack.push("c");
    assert_eq!(stack.pop(), Some("c"));
    assert_eq!(stack.pop(), Some("a"));
    assert_eq!(stack.pop(), None);

    stack.push("d");
    assert_eq!(stack.peek(), Some(&"d"), "The Stack should be reusable after emptying.");
}

#[test]
fn test_clear() {
    let mut stack: Stack<_> = (0..10).collect();
    stack.clear();
    assert!(stack.is_empty());
    assert_eq!(stack.pop(), None);
}

#[test]
fn test_iterators() {
    let stack: Stack<_> = (0..5).collect();
    assert_eq!(
        stack.iter().copied().collect::<Vec<_>>(),
        [0, 1, 2, 3, 4],
        "Iteration should run from the bottom of the stack to the top."
    );
    assert_eq!(stack.into_iter().collect::<Vec<_>>(), [0, 1, 2, 3, 4]);
}

#[test]
fn test_equality() {
    let stack: Stack<_> = (0..5).collect();
    assert_eq!(stack, (0..5).collect());
    assert_ne!(stack, (1..6).collect());
    assert_eq!(stack.clone(), stack);
}
