#![cfg(test)]

use super::*;

#[test]
fn test_empty() {
    let mut queue: Queue<u32> = Queue::new();
    assert!(queue.is_empty());
    assert_eq!(queue.len(), 0);
    assert_eq!(queue.peek(), None, "Peeking an empty Queue should yield None.");
    assert_eq!(queue.poll(), None, "Polling an empty Queue should yield None.");
}

#[test]
fn test_fifo_order() {
    let mut queue = Queue::new();
    for i in 0..50 {
        queue.offer(i);
    }
    assert_eq!(queue.len(), 50);

    for i in 0..50 {
        assert_eq!(queue.peek(), Some(&i), "Peek should show the oldest element.");
        assert_eq!(queue.poll(), Some(i), "Elements should poll in insertion order.");
    }
    assert!(queue.is_empty());
}

#[test]
fn test_interleaved() {
    let mut queue = Queue::new();
    queue.offer(1);
    queue.offer(2);
    assert_eq!(queue.poll(), Some(1));
    queue.offer(3);
    assert_eq!(queue.poll(), Some(2));
    assert_eq!(queue.poll(), Some(3));
    assert_eq!(queue.poll(), None);

    queue.offer(4);
    assert_eq!(queue.peek(), Some(&4), "The Queue should be reusable after emptying.");
}

#[test]
fn test_clear() {
    let mut queue: Queue<_> = (0..10).collect();
    queue.clear();
    assert!(queue.is_empty());
    assert_eq!(queue.poll(), None);
}

#[test]
fn test_iterators() {
    let queue: Queue<_> = (0..5).collect();
    assert_eq!(
        queue.iter().copied().collect::<Vec<_>>(),
        [0, 1, 2, 3, 4],
        "Iteration should run from front to back."
    );
    assert_eq!(queue.into_iter().collect::<Vec<_>>(), [0, 1, 2, 3, 4]);
}

#[test]
fn test_equality() {
    let queue: Queue<_> = (0..5).collect();
    assert_eq!(queue, (0..5).collect());
    assert_ne!(queue, (1..6).collect());
    assert_eq!(queue.clone(), queue);
}
