#![cfg(test)]

use std::collections::{BTreeSet, HashMap};
use std::fmt::Debug;
use std::hash::Hash;

use super::*;

/// Checks that the position map's recorded indices exactly match where each value actually sits in
/// the store, and that no value is tracked with an empty position set.
fn assert_map_consistent<T: Ord + Hash + Clone + Debug>(heap: &IndexedMinHeap<T>) {
    let mut expected: HashMap<&T, BTreeSet<usize>> = HashMap::new();
    for (index, value) in heap.store.iter().enumerate() {
        expected.entry(value).or_default().insert(index);
    }

    assert_eq!(
        heap.map.len(),
        expected.len(),
        "The map should track exactly the distinct stored values."
    );
    for (value, indices) in &expected {
        assert_eq!(
            heap.map.get(*value),
            Some(indices),
            "The recorded positions of {value:?} should match the store."
        );
    }
}

#[test]
fn test_empty() {
    let mut heap: IndexedMinHeap<u32> = IndexedMinHeap::new();
    assert!(heap.is_empty());
    assert_eq!(heap.len(), 0);
    assert_eq!(heap.peek(), None, "Peeking an empty heap should yield None.");
    assert_eq!(heap.poll(), None, "Polling an empty heap should yield None.");
    assert!(!heap.contains(&1));
    assert!(heap.is_min_heap(0), "An empty heap is trivially valid.");
}

#[test]
fn test_add_maintains_invariants() {
    let mut heap = IndexedMinHeap::new();

    // A deliberately non-sorted insertion order covering the whole range.
    for i in 0..32 {
        heap.add((i * 7) % 32);
        assert!(heap.is_min_heap(0), "Heap order should hold after every add.");
        assert_map_consistent(&heap);
    }
    assert_eq!(heap.len(), 32);
    assert_eq!(heap.peek(), Some(&0));
}

#[test]
fn test_poll_produces_sorted_order() {
    let mut heap: IndexedMinHeap<_> = [9, 4, 7, 1, 8, 1, 3, 0, 6, 2].into_iter().collect();

    let mut previous = None;
    while let Some(value) = heap.poll() {
        if let Some(prev) = previous {
            assert!(prev <= value, "Polling should yield non-decreasing values.");
        }
        previous = Some(value);
        assert!(heap.is_min_heap(0), "Heap order should hold after every poll.");
        assert_map_consistent(&heap);
    }
    assert!(heap.is_empty());
}

#[test]
fn test_peek_does_not_remove() {
    let heap: IndexedMinHeap<_> = [4, 2, 8].into_iter().collect();
    assert_eq!(heap.peek(), Some(&2));
    assert_eq!(heap.peek(), Some(&2), "Peeking should leave the heap untouched.");
    assert_eq!(heap.len(), 3);
}

#[test]
fn test_duplicates_round_trip() {
    let mut heap: IndexedMinHeap<_> = [5, 3, 5, 1, 3, 5].into_iter().collect();
    assert_map_consistent(&heap);

    let mut polled = Vec::new();
    for _ in 0..3 {
        assert!(heap.contains(&5), "5 should be contained until all three copies are gone.");
        polled.push(heap.poll().expect("heap is non-empty"));
    }
    for _ in 0..3 {
        polled.push(heap.poll().expect("heap is non-empty"));
    }

    assert_eq!(polled, [1, 3, 3, 5, 5, 5], "Duplicates should all come back out in order.");
    assert!(!heap.contains(&5), "Contains should flip once the last copy is removed.");
    assert!(heap.is_empty());
}

#[test]
fn test_remove() {
    let mut heap: IndexedMinHeap<_> = [6, 2, 9, 4, 2].into_iter().collect();

    assert!(heap.contains(&9));
    assert!(heap.remove(&9), "Removing a contained value should return true.");
    assert!(!heap.contains(&9));
    assert_eq!(heap.len(), 4, "Removal should shrink the heap by one.");
    assert!(heap.is_min_heap(0));
    assert_map_consistent(&heap);

    assert!(!heap.remove(&9), "Removing an absent value should return false.");
    assert_eq!(heap.len(), 4, "A failed removal should be a no-op.");
    assert_map_consistent(&heap);

    assert!(heap.remove(&2));
    assert!(heap.contains(&2), "One copy of a duplicate should survive its removal.");
    assert!(heap.remove(&2));
    assert!(!heap.contains(&2));

    assert_eq!(heap.poll(), Some(4));
    assert_eq!(heap.poll(), Some(6));
    assert_eq!(heap.poll(), None);
}

#[test]
fn test_remove_takes_highest_duplicate_index() {
    let mut heap = IndexedMinHeap::new();
    for _ in 0..3 {
        heap.add(2);
    }
    assert_eq!(heap.map.get(&2), Some(&BTreeSet::from([0, 1, 2])));

    assert!(heap.remove(&2));
    assert_eq!(
        heap.map.get(&2),
        Some(&BTreeSet::from([0, 1])),
        "The occurrence at the highest store index should be the one removed."
    );
}

#[test]
fn test_heapify_invariants() {
    let heap = IndexedMinHeap::heapify([12, 7, 3, 7, 1, 15, 0, 9, 7]);
    assert_eq!(heap.len(), 9);
    assert!(heap.is_min_heap(0), "Heapify should produce a valid heap.");
    assert_map_consistent(&heap);
    assert_eq!(heap.peek(), Some(&0));

    let empty: IndexedMinHeap<u32> = IndexedMinHeap::heapify([]);
    assert!(empty.is_empty(), "Heapifying nothing should produce an empty heap.");
}

#[test]
fn test_heapify_equivalence() {
    let values = [10, 3, 3, 8, 1, 12, 5, 1, 9, 0, 7, 7];

    let mut bulk = IndexedMinHeap::heapify(values);
    let mut incremental: IndexedMinHeap<_> = values.into_iter().collect();

    loop {
        let (a, b) = (bulk.poll(), incremental.poll());
        assert_eq!(
            a, b,
            "Bulk and incremental construction should poll identical sequences."
        );
        if a.is_none() {
            break;
        }
    }
}

#[test]
fn test_clear() {
    let mut heap: IndexedMinHeap<_> = (0..10).collect();

    heap.clear();
    assert!(heap.is_empty());
    assert_eq!(heap.peek(), None, "A cleared heap should behave like a new one.");
    assert_eq!(heap.poll(), None);
    assert!(!heap.contains(&3));
    assert!(heap.map.is_empty(), "Clearing should discard the position map.");

    heap.add(5);
    heap.add(1);
    assert_eq!(heap.poll(), Some(1), "The heap should be fully usable after clearing.");
}

#[test]
fn test_with_cap() {
    let mut heap = IndexedMinHeap::with_cap(10);
    for i in 0..10 {
        heap.add(i);
    }
    assert_eq!(heap.store.cap(), 10, "Adding within the capacity hint shouldn't reallocate.");
}

#[test]
fn test_extend() {
    let mut heap: IndexedMinHeap<_> = [4, 6].into_iter().collect();
    heap.extend([1, 5]);

    assert_eq!(heap.len(), 4);
    assert!(heap.is_min_heap(0));
    assert_map_consistent(&heap);
    assert_eq!(heap.poll(), Some(1));
}

#[test]
fn test_mixed_operations_against_model() {
    let mut heap = IndexedMinHeap::new();
    let mut model: Vec<u32> = Vec::new();

    // A fixed linear congruential sequence drives a mix of adds, polls and removals, with a small
    // value range to force plenty of duplicates.
    let mut state: u32 = 0x1234_5678;
    for _ in 0..500 {
        state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        let value = state % 16;

        match (state >> 8) % 4 {
            0 | 1 => {
                heap.add(value);
                model.push(value);
            },
            2 => {
                let expected = model
                    .iter()
                    .enumerate()
                    .min_by_key(|(_, v)| **v)
                    .map(|(index, _)| index);
                match expected {
                    Some(index) => assert_eq!(heap.poll(), Some(model.swap_remove(index))),
                    None => assert_eq!(heap.poll(), None),
                }
            },
            _ => {
                let expected = model.iter().position(|v| *v == value);
                assert_eq!(
                    heap.remove(&value),
                    expected.is_some(),
                    "Removal should succeed exactly when the model holds the value."
                );
                if let Some(index) = expected {
                    model.swap_remove(index);
                }
            },
        }

        assert_eq!(heap.len(), model.len(), "Sizes should track the model exactly.");
        assert_eq!(heap.is_empty(), model.is_empty());
        assert!(heap.is_min_heap(0), "Heap order should hold after every operation.");
        assert_map_consistent(&heap);
    }

    // Drain whatever is left and check it comes out sorted.
    model.sort_unstable();
    let mut drained = Vec::new();
    while let Some(value) = heap.poll() {
        drained.push(value);
    }
    assert_eq!(drained, model, "Draining should yield the model's contents in order.");
}
