#![cfg(test)]

use std::borrow::Borrow;
use std::hash::{BuildHasher, RandomState};
use std::iter;

use super::*;
use crate::util::alloc::{CountedDrop, ZeroSizedType};
use crate::util::panic::assert_panics;

#[test]
fn test_empty() {
    let arr: DynamicArray<u32> = DynamicArray::new();
    assert!(arr.is_empty(), "A new DynamicArray should be empty.");
    assert_eq!(arr.len(), 0);
    assert_eq!(arr.cap(), 0);
    assert_eq!(&*arr, &[]);
}

#[test]
fn test_push_growth() {
    let mut arr = DynamicArray::new();
    for i in 0..3 {
        arr.push(i);
    }
    assert_eq!(arr.cap(), 4, "Capacity should double from the minimum of 2.");

    for i in 3..9 {
        arr.push(i);
    }
    assert_eq!(arr.cap(), 16, "Capacity should keep doubling.");
    assert_eq!(*arr, [0, 1, 2, 3, 4, 5, 6, 7, 8]);
}

#[test]
fn test_pop() {
    let mut arr: DynamicArray<_> = (0..5).collect();
    let cap = arr.cap();

    for i in (0..5).rev() {
        assert_eq!(arr.pop(), Some(i), "Values should pop in reverse order.");
    }
    assert_eq!(arr.pop(), None, "Popping an empty DynamicArray should yield None.");
    assert_eq!(arr.cap(), cap, "Popping shouldn't change the capacity.");
}

#[test]
fn test_removing() {
    let mut arr: DynamicArray<_> = ["a", "b", "c", "d", "e", "g", "h"].into_iter().collect();

    assert!(arr.remove(&"c"), "Removing a present value should return true.");
    assert!(
        !arr.remove(&"c"),
        "Removing an absent value should return false and leave the contents alone."
    );
    assert_eq!(*arr, ["a", "b", "d", "e", "g", "h"]);

    assert_eq!(arr.remove_at(0), "a");
    assert_eq!(arr.remove_at(4), "h", "Removal should work at the final index.");
    assert_eq!(*arr, ["b", "d", "e", "g"]);
    assert_eq!(
        arr.cap(),
        arr.len(),
        "Positional removal should shrink the capacity to fit."
    );
}

#[test]
fn test_remove_at_out_of_bounds() {
    assert_panics!({
        let mut arr: DynamicArray<u32> = DynamicArray::new();
        arr.remove_at(0)
    }, "Removing from an empty DynamicArray should panic.");

    assert_panics!({
        let mut arr: DynamicArray<_> = (0..1000).collect();
        arr.remove_at(1000)
    }, "Removing one index past the end should panic.");

    let mut arr: DynamicArray<_> = [-56, -53, -55].into_iter().collect();
    assert_eq!(
        arr.try_remove_at(3),
        Err(IndexOutOfBounds { index: 3, len: 3 }),
        "The error should carry the offending index and the length."
    );
}

#[test]
fn test_replace() {
    let mut arr: DynamicArray<_> = (0..5).collect();
    assert_eq!(arr.replace(2, 100), 2);
    assert_eq!(*arr, [0, 1, 100, 3, 4]);
    assert!(arr.try_replace(5, 0).is_err());
}

#[test]
fn test_index_of() {
    let arr: DynamicArray<_> = [3, 7, 3, 1].into_iter().collect();
    assert_eq!(arr.index_of(&3), Some(0), "The first occurrence should be found.");
    assert_eq!(arr.index_of(&1), Some(3));
    assert_eq!(arr.index_of(&8), None);
    assert!(arr.contains(&7), "Contains should be available through Deref.");
}

#[test]
fn test_clear() {
    let counter = CountedDrop::new(0);
    let mut arr: DynamicArray<_> = iter::repeat_with(|| counter.clone()).take(10).collect();
    let cap = arr.cap();

    arr.clear();
    assert_eq!(counter.take(), 10, "All 10 elements should have been dropped.");
    assert!(arr.is_empty());
    assert_eq!(arr.cap(), cap, "Clearing should keep the capacity.");
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new(0);
    let arr: DynamicArray<_> = iter::repeat_with(|| counter.clone()).take(10).collect();

    drop(arr);

    assert_eq!(counter.take(), 10, "10 elements should have been dropped.");
}

#[test]
fn test_zst_support() {
    let mut arr = DynamicArray::<ZeroSizedType>::new();
    for _ in 0..5 {
        arr.push(ZeroSizedType);
    }

    assert_eq!(arr.len(), 5);
    assert_eq!(arr[0], ZeroSizedType, "Indexing should work for ZSTs.");
    assert_eq!(arr[4], ZeroSizedType);
    assert_eq!(arr.pop(), Some(ZeroSizedType));
    assert_eq!(arr.remove_at(0), ZeroSizedType);
    assert_eq!(arr.len(), 3);
}

#[test]
fn test_equality_and_hash() {
    let arr: DynamicArray<_> = (0_usize..5).collect();

    assert_eq!(
        arr,
        [0, 1, 2, 3, 4].into_iter().collect(),
        "Different construction methods should produce equal results."
    );
    assert_ne!(arr, [0, 1, 2, 5, 4].into_iter().collect());

    assert_eq!(
        &arr.borrow(),
        &[0, 1, 2, 3, 4],
        "Borrow equality should be upheld."
    );
    assert_eq!(&*arr, &[0, 1, 2, 3, 4], "Deref equality should be upheld.");

    let state = RandomState::new();
    assert_eq!(
        state.hash_one(&arr),
        state.hash_one((0_usize..5).collect::<DynamicArray<_>>()),
        "Equal DynamicArrays should produce the same hash."
    );
    assert_eq!(
        state.hash_one(&arr),
        state.hash_one([0_usize, 1, 2, 3, 4]),
        "Borrow hash equality should be upheld."
    );
}

#[test]
fn test_iterators() {
    let mut arr: DynamicArray<_> = (0_usize..5).collect();
    let collected: DynamicArray<_> = arr.iter().cloned().collect();
    assert_eq!(arr, collected, "Collected iter should be equal.");

    for i in arr.iter_mut() {
        *i *= 2;
    }
    assert_eq!(
        *arr,
        [0_usize, 2, 4, 6, 8],
        "DynamicArray mutated by iterator should equal this slice."
    );

    let mut iter = arr.into_iter();
    assert_eq!(iter.len(), 5);
    assert_eq!(iter.next(), Some(0));
    assert_eq!(iter.next_back(), Some(8));
    assert_eq!(iter.next_back(), Some(6));
    assert_eq!(iter.next(), Some(2));
    assert_eq!(iter.next_back(), Some(4));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next_back(), None, "An exhausted iterator should stay exhausted.");

    let counter = CountedDrop::new(0);
    let arr: DynamicArray<_> = iter::repeat_with(|| counter.clone()).take(10).collect();

    let mut iter = arr.into_iter();
    drop(iter.next());
    drop(iter.next_back());
    drop(iter);
    assert_eq!(
        counter.take(),
        10,
        "Dropping a partially consumed owned iterator should drop all remaining elements."
    );
}

#[test]
fn test_display() {
    let arr: DynamicArray<_> = (0..3).collect();
    assert_eq!(format!("{arr}"), "[0, 1, 2]");
    assert_eq!(format!("{}", DynamicArray::<u8>::new()), "[]");
}
