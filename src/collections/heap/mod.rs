//! A module containing [`IndexedMinHeap`], a binary min-heap priority queue with an auxiliary
//! value-to-positions index.
//!
//! The index is what separates this type from a plain binary heap: it makes
//! [`contains`](IndexedMinHeap::contains) `O(1)` and [`remove`](IndexedMinHeap::remove) `O(log n)`
//! for arbitrary values, where a plain heap would have to scan.

mod indexed_min_heap;
mod tests;

pub use indexed_min_heap::*;
