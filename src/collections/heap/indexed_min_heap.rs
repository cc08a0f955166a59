use std::collections::{BTreeSet, HashMap};
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::Hash;

use crate::collections::contiguous::DynamicArray;

/// A total-order min-heap priority queue with `O(log n)` removal of arbitrary values and `O(1)`
/// containment checks.
///
/// The heap itself is the usual implicit binary tree laid out in a [`DynamicArray`]: the children
/// of the node at index `k` live at `2k + 1` and `2k + 2`, and every node compares `<=` both of its
/// children. On top of that, a map from each value to the ordered set of indices it currently
/// occupies is kept in lock-step with every mutation of the store. The map is what lets
/// [`remove`](IndexedMinHeap::remove) find a value without scanning and
/// [`contains`](IndexedMinHeap::contains) answer immediately, at the cost of some extra space and a
/// [`Clone`] of each value for its map key.
///
/// Duplicate values are fully supported; each occurrence is tracked as a separate position in the
/// value's index set.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the heap.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `peek` | `O(1)` |
/// | `contains` | `O(1)`* |
/// | `add` | `O(log n)` |
/// | `poll` | `O(log n)` |
/// | `remove` | `O(log n)` |
/// | `heapify` | `O(n)` |
/// | `clear` | `O(n)` |
///
/// \* Amortized, as with any hash map lookup.
///
/// # Examples
/// ```
/// # use data_structures::collections::heap::IndexedMinHeap;
/// let mut heap = IndexedMinHeap::new();
/// heap.add(3);
/// heap.add(1);
/// heap.add(2);
///
/// assert!(heap.contains(&2));
/// assert!(heap.remove(&2));
///
/// assert_eq!(heap.poll(), Some(1));
/// assert_eq!(heap.poll(), Some(3));
/// assert_eq!(heap.poll(), None);
/// ```
pub struct IndexedMinHeap<T> {
    pub(crate) store: DynamicArray<T>,
    pub(crate) map: HashMap<T, BTreeSet<usize>>,
}

impl<T> IndexedMinHeap<T> {
    /// Creates a new IndexedMinHeap with no elements.
    pub fn new() -> IndexedMinHeap<T> {
        IndexedMinHeap {
            store: DynamicArray::new(),
            map: HashMap::new(),
        }
    }

    /// Creates a new IndexedMinHeap with capacity for `cap` elements, allowing values to be added
    /// without reallocating the store.
    ///
    /// # Panics
    /// Panics if the memory layout size would exceed [`isize::MAX`].
    pub fn with_cap(cap: usize) -> IndexedMinHeap<T> {
        IndexedMinHeap {
            store: DynamicArray::with_cap(cap),
            map: HashMap::with_capacity(cap),
        }
    }

    /// Returns the number of elements in the heap.
    pub const fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns true if the heap contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Removes all elements from the heap and discards the position map.
    pub fn clear(&mut self) {
        self.store.clear();
        self.map.clear();
    }

    /// Returns a reference to the minimum element without removing it, if the heap isn't empty.
    ///
    /// # Examples
    /// ```
    /// # use data_structures::collections::heap::IndexedMinHeap;
    /// let heap: IndexedMinHeap<_> = [2, 1, 3].into_iter().collect();
    /// assert_eq!(heap.peek(), Some(&1));
    /// assert_eq!(IndexedMinHeap::<u8>::new().peek(), None);
    /// ```
    pub fn peek(&self) -> Option<&T> {
        self.store.first()
    }
}

impl<T: Hash + Eq> IndexedMinHeap<T> {
    /// Returns true if `value` currently appears at least once in the heap.
    ///
    /// This is the map lookup the whole structure exists for: no position set is ever left empty,
    /// so key presence in the map is exactly element presence in the store.
    ///
    /// # Examples
    /// ```
    /// # use data_structures::collections::heap::IndexedMinHeap;
    /// let heap: IndexedMinHeap<_> = [5, 3, 5].into_iter().collect();
    /// assert!(heap.contains(&5));
    /// assert!(!heap.contains(&4));
    /// ```
    pub fn contains(&self, value: &T) -> bool {
        self.map.contains_key(value)
    }
}

impl<T: Ord + Hash + Clone> IndexedMinHeap<T> {
    /// Creates a heap from the provided elements in `O(n)` by loading them all into the store and
    /// then sinking every internal node, from the last parent down to the root.
    ///
    /// The resulting heap holds the same elements as one built by repeated [`add`], though not
    /// necessarily in the same internal order.
    ///
    /// # Examples
    /// ```
    /// # use data_structures::collections::heap::IndexedMinHeap;
    /// let mut heap = IndexedMinHeap::heapify([7, 1, 5, 3]);
    /// assert_eq!(heap.poll(), Some(1));
    /// assert_eq!(heap.poll(), Some(3));
    /// ```
    ///
    /// [`add`]: IndexedMinHeap::add
    pub fn heapify<I: IntoIterator<Item = T>>(elems: I) -> IndexedMinHeap<T> {
        let mut heap = IndexedMinHeap::new();

        for (index, value) in elems.into_iter().enumerate() {
            heap.map_add(value.clone(), index);
            heap.store.push(value);
        }

        for k in (0..=heap.len() / 2).rev() {
            heap.sink(k);
        }

        heap
    }

    /// Adds `value` to the heap, `O(log n)`.
    ///
    /// The value is appended to the store, recorded in the position map and then swum towards the
    /// root until its parent compares `<=` to it.
    pub fn add(&mut self, value: T) {
        let index = self.store.len();
        self.map_add(value.clone(), index);
        self.store.push(value);
        self.swim(index);
    }

    /// Removes and returns the minimum element, if the heap isn't empty. `O(log n)`.
    ///
    /// # Examples
    /// ```
    /// # use data_structures::collections::heap::IndexedMinHeap;
    /// let mut heap: IndexedMinHeap<_> = [4, 2, 8].into_iter().collect();
    /// assert_eq!(heap.poll(), Some(2));
    /// assert_eq!(heap.poll(), Some(4));
    /// assert_eq!(heap.poll(), Some(8));
    /// assert_eq!(heap.poll(), None);
    /// ```
    pub fn poll(&mut self) -> Option<T> {
        if self.is_empty() {
            None
        } else {
            Some(self.remove_at(0))
        }
    }

    /// Removes one occurrence of `value`, returning whether anything was removed. `O(log n)`.
    ///
    /// When the value occurs multiple times, the occurrence at the highest store index is the one
    /// removed. That choice is arbitrary but deterministic; callers shouldn't attach meaning to
    /// which duplicate goes first.
    ///
    /// # Examples
    /// ```
    /// # use data_structures::collections::heap::IndexedMinHeap;
    /// let mut heap: IndexedMinHeap<_> = [1, 2, 3].into_iter().collect();
    /// assert!(heap.remove(&2));
    /// assert!(!heap.remove(&2));
    /// assert_eq!(heap.len(), 2);
    /// ```
    pub fn remove(&mut self, value: &T) -> bool {
        match self.map_get(value) {
            Some(index) => {
                self.remove_at(index);
                true
            },
            None => false,
        }
    }

    /// Removes and returns the element at store index `i`, restoring heap order afterwards.
    ///
    /// The element is swapped with the last slot, the last slot is popped, and the replacement
    /// left at `i` is sunk; if sinking didn't move it, it is swum instead. Only one of the two can
    /// have an effect, since the replacement can violate heap order with an ancestor or a
    /// descendant but never both.
    ///
    /// `i` must be a valid index of a non-empty store.
    fn remove_at(&mut self, i: usize) -> T {
        debug_assert!(i < self.store.len());

        let last = self.store.len() - 1;
        self.swap(i, last);

        let removed = self.store.pop().expect("store is non-empty");
        self.map_remove(&removed, last);

        // Removed the last slot itself; nothing to rebalance.
        if i == last {
            return removed;
        }

        if !self.sink(i) {
            self.swim(i);
        }

        removed
    }

    /// Tests whether the value at store index `i` compares `<=` to the value at `j`.
    ///
    /// Assumes i and j are valid indices.
    fn less(&self, i: usize, j: usize) -> bool {
        self.store[i] <= self.store[j]
    }

    /// Performs a bottom up node swim from index `k`, `O(log n)`.
    fn swim(&mut self, mut k: usize) {
        // Keep swimming while we haven't reached the root and we compare <= to our parent.
        while k > 0 {
            let parent = (k - 1) / 2;
            if !self.less(k, parent) {
                break;
            }
            self.swap(parent, k);
            k = parent;
        }
    }

    /// Performs a top down node sink from index `k`, returning whether any swap occurred.
    /// `O(log n)`.
    fn sink(&mut self, mut k: usize) -> bool {
        let mut moved = false;

        loop {
            let left = 2 * k + 1;
            let right = 2 * k + 2;

            // Stop once we're outside the bounds of the tree.
            if left >= self.store.len() {
                break;
            }

            // Follow the smaller of the two children.
            let smallest = if right < self.store.len() && self.less(right, left) {
                right
            } else {
                left
            };

            // Stop early once heap order already holds.
            if self.less(k, smallest) {
                break;
            }

            self.swap(smallest, k);
            k = smallest;
            moved = true;
        }

        moved
    }

    /// Exchanges the store slots at `i` and `j`, keeping the position map in lock-step.
    ///
    /// Every exchange in the heap has to go through here; writing the store directly would leave
    /// stale indices behind in the map.
    fn swap(&mut self, i: usize, j: usize) {
        // Both stale positions are removed before either new one is inserted: two equal values
        // share a single position set, and interleaving would lose an index.
        self.positions_mut(i).remove(&i);
        self.positions_mut(j).remove(&j);
        self.positions_mut(i).insert(j);
        self.positions_mut(j).insert(i);

        self.store.swap(i, j);
    }

    /// Records that `value` occupies store index `index`.
    fn map_add(&mut self, value: T, index: usize) {
        self.map.entry(value).or_default().insert(index);
    }

    /// Forgets that `value` occupied store index `index`, dropping the value's entry entirely once
    /// its position set empties.
    fn map_remove(&mut self, value: &T, index: usize) {
        let set = self.positions_of(value);
        set.remove(&index);
        if set.is_empty() {
            self.map.remove(value);
        }
    }

    /// Returns one store index holding `value`, if it is present.
    ///
    /// When a value occurs multiple times the highest index is returned, an arbitrary but fixed
    /// choice.
    fn map_get(&self, value: &T) -> Option<usize> {
        self.map.get(value)?.last().copied()
    }

    /// Returns the position set of the value at store index `index`.
    fn positions_mut(&mut self, index: usize) -> &mut BTreeSet<usize> {
        self.map
            .get_mut(&self.store[index])
            .expect("position map out of sync with the heap store")
    }

    /// Returns the position set of `value`, which must be present.
    fn positions_of(&mut self, value: &T) -> &mut BTreeSet<usize> {
        self.map
            .get_mut(value)
            .expect("position map out of sync with the heap store")
    }

    /// Recursively checks that every node at or below index `k` compares `<=` to its children.
    ///
    /// This is a diagnostic for the test suite, which uses it to assert the structural invariant
    /// after arbitrary mutation sequences; normal operation never needs it.
    pub(crate) fn is_min_heap(&self, k: usize) -> bool {
        // Past the bounds of the heap every (absent) subtree is trivially valid.
        if k >= self.store.len() {
            return true;
        }

        let left = 2 * k + 1;
        let right = 2 * k + 2;

        if left < self.store.len() && !self.less(k, left) {
            return false;
        }
        if right < self.store.len() && !self.less(k, right) {
            return false;
        }

        self.is_min_heap(left) && self.is_min_heap(right)
    }
}

impl<T> Default for IndexedMinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord + Hash + Clone> FromIterator<T> for IndexedMinHeap<T> {
    /// Builds a heap by repeated insertion, `O(n log n)`. See [`IndexedMinHeap::heapify`] for the
    /// `O(n)` bulk construction.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = IndexedMinHeap::new();
        heap.extend(iter);
        heap
    }
}

impl<T: Ord + Hash + Clone> Extend<T> for IndexedMinHeap<T> {
    fn extend<A: IntoIterator<Item = T>>(&mut self, iter: A) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<T: Clone + Hash + Eq> Clone for IndexedMinHeap<T> {
    fn clone(&self) -> Self {
        IndexedMinHeap {
            store: self.store.clone(),
            map: self.map.clone(),
        }
    }
}

impl<T: Debug> Debug for IndexedMinHeap<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexedMinHeap")
            .field("store", &&*self.store)
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Debug> Display for IndexedMinHeap<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        // The store in heap layout order, like the Display of the backing DynamicArray.
        f.debug_list().entries(self.store.iter()).finish()
    }
}
