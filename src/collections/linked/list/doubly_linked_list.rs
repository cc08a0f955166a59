use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};
use std::ptr::NonNull;

use super::{IntoIter, Iter, IterMut};
#[doc(inline)]
pub use crate::util::error::IndexOutOfBounds;
use crate::util::result::ResultExtension;

pub(crate) type Link<T> = Option<NonNull<Node<T>>>;

pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) prev: Link<T>,
    pub(crate) next: Link<T>,
}

/// A list with links in both directions, providing `O(1)` operations at both ends.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the DoublyLinkedList.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front/back` | `O(1)` |
/// | `push_front/back` | `O(1)` |
/// | `pop_front/back` | `O(1)` |
/// | `get` | `O(min(i, n-i))` |
/// | `remove` | `O(min(i, n-i))` |
/// | `remove_value` | `O(n)` |
/// | `contains` | `O(n)` |
///
/// As a general note, modern computer architecture isn't kind to linked lists because all `O(i)` or
/// `O(n)` operations consist primarily of cache misses. For this reason,
/// [`DynamicArray`](crate::collections::contiguous::DynamicArray) should be preferred for most
/// applications unless the `O(1)` end operations are being heavily utilized, as the [`Queue`] and
/// [`Stack`] adapters do.
///
/// [`Queue`]: crate::collections::queue::Queue
/// [`Stack`]: crate::collections::stack::Stack
pub struct DoublyLinkedList<T> {
    pub(crate) head: Link<T>,
    pub(crate) tail: Link<T>,
    pub(crate) len: usize,
    pub(crate) _phantom: PhantomData<Box<Node<T>>>,
}

impl<T> DoublyLinkedList<T> {
    /// Creates a new DoublyLinkedList with no elements.
    pub const fn new() -> DoublyLinkedList<T> {
        DoublyLinkedList {
            head: None,
            tail: None,
            len: 0,
            _phantom: PhantomData,
        }
    }

    /// Returns the length of the DoublyLinkedList.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the DoublyLinkedList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a reference to the first element in the list, if it exists.
    ///
    /// # Examples
    /// ```
    /// # use data_structures::collections::linked::DoublyLinkedList;
    /// let list: DoublyLinkedList<_> = (1..=3).collect();
    /// assert_eq!(list.front(), Some(&1));
    /// assert_eq!(list.back(), Some(&3));
    /// ```
    pub fn front(&self) -> Option<&T> {
        // SAFETY: head is a node owned by this list, valid for as long as the list is borrowed.
        self.head.map(|node| unsafe { &(*node.as_ptr()).value })
    }

    /// Returns a mutable reference to the first element in the list, if it exists.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        // SAFETY: head is a node owned by this list, borrowed uniquely through self.
        self.head.map(|node| unsafe { &mut (*node.as_ptr()).value })
    }

    /// Returns a reference to the last element in the list, if it exists.
    pub fn back(&self) -> Option<&T> {
        // SAFETY: tail is a node owned by this list, valid for as long as the list is borrowed.
        self.tail.map(|node| unsafe { &(*node.as_ptr()).value })
    }

    /// Returns a mutable reference to the last element in the list, if it exists.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        // SAFETY: tail is a node owned by this list, borrowed uniquely through self.
        self.tail.map(|node| unsafe { &mut (*node.as_ptr()).value })
    }

    /// Adds the provided element to the front of the DoublyLinkedList.
    pub fn push_front(&mut self, value: T) {
        let node = NonNull::from(Box::leak(Box::new(Node {
            value,
            prev: None,
            next: self.head,
        })));

        match self.head {
            // SAFETY: The old head is a valid node of this list.
            Some(head) => unsafe { (*head.as_ptr()).prev = Some(node) },
            None => self.tail = Some(node),
        }
        self.head = Some(node);
        self.len += 1;
    }

    /// Adds the provided element to the back of the DoublyLinkedList.
    pub fn push_back(&mut self, value: T) {
        let node = NonNull::from(Box::leak(Box::new(Node {
            value,
            prev: self.tail,
            next: None,
        })));

        match self.tail {
            // SAFETY: The old tail is a valid node of this list.
            Some(tail) => unsafe { (*tail.as_ptr()).next = Some(node) },
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.len += 1;
    }

    /// Removes the first element from the list and returns it, if the list isn't empty.
    ///
    /// # Examples
    /// ```
    /// # use data_structures::collections::linked::DoublyLinkedList;
    /// let mut list: DoublyLinkedList<_> = (1..=2).collect();
    /// assert_eq!(list.pop_front(), Some(1));
    /// assert_eq!(list.pop_front(), Some(2));
    /// assert_eq!(list.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        let head = self.head?;
        // SAFETY: head is linked into this list and is unlinked exactly once here.
        Some(unsafe { self.unlink(head) })
    }

    /// Removes the last element from the list and returns it, if the list isn't empty.
    pub fn pop_back(&mut self) -> Option<T> {
        let tail = self.tail?;
        // SAFETY: tail is linked into this list and is unlinked exactly once here.
        Some(unsafe { self.unlink(tail) })
    }

    /// Returns a reference to the element at the provided `index`, panicking on a failure.
    ///
    /// The same functionality can be achieved using the [`Index`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the DoublyLinkedList.
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    /// Returns a reference to the element at the provided `index`, returning an [`Err`] on a
    /// failure rather than panicking.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.check_index(index)?;
        // SAFETY: seek returns a node linked into this list.
        Ok(unsafe { &(*self.seek(index).as_ptr()).value })
    }

    /// Returns a mutable reference to the element at the provided `index`, panicking on a failure.
    ///
    /// The same functionality can be achieved using the [`IndexMut`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the DoublyLinkedList.
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        self.try_get_mut(index).throw()
    }

    /// Returns a mutable reference to the element at the provided `index`, returning an [`Err`] on
    /// a failure rather than panicking.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        self.check_index(index)?;
        // SAFETY: seek returns a node linked into this list, borrowed uniquely through self.
        Ok(unsafe { &mut (*self.seek(index).as_ptr()).value })
    }

    /// Removes the element at the provided `index`, panicking on a failure.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the DoublyLinkedList.
    pub fn remove(&mut self, index: usize) -> T {
        self.try_remove(index).throw()
    }

    /// Removes the element at the provided `index`, returning an [`Err`] on a failure rather than
    /// panicking.
    pub fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        self.check_index(index)?;
        let node = self.seek(index);
        // SAFETY: seek returned a node linked into this list.
        Ok(unsafe { self.unlink(node) })
    }

    /// Removes all elements from the list.
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    /// Returns a borrowing iterator over the list, from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Returns a mutably borrowing iterator over the list, from front to back.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }
}

impl<T: Eq> DoublyLinkedList<T> {
    /// Removes the first occurrence of `value`, returning whether anything was removed.
    ///
    /// # Examples
    /// ```
    /// # use data_structures::collections::linked::DoublyLinkedList;
    /// let mut list: DoublyLinkedList<_> = [1, 2, 3, 2].into_iter().collect();
    /// assert!(list.remove_value(&2));
    /// assert_eq!(list, [1, 3, 2].into_iter().collect());
    /// assert!(!list.remove_value(&4));
    /// ```
    pub fn remove_value(&mut self, value: &T) -> bool {
        let mut curr = self.head;
        while let Some(node) = curr {
            // SAFETY: node is linked into this list; it is only unlinked once, after which the
            // traversal stops.
            unsafe {
                if (*node.as_ptr()).value == *value {
                    self.unlink(node);
                    return true;
                }
                curr = (*node.as_ptr()).next;
            }
        }
        false
    }

    /// Returns the index of the first occurrence of `item`, if it is present.
    pub fn index_of(&self, item: &T) -> Option<usize> {
        for (index, element) in self.iter().enumerate() {
            if element == item { return Some(index); }
        }
        None
    }

    /// Returns true if `item` occurs at least once in the list.
    pub fn contains(&self, item: &T) -> bool {
        self.index_of(item).is_some()
    }
}

impl<T> DoublyLinkedList<T> {
    /// Returns the node at `index`, searching from whichever end is closer.
    ///
    /// `index` must already be checked to be within bounds.
    pub(crate) fn seek(&self, index: usize) -> NonNull<Node<T>> {
        debug_assert!(index < self.len);

        if index < self.len / 2 {
            let mut node = self.head.expect("head link out of sync with len");
            for _ in 0..index {
                // SAFETY: node is linked into this list, and the length check guarantees a
                // successor exists.
                node = unsafe { (*node.as_ptr()).next }.expect("next link out of sync with len");
            }
            node
        } else {
            let mut node = self.tail.expect("tail link out of sync with len");
            for _ in 0..(self.len - 1 - index) {
                // SAFETY: node is linked into this list, and the length check guarantees a
                // predecessor exists.
                node = unsafe { (*node.as_ptr()).prev }.expect("prev link out of sync with len");
            }
            node
        }
    }

    /// Detaches `node` from the list, reclaims its allocation and returns its value.
    ///
    /// # Safety
    /// `node` must currently be linked into this list.
    pub(crate) unsafe fn unlink(&mut self, node: NonNull<Node<T>>) -> T {
        // SAFETY: The caller guarantees that node belongs to this list, so it was allocated by a
        // Box in push_front/push_back and hasn't been reclaimed yet.
        let node = unsafe { Box::from_raw(node.as_ptr()) };

        match node.prev {
            // SAFETY: prev is a valid node of this list.
            Some(prev) => unsafe { (*prev.as_ptr()).next = node.next },
            None => self.head = node.next,
        }
        match node.next {
            // SAFETY: next is a valid node of this list.
            Some(next) => unsafe { (*next.as_ptr()).prev = node.prev },
            None => self.tail = node.prev,
        }

        self.len -= 1;
        node.value
    }

    /// Checks that the provided index is within the bounds of self.
    pub(crate) const fn check_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index < self.len {
            Ok(())
        } else {
            Err(IndexOutOfBounds {
                index,
                len: self.len,
            })
        }
    }
}

impl<T> Index<usize> for DoublyLinkedList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index)
    }
}

impl<T> IndexMut<usize> for DoublyLinkedList<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index)
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = DoublyLinkedList::new();
        for item in iter {
            list.push_back(item);
        }
        list
    }
}

impl<T> Extend<T> for DoublyLinkedList<T> {
    fn extend<A: IntoIterator<Item = T>>(&mut self, iter: A) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for DoublyLinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> IntoIterator for DoublyLinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

// SAFETY: The list owns its nodes through unique pointers, so it is safe to Send when T is.
unsafe impl<T: Send> Send for DoublyLinkedList<T> {}
// SAFETY: The safe API obeys all rules of the borrow checker and no interior mutability occurs.
unsafe impl<T: Sync> Sync for DoublyLinkedList<T> {}

impl<T: PartialEq> PartialEq for DoublyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DoublyLinkedList<T> {}

impl<T: Hash> Hash for DoublyLinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for value in self.iter() {
            value.hash(state);
        }
        // Terminate variable length hashing sequence.
        0xFF.hash(state);
    }
}

impl<T: Clone> Clone for DoublyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: Debug> Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Debug> Display for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for value in self.iter() {
            if !first {
                write!(f, " -> ")?;
            }
            write!(f, "({value:?})")?;
            first = false;
        }
        Ok(())
    }
}
