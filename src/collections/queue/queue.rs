use std::fmt::{self, Debug, Display, Formatter};

use crate::collections::linked::DoublyLinkedList;
use crate::collections::linked::list::{IntoIter, Iter};

/// A first-in-first-out queue, backed by a [`DoublyLinkedList`] so that both ends operate in
/// `O(1)`.
///
/// Elements are added at the back with [`offer`](Queue::offer) and taken from the front with
/// [`poll`](Queue::poll), following the conventional queue vocabulary.
///
/// # Examples
/// ```
/// # use data_structures::collections::queue::Queue;
/// let mut queue = Queue::new();
/// queue.offer("first");
/// queue.offer("second");
/// assert_eq!(queue.peek(), Some(&"first"));
/// assert_eq!(queue.poll(), Some("first"));
/// assert_eq!(queue.poll(), Some("second"));
/// assert_eq!(queue.poll(), None);
/// ```
pub struct Queue<T> {
    list: DoublyLinkedList<T>,
}

impl<T> Queue<T> {
    /// Creates a new Queue with no elements.
    pub const fn new() -> Queue<T> {
        Queue {
            list: DoublyLinkedList::new(),
        }
    }

    /// Returns the number of elements in the Queue.
    pub const fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns true if the Queue contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Adds the provided element to the back of the Queue.
    pub fn offer(&mut self, value: T) {
        self.list.push_back(value);
    }

    /// Removes and returns the element at the front of the Queue, if the Queue isn't empty.
    pub fn poll(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    /// Returns a reference to the element at the front of the Queue without removing it, if the
    /// Queue isn't empty.
    pub fn peek(&self) -> Option<&T> {
        self.list.front()
    }

    /// Removes all elements from the Queue.
    pub fn clear(&mut self) {
        self.list.clear();
    }

    /// Returns a borrowing iterator over the Queue, from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        self.list.iter()
    }
}

impl<T> IntoIterator for Queue<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.list.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Queue {
            list: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<A: IntoIterator<Item = T>>(&mut self, iter: A) {
        self.list.extend(iter);
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> PartialEq for Queue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.list == other.list
    }
}

impl<T: Eq> Eq for Queue<T> {}

impl<T: Clone> Clone for Queue<T> {
    fn clone(&self) -> Self {
        Queue {
            list: self.list.clone(),
        }
    }
}

impl<T: Debug> Debug for Queue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Debug> Display for Queue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.list, f)
    }
}
