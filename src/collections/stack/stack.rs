use std::fmt::{self, Debug, Display, Formatter};

use crate::collections::linked::DoublyLinkedList;
use crate::collections::linked::list::{IntoIter, Iter};

/// A last-in-first-out stack, backed by a [`DoublyLinkedList`].
///
/// The back of the list acts as the top of the stack, so [`push`](Stack::push),
/// [`pop`](Stack::pop) and [`peek`](Stack::peek) are all `O(1)`. Iteration runs from the bottom of
/// the stack to the top, matching insertion order.
///
/// # Examples
/// ```
/// # use data_structures::collections::stack::Stack;
/// let mut stack = Stack::new();
/// stack.push(1);
/// stack.push(2);
/// assert_eq!(stack.peek(), Some(&2));
/// assert_eq!(stack.pop(), Some(2));
/// assert_eq!(stack.pop(), Some(1));
/// assert_eq!(stack.pop(), None);
/// ```
pub struct Stack<T> {
    list: DoublyLinkedList<T>,
}

impl<T> Stack<T> {
    /// Creates a new Stack with no elements.
    pub const fn new() -> Stack<T> {
        Stack {
            list: DoublyLinkedList::new(),
        }
    }

    /// Returns the number of elements in the Stack.
    pub const fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns true if the Stack contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Pushes the provided element onto the top of the Stack.
    pub fn push(&mut self, value: T) {
        self.list.push_back(value);
    }

    /// Removes and returns the element at the top of the Stack, if the Stack isn't empty.
    pub fn pop(&mut self) -> Option<T> {
        self.list.pop_back()
    }

    /// Returns a reference to the element at the top of the Stack without removing it, if the
    /// Stack isn't empty.
    pub fn peek(&self) -> Option<&T> {
        self.list.back()
    }

    /// Removes all elements from the Stack.
    pub fn clear(&mut self) {
        self.list.clear();
    }

    /// Returns a borrowing iterator over the Stack, from the bottom to the top.
    pub fn iter(&self) -> Iter<'_, T> {
        self.list.iter()
    }
}

impl<T> IntoIterator for Stack<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.list.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Stack {
            list: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<A: IntoIterator<Item = T>>(&mut self, iter: A) {
        self.list.extend(iter);
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> PartialEq for Stack<T> {
    fn eq(&self, other: &Self) -> bool {
        self.list == other.list
    }
}

impl<T: Eq> Eq for Stack<T> {}

impl<T: Clone> Clone for Stack<T> {
    fn clone(&self) -> Self {
        Stack {
            list: self.list.clone(),
        }
    }
}

impl<T: Debug> Debug for Stack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Debug> Display for Stack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.list, f)
    }
}
