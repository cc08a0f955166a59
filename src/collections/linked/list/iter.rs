use std::iter::FusedIterator;
use std::marker::PhantomData;

use super::{DoublyLinkedList, Link, Node};

/// A borrowing iterator over a [`DoublyLinkedList`], from front to back.
pub struct Iter<'a, T> {
    head: Link<T>,
    tail: Link<T>,
    len: usize,
    _phantom: PhantomData<&'a Node<T>>,
}

/// A mutably borrowing iterator over a [`DoublyLinkedList`], from front to back.
pub struct IterMut<'a, T> {
    head: Link<T>,
    tail: Link<T>,
    len: usize,
    _phantom: PhantomData<&'a mut Node<T>>,
}

/// An owning iterator over a [`DoublyLinkedList`], from front to back.
pub struct IntoIter<T> {
    pub(crate) list: DoublyLinkedList<T>,
}

impl<'a, T> IntoIterator for &'a DoublyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            head: self.head,
            tail: self.tail,
            len: self.len,
            _phantom: PhantomData,
        }
    }
}

impl<'a, T> IntoIterator for &'a mut DoublyLinkedList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        IterMut {
            head: self.head,
            tail: self.tail,
            len: self.len,
            _phantom: PhantomData,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.len == 0 {
            return None;
        }
        let node = self.head.expect("iterator head out of sync with its length");
        // SAFETY: node belongs to a list which outlives 'a and cannot be mutated while this
        // iterator borrows it.
        let node = unsafe { &*node.as_ptr() };
        self.head = node.next;
        self.len -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.len == 0 {
            return None;
        }
        let node = self.tail.expect("iterator tail out of sync with its length");
        // SAFETY: node belongs to a list which outlives 'a and cannot be mutated while this
        // iterator borrows it.
        let node = unsafe { &*node.as_ptr() };
        self.tail = node.prev;
        self.len -= 1;
        Some(&node.value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            head: self.head,
            tail: self.tail,
            len: self.len,
            _phantom: PhantomData,
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        if self.len == 0 {
            return None;
        }
        let node = self.head.expect("iterator head out of sync with its length");
        // SAFETY: node belongs to a list which outlives 'a and is borrowed uniquely by this
        // iterator, which visits each node at most once.
        let node = unsafe { &mut *node.as_ptr() };
        self.head = node.next;
        self.len -= 1;
        Some(&mut node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    fn next_back(&mut self) -> Option<&'a mut T> {
        if self.len == 0 {
            return None;
        }
        let node = self.tail.expect("iterator tail out of sync with its length");
        // SAFETY: node belongs to a list which outlives 'a and is borrowed uniquely by this
        // iterator, which visits each node at most once.
        let node = unsafe { &mut *node.as_ptr() };
        self.tail = node.prev;
        self.len -= 1;
        Some(&mut node.value)
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len, Some(self.list.len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.list.pop_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

// SAFETY: Iter behaves like a shared borrow of the list, so it can move or be shared across
// threads exactly when &DoublyLinkedList<T> can.
unsafe impl<T: Sync> Send for Iter<'_, T> {}
// SAFETY: As above; sharing an Iter only ever hands out shared references.
unsafe impl<T: Sync> Sync for Iter<'_, T> {}

// SAFETY: IterMut behaves like a unique borrow of the list, so it can move across threads exactly
// when &mut DoublyLinkedList<T> can.
unsafe impl<T: Send> Send for IterMut<'_, T> {}
// SAFETY: Sharing an IterMut hands out no references at all through &self.
unsafe impl<T: Sync> Sync for IterMut<'_, T> {}
