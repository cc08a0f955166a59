//! A module containing [`Stack`], a last-in-first-out adapter over
//! [`DoublyLinkedList`](crate::collections::linked::DoublyLinkedList).

mod stack;
mod tests;

pub use stack::*;
