//! A module containing [`Queue`], a first-in-first-out adapter over
//! [`DoublyLinkedList`](crate::collections::linked::DoublyLinkedList).

mod queue;
mod tests;

pub use queue::*;
