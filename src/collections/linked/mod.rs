//! Linked collection types. Revolves around [`DoublyLinkedList`], which also backs the
//! [`Queue`](crate::collections::queue::Queue) and [`Stack`](crate::collections::stack::Stack)
//! adapters when those features are enabled.

pub mod list;

#[doc(inline)]
pub use list::DoublyLinkedList;
