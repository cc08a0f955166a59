//! A small collection of generic container types, written from scratch.
//!
//! # Purpose
//! This crate implements the classic linear containers ([`DynamicArray`], [`DoublyLinkedList`],
//! [`Queue`], [`Stack`]) alongside the one structure in the set with real algorithmic content:
//! [`IndexedMinHeap`], a binary min-heap augmented with a value-to-positions index that buys
//! `O(log n)` removal of arbitrary elements and `O(1)` containment checks.
//!
//! # Method
//! The linear containers are built directly on raw allocations and pointers rather than on [`Vec`]
//! or [`std::collections::LinkedList`] - the point of writing them is to own the memory management.
//! I've tried to keep the unsafe code narrow and documented; every unsafe block carries a SAFETY
//! comment and the test suites include drop-counting and zero-sized-type coverage to back them up.
//!
//! # Error Handling
//! For a container library it is more ergonomic for indexed operations to panic on a caller error
//! than to force every call site through a [`Result`]. Positional methods therefore come in pairs:
//! a `try_` variant returning a strongly typed error, and a plain variant that panics with that
//! error's message. Operations that can legitimately find nothing (`pop`, `peek`, `poll`) return
//! [`Option`] instead - an empty container isn't a programming error.
//!
//! [`DynamicArray`]: collections::contiguous::DynamicArray
//! [`DoublyLinkedList`]: collections::linked::DoublyLinkedList
//! [`Queue`]: collections::queue::Queue
//! [`Stack`]: collections::stack::Stack
//! [`IndexedMinHeap`]: collections::heap::IndexedMinHeap

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;

pub(crate) mod util;
