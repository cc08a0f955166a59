//! Various general-purpose collection types.
//!
//! # Purpose
//! Each submodule holds one container: [`contiguous`] for the growable array, [`linked`] for the
//! doubly linked list, [`queue`] and [`stack`] for the list-backed adapters and [`heap`] for the
//! indexed min-heap priority queue.
//!
//! # Method
//! Applicable types here implement [`Deref<Target = [T]>`](std::ops::Deref) (and DerefMut), which
//! saves writing some of the more repetitive functionality.

#[cfg(feature = "contiguous")]
pub mod contiguous;
#[cfg(feature = "heap")]
pub mod heap;
#[cfg(feature = "linked")]
pub mod linked;
#[cfg(feature = "queue")]
pub mod queue;
#[cfg(feature = "stack")]
pub mod stack;
