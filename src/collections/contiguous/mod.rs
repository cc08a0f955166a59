//! Contiguous collection types. Currently this means [`DynamicArray`] and its owned iterator.

pub mod dynamic_array;

#[doc(inline)]
pub use dynamic_array::DynamicArray;
