use std::alloc::{self, Layout};
use std::borrow::{Borrow, BorrowMut};
use std::cmp;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::mem::{self, MaybeUninit};
use std::ops::{Deref, DerefMut};
use std::ptr::{self, NonNull};
use std::slice;

#[doc(inline)]
pub use crate::util::error::{CapacityOverflow, IndexOutOfBounds};
use crate::util::result::ResultExtension;

const MIN_CAP: usize = 2;

const GROWTH_FACTOR: usize = 2;

/// A variable size contiguous collection, backed by a single owned allocation.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the DynamicArray.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push` | `O(1)`*, `O(n)` |
/// | `pop` | `O(1)` |
/// | `replace` | `O(1)` |
/// | `remove_at` | `O(n)` |
/// | `remove` | `O(n)` |
/// | `index_of` | `O(n)` |
/// | `reserve` | `O(n)`**, `O(1)` |
/// | `shrink_to_fit` | `O(n)` |
/// | `clear` | `O(n)` |
///
/// \* If the DynamicArray doesn't have enough capacity for the new element, `push` will take
/// `O(n)`.
///
/// \** If the DynamicArray already has enough capacity for the additional items, `reserve` is
/// `O(1)`.
///
/// Note that `remove_at` reallocates so that the capacity fits the shortened contents exactly,
/// making positional removal `O(n)` even for the last index.
pub struct DynamicArray<T> {
    pub(crate) ptr: NonNull<MaybeUninit<T>>,
    pub(crate) cap: usize,
    pub(crate) len: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> DynamicArray<T> {
    /// Creates a new DynamicArray with length and capacity 0. Memory will be allocated when the
    /// capacity changes.
    ///
    /// # Examples
    /// ```
    /// # use data_structures::collections::contiguous::DynamicArray;
    /// let arr: DynamicArray<u8> = DynamicArray::new();
    /// assert_eq!(arr.len(), 0);
    /// assert_eq!(arr.cap(), 0);
    /// ```
    pub const fn new() -> DynamicArray<T> {
        DynamicArray {
            ptr: NonNull::dangling(),
            cap: 0,
            len: 0,
            _phantom: PhantomData,
        }
    }

    /// Creates a new DynamicArray with capacity exactly equal to the provided value, allowing
    /// values to be added without reallocation.
    ///
    /// # Panics
    /// Panics if the memory layout size would exceed [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use data_structures::collections::contiguous::DynamicArray;
    /// let mut arr: DynamicArray<u8> = DynamicArray::with_cap(5);
    /// assert_eq!(arr.cap(), 5);
    /// arr.extend([1_u8, 2, 3, 4, 5]);
    /// assert_eq!(arr.cap(), 5);
    /// ```
    pub fn with_cap(cap: usize) -> DynamicArray<T> {
        let layout = Self::make_layout(cap);

        DynamicArray {
            ptr: Self::make_ptr(layout),
            cap,
            len: 0,
            _phantom: PhantomData,
        }
    }

    /// Returns the length of the DynamicArray.
    ///
    /// # Examples
    /// ```
    /// # use data_structures::collections::contiguous::DynamicArray;
    /// let arr: DynamicArray<u8> = (1_u8..=3).collect();
    /// assert_eq!(arr.len(), 3);
    /// ```
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the DynamicArray contains no elements.
    ///
    /// # Examples
    /// ```
    /// # use data_structures::collections::contiguous::DynamicArray;
    /// let mut arr: DynamicArray<u8> = DynamicArray::new();
    /// assert!(arr.is_empty());
    /// arr.push(1);
    /// assert!(!arr.is_empty())
    /// ```
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current capacity of the DynamicArray. Unlike [`Vec`], the capacity is guaranteed
    /// to be exactly the value provided to any of the capacity manipulation functions.
    pub const fn cap(&self) -> usize {
        self.cap
    }

    /// Pushes the provided value onto the end of the DynamicArray, doubling the capacity if
    /// required.
    ///
    /// # Panics
    /// Panics if the memory layout of the DynamicArray would have a size that exceeds
    /// [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use data_structures::collections::contiguous::DynamicArray;
    /// let mut arr = DynamicArray::<u8>::new();
    /// for i in 0..=5 {
    ///     arr.push(i);
    /// }
    /// assert_eq!(&*arr, &[0, 1, 2, 3, 4, 5]);
    /// ```
    pub fn push(&mut self, value: T) {
        if self.len == self.cap {
            self.grow();
        }

        // SAFETY: The capacity has just been adjusted to support the addition of the new item, so
        // the write is in bounds of the allocation.
        unsafe { self.ptr.add(self.len).write(MaybeUninit::new(value)); }
        self.len += 1;
    }

    /// Pops the last value off the end of the DynamicArray, returning an owned value if the
    /// DynamicArray has length greater than 0. The capacity is left unchanged.
    ///
    /// # Examples
    /// ```
    /// # use data_structures::collections::contiguous::DynamicArray;
    /// let mut arr: DynamicArray<_> = (0..5).collect();
    /// for i in (0..5).rev() {
    ///     assert_eq!(arr.pop(), Some(i));
    /// }
    /// assert_eq!(arr.pop(), None);
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            // Decrement len before reading.
            self.len -= 1;

            // SAFETY: len has just been decremented and is within the capacity of the DynamicArray,
            // and all values < len are initialized. The heap copy is forgotten by virtue of len
            // excluding it, which is as close as we can get to moving the value off of the heap.
            let value = unsafe {
                self.ptr.add(self.len).read().assume_init()
            };
            Some(value)
        }
    }

    /// Replaces the element at the provided index with `new_value`, returning the old value.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    pub fn replace(&mut self, index: usize, new_value: T) -> T {
        self.try_replace(index, new_value).throw()
    }

    /// Replaces the element at the provided index with `new_value`, returning an [`Err`] on an out
    /// of bounds index rather than panicking.
    pub fn try_replace(&mut self, index: usize, new_value: T) -> Result<T, IndexOutOfBounds> {
        self.check_index(index)?;

        // SAFETY: index < len and all values < len are initialized.
        Ok(unsafe {
            mem::replace(
                self.ptr.add(index).as_mut(),
                MaybeUninit::new(new_value),
            ).assume_init()
        })
    }

    /// Removes the element at the provided index, moving all following values to fill in the gap
    /// and shrinking the capacity to fit the shortened contents.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    ///
    /// # Examples
    /// ```
    /// # use data_structures::collections::contiguous::DynamicArray;
    /// let mut arr: DynamicArray<_> = "Hello world!".chars().collect();
    /// assert_eq!(arr.remove_at(1), 'e');
    /// assert_eq!(arr.remove_at(4), ' ');
    /// assert_eq!(arr, "Hlloworld!".chars().collect());
    /// assert_eq!(arr.cap(), arr.len());
    /// ```
    pub fn remove_at(&mut self, index: usize) -> T {
        self.try_remove_at(index).throw()
    }

    /// Removes the element at the provided index, returning an [`Err`] on an out of bounds index
    /// rather than panicking.
    pub fn try_remove_at(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        self.check_index(index)?;

        // SAFETY: index < len, so the value is initialized. The copy left behind at index is
        // overwritten (or truncated, for the last index) immediately below.
        let value = unsafe { self.ptr.add(index).read().assume_init() };

        // SAFETY: Both ranges are in bounds of the allocation; copy handles the overlap.
        unsafe {
            ptr::copy(
                self.ptr.add(index + 1).as_ptr(),
                self.ptr.add(index).as_ptr(),
                self.len - index - 1,
            );
        }
        self.len -= 1;

        // Positional removal reallocates so that the capacity fits exactly.
        self.realloc_with_cap(self.len);

        Ok(value)
    }

    /// Removes the first occurrence of `value`, returning whether anything was removed.
    ///
    /// # Examples
    /// ```
    /// # use data_structures::collections::contiguous::DynamicArray;
    /// let mut arr: DynamicArray<_> = ["a", "b", "c"].into_iter().collect();
    /// assert!(arr.remove(&"b"));
    /// assert!(!arr.remove(&"b"));
    /// assert_eq!(&*arr, &["a", "c"]);
    /// ```
    pub fn remove(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        match self.index_of(value) {
            Some(index) => {
                self.remove_at(index);
                true
            },
            None => false,
        }
    }

    /// Returns the index of the first occurrence of `value`, if it is present.
    pub fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|item| item == value)
    }

    /// Removes all elements, dropping them in place. The capacity is left unchanged.
    ///
    /// # Examples
    /// ```
    /// # use data_structures::collections::contiguous::DynamicArray;
    /// let mut arr: DynamicArray<_> = (0..5).collect();
    /// let cap = arr.cap();
    /// arr.clear();
    /// assert!(arr.is_empty());
    /// assert_eq!(arr.cap(), cap);
    /// ```
    pub fn clear(&mut self) {
        for i in 0..self.len {
            // SAFETY: All values less than len are initialized and safe to drop.
            unsafe { self.ptr.add(i).as_mut().assume_init_drop(); }
        }
        self.len = 0;
    }

    /// Ensures that the DynamicArray has capacity to hold an additional `extra` elements. After
    /// invoking this method, the capacity will be >= len + extra.
    ///
    /// # Panics
    /// Panics if the memory layout of the DynamicArray would have a size that exceeds
    /// [`isize::MAX`].
    pub fn reserve(&mut self, extra: usize) {
        let new_cap = self.len.checked_add(extra).ok_or(CapacityOverflow).throw();

        if new_cap <= self.cap { return; }

        self.realloc_with_cap(new_cap);
    }

    /// Shrinks the DynamicArray so that its capacity is equal to its length.
    pub fn shrink_to_fit(&mut self) {
        self.realloc_with_cap(self.len);
    }

    /// Decomposes the DynamicArray into its raw components without dropping anything. The parts
    /// follow the invariants of a valid DynamicArray: `len` initialized values behind an allocation
    /// of `cap` slots.
    pub(crate) fn into_parts(self) -> (NonNull<MaybeUninit<T>>, usize, usize) {
        let ret = (self.ptr, self.len, self.cap);
        mem::forget(self);
        ret
    }

    /// Reallocates the backing memory with the provided capacity. All initialized values must fit
    /// within the new capacity.
    ///
    /// # Panics
    /// Panics if the memory layout of the DynamicArray would have a size that exceeds
    /// [`isize::MAX`].
    pub(crate) fn realloc_with_cap(&mut self, new_cap: usize) {
        debug_assert!(self.len <= new_cap);

        let old_layout = Self::make_layout(self.cap);
        let new_layout = Self::make_layout(new_cap);

        if old_layout.size() == new_layout.size() {
            // Covers zero-sized T, where the allocation never changes.
            self.cap = new_cap;
            return;
        }

        self.ptr = if old_layout.size() == 0 {
            Self::make_ptr(new_layout)
        } else if new_layout.size() == 0 {
            // SAFETY: The pointer was allocated with old_layout, which has just been checked to be
            // non-zero-sized.
            unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), old_layout); }
            NonNull::dangling()
        } else {
            NonNull::new(
                // SAFETY: The pointer was allocated with old_layout, and both layouts have been
                // checked to be non-zero-sized.
                unsafe {
                    alloc::realloc(self.ptr.as_ptr().cast(), old_layout, new_layout.size())
                }.cast()
            ).unwrap_or_else(|| alloc::handle_alloc_error(new_layout))
        };
        self.cap = new_cap;
    }

    /// Grows the backing memory to allow for the insertion of additional elements. After calling
    /// this, the DynamicArray can take at least one more element.
    ///
    /// # Panics
    /// Panics if the memory layout of the DynamicArray would have a size that exceeds
    /// [`isize::MAX`].
    pub(crate) fn grow(&mut self) {
        let new_cap = cmp::max(
            self.cap.checked_mul(GROWTH_FACTOR).ok_or(CapacityOverflow).throw(),
            MIN_CAP,
        );

        self.realloc_with_cap(new_cap);
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

    /// A helper function to create a [`Layout`] holding `cap` slots of `T`.
    ///
    /// # Panics
    /// Panics if the layout size would exceed [`isize::MAX`].
    pub(crate) fn make_layout(cap: usize) -> Layout {
        Layout::array::<MaybeUninit<T>>(cap)
            .map_err(|_| CapacityOverflow)
            .throw()
    }

    /// A helper function to allocate for the provided [`Layout`], returning a dangling pointer for
    /// a zero-sized layout.
    ///
    /// In the event of an allocation error, this method calls [`alloc::handle_alloc_error`] as
    /// recommended, to avoid new allocations rather than panicking.
    pub(crate) fn make_ptr(layout: Layout) -> NonNull<MaybeUninit<T>> {
        if layout.size() == 0 {
            NonNull::dangling()
        } else {
            NonNull::new(
                // SAFETY: Zero-sized layouts have been guarded against.
                unsafe { alloc::alloc(layout).cast() }
            ).unwrap_or_else(|| alloc::handle_alloc_error(layout))
        }
    }
}

impl<T> Extend<T> for DynamicArray<T> {
    fn extend<A: IntoIterator<Item = T>>(&mut self, iter: A) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let iter = value.into_iter();
        let mut arr = DynamicArray::with_cap(iter.size_hint().0);

        for item in iter {
            arr.push(item);
        }

        arr
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for DynamicArray<T> {
    fn drop(&mut self) {
        // Drop all initialized values in place, then release the allocation.
        self.clear();

        let layout = Self::make_layout(self.cap);
        if layout.size() != 0 {
            // SAFETY: The pointer was allocated with this exact layout, which is non-zero-sized.
            unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), layout); }
        }
    }
}

impl<T> Deref for DynamicArray<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: The DynamicArray is valid as a slice for len values, which are all initialized.
        // The pointer is nonnull, properly aligned and the range entirely contained within this
        // DynamicArray. The borrow checker enforces that self isn't mutated for the lifetime of the
        // slice.
        unsafe {
            slice::from_raw_parts(
                // Reinterpret *mut MaybeUninit<T> as *const T for all values < len.
                self.ptr.as_ptr().cast(),
                self.len,
            )
        }
    }
}

impl<T> DerefMut for DynamicArray<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: The DynamicArray is valid as a slice for len values, which are all initialized.
        // The pointer is nonnull, properly aligned and the range entirely contained within this
        // DynamicArray. The borrow checker enforces unique access for the lifetime of the slice.
        unsafe {
            slice::from_raw_parts_mut(
                // Reinterpret *mut MaybeUninit<T> as *mut T for all values < len.
                self.ptr.as_ptr().cast(),
                self.len,
            )
        }
    }
}

impl<T> AsRef<[T]> for DynamicArray<T> {
    fn as_ref(&self) -> &[T] {
        self.deref()
    }
}

impl<T> AsMut<[T]> for DynamicArray<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.deref_mut()
    }
}

impl<T> Borrow<[T]> for DynamicArray<T> {
    fn borrow(&self) -> &[T] {
        self.as_ref()
    }
}

impl<T> BorrowMut<[T]> for DynamicArray<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut()
    }
}

// SAFETY: A DynamicArray owns its allocation through a unique pointer, so it is safe to Send when T
// is.
unsafe impl<T: Send> Send for DynamicArray<T> {}
// SAFETY: The safe API obeys all rules of the borrow checker and no interior mutability occurs, so
// DynamicArray<T> can implement Sync when T does.
unsafe impl<T: Sync> Sync for DynamicArray<T> {}

impl<T: Clone> Clone for DynamicArray<T> {
    fn clone(&self) -> Self {
        let mut arr = Self::with_cap(self.cap);

        for value in self.iter() {
            arr.push(value.clone());
        }

        arr
    }
}

impl<T: PartialEq> PartialEq for DynamicArray<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<T: Hash> Hash for DynamicArray<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Debug> Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicArray")
            .field("contents", &&**self)
            .field("len", &self.len)
            .field("cap", &self.cap)
            .finish()
    }
}

impl<T: Debug> Display for DynamicArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
