use std::alloc;
use std::fmt::{self, Debug, Formatter};
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::mem::MaybeUninit;
use std::ptr::NonNull;
use std::slice;

use super::DynamicArray;

/// An owning iterator over the elements of a [`DynamicArray`], created by its [`IntoIterator`]
/// implementation.
///
/// Reads values out of the allocation from either end; any elements which haven't been yielded when
/// the iterator is dropped are dropped in place along with the allocation.
pub struct IntoIter<T> {
    ptr: NonNull<MaybeUninit<T>>,
    cap: usize,
    front: usize,
    // Exclusive bound of the remaining elements.
    back: usize,
    _phantom: PhantomData<T>,
}

impl<T> IntoIterator for DynamicArray<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let (ptr, len, cap) = self.into_parts();
        IntoIter {
            ptr,
            cap,
            front: 0,
            back: len,
            _phantom: PhantomData,
        }
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynamicArray<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.front == self.back {
            None
        } else {
            // SAFETY: front < back <= the original length, so the slot holds an initialized value
            // which no other code can read again after front is advanced past it.
            let value = unsafe { self.ptr.add(self.front).read().assume_init() };
            self.front += 1;
            Some(value)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.front == self.back {
            None
        } else {
            self.back -= 1;
            // SAFETY: front <= back < the original length, so the slot holds an initialized value
            // which no other code can read again after back is moved before it.
            Some(unsafe { self.ptr.add(self.back).read().assume_init() })
        }
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        // Drop all values which haven't been yielded, then release the allocation.
        for i in self.front..self.back {
            // SAFETY: The range front..back holds the initialized values that haven't been read
            // out of the allocation yet.
            unsafe { self.ptr.add(i).as_mut().assume_init_drop(); }
        }

        let layout = DynamicArray::<T>::make_layout(self.cap);
        if layout.size() != 0 {
            // SAFETY: The pointer was allocated by the originating DynamicArray with this exact
            // layout, which is non-zero-sized.
            unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), layout); }
        }
    }
}

// SAFETY: The iterator owns the allocation through a unique pointer, like the DynamicArray it came
// from.
unsafe impl<T: Send> Send for IntoIter<T> {}
// SAFETY: No interior mutability is involved; see the impl for DynamicArray.
unsafe impl<T: Sync> Sync for IntoIter<T> {}

impl<T: Debug> Debug for IntoIter<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        // SAFETY: The range front..back holds initialized values, per the iterator invariant.
        let remaining = unsafe {
            slice::from_raw_parts(self.ptr.add(self.front).as_ptr().cast::<T>(), self.back - self.front)
        };
        f.debug_tuple("IntoIter").field(&remaining).finish()
    }
}
