//! Indexed get/set access, the only capability the sorters require.
//!
//! ```text
//! IndexedSequence
//!     ├── DynArray<T>
//!     ├── Vec<T>
//!     ├── [T]
//!     └── VecDeque<T>   (ring buffer, not contiguous)
//! ```
//!
//! Implement it for any ordered container to sort it with
//! [`QuickSorter`](crate::QuickSorter) or [`MergeSorter`](crate::MergeSorter).
//! Sorting touches elements only through these methods, so correctness does
//! not depend on contiguous storage. Containers without O(1) indexing (linked
//! lists, for example) still sort correctly, just slowly.

use std::collections::VecDeque;

use crate::{DynArray, Error};

/// A sequence with O(1) (ideally) indexed read and replace.
///
/// While this trait is in scope, `vec.get(i)` on a `Vec<T>` resolves to
/// [`IndexedSequence::get`] (returning `Result`) rather than the slice method
/// (returning `Option`). Go through `vec.as_slice().get(i)` for the latter.
///
/// # Example
///
/// ```
/// use nexus_array::{Error, IndexedSequence, QuickSorter, SequenceSorter};
///
/// /// Every other element of a vector.
/// struct Evens(Vec<i32>);
///
/// impl IndexedSequence for Evens {
///     type Item = i32;
///
///     fn len(&self) -> usize {
///         self.0.len().div_ceil(2)
///     }
///
///     fn get(&self, index: usize) -> Result<&i32, Error> {
///         let len = self.len();
///         self.0.as_slice().get(index * 2).ok_or(Error::IndexOutOfRange { index, len })
///     }
///
///     fn set(&mut self, index: usize, value: i32) -> Result<i32, Error> {
///         let len = self.len();
///         let slot = self.0.get_mut(index * 2).ok_or(Error::IndexOutOfRange { index, len })?;
///         Ok(std::mem::replace(slot, value))
///     }
/// }
///
/// let mut evens = Evens(vec![5, 0, 3, 0, 4, 0, 1]);
/// QuickSorter::new(i32::cmp).sort(&mut evens).unwrap();
/// assert_eq!(evens.0, vec![1, 0, 3, 0, 4, 0, 5]);
/// ```
pub trait IndexedSequence {
    /// Element type.
    type Item;

    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if the sequence has no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] unless `index < len`.
    fn get(&self, index: usize) -> Result<&Self::Item, Error>;

    /// Replaces the element at `index`, returning the previous value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] unless `index < len`.
    fn set(&mut self, index: usize, value: Self::Item) -> Result<Self::Item, Error>;

    /// Exchanges the elements at `a` and `b`.
    ///
    /// The provided implementation goes through [`get`](Self::get) and
    /// [`set`](Self::set); contiguous containers override it with a native
    /// swap.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if either index is out of range.
    fn swap(&mut self, a: usize, b: usize) -> Result<(), Error>
    where
        Self::Item: Clone,
    {
        if a == b {
            return self.get(a).map(|_| ());
        }
        let first = self.get(a)?.clone();
        let second = self.set(b, first)?;
        self.set(a, second)?;
        Ok(())
    }
}

#[inline]
fn checked_swap<T>(slice: &mut [T], a: usize, b: usize) -> Result<(), Error> {
    let len = slice.len();
    for index in [a, b] {
        if index >= len {
            return Err(Error::IndexOutOfRange { index, len });
        }
    }
    slice.swap(a, b);
    Ok(())
}

#[inline]
fn slice_set<T>(slice: &mut [T], index: usize, value: T) -> Result<T, Error> {
    let len = slice.len();
    slice
        .get_mut(index)
        .map(|slot| core::mem::replace(slot, value))
        .ok_or(Error::IndexOutOfRange { index, len })
}

impl<T> IndexedSequence for DynArray<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        DynArray::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Result<&T, Error> {
        DynArray::get(self, index)
    }

    #[inline]
    fn set(&mut self, index: usize, value: T) -> Result<T, Error> {
        DynArray::set(self, index, value)
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) -> Result<(), Error>
    where
        T: Clone,
    {
        checked_swap(self.as_mut_slice(), a, b)
    }
}

impl<T> IndexedSequence for [T] {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Result<&T, Error> {
        let len = <[T]>::len(self);
        <[T]>::get(self, index).ok_or(Error::IndexOutOfRange { index, len })
    }

    #[inline]
    fn set(&mut self, index: usize, value: T) -> Result<T, Error> {
        slice_set(self, index, value)
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) -> Result<(), Error>
    where
        T: Clone,
    {
        checked_swap(self, a, b)
    }
}

impl<T> IndexedSequence for Vec<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Result<&T, Error> {
        IndexedSequence::get(self.as_slice(), index)
    }

    #[inline]
    fn set(&mut self, index: usize, value: T) -> Result<T, Error> {
        slice_set(self.as_mut_slice(), index, value)
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) -> Result<(), Error>
    where
        T: Clone,
    {
        checked_swap(self.as_mut_slice(), a, b)
    }
}

impl<T> IndexedSequence for VecDeque<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Result<&T, Error> {
        let len = VecDeque::len(self);
        VecDeque::get(self, index).ok_or(Error::IndexOutOfRange { index, len })
    }

    #[inline]
    fn set(&mut self, index: usize, value: T) -> Result<T, Error> {
        let len = VecDeque::len(self);
        VecDeque::get_mut(self, index)
            .map(|slot| core::mem::replace(slot, value))
            .ok_or(Error::IndexOutOfRange { index, len })
    }
}
