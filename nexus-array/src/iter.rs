//! Iteration over a [`DynArray`].
//!
//! [`Iter`] and [`IterMut`] borrow the array, so the borrow checker already
//! rules out structural changes while they are alive.
//!
//! [`Cursor`] does not borrow. It records the array's change count when
//! created and takes the array as an argument on every step, which allows
//! walk-then-mutate code. A step after any structural change (insert,
//! remove, clear, capacity change) fails with
//! [`Error::ConcurrentModification`].
//!
//! ```text
//! let mut cursor = array.cursor();     // expected = change_count()
//! cursor.next(&array)  -> Some(Ok(&a))
//! array.push(x)                        // change_count() advances
//! cursor.next(&array)  -> Some(Err(ConcurrentModification))
//! ```
//!
//! Detection is best effort and single-threaded. It is not a concurrency
//! guarantee.

use core::iter::FusedIterator;

use crate::{DynArray, Error};

/// Iterator over references to array elements.
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    inner: core::slice::Iter<'a, T>,
}

impl<'a, T> Iter<'a, T> {
    #[inline]
    pub(crate) fn new(slice: &'a [T]) -> Self {
        Self {
            inner: slice.iter(),
        }
    }

    /// Returns the remaining elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &'a [T] {
        self.inner.as_slice()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Iterator over mutable references to array elements.
#[derive(Debug)]
pub struct IterMut<'a, T> {
    inner: core::slice::IterMut<'a, T>,
}

impl<'a, T> IterMut<'a, T> {
    #[inline]
    pub(crate) fn new(slice: &'a mut [T]) -> Self {
        Self {
            inner: slice.iter_mut(),
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

/// Detached fail-fast cursor over a [`DynArray`].
///
/// Created by [`DynArray::cursor`]. Every call must pass the array the
/// cursor was created from; passing a different array gives meaningless
/// results (same discipline as storage-backed collections).
///
/// # Example
///
/// ```
/// use nexus_array::{DynArray, Error};
///
/// let mut array: DynArray<u32> = [1, 2, 3].into();
/// let mut cursor = array.cursor();
///
/// assert_eq!(cursor.next(&array), Some(Ok(&1)));
///
/// array.push(4).unwrap();
/// assert!(matches!(
///     cursor.next(&array),
///     Some(Err(Error::ConcurrentModification { .. }))
/// ));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    position: usize,
    expected: u64,
}

impl Cursor {
    #[inline]
    pub(crate) const fn new(expected: u64) -> Self {
        Self {
            position: 0,
            expected,
        }
    }

    /// Index of the element the next step will yield.
    #[inline]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Change count captured at creation.
    #[inline]
    pub const fn expected_change_count(&self) -> u64 {
        self.expected
    }

    /// Returns `true` if another element remains.
    ///
    /// Does not check for modification; [`Cursor::next`] does.
    #[inline]
    pub fn has_next<T>(&self, array: &DynArray<T>) -> bool {
        self.position < array.len()
    }

    /// Advances the cursor.
    ///
    /// Returns `None` once every element has been yielded, and
    /// `Some(Err(..))` on every step after a structural change.
    pub fn next<'a, T>(&mut self, array: &'a DynArray<T>) -> Option<Result<&'a T, Error>> {
        if let Err(err) = self.check(array) {
            return Some(Err(err));
        }

        let element = array.as_slice().get(self.position)?;
        self.position += 1;
        Some(Ok(element))
    }

    /// Fails if `array` was structurally modified since the cursor was
    /// created.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConcurrentModification`] on a change-count mismatch.
    #[inline]
    pub fn check<T>(&self, array: &DynArray<T>) -> Result<(), Error> {
        let actual = array.change_count();
        if actual != self.expected {
            return Err(Error::ConcurrentModification {
                expected: self.expected,
                actual,
            });
        }
        Ok(())
    }
}
