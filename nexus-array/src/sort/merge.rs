//! Top-down stable merge sort.

use core::cmp::Ordering;
use core::fmt;
use core::marker::PhantomData;

use super::SequenceSorter;
use crate::{DynArray, Error, IndexedSequence};

/// Stable merge sort over any [`IndexedSequence`].
///
/// Each top-level [`sort`](SequenceSorter::sort) allocates one scratch
/// [`DynArray`] the length of the sequence; every merge reuses it. The
/// scratch starts empty and is filled by the first merge to reach each
/// position, so every element is cloned once into it per merge level.
///
/// # Example
///
/// ```
/// use nexus_array::{DynArray, MergeSorter, SequenceSorter};
///
/// // Sort by key only; equal keys keep their insertion order.
/// let sorter = MergeSorter::new(|a: &(u8, char), b: &(u8, char)| a.0.cmp(&b.0));
///
/// let mut array = DynArray::from([(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')]);
/// sorter.sort(&mut array).unwrap();
/// assert_eq!(array, [(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
/// ```
pub struct MergeSorter<T, F> {
    compare: F,
    _marker: PhantomData<fn(&T, &T)>,
}

impl<T, F> MergeSorter<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    /// Creates a sorter ordering by `compare`.
    pub fn new(compare: F) -> Self {
        Self {
            compare,
            _marker: PhantomData,
        }
    }
}

impl<T: Ord> MergeSorter<T, fn(&T, &T) -> Ordering> {
    /// Creates a sorter using `T`'s natural order.
    pub fn natural() -> Self {
        Self::new(<T as Ord>::cmp)
    }
}

impl<T, F> fmt::Debug for MergeSorter<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MergeSorter").finish_non_exhaustive()
    }
}

impl<T, F> SequenceSorter<T> for MergeSorter<T, F>
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    fn sort<S>(&self, seq: &mut S) -> Result<(), Error>
    where
        S: IndexedSequence<Item = T> + ?Sized,
    {
        let len = seq.len();
        if len < 2 {
            return Ok(());
        }

        let mut buffer = DynArray::with_capacity(len)?;
        self.merge_sort(seq, &mut buffer, 0, len - 1)
    }
}

impl<T, F> MergeSorter<T, F>
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    /// Sorts the inclusive range `[left, right]`.
    fn merge_sort<S>(
        &self,
        seq: &mut S,
        buffer: &mut DynArray<T>,
        left: usize,
        right: usize,
    ) -> Result<(), Error>
    where
        S: IndexedSequence<Item = T> + ?Sized,
    {
        if left >= right {
            return Ok(());
        }

        let middle = left + (right - left) / 2;
        self.merge_sort(seq, buffer, left, middle)?;
        self.merge_sort(seq, buffer, middle + 1, right)?;
        self.merge(seq, buffer, left, middle, right)
    }

    /// Merges sorted runs `[left, middle]` and `(middle, right]`.
    fn merge<S>(
        &self,
        seq: &mut S,
        buffer: &mut DynArray<T>,
        left: usize,
        middle: usize,
        right: usize,
    ) -> Result<(), Error>
    where
        S: IndexedSequence<Item = T> + ?Sized,
    {
        // Merges run left to right, so `left <= buffer.len()` here.
        for index in left..=right {
            let value = seq.get(index)?.clone();
            if index < buffer.len() {
                buffer.set(index, value)?;
            } else {
                buffer.push(value)?;
            }
        }

        let mut l = left;
        let mut r = middle + 1;
        let mut k = left;
        while l <= middle && r <= right {
            // Ties take the left run.
            let next = if (self.compare)(buffer.get(r)?, buffer.get(l)?) == Ordering::Less {
                r += 1;
                r - 1
            } else {
                l += 1;
                l - 1
            };
            seq.set(k, buffer.get(next)?.clone())?;
            k += 1;
        }

        // A right remainder is already in place.
        while l <= middle {
            seq.set(k, buffer.get(l)?.clone())?;
            l += 1;
            k += 1;
        }
        Ok(())
    }
}
