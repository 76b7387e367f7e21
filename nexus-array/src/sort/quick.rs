//! Quicksort with a midpoint pivot.
//!
//! Each pass partitions a range, recurses into the smaller side and loops on
//! the larger one, so stack depth stays O(log n) even when the partition is
//! lopsided.

use core::cmp::Ordering;
use core::fmt;
use core::marker::PhantomData;
use core::mem;

use super::{Partition, SequenceSorter};
use crate::{Error, IndexedSequence};

/// Quicksort over any [`IndexedSequence`]. Not stable.
///
/// # Example
///
/// ```
/// use std::collections::VecDeque;
/// use nexus_array::{QuickSorter, SequenceSorter};
///
/// let sorter = QuickSorter::new(|a: &i32, b: &i32| b.cmp(a));
///
/// let mut deque = VecDeque::from(vec![3, 1, 2]);
/// sorter.sort(&mut deque).unwrap();
/// assert_eq!(deque, [3, 2, 1]);
/// ```
pub struct QuickSorter<T, F> {
    compare: F,
    scheme: Partition,
    _marker: PhantomData<fn(&T, &T)>,
}

impl<T, F> QuickSorter<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    /// Creates a sorter using three-way partitioning.
    pub fn new(compare: F) -> Self {
        Self::with_scheme(compare, Partition::ThreeWay)
    }

    /// Creates a sorter using Hoare partitioning.
    pub fn hoare(compare: F) -> Self {
        Self::with_scheme(compare, Partition::Hoare)
    }

    /// Creates a sorter with an explicit partition scheme.
    pub fn with_scheme(compare: F, scheme: Partition) -> Self {
        Self {
            compare,
            scheme,
            _marker: PhantomData,
        }
    }

    /// Returns the partition scheme.
    #[inline]
    pub fn scheme(&self) -> Partition {
        self.scheme
    }
}

impl<T: Ord> QuickSorter<T, fn(&T, &T) -> Ordering> {
    /// Creates a three-way sorter using `T`'s natural order.
    pub fn natural() -> Self {
        Self::new(<T as Ord>::cmp)
    }
}

impl<T, F> fmt::Debug for QuickSorter<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuickSorter")
            .field("scheme", &self.scheme)
            .finish_non_exhaustive()
    }
}

impl<T, F> SequenceSorter<T> for QuickSorter<T, F>
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

        match self.scheme {
            Partition::ThreeWay => self.sort_three_way(seq, 0, len),
            Partition::Hoare => self.sort_hoare(seq, 0, len - 1),
        }
    }
}

impl<T, F> QuickSorter<T, F>
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    // ========================================================================
    // Three-way, half-open ranges
    // ========================================================================

    fn sort_three_way<S>(&self, seq: &mut S, mut start: usize, mut end: usize) -> Result<(), Error>
    where
        S: IndexedSequence<Item = T> + ?Sized,
    {
        while end - start > 1 {
            let (lo, hi) = self.partition_three_way(seq, start, end)?;

            if lo - start < end - hi {
                self.sort_three_way(seq, start, lo)?;
                start = hi;
            } else {
                self.sort_three_way(seq, hi, end)?;
                end = lo;
            }
        }
        Ok(())
    }

    /// Returns `(lo, hi)` with `[start, lo)` less than the pivot, `[lo, hi)`
    /// equal, and `[hi, end)` greater.
    ///
    /// The pivot is parked at `start` while `(start, end)` is scanned, then
    /// moved to `lo`, so `[lo, hi)` always holds at least the pivot even when
    /// the comparator is inconsistent.
    fn partition_three_way<S>(
        &self,
        seq: &mut S,
        start: usize,
        end: usize,
    ) -> Result<(usize, usize), Error>
    where
        S: IndexedSequence<Item = T> + ?Sized,
    {
        seq.swap(start, start + (end - 1 - start) / 2)?;
        let pivot = seq.get(start)?.clone();

        let mut lt = start + 1;
        let mut i = start + 1;
        let mut gt = end;
        while i < gt {
            match (self.compare)(seq.get(i)?, &pivot) {
                Ordering::Less => {
                    seq.swap(lt, i)?;
                    lt += 1;
                    i += 1;
                }
                Ordering::Greater => {
                    gt -= 1;
                    seq.swap(i, gt)?;
                }
                Ordering::Equal => i += 1,
            }
        }

        // Move the pivot between the less and equal regions.
        seq.swap(start, lt - 1)?;
        Ok((lt - 1, gt))
    }

    // ========================================================================
    // Hoare, inclusive ranges
    // ========================================================================

    fn sort_hoare<S>(&self, seq: &mut S, mut left: usize, mut right: usize) -> Result<(), Error>
    where
        S: IndexedSequence<Item = T> + ?Sized,
    {
        while left < right {
            let split = self.partition_hoare(seq, left, right)?;

            if split - left < right - split {
                self.sort_hoare(seq, left, split)?;
                left = split + 1;
            } else {
                self.sort_hoare(seq, split + 1, right)?;
                right = split;
            }
        }
        Ok(())
    }

    /// Returns `split` in `[left, right)` with every element of
    /// `[left, split]` not greater than every element of `(split, right]`.
    ///
    /// Both cursors stay inside `[left, right]`, and the split is kept below
    /// `right`, so an inconsistent comparator cannot run them off the range or
    /// stall the caller's loop.
    fn partition_hoare<S>(&self, seq: &mut S, left: usize, right: usize) -> Result<usize, Error>
    where
        S: IndexedSequence<Item = T> + ?Sized,
    {
        let pivot = seq.get(left + (right - left) / 2)?.clone();

        let mut i = left;
        let mut j = right;
        loop {
            while i < right && (self.compare)(seq.get(i)?, &pivot) == Ordering::Less {
                i += 1;
            }
            while j > left && (self.compare)(seq.get(j)?, &pivot) == Ordering::Greater {
                j -= 1;
            }
            if j <= i {
                return Ok(j.min(right - 1));
            }
            seq.swap(i, j)?;
            i += 1;
            j -= 1;
        }
    }
}

// ============================================================================
// Slice fast path
// ============================================================================

/// Three-way quicksort directly on a slice. Needs no `Clone`: the pivot is
/// parked at index 0 while the rest is partitioned.
pub(crate) fn sort_slice<T, F>(mut v: &mut [T], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    while v.len() > 1 {
        let (lo, hi) = partition_slice(v, compare);

        let (low, rest) = mem::take(&mut v).split_at_mut(lo);
        let high = &mut rest[hi - lo..];

        if low.len() < high.len() {
            sort_slice(low, compare);
            v = high;
        } else {
            sort_slice(high, compare);
            v = low;
        }
    }
}

/// Same contract as the sequence version: `[..lo)` less, `[lo, hi)` equal,
/// `[hi..]` greater.
fn partition_slice<T, F>(v: &mut [T], compare: &mut F) -> (usize, usize)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let last = v.len() - 1;
    v.swap(0, last / 2);

    let (head, rest) = v.split_at_mut(1);
    let pivot = &head[0];

    let mut lt = 0;
    let mut i = 0;
    let mut gt = rest.len();
    while i < gt {
        match compare(&rest[i], pivot) {
            Ordering::Less => {
                rest.swap(lt, i);
                lt += 1;
                i += 1;
            }
            Ordering::Greater => {
                gt -= 1;
                rest.swap(i, gt);
            }
            Ordering::Equal => i += 1,
        }
    }

    // Move the pivot between the less and equal regions.
    v.swap(0, lt);
    (lt, gt + 1)
}
