//! In-place comparison sorts over any [`IndexedSequence`].
//!
//! | Sorter | Stable | Extra memory | Worst-case time |
//! |--------|--------|--------------|-----------------|
//! | [`QuickSorter`] (three-way) | no | O(log n) stack | O(n²) |
//! | [`QuickSorter`] (Hoare) | no | O(log n) stack | O(n²) |
//! | [`MergeSorter`] | yes | O(n) buffer + O(log n) stack | O(n log n) |
//!
//! A sorter is built around a comparator and is otherwise stateless, so one
//! instance can sort any number of sequences.
//!
//! ```text
//! QuickSorter::new(cmp).sort(&mut seq)?
//!     seq.len() < 2  ->  Ok(()), untouched
//!     otherwise      ->  compare(seq[i], seq[i + 1]) != Greater for all i
//! ```
//!
//! Elements are moved only through [`IndexedSequence::get`],
//! [`IndexedSequence::set`] and [`IndexedSequence::swap`]. Pivots and merge
//! buffers hold clones, hence the `T: Clone` bound.

mod merge;
pub(crate) mod quick;

pub use merge::MergeSorter;
pub use quick::QuickSorter;

use crate::{Error, IndexedSequence};

/// Sorts a sequence in place with a comparator fixed at construction.
pub trait SequenceSorter<T> {
    /// Sorts `seq` so every adjacent pair is in non-descending order.
    ///
    /// Sequences of length 0 or 1 are left untouched.
    ///
    /// # Errors
    ///
    /// Propagates errors from the sequence's own accessors, and
    /// [`Error::CapacityExceeded`] if a scratch buffer cannot be sized.
    fn sort<S>(&self, seq: &mut S) -> Result<(), Error>
    where
        S: IndexedSequence<Item = T> + ?Sized;
}

/// Partition scheme used by [`QuickSorter`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Partition {
    /// Splits into less / equal / greater regions around the pivot. Runs of
    /// equal keys are finished in one pass.
    #[default]
    ThreeWay,
    /// Classic two-cursor scheme. Fewer swaps on distinct keys, but
    /// duplicates are recursed into.
    Hoare,
}
