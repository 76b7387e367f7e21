//! Error type shared by the array, its cursors, and the sorters.

/// Failure reported by a fallible array or sequence operation.
///
/// Every variant is returned at the point of the offending call. Nothing in
/// this crate retries or swallows an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A constructor or builder argument is out of range.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// Index outside the valid range for the operation.
    ///
    /// Insertion accepts `index <= len`; access and removal require
    /// `index < len`.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
        /// Length of the sequence at the time of the call.
        len: usize,
    },

    /// Storage cannot grow to the requested number of elements.
    #[error("requested capacity {requested} exceeds maximum {max}")]
    CapacityExceeded {
        /// Minimum capacity that was required.
        requested: usize,
        /// Largest capacity the growth policy allows.
        max: usize,
    },

    /// The array was structurally modified after the cursor was created.
    #[error("array modified during iteration (expected change count {expected}, found {actual})")]
    ConcurrentModification {
        /// Change count captured when the cursor was created.
        expected: u64,
        /// Change count observed on the array.
        actual: u64,
    },
}

impl Error {
    #[inline]
    pub(crate) const fn out_of_range(index: usize, len: usize) -> Self {
        Error::IndexOutOfRange { index, len }
    }
}
