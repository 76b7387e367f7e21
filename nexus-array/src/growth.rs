//! Capacity growth policy.
//!
//! Growth is roughly 1.5x: each reallocation adds the larger of "exactly
//! enough" and half the current capacity. Appending N elements therefore
//! copies O(N) elements in total, while a single large bulk insert jumps
//! straight to the size it needs instead of growing repeatedly.
//!
//! ```text
//! current == 0  ->  max(required, min_capacity)
//! current  > 0  ->  current + max(required - current, current / 2)
//! ```
//!
//! Results are clamped to `max_capacity`. Overflow in the addition clamps to
//! the maximum rather than wrapping.

use crate::Error;

/// Capacity used by the first allocation of an empty array, unless more is
/// required.
pub const DEFAULT_MIN_CAPACITY: usize = 10;

/// Pure function from (current capacity, required minimum) to a new capacity.
///
/// # Example
///
/// ```
/// use nexus_array::GrowthPolicy;
///
/// let policy = GrowthPolicy::for_type::<u64>();
/// assert_eq!(policy.grow(0, 1).unwrap(), 10);
/// assert_eq!(policy.grow(10, 11).unwrap(), 15);
/// assert_eq!(policy.grow(10, 40).unwrap(), 40);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrowthPolicy {
    min_capacity: usize,
    max_capacity: usize,
}

impl GrowthPolicy {
    /// Largest element count of `T` whose byte size fits in `isize`.
    ///
    /// Zero-sized types are never allocated and have no limit.
    pub const fn hard_limit<T>() -> usize {
        let size = size_of::<T>();
        if size == 0 {
            usize::MAX
        } else {
            isize::MAX as usize / size
        }
    }

    /// Default policy for element type `T`.
    pub const fn for_type<T>() -> Self {
        Self {
            min_capacity: DEFAULT_MIN_CAPACITY,
            max_capacity: Self::hard_limit::<T>(),
        }
    }

    /// Creates a policy with explicit bounds.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `min_capacity` is zero or
    /// `max_capacity` is zero.
    pub const fn new(min_capacity: usize, max_capacity: usize) -> Result<Self, Error> {
        if min_capacity == 0 {
            return Err(Error::InvalidArgument("min_capacity must be > 0"));
        }
        if max_capacity == 0 {
            return Err(Error::InvalidArgument("max_capacity must be > 0"));
        }
        Ok(Self {
            min_capacity,
            max_capacity,
        })
    }

    /// Capacity of the first allocation.
    #[inline]
    pub const fn min_capacity(&self) -> usize {
        self.min_capacity
    }

    /// Upper bound on capacity.
    #[inline]
    pub const fn max_capacity(&self) -> usize {
        self.max_capacity
    }

    /// Computes the capacity to grow to from `current` so that at least
    /// `required` elements fit.
    ///
    /// Callers only ask when `required > current`; for smaller requests the
    /// result is still a grown capacity.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapacityExceeded`] if `required` is above the maximum
    /// or the clamped result cannot hold `required` elements.
    pub fn grow(&self, current: usize, required: usize) -> Result<usize, Error> {
        if required > self.max_capacity {
            return Err(self.exceeded(required));
        }

        let grown = if current == 0 {
            required.max(self.min_capacity)
        } else {
            let min_growth = required.saturating_sub(current);
            let preferred_growth = current >> 1;
            current
                .checked_add(min_growth.max(preferred_growth))
                .unwrap_or(self.max_capacity)
        };

        let new_capacity = grown.min(self.max_capacity);
        if new_capacity < required {
            return Err(self.exceeded(required));
        }

        Ok(new_capacity)
    }

    #[inline]
    const fn exceeded(&self, requested: usize) -> Error {
        Error::CapacityExceeded {
            requested,
            max: self.max_capacity,
        }
    }
}
