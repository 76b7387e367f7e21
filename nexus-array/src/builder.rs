//! Builder for arrays with a non-default growth policy.

use crate::{DynArray, Error, GrowthPolicy, growth::DEFAULT_MIN_CAPACITY};

/// Configures the initial capacity and growth bounds of a [`DynArray`].
///
/// # Example
///
/// ```
/// use nexus_array::{DynArray, DynArrayBuilder};
///
/// let array: DynArray<u64> = DynArrayBuilder::default()
///     .capacity(4)
///     .min_capacity(4)
///     .max_capacity(64)
///     .build()
///     .unwrap();
///
/// assert_eq!(array.capacity(), 4);
/// assert_eq!(array.policy().max_capacity(), 64);
/// ```
#[derive(Clone, Debug)]
pub struct DynArrayBuilder {
    capacity: usize,
    min_capacity: usize,
    max_capacity: Option<usize>,
}

impl Default for DynArrayBuilder {
    fn default() -> Self {
        Self {
            capacity: 0,
            min_capacity: DEFAULT_MIN_CAPACITY,
            max_capacity: None,
        }
    }
}

impl DynArrayBuilder {
    /// Slots to allocate up front. Default: 0 (no allocation).
    pub fn capacity(mut self, slots: usize) -> Self {
        self.capacity = slots;
        self
    }

    /// Capacity of the first allocation when growing from empty.
    /// Default: 10.
    pub fn min_capacity(mut self, slots: usize) -> Self {
        self.min_capacity = slots;
        self
    }

    /// Upper bound on capacity. Default: the largest element count whose
    /// byte size fits in `isize`.
    pub fn max_capacity(mut self, slots: usize) -> Self {
        self.max_capacity = Some(slots);
        self
    }

    /// Builds the array.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `min_capacity` is zero, the
    /// maximum is zero or above [`GrowthPolicy::hard_limit`], or the initial
    /// capacity is above the maximum.
    pub fn build<T>(self) -> Result<DynArray<T>, Error> {
        let hard_limit = GrowthPolicy::hard_limit::<T>();
        let max_capacity = self.max_capacity.unwrap_or(hard_limit);

        if max_capacity > hard_limit {
            return Err(Error::InvalidArgument(
                "max_capacity exceeds the element type's size limit",
            ));
        }

        let policy = GrowthPolicy::new(self.min_capacity, max_capacity)?;

        if self.capacity > max_capacity {
            return Err(Error::InvalidArgument("capacity exceeds max_capacity"));
        }

        Ok(DynArray::with_storage(self.capacity, policy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_new() {
        let array: DynArray<u32> = DynArrayBuilder::default().build().unwrap();
        assert_eq!(array.capacity(), 0);
        assert_eq!(array.policy(), GrowthPolicy::for_type::<u32>());
    }

    #[test]
    fn custom_min_capacity_used_on_first_push() {
        let mut array: DynArray<u32> = DynArrayBuilder::default()
            .min_capacity(3)
            .build()
            .unwrap();

        array.push(1).unwrap();
        assert_eq!(array.capacity(), 3);
    }

    #[test]
    fn max_capacity_enforced_on_growth() {
        let mut array: DynArray<u32> = DynArrayBuilder::default()
            .min_capacity(2)
            .max_capacity(4)
            .build()
            .unwrap();

        for i in 0..4 {
            array.push(i).unwrap();
        }
        assert_eq!(array.capacity(), 4);
        assert_eq!(
            array.push(4),
            Err(Error::CapacityExceeded {
                requested: 5,
                max: 4
            })
        );
        assert_eq!(array.len(), 4);
    }

    #[test]
    fn zero_min_capacity_rejected() {
        let result = DynArrayBuilder::default().min_capacity(0).build::<u32>();
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn capacity_above_max_rejected() {
        let result = DynArrayBuilder::default()
            .capacity(10)
            .max_capacity(8)
            .build::<u32>();
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn max_above_hard_limit_rejected() {
        let result = DynArrayBuilder::default()
            .max_capacity(usize::MAX)
            .build::<u64>();
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }
}
