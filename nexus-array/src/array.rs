//! Growable array with explicit growth policy and a structural change counter.
//!
//! # Layout
//!
//! ```text
//! ptr ──► [ e0 | e1 | e2 | .. | e(len-1) | uninit | .. | uninit ]
//!          └──────── live: [0, len) ───────┘└─ absent: [len, capacity) ─┘
//! ```
//!
//! An empty array with zero capacity holds a dangling pointer and owns no
//! allocation. Zero-sized element types never allocate; their capacity is
//! tracked but nothing is stored.
//!
//! # Change counter
//!
//! Every structural mutation (insert, remove, clear, capacity change)
//! increments [`DynArray::change_count`]. Replacing an element with
//! [`DynArray::set`] or sorting is not structural.

use core::cmp::Ordering;
use core::fmt;
use core::marker::PhantomData;
use core::ops;
use core::ptr::{self, NonNull};
use std::alloc::{Layout, alloc, dealloc, handle_alloc_error, realloc};

use crate::iter::{Cursor, Iter, IterMut};
use crate::sort::quick;
use crate::{Error, GrowthPolicy};

/// A contiguous growable array.
///
/// Capacity grows through a [`GrowthPolicy`] (roughly 1.5x, at least 10 on
/// first use by default). Insertions and removals in the middle shift the
/// tail with a single block move.
///
/// # Example
///
/// ```
/// use nexus_array::DynArray;
///
/// let mut array = DynArray::new();
/// array.push(123).unwrap();
/// array.push(456).unwrap();
/// array.insert(1, 789).unwrap();
///
/// assert_eq!(array, [123, 789, 456]);
/// assert_eq!(array.remove(0), Ok(123));
/// assert_eq!(array.to_string(), "[789, 456]");
/// ```
pub struct DynArray<T> {
    ptr: NonNull<T>,
    capacity: usize,
    len: usize,
    changes: u64,
    policy: GrowthPolicy,
    _marker: PhantomData<T>,
}

// Safety: DynArray owns its elements; sharing follows T.
unsafe impl<T: Send> Send for DynArray<T> {}
unsafe impl<T: Sync> Sync for DynArray<T> {}

impl<T> Default for DynArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DynArray<T> {
    const IS_ZST: bool = size_of::<T>() == 0;

    /// Creates an empty array without allocating.
    pub const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            capacity: 0,
            len: 0,
            changes: 0,
            policy: GrowthPolicy::for_type::<T>(),
            _marker: PhantomData,
        }
    }

    /// Creates an empty array with room for `capacity` elements.
    ///
    /// A capacity of 0 does not allocate.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `capacity` is above the default
    /// policy's maximum.
    pub fn with_capacity(capacity: usize) -> Result<Self, Error> {
        let policy = GrowthPolicy::for_type::<T>();
        if capacity > policy.max_capacity() {
            return Err(Error::InvalidArgument("capacity exceeds max_capacity"));
        }
        Ok(Self::with_storage(capacity, policy))
    }

    /// Caller guarantees `capacity <= policy.max_capacity()`.
    pub(crate) fn with_storage(capacity: usize, policy: GrowthPolicy) -> Self {
        let mut array = Self {
            ptr: NonNull::dangling(),
            capacity: 0,
            len: 0,
            changes: 0,
            policy,
            _marker: PhantomData,
        };
        if capacity > 0 {
            array.resize_storage(capacity);
            array.changes = 0;
        }
        array
    }

    /// Returns the number of live elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the array holds no elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of elements the array can hold without growing.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of structural modifications so far.
    #[inline]
    pub const fn change_count(&self) -> u64 {
        self.changes
    }

    /// Returns the growth policy.
    #[inline]
    pub const fn policy(&self) -> GrowthPolicy {
        self.policy
    }

    /// Returns the live elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // Safety: [0, len) is initialized; ptr is non-null and aligned.
        unsafe { core::slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    /// Returns the live elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // Safety: [0, len) is initialized and exclusively borrowed.
        unsafe { core::slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] unless `index < len`.
    #[inline]
    pub fn get(&self, index: usize) -> Result<&T, Error> {
        let len = self.len;
        self.as_slice()
            .get(index)
            .ok_or(Error::out_of_range(index, len))
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] unless `index < len`.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, Error> {
        let len = self.len;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(Error::out_of_range(index, len))
    }

    /// Replaces the element at `index`, returning the previous value.
    ///
    /// Never grows and does not count as a structural change.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] unless `index < len`.
    #[inline]
    pub fn set(&mut self, index: usize, element: T) -> Result<T, Error> {
        self.get_mut(index)
            .map(|slot| core::mem::replace(slot, element))
    }

    /// Appends an element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapacityExceeded`] if the array is at its maximum
    /// capacity. `element` is dropped in that case.
    #[inline]
    pub fn push(&mut self, element: T) -> Result<(), Error> {
        self.insert(self.len, element)
    }

    /// Inserts an element at `index`, shifting `[index, len)` one slot right.
    ///
    /// `index == len` appends.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index > len`, or
    /// [`Error::CapacityExceeded`] if the array cannot grow. On error the
    /// array is unchanged and `element` is dropped; check
    /// [`capacity`](Self::capacity) against
    /// [`GrowthPolicy::max_capacity`] first to keep it.
    pub fn insert(&mut self, index: usize, element: T) -> Result<(), Error> {
        if index > self.len {
            return Err(Error::out_of_range(index, self.len));
        }

        if self.len == self.capacity {
            let required = self.required(1)?;
            self.grow_to(required)?;
        }

        // Safety: index <= len < capacity, so both the shifted block and the
        // written slot are in bounds.
        unsafe {
            let slot = self.ptr.as_ptr().add(index);
            if index < self.len {
                ptr::copy(slot, slot.add(1), self.len - index);
            }
            slot.write(element);
        }

        self.len += 1;
        self.bump();
        Ok(())
    }

    /// Inserts every element of `source` at `index`, preserving their order.
    ///
    /// `source` is drained into a snapshot before the array is touched. The
    /// tail `[index, len)` then moves right in one block and the snapshot is
    /// moved into the gap.
    ///
    /// Returns `Ok(false)` without modifying the array if `source` is empty.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index > len`, or
    /// [`Error::CapacityExceeded`] if the array cannot hold the result. On
    /// error the array is unchanged. After a capacity failure the drained
    /// snapshot is dropped; an index failure is reported before `source` is
    /// touched.
    pub fn insert_all<I>(&mut self, index: usize, source: I) -> Result<bool, Error>
    where
        I: IntoIterator<Item = T>,
    {
        if index > self.len {
            return Err(Error::out_of_range(index, self.len));
        }

        let mut snapshot: Vec<T> = source.into_iter().collect();
        let count = snapshot.len();
        if count == 0 {
            return Ok(false);
        }

        let required = self.required(count)?;
        if required > self.capacity {
            self.grow_to(required)?;
        }

        // Safety: len + count <= capacity. The snapshot's elements are moved
        // out bitwise and its length zeroed so it only frees its buffer.
        unsafe {
            let slot = self.ptr.as_ptr().add(index);
            if index < self.len {
                ptr::copy(slot, slot.add(count), self.len - index);
            }
            ptr::copy_nonoverlapping(snapshot.as_ptr(), slot, count);
            snapshot.set_len(0);
        }

        self.len += count;
        self.bump();
        Ok(true)
    }

    /// Removes and returns the element at `index`, shifting `(index, len)`
    /// one slot left.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] unless `index < len`.
    pub fn remove(&mut self, index: usize) -> Result<T, Error> {
        if index >= self.len {
            return Err(Error::out_of_range(index, self.len));
        }

        // Safety: index < len. The vacated last slot is left uninitialized,
        // so the moved value is not retained.
        let element = unsafe {
            let slot = self.ptr.as_ptr().add(index);
            let element = slot.read();
            ptr::copy(slot.add(1), slot, self.len - index - 1);
            element
        };

        self.len -= 1;
        self.bump();
        Ok(element)
    }

    /// Removes the first element equal to `element`.
    ///
    /// For `Option<U>` elements, `None` matches `None`.
    ///
    /// Returns `true` if an element was removed.
    pub fn remove_item(&mut self, element: &T) -> bool
    where
        T: PartialEq,
    {
        match self.index_of(element) {
            Some(index) => self.remove(index).is_ok(),
            None => false,
        }
    }

    /// Drops every element. Capacity is unchanged.
    pub fn clear(&mut self) {
        let len = self.len;
        // Zero len first so a panicking destructor cannot cause a double drop.
        self.len = 0;
        // Safety: [0, len) was initialized and is no longer reachable.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.ptr.as_ptr(), len));
        }
        self.bump();
    }

    /// Grows capacity to at least `min_capacity` if it is currently smaller.
    ///
    /// Counts as a structural change only if storage actually grows.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapacityExceeded`] if `min_capacity` is above the
    /// policy maximum.
    pub fn ensure_capacity(&mut self, min_capacity: usize) -> Result<(), Error> {
        if self.capacity < min_capacity {
            self.grow_to(min_capacity)?;
        }
        Ok(())
    }

    /// Shrinks capacity to exactly `len`, releasing the allocation when
    /// empty.
    ///
    /// Counts as a structural change only if capacity actually decreases.
    pub fn shrink_to_fit(&mut self) {
        if self.len < self.capacity {
            self.resize_storage(self.len);
        }
    }

    /// Returns the index of the first element equal to `element`.
    pub fn index_of(&self, element: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.as_slice().iter().position(|e| e == element)
    }

    /// Returns the index of the last element equal to `element`.
    pub fn last_index_of(&self, element: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.as_slice().iter().rposition(|e| e == element)
    }

    /// Returns `true` if any element equals `element`.
    #[inline]
    pub fn contains(&self, element: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(element).is_some()
    }

    /// Returns an independent copy of the live elements, in order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.as_slice().to_vec()
    }

    /// Clones the elements into the front of `dst` if it is large enough.
    ///
    /// Returns the number of elements written, or `None` if `dst` is shorter
    /// than `len`. Slots of `dst` past `len` are left untouched.
    pub fn copy_into(&self, dst: &mut [T]) -> Option<usize>
    where
        T: Clone,
    {
        let head = dst.get_mut(..self.len)?;
        head.clone_from_slice(self.as_slice());
        Some(self.len)
    }

    /// Moves the elements into a `Vec`.
    pub fn into_vec(mut self) -> Vec<T> {
        let len = self.len;
        let mut out = Vec::with_capacity(len);
        // Safety: elements are moved bitwise and our len zeroed, so Drop
        // only releases the buffer.
        unsafe {
            ptr::copy_nonoverlapping(self.ptr.as_ptr(), out.as_mut_ptr(), len);
            out.set_len(len);
        }
        self.len = 0;
        out
    }

    /// Returns an iterator over the elements.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.as_slice())
    }

    /// Returns an iterator over mutable references to the elements.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.as_mut_slice())
    }

    /// Returns a detached fail-fast cursor positioned before the first
    /// element.
    ///
    /// The cursor fails on its next step if the array is structurally
    /// modified after this call. See [`Cursor`].
    #[inline]
    pub fn cursor(&self) -> Cursor {
        Cursor::new(self.changes)
    }

    /// Sorts the elements in place with `compare`.
    ///
    /// Three-way partition quicksort over the backing storage: unstable,
    /// linear on runs of equal elements. Does nothing if `len < 2`.
    pub fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        quick::sort_slice(self.as_mut_slice(), &mut compare);
    }

    /// Sorts the elements in ascending order.
    #[inline]
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        self.sort_by(T::cmp);
    }

    #[inline]
    fn bump(&mut self) {
        self.changes = self.changes.wrapping_add(1);
    }

    #[inline]
    fn required(&self, additional: usize) -> Result<usize, Error> {
        self.len
            .checked_add(additional)
            .ok_or(Error::CapacityExceeded {
                requested: usize::MAX,
                max: self.policy.max_capacity(),
            })
    }

    fn grow_to(&mut self, required: usize) -> Result<(), Error> {
        let new_capacity = self.policy.grow(self.capacity, required)?;
        self.resize_storage(new_capacity);
        Ok(())
    }

    /// Moves storage to a buffer of exactly `new_capacity` slots.
    ///
    /// Caller guarantees `len <= new_capacity <= policy.max_capacity()`,
    /// which keeps every layout below within `isize::MAX` bytes.
    fn resize_storage(&mut self, new_capacity: usize) {
        debug_assert!(self.len <= new_capacity);
        debug_assert!(new_capacity <= self.policy.max_capacity());

        let old_capacity = self.capacity;
        if new_capacity == old_capacity {
            return;
        }

        if !Self::IS_ZST {
            // Safety: both capacities respect the policy maximum.
            self.ptr = unsafe { self.reallocate(old_capacity, new_capacity) };
        }

        tracing::trace!(
            from = old_capacity,
            to = new_capacity,
            len = self.len,
            "resized array storage"
        );

        self.capacity = new_capacity;
        self.bump();
    }

    /// # Safety
    ///
    /// `old_capacity` must be the capacity of the current buffer and both
    /// capacities must be at most [`GrowthPolicy::hard_limit`].
    unsafe fn reallocate(&self, old_capacity: usize, new_capacity: usize) -> NonNull<T> {
        if new_capacity == 0 {
            unsafe { dealloc(self.ptr.as_ptr().cast(), Self::layout(old_capacity)) };
            return NonNull::dangling();
        }

        let new_layout = unsafe { Self::layout(new_capacity) };
        let raw = if old_capacity == 0 {
            unsafe { alloc(new_layout) }
        } else {
            unsafe {
                realloc(
                    self.ptr.as_ptr().cast(),
                    Self::layout(old_capacity),
                    new_layout.size(),
                )
            }
        };

        match NonNull::new(raw.cast::<T>()) {
            Some(ptr) => ptr,
            None => handle_alloc_error(new_layout),
        }
    }

    /// # Safety
    ///
    /// `capacity * size_of::<T>()` must not exceed `isize::MAX`.
    #[inline]
    unsafe fn layout(capacity: usize) -> Layout {
        unsafe { Layout::from_size_align_unchecked(capacity * size_of::<T>(), align_of::<T>()) }
    }
}

impl<T> Drop for DynArray<T> {
    fn drop(&mut self) {
        // Safety: [0, len) is initialized; the buffer was allocated with
        // layout(capacity) unless empty or zero-sized.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.ptr.as_ptr(), self.len));
            if !Self::IS_ZST && self.capacity > 0 {
                dealloc(self.ptr.as_ptr().cast(), Self::layout(self.capacity));
            }
        }
    }
}

impl<T: Clone> Clone for DynArray<T> {
    fn clone(&self) -> Self {
        let mut out = Self::with_storage(self.len, self.policy);
        for element in self.iter() {
            // Safety: out.len < self.len == out.capacity. len is bumped per
            // element so a panicking clone drops only what was written.
            unsafe { out.ptr.as_ptr().add(out.len).write(element.clone()) };
            out.len += 1;
        }
        out
    }
}

impl<T> From<Vec<T>> for DynArray<T> {
    fn from(mut vec: Vec<T>) -> Self {
        let len = vec.len();
        let mut out = Self::with_storage(len, GrowthPolicy::for_type::<T>());
        // Safety: out has exactly len slots; vec forgets its elements.
        unsafe {
            ptr::copy_nonoverlapping(vec.as_ptr(), out.ptr.as_ptr(), len);
            vec.set_len(0);
        }
        out.len = len;
        out
    }
}

impl<T: Clone> From<&[T]> for DynArray<T> {
    fn from(slice: &[T]) -> Self {
        slice.iter().cloned().collect()
    }
}

impl<T, const N: usize> From<[T; N]> for DynArray<T> {
    fn from(array: [T; N]) -> Self {
        Self::from(Vec::from(array))
    }
}

impl<T> FromIterator<T> for DynArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = Self::new();
        array.extend(iter);
        array
    }
}

impl<T> Extend<T> for DynArray<T> {
    /// # Panics
    ///
    /// Panics if the array would exceed its maximum capacity. Use
    /// [`DynArray::insert_all`] to handle that case.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        if let Err(err) = self.ensure_capacity(self.len.saturating_add(lower)) {
            panic!("{err}");
        }
        for element in iter {
            if let Err(err) = self.push(element) {
                panic!("{err}");
            }
        }
    }
}

impl<T> IntoIterator for DynArray<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a DynArray<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynArray<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> ops::Index<usize> for DynArray<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `index >= len`. Use [`DynArray::get`] for a checked lookup.
    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<T> ops::IndexMut<usize> for DynArray<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.as_mut_slice()[index]
    }
}

impl<T: PartialEq> PartialEq for DynArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for DynArray<T> {}

impl<T: PartialEq> PartialEq<[T]> for DynArray<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq> PartialEq<&[T]> for DynArray<T> {
    fn eq(&self, other: &&[T]) -> bool {
        self.as_slice() == *other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for DynArray<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: fmt::Debug> fmt::Debug for DynArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for DynArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, element) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(element, f)?;
        }
        f.write_str("]")
    }
}
