//! Growable array with fail-fast cursors, plus in-place sorts over any
//! indexable sequence.
//!
//! # Quick Start
//!
//! ```
//! use nexus_array::DynArray;
//!
//! let mut array: DynArray<i32> = DynArray::new();
//! array.push(3).unwrap();
//! array.push(1).unwrap();
//! array.insert(1, 2).unwrap();
//!
//! assert_eq!(array, [3, 2, 1]);
//! assert_eq!(array.remove(0).unwrap(), 3);
//!
//! array.sort();
//! assert_eq!(array.to_string(), "[1, 2]");
//! ```
//!
//! # Fallible by Default
//!
//! Every operation that can fail on caller input returns
//! `Result<_, Error>` instead of panicking:
//!
//! ```text
//! get(5) on len 3          -> Err(IndexOutOfRange { index: 5, len: 3 })
//! push past max_capacity   -> Err(CapacityExceeded { requested, max })
//! cursor step after insert -> Err(ConcurrentModification { expected, actual })
//! ```
//!
//! Only the `Index`/`IndexMut` operators and `Extend` panic, matching the
//! std conventions for those traits.
//!
//! # Growth
//!
//! Capacity grows by roughly 1.5x, or straight to the required size for
//! large bulk inserts. The first allocation of an empty array reserves at
//! least [`DEFAULT_MIN_CAPACITY`] slots. Both bounds are configurable via
//! [`DynArrayBuilder`]. See [`GrowthPolicy`].
//!
//! # Change Tracking
//!
//! Each array keeps a change counter advanced by structural changes (insert,
//! remove, clear, capacity change). A [`Cursor`] captures the counter when
//! created and fails on the first step after it moves:
//!
//! ```
//! use nexus_array::{DynArray, Error};
//!
//! let mut array = DynArray::from(vec![1, 2, 3]);
//! let mut cursor = array.cursor();
//!
//! while let Some(Ok(&x)) = cursor.next(&array) {
//!     if x == 2 {
//!         break;
//!     }
//! }
//! array.remove(0).unwrap();
//!
//! assert!(matches!(
//!     cursor.next(&array),
//!     Some(Err(Error::ConcurrentModification { .. }))
//! ));
//! ```
//!
//! # Sorting
//!
//! | Sorter | Stable | Scratch |
//! |--------|--------|---------|
//! | [`QuickSorter`] | no | none |
//! | [`MergeSorter`] | yes | one `DynArray` per call |
//!
//! Sorters work on anything implementing [`IndexedSequence`]:
//!
//! ```text
//! IndexedSequence  - len, get, set (+ provided swap)
//!     │
//!     ├── DynArray<T>, Vec<T>, [T]
//!     └── VecDeque<T>
//! ```
//!
//! ```
//! use nexus_array::{MergeSorter, QuickSorter, SequenceSorter};
//!
//! let mut v = vec![6, -4, 5, 1, -7, 23, -19, 0];
//! QuickSorter::natural().sort(&mut v).unwrap();
//! assert_eq!(v, [-19, -7, -4, 0, 1, 5, 6, 23]);
//!
//! // Stable: -1 stays ahead of 1, 3 ahead of -3.
//! let mut w = vec![3, -1, -3, 1, 2];
//! MergeSorter::new(|a: &i32, b: &i32| a.abs().cmp(&b.abs())).sort(&mut w).unwrap();
//! assert_eq!(w, [-1, 1, 2, 3, -3]);
//! ```
//!
//! # Threading
//!
//! Single writer. `DynArray<T>` is `Send`/`Sync` exactly when `T` is. The
//! change counter detects misuse within one thread; it is not a
//! synchronization primitive.

#![warn(missing_docs)]

pub mod array;
pub mod builder;
pub mod error;
pub mod growth;
pub mod iter;
pub mod sequence;
pub mod sort;

pub use array::DynArray;
pub use builder::DynArrayBuilder;
pub use error::Error;
pub use growth::{DEFAULT_MIN_CAPACITY, GrowthPolicy};
pub use iter::{Cursor, Iter, IterMut};
pub use sequence::IndexedSequence;
pub use sort::{MergeSorter, Partition, QuickSorter, SequenceSorter};
