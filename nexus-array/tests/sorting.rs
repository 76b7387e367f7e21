//! Sorters against `slice::sort` on every supported sequence type.

use std::cmp::Ordering;
use std::collections::VecDeque;

use nexus_array::{DynArray, MergeSorter, Partition, QuickSorter, SequenceSorter};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

const EXAMPLE: [i32; 8] = [6, -4, 5, 1, -7, 23, -19, 0];
const EXAMPLE_SORTED: [i32; 8] = [-19, -7, -4, 0, 1, 5, 6, 23];

fn random_values(rng: &mut SmallRng, len: usize, range: i32) -> Vec<i32> {
    (0..len).map(|_| rng.random_range(-range..range)).collect()
}

fn is_sorted_by<T>(items: impl IntoIterator<Item = T>, compare: impl Fn(&T, &T) -> Ordering) -> bool {
    let items: Vec<T> = items.into_iter().collect();
    items.windows(2).all(|w| compare(&w[0], &w[1]) != Ordering::Greater)
}

/// Runs `sorter` on a `DynArray`, `Vec` and `VecDeque` holding `values` and
/// checks each against `slice::sort`.
fn check_all_targets<S>(sorter: &S, values: &[i32])
where
    S: SequenceSorter<i32>,
{
    let mut expected = values.to_vec();
    expected.sort();

    let mut array = DynArray::from(values);
    sorter.sort(&mut array).unwrap();
    assert_eq!(array.as_slice(), expected.as_slice());

    let mut vec = values.to_vec();
    sorter.sort(&mut vec).unwrap();
    assert_eq!(vec, expected);

    // Start mid-buffer so the deque wraps.
    let mut deque = VecDeque::with_capacity(values.len());
    for (i, &v) in values.iter().enumerate() {
        if i % 2 == 0 {
            deque.push_back(v);
        } else {
            deque.push_front(v);
        }
    }
    sorter.sort(&mut deque).unwrap();
    assert!(deque.iter().eq(expected.iter()));
}

// ============================================================================
// Fixed examples
// ============================================================================

#[test]
fn example_with_every_sorter() {
    let mut array = DynArray::from(EXAMPLE);
    array.sort();
    assert_eq!(array, EXAMPLE_SORTED);

    check_all_targets(&QuickSorter::natural(), &EXAMPLE);
    check_all_targets(&QuickSorter::hoare(i32::cmp), &EXAMPLE);
    check_all_targets(&MergeSorter::natural(), &EXAMPLE);
}

#[test]
fn degenerate_inputs() {
    let inputs: [&[i32]; 6] = [
        &[],
        &[1],
        &[2, 1],
        &[1, 1, 1, 1, 1, 1, 1],
        &[1, 2, 3, 4, 5, 6, 7, 8, 9],
        &[9, 8, 7, 6, 5, 4, 3, 2, 1],
    ];

    for input in inputs {
        check_all_targets(&QuickSorter::natural(), input);
        check_all_targets(&QuickSorter::hoare(i32::cmp), input);
        check_all_targets(&MergeSorter::natural(), input);
    }
}

// ============================================================================
// Randomized
// ============================================================================

#[test]
fn random_inputs_match_std_sort() {
    let mut rng = SmallRng::seed_from_u64(1234567890);

    for len in [2, 5, 31, 64, 513, 2000] {
        for range in [3, 100, i32::MAX] {
            let values = random_values(&mut rng, len, range);
            check_all_targets(&QuickSorter::natural(), &values);
            check_all_targets(&QuickSorter::hoare(i32::cmp), &values);
            check_all_targets(&MergeSorter::natural(), &values);
        }
    }
}

#[test]
fn sorting_is_idempotent_permutation() {
    let mut rng = SmallRng::seed_from_u64(99999);
    let original = random_values(&mut rng, 1000, 20);

    let mut counts = [0usize; 40];
    for &v in &original {
        counts[(v + 20) as usize] += 1;
    }

    for scheme in [Partition::ThreeWay, Partition::Hoare] {
        let sorter = QuickSorter::with_scheme(i32::cmp, scheme);
        let mut array = DynArray::from(original.as_slice());

        sorter.sort(&mut array).unwrap();
        assert!(is_sorted_by(array.iter(), |a, b| a.cmp(b)));

        let mut after = [0usize; 40];
        for &v in &array {
            after[(v + 20) as usize] += 1;
        }
        assert_eq!(after, counts);

        let once = array.clone();
        sorter.sort(&mut array).unwrap();
        assert_eq!(array, once);
    }
}

#[test]
fn custom_comparator_descending() {
    let mut rng = SmallRng::seed_from_u64(5);
    let values = random_values(&mut rng, 300, 1000);
    let descending = |a: &i32, b: &i32| b.cmp(a);

    let mut quick = DynArray::from(values.as_slice());
    QuickSorter::new(descending).sort(&mut quick).unwrap();
    assert!(is_sorted_by(quick.iter().copied(), descending));

    let mut merge = DynArray::from(values.as_slice());
    MergeSorter::new(descending).sort(&mut merge).unwrap();
    assert_eq!(quick, merge);
}

#[test]
fn merge_sort_is_stable_on_records() {
    #[derive(Clone, Debug, PartialEq)]
    struct Order {
        price: u32,
        id: usize,
    }

    let mut rng = SmallRng::seed_from_u64(2024);
    let orders: Vec<Order> = (0..2000)
        .map(|id| Order {
            price: rng.random_range(100..110),
            id,
        })
        .collect();

    let mut array = DynArray::from(orders.as_slice());
    MergeSorter::new(|a: &Order, b: &Order| a.price.cmp(&b.price))
        .sort(&mut array)
        .unwrap();

    let mut expected = orders;
    expected.sort_by_key(|o| o.price);
    assert_eq!(array.as_slice(), expected.as_slice());

    for pair in array.as_slice().windows(2) {
        if pair[0].price == pair[1].price {
            assert!(pair[0].id < pair[1].id);
        }
    }
}

#[test]
fn long_sorted_run_does_not_overflow_stack() {
    let mut vec: Vec<u32> = (0..200_000).collect();
    QuickSorter::natural().sort(&mut vec).unwrap();
    QuickSorter::hoare(u32::cmp).sort(&mut vec).unwrap();

    let mut array: DynArray<u32> = (0..200_000).rev().collect();
    array.sort();
    assert!(array.iter().copied().eq(0..200_000));
}
