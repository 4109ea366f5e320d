//! Property tests for the instrumented sort variants.

use proptest::prelude::*;
use shiftbench_core::{is_sorted, max_shift_count, sort_iterative, sort_recursive};

proptest! {
    /// Both variants produce a non-decreasing permutation of the input.
    #[test]
    fn sort_output_is_sorted_permutation(input in prop::collection::vec(0u32..10_000, 0..200)) {
        let mut expected = input.clone();
        expected.sort_unstable();

        let mut a = input.clone();
        sort_iterative(&mut a).unwrap();
        prop_assert!(is_sorted(&a));
        prop_assert_eq!(&a, &expected);

        let mut b = input;
        sort_recursive(&mut b).unwrap();
        prop_assert_eq!(&b, &expected);
    }

    /// The two variants count identical shifts for the same input.
    #[test]
    fn variants_count_identically(input in prop::collection::vec(0u32..1_000, 0..200)) {
        let mut a = input.clone();
        let mut b = input;
        let iter = sort_iterative(&mut a).unwrap();
        let rec = sort_recursive(&mut b).unwrap();
        prop_assert_eq!(iter.shift_count, rec.shift_count);
    }

    /// Shift count never exceeds n * (n - 1) / 2.
    #[test]
    fn count_bounded_by_worst_case(input in prop::collection::vec(any::<u32>(), 0..200)) {
        let n = input.len();
        let mut data = input;
        let result = sort_iterative(&mut data).unwrap();
        prop_assert!(result.shift_count <= max_shift_count(n));
    }
}
