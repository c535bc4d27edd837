#![cfg(feature = "set")]
//! Property-based tests for the set operations.

use proptest::prelude::*;
use slicekit::set::{are_unique, diff, intersect, unique, unique_stable};

fn sorted(mut elements: Vec<i32>) -> Vec<i32> {
    elements.sort_unstable();
    elements
}

proptest! {
    /// unique is idempotent up to order.
    #[test]
    fn prop_unique_idempotent(elements in prop::collection::vec(-20_i32..20, 0..100)) {
        let once = unique(&elements);
        let twice = unique(&once);
        prop_assert_eq!(sorted(once), sorted(twice));
    }

    #[test]
    fn prop_unique_output_is_unique(elements in prop::collection::vec(-20_i32..20, 0..100)) {
        prop_assert!(are_unique(&unique(&elements)));
    }

    #[test]
    fn prop_unique_stable_is_unique_in_order(elements in prop::collection::vec(-20_i32..20, 0..100)) {
        let stable = unique_stable(&elements);
        prop_assert_eq!(sorted(stable.clone()), sorted(unique(&elements)));

        let mut expected = Vec::new();
        for element in &elements {
            if !expected.contains(element) {
                expected.push(*element);
            }
        }
        prop_assert_eq!(stable, expected);
    }

    /// Swapping the arguments of diff swaps added and removed.
    #[test]
    fn prop_diff_symmetry(
        before in prop::collection::vec(0_i32..10, 0..50),
        after in prop::collection::vec(0_i32..10, 0..50)
    ) {
        let forward = diff(&before, &after);
        let backward = diff(&after, &before);
        prop_assert_eq!(&forward.added, &backward.removed);
        prop_assert_eq!(&forward.removed, &backward.added);
        prop_assert_eq!(forward.invert(), backward);
    }

    /// Removing `removed` from `before` and adding `added` yields `after` as
    /// a multiset.
    #[test]
    fn prop_diff_reconstructs_after(
        before in prop::collection::vec(0_i32..10, 0..50),
        after in prop::collection::vec(0_i32..10, 0..50)
    ) {
        let difference = diff(&before, &after);
        let mut rebuilt = before.clone();
        for element in &difference.removed {
            let position = rebuilt.iter().position(|candidate| candidate == element);
            prop_assert!(position.is_some());
            if let Some(position) = position {
                rebuilt.remove(position);
            }
        }
        rebuilt.extend(difference.added);
        prop_assert_eq!(sorted(rebuilt), sorted(after));
    }

    #[test]
    fn prop_diff_with_self_is_empty(elements in prop::collection::vec(any::<i32>(), 0..50)) {
        prop_assert!(diff(&elements, &elements).is_empty());
    }

    #[test]
    fn prop_intersect_members_occur_everywhere(
        first in prop::collection::vec(0_i32..10, 0..30),
        second in prop::collection::vec(0_i32..10, 0..30)
    ) {
        let common = intersect(&first, &[second.as_slice()]);
        prop_assert!(are_unique(&common));
        for element in &common {
            prop_assert!(first.contains(element));
            prop_assert!(second.contains(element));
        }
    }
}
