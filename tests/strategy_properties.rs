//! Property-based tests for the sorting strategies
//!
//! Uses proptest to verify invariants that should hold for all inputs.

use proptest::prelude::*;
use sort_strategy::{Ascending, Descending, SortStrategy};

const DEMO: [&str; 5] = ["a", "b", "c", "d", "e"];

fn demo_permutation() -> impl Strategy<Value = Vec<String>> {
    Just(DEMO.iter().map(|s| s.to_string()).collect::<Vec<_>>()).prop_shuffle()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Every permutation of the demo data sorts to the same ascending order
    #[test]
    fn ascending_sorts_any_permutation(mut data in demo_permutation()) {
        prop_assert_eq!(Ascending.transform(&mut data), &DEMO[..]);
    }

    /// Every permutation of the demo data sorts to the exact reverse
    #[test]
    fn descending_sorts_any_permutation(mut data in demo_permutation()) {
        prop_assert_eq!(Descending.transform(&mut data), &["e", "d", "c", "b", "a"][..]);
    }

    /// Sorting an already sorted sequence changes nothing
    #[test]
    fn ascending_is_idempotent(data in prop::collection::vec("[a-z]{0,4}", 0..32)) {
        let mut once = data.clone();
        Ascending.transform(&mut once);

        let mut twice = once.clone();
        Ascending.transform(&mut twice);

        prop_assert_eq!(once, twice);
    }

    /// Ascending followed by a reverse equals descending
    #[test]
    fn descending_is_reversed_ascending(data in prop::collection::vec("[a-z]{0,4}", 0..32)) {
        let mut asc = data.clone();
        Ascending.transform(&mut asc);
        asc.reverse();

        let mut desc = data;
        Descending.transform(&mut desc);

        prop_assert_eq!(asc, desc);
    }
}
