use std::collections::BTreeMap;

use proptest::prelude::*;
use tictac::{longest_runs, merge_max, RunLengths};

fn map(pairs: &[(i32, usize)]) -> RunLengths<i32> {
    pairs.iter().copied().collect()
}

#[test]
fn test_longest_runs_examples() {
    assert_eq!(longest_runs(Vec::<i32>::new()), map(&[]));
    assert_eq!(longest_runs(vec![1]), map(&[(1, 1)]));
    assert_eq!(longest_runs(vec![1, 1, 1]), map(&[(1, 3)]));
    assert_eq!(
        longest_runs(vec![1, 1, 1, 2, 1, 1, 2, 2, 2, 1, 1]),
        map(&[(1, 3), (2, 3)])
    );
    assert_eq!(
        longest_runs(vec![1, 2, 3, 4, 5]),
        map(&[(1, 1), (2, 1), (3, 1), (4, 1), (5, 1)])
    );
    assert_eq!(
        longest_runs(vec![1, 2, 3, 4, 5, 1, 1, 1, 1]),
        map(&[(1, 4), (2, 1), (3, 1), (4, 1), (5, 1)])
    );
}

#[test]
fn test_non_adjacent_values_do_not_combine() {
    assert_eq!(longest_runs(vec![7, 0, 7, 0, 7]), map(&[(0, 1), (7, 1)]));
}

#[test]
fn test_merge_max_examples() {
    assert_eq!(merge_max(map(&[]), map(&[])), map(&[]));
    assert_eq!(merge_max(map(&[(1, 1)]), map(&[])), map(&[(1, 1)]));
    assert_eq!(merge_max(map(&[]), map(&[(1, 1)])), map(&[(1, 1)]));
    assert_eq!(merge_max(map(&[(1, 2)]), map(&[(1, 1)])), map(&[(1, 2)]));
    assert_eq!(
        merge_max(map(&[(1, 2), (2, 3)]), map(&[(1, 1), (3, 2)])),
        map(&[(1, 2), (2, 3), (3, 2)])
    );
    assert_eq!(
        merge_max(map(&[(1, 2), (2, 3), (4, 5)]), map(&[(1, 1), (3, 2), (4, 6)])),
        map(&[(1, 2), (2, 3), (3, 2), (4, 6)])
    );
}

/// Quadratic reference: for every start, count how far the value repeats.
fn naive_runs(values: &[u8]) -> BTreeMap<u8, usize> {
    let mut out = BTreeMap::new();
    for start in 0..values.len() {
        let len = values[start..]
            .iter()
            .take_while(|&&v| v == values[start])
            .count();
        let best = out.entry(values[start]).or_insert(0);
        *best = (*best).max(len);
    }
    out
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn longest_runs_matches_reference(values in prop::collection::vec(0u8..3, 0..40)) {
        prop_assert_eq!(longest_runs(values.iter().copied()), naive_runs(&values));
    }

    #[test]
    fn merge_max_is_commutative(
        a in prop::collection::btree_map(0u8..6, 0usize..10, 0..6),
        b in prop::collection::btree_map(0u8..6, 0usize..10, 0..6),
    ) {
        let ab = merge_max(a.clone(), b.clone());
        prop_assert_eq!(&ab, &merge_max(b.clone(), a.clone()));
        for (k, v) in a.iter().chain(b.iter()) {
            prop_assert!(ab[k] >= *v);
        }
    }
}
