//! Property-based tests for partitioning aggregation
//!
//! Every driver (sequential, split/merge, scoped threads, rayon) must agree
//! with aggregating the filtered left and right subsequences separately.

use proptest::prelude::*;
use routine::aggregate::{
    aggregate, aggregate_split, combine_all, counting, mapping, monoid, to_btree_set, to_vec,
    Aggregator,
};
use routine::either::{lefts, rights};
use routine::monoid::Sum;
use routine::{grouping_to, Either, Pair};
use std::collections::BTreeSet;
use std::thread;

fn either_strategy() -> impl Strategy<Value = Either<i64, String>> {
    prop_oneof![
        any::<i64>().prop_map(Either::left),
        "[a-c]{1,3}".prop_map(Either::right),
    ]
}

fn items_strategy() -> impl Strategy<Value = Vec<Either<i64, String>>> {
    prop::collection::vec(either_strategy(), 0..200)
}

fn expected_lists(items: &[Either<i64, String>]) -> Pair<Vec<i64>, Vec<String>> {
    Pair::new(
        lefts(items.iter().cloned()).collect(),
        rights(items.iter().cloned()).collect(),
    )
}

fn threaded_drive<A>(items: &[Either<i64, String>], workers: usize, agg: &A) -> A::Output
where
    A: Aggregator<Either<i64, String>> + Sync,
    A::State: Send,
{
    let chunk = items.len().div_ceil(workers).max(1);
    let states = thread::scope(|scope| {
        let handles: Vec<_> = items
            .chunks(chunk)
            .map(|part| {
                scope.spawn(move || {
                    let mut state = agg.init();
                    for item in part.iter().cloned() {
                        agg.accumulate(&mut state, item);
                    }
                    state
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().expect("worker panicked"))
            .collect::<Vec<_>>()
    });
    agg.finish(combine_all::<Either<i64, String>, _>(agg, states))
}

proptest! {
    #[test]
    fn prop_sequential_matches_filtered_sides(items in items_strategy()) {
        let result = aggregate(items.clone(), &grouping_to(to_vec(), to_vec()));
        prop_assert_eq!(result, expected_lists(&items));
    }

    #[test]
    fn prop_split_matches_sequential(items in items_strategy(), chunk in 0usize..40) {
        let agg = grouping_to(to_vec(), to_vec());
        prop_assert_eq!(aggregate_split(items.clone(), chunk, &agg), expected_lists(&items));
    }

    #[test]
    fn prop_threads_match_sequential(items in items_strategy(), workers in 1usize..6) {
        let agg = grouping_to(to_vec(), to_vec());
        prop_assert_eq!(threaded_drive(&items, workers, &agg), expected_lists(&items));
    }

    #[test]
    fn prop_mixed_downstreams(items in items_strategy(), chunk in 1usize..20) {
        let agg = grouping_to(
            mapping(|x: i64| Sum(i128::from(x)), monoid()),
            to_btree_set(),
        );
        let result = aggregate_split(items.clone(), chunk, &agg);

        let sum: i128 = lefts(items.iter().cloned()).map(i128::from).sum();
        let distinct: BTreeSet<String> = rights(items.iter().cloned()).collect();
        prop_assert_eq!(result, Pair::new(Sum(sum), distinct));
    }

    #[test]
    fn prop_counts_partition_total(items in items_strategy()) {
        let counts = aggregate(items.clone(), &grouping_to(counting(), counting()));
        prop_assert_eq!(counts.left() + counts.right(), items.len());
    }
}

#[cfg(feature = "rayon")]
mod par_driver {
    use super::*;
    use routine::aggregate::par_aggregate;

    proptest! {
        #[test]
        fn prop_par_aggregate_matches_sequential(items in items_strategy()) {
            let agg = grouping_to(to_vec(), to_vec());
            prop_assert_eq!(par_aggregate(items.clone(), &agg), expected_lists(&items));
        }
    }
}
