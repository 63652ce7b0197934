//! Testing utilities for code built on `Either`, `Pair` and aggregators.
//!
//! This module provides assertion macros for `Either` values and, behind the
//! `proptest` feature, `Arbitrary` implementations for property-based tests.
//!
//! # Examples
//!
//! ## Assertion Macros
//!
//! ```rust
//! use routine::{assert_left, assert_right, Either};
//!
//! let left = Either::<i32, String>::left(42);
//! assert_left!(left);
//!
//! let right = Either::<i32, _>::right("done".to_string());
//! assert_right!(right);
//! ```
//!
//! ## Checking partitions
//!
//! ```rust
//! use routine::aggregate::{aggregate_split, grouping_to, to_vec};
//! use routine::testing::assert_split_invariant;
//! use routine::Either;
//!
//! let items = vec![Either::<u8, char>::left(1), Either::right('x'), Either::left(2)];
//! assert_split_invariant(items, &grouping_to(to_vec(), to_vec()));
//! ```

use std::fmt::Debug;

use crate::aggregate::{aggregate, aggregate_split, Aggregator};

/// Assert that an `Either` is a `Left`.
///
/// This macro will panic if the value is a `Right`.
///
/// # Example
///
/// ```rust
/// use routine::{assert_left, Either};
///
/// assert_left!(Either::<_, ()>::left(1));
/// ```
#[macro_export]
macro_rules! assert_left {
    ($either:expr) => {
        match $either {
            $crate::Either::Left(_) => {}
            $crate::Either::Right(r) => {
                panic!("Expected Left, got Right: {:?}", r);
            }
        }
    };
}

/// Assert that an `Either` is a `Right`.
///
/// This macro will panic if the value is a `Left`.
///
/// # Example
///
/// ```rust
/// use routine::{assert_right, Either};
///
/// assert_right!(Either::<(), _>::right(1));
/// ```
#[macro_export]
macro_rules! assert_right {
    ($either:expr) => {
        match $either {
            $crate::Either::Right(_) => {}
            $crate::Either::Left(l) => {
                panic!("Expected Right, got Left: {:?}", l);
            }
        }
    };
}

/// Assert that an `Either` is a `Left` holding the expected payload.
///
/// # Example
///
/// ```rust
/// use routine::{assert_left_eq, Either};
///
/// assert_left_eq!(Either::<_, String>::left(5).map_left(|x| x + 1), 6);
/// ```
#[macro_export]
macro_rules! assert_left_eq {
    ($either:expr, $expected:expr) => {
        match $either {
            $crate::Either::Left(value) => {
                assert_eq!(value, $expected);
            }
            $crate::Either::Right(r) => {
                panic!("Expected Left({:?}), got Right: {:?}", $expected, r);
            }
        }
    };
}

/// Assert that an `Either` is a `Right` holding the expected payload.
///
/// # Example
///
/// ```rust
/// use routine::{assert_right_eq, Either};
///
/// assert_right_eq!(Either::<i32, _>::right("x").map_right(|s| s.len()), 1);
/// ```
#[macro_export]
macro_rules! assert_right_eq {
    ($either:expr, $expected:expr) => {
        match $either {
            $crate::Either::Right(value) => {
                assert_eq!(value, $expected);
            }
            $crate::Either::Left(l) => {
                panic!("Expected Right({:?}), got Left: {:?}", $expected, l);
            }
        }
    };
}

/// Assert that an aggregator gives the same result sequentially and under
/// every split/merge chunking of `items`.
///
/// Chunk sizes from `1` to `items.len()` are tried, which exercises `combine`
/// on every possible first boundary.
///
/// # Panics
///
/// Panics with both results if any chunking disagrees with the sequential run.
pub fn assert_split_invariant<T, A>(items: Vec<T>, aggregator: &A)
where
    T: Clone,
    A: Aggregator<T> + ?Sized,
    A::Output: PartialEq + Debug,
{
    let expected = aggregate(items.clone(), aggregator);
    for chunk in 1..=items.len().max(1) {
        let actual = aggregate_split(items.clone(), chunk, aggregator);
        assert_eq!(
            actual, expected,
            "split aggregation with chunk size {chunk} diverged from sequential"
        );
    }
}

#[cfg(any(test, feature = "proptest"))]
use crate::{Either, Pair};
#[cfg(any(test, feature = "proptest"))]
use proptest::prelude::*;

#[cfg(any(test, feature = "proptest"))]
impl<L, R> Arbitrary for Either<L, R>
where
    L: Arbitrary + 'static,
    R: Arbitrary + 'static,
{
    type Parameters = (L::Parameters, R::Parameters);
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        let (l_params, r_params) = args;
        prop_oneof![
            any_with::<L>(l_params).prop_map(Either::left),
            any_with::<R>(r_params).prop_map(Either::right),
        ]
        .boxed()
    }
}

#[cfg(any(test, feature = "proptest"))]
impl<L, R> Arbitrary for Pair<L, R>
where
    L: Arbitrary + 'static,
    R: Arbitrary + 'static,
{
    type Parameters = (L::Parameters, R::Parameters);
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        let (l_params, r_params) = args;
        (any_with::<L>(l_params), any_with::<R>(r_params))
            .prop_map(|(left, right)| Pair::new(left, right))
            .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::{counting, grouping_to, monoid, to_vec};
    use crate::Either;

    #[test]
    fn assert_left_macro() {
        let val = Either::<_, String>::left(42);
        assert_left!(val);
    }

    #[test]
    fn assert_right_macro() {
        let val = Either::<i32, _>::right("ok".to_string());
        assert_right!(val);
    }

    #[test]
    fn assert_payload_macros() {
        assert_left_eq!(Either::<_, ()>::left(vec![1, 2]), vec![1, 2]);
        assert_right_eq!(Either::<(), _>::right("r"), "r");
    }

    #[test]
    #[should_panic(expected = "Expected Left, got Right")]
    fn assert_left_panics_on_right() {
        let val = Either::<i32, _>::right("oops".to_string());
        assert_left!(val);
    }

    #[test]
    #[should_panic(expected = "Expected Right, got Left")]
    fn assert_right_panics_on_left() {
        let val = Either::<_, String>::left(42);
        assert_right!(val);
    }

    #[test]
    #[should_panic(expected = "Expected Left(1), got Right")]
    fn assert_left_eq_panics_on_right() {
        assert_left_eq!(Either::<i32, &str>::right("r"), 1);
    }

    #[test]
    fn split_invariant_holds_for_builtins() {
        let items: Vec<Either<i32, &str>> = vec![
            Either::left(1),
            Either::right("a"),
            Either::right("b"),
            Either::left(2),
        ];
        assert_split_invariant(items.clone(), &grouping_to(to_vec(), to_vec()));
        assert_split_invariant(items, &grouping_to(counting(), counting()));
        assert_split_invariant(Vec::<String>::new(), &monoid());
    }

    mod proptest_tests {
        use super::*;
        use crate::aggregate::aggregate;
        use crate::Pair;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn either_arbitrary_generates_valid_instances(
                val in any::<Either<i32, String>>()
            ) {
                match &val {
                    Either::Left(_) => prop_assert!(val.is_left()),
                    Either::Right(_) => prop_assert!(val.is_right()),
                }
            }

            #[test]
            fn pair_arbitrary_flip_roundtrip(p in any::<Pair<u8, bool>>()) {
                prop_assert_eq!(p.flip().flip(), p);
            }

            #[test]
            fn arbitrary_eithers_partition_cleanly(
                items in prop::collection::vec(any::<Either<u16, bool>>(), 0..50)
            ) {
                let result = aggregate(items.clone(), &grouping_to(to_vec(), to_vec()));
                prop_assert_eq!(result.left().len() + result.right().len(), items.len());
            }

            #[test]
            fn arbitrary_pair_flip_swaps_sides(p in any::<Pair<i8, String>>()) {
                prop_assert_eq!(p.clone().flip().into_right(), p.into_left());
            }
        }
    }
}
