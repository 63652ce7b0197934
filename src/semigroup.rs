//! Associative combination of two values.
//!
//! A `Semigroup` is the merge half of an aggregation: two partial results that
//! were built independently can always be joined, and the grouping of the joins
//! does not matter. The [`monoid`](crate::aggregate::monoid) aggregation
//! strategy and [`Pair`](crate::Pair)'s component-wise instance rely on it.
//!
//! # Law
//!
//! ```text
//! a.combine(b).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```
//! use routine::Semigroup;
//!
//! assert_eq!(vec![1, 2].combine(vec![3]), vec![1, 2, 3]);
//! assert_eq!("ab".to_string().combine("c".to_string()), "abc");
//! assert_eq!((vec![1], "a".to_string()).combine((vec![2], "b".to_string())),
//!            (vec![1, 2], "ab".to_string()));
//! ```

use std::collections::{BTreeSet, HashSet};
use std::hash::Hash;

/// A type with an associative binary operation.
///
/// `combine` takes both operands by value; clone first if you need to keep them.
pub trait Semigroup: Sized {
    /// Combine this value with another value associatively.
    fn combine(self, other: Self) -> Self;
}

impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl Semigroup for String {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl<T: Eq + Hash> Semigroup for HashSet<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl<T: Ord> Semigroup for BTreeSet<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

// `None` is neutral; two `Some`s combine their contents
impl<T: Semigroup> Semigroup for Option<T> {
    #[inline]
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Some(a), Some(b)) => Some(a.combine(b)),
            (Some(a), None) => Some(a),
            (None, b) => b,
        }
    }
}

macro_rules! impl_semigroup_tuple {
    ($($idx:tt $T:ident),+) => {
        impl<$($T: Semigroup),+> Semigroup for ($($T,)+) {
            #[inline]
            fn combine(self, other: Self) -> Self {
                ($(self.$idx.combine(other.$idx),)+)
            }
        }
    };
}

impl_semigroup_tuple!(0 A, 1 B);
impl_semigroup_tuple!(0 A, 1 B, 2 C);
impl_semigroup_tuple!(0 A, 1 B, 2 C, 3 D);
