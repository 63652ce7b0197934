//! Semigroups with an identity element.
//!
//! A `Monoid` supplies everything an aggregation strategy needs: `empty()` is
//! the initial state of every partial run and `combine` both folds an element
//! in and merges two partial runs. That makes any monoid usable as an
//! [`Aggregator`](crate::aggregate::Aggregator) through
//! [`aggregate::monoid`](crate::aggregate::monoid).
//!
//! # Laws
//!
//! ```text
//! a.combine(M::empty()) == a      (right identity)
//! M::empty().combine(a) == a      (left identity)
//! ```
//!
//! # Numeric Monoids
//!
//! Numbers have more than one lawful instance, so they are wrapped:
//!
//! ```
//! use routine::monoid::{fold_all, Product, Sum};
//!
//! assert_eq!(fold_all(vec![Sum(1), Sum(2), Sum(3)]), Sum(6));
//! assert_eq!(fold_all(vec![Product(2), Product(5)]), Product(10));
//! ```

use crate::Semigroup;
use std::collections::{BTreeSet, HashSet};
use std::hash::Hash;
use std::ops::{Add, Mul};

/// A [`Semigroup`] with an identity element.
pub trait Monoid: Semigroup {
    /// The identity element: `a.combine(Self::empty()) == a`.
    fn empty() -> Self;
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Vec::new()
    }
}

impl Monoid for String {
    fn empty() -> Self {
        String::new()
    }
}

impl<T: Eq + Hash> Monoid for HashSet<T> {
    fn empty() -> Self {
        HashSet::new()
    }
}

impl<T: Ord> Monoid for BTreeSet<T> {
    fn empty() -> Self {
        BTreeSet::new()
    }
}

impl<T: Semigroup> Monoid for Option<T> {
    fn empty() -> Self {
        None
    }
}

macro_rules! impl_monoid_tuple {
    ($($T:ident),+) => {
        impl<$($T: Monoid),+> Monoid for ($($T,)+) {
            fn empty() -> Self {
                ($($T::empty(),)+)
            }
        }
    };
}

impl_monoid_tuple!(A, B);
impl_monoid_tuple!(A, B, C);
impl_monoid_tuple!(A, B, C, D);

/// Numbers under addition. Identity: `T::default()` (zero).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Sum<T>(pub T);

impl<T: Add<Output = T>> Semigroup for Sum<T> {
    fn combine(self, other: Self) -> Self {
        Sum(self.0 + other.0)
    }
}

impl<T: Add<Output = T> + Default> Monoid for Sum<T> {
    fn empty() -> Self {
        Sum(T::default())
    }
}

/// Numbers under multiplication. Identity: [`One::one`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Product<T>(pub T);

/// Types with a multiplicative identity.
pub trait One {
    /// Returns `1` for this type.
    fn one() -> Self;
}

macro_rules! impl_one {
    ($one:expr => $($t:ty),+) => {
        $(impl One for $t {
            fn one() -> Self {
                $one
            }
        })+
    };
}

impl_one!(1 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_one!(1.0 => f32, f64);

impl<T: Mul<Output = T>> Semigroup for Product<T> {
    fn combine(self, other: Self) -> Self {
        Product(self.0 * other.0)
    }
}

impl<T: Mul<Output = T> + One> Monoid for Product<T> {
    fn empty() -> Self {
        Product(T::one())
    }
}

/// Combine every item, starting from the identity.
///
/// Returns `M::empty()` for an empty iterator.
///
/// # Example
///
/// ```
/// use routine::monoid::fold_all;
///
/// let words = vec!["a".to_string(), "b".to_string()];
/// assert_eq!(fold_all(words), "ab");
/// assert_eq!(fold_all(Vec::<String>::new()), "");
/// ```
pub fn fold_all<M, I>(iter: I) -> M
where
    M: Monoid,
    I: IntoIterator<Item = M>,
{
    iter.into_iter().fold(M::empty(), M::combine)
}
