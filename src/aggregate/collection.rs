//! Built-in strategies that collect, count or monoidally reduce elements.

use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::hash::Hash;
use std::iter;
use std::marker::PhantomData;
use std::sync::Arc;

use super::{Aggregator, Characteristic, Characteristics};
use crate::Monoid;

const UNORDERED_IDENTITY: Characteristics =
    Characteristics::of(&[Characteristic::Unordered, Characteristic::IdentityFinish]);

// Zero-sized strategies typed by their element; `fn() -> T` keeps them Send + Sync.
macro_rules! element_strategy {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        pub struct $name<T>(PhantomData<fn() -> T>);

        impl<T> Clone for $name<T> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<T> Copy for $name<T> {}

        impl<T> Default for $name<T> {
            fn default() -> Self {
                $name(PhantomData)
            }
        }

        impl<T> fmt::Debug for $name<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(stringify!($name))
            }
        }
    };
}

element_strategy!(
    /// Collects into a `Vec` in encounter order. Created by [`to_vec`].
    ToVec
);
element_strategy!(
    /// Collects into a `HashSet`. Created by [`to_set`].
    ToSet
);
element_strategy!(
    /// Collects into a `BTreeSet`. Created by [`to_btree_set`].
    ToBTreeSet
);
element_strategy!(
    /// Collects into a shared, read-only `HashSet`. Created by [`to_unmodifiable_set`].
    ToUnmodifiableSet
);
element_strategy!(
    /// Counts elements. Created by [`counting`].
    Counting
);
element_strategy!(
    /// Reduces elements with their [`Monoid`] instance. Created by [`monoid`].
    MonoidAggregator
);

/// Collect into a `Vec`, keeping encounter order.
///
/// Characteristics: `IdentityFinish`.
///
/// # Example
///
/// ```rust
/// use routine::aggregate::{aggregate, to_vec};
///
/// assert_eq!(aggregate("abc".chars(), &to_vec()), vec!['a', 'b', 'c']);
/// ```
pub fn to_vec<T>() -> ToVec<T> {
    ToVec::default()
}

/// Collect into a `HashSet`.
///
/// Characteristics: `Unordered`, `IdentityFinish`.
pub fn to_set<T: Eq + Hash>() -> ToSet<T> {
    ToSet::default()
}

/// Collect into a `BTreeSet`.
///
/// Characteristics: `Unordered`, `IdentityFinish`.
pub fn to_btree_set<T: Ord>() -> ToBTreeSet<T> {
    ToBTreeSet::default()
}

/// Collect into an `Arc<HashSet<T>>`.
///
/// The finish step freezes the set, so only `Unordered` is declared.
///
/// # Example
///
/// ```rust
/// use routine::aggregate::{aggregate, to_unmodifiable_set, Aggregator, Characteristic};
///
/// let agg = to_unmodifiable_set();
/// let set = aggregate([1, 2, 2], &agg);
/// assert_eq!(set.len(), 2);
/// assert!(!Aggregator::<i32>::characteristics(&agg).contains(Characteristic::IdentityFinish));
/// ```
pub fn to_unmodifiable_set<T: Eq + Hash>() -> ToUnmodifiableSet<T> {
    ToUnmodifiableSet::default()
}

/// Count elements.
///
/// Characteristics: `Unordered`, `IdentityFinish`.
pub fn counting<T>() -> Counting<T> {
    Counting::default()
}

/// Reduce elements with [`Semigroup::combine`](crate::Semigroup::combine),
/// starting from [`Monoid::empty`].
///
/// Characteristics: `IdentityFinish`. A monoid need not be commutative, so
/// `Unordered` is not claimed.
///
/// # Example
///
/// ```rust
/// use routine::aggregate::{aggregate, monoid};
/// use routine::monoid::Sum;
///
/// assert_eq!(aggregate((1..=4).map(Sum), &monoid()), Sum(10));
/// ```
pub fn monoid<M: Monoid>() -> MonoidAggregator<M> {
    MonoidAggregator::default()
}

impl<T> Aggregator<T> for ToVec<T> {
    type State = Vec<T>;
    type Output = Vec<T>;

    fn init(&self) -> Vec<T> {
        Vec::new()
    }

    fn accumulate(&self, state: &mut Vec<T>, item: T) {
        state.push(item);
    }

    fn combine(&self, mut left: Vec<T>, right: Vec<T>) -> Vec<T> {
        left.extend(right);
        left
    }

    fn finish(&self, state: Vec<T>) -> Vec<T> {
        state
    }

    fn characteristics(&self) -> Characteristics {
        Characteristic::IdentityFinish.into()
    }
}

impl<T: Eq + Hash> Aggregator<T> for ToSet<T> {
    type State = HashSet<T>;
    type Output = HashSet<T>;

    fn init(&self) -> HashSet<T> {
        HashSet::new()
    }

    fn accumulate(&self, state: &mut HashSet<T>, item: T) {
        state.insert(item);
    }

    fn combine(&self, left: HashSet<T>, right: HashSet<T>) -> HashSet<T> {
        merge_sets(left, right)
    }

    fn finish(&self, state: HashSet<T>) -> HashSet<T> {
        state
    }

    fn characteristics(&self) -> Characteristics {
        UNORDERED_IDENTITY
    }
}

impl<T: Ord> Aggregator<T> for ToBTreeSet<T> {
    type State = BTreeSet<T>;
    type Output = BTreeSet<T>;

    fn init(&self) -> BTreeSet<T> {
        BTreeSet::new()
    }

    fn accumulate(&self, state: &mut BTreeSet<T>, item: T) {
        state.insert(item);
    }

    fn combine(&self, mut left: BTreeSet<T>, mut right: BTreeSet<T>) -> BTreeSet<T> {
        left.append(&mut right);
        left
    }

    fn finish(&self, state: BTreeSet<T>) -> BTreeSet<T> {
        state
    }

    fn characteristics(&self) -> Characteristics {
        UNORDERED_IDENTITY
    }
}

impl<T: Eq + Hash> Aggregator<T> for ToUnmodifiableSet<T> {
    type State = HashSet<T>;
    type Output = Arc<HashSet<T>>;

    fn init(&self) -> HashSet<T> {
        HashSet::new()
    }

    fn accumulate(&self, state: &mut HashSet<T>, item: T) {
        state.insert(item);
    }

    fn combine(&self, left: HashSet<T>, right: HashSet<T>) -> HashSet<T> {
        merge_sets(left, right)
    }

    fn finish(&self, state: HashSet<T>) -> Arc<HashSet<T>> {
        Arc::new(state)
    }

    fn characteristics(&self) -> Characteristics {
        Characteristic::Unordered.into()
    }
}

// Drain the smaller set into the larger one
fn merge_sets<T: Eq + Hash>(left: HashSet<T>, right: HashSet<T>) -> HashSet<T> {
    let (mut larger, smaller) = if left.len() >= right.len() {
        (left, right)
    } else {
        (right, left)
    };
    larger.extend(smaller);
    larger
}

impl<T> Aggregator<T> for Counting<T> {
    type State = usize;
    type Output = usize;

    fn init(&self) -> usize {
        0
    }

    fn accumulate(&self, state: &mut usize, _item: T) {
        *state += 1;
    }

    fn combine(&self, left: usize, right: usize) -> usize {
        left + right
    }

    fn finish(&self, state: usize) -> usize {
        state
    }

    fn characteristics(&self) -> Characteristics {
        UNORDERED_IDENTITY
    }
}

impl<M: Monoid> Aggregator<M> for MonoidAggregator<M> {
    type State = M;
    type Output = M;

    fn init(&self) -> M {
        M::empty()
    }

    fn accumulate(&self, state: &mut M, item: M) {
        let current = std::mem::replace(state, M::empty());
        *state = current.combine(item);
    }

    fn combine(&self, left: M, right: M) -> M {
        left.combine(right)
    }

    fn finish(&self, state: M) -> M {
        state
    }

    fn characteristics(&self) -> Characteristics {
        Characteristic::IdentityFinish.into()
    }
}

/// Collects into any `Default + Extend` container. Created by [`to_collection`].
pub struct ToCollection<C, T>(PhantomData<fn() -> (C, T)>);

impl<C, T> Clone for ToCollection<C, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C, T> Copy for ToCollection<C, T> {}

impl<C, T> fmt::Debug for ToCollection<C, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ToCollection")
    }
}

/// Collect into any container that can be default-constructed, extended and
/// drained into another instance of itself.
///
/// Characteristics: `IdentityFinish`.
///
/// # Example
///
/// ```rust
/// use routine::aggregate::{aggregate, to_collection};
/// use std::collections::VecDeque;
///
/// let queue: VecDeque<i32> = aggregate([3, 1, 2], &to_collection());
/// assert_eq!(queue, VecDeque::from([3, 1, 2]));
/// ```
pub fn to_collection<C, T>() -> ToCollection<C, T>
where
    C: Default + Extend<T> + IntoIterator<Item = T>,
{
    ToCollection(PhantomData)
}

impl<C, T> Aggregator<T> for ToCollection<C, T>
where
    C: Default + Extend<T> + IntoIterator<Item = T>,
{
    type State = C;
    type Output = C;

    fn init(&self) -> C {
        C::default()
    }

    fn accumulate(&self, state: &mut C, item: T) {
        state.extend(iter::once(item));
    }

    fn combine(&self, mut left: C, right: C) -> C {
        left.extend(right);
        left
    }

    fn finish(&self, state: C) -> C {
        state
    }

    fn characteristics(&self) -> Characteristics {
        Characteristic::IdentityFinish.into()
    }
}
