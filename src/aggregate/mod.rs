//! Composable aggregation strategies.
//!
//! An [`Aggregator`] describes how to reduce a sequence of `T` into a result
//! without deciding *how* the sequence is driven. It exposes four steps:
//!
//! - `init` creates an empty intermediate state
//! - `accumulate` folds one element into a state
//! - `combine` merges two states built from disjoint parts of the input
//! - `finish` turns the final state into the output
//!
//! plus a [`Characteristics`] set describing what the strategy guarantees.
//!
//! Because states can be merged, the same aggregator works for one sequential
//! pass ([`aggregate`]), a split/merge pass ([`aggregate_split`]) and a rayon
//! parallel pass (`par_aggregate`, behind the `rayon` feature). The driver owns
//! every state it creates and hands it to exactly one call at a time.
//!
//! # Partitioning `Either` streams
//!
//! [`grouping_to`] routes the payload of each [`Either`](crate::Either) to one of
//! two downstream aggregators and finishes both into a [`Pair`](crate::Pair):
//!
//! ```rust
//! use routine::aggregate::{counting, grouping_to, to_vec, AggregateExt};
//! use routine::{Either, Pair};
//!
//! let items = vec![
//!     Either::left(1),
//!     Either::right("a"),
//!     Either::left(2),
//!     Either::right("b"),
//! ];
//!
//! let lists = items.clone().into_iter().aggregate(&grouping_to(to_vec(), to_vec()));
//! assert_eq!(lists, Pair::new(vec![1, 2], vec!["a", "b"]));
//!
//! let mixed = items.into_iter().aggregate(&grouping_to(to_vec(), counting()));
//! assert_eq!(mixed, Pair::new(vec![1, 2], 2));
//! ```

mod characteristics;
mod collection;
mod combinators;
#[cfg(any(test, feature = "rayon"))]
mod parallel;
mod partition;
#[cfg(feature = "tracing")]
pub mod tracing;

pub use characteristics::{Characteristic, Characteristics};
pub use collection::{
    counting, monoid, to_btree_set, to_collection, to_set, to_unmodifiable_set, to_vec, Counting,
    MonoidAggregator, ToBTreeSet, ToCollection, ToSet, ToUnmodifiableSet, ToVec,
};
pub use combinators::{and_then, from_fn, mapping, AndThen, FnAggregator, Mapping};
#[cfg(any(test, feature = "rayon"))]
pub use parallel::par_aggregate;
pub use partition::{grouping_to, PartitioningAggregator};

/// A strategy for reducing a sequence of `T` into an `Output`.
///
/// # Contract
///
/// - `combine` must be associative, and `combine(init(), s)` must be
///   equivalent to `s`. States are merged left to right in input order, so
///   order-sensitive strategies stay correct under any split.
/// - `characteristics` may only claim what the strategy actually guarantees.
///
/// # Example
///
/// ```rust
/// use routine::aggregate::{aggregate, Aggregator, Characteristic, Characteristics};
///
/// /// Longest string seen so far.
/// struct Longest;
///
/// impl Aggregator<String> for Longest {
///     type State = Option<String>;
///     type Output = Option<String>;
///
///     fn init(&self) -> Self::State {
///         None
///     }
///
///     fn accumulate(&self, state: &mut Self::State, item: String) {
///         if state.as_ref().map_or(true, |s| item.len() > s.len()) {
///             *state = Some(item);
///         }
///     }
///
///     fn combine(&self, left: Self::State, right: Self::State) -> Self::State {
///         match (left, right) {
///             (Some(l), Some(r)) if r.len() > l.len() => Some(r),
///             (Some(l), _) => Some(l),
///             (None, r) => r,
///         }
///     }
///
///     fn finish(&self, state: Self::State) -> Self::Output {
///         state
///     }
///
///     fn characteristics(&self) -> Characteristics {
///         Characteristic::IdentityFinish.into()
///     }
/// }
///
/// let words = ["a", "abc", "ab"].map(String::from);
/// assert_eq!(aggregate(words, &Longest), Some("abc".to_string()));
/// ```
pub trait Aggregator<T> {
    /// Intermediate state of one partial run.
    type State;
    /// Final result.
    type Output;

    /// Create an empty state.
    fn init(&self) -> Self::State;

    /// Fold one element into `state`.
    fn accumulate(&self, state: &mut Self::State, item: T);

    /// Merge two states; `left` holds elements that came before `right`'s.
    fn combine(&self, left: Self::State, right: Self::State) -> Self::State;

    /// Turn the final state into the output.
    fn finish(&self, state: Self::State) -> Self::Output;

    /// What this strategy guarantees. Defaults to nothing.
    fn characteristics(&self) -> Characteristics {
        Characteristics::NONE
    }
}

impl<T, A> Aggregator<T> for &A
where
    A: Aggregator<T> + ?Sized,
{
    type State = A::State;
    type Output = A::Output;

    #[inline]
    fn init(&self) -> Self::State {
        (**self).init()
    }

    #[inline]
    fn accumulate(&self, state: &mut Self::State, item: T) {
        (**self).accumulate(state, item)
    }

    #[inline]
    fn combine(&self, left: Self::State, right: Self::State) -> Self::State {
        (**self).combine(left, right)
    }

    #[inline]
    fn finish(&self, state: Self::State) -> Self::Output {
        (**self).finish(state)
    }

    fn characteristics(&self) -> Characteristics {
        (**self).characteristics()
    }
}

/// Run `aggregator` over `iter` in a single sequential pass.
///
/// # Example
///
/// ```rust
/// use routine::aggregate::{aggregate, to_vec};
///
/// assert_eq!(aggregate(1..=3, &to_vec()), vec![1, 2, 3]);
/// ```
pub fn aggregate<T, I, A>(iter: I, aggregator: &A) -> A::Output
where
    I: IntoIterator<Item = T>,
    A: Aggregator<T> + ?Sized,
{
    let mut state = aggregator.init();
    for item in iter {
        aggregator.accumulate(&mut state, item);
    }
    aggregator.finish(state)
}

/// Run `aggregator` by splitting `iter` into chunks of `chunk_size`.
///
/// Each chunk is accumulated into its own state, then neighbouring states are
/// merged pairwise until one remains. This is the fan-out/fan-in shape of a
/// parallel reduction, executed on the current thread. A `chunk_size` of `0`
/// is treated as `1`.
///
/// # Example
///
/// ```rust
/// use routine::aggregate::{aggregate_split, to_vec};
///
/// assert_eq!(aggregate_split(1..=5, 2, &to_vec()), vec![1, 2, 3, 4, 5]);
/// ```
pub fn aggregate_split<T, I, A>(iter: I, chunk_size: usize, aggregator: &A) -> A::Output
where
    I: IntoIterator<Item = T>,
    A: Aggregator<T> + ?Sized,
{
    let chunk_size = chunk_size.max(1);
    let mut iter = iter.into_iter().peekable();
    let mut states = Vec::new();

    while iter.peek().is_some() {
        let mut state = aggregator.init();
        for item in iter.by_ref().take(chunk_size) {
            aggregator.accumulate(&mut state, item);
        }
        states.push(state);
    }

    aggregator.finish(combine_all::<T, A>(aggregator, states))
}

/// Merge states pairwise, preserving their order.
///
/// Returns `aggregator.init()` when `states` is empty.
pub fn combine_all<T, A>(aggregator: &A, mut states: Vec<A::State>) -> A::State
where
    A: Aggregator<T> + ?Sized,
{
    while states.len() > 1 {
        let mut merged = Vec::with_capacity(states.len().div_ceil(2));
        let mut drain = states.into_iter();
        while let Some(left) = drain.next() {
            merged.push(match drain.next() {
                Some(right) => aggregator.combine(left, right),
                None => left,
            });
        }
        states = merged;
    }

    states.pop().unwrap_or_else(|| aggregator.init())
}

/// Extension trait adding aggregation to every iterator.
///
/// # Example
///
/// ```rust
/// use routine::aggregate::{to_set, AggregateExt};
///
/// let distinct = vec![1, 1, 2].into_iter().aggregate(&to_set());
/// assert_eq!(distinct.len(), 2);
/// ```
pub trait AggregateExt: Iterator + Sized {
    /// Run `aggregator` over the remaining elements.
    fn aggregate<A>(self, aggregator: &A) -> A::Output
    where
        A: Aggregator<Self::Item> + ?Sized,
    {
        aggregate(self, aggregator)
    }
}

impl<I: Iterator> AggregateExt for I {}
