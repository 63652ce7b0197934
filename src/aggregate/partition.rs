//! Splitting an `Either` stream between two downstream aggregators.

use super::{Aggregator, Characteristics};
use crate::{Either, Pair};

/// Routes `Left` payloads to one aggregator and `Right` payloads to another.
///
/// The state is a [`Pair`] of the two downstream states and the output is a
/// [`Pair`] of the two downstream outputs. Created by [`grouping_to`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PartitioningAggregator<A, B> {
    left: A,
    right: B,
}

/// Aggregate `Left` payloads with `left` and `Right` payloads with `right`.
///
/// The declared characteristics are those shared by both downstreams.
///
/// # Example
///
/// ```rust
/// use routine::aggregate::{aggregate_split, grouping_to, to_set, to_vec};
/// use routine::Either;
///
/// let words = vec![
///     Either::left(3),
///     Either::right("three"),
///     Either::left(3),
///     Either::right("four"),
/// ];
///
/// let result = aggregate_split(words, 3, &grouping_to(to_set(), to_vec()));
/// assert_eq!(result.left().len(), 1);
/// assert_eq!(result.right(), &vec!["three", "four"]);
/// ```
pub fn grouping_to<A, B>(left: A, right: B) -> PartitioningAggregator<A, B> {
    PartitioningAggregator { left, right }
}

impl<A, B> PartitioningAggregator<A, B> {
    /// The aggregator receiving `Left` payloads.
    pub fn left(&self) -> &A {
        &self.left
    }

    /// The aggregator receiving `Right` payloads.
    pub fn right(&self) -> &B {
        &self.right
    }

    /// Consume into the two downstream aggregators.
    pub fn into_parts(self) -> (A, B) {
        (self.left, self.right)
    }
}

impl<L, R, A, B> Aggregator<Either<L, R>> for PartitioningAggregator<A, B>
where
    A: Aggregator<L>,
    B: Aggregator<R>,
{
    type State = Pair<A::State, B::State>;
    type Output = Pair<A::Output, B::Output>;

    fn init(&self) -> Self::State {
        Pair::new(self.left.init(), self.right.init())
    }

    fn accumulate(&self, state: &mut Self::State, item: Either<L, R>) {
        match item {
            Either::Left(value) => self.left.accumulate(&mut state.left, value),
            Either::Right(value) => self.right.accumulate(&mut state.right, value),
        }
    }

    fn combine(&self, left: Self::State, right: Self::State) -> Self::State {
        Pair::new(
            self.left.combine(left.left, right.left),
            self.right.combine(left.right, right.right),
        )
    }

    fn finish(&self, state: Self::State) -> Self::Output {
        Pair::new(self.left.finish(state.left), self.right.finish(state.right))
    }

    fn characteristics(&self) -> Characteristics {
        self.left
            .characteristics()
            .intersection(self.right.characteristics())
    }
}
