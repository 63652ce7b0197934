//! Rayon-backed parallel driver. Feature-gated behind `rayon`.

use rayon::iter::{IntoParallelIterator, ParallelIterator};

use super::Aggregator;

/// Run `aggregator` over a rayon parallel iterator.
///
/// Every rayon split accumulates into its own state (`fold`), and the partial
/// states are merged with `combine` (`reduce`). Rayon merges neighbouring
/// splits in order, so indexed sources such as `Vec` give the same result as
/// [`aggregate`](super::aggregate) even for order-sensitive strategies.
///
/// # Example
///
/// ```rust
/// use routine::aggregate::{grouping_to, par_aggregate, to_vec};
/// use routine::{Either, Pair};
///
/// let items: Vec<Either<u32, u32>> = (0..1000)
///     .map(|i| if i % 2 == 0 { Either::left(i) } else { Either::right(i) })
///     .collect();
///
/// let result = par_aggregate(items, &grouping_to(to_vec(), to_vec()));
/// assert_eq!(result.left().len(), 500);
/// assert_eq!(result.right()[..3], [1, 3, 5]);
/// ```
pub fn par_aggregate<I, A>(iter: I, aggregator: &A) -> A::Output
where
    I: IntoParallelIterator,
    A: Aggregator<I::Item> + Sync + ?Sized,
    A::State: Send,
{
    #[cfg(feature = "tracing")]
    let _span = ::tracing::debug_span!(
        "par_aggregate",
        characteristics = ?aggregator.characteristics()
    )
    .entered();

    let state = iter
        .into_par_iter()
        .fold(
            || aggregator.init(),
            |mut state, item| {
                aggregator.accumulate(&mut state, item);
                state
            },
        )
        .reduce(
            || aggregator.init(),
            |left, right| aggregator.combine(left, right),
        );

    aggregator.finish(state)
}
