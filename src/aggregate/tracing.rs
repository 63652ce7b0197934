//! Tracing support for aggregators.
//!
//! This module provides the [`Instrumented`] adapter and the `instrument`
//! method for running every aggregation step inside a tracing span.
//! Feature-gated behind `#[cfg(feature = "tracing")]`.

use ::tracing::{debug, trace, Span};

use super::{Aggregator, Characteristics};

/// An aggregator whose steps run inside a tracing span.
///
/// Created by [`AggregatorTracingExt::instrument`].
#[derive(Clone, Debug)]
pub struct Instrumented<A> {
    inner: A,
    span: Span,
}

impl<A> Instrumented<A> {
    /// Wrap `inner` so its steps run inside `span`.
    pub fn new(inner: A, span: Span) -> Self {
        Instrumented { inner, span }
    }

    /// The wrapped aggregator.
    pub fn inner(&self) -> &A {
        &self.inner
    }

    /// The span entered around each step.
    pub fn span(&self) -> &Span {
        &self.span
    }
}

impl<T, A> Aggregator<T> for Instrumented<A>
where
    A: Aggregator<T>,
{
    type State = A::State;
    type Output = A::Output;

    fn init(&self) -> A::State {
        let _enter = self.span.enter();
        debug!(characteristics = ?self.inner.characteristics(), "init");
        self.inner.init()
    }

    fn accumulate(&self, state: &mut A::State, item: T) {
        let _enter = self.span.enter();
        trace!("accumulate");
        self.inner.accumulate(state, item)
    }

    fn combine(&self, left: A::State, right: A::State) -> A::State {
        let _enter = self.span.enter();
        trace!("combine");
        self.inner.combine(left, right)
    }

    fn finish(&self, state: A::State) -> A::Output {
        let _enter = self.span.enter();
        trace!("finish");
        self.inner.finish(state)
    }

    fn characteristics(&self) -> Characteristics {
        self.inner.characteristics()
    }
}

/// Extension trait for adding tracing instrumentation to aggregators.
///
/// This trait is only available when the `tracing` feature is enabled. It is
/// implemented for aggregators only; `tracing::Instrument` offers a method of
/// the same name for every type, so import one of the two per scope.
pub trait AggregatorTracingExt<T>: Aggregator<T> + Sized {
    /// Run this aggregator's steps inside `span`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use routine::aggregate::tracing::AggregatorTracingExt;
    /// use routine::aggregate::{aggregate, grouping_to, to_vec};
    /// use routine::{Either, Pair};
    /// use tracing::debug_span;
    ///
    /// let agg = grouping_to(to_vec(), to_vec()).instrument(debug_span!("split_results"));
    /// let items = vec![Either::<i32, &str>::left(1), Either::right("oops")];
    ///
    /// assert_eq!(aggregate(items, &agg), Pair::new(vec![1], vec!["oops"]));
    /// ```
    fn instrument(self, span: Span) -> Instrumented<Self> {
        Instrumented::new(self, span)
    }
}

impl<T, A: Aggregator<T>> AggregatorTracingExt<T> for A {}
