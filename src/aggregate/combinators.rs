//! Building aggregators from closures and adapting existing ones.

use std::fmt;
use std::marker::PhantomData;

use super::{Aggregator, Characteristic, Characteristics};

// ========== FnAggregator ==========

/// An aggregator assembled from four closures. Created by [`from_fn`].
pub struct FnAggregator<T, I, A, C, F> {
    init: I,
    accumulate: A,
    combine: C,
    finish: F,
    characteristics: Characteristics,
    _item: PhantomData<fn(T)>,
}

/// Build an aggregator from its four steps.
///
/// The result declares no characteristics until
/// [`with_characteristics`](FnAggregator::with_characteristics) is called.
///
/// # Example
///
/// ```rust
/// use routine::aggregate::{aggregate_split, from_fn, Aggregator, Characteristic};
///
/// let max_len = from_fn(
///     || 0usize,
///     |state: &mut usize, word: &str| *state = (*state).max(word.len()),
///     |a: usize, b: usize| a.max(b),
///     |state: usize| state,
/// )
/// .with_characteristics(Characteristic::Unordered.into());
///
/// assert_eq!(aggregate_split(["a", "abcd", "ab"], 2, &max_len), 4);
/// assert!(max_len.characteristics().contains(Characteristic::Unordered));
/// ```
pub fn from_fn<T, S, O, I, A, C, F>(
    init: I,
    accumulate: A,
    combine: C,
    finish: F,
) -> FnAggregator<T, I, A, C, F>
where
    I: Fn() -> S,
    A: Fn(&mut S, T),
    C: Fn(S, S) -> S,
    F: Fn(S) -> O,
{
    FnAggregator {
        init,
        accumulate,
        combine,
        finish,
        characteristics: Characteristics::NONE,
        _item: PhantomData,
    }
}

impl<T, I, A, C, F> FnAggregator<T, I, A, C, F> {
    /// Replace the declared characteristics.
    #[must_use]
    pub fn with_characteristics(mut self, characteristics: Characteristics) -> Self {
        self.characteristics = characteristics;
        self
    }
}

impl<T, S, O, I, A, C, F> Aggregator<T> for FnAggregator<T, I, A, C, F>
where
    I: Fn() -> S,
    A: Fn(&mut S, T),
    C: Fn(S, S) -> S,
    F: Fn(S) -> O,
{
    type State = S;
    type Output = O;

    #[inline]
    fn init(&self) -> S {
        (self.init)()
    }

    #[inline]
    fn accumulate(&self, state: &mut S, item: T) {
        (self.accumulate)(state, item)
    }

    #[inline]
    fn combine(&self, left: S, right: S) -> S {
        (self.combine)(left, right)
    }

    #[inline]
    fn finish(&self, state: S) -> O {
        (self.finish)(state)
    }

    fn characteristics(&self) -> Characteristics {
        self.characteristics
    }
}

impl<T, I: Clone, A: Clone, C: Clone, F: Clone> Clone for FnAggregator<T, I, A, C, F> {
    fn clone(&self) -> Self {
        FnAggregator {
            init: self.init.clone(),
            accumulate: self.accumulate.clone(),
            combine: self.combine.clone(),
            finish: self.finish.clone(),
            characteristics: self.characteristics,
            _item: PhantomData,
        }
    }
}

impl<T, I, A, C, F> fmt::Debug for FnAggregator<T, I, A, C, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnAggregator")
            .field("init", &"<function>")
            .field("accumulate", &"<function>")
            .field("combine", &"<function>")
            .field("finish", &"<function>")
            .field("characteristics", &self.characteristics)
            .finish()
    }
}

// ========== Mapping ==========

/// Transforms elements before handing them to a downstream aggregator.
/// Created by [`mapping`].
pub struct Mapping<U, F, A> {
    mapper: F,
    downstream: A,
    _item: PhantomData<fn(U)>,
}

/// Apply `mapper` to every element, then accumulate into `downstream`.
///
/// Keeps the downstream characteristics.
///
/// # Example
///
/// ```rust
/// use routine::aggregate::{aggregate, mapping, to_vec};
///
/// let lengths = mapping(|s: &str| s.len(), to_vec());
/// assert_eq!(aggregate(["a", "abc"], &lengths), vec![1, 3]);
/// ```
pub fn mapping<U, T, F, A>(mapper: F, downstream: A) -> Mapping<U, F, A>
where
    F: Fn(U) -> T,
    A: Aggregator<T>,
{
    Mapping {
        mapper,
        downstream,
        _item: PhantomData,
    }
}

impl<U, T, F, A> Aggregator<U> for Mapping<U, F, A>
where
    F: Fn(U) -> T,
    A: Aggregator<T>,
{
    type State = A::State;
    type Output = A::Output;

    #[inline]
    fn init(&self) -> A::State {
        self.downstream.init()
    }

    #[inline]
    fn accumulate(&self, state: &mut A::State, item: U) {
        self.downstream.accumulate(state, (self.mapper)(item))
    }

    #[inline]
    fn combine(&self, left: A::State, right: A::State) -> A::State {
        self.downstream.combine(left, right)
    }

    #[inline]
    fn finish(&self, state: A::State) -> A::Output {
        self.downstream.finish(state)
    }

    fn characteristics(&self) -> Characteristics {
        self.downstream.characteristics()
    }
}

impl<U, F: Clone, A: Clone> Clone for Mapping<U, F, A> {
    fn clone(&self) -> Self {
        Mapping {
            mapper: self.mapper.clone(),
            downstream: self.downstream.clone(),
            _item: PhantomData,
        }
    }
}

impl<U, F, A: fmt::Debug> fmt::Debug for Mapping<U, F, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mapping")
            .field("mapper", &"<function>")
            .field("downstream", &self.downstream)
            .finish()
    }
}

// ========== AndThen ==========

/// Post-processes the output of a downstream aggregator. Created by [`and_then`].
#[derive(Clone)]
pub struct AndThen<A, F> {
    downstream: A,
    finisher: F,
}

/// Run `downstream`, then transform its output with `finisher`.
///
/// The finish step is no longer the identity, so `IdentityFinish` is dropped
/// from the downstream characteristics.
///
/// # Example
///
/// ```rust
/// use routine::aggregate::{aggregate, and_then, to_vec, Aggregator, Characteristic};
///
/// let sorted = and_then(to_vec(), |mut v: Vec<i32>| {
///     v.sort();
///     v
/// });
/// assert_eq!(aggregate([3, 1, 2], &sorted), vec![1, 2, 3]);
/// assert!(!Aggregator::<i32>::characteristics(&sorted).contains(Characteristic::IdentityFinish));
/// ```
pub fn and_then<T, O, A, F>(downstream: A, finisher: F) -> AndThen<A, F>
where
    A: Aggregator<T>,
    F: Fn(A::Output) -> O,
{
    AndThen {
        downstream,
        finisher,
    }
}

impl<T, O, A, F> Aggregator<T> for AndThen<A, F>
where
    A: Aggregator<T>,
    F: Fn(A::Output) -> O,
{
    type State = A::State;
    type Output = O;

    #[inline]
    fn init(&self) -> A::State {
        self.downstream.init()
    }

    #[inline]
    fn accumulate(&self, state: &mut A::State, item: T) {
        self.downstream.accumulate(state, item)
    }

    #[inline]
    fn combine(&self, left: A::State, right: A::State) -> A::State {
        self.downstream.combine(left, right)
    }

    #[inline]
    fn finish(&self, state: A::State) -> O {
        (self.finisher)(self.downstream.finish(state))
    }

    fn characteristics(&self) -> Characteristics {
        self.downstream
            .characteristics()
            .without(Characteristic::IdentityFinish)
    }
}

impl<A: fmt::Debug, F> fmt::Debug for AndThen<A, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AndThen")
            .field("downstream", &self.downstream)
            .field("finisher", &"<function>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::{aggregate, aggregate_split, counting, to_set, to_vec};
    use Characteristic::*;

    fn summing() -> impl Aggregator<i64, State = i64, Output = i64> {
        from_fn(
            || 0i64,
            |state: &mut i64, item: i64| *state += item,
            |a: i64, b: i64| a + b,
            |state: i64| state,
        )
        .with_characteristics(Characteristics::of(&[Unordered, IdentityFinish]))
    }

    #[test]
    fn test_from_fn() {
        let agg = summing();
        assert_eq!(aggregate(1..=10, &agg), 55);
        assert_eq!(aggregate_split(1..=10, 3, &agg), 55);
        assert_eq!(aggregate(Vec::<i64>::new(), &agg), 0);
    }

    #[test]
    fn test_from_fn_characteristics() {
        let bare = from_fn(
            Vec::new,
            |state: &mut Vec<u8>, item: u8| state.push(item),
            |mut a: Vec<u8>, b: Vec<u8>| {
                a.extend(b);
                a
            },
            |state: Vec<u8>| state.len(),
        );
        assert!(bare.characteristics().is_empty());
        assert_eq!(aggregate([1u8, 2, 3], &bare), 3);

        let declared = bare.with_characteristics(Concurrent.into());
        assert_eq!(declared.characteristics(), Characteristics::from(Concurrent));
    }

    #[test]
    fn test_from_fn_debug() {
        let debug = format!("{:?}", summing_fn());
        assert!(debug.starts_with("FnAggregator"));
        assert!(debug.contains("Unordered"));
    }

    fn summing_fn() -> FnAggregator<
        i64,
        fn() -> i64,
        fn(&mut i64, i64),
        fn(i64, i64) -> i64,
        fn(i64) -> i64,
    > {
        from_fn(
            (|| 0) as fn() -> i64,
            (|state: &mut i64, item: i64| *state += item) as fn(&mut i64, i64),
            (|a: i64, b: i64| a + b) as fn(i64, i64) -> i64,
            (|state: i64| state) as fn(i64) -> i64,
        )
        .with_characteristics(Unordered.into())
    }

    #[test]
    fn test_mapping() {
        let agg = mapping(|s: &str| s.to_uppercase(), to_vec());
        assert_eq!(aggregate(["a", "b"], &agg), vec!["A", "B"]);
    }

    #[test]
    fn test_mapping_keeps_characteristics() {
        let agg = mapping(|x: i32| x % 3, to_set());
        assert_eq!(
            agg.characteristics(),
            Characteristics::of(&[Unordered, IdentityFinish])
        );
        assert_eq!(aggregate_split(0..30, 4, &agg).len(), 3);
    }

    #[test]
    fn test_and_then() {
        let agg = and_then(counting(), |n: usize| n * 10);
        assert_eq!(aggregate(["x", "y"], &agg), 20);
        assert_eq!(
            Aggregator::<&str>::characteristics(&agg),
            Characteristics::from(Unordered)
        );
    }

    #[test]
    fn test_and_then_of_mapping() {
        let agg = and_then(mapping(|x: u32| x * 2, to_vec()), |v: Vec<u32>| {
            v.into_iter().sum::<u32>()
        });
        assert_eq!(aggregate_split(1..=4, 3, &agg), 20);
        assert!(Aggregator::<u32>::characteristics(&agg).is_empty());
    }
}
