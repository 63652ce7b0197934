//! An exclusive sum type: exactly one of two possible values.
//!
//! # Either vs Result
//!
//! `Either<L, R>` carries no success/failure meaning. Neither variant is the
//! "happy path", so every operation comes in a two-sided form (`map`,
//! `flat_map`, `fold`, `peek`) plus explicit one-sided forms (`map_left`,
//! `map_right`, ...). Use `Result` when one side is an error and you want `?`.
//!
//! # Exhaustiveness
//!
//! `Either` is a closed enum. Every operation below is a `match` with one arm
//! per variant and no wildcard, so the compiler checks that both branches are
//! handled everywhere.
//!
//! # Examples
//!
//! ```rust
//! use routine::Either;
//!
//! fn source(from_cache: bool) -> Either<String, i32> {
//!     if from_cache {
//!         Either::left("cached".to_string())
//!     } else {
//!         Either::right(42)
//!     }
//! }
//!
//! let description = source(true).fold(
//!     |cached| format!("from cache: {}", cached),
//!     |fresh| format!("fresh value: {}", fresh),
//! );
//! assert_eq!(description, "from cache: cached");
//! ```

use crate::aggregate::{aggregate, grouping_to, to_vec};
use crate::error::require_present;
use crate::{NullValueError, Pair};

/// A value that is either `Left(L)` or `Right(R)`, never both, never neither.
///
/// The type parameter of the variant that is not held is phantom: a
/// `Left(1)` is an `Either<i32, R>` for any `R`.
///
/// # Example
///
/// ```rust
/// use routine::Either;
///
/// let left: Either<i32, &str> = Either::left(5);
/// let right: Either<i32, &str> = Either::right("x");
///
/// assert_eq!(left.map(|x| x + 1, |s| s), Either::left(6));
/// assert_eq!(right.map(|x| x + 1, |s| format!("{s}!")), Either::right("x!".to_string()));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Either<L, R> {
    /// The left variant
    Left(L),
    /// The right variant
    Right(R),
}

impl<L, R> Either<L, R> {
    // ========== Constructors ==========

    /// Create a Left value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use routine::Either;
    ///
    /// let e: Either<i32, &str> = Either::left(42);
    /// assert!(e.is_left());
    /// ```
    #[inline]
    pub fn left(value: L) -> Self {
        Either::Left(value)
    }

    /// Create a Right value.
    #[inline]
    pub fn right(value: R) -> Self {
        Either::Right(value)
    }

    /// Create a Left value from an optional payload.
    ///
    /// # Example
    ///
    /// ```rust
    /// use routine::{Either, NullValueError};
    ///
    /// assert_eq!(Either::<i32, ()>::try_left(Some(1)), Ok(Either::left(1)));
    /// assert_eq!(Either::<i32, ()>::try_left(None), Err(NullValueError::new("value")));
    /// ```
    #[inline]
    pub fn try_left(value: Option<L>) -> Result<Self, NullValueError> {
        NullValueError::check(value, "value").map(Either::Left)
    }

    /// Create a Right value from an optional payload.
    #[inline]
    pub fn try_right(value: Option<R>) -> Result<Self, NullValueError> {
        NullValueError::check(value, "value").map(Either::Right)
    }

    /// Create a Left value, failing fast on an absent payload.
    ///
    /// # Panics
    ///
    /// Panics with the [`NullValueError`] message if `value` is `None`.
    #[inline]
    #[track_caller]
    pub fn require_left(value: Option<L>) -> Self {
        Either::Left(require_present(value, "value"))
    }

    /// Create a Right value, failing fast on an absent payload.
    ///
    /// # Panics
    ///
    /// Panics with the [`NullValueError`] message if `value` is `None`.
    #[inline]
    #[track_caller]
    pub fn require_right(value: Option<R>) -> Self {
        Either::Right(require_present(value, "value"))
    }

    // ========== Predicates ==========

    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub fn is_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub fn is_right(&self) -> bool {
        matches!(self, Either::Right(_))
    }

    // ========== Extractors ==========

    /// Returns the left value if present, consuming self.
    ///
    /// A `Right` yields `None`; this never panics.
    ///
    /// # Example
    ///
    /// ```rust
    /// use routine::Either;
    ///
    /// assert_eq!(Either::<i32, &str>::left(42).into_left(), Some(42));
    /// assert_eq!(Either::<i32, &str>::right("hello").into_left(), None);
    /// ```
    #[inline]
    pub fn into_left(self) -> Option<L> {
        match self {
            Either::Left(l) => Some(l),
            Either::Right(_) => None,
        }
    }

    /// Returns the right value if present, consuming self.
    #[inline]
    pub fn into_right(self) -> Option<R> {
        match self {
            Either::Left(_) => None,
            Either::Right(r) => Some(r),
        }
    }

    /// Borrow the left value if present.
    #[inline]
    pub fn left_ref(&self) -> Option<&L> {
        self.as_ref().into_left()
    }

    /// Borrow the right value if present.
    #[inline]
    pub fn right_ref(&self) -> Option<&R> {
        self.as_ref().into_right()
    }

    /// Convert to `Either<&L, &R>`.
    #[inline]
    pub fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(r),
        }
    }

    /// Convert to `Either<&mut L, &mut R>`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use routine::Either;
    ///
    /// let mut e: Either<i32, String> = Either::left(42);
    /// if let Either::Left(l) = e.as_mut() {
    ///     *l = 100;
    /// }
    /// assert_eq!(e, Either::left(100));
    /// ```
    #[inline]
    pub fn as_mut(&mut self) -> Either<&mut L, &mut R> {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(r),
        }
    }

    /// Extract the left value, panicking if Right.
    ///
    /// # Panics
    ///
    /// Panics if the value is a `Right`.
    #[inline]
    #[track_caller]
    pub fn unwrap_left(self) -> L {
        match self {
            Either::Left(l) => l,
            Either::Right(_) => panic!("called `Either::unwrap_left()` on a `Right` value"),
        }
    }

    /// Extract the right value, panicking if Left.
    ///
    /// # Panics
    ///
    /// Panics if the value is a `Left`.
    #[inline]
    #[track_caller]
    pub fn unwrap_right(self) -> R {
        match self {
            Either::Left(_) => panic!("called `Either::unwrap_right()` on a `Left` value"),
            Either::Right(r) => r,
        }
    }

    /// Return the left value or a default.
    #[inline]
    pub fn left_or(self, default: L) -> L {
        self.fold(|l| l, |_| default)
    }

    /// Return the right value or a default.
    #[inline]
    pub fn right_or(self, default: R) -> R {
        self.fold(|_| default, |r| r)
    }

    /// Return the left value or compute it from the right.
    ///
    /// # Example
    ///
    /// ```rust
    /// use routine::Either;
    ///
    /// let right: Either<usize, &str> = Either::right("hello");
    /// assert_eq!(right.left_or_else(str::len), 5);
    /// ```
    #[inline]
    pub fn left_or_else<F>(self, f: F) -> L
    where
        F: FnOnce(R) -> L,
    {
        self.fold(|l| l, f)
    }

    /// Return the right value or compute it from the left.
    #[inline]
    pub fn right_or_else<F>(self, f: F) -> R
    where
        F: FnOnce(L) -> R,
    {
        self.fold(f, |r| r)
    }

    // ========== Transformations ==========

    /// Transform whichever value is present.
    ///
    /// # Example
    ///
    /// ```rust
    /// use routine::Either;
    ///
    /// let left: Either<i32, &str> = Either::left(1);
    /// let right: Either<i32, &str> = Either::right("hello");
    ///
    /// assert_eq!(left.map(|x| x + 1, str::len), Either::left(2));
    /// assert_eq!(right.map(|x| x + 1, str::len), Either::right(5));
    /// ```
    #[inline]
    pub fn map<NL, NR, F, G>(self, left_fn: F, right_fn: G) -> Either<NL, NR>
    where
        F: FnOnce(L) -> NL,
        G: FnOnce(R) -> NR,
    {
        match self {
            Either::Left(l) => Either::Left(left_fn(l)),
            Either::Right(r) => Either::Right(right_fn(r)),
        }
    }

    /// Transform the left value, passing a right value through unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use routine::Either;
    ///
    /// let left: Either<i32, &str> = Either::left(21);
    /// let right: Either<i32, &str> = Either::right("hello");
    ///
    /// assert_eq!(left.map_left(|x| x * 2), Either::left(42));
    /// assert_eq!(right.map_left(|x| x * 2), Either::right("hello"));
    /// ```
    #[inline]
    pub fn map_left<NL, F>(self, f: F) -> Either<NL, R>
    where
        F: FnOnce(L) -> NL,
    {
        match self {
            Either::Left(l) => Either::Left(f(l)),
            Either::Right(r) => Either::Right(r),
        }
    }

    /// Transform the right value, passing a left value through unchanged.
    #[inline]
    pub fn map_right<NR, F>(self, f: F) -> Either<L, NR>
    where
        F: FnOnce(R) -> NR,
    {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(f(r)),
        }
    }

    /// Chain a computation on whichever value is present.
    ///
    /// The `Either` returned by the matching function is the result; it is not
    /// wrapped again.
    ///
    /// # Example
    ///
    /// ```rust
    /// use routine::Either;
    ///
    /// let e: Either<i32, String> = Either::left(-3);
    /// let checked = e.flat_map(
    ///     |n| if n < 0 { Either::right(format!("negative: {n}")) } else { Either::left(n) },
    ///     |s| Either::right(s),
    /// );
    /// assert_eq!(checked, Either::right("negative: -3".to_string()));
    /// ```
    #[inline]
    pub fn flat_map<NL, NR, F, G>(self, left_fn: F, right_fn: G) -> Either<NL, NR>
    where
        F: FnOnce(L) -> Either<NL, NR>,
        G: FnOnce(R) -> Either<NL, NR>,
    {
        match self {
            Either::Left(l) => left_fn(l),
            Either::Right(r) => right_fn(r),
        }
    }

    /// Chain a computation on the left value.
    ///
    /// A right value passes through unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use routine::Either;
    ///
    /// let left: Either<i32, &str> = Either::left(1);
    /// let right: Either<i32, &str> = Either::right("ok");
    ///
    /// assert_eq!(left.flat_map_left(|_| Either::<i32, &str>::right("recovered")), Either::right("recovered"));
    /// assert_eq!(right.flat_map_left(|x| Either::<i32, &str>::left(x * 2)), Either::right("ok"));
    /// ```
    #[inline]
    pub fn flat_map_left<NL, F>(self, f: F) -> Either<NL, R>
    where
        F: FnOnce(L) -> Either<NL, R>,
    {
        match self {
            Either::Left(l) => f(l),
            Either::Right(r) => Either::Right(r),
        }
    }

    /// Chain a computation on the right value.
    ///
    /// A left value passes through unchanged.
    #[inline]
    pub fn flat_map_right<NR, F>(self, f: F) -> Either<L, NR>
    where
        F: FnOnce(R) -> Either<L, NR>,
    {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => f(r),
        }
    }

    /// Swap Left and Right, keeping the payload.
    ///
    /// # Example
    ///
    /// ```rust
    /// use routine::Either;
    ///
    /// let left: Either<i32, &str> = Either::left(42);
    /// assert_eq!(left.flip(), Either::right(42));
    /// assert_eq!(left.flip().flip(), left);
    /// ```
    #[inline]
    pub fn flip(self) -> Either<R, L> {
        self.flat_map(Either::Right, Either::Left)
    }

    // ========== Folding ==========

    /// Fold both variants into a single value.
    ///
    /// This is the elimination form every other operation can be written in.
    ///
    /// # Example
    ///
    /// ```rust
    /// use routine::Either;
    ///
    /// let left: Either<i32, &str> = Either::left(42);
    /// let right: Either<i32, &str> = Either::right("hello");
    ///
    /// assert_eq!(left.fold(|x| x.to_string(), |s| s.to_string()), "42");
    /// assert_eq!(right.fold(|x| x.to_string(), |s| s.to_string()), "hello");
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, left_fn: F, right_fn: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Either::Left(l) => left_fn(l),
            Either::Right(r) => right_fn(r),
        }
    }

    // ========== Side Effects ==========

    /// Run a callback on whichever value is present, then return `self`.
    ///
    /// Useful for logging or metrics in the middle of a chain.
    ///
    /// # Example
    ///
    /// ```rust
    /// use routine::Either;
    ///
    /// let mut seen = Vec::new();
    /// let e: Either<i32, i32> = Either::left(7);
    /// let same = e.peek(|l| seen.push(*l), |_| unreachable!());
    /// assert_eq!(same, Either::left(7));
    /// assert_eq!(seen, vec![7]);
    /// ```
    #[inline]
    pub fn peek<F, G>(self, left_fn: F, right_fn: G) -> Self
    where
        F: FnOnce(&L),
        G: FnOnce(&R),
    {
        match &self {
            Either::Left(l) => left_fn(l),
            Either::Right(r) => right_fn(r),
        }
        self
    }

    /// Run a callback on the left value, if any, then return `self`.
    #[inline]
    pub fn peek_left<F>(self, f: F) -> Self
    where
        F: FnOnce(&L),
    {
        if let Either::Left(l) = &self {
            f(l);
        }
        self
    }

    /// Run a callback on the right value, if any, then return `self`.
    #[inline]
    pub fn peek_right<F>(self, f: F) -> Self
    where
        F: FnOnce(&R),
    {
        if let Either::Right(r) = &self {
            f(r);
        }
        self
    }

    /// Hand the owned value to the matching callback.
    ///
    /// # Example
    ///
    /// ```rust
    /// use routine::Either;
    ///
    /// let (mut numbers, mut words) = (Vec::new(), Vec::new());
    /// for e in [Either::left(1), Either::right("a"), Either::left(2)] {
    ///     e.for_each(|n| numbers.push(n), |w| words.push(w));
    /// }
    /// assert_eq!(numbers, vec![1, 2]);
    /// assert_eq!(words, vec!["a"]);
    /// ```
    #[inline]
    pub fn for_each<F, G>(self, left_fn: F, right_fn: G)
    where
        F: FnOnce(L),
        G: FnOnce(R),
    {
        self.fold(left_fn, right_fn)
    }

    /// Hand the owned left value to `f`; a right value is dropped.
    #[inline]
    pub fn if_left<F>(self, f: F)
    where
        F: FnOnce(L),
    {
        self.for_each(f, |_| ())
    }

    /// Hand the owned right value to `f`; a left value is dropped.
    #[inline]
    pub fn if_right<F>(self, f: F)
    where
        F: FnOnce(R),
    {
        self.for_each(|_| (), f)
    }

    // ========== Conversions ==========

    /// Convert to Result (Right becomes Ok, Left becomes Err).
    #[inline]
    pub fn into_result(self) -> Result<R, L> {
        self.fold(Err, Ok)
    }

    /// Create from Result (Ok becomes Right, Err becomes Left).
    #[inline]
    pub fn from_result(result: Result<R, L>) -> Self {
        match result {
            Ok(r) => Either::Right(r),
            Err(l) => Either::Left(l),
        }
    }
}

impl<T> Either<T, T> {
    /// Extract the value regardless of side.
    ///
    /// # Example
    ///
    /// ```rust
    /// use routine::Either;
    ///
    /// assert_eq!(Either::<i32, i32>::right(3).into_inner(), 3);
    /// ```
    #[inline]
    pub fn into_inner(self) -> T {
        self.fold(|v| v, |v| v)
    }
}

impl<L, R> Either<L, Either<L, R>> {
    /// Flatten a nested Either.
    ///
    /// # Example
    ///
    /// ```rust
    /// use routine::Either;
    ///
    /// let nested: Either<&str, Either<&str, i32>> = Either::right(Either::left("inner"));
    /// assert_eq!(nested.flatten(), Either::left("inner"));
    /// ```
    #[inline]
    pub fn flatten(self) -> Either<L, R> {
        self.flat_map_right(|inner| inner)
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    fn from(result: Result<R, L>) -> Self {
        Either::from_result(result)
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    fn from(either: Either<L, R>) -> Self {
        either.into_result()
    }
}

// ========== Collection Utilities ==========

/// Split an iterator of Either into the left and the right values.
///
/// Order within each side is preserved.
///
/// # Example
///
/// ```rust
/// use routine::either::{partition, Either};
/// use routine::Pair;
///
/// let items = vec![
///     Either::left(1),
///     Either::right("a"),
///     Either::left(2),
///     Either::right("b"),
/// ];
///
/// assert_eq!(partition(items), Pair::new(vec![1, 2], vec!["a", "b"]));
/// ```
pub fn partition<L, R, I>(iter: I) -> Pair<Vec<L>, Vec<R>>
where
    I: IntoIterator<Item = Either<L, R>>,
{
    aggregate(iter, &grouping_to(to_vec(), to_vec()))
}

/// Lazily yield the left values of an iterator.
///
/// # Example
///
/// ```rust
/// use routine::either::{lefts, Either};
///
/// let items = vec![Either::left(1), Either::right("a"), Either::left(2)];
/// assert_eq!(lefts(items).collect::<Vec<_>>(), vec![1, 2]);
/// ```
pub fn lefts<L, R, I>(iter: I) -> impl Iterator<Item = L>
where
    I: IntoIterator<Item = Either<L, R>>,
{
    iter.into_iter().filter_map(Either::into_left)
}

/// Lazily yield the right values of an iterator.
pub fn rights<L, R, I>(iter: I) -> impl Iterator<Item = R>
where
    I: IntoIterator<Item = Either<L, R>>,
{
    iter.into_iter().filter_map(Either::into_right)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    const LEFT: &str = "_left";
    const RIGHT: &str = "_right";

    fn left(value: &str) -> Either<String, String> {
        Either::left(value.to_string())
    }

    fn right(value: &str) -> Either<String, String> {
        Either::right(value.to_string())
    }

    #[test]
    fn test_constructors() {
        assert!(Either::<i32, &str>::left(42).is_left());
        assert!(Either::<i32, &str>::right("hello").is_right());
        assert!(!Either::<i32, &str>::left(42).is_right());
    }

    #[test]
    fn test_try_constructors() {
        assert_eq!(Either::<i32, i32>::try_left(Some(1)), Ok(Either::left(1)));
        assert_eq!(Either::<i32, i32>::try_right(Some(1)), Ok(Either::right(1)));
        assert_eq!(
            Either::<i32, i32>::try_left(None),
            Err(NullValueError::new("value"))
        );
        assert_eq!(
            Either::<i32, i32>::try_right(None),
            Err(NullValueError::new("value"))
        );
    }

    #[test]
    fn test_require_constructors() {
        assert_eq!(Either::<i32, ()>::require_left(Some(3)), Either::left(3));
        assert_eq!(Either::<(), i32>::require_right(Some(3)), Either::right(3));
    }

    #[test]
    #[should_panic(expected = "`value` must be present")]
    fn test_require_left_panics_on_none() {
        Either::<i32, ()>::require_left(None);
    }

    #[test]
    #[should_panic(expected = "`value` must be present")]
    fn test_require_right_panics_on_none() {
        Either::<(), i32>::require_right(None);
    }

    #[test]
    fn test_map() {
        assert_eq!(
            left(LEFT).map(|l| l + "_map", |r| r + "_map"),
            left("_left_map")
        );
        assert_eq!(
            right(RIGHT).map(|l| l + "_map", |r| r + "_map"),
            right("_right_map")
        );
    }

    #[test]
    fn test_map_scenario() {
        let e: Either<i32, String> = Either::left(5);
        assert_eq!(e.map(|x| x + 1, |s| s), Either::left(6));

        let e: Either<i32, String> = Either::right("x".to_string());
        assert_eq!(e.map(|x| x + 1, |s| s + "!"), Either::right("x!".to_string()));
    }

    #[test]
    fn test_map_left() {
        assert_eq!(left(LEFT).map_left(|l| l + "_map"), left("_left_map"));
        assert_eq!(right(RIGHT).map_left(|l| l + "_map"), right(RIGHT));
    }

    #[test]
    fn test_map_right() {
        assert_eq!(left(LEFT).map_right(|r| r + "_map"), left(LEFT));
        assert_eq!(right(RIGHT).map_right(|r| r + "_map"), right("_right_map"));
    }

    #[test]
    fn test_pass_through_keeps_the_same_allocation() {
        let e: Either<String, String> = left(LEFT);
        let ptr = e.left_ref().map(|s| s.as_ptr());

        let mapped: Either<String, usize> = e.map_right(|r| r.len());
        assert_eq!(mapped.left_ref().map(|s| s.as_ptr()), ptr);
    }

    #[test]
    fn test_flat_map() {
        assert_eq!(
            left(LEFT).flat_map(|l| right(&(l + "_flat")), |r| left(&(r + "_flat"))),
            right("_left_flat")
        );
        assert_eq!(
            right(RIGHT).flat_map(|l| right(&(l + "_flat")), |r| left(&(r + "_flat"))),
            left("_right_flat")
        );
    }

    #[test]
    fn test_flat_map_left() {
        assert_eq!(
            left(LEFT).flat_map_left(|l| right(&(l + "_flat"))),
            right("_left_flat")
        );
        assert_eq!(
            right(RIGHT).flat_map_left(|l| right(&(l + "_flat"))),
            right(RIGHT)
        );
    }

    #[test]
    fn test_flat_map_right() {
        assert_eq!(
            left(LEFT).flat_map_right(|r| left(&(r + "_flat"))),
            left(LEFT)
        );
        assert_eq!(
            right(RIGHT).flat_map_right(|r| left(&(r + "_flat"))),
            left("_right_flat")
        );
    }

    #[test]
    fn test_flip() {
        assert_eq!(left(LEFT).flip(), right(LEFT));
        assert_eq!(right(RIGHT).flip(), left(RIGHT));
    }

    #[test]
    fn test_fold() {
        assert_eq!(
            left(LEFT).fold(|l| l + "_fold", |r| r + "_other"),
            "_left_fold"
        );
        assert_eq!(
            right(RIGHT).fold(|l| l + "_other", |r| r + "_fold"),
            "_right_fold"
        );
    }

    #[test]
    fn test_optional_left() {
        assert_eq!(left(LEFT).into_left(), Some(LEFT.to_string()));
        assert_eq!(right(RIGHT).into_left(), None);
        assert_eq!(left(LEFT).left_ref().map(String::as_str), Some(LEFT));
    }

    #[test]
    fn test_optional_right() {
        assert_eq!(left(LEFT).into_right(), None);
        assert_eq!(right(RIGHT).into_right(), Some(RIGHT.to_string()));
        assert_eq!(right(RIGHT).right_ref().map(String::as_str), Some(RIGHT));
    }

    #[test]
    fn test_peek() {
        let calls = RefCell::new(Vec::new());
        let record = |side: &'static str| {
            let calls = &calls;
            move |value: &String| calls.borrow_mut().push(format!("{side}:{value}"))
        };

        assert_eq!(left(LEFT).peek(record("l"), record("r")), left(LEFT));
        assert_eq!(right(RIGHT).peek(record("l"), record("r")), right(RIGHT));
        assert_eq!(*calls.borrow(), vec!["l:_left", "r:_right"]);
    }

    #[test]
    fn test_peek_left() {
        let mut count = 0;
        assert_eq!(left(LEFT).peek_left(|_| count += 1), left(LEFT));
        assert_eq!(right(RIGHT).peek_left(|_| count += 1), right(RIGHT));
        assert_eq!(count, 1);
    }

    #[test]
    fn test_peek_right() {
        let mut count = 0;
        assert_eq!(left(LEFT).peek_right(|_| count += 1), left(LEFT));
        assert_eq!(right(RIGHT).peek_right(|_| count += 1), right(RIGHT));
        assert_eq!(count, 1);
    }

    #[test]
    fn test_for_each() {
        let mut seen = Vec::new();
        left(LEFT).for_each(|l| seen.push(l), |_| panic!("right called"));
        assert_eq!(seen, vec![LEFT.to_string()]);
    }

    #[test]
    fn test_if_left_and_if_right() {
        let mut lefts_seen = Vec::new();
        let mut rights_seen = Vec::new();

        for e in [left(LEFT), right(RIGHT)] {
            e.clone().if_left(|l| lefts_seen.push(l));
            e.if_right(|r| rights_seen.push(r));
        }

        assert_eq!(lefts_seen, vec![LEFT.to_string()]);
        assert_eq!(rights_seen, vec![RIGHT.to_string()]);
    }

    #[test]
    fn test_unwrap() {
        assert_eq!(Either::<i32, &str>::left(42).unwrap_left(), 42);
        assert_eq!(Either::<i32, &str>::right("x").unwrap_right(), "x");
    }

    #[test]
    #[should_panic(expected = "called `Either::unwrap_left()` on a `Right` value")]
    fn test_unwrap_left_panics() {
        Either::<i32, &str>::right("hello").unwrap_left();
    }

    #[test]
    fn test_defaults() {
        let l: Either<i32, &str> = Either::left(42);
        let r: Either<i32, &str> = Either::right("hello");

        assert_eq!(l.left_or(0), 42);
        assert_eq!(r.left_or(0), 0);
        assert_eq!(l.right_or("default"), "default");
        assert_eq!(r.right_or_else(|n| if n > 0 { "pos" } else { "neg" }), "hello");
        assert_eq!(r.left_or_else(|s| s.len() as i32), 5);
    }

    #[test]
    fn test_result_conversion() {
        let either: Either<&str, i32> = Ok(42).into();
        assert_eq!(either, Either::right(42));

        let either: Either<&str, i32> = Err("error").into();
        assert_eq!(either, Either::left("error"));

        let result: Result<i32, &str> = Either::<&str, i32>::left("error").into();
        assert_eq!(result, Err("error"));
    }

    #[test]
    fn test_into_inner() {
        assert_eq!(Either::<i32, i32>::left(1).into_inner(), 1);
        assert_eq!(Either::<i32, i32>::right(2).into_inner(), 2);
    }

    #[test]
    fn test_flatten() {
        let nested: Either<&str, Either<&str, i32>> = Either::right(Either::right(42));
        assert_eq!(nested.flatten(), Either::right(42));

        let nested: Either<&str, Either<&str, i32>> = Either::left("outer");
        assert_eq!(nested.flatten(), Either::left("outer"));
    }

    #[test]
    fn test_partition() {
        let items = vec![
            Either::left(1),
            Either::right("a"),
            Either::left(2),
            Either::right("b"),
        ];

        assert_eq!(partition(items), Pair::new(vec![1, 2], vec!["a", "b"]));
    }

    #[test]
    fn test_partition_empty() {
        let items: Vec<Either<i32, &str>> = Vec::new();
        assert_eq!(partition(items), Pair::new(vec![], vec![]));
    }

    #[test]
    fn test_lefts_and_rights() {
        let items = vec![Either::left(1), Either::right("a"), Either::right("b")];

        assert_eq!(lefts(items.clone()).collect::<Vec<_>>(), vec![1]);
        assert_eq!(rights(items).collect::<Vec<_>>(), vec!["a", "b"]);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn either_i32() -> impl Strategy<Value = Either<i32, i32>> {
        prop_oneof![
            any::<i32>().prop_map(Either::left),
            any::<i32>().prop_map(Either::right),
        ]
    }

    proptest! {
        #[test]
        fn prop_fold_identity_returns_payload(x: i32, is_left: bool) {
            let e: Either<i32, i32> = if is_left { Either::left(x) } else { Either::right(x) };
            prop_assert_eq!(e.fold(|v| v, |v| v), x);
        }

        #[test]
        fn prop_map_fold_fusion(e in either_i32()) {
            let f = |v: i32| v.wrapping_add(1);
            let g = |v: i32| v.wrapping_mul(2);
            let h = |v: i32| i64::from(v) - 1;
            let k = |v: i32| i64::from(v) * 3;

            prop_assert_eq!(
                e.map(f, g).fold(h, k),
                e.fold(|x| h(f(x)), |y| k(g(y)))
            );
        }

        #[test]
        fn prop_flip_involution(e in either_i32()) {
            prop_assert_eq!(e.flip().flip(), e);
        }

        #[test]
        fn prop_non_matching_branch_untouched(x: i32) {
            let left: Either<i32, i32> = Either::left(x);
            prop_assert_eq!(left.map_right(|v| v.wrapping_add(9)), left);
            prop_assert_eq!(left.flat_map_right(|_| Either::right(0)), left);

            let right: Either<i32, i32> = Either::right(x);
            prop_assert_eq!(right.map_left(|v| v.wrapping_add(9)), right);
            prop_assert_eq!(right.flat_map_left(|_| Either::left(0)), right);
        }

        #[test]
        fn prop_map_is_map_left_then_map_right(e in either_i32()) {
            let f = |v: i32| v.wrapping_sub(4);
            let g = |v: i32| v.wrapping_mul(5);
            prop_assert_eq!(e.map(f, g), e.map_left(f).map_right(g));
        }

        #[test]
        fn prop_flip_swaps_optional_views(e in either_i32()) {
            prop_assert_eq!(e.flip().into_left(), e.into_right());
            prop_assert_eq!(e.flip().into_right(), e.into_left());
        }

        #[test]
        fn prop_result_roundtrip(e in either_i32()) {
            let result: Result<i32, i32> = e.into();
            prop_assert_eq!(Either::from(result), e);
        }
    }
}
