//! An immutable product type holding exactly two values.
//!
//! `Pair<L, R>` always contains **both** a value of type `L` and a value of
//! type `R`. Every operation returns a new `Pair`; nothing is mutated in place.
//!
//! Unlike a bare `(L, R)` tuple, `Pair` carries a bifunctor surface
//! (`map`, `map_left`, `map_right`, `flip`, `fold`) and converts to and from
//! the `(key, value)` entries that associative containers iterate over.
//!
//! # Examples
//!
//! ```rust
//! use routine::pair::{pair, Pair};
//! use std::collections::HashMap;
//!
//! let p = pair("answer", 21).map_right(|n| n * 2);
//! assert_eq!(p, Pair::new("answer", 42));
//!
//! // Pairs are entries
//! let map: HashMap<_, _> = vec![p].into_iter().map(Pair::into_entry).collect();
//! assert_eq!(map["answer"], 42);
//! ```

use crate::{Monoid, NullValueError, Semigroup};

/// An ordered pair of two always-present values.
///
/// # Example
///
/// ```rust
/// use routine::Pair;
///
/// let p = Pair::new(1, "one");
/// assert_eq!(p.left(), &1);
/// assert_eq!(p.right(), &"one");
/// assert_eq!(p.flip(), Pair::new("one", 1));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pair<L, R> {
    pub(crate) left: L,
    pub(crate) right: R,
}

/// Create a [`Pair`]. Shorthand for [`Pair::new`].
///
/// # Example
///
/// ```rust
/// use routine::pair::{pair, Pair};
///
/// assert_eq!(pair(1, 2), Pair::new(1, 2));
/// ```
#[inline]
pub fn pair<L, R>(left: L, right: R) -> Pair<L, R> {
    Pair::new(left, right)
}

impl<L, R> Pair<L, R> {
    // ========== Constructors ==========

    /// Create a pair from its two components.
    #[inline]
    pub fn new(left: L, right: R) -> Self {
        Pair { left, right }
    }

    /// Create a pair from optional components.
    ///
    /// Fails with [`NullValueError`] naming the first absent component.
    ///
    /// # Example
    ///
    /// ```rust
    /// use routine::{NullValueError, Pair};
    ///
    /// assert_eq!(Pair::try_new(Some(1), Some(2)), Ok(Pair::new(1, 2)));
    /// assert_eq!(
    ///     Pair::<i32, i32>::try_new(Some(1), None),
    ///     Err(NullValueError::new("right"))
    /// );
    /// ```
    pub fn try_new(left: Option<L>, right: Option<R>) -> Result<Self, NullValueError> {
        let left = NullValueError::check(left, "left")?;
        let right = NullValueError::check(right, "right")?;
        Ok(Pair { left, right })
    }

    /// Create a pair from a `(key, value)` entry.
    ///
    /// The key becomes the left component and the value the right one.
    ///
    /// # Example
    ///
    /// ```rust
    /// use routine::Pair;
    /// use std::collections::BTreeMap;
    ///
    /// let map = BTreeMap::from([("a", 1), ("b", 2)]);
    /// let pairs: Vec<_> = map.into_iter().map(Pair::from_entry).collect();
    /// assert_eq!(pairs, vec![Pair::new("a", 1), Pair::new("b", 2)]);
    /// ```
    #[inline]
    pub fn from_entry((left, right): (L, R)) -> Self {
        Pair { left, right }
    }

    // ========== Accessors ==========

    /// Borrow the left component.
    #[inline]
    pub fn left(&self) -> &L {
        &self.left
    }

    /// Borrow the right component.
    #[inline]
    pub fn right(&self) -> &R {
        &self.right
    }

    /// Take the left component, dropping the right one.
    #[inline]
    pub fn into_left(self) -> L {
        self.left
    }

    /// Take the right component, dropping the left one.
    #[inline]
    pub fn into_right(self) -> R {
        self.right
    }

    /// Split the pair into a tuple.
    #[inline]
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }

    /// Convert into a `(key, value)` entry.
    ///
    /// # Example
    ///
    /// ```rust
    /// use routine::Pair;
    /// use std::collections::HashMap;
    ///
    /// let mut map = HashMap::new();
    /// map.extend([Pair::new("x", 1), Pair::new("y", 2)].map(Pair::into_entry));
    /// assert_eq!(map.len(), 2);
    /// ```
    #[inline]
    pub fn into_entry(self) -> (L, R) {
        self.into_parts()
    }

    /// Convert to `Pair<&L, &R>`.
    #[inline]
    pub fn as_ref(&self) -> Pair<&L, &R> {
        Pair {
            left: &self.left,
            right: &self.right,
        }
    }

    // ========== Transformations ==========

    /// Transform both components independently.
    ///
    /// # Example
    ///
    /// ```rust
    /// use routine::Pair;
    ///
    /// let p = Pair::new(2, "abc").map(|n| n * 10, str::len);
    /// assert_eq!(p, Pair::new(20, 3));
    /// ```
    #[inline]
    pub fn map<NL, NR, F, G>(self, left_fn: F, right_fn: G) -> Pair<NL, NR>
    where
        F: FnOnce(L) -> NL,
        G: FnOnce(R) -> NR,
    {
        Pair {
            left: left_fn(self.left),
            right: right_fn(self.right),
        }
    }

    /// Transform the left component, keeping the right one.
    #[inline]
    pub fn map_left<NL, F>(self, f: F) -> Pair<NL, R>
    where
        F: FnOnce(L) -> NL,
    {
        Pair {
            left: f(self.left),
            right: self.right,
        }
    }

    /// Transform the right component, keeping the left one.
    #[inline]
    pub fn map_right<NR, F>(self, f: F) -> Pair<L, NR>
    where
        F: FnOnce(R) -> NR,
    {
        Pair {
            left: self.left,
            right: f(self.right),
        }
    }

    /// Build a new pair from both components.
    ///
    /// # Example
    ///
    /// ```rust
    /// use routine::Pair;
    ///
    /// let p = Pair::new(3, 4).flat_map(|l, r| Pair::new(l + r, l * r));
    /// assert_eq!(p, Pair::new(7, 12));
    /// ```
    #[inline]
    pub fn flat_map<NL, NR, F>(self, f: F) -> Pair<NL, NR>
    where
        F: FnOnce(L, R) -> Pair<NL, NR>,
    {
        f(self.left, self.right)
    }

    /// Build a new pair from the left component alone.
    #[inline]
    pub fn flat_map_left<NL, NR, F>(self, f: F) -> Pair<NL, NR>
    where
        F: FnOnce(L) -> Pair<NL, NR>,
    {
        f(self.left)
    }

    /// Build a new pair from the right component alone.
    #[inline]
    pub fn flat_map_right<NL, NR, F>(self, f: F) -> Pair<NL, NR>
    where
        F: FnOnce(R) -> Pair<NL, NR>,
    {
        f(self.right)
    }

    /// Replace the left component.
    ///
    /// # Example
    ///
    /// ```rust
    /// use routine::Pair;
    ///
    /// assert_eq!(Pair::new(1, "b").with_left("a"), Pair::new("a", "b"));
    /// ```
    #[inline]
    pub fn with_left<NL>(self, left: NL) -> Pair<NL, R> {
        Pair {
            left,
            right: self.right,
        }
    }

    /// Replace the right component.
    #[inline]
    pub fn with_right<NR>(self, right: NR) -> Pair<L, NR> {
        Pair {
            left: self.left,
            right,
        }
    }

    /// Swap the components.
    #[inline]
    pub fn flip(self) -> Pair<R, L> {
        Pair {
            left: self.right,
            right: self.left,
        }
    }

    /// Collapse both components into a single value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use routine::Pair;
    ///
    /// assert_eq!(Pair::new("id", 7).fold(|k, v| format!("{k}={v}")), "id=7");
    /// ```
    #[inline]
    pub fn fold<T, F>(self, f: F) -> T
    where
        F: FnOnce(L, R) -> T,
    {
        f(self.left, self.right)
    }
}

impl<L: Clone, R: Clone> Pair<L, R> {
    /// Create a pair from a borrowed map entry, cloning key and value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use routine::Pair;
    /// use std::collections::BTreeMap;
    ///
    /// let map = BTreeMap::from([(1, "one")]);
    /// let pairs: Vec<_> = map.iter().map(Pair::from_map_entry).collect();
    /// assert_eq!(pairs, vec![Pair::new(1, "one")]);
    /// ```
    #[inline]
    pub fn from_map_entry((left, right): (&L, &R)) -> Self {
        Pair {
            left: left.clone(),
            right: right.clone(),
        }
    }
}

impl<L, R> From<(L, R)> for Pair<L, R> {
    fn from(entry: (L, R)) -> Self {
        Pair::from_entry(entry)
    }
}

impl<L, R> From<Pair<L, R>> for (L, R) {
    fn from(pair: Pair<L, R>) -> Self {
        pair.into_entry()
    }
}

// Component-wise, like the tuple instances
impl<L: Semigroup, R: Semigroup> Semigroup for Pair<L, R> {
    #[inline]
    fn combine(self, other: Self) -> Self {
        Pair {
            left: self.left.combine(other.left),
            right: self.right.combine(other.right),
        }
    }
}

impl<L: Monoid, R: Monoid> Monoid for Pair<L, R> {
    fn empty() -> Self {
        Pair {
            left: L::empty(),
            right: R::empty(),
        }
    }
}
