//! The crate's single error kind.
//!
//! `Either` and `Pair` payloads are never absent: the type system already
//! guarantees that for values built with [`Either::left`](crate::Either::left)
//! or [`Pair::new`](crate::Pair::new). Absence can only show up at an `Option`
//! boundary, where it is a contract violation rather than a recoverable
//! condition.
//!
//! # Examples
//!
//! ```
//! use routine::{Either, NullValueError};
//!
//! let missing: Result<Either<i32, String>, _> = Either::try_left(None);
//! assert_eq!(missing, Err(NullValueError::new("value")));
//! assert_eq!(missing.unwrap_err().to_string(), "`value` must be present");
//! ```

use std::fmt;

/// A mandatory value was absent.
///
/// Carries the name of the missing field (`"value"` for `Either` payloads,
/// `"left"` / `"right"` for `Pair` components).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NullValueError {
    field: &'static str,
}

impl NullValueError {
    /// Create an error for the named field.
    pub fn new(field: &'static str) -> Self {
        Self { field }
    }

    /// Name of the field that was absent.
    pub fn field(&self) -> &'static str {
        self.field
    }

    /// Check that `value` is present.
    ///
    /// # Examples
    ///
    /// ```
    /// use routine::NullValueError;
    ///
    /// assert_eq!(NullValueError::check(Some(1), "left"), Ok(1));
    /// assert_eq!(
    ///     NullValueError::check::<i32>(None, "left"),
    ///     Err(NullValueError::new("left"))
    /// );
    /// ```
    pub fn check<T>(value: Option<T>, field: &'static str) -> Result<T, Self> {
        value.ok_or(Self { field })
    }
}

impl fmt::Display for NullValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}` must be present", self.field)
    }
}

impl std::error::Error for NullValueError {}

/// Unwrap a mandatory value, failing fast when it is absent.
///
/// # Panics
///
/// Panics with the [`NullValueError`] message if `value` is `None`.
///
/// # Examples
///
/// ```
/// use routine::error::require_present;
///
/// assert_eq!(require_present(Some("x"), "value"), "x");
/// ```
///
/// ```should_panic
/// use routine::error::require_present;
///
/// require_present::<i32>(None, "value"); // panics: `value` must be present
/// ```
#[track_caller]
pub fn require_present<T>(value: Option<T>, field: &'static str) -> T {
    match value {
        Some(value) => value,
        None => panic!("{}", NullValueError::new(field)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            NullValueError::new("right").to_string(),
            "`right` must be present"
        );
    }

    #[test]
    fn test_field() {
        assert_eq!(NullValueError::new("left").field(), "left");
    }

    #[test]
    fn test_check() {
        assert_eq!(NullValueError::check(Some(42), "value"), Ok(42));
        assert_eq!(
            NullValueError::check::<i32>(None, "value"),
            Err(NullValueError::new("value"))
        );
    }

    #[test]
    fn test_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(NullValueError::new("value"));
        assert!(err.source().is_none());
        assert_eq!(err.to_string(), "`value` must be present");
    }

    #[test]
    fn test_require_present() {
        assert_eq!(require_present(Some(7), "value"), 7);
    }

    #[test]
    #[should_panic(expected = "`value` must be present")]
    fn test_require_present_panics() {
        require_present::<i32>(None, "value");
    }
}
