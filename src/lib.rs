//! # Routine
//!
//! Small, exhaustive building blocks for values that come in two shapes.
//!
//! - [`Either`] holds exactly one of two payloads, `Left` or `Right`, with
//!   no bias toward either side.
//! - [`Pair`] holds two payloads at once.
//! - [`aggregate`] reduces sequences with composable [`Aggregator`]s, and
//!   [`grouping_to`] splits a stream of `Either`s between two of them,
//!   sequentially, chunk by chunk or (with the `rayon` feature) in parallel.
//!
//! ## Quick Example
//!
//! ```rust
//! use routine::aggregate::{counting, to_vec, AggregateExt};
//! use routine::{grouping_to, Either, Pair};
//!
//! fn parse(raw: &str) -> Either<String, i32> {
//!     Either::from_result(raw.parse().map_err(|_| format!("not a number: {raw}")))
//! }
//!
//! let parsed = ["1", "x", "3"].into_iter().map(parse);
//! let result = parsed.aggregate(&grouping_to(counting(), to_vec()));
//!
//! assert_eq!(result, Pair::new(1, vec![1, 3]));
//! ```
//!
//! ## Features
//!
//! - `rayon`: the `aggregate::par_aggregate` driver
//! - `tracing`: span instrumentation for aggregators (`aggregate::tracing`)
//! - `proptest`: `Arbitrary` implementations for [`Either`] and [`Pair`]

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod aggregate;
pub mod either;
pub mod error;
pub mod monoid;
pub mod pair;
pub mod semigroup;
pub mod testing;

// Re-exports
pub use aggregate::{grouping_to, Aggregator};
pub use either::Either;
pub use error::NullValueError;
pub use monoid::Monoid;
pub use pair::Pair;
pub use semigroup::Semigroup;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::aggregate::{
        aggregate, aggregate_split, grouping_to, AggregateExt, Aggregator, Characteristic,
        Characteristics,
    };
    pub use crate::either::Either;
    pub use crate::error::NullValueError;
    pub use crate::monoid::Monoid;
    pub use crate::pair::{pair, Pair};
    pub use crate::semigroup::Semigroup;
}
