//! Capability metadata reported by aggregators.

use std::fmt;

/// A capability an [`Aggregator`](super::Aggregator) may declare.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Characteristic {
    /// The state tolerates concurrent accumulation.
    ///
    /// Advisory only: `accumulate` takes `&mut State`, so the borrow checker
    /// already rules out concurrent calls on one state.
    Concurrent,
    /// The result does not depend on the encounter order of the input.
    Unordered,
    /// `finish` returns the state unchanged, so it may be skipped.
    IdentityFinish,
}

impl Characteristic {
    /// Every characteristic, in declaration order.
    pub const ALL: [Characteristic; 3] = [
        Characteristic::Concurrent,
        Characteristic::Unordered,
        Characteristic::IdentityFinish,
    ];

    const fn bit(self) -> u8 {
        match self {
            Characteristic::Concurrent => 1,
            Characteristic::Unordered => 1 << 1,
            Characteristic::IdentityFinish => 1 << 2,
        }
    }
}

/// A set of [`Characteristic`]s.
///
/// # Example
///
/// ```rust
/// use routine::aggregate::{Characteristic, Characteristics};
///
/// let left = Characteristics::of(&[Characteristic::Unordered, Characteristic::IdentityFinish]);
/// let right = Characteristics::of(&[Characteristic::Unordered]);
///
/// assert_eq!(left.intersection(right), right);
/// assert!(!left.intersection(right).contains(Characteristic::IdentityFinish));
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Characteristics {
    bits: u8,
}

impl Characteristics {
    /// The empty set.
    pub const NONE: Characteristics = Characteristics { bits: 0 };

    /// Build a set from a slice.
    pub const fn of(characteristics: &[Characteristic]) -> Self {
        let mut bits = 0;
        let mut i = 0;
        while i < characteristics.len() {
            bits |= characteristics[i].bit();
            i += 1;
        }
        Characteristics { bits }
    }

    /// Returns `true` if `characteristic` is in the set.
    #[inline]
    pub const fn contains(self, characteristic: Characteristic) -> bool {
        self.bits & characteristic.bit() != 0
    }

    /// The set with `characteristic` added.
    #[inline]
    #[must_use]
    pub const fn with(self, characteristic: Characteristic) -> Self {
        Characteristics {
            bits: self.bits | characteristic.bit(),
        }
    }

    /// The set with `characteristic` removed.
    #[inline]
    #[must_use]
    pub const fn without(self, characteristic: Characteristic) -> Self {
        Characteristics {
            bits: self.bits & !characteristic.bit(),
        }
    }

    /// Characteristics present in both sets.
    #[inline]
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Characteristics {
            bits: self.bits & other.bits,
        }
    }

    /// Characteristics present in either set.
    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Characteristics {
            bits: self.bits | other.bits,
        }
    }

    /// Returns `true` if the set is empty.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Number of characteristics in the set.
    #[inline]
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Iterate the members in declaration order.
    pub fn iter(self) -> impl Iterator<Item = Characteristic> {
        Characteristic::ALL
            .into_iter()
            .filter(move |c| self.contains(*c))
    }
}

impl fmt::Debug for Characteristics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl From<Characteristic> for Characteristics {
    fn from(characteristic: Characteristic) -> Self {
        Characteristics::NONE.with(characteristic)
    }
}

impl FromIterator<Characteristic> for Characteristics {
    fn from_iter<I: IntoIterator<Item = Characteristic>>(iter: I) -> Self {
        iter.into_iter().fold(Characteristics::NONE, Characteristics::with)
    }
}

impl Extend<Characteristic> for Characteristics {
    fn extend<I: IntoIterator<Item = Characteristic>>(&mut self, iter: I) {
        *self = iter.into_iter().fold(*self, Characteristics::with);
    }
}
