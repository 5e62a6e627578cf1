//! SimpleScore - Single-level score implementation

use std::fmt;
use std::ops::{Add, Neg, Sub};

use super::traits::Score;

/// A single integer score.
///
/// Tour objectives are minimised, so a length is stored negated:
/// shorter tours compare greater.
///
/// # Examples
///
/// ```
/// use tourforge_core::{Score, SimpleScore};
///
/// let longer = SimpleScore::from_length(42);
/// let shorter = SimpleScore::from_length(30);
///
/// assert!(shorter.is_better_than(&longer));
/// assert_eq!(shorter.score(), -30);
/// assert_eq!(shorter.length(), Some(30));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimpleScore {
    value: i64,
}

impl SimpleScore {
    /// The zero score.
    pub const ZERO: SimpleScore = SimpleScore { value: 0 };

    /// Creates a score with the given value.
    #[inline]
    pub const fn of(value: i64) -> Self {
        SimpleScore { value }
    }

    /// Scores a total tour length.
    ///
    /// Lengths beyond `i64::MAX` saturate.
    #[inline]
    pub fn from_length(length: u64) -> Self {
        SimpleScore::of(i64::try_from(length).map_or(i64::MIN, |length| -length))
    }

    /// Returns the score value.
    #[inline]
    pub const fn score(&self) -> i64 {
        self.value
    }

    /// Returns the tour length this score was built from, if it is one.
    pub fn length(&self) -> Option<u64> {
        self.value.checked_neg().and_then(|length| u64::try_from(length).ok())
    }
}

impl Score for SimpleScore {
    #[inline]
    fn zero() -> Self {
        SimpleScore::ZERO
    }
}

impl Add for SimpleScore {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        SimpleScore::of(self.value + other.value)
    }
}

impl Sub for SimpleScore {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        SimpleScore::of(self.value - other.value)
    }
}

impl Neg for SimpleScore {
    type Output = Self;

    fn neg(self) -> Self {
        SimpleScore::of(-self.value)
    }
}

impl fmt::Debug for SimpleScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SimpleScore({})", self.value)
    }
}

impl fmt::Display for SimpleScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl From<i64> for SimpleScore {
    fn from(value: i64) -> Self {
        SimpleScore::of(value)
    }
}
