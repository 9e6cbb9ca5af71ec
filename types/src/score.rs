//! Contribution score.
//!
//! Scores are non-negative integers. Accumulation is checked so a profile
//! total can never silently wrap.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Score awarded to a contribution, or the accumulated total of a contributor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Score(u64);

impl Score {
    pub const ZERO: Self = Self(0);

    pub const fn new(points: u64) -> Self {
        Self(points)
    }

    pub const fn points(&self) -> u64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Sum of `scores`, or `None` if the total does not fit.
    pub fn checked_sum<'a>(scores: impl IntoIterator<Item = &'a Score>) -> Option<Self> {
        scores
            .into_iter()
            .try_fold(Self::ZERO, |acc, s| acc.checked_add(*s))
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} pts", self.0)
    }
}

impl From<u64> for Score {
    fn from(points: u64) -> Self {
        Self(points)
    }
}
