//! Closed integer interval.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A closed interval `[lo, hi]` over integer positions.
///
/// Both endpoints are included. Two intervals that merely share an
/// endpoint (`a.hi == b.lo`) therefore overlap — the merge sweep in
/// [`crate::merge`] relies on this.
///
/// Ordering is lexicographic on `(lo, hi)`, which is exactly the sort
/// order the merge sweep needs.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Interval {
    lo: i64,
    hi: i64,
}

impl Interval {
    /// Creates a closed interval.
    ///
    /// # Errors
    /// `Error::InvalidInterval` if `lo > hi`.
    pub fn new(lo: i64, hi: i64) -> Result<Self> {
        if lo > hi {
            return Err(Error::InvalidInterval { lo, hi });
        }
        Ok(Self { lo, hi })
    }

    /// Constructs without validation. Callers must guarantee `lo <= hi`.
    pub(crate) const fn new_unchecked(lo: i64, hi: i64) -> Self {
        Self { lo, hi }
    }

    /// Lower bound (inclusive).
    #[inline]
    pub fn lo(&self) -> i64 {
        self.lo
    }

    /// Upper bound (inclusive).
    #[inline]
    pub fn hi(&self) -> i64 {
        self.hi
    }

    /// Number of integer points covered. Always at least 1.
    #[inline]
    pub fn point_count(&self) -> i64 {
        self.hi - self.lo + 1
    }

    /// Whether a position falls within this interval.
    #[inline]
    pub fn contains(&self, pos: i64) -> bool {
        pos >= self.lo && pos <= self.hi
    }

    /// Whether two closed intervals share at least one point.
    ///
    /// Endpoint sharing counts: `[1, 3]` overlaps `[3, 5]`.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.lo <= other.hi && other.lo <= self.hi
    }
}

impl TryFrom<(i64, i64)> for Interval {
    type Error = Error;

    fn try_from((lo, hi): (i64, i64)) -> Result<Self> {
        Self::new(lo, hi)
    }
}
