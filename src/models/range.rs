//! Range load change.

use serde::{Deserialize, Serialize};

/// A signed load change over the half-open range `[start, end)`.
///
/// Callers holding inclusive ranges must pass `end + 1`. Bounds are not
/// checked at construction: a `RangeUpdate` only becomes meaningful
/// against a concrete [`crate::Timeline`] domain, where `apply` performs
/// the full `0 <= start <= end <= domain_max` check before mutating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeUpdate {
    /// Range start (inclusive).
    pub start: i64,
    /// Range end (exclusive).
    pub end: i64,
    /// Signed load delta applied to every position in the range.
    pub amount: i64,
}

impl RangeUpdate {
    /// Creates a range update.
    pub fn new(start: i64, end: i64, amount: i64) -> Self {
        Self { start, end, amount }
    }
}

impl From<(i64, i64, i64)> for RangeUpdate {
    fn from((start, end, amount): (i64, i64, i64)) -> Self {
        Self::new(start, end, amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_triple() {
        let r = RangeUpdate::from((1, 5, 10));
        assert_eq!(r, RangeUpdate::new(1, 5, 10));
        assert_eq!(r.start, 1);
        assert_eq!(r.end, 5);
        assert_eq!(r.amount, 10);
    }
}
