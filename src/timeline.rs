//! Difference-array load aggregation.
//!
//! Converts a batch of range load changes into point-wise net load
//! without paying O(range length) per update: each update becomes two
//! point marks, and one left-to-right prefix pass reconstructs the net
//! load at every position.
//!
//! # Complexity
//!
//! `apply_range` is O(1); `prefix_sums` is O(domain_max). This trade
//! dominates when the number of ranges is large relative to the domain
//! size.
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms" — prefix sums

use crate::error::{Error, Result};
use crate::models::RangeUpdate;

/// A bounded axis of discrete positions accumulating range load changes.
///
/// Positions span `0..=domain_max`. Mutated only through
/// [`apply_range`](Timeline::apply_range); materialized through
/// [`prefix_sums`](Timeline::prefix_sums), which is pure and idempotent.
///
/// # Example
///
/// ```
/// use resource_timeline::Timeline;
///
/// let mut tl = Timeline::new(5).unwrap();
/// tl.apply_range(1, 4, 10).unwrap(); // positions 1, 2, 3
/// tl.apply_range(3, 5, 5).unwrap();  // positions 3, 4
/// assert_eq!(tl.prefix_sums(), vec![0, 10, 10, 15, 5, 0]);
/// assert!(tl.is_feasible(15));
/// assert!(!tl.is_feasible(14));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timeline {
    deltas: Vec<i64>,
    domain_max: i64,
}

impl Timeline {
    /// Creates a zeroed timeline over positions `0..=domain_max`.
    ///
    /// # Errors
    /// `Error::InvalidDomain` if `domain_max < 0`.
    pub fn new(domain_max: i64) -> Result<Self> {
        if domain_max < 0 {
            return Err(Error::InvalidDomain(domain_max));
        }
        Ok(Self {
            deltas: vec![0; domain_max as usize + 1],
            domain_max,
        })
    }

    /// Largest valid position.
    #[inline]
    pub fn domain_max(&self) -> i64 {
        self.domain_max
    }

    /// Adds `amount` to every position in the half-open range
    /// `[start, end)`. O(1): marks `+amount` at `start` and `-amount`
    /// at `end`. Callers holding inclusive ranges must pass `end + 1`.
    ///
    /// A zero-length range (`start == end`) is a valid no-op.
    ///
    /// # Errors
    /// `Error::OutOfBounds` unless `0 <= start <= end <= domain_max`.
    /// The check runs before any mutation: a rejected call leaves the
    /// timeline untouched.
    pub fn apply_range(&mut self, start: i64, end: i64, amount: i64) -> Result<()> {
        if start < 0 || end < start || end > self.domain_max {
            return Err(Error::OutOfBounds {
                start,
                end,
                domain_max: self.domain_max,
            });
        }
        self.deltas[start as usize] += amount;
        self.deltas[end as usize] -= amount;
        Ok(())
    }

    /// Applies a [`RangeUpdate`] model.
    pub fn apply(&mut self, update: &RangeUpdate) -> Result<()> {
        self.apply_range(update.start, update.end, update.amount)
    }

    /// Net load at every position `0..=domain_max`.
    ///
    /// Pure and idempotent: may be called repeatedly, never mutates.
    /// O(domain_max).
    pub fn prefix_sums(&self) -> Vec<i64> {
        let mut sums = Vec::with_capacity(self.deltas.len());
        let mut acc: i64 = 0;
        for &d in &self.deltas {
            acc += d;
            sums.push(acc);
        }
        sums
    }

    /// Whether no position's net load exceeds `capacity`.
    ///
    /// Short-circuits on the first violation.
    pub fn is_feasible(&self, capacity: i64) -> bool {
        let mut acc: i64 = 0;
        for &d in &self.deltas {
            acc += d;
            if acc > capacity {
                return false;
            }
        }
        true
    }

    /// Maximum net load across all positions.
    ///
    /// An untouched timeline reports 0. With only negative updates the
    /// peak can still be 0, since position 0 may carry no load.
    pub fn peak_load(&self) -> i64 {
        let mut acc: i64 = 0;
        let mut peak = i64::MIN;
        for &d in &self.deltas {
            acc += d;
            peak = peak.max(acc);
        }
        peak
    }
}

/// Builds a timeline, applies every range, and returns the prefix sums.
///
/// Batch convenience over [`Timeline`]. The first invalid range aborts
/// the batch with its error; nothing is silently clamped. An empty
/// `ranges` slice yields the all-zero vector.
///
/// # Errors
/// `Error::InvalidDomain` or `Error::OutOfBounds`, as for the
/// underlying calls.
pub fn apply_and_materialize(domain_max: i64, ranges: &[RangeUpdate]) -> Result<Vec<i64>> {
    let mut timeline = Timeline::new(domain_max)?;
    for range in ranges {
        timeline.apply(range)?;
    }
    Ok(timeline.prefix_sums())
}
