//! Input integrity checks for raw numeric input.
//!
//! Bridges callers holding plain tuples (deserialized literals, test
//! fixtures, FFI) to the validated model types. Checks are fail-fast:
//! the first offending element aborts with its typed error, before any
//! engine state exists to mutate.

use crate::error::{Error, Result};
use crate::models::{Event, Interval, RangeUpdate};

/// Validates raw `(start_day, end_day)` pairs into [`Event`]s.
///
/// # Errors
/// `Error::InvalidEvent` on the first pair with `start_day > end_day`.
pub fn validate_events(pairs: &[(i64, i64)]) -> Result<Vec<Event>> {
    pairs.iter().map(|&(start, end)| Event::new(start, end)).collect()
}

/// Validates raw `(lo, hi)` pairs into [`Interval`]s.
///
/// # Errors
/// `Error::InvalidInterval` on the first pair with `lo > hi`.
pub fn validate_intervals(pairs: &[(i64, i64)]) -> Result<Vec<Interval>> {
    pairs.iter().map(|&(lo, hi)| Interval::new(lo, hi)).collect()
}

/// Validates raw `(start, end, amount)` triples against a domain,
/// without building a timeline.
///
/// Useful for callers that want to reject a whole batch up front and
/// only then pay for allocation.
///
/// # Errors
/// `Error::InvalidDomain` if `domain_max < 0`; `Error::OutOfBounds` on
/// the first triple violating `0 <= start <= end <= domain_max`.
pub fn validate_ranges(domain_max: i64, triples: &[(i64, i64, i64)]) -> Result<Vec<RangeUpdate>> {
    if domain_max < 0 {
        return Err(Error::InvalidDomain(domain_max));
    }
    triples
        .iter()
        .map(|&(start, end, amount)| {
            if start < 0 || end < start || end > domain_max {
                return Err(Error::OutOfBounds {
                    start,
                    end,
                    domain_max,
                });
            }
            Ok(RangeUpdate::new(start, end, amount))
        })
        .collect()
}
