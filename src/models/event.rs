//! Attendable event window.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// An event that needs exactly one admission slot on any single day
/// within its closed window `[start_day, end_day]`.
///
/// Days are 1-based by convention. An event has no identity beyond its
/// own values: duplicates are valid, independent inputs that each claim
/// their own day.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Event {
    start_day: i64,
    end_day: i64,
}

impl Event {
    /// Creates an event window.
    ///
    /// # Errors
    /// `Error::InvalidEvent` if `start_day > end_day`.
    pub fn new(start_day: i64, end_day: i64) -> Result<Self> {
        if start_day > end_day {
            return Err(Error::InvalidEvent {
                start: start_day,
                end: end_day,
            });
        }
        Ok(Self { start_day, end_day })
    }

    /// First day the event can be attended (inclusive).
    #[inline]
    pub fn start_day(&self) -> i64 {
        self.start_day
    }

    /// Last day the event can be attended (inclusive).
    #[inline]
    pub fn end_day(&self) -> i64 {
        self.end_day
    }

    /// Number of days on which this event could be attended.
    #[inline]
    pub fn window_days(&self) -> i64 {
        self.end_day - self.start_day + 1
    }

    /// Whether the event is still attendable on `day`.
    #[inline]
    pub fn is_open_on(&self, day: i64) -> bool {
        day >= self.start_day && day <= self.end_day
    }
}

impl TryFrom<(i64, i64)> for Event {
    type Error = Error;

    fn try_from((start, end): (i64, i64)) -> Result<Self> {
        Self::new(start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_inverted_window() {
        assert_eq!(
            Event::new(5, 2).unwrap_err(),
            Error::InvalidEvent { start: 5, end: 2 }
        );
    }

    #[test]
    fn test_single_day_window() {
        let e = Event::new(3, 3).unwrap();
        assert_eq!(e.window_days(), 1);
        assert!(e.is_open_on(3));
        assert!(!e.is_open_on(2));
        assert!(!e.is_open_on(4));
    }

    #[test]
    fn test_window_bounds_inclusive() {
        let e = Event::new(2, 5).unwrap();
        assert!(e.is_open_on(2));
        assert!(e.is_open_on(5));
        assert_eq!(e.window_days(), 4);
    }

    #[test]
    fn test_duplicates_compare_equal() {
        // Duplicates are valid, independent inputs.
        let a = Event::new(1, 2).unwrap();
        let b = Event::new(1, 2).unwrap();
        assert_eq!(a, b);
    }
}
