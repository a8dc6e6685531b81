//! Greedy deadline-aware event admission.
//!
//! Given events that each need exactly one admission slot on any day
//! within their closed window, computes the maximum number of events
//! that can each be admitted on a distinct day.
//!
//! # Algorithm
//!
//! Sort events by start day, then sweep simulated days. Each day:
//! release every event whose window has opened into a min-heap keyed by
//! deadline, discard heads whose window already closed, then admit the
//! event with the nearest deadline, if any. One admission per day.
//!
//! # Correctness
//!
//! Exchange argument: among currently available events, admitting the
//! one with the nearest deadline is never worse than any other choice.
//! An event with a later deadline stays eligible longer and can be
//! deferred without loss, while the nearest-deadline event's window
//! only shrinks. The greedy choice is safe precisely because expiration
//! is checked before each day's admission, so a deferred near-deadline
//! event can never silently become unattendable.
//!
//! # Complexity
//!
//! O(n log n) for the sort and heap traffic, plus one iteration per
//! simulated day inside occupied spans (empty spans are skipped).
//!
//! # Reference
//! Kleinberg & Tardos (2006), "Algorithm Design", Ch. 4: Greedy
//! Algorithms (exchange arguments)

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::error::Result;
use crate::models::Event;
use crate::validation::validate_events;

/// Greedy deadline-first event scheduler.
///
/// Stateless between calls; each [`max_attendable`](Self::max_attendable)
/// invocation owns its entire working set.
///
/// # Example
///
/// ```
/// use resource_timeline::{Event, EventScheduler};
///
/// let events = vec![
///     Event::new(1, 2).unwrap(),
///     Event::new(2, 3).unwrap(),
///     Event::new(3, 4).unwrap(),
/// ];
/// let scheduler = EventScheduler::new();
/// assert_eq!(scheduler.max_attendable(&events), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct EventScheduler {
    day_cap: Option<i64>,
}

impl EventScheduler {
    /// Creates a scheduler with no day cap.
    pub fn new() -> Self {
        Self { day_cap: None }
    }

    /// Sets a hard ceiling on the simulated day.
    ///
    /// Days past `cap` admit nothing. Without a cap the sweep is still
    /// bounded by the largest end day present in the input; the cap is
    /// for callers that want an explicit horizon regardless of input.
    pub fn with_day_cap(mut self, cap: i64) -> Self {
        self.day_cap = Some(cap);
        self
    }

    /// Maximum number of events admittable on distinct days.
    ///
    /// Events are validated at construction (`start <= end`), so this
    /// cannot fail; empty input returns 0.
    pub fn max_attendable(&self, events: &[Event]) -> usize {
        let mut by_start: Vec<&Event> = events.iter().collect();
        // Stable sort: ties keep original index order, deterministic.
        by_start.sort_by_key(|e| e.start_day());

        let mut deadlines: BinaryHeap<Reverse<i64>> = BinaryHeap::new();
        let mut admitted = 0usize;
        let mut cursor = 0usize;

        let Some(first) = by_start.first() else {
            return 0;
        };
        let mut day = first.start_day();

        loop {
            if let Some(cap) = self.day_cap {
                if day > cap {
                    break;
                }
            }

            // Release events whose window has opened.
            while cursor < by_start.len() && by_start[cursor].start_day() <= day {
                deadlines.push(Reverse(by_start[cursor].end_day()));
                cursor += 1;
            }

            // Discard events whose window closed before today.
            while let Some(&Reverse(end)) = deadlines.peek() {
                if end < day {
                    deadlines.pop();
                } else {
                    break;
                }
            }

            // Admit the tightest deadline, one per day.
            if deadlines.pop().is_some() {
                admitted += 1;
            }

            if deadlines.is_empty() {
                match by_start.get(cursor) {
                    // Nothing pending today: jump to the next window.
                    Some(next) => day = next.start_day(),
                    None => break,
                }
            } else {
                day += 1;
            }
        }

        admitted
    }
}

/// Maximum attendable events from raw `(start_day, end_day)` pairs.
///
/// Validates every pair before scheduling; empty input returns `Ok(0)`.
///
/// # Errors
/// `Error::InvalidEvent` if any `start_day > end_day`.
pub fn max_attendable_events(events: &[(i64, i64)]) -> Result<usize> {
    let events = validate_events(events)?;
    Ok(EventScheduler::new().max_attendable(&events))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::collections::HashSet;

    /// Exhaustive reference: tries every assignment of events to days.
    /// Exponential — only for small inputs.
    fn brute_force(events: &[Event]) -> usize {
        fn go(events: &[Event], idx: usize, used: &mut HashSet<i64>) -> usize {
            if idx == events.len() {
                return 0;
            }
            // Skip this event entirely.
            let mut best = go(events, idx + 1, used);
            let e = &events[idx];
            for day in e.start_day()..=e.end_day() {
                if used.insert(day) {
                    best = best.max(1 + go(events, idx + 1, used));
                    used.remove(&day);
                }
            }
            best
        }
        go(events, 0, &mut HashSet::new())
    }

    fn ev(start: i64, end: i64) -> Event {
        Event::new(start, end).unwrap()
    }

    #[test]
    fn test_empty_input_returns_zero() {
        assert_eq!(EventScheduler::new().max_attendable(&[]), 0);
        assert_eq!(max_attendable_events(&[]).unwrap(), 0);
    }

    #[test]
    fn test_chain_of_three() {
        assert_eq!(max_attendable_events(&[(1, 2), (2, 3), (3, 4)]).unwrap(), 3);
    }

    #[test]
    fn test_duplicate_event_claims_own_day() {
        assert_eq!(
            max_attendable_events(&[(1, 2), (2, 3), (3, 4), (1, 2)]).unwrap(),
            4
        );
    }

    #[test]
    fn test_invalid_event_rejected() {
        assert_eq!(
            max_attendable_events(&[(1, 2), (5, 3)]).unwrap_err(),
            Error::InvalidEvent { start: 5, end: 3 }
        );
    }

    #[test]
    fn test_all_same_single_day() {
        // Three events all pinned to day 1: only one fits.
        assert_eq!(max_attendable_events(&[(1, 1), (1, 1), (1, 1)]).unwrap(), 1);
    }

    #[test]
    fn test_tightest_deadline_admitted_first() {
        // Greedy must spend day 1 on (1,1); deferring it loses an event.
        assert_eq!(max_attendable_events(&[(1, 5), (1, 1)]).unwrap(), 2);
    }

    #[test]
    fn test_sparse_windows_are_skipped() {
        // Large empty span between windows; sweep jumps over it.
        assert_eq!(
            max_attendable_events(&[(1, 1), (1_000_000, 1_000_000)]).unwrap(),
            2
        );
    }

    #[test]
    fn test_upper_bounds() {
        // Bounded by event count...
        assert_eq!(max_attendable_events(&[(1, 100)]).unwrap(), 1);
        // ...and by the days spanned by the union of windows.
        assert_eq!(
            max_attendable_events(&[(1, 2), (1, 2), (1, 2), (1, 2)]).unwrap(),
            2
        );
    }

    #[test]
    fn test_day_cap_limits_admissions() {
        let events = vec![ev(1, 10), ev(1, 10), ev(1, 10), ev(1, 10)];
        let capped = EventScheduler::new().with_day_cap(2);
        assert_eq!(capped.max_attendable(&events), 2);
        assert_eq!(EventScheduler::new().max_attendable(&events), 4);
    }

    #[test]
    fn test_monotone_in_end_day() {
        // Widening any window never reduces the optimum.
        let base = [(1, 1), (1, 2), (2, 2), (1, 3)];
        let base_count = max_attendable_events(&base).unwrap();
        for i in 0..base.len() {
            let mut wider = base;
            wider[i].1 += 1;
            assert!(max_attendable_events(&wider).unwrap() >= base_count);
        }
    }

    #[test]
    fn test_matches_brute_force_randomized() {
        let mut rng = StdRng::seed_from_u64(0x6772);
        for _ in 0..300 {
            let n = rng.random_range(0..7);
            let events: Vec<Event> = (0..n)
                .map(|_| {
                    let start = rng.random_range(1..8);
                    ev(start, start + rng.random_range(0..4))
                })
                .collect();

            assert_eq!(
                EventScheduler::new().max_attendable(&events),
                brute_force(&events),
                "greedy differs from optimum on {events:?}",
            );
        }
    }

    #[test]
    fn test_event_serde_round_trip() {
        let e = ev(2, 9);
        let json = serde_json::to_string(&e).unwrap();
        assert_eq!(serde_json::from_str::<Event>(&json).unwrap(), e);
    }
}
