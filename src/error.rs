//! Typed validation errors.
//!
//! All errors are local, synchronous validation failures raised at the
//! point of the offending call, before any mutation (validate-then-apply).
//! There is no recovery path inside the engine: failures surface to the
//! caller as typed results. The engine never logs, retries, or silently
//! clamps out-of-range input. Numeric overflow is prevented by using
//! `i64` accumulators throughout rather than detected at runtime.

use thiserror::Error;

/// Validation errors raised by the engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Timeline construction with a negative domain.
    #[error("invalid domain: domain_max must be non-negative, got {0}")]
    InvalidDomain(i64),

    /// Range update violating `0 <= start <= end <= domain_max`.
    #[error("range [{start}, {end}) out of bounds for domain [0, {domain_max}]")]
    OutOfBounds {
        /// Requested range start (inclusive).
        start: i64,
        /// Requested range end (exclusive).
        end: i64,
        /// Largest valid position of the timeline.
        domain_max: i64,
    },

    /// Event whose window is inverted (`start_day > end_day`).
    #[error("invalid event: start day {start} exceeds end day {end}")]
    InvalidEvent {
        /// First day the event can be attended.
        start: i64,
        /// Last day the event can be attended.
        end: i64,
    },

    /// Interval whose bounds are inverted (`lo > hi`).
    #[error("invalid interval: lo {lo} exceeds hi {hi}")]
    InvalidInterval {
        /// Lower bound (inclusive).
        lo: i64,
        /// Upper bound (inclusive).
        hi: i64,
    },
}

/// Engine result type.
pub type Result<T, E = Error> = std::result::Result<T, E>;
