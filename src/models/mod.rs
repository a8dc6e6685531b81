//! Engine domain models.
//!
//! Provides the validated numeric types consumed by the aggregation and
//! admission algorithms. All positions, days, and amounts are explicit
//! bounded `i64` values — no sentinels, no implicit clamping.
//!
//! # Interval Conventions
//!
//! The crate deliberately fixes one endpoint convention per type rather
//! than guessing a unified intent:
//!
//! | Type | Semantics | Used by |
//! |---------------|--------------------------|-------------|
//! | `RangeUpdate` | half-open `[start, end)` | `timeline` |
//! | `Interval` | closed `[lo, hi]` | `merge` |
//! | `Event` | closed `[start, end]` | `scheduler` |

mod event;
mod interval;
mod range;

pub use event::Event;
pub use interval::Interval;
pub use range::RangeUpdate;
