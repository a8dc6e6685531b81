//! Resource timeline engine.
//!
//! Batch-oriented algorithms for a bounded resource's load over a
//! discrete timeline: range-update / point-query aggregation via a
//! difference array, canonicalization of closed intervals into a
//! disjoint cover, and deadline-aware greedy admission maximizing the
//! number of attendable events.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Interval`, `Event`, `RangeUpdate`
//! - **`timeline`**: `Timeline` difference-array aggregator
//! - **`merge`**: Interval union into maximal disjoint runs
//! - **`scheduler`**: `EventScheduler` greedy deadline admission
//! - **`validation`**: Input integrity checks for raw numeric input
//! - **`error`**: Typed validation errors
//!
//! # Design
//!
//! The engine operates on a fixed, fully-known batch of intervals or
//! events and produces one deterministic result per batch. All state is
//! passed in as owned parameters and returned as owned results: no
//! globals, no interior mutability, no I/O. Validation happens before
//! any mutation; out-of-range input is rejected, never clamped.
//!
//! # References
//!
//! - Cormen et al. (2009), "Introduction to Algorithms"
//! - Kleinberg & Tardos (2006), "Algorithm Design", Ch. 4: Greedy Algorithms

pub mod error;
pub mod merge;
pub mod models;
pub mod scheduler;
pub mod timeline;
pub mod validation;

pub use error::{Error, Result};
pub use merge::{covered_length, merge_intervals};
pub use models::{Event, Interval, RangeUpdate};
pub use scheduler::{max_attendable_events, EventScheduler};
pub use timeline::{apply_and_materialize, Timeline};
