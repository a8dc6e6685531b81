//! Interval canonicalization.
//!
//! Reduces an unordered multiset of closed intervals to its disjoint
//! cover: the unique sorted sequence of maximal runs covering the same
//! points, with a gap of at least one position between consecutive
//! outputs.
//!
//! # Algorithm
//!
//! Sort by `lo` ascending (ties by `hi` ascending), then sweep left to
//! right extending the current run while the next interval overlaps or
//! touches it. O(n log n) for the sort, O(n) for the sweep.
//!
//! Touching intervals merge: `[1, 3]` and `[3, 5]` share position 3
//! under closed-interval semantics, so they collapse to `[1, 5]`.
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 16.1
//! (interval structures around activity selection)

use crate::models::Interval;

/// Merges closed intervals into maximal disjoint runs.
///
/// The output is sorted by `lo` and pairwise disjoint: every adjacent
/// pair satisfies `next.lo() > prev.hi()`. Empty input yields empty
/// output. Idempotent: merging a merged sequence returns it unchanged.
///
/// # Example
///
/// ```
/// use resource_timeline::{merge_intervals, Interval};
///
/// let input = [
///     Interval::new(1, 3).unwrap(),
///     Interval::new(2, 6).unwrap(),
///     Interval::new(8, 10).unwrap(),
///     Interval::new(15, 18).unwrap(),
/// ];
/// let merged = merge_intervals(&input);
/// assert_eq!(merged, vec![
///     Interval::new(1, 6).unwrap(),
///     Interval::new(8, 10).unwrap(),
///     Interval::new(15, 18).unwrap(),
/// ]);
/// ```
pub fn merge_intervals(intervals: &[Interval]) -> Vec<Interval> {
    let mut sorted = intervals.to_vec();
    // Interval's derived Ord is (lo, hi) lexicographic.
    sorted.sort();

    let mut merged: Vec<Interval> = Vec::with_capacity(sorted.len());
    let mut runs = sorted.into_iter();
    let Some(first) = runs.next() else {
        return merged;
    };

    let (mut lo, mut hi) = (first.lo(), first.hi());
    for next in runs {
        if next.lo() <= hi {
            // Overlap or touch: extend the current run.
            hi = hi.max(next.hi());
        } else {
            merged.push(Interval::new_unchecked(lo, hi));
            lo = next.lo();
            hi = next.hi();
        }
    }
    merged.push(Interval::new_unchecked(lo, hi));
    merged
}

/// Total number of integer points covered by the union of `intervals`.
pub fn covered_length(intervals: &[Interval]) -> i64 {
    merge_intervals(intervals)
        .iter()
        .map(Interval::point_count)
        .sum()
}
