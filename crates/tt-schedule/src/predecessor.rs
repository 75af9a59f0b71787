//! Predecessor lookup for the weighted scheduler.

use crate::WeightedActivity;

/// Index of the latest-ending activity before `i` that finishes no later than
/// activity `i` starts, or `None` if there is none.
///
/// `activities` must be sorted ascending by `end`.  An activity ending exactly
/// when `i` starts qualifies (`end <= start`).
///
/// Sorted ends make `end <= start_i` true on a prefix of `[0, i)`, so
/// `partition_point` finds the first index past that prefix in O(log i).
///
/// # Panics
///
/// Panics if `i` is out of bounds.
pub fn predecessor<T: Ord + Copy, V>(activities: &[WeightedActivity<T, V>], i: usize) -> Option<usize> {
    let start = activities[i].start;
    let idx = activities[..i].partition_point(|a| a.end <= start);
    idx.checked_sub(1)
}
