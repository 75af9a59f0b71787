//! Weighted interval scheduling on a single timeline.
//!
//! # Recurrence
//!
//! With activities sorted ascending by end and `p(i)` = [`predecessor`]:
//!
//! ```text
//! dp[-1] = 0
//! dp[i]  = max(dp[i-1], value[i] + dp[p(i)])
//! ```
//!
//! `dp[i]` is the best total using only the first `i + 1` activities.
//!
//! # Backtracking and ties
//!
//! Walking back from `n - 1`, activity `i` is taken iff `i == 0` or
//! `dp[i] != dp[i-1]`, then the walk jumps to `p(i)`; otherwise it steps to
//! `i - 1`.  When including and excluding `i` give the same total, exclusion
//! wins, so among several optimal subsets the one avoiding later-ending
//! activities at each tie is returned.  Index 0 is always taken once the walk
//! reaches it, whatever its value.

use tracing::debug;

use tt_core::ActivityId;

use crate::{predecessor, Value, WeightedActivity};

/// Optimal selection plus its total value.
#[derive(Clone, Debug, PartialEq)]
pub struct WeightedSchedule<V> {
    /// Selected ids in descending end order (backtracking order).
    pub ids:   Vec<ActivityId>,
    /// Sum of the selected values; `V::default()` for empty input.  Equals
    /// the optimum `dp[n-1]` unless the walk ends on a non-positive index 0.
    pub total: V,
}

/// Ids of a maximum-total-value subset of pairwise non-overlapping activities.
///
/// Output is in **descending** end order; reverse it for chronological order.
/// The input slice is left untouched.  Empty input yields empty output.
pub fn max_weight_schedule<T, V>(activities: &[WeightedActivity<T, V>]) -> Vec<ActivityId>
where
    T: Ord + Copy,
    V: Value,
{
    solve_weighted(activities).ids
}

/// Like [`max_weight_schedule`] but also returns the total of the selection.
pub fn solve_weighted<T, V>(activities: &[WeightedActivity<T, V>]) -> WeightedSchedule<V>
where
    T: Ord + Copy,
    V: Value,
{
    let n = activities.len();
    if n == 0 {
        return WeightedSchedule { ids: Vec::new(), total: V::default() };
    }

    // Stable: equal ends keep their input order.
    let mut sorted = activities.to_vec();
    sorted.sort_by_key(|a| a.end);

    let prev: Vec<Option<usize>> = (0..n).map(|i| predecessor(&sorted, i)).collect();

    // ── Fill ──────────────────────────────────────────────────────────────
    let mut dp: Vec<V> = Vec::with_capacity(n);
    for i in 0..n {
        let skip = before(&dp, i);
        let take = sorted[i].value + prev[i].map_or_else(V::default, |p| dp[p]);
        dp.push(if take > skip { take } else { skip });
    }

    // ── Backtrack ─────────────────────────────────────────────────────────
    let mut ids = Vec::new();
    let mut total = V::default();
    let mut cursor = Some(n - 1);
    while let Some(i) = cursor {
        if i == 0 || dp[i] != dp[i - 1] {
            ids.push(sorted[i].id);
            total = total + sorted[i].value;
            cursor = prev[i];
        } else {
            cursor = i.checked_sub(1);
        }
    }

    debug!(input = n, selected = ids.len(), "weighted schedule solved");
    WeightedSchedule { ids, total }
}

/// `dp[i - 1]`, or zero before the first activity.
#[inline]
fn before<V: Value>(dp: &[V], i: usize) -> V {
    i.checked_sub(1).map_or_else(V::default, |j| dp[j])
}
