//! `TrackSet`: the admitted, pairwise-disjoint spans of one track.
//!
//! # Overlap query
//!
//! Admitted spans never overlap, so sorted by start they are also sorted by
//! end.  For a query `[s, e)` the only admitted span that can overlap is the
//! one with the greatest start `< e`: every earlier span ends no later than it
//! does.  That span overlaps iff its end `> s`.  One `BTreeMap` range lookup
//! answers the query in O(log k).

use std::collections::BTreeMap;

use tt_core::{ActivityId, Minute, Span};

/// Interval container for one track, keyed by start minute.
#[derive(Clone, Debug, Default)]
pub struct TrackSet {
    /// start → (end, activity).  Disjointness makes starts unique.
    inner: BTreeMap<Minute, (Minute, ActivityId)>,
}

impl TrackSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` if `span` intersects any admitted span.
    pub fn overlaps(&self, span: &Span<Minute>) -> bool {
        self.inner
            .range(..span.end)
            .next_back()
            .is_some_and(|(_, &(end, _))| end > span.start)
    }

    /// Admit `span` for `id` unless it is empty or overlaps an admitted span.
    ///
    /// Returns whether the span was admitted.  An admitted span is never
    /// evicted.  Empty spans are refused: their start key could collide with
    /// a later admitted span.
    pub fn try_admit(&mut self, span: Span<Minute>, id: ActivityId) -> bool {
        if span.is_empty() || self.overlaps(&span) {
            return false;
        }
        self.inner.insert(span.start, (span.end, id));
        true
    }

    /// Admitted ids, ascending by start.
    pub fn ids_by_start(&self) -> Vec<ActivityId> {
        self.inner.values().map(|&(_, id)| id).collect()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
