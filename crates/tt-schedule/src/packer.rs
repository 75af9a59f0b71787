//! Greedy multi-track interval packing.
//!
//! Activities arrive in descending priority.  Each track keeps a [`TrackSet`];
//! an activity is admitted iff it overlaps nothing already admitted on its
//! own track.  A rejected activity is dropped for good and an admitted one is
//! never displaced, so a lower-priority activity can never cost a
//! higher-priority one its slot.
//!
//! # Output order
//!
//! Per track, ids ascending by start; tracks concatenated in the order each
//! track first appears in the input.  Priority order is *not* preserved in the
//! output; callers that need it re-derive it from their own ranking.

use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use tt_core::{ActivityId, TrackId};

use crate::{TrackActivity, TrackSet};

/// Selection for one track, ascending by start.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrackSelection {
    pub track: TrackId,
    pub ids:   Vec<ActivityId>,
}

/// Full result of one packing run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TrackPacking {
    /// One entry per distinct track, in first-seen order.
    pub tracks:   Vec<TrackSelection>,
    /// Activities that lost a conflict, in input order.
    pub rejected: Vec<ActivityId>,
}

impl TrackPacking {
    /// Selected ids, track by track: the [`pack_tracks`] output.
    pub fn ids(&self) -> Vec<ActivityId> {
        self.tracks.iter().flat_map(|t| t.ids.iter().copied()).collect()
    }

    pub fn selected_count(&self) -> usize {
        self.tracks.iter().map(|t| t.ids.len()).sum()
    }
}

/// Select a maximal non-overlapping subset per track, resolving every conflict
/// in favour of the earlier (higher-priority) activity.
///
/// `activities` must be in descending priority order; this is not checked
/// here (see [`crate::prepare_tracks`]).  Empty input yields empty output.
pub fn pack_tracks(activities: &[TrackActivity]) -> Vec<ActivityId> {
    pack_tracks_detailed(activities).ids()
}

/// Like [`pack_tracks`] but keeps the per-track split and the rejected ids.
pub fn pack_tracks_detailed(activities: &[TrackActivity]) -> TrackPacking {
    // Tracks in first-seen order; the map only indexes into `tracks`.
    let mut tracks: Vec<(TrackId, TrackSet)> = Vec::new();
    let mut index: FxHashMap<TrackId, usize> = FxHashMap::default();
    let mut rejected = Vec::new();

    for act in activities {
        let slot = *index.entry(act.track).or_insert_with(|| {
            tracks.push((act.track, TrackSet::new()));
            tracks.len() - 1
        });
        let (_, set) = &mut tracks[slot];
        if !set.try_admit(act.span, act.id) {
            trace!(id = act.id.0, track = act.track.0, span = %act.span, "activity rejected");
            rejected.push(act.id);
        }
    }

    let packing = TrackPacking {
        tracks: tracks
            .into_iter()
            .map(|(track, set)| TrackSelection { track, ids: set.ids_by_start() })
            .collect(),
        rejected,
    };

    debug!(
        input = activities.len(),
        tracks = packing.tracks.len(),
        selected = packing.selected_count(),
        rejected = packing.rejected.len(),
        "packed tracks"
    );
    packing
}
