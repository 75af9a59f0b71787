//! Collaborator interfaces consumed by the planner.
//!
//! The planner never talks to a database or HTTP service directly.  The
//! application implements these traits over whatever client it uses and
//! hands them to [`crate::Planner::new`].
//!
//! # Contract
//!
//! - Implementations may block on I/O; retries belong here, not in the
//!   scheduling algorithms.
//! - Implementations must be `Send + Sync` so one planner can serve
//!   concurrent requests.

use tt_core::{ActivityId, QuizId};
use tt_schedule::RawTrackActivity;

use crate::SelectResult;

/// A ranked swipe candidate.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Candidate {
    pub id:    ActivityId,
    /// Match score against the user's quiz; higher is better.
    pub score: f64,
}

/// Everything needed to show one selected activity.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DisplayRecord {
    pub id:          ActivityId,
    pub title:       String,
    pub description: String,
    pub image_uri:   Option<String>,
    pub start_time:  String,
    pub end_time:    String,
    /// Name of the track (stage) the activity runs on.
    pub track_title: Option<String>,
}

/// Supplies candidate activities for a quiz.
pub trait ActivitySource: Send + Sync {
    /// Timetable candidates for `quiz`, in descending priority order.
    fn ranked_activities(&self, quiz: QuizId) -> SelectResult<Vec<RawTrackActivity>>;

    /// Up to `match_count` swipe candidates for `quiz`, best match first.
    fn matching_candidates(&self, quiz: QuizId, match_count: usize) -> SelectResult<Vec<Candidate>>;
}

/// Fetches display records for selected ids.
pub trait DisplayLookup: Send + Sync {
    /// Records for `ids`, in no particular order.  Unknown ids may be
    /// omitted.
    fn display_records(&self, ids: &[ActivityId]) -> SelectResult<Vec<DisplayRecord>>;
}
