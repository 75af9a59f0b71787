//! `tt-schedule` — the two interval-selection algorithms and their inputs.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                   |
//! |-----------------|------------------------------------------------------------|
//! | [`record`]      | `TrackActivity`, `WeightedActivity`, raw records, `prepare_*` |
//! | [`predecessor`] | `predecessor` binary search over end-sorted activities     |
//! | [`track_set`]   | `TrackSet` disjoint-interval container for one track        |
//! | [`packer`]      | `pack_tracks`, `pack_tracks_detailed`, `TrackPacking`       |
//! | [`weighted`]    | `max_weight_schedule`, `solve_weighted`, `WeightedSchedule` |
//! | [`loader`]      | `load_track_csv`, `load_weighted_csv` and reader variants  |
//! | [`error`]       | `ScheduleError`, `ScheduleResult<T>`                       |
//!
//! # Algorithms (summary)
//!
//! ```text
//! pack_tracks:          for act in priority order:
//!                           if !tracks[act.track].overlaps(act.span): admit
//!                       emit each track's ids by start, tracks in first-seen order
//!
//! max_weight_schedule:  sort by end
//!                       dp[i] = max(dp[i-1], value[i] + dp[prev(i)])
//!                       backtrack from n-1, preferring exclusion on ties
//! ```
//!
//! Both are pure: every call allocates its own working set and nothing is
//! shared between calls.

pub mod error;
pub mod loader;
pub mod packer;
pub mod predecessor;
pub mod record;
pub mod track_set;
pub mod weighted;


pub use error::{ScheduleError, ScheduleResult};
pub use loader::{load_track_csv, load_track_reader, load_weighted_csv, load_weighted_reader};
pub use packer::{pack_tracks, pack_tracks_detailed, TrackPacking, TrackSelection};
pub use predecessor::predecessor;
pub use record::{
    prepare_tracks, prepare_weighted, RawTrackActivity, RawWeightedActivity, TrackActivity,
    Value, WeightedActivity,
};
pub use track_set::TrackSet;
pub use weighted::{max_weight_schedule, solve_weighted, WeightedSchedule};
