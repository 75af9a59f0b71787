//! Activity records: the normalized inputs of both algorithms and the loose
//! records a data source delivers.
//!
//! # Two shapes
//!
//! The greedy packer and the weighted scheduler share only `id`, start and
//! end, so each gets its own statically typed record:
//!
//! - [`TrackActivity`]: `id`, `track`, normalized `Span<Minute>`.  Priority is
//!   the record's position in the input slice (index 0 wins every conflict).
//! - [`WeightedActivity`]: `id`, `start`, `end`, `value` over any ordered time
//!   type and any summable value type.
//!
//! # Boundary validation
//!
//! Sources deliver [`RawTrackActivity`] / [`RawWeightedActivity`], where every
//! field is optional.  [`prepare_tracks`] and [`prepare_weighted`] turn a whole
//! batch into typed records or fail on the first bad one; the algorithms never
//! see a partial batch.

use std::ops::Add;

use rustc_hash::FxHashSet;
use serde::Deserialize;
use tracing::debug;

use tt_core::{ActivityId, DayBoundary, Minute, Span, TrackId, TtError, TtResult};

// ── Value ─────────────────────────────────────────────────────────────────────

/// A summable, comparable weight.  `Default::default()` must be zero.
///
/// Implemented for every type meeting the bounds, so `i64`, `u32`, `f64`, …
/// all work.  Negative values are allowed.
pub trait Value: Copy + PartialOrd + Add<Output = Self> + Default {}

impl<V: Copy + PartialOrd + Add<Output = V> + Default> Value for V {}

// ── Typed records ─────────────────────────────────────────────────────────────

/// Greedy packer input: one activity on one track.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackActivity {
    pub id:    ActivityId,
    pub track: TrackId,
    pub span:  Span<Minute>,
}

impl TrackActivity {
    pub fn new(id: ActivityId, track: TrackId, start: Minute, end: Minute) -> Self {
        Self { id, track, span: Span::new(start, end) }
    }
}

/// Weighted scheduler input on a single timeline.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeightedActivity<T, V> {
    pub id:    ActivityId,
    pub start: T,
    pub end:   T,
    pub value: V,
}

impl<T, V> WeightedActivity<T, V> {
    pub fn new(id: ActivityId, start: T, end: T, value: V) -> Self {
        Self { id, start, end, value }
    }
}

// ── Raw records ───────────────────────────────────────────────────────────────

/// A timetable candidate as delivered by a data source, before validation.
///
/// Times are wall-clock `"HH:MM:SS"` strings.  `rank`, when present, makes the
/// caller's priority order explicit so it can be checked.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct RawTrackActivity {
    pub id:          Option<u32>,
    pub schedule_id: Option<u32>,
    pub start_time:  Option<String>,
    pub end_time:    Option<String>,
    #[serde(default)]
    pub rank:        Option<u32>,
}

impl RawTrackActivity {
    /// Convenience constructor for a complete record without rank.
    pub fn new(id: u32, schedule_id: u32, start_time: &str, end_time: &str) -> Self {
        Self {
            id:          Some(id),
            schedule_id: Some(schedule_id),
            start_time:  Some(start_time.to_owned()),
            end_time:    Some(end_time.to_owned()),
            rank:        None,
        }
    }

    pub fn with_rank(mut self, rank: u32) -> Self {
        self.rank = Some(rank);
        self
    }

    /// Check required fields and normalize both times with `boundary`.
    ///
    /// A missing field or an interval that is empty after normalization is a
    /// `Validation` error; an unparseable time is a `Format` error.
    pub fn normalize(&self, boundary: &DayBoundary) -> TtResult<TrackActivity> {
        let id = require(self.id, "id", self.id)?;
        let track = require(self.schedule_id, "schedule_id", self.id)?;
        let start_raw = require(self.start_time.as_deref(), "start_time", self.id)?;
        let end_raw = require(self.end_time.as_deref(), "end_time", self.id)?;

        let start = boundary.normalize_str(start_raw)?;
        let end = boundary.normalize_str(end_raw)?;
        if end <= start {
            return Err(TtError::Validation(format!(
                "activity {id}: end {end_raw} is not after start {start_raw}"
            )));
        }

        Ok(TrackActivity { id: ActivityId(id), track: TrackId(track), span: Span::new(start, end) })
    }
}

/// A weighted-scheduling candidate as delivered by a data source.
///
/// Times are already comparable integers; `value` is a float so integer and
/// fractional weights both load.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct RawWeightedActivity {
    pub id:         Option<u32>,
    pub start_time: Option<i64>,
    pub end_time:   Option<i64>,
    pub value:      Option<f64>,
}

impl RawWeightedActivity {
    pub fn new(id: u32, start_time: i64, end_time: i64, value: f64) -> Self {
        Self {
            id:         Some(id),
            start_time: Some(start_time),
            end_time:   Some(end_time),
            value:      Some(value),
        }
    }

    pub fn validate(&self) -> TtResult<WeightedActivity<i64, f64>> {
        let id = require(self.id, "id", self.id)?;
        let start = require(self.start_time, "start_time", self.id)?;
        let end = require(self.end_time, "end_time", self.id)?;
        let value = require(self.value, "value", self.id)?;

        if end < start {
            return Err(TtError::Validation(format!(
                "activity {id}: end {end} is before start {start}"
            )));
        }
        if !value.is_finite() {
            return Err(TtError::Validation(format!("activity {id}: value {value} is not finite")));
        }
        Ok(WeightedActivity::new(ActivityId(id), start, end, value))
    }
}

// ── Batch preparation ─────────────────────────────────────────────────────────

/// Validate and normalize a priority-ordered batch for [`crate::pack_tracks`].
///
/// Fails on the first malformed record, on a repeated id, or, when records
/// carry `rank`, on a rank lower than an earlier record's (input must be in
/// descending priority, i.e. non-decreasing rank).
pub fn prepare_tracks(
    raw: &[RawTrackActivity],
    boundary: &DayBoundary,
) -> TtResult<Vec<TrackActivity>> {
    let mut seen = FxHashSet::default();
    let mut last_rank: Option<u32> = None;
    let mut out = Vec::with_capacity(raw.len());

    for record in raw {
        let act = record.normalize(boundary)?;
        if !seen.insert(act.id) {
            return Err(TtError::Validation(format!("duplicate activity id {}", act.id.0)));
        }
        if let Some(rank) = record.rank {
            if let Some(prev) = last_rank.filter(|&prev| rank < prev) {
                return Err(TtError::Validation(format!(
                    "activity {} has rank {rank} after rank {prev}: input is not in priority order",
                    act.id.0
                )));
            }
            last_rank = Some(rank);
        }
        out.push(act);
    }

    debug!(records = out.len(), boundary = boundary.hour(), "prepared track activities");
    Ok(out)
}

/// Validate a batch for [`crate::max_weight_schedule`], rejecting repeated ids.
pub fn prepare_weighted(raw: &[RawWeightedActivity]) -> TtResult<Vec<WeightedActivity<i64, f64>>> {
    let mut seen = FxHashSet::default();
    let mut out = Vec::with_capacity(raw.len());

    for record in raw {
        let act = record.validate()?;
        if !seen.insert(act.id) {
            return Err(TtError::Validation(format!("duplicate activity id {}", act.id.0)));
        }
        out.push(act);
    }

    debug!(records = out.len(), "prepared weighted activities");
    Ok(out)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn require<T>(field: Option<T>, name: &str, id: Option<u32>) -> TtResult<T> {
    field.ok_or_else(|| match id {
        Some(id) => TtError::Validation(format!("activity {id}: missing field {name}")),
        None => TtError::Validation(format!("activity record missing field {name}")),
    })
}
