//! CSV record loader.
//!
//! # CSV formats
//!
//! Track records, one row per activity, in descending priority order:
//!
//! ```csv
//! id,schedule_id,start_time,end_time,rank
//! 17,1,22:00:00,23:30:00,0
//! 4,2,23:00:00,01:00:00,1
//! 9,1,23:00:00,00:30:00,2
//! ```
//!
//! The `rank` column is optional.  Weighted records:
//!
//! ```csv
//! id,start_time,end_time,value
//! 1,0,5,5
//! 2,3,8,6.5
//! ```
//!
//! An empty cell loads as a missing field.  Loading only checks CSV syntax
//! and cell types; missing fields and bad times are reported later by
//! [`crate::prepare_tracks`] / [`crate::prepare_weighted`].

use std::io::Read;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::{RawTrackActivity, RawWeightedActivity, ScheduleError};

// ── Public API ────────────────────────────────────────────────────────────────

/// Load raw track records from a CSV file, preserving row order.
pub fn load_track_csv(path: &Path) -> Result<Vec<RawTrackActivity>, ScheduleError> {
    let file = std::fs::File::open(path).map_err(ScheduleError::Io)?;
    load_track_reader(file)
}

/// Like [`load_track_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or loading from network
/// streams.
pub fn load_track_reader<R: Read>(reader: R) -> Result<Vec<RawTrackActivity>, ScheduleError> {
    load_rows(reader)
}

/// Load raw weighted records from a CSV file.
pub fn load_weighted_csv(path: &Path) -> Result<Vec<RawWeightedActivity>, ScheduleError> {
    let file = std::fs::File::open(path).map_err(ScheduleError::Io)?;
    load_weighted_reader(file)
}

/// Like [`load_weighted_csv`] but accepts any `Read` source.
pub fn load_weighted_reader<R: Read>(reader: R) -> Result<Vec<RawWeightedActivity>, ScheduleError> {
    load_rows(reader)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn load_rows<R: Read, T: DeserializeOwned>(reader: R) -> Result<Vec<T>, ScheduleError> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    csv_reader
        .deserialize::<T>()
        .map(|row| row.map_err(|e| ScheduleError::Parse(e.to_string())))
        .collect()
}
