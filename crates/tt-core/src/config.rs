//! Planner configuration.
//!
//! Typically loaded from a TOML/JSON file by the application crate and passed
//! to `tt_select::Planner`.

use crate::{DayBoundary, TtError, TtResult};

/// Top-level planner configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlannerConfig {
    /// Hour (0–23) at which one programme day hands over to the next.
    /// Default: 8.
    pub day_boundary_hour: u8,

    /// How many ranked candidates to request from the source for swipes.
    pub match_count: usize,

    /// How many of those candidates are presented.  Must be in
    /// `1..=match_count`.
    pub sample_size: usize,

    /// `true` = rank-weighted roulette sampling, `false` = uniform.
    pub roulette: bool,

    /// Seed for the caller's `SampleRng`.  The same seed always produces the
    /// same swipe selection for the same candidates.
    pub seed: u64,
}

impl PlannerConfig {
    pub fn validate(&self) -> TtResult<()> {
        if self.day_boundary_hour > 23 {
            return Err(TtError::Config(format!(
                "day_boundary_hour {} exceeds 23",
                self.day_boundary_hour
            )));
        }
        if self.sample_size == 0 {
            return Err(TtError::Config("sample_size must be > 0".into()));
        }
        if self.sample_size > self.match_count {
            return Err(TtError::Config(format!(
                "sample_size {} exceeds match_count {}",
                self.sample_size, self.match_count
            )));
        }
        Ok(())
    }

    /// The `DayBoundary` used to normalize activity times.
    pub fn day_boundary(&self) -> TtResult<DayBoundary> {
        DayBoundary::new(self.day_boundary_hour)
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            day_boundary_hour: DayBoundary::DEFAULT_HOUR,
            match_count:       10,
            sample_size:       8,
            roulette:          false,
            seed:              0,
        }
    }
}
