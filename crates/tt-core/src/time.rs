//! Wall-clock parsing and the canonical minute timeline.
//!
//! # Design
//!
//! Activities arrive with time-of-day strings (`"23:30:00"`) but a festival
//! "day" runs from 08:00 to 08:00 the next morning: a set starting at 01:00
//! happens *after* one starting at 23:00.  Comparing raw hours would sort it
//! first.  `DayBoundary` fixes this by mapping every time before the boundary
//! hour onto the following calendar day:
//!
//! ```text
//! hour <  boundary  →  minutes = hour*60 + minute + 1440
//! hour >= boundary  →  minutes = hour*60 + minute
//! ```
//!
//! With the default boundary of 8, `08:00` → 480, `23:30` → 1410 and
//! `07:59` → 1919.  The result is a `Minute`, an integer offset that orders
//! correctly across midnight.

use std::fmt;

use chrono::{NaiveTime, Timelike};

use crate::{TtError, TtResult};

/// Wall-clock format of activity times.
pub const TIME_FORMAT: &str = "%H:%M:%S";

// ── Minute ────────────────────────────────────────────────────────────────────

/// A point on the canonical timeline, in minutes since 00:00 of the
/// session's first calendar day.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Minute(pub u32);

impl Minute {
    /// Minutes in one calendar day.
    pub const DAY: u32 = 24 * 60;
}

impl fmt::Display for Minute {
    /// Renders as `+D HH:MM`, where `D` is the day offset from the first day.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let day = self.0 / Minute::DAY;
        let rem = self.0 % Minute::DAY;
        write!(f, "+{} {:02}:{:02}", day, rem / 60, rem % 60)
    }
}

// ── Parsing ───────────────────────────────────────────────────────────────────

/// Parse an `HH:MM:SS` wall-clock time.
///
/// The seconds field must be present but carries no weight in normalization.
pub fn parse_time(input: &str) -> TtResult<NaiveTime> {
    NaiveTime::parse_from_str(input, TIME_FORMAT).map_err(|e| TtError::Format {
        input:  input.to_owned(),
        reason: e.to_string(),
    })
}

// ── DayBoundary ───────────────────────────────────────────────────────────────

/// The hour at which one programme "day" hands over to the next.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DayBoundary {
    hour: u8,
}

impl DayBoundary {
    pub const DEFAULT_HOUR: u8 = 8;

    pub fn new(hour: u8) -> TtResult<Self> {
        if hour > 23 {
            return Err(TtError::Config(format!("day boundary hour {hour} exceeds 23")));
        }
        Ok(Self { hour })
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// Map a wall-clock time onto the canonical timeline.
    ///
    /// Hours strictly before the boundary wrap to the next day; the boundary
    /// hour itself does not.
    #[inline]
    pub fn normalize(&self, t: NaiveTime) -> Minute {
        let base = t.hour() * 60 + t.minute();
        if t.hour() < self.hour as u32 {
            Minute(base + Minute::DAY)
        } else {
            Minute(base)
        }
    }

    /// Parse and normalize in one step.
    pub fn normalize_str(&self, input: &str) -> TtResult<Minute> {
        parse_time(input).map(|t| self.normalize(t))
    }
}

impl Default for DayBoundary {
    fn default() -> Self {
        Self { hour: Self::DEFAULT_HOUR }
    }
}

/// Parse an `HH:MM:SS` string and normalize it with the default 08:00 boundary.
pub fn normalize_time(input: &str) -> TtResult<Minute> {
    DayBoundary::default().normalize_str(input)
}
