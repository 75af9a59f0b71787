//! `tt-core` — foundational types for the `rust_tt` timetable planner.
//!
//! This crate is a dependency of every other `tt-*` crate.  It has no `tt-*`
//! dependencies and minimal external ones (`chrono`, `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `ActivityId`, `TrackId`, `QuizId`                     |
//! | [`time`]        | `Minute`, `DayBoundary`, `parse_time`, `normalize_time` |
//! | [`span`]        | `Span<T>` half-open interval                          |
//! | [`config`]      | `PlannerConfig`                                       |
//! | [`rng`]         | `SampleRng`                                           |
//! | [`error`]       | `TtError`, `TtResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to ids, spans, and config.  |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod span;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::PlannerConfig;
pub use error::{TtError, TtResult};
pub use ids::{ActivityId, QuizId, TrackId};
pub use rng::SampleRng;
pub use span::Span;
pub use time::{normalize_time, parse_time, DayBoundary, Minute};
