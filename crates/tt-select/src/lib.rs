//! `tt-select` — turns a user's quiz into a timetable or a swipe deck.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`source`]   | `ActivitySource`, `DisplayLookup` traits; `Candidate`, `DisplayRecord` |
//! | [`sampling`] | `uniform_sample`, `roulette_sample`                        |
//! | [`planner`]  | `Planner` (timetable + swipes)                             |
//! | [`error`]    | `SelectError`, `SelectResult<T>`                           |
//!
//! # Request flow
//!
//! ```text
//! timetable(quiz):  source.ranked_activities  →  prepare_tracks  →  pack_tracks
//!                   →  lookup.display_records  →  re-order by selection
//!
//! swipes(quiz):     source.matching_candidates  →  sample indices  →  candidates
//! ```
//!
//! Collaborators are injected into `Planner`; nothing here holds a global
//! client handle or any state shared between requests.

pub mod error;
pub mod planner;
pub mod sampling;
pub mod source;

#[cfg(test)]
mod tests;

pub use error::{SelectError, SelectResult};
pub use planner::{order_by_selection, Planner};
pub use sampling::{roulette_sample, uniform_sample};
pub use source::{ActivitySource, Candidate, DisplayLookup, DisplayRecord};
