//! Core error type.
//!
//! Sub-crates wrap `TtError` as one variant of their own error enum via
//! `#[from]`, so a time-format failure deep in record normalization surfaces
//! unchanged at the planner boundary.

use thiserror::Error;

/// The base error type for `tt-core` and a common variant for sub-crates.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TtError {
    /// A wall-clock time string did not match `HH:MM:SS`.
    #[error("invalid time {input:?}: {reason}")]
    Format { input: String, reason: String },

    /// A record was missing a required field or otherwise malformed.
    #[error("validation error: {0}")]
    Validation(String),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `tt-*` crates.
pub type TtResult<T> = Result<T, TtError>;
