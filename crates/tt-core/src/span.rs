//! Half-open intervals on a totally ordered timeline.

use std::fmt;

use crate::{Minute, TtError, TtResult};

/// The half-open range `[start, end)` an activity occupies.
///
/// Two spans that merely touch (`a.end == b.start`) do not overlap, so back
/// to back sets on the same stage are both admissible.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span<T = Minute> {
    pub start: T,
    pub end:   T,
}

impl<T: Ord + Copy> Span<T> {
    /// # Panics
    ///
    /// Panics in debug mode if `start >= end`.
    pub fn new(start: T, end: T) -> Self {
        debug_assert!(start < end, "Span start must be before end");
        Self { start, end }
    }

    /// Like [`Span::new`] but reports an empty or inverted range as a
    /// validation error instead of asserting.
    pub fn try_new(start: T, end: T) -> TtResult<Self>
    where
        T: fmt::Debug,
    {
        if start < end {
            Ok(Self { start, end })
        } else {
            Err(TtError::Validation(format!(
                "span end {end:?} is not after start {start:?}"
            )))
        }
    }

    #[inline]
    pub fn overlaps(&self, other: &Span<T>) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// `true` for an empty or inverted range.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

impl<T: fmt::Display> fmt::Display for Span<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}
