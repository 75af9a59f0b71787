//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  Ids are opaque to the scheduling
//! algorithms: they are carried through and returned verbatim.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

typed_id! {
    /// Identifier of a schedulable activity, as assigned by the data source.
    pub struct ActivityId(u32);
}

typed_id! {
    /// Identifier of a track (stage / schedule).  Activities on different
    /// tracks never conflict.
    pub struct TrackId(u32);
}

typed_id! {
    /// Opaque key of a user's quiz/profile, used to query the data source.
    pub struct QuizId(u64);
}
