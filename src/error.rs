//! Error type for countdown computations.

use thiserror::Error;

/// Errors raised while resolving the next New Year instant.
///
/// The countdown itself cannot fail for a sane clock; these variants cover
/// calendar edge cases where the target instant has no representation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Local midnight of January 1 does not exist in the clock's time zone
    /// (skipped by a zone transition).
    #[error("midnight of January 1, {year} does not exist in the local time zone")]
    NonexistentLocalTime {
        /// The target year.
        year: i32,
    },

    /// The target year is outside the range chrono can represent.
    #[error("year {year} is out of range")]
    YearOutOfRange {
        /// The year that could not be represented.
        year: i32,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
