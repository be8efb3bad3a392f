//! Countdown engine: time remaining until the next New Year.
//!
//! The engine is two pure steps. [`seconds_until_next_year`] measures the
//! whole seconds between an instant and midnight of January 1 of the
//! following year, in the instant's own time zone. [`TimeParts::decompose`]
//! splits that count into days, hours, minutes and seconds.
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use newyear_countdown::countdown::{seconds_until_next_year, TimeParts};
//!
//! let now = Utc.with_ymd_and_hms(2025, 12, 30, 22, 58, 57).unwrap();
//! let left = seconds_until_next_year(&now).unwrap();
//! let parts = TimeParts::decompose(left);
//!
//! assert_eq!((parts.days, parts.hours, parts.minutes, parts.seconds), (1, 1, 1, 3));
//! ```

use crate::error::{Error, Result};
use chrono::{DateTime, Datelike, NaiveDate, TimeZone};

/// Seconds in a day.
pub const SECONDS_PER_DAY: u64 = 86_400;
/// Seconds in an hour.
pub const SECONDS_PER_HOUR: u64 = 3_600;
/// Seconds in a minute.
pub const SECONDS_PER_MINUTE: u64 = 60;

/// Returns midnight of January 1 of the year after `now`, in `now`'s zone.
///
/// If the zone repeats local midnight the earliest of the two instants is
/// used. A zone that skips midnight entirely yields
/// [`Error::NonexistentLocalTime`].
pub fn next_year_target<Tz: TimeZone>(now: &DateTime<Tz>) -> Result<DateTime<Tz>> {
    let current = now.year();
    let year = current
        .checked_add(1)
        .ok_or(Error::YearOutOfRange { year: current })?;

    let midnight = NaiveDate::from_ymd_opt(year, 1, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or(Error::YearOutOfRange { year })?;

    now.timezone()
        .from_local_datetime(&midnight)
        .earliest()
        .ok_or(Error::NonexistentLocalTime { year })
}

/// Whole seconds from `now` until the next New Year, rounded down.
///
/// The result is never negative: a target that is somehow behind `now`
/// (a clock that stepped backward mid-computation) reads as zero.
pub fn seconds_until_next_year<Tz: TimeZone>(now: &DateTime<Tz>) -> Result<u64> {
    let target = next_year_target(now)?;
    let remaining = target.signed_duration_since(now.clone()).num_seconds();
    Ok(u64::try_from(remaining).unwrap_or(0))
}

/// A count of seconds broken into calendar-free units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TimeParts {
    /// Whole days.
    pub days: u64,
    /// Hours past the last whole day, `0..24`.
    pub hours: u64,
    /// Minutes past the last whole hour, `0..60`.
    pub minutes: u64,
    /// Seconds past the last whole minute, `0..60`.
    pub seconds: u64,
}

impl TimeParts {
    /// Splits `total_seconds` with floor division by 86400, 3600 and 60.
    pub fn decompose(total_seconds: u64) -> Self {
        Self {
            days: total_seconds / SECONDS_PER_DAY,
            hours: (total_seconds % SECONDS_PER_DAY) / SECONDS_PER_HOUR,
            minutes: (total_seconds % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE,
            seconds: total_seconds % SECONDS_PER_MINUTE,
        }
    }

    /// Recombines the parts into a second count.
    pub fn total_seconds(&self) -> u64 {
        self.days * SECONDS_PER_DAY
            + self.hours * SECONDS_PER_HOUR
            + self.minutes * SECONDS_PER_MINUTE
            + self.seconds
    }
}

impl From<u64> for TimeParts {
    fn from(total_seconds: u64) -> Self {
        Self::decompose(total_seconds)
    }
}
