//! Wall-clock sources.
//!
//! The display reads "now" through a [`Clock`] so that the zone used for the
//! New Year target is always the zone the instant came from. Production code
//! uses [`SystemClock`]; tests drive a hand-set clock instead.

use chrono::{DateTime, Local, TimeZone};

/// A source of the current instant.
pub trait Clock {
    /// Time zone of the instants this clock produces.
    type Tz: TimeZone;

    /// Returns the current instant.
    fn now(&self) -> DateTime<Self::Tz>;
}

/// The system clock in the local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    type Tz = Local;

    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}
