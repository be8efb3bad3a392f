//! The four units shown by the countdown.

use crate::countdown::TimeParts;
use crate::plural::{self, PluralForms};

/// A unit displayed as one ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    /// Whole days.
    Days,
    /// Hours within the day.
    Hours,
    /// Minutes within the hour.
    Minutes,
    /// Seconds within the minute.
    Seconds,
}

impl TimeUnit {
    /// Display order, largest unit first.
    pub const ALL: [TimeUnit; 4] = [
        TimeUnit::Days,
        TimeUnit::Hours,
        TimeUnit::Minutes,
        TimeUnit::Seconds,
    ];

    /// The value that draws a full ring.
    pub fn max(self) -> u64 {
        match self {
            TimeUnit::Days => 365,
            TimeUnit::Hours => 24,
            TimeUnit::Minutes | TimeUnit::Seconds => 60,
        }
    }

    /// The unit's word triple.
    pub fn forms(self) -> PluralForms {
        match self {
            TimeUnit::Days => plural::DAYS,
            TimeUnit::Hours => plural::HOURS,
            TimeUnit::Minutes => plural::MINUTES,
            TimeUnit::Seconds => plural::SECONDS,
        }
    }

    /// Picks this unit's field out of `parts`.
    pub fn value(self, parts: &TimeParts) -> u64 {
        match self {
            TimeUnit::Days => parts.days,
            TimeUnit::Hours => parts.hours,
            TimeUnit::Minutes => parts.minutes,
            TimeUnit::Seconds => parts.seconds,
        }
    }

    /// Ring fill for `value`, clamped to `0.0..=1.0`.
    ///
    /// A 366-day countdown in a leap year saturates at a full ring.
    pub fn fraction(self, value: u64) -> f64 {
        (value as f64 / self.max() as f64).clamp(0.0, 1.0)
    }

    /// The label that agrees with `value`, e.g. "дня" for 3 days.
    pub fn label(self, value: u64) -> &'static str {
        self.forms().select(value)
    }
}
