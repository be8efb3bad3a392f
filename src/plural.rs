//! Russian plural selection for unit labels.
//!
//! Russian nouns after a number take one of three forms depending on the
//! last two digits of the number:
//!
//! | Category | Rule | Example |
//! |----------|------|---------|
//! | `One` | ends in 1, but not 11 | 1 день, 21 день, 101 день |
//! | `Few` | ends in 2-4, but not 12-14 | 2 дня, 23 дня, 104 дня |
//! | `Many` | everything else | 5 дней, 11 дней, 14 дней, 20 дней |
//!
//! ```rust
//! use newyear_countdown::plural::{plural_label, DAYS};
//!
//! assert_eq!(plural_label(21, "день", "дня", "дней"), "день");
//! assert_eq!(DAYS.select(12), "дней");
//! ```

/// The grammatical number chosen for a quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluralCategory {
    /// Singular-like form ("день").
    One,
    /// Paucal form for 2-4 ("дня").
    Few,
    /// Genitive plural ("дней").
    Many,
}

impl PluralCategory {
    /// Picks the category for `value` using its last two decimal digits.
    pub fn for_value(value: u64) -> Self {
        let last = value % 10;
        let last_two = value % 100;

        if last == 1 && last_two != 11 {
            PluralCategory::One
        } else if (2..=4).contains(&last) && !(10..20).contains(&last_two) {
            PluralCategory::Few
        } else {
            PluralCategory::Many
        }
    }
}

/// The one/few/many word triple for a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PluralForms {
    /// Form used with 1, 21, 31, ...
    pub one: &'static str,
    /// Form used with 2-4, 22-24, ...
    pub few: &'static str,
    /// Form used with 0, 5-20, 25-30, ...
    pub many: &'static str,
}

impl PluralForms {
    /// Creates a word triple.
    pub const fn new(one: &'static str, few: &'static str, many: &'static str) -> Self {
        Self { one, few, many }
    }

    /// Returns the form for a category.
    pub fn form(&self, category: PluralCategory) -> &'static str {
        match category {
            PluralCategory::One => self.one,
            PluralCategory::Few => self.few,
            PluralCategory::Many => self.many,
        }
    }

    /// Returns the form that agrees with `value`.
    pub fn select(&self, value: u64) -> &'static str {
        self.form(PluralCategory::for_value(value))
    }
}

/// Day forms.
pub const DAYS: PluralForms = PluralForms::new("день", "дня", "дней");
/// Hour forms.
pub const HOURS: PluralForms = PluralForms::new("час", "часа", "часов");
/// Minute forms.
pub const MINUTES: PluralForms = PluralForms::new("минута", "минуты", "минут");
/// Second forms.
pub const SECONDS: PluralForms = PluralForms::new("секунда", "секунды", "секунд");

/// Returns whichever of `one`, `few` or `many` agrees with `value`.
pub fn plural_label<'a>(value: u64, one: &'a str, few: &'a str, many: &'a str) -> &'a str {
    match PluralCategory::for_value(value) {
        PluralCategory::One => one,
        PluralCategory::Few => few,
        PluralCategory::Many => many,
    }
}
