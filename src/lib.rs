#![warn(missing_docs)]

//! # newyear-countdown
//!
//! A terminal widget for [bubbletea-rs](https://github.com/joshka/bubbletea-rs)
//! that counts down to the next New Year: four animated circular progress
//! rings (days, hours, minutes, seconds) with Russian unit labels that agree
//! with the number in front of them.
//!
//! ## Overview
//!
//! The crate splits into a small pure core and the widgets built on it:
//!
//! - [`countdown`]: seconds until midnight of January 1 of the next year, in
//!   the local zone of the current instant, and the split into
//!   days/hours/minutes/seconds.
//! - [`plural`]: the one/few/many choice for Russian nouns after a number.
//! - [`ticker`]: a cancellable once-per-second tick.
//! - [`ring`]: an animated circular progress ring.
//! - [`display`]: the full countdown display, following the Elm Architecture
//!   with `init()`, `update()` and `view()`.
//!
//! ## Quick Start
//!
//! ```rust
//! use newyear_countdown::prelude::*;
//!
//! let mut countdown = Countdown::local(Theme::compact());
//! let _cmd = countdown.init();
//! assert!(countdown.is_active());
//!
//! let parts = countdown.parts();
//! assert!(parts.hours < 24);
//!
//! countdown.deactivate();
//! ```
//!
//! ## Integration with bubbletea-rs
//!
//! [`display::Model`] on the system clock implements `bubbletea_rs::Model`
//! directly, so it can be run as a program on its own, or embedded in a
//! larger model by forwarding messages to its `update()`:
//!
//! ```rust
//! use newyear_countdown::prelude::*;
//! use bubbletea_rs::{Cmd, Model, Msg};
//!
//! struct App {
//!     countdown: Countdown,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let mut countdown = Countdown::local(Theme::large());
//!         let cmd = countdown.init();
//!         (Self { countdown }, Some(cmd))
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         self.countdown.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.countdown.view()
//!     }
//! }
//! ```

pub mod clock;
pub mod countdown;
pub mod display;
pub mod error;
pub mod key;
pub mod plural;
pub mod ring;
pub mod theme;
pub mod ticker;
pub mod unit;

pub use clock::{Clock, SystemClock};
pub use countdown::{next_year_target, seconds_until_next_year, TimeParts};
pub use display::Model as Countdown;
pub use error::{Error, Result};
pub use plural::{plural_label, PluralCategory, PluralForms};
pub use ring::Model as Ring;
pub use theme::{Theme, ThemeOption};
pub use ticker::{TickMsg, Ticker};
pub use unit::TimeUnit;

/// Prelude module for convenient imports.
///
/// ```rust
/// use newyear_countdown::prelude::*;
///
/// assert_eq!(plural_label(3, "день", "дня", "дней"), "дня");
/// assert_eq!(TimeParts::decompose(90).minutes, 1);
/// ```
pub mod prelude {
    pub use crate::clock::{Clock, SystemClock};
    pub use crate::countdown::{next_year_target, seconds_until_next_year, TimeParts};
    pub use crate::display::Model as Countdown;
    pub use crate::plural::{plural_label, PluralCategory, PluralForms};
    pub use crate::ring::Model as Ring;
    pub use crate::theme::{Theme, ThemeOption};
    pub use crate::ticker::{TickMsg, Ticker};
    pub use crate::unit::TimeUnit;
}
