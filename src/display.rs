//! The New Year countdown display.
//!
//! [`Model`] owns everything the widget needs while it is on screen: the
//! clock, a [`Ticker`] for the once-per-second refresh, one animated ring
//! per unit, and the theme. Its life has two edges:
//!
//! - **Activation** ([`Model::init`]) recomputes the countdown from the
//!   clock and starts the ticker.
//! - **Teardown** ([`Model::deactivate`]) cancels the ticker. From then on
//!   every message is ignored: stray ticks, animation frames and keys
//!   neither change state nor schedule more work. Dropping the model tears
//!   it down as well.
//!
//! Each accepted tick replaces the remaining-seconds value wholesale with a
//! fresh reading of the clock, so a year rollover needs no special casing:
//! the first tick at or after midnight measures against the following year.
//!
//! ```rust
//! use chrono::{DateTime, FixedOffset, TimeZone};
//! use newyear_countdown::clock::Clock;
//! use newyear_countdown::display::Model;
//! use newyear_countdown::theme::Theme;
//!
//! struct Frozen;
//!
//! impl Clock for Frozen {
//!     type Tz = FixedOffset;
//!
//!     fn now(&self) -> DateTime<FixedOffset> {
//!         let msk = FixedOffset::east_opt(3 * 3600).unwrap();
//!         msk.with_ymd_and_hms(2025, 12, 31, 23, 0, 0).unwrap()
//!     }
//! }
//!
//! let mut display = Model::new(Frozen, Theme::compact());
//! let _cmd = display.init();
//!
//! assert_eq!(display.seconds_left(), 3600);
//! assert_eq!(display.target_year(), Some(2026));
//! assert!(display.view().contains("2026"));
//!
//! display.deactivate();
//! assert!(!display.is_active());
//! ```

use crate::clock::{Clock, SystemClock};
use crate::countdown::{seconds_until_next_year, TimeParts};
use crate::key::KeyMap;
use crate::ring;
use crate::theme::Theme;
use crate::ticker::{TickMsg, Ticker};
use crate::unit::TimeUnit;
use bubbletea_rs::{batch, quit, Cmd, KeyMsg, Model as BubbleTeaModel, Msg};
use chrono::Datelike;
use lipgloss_extras::lipgloss::{self, Color, Style};
use std::time::Duration;
use tracing::{debug, info, trace, warn};
use unicode_width::UnicodeWidthStr;

/// Countdown display model.
///
/// Generic over its [`Clock`] so the countdown can be driven by a fixed or
/// manual clock; the default is the local system clock, which is also the
/// type that implements `bubbletea_rs::Model`.
///
/// # Examples
///
/// ```rust
/// use newyear_countdown::prelude::*;
/// use std::time::Duration;
///
/// let mut countdown = Countdown::local(Theme::large())
///     .with_tick_interval(Duration::from_millis(500));
/// assert!(!countdown.is_active());
///
/// let _cmd = countdown.init();
/// assert!(countdown.is_active());
/// assert!(countdown.target_year().is_some());
///
/// countdown.deactivate();
/// ```
#[derive(Debug)]
pub struct Model<C: Clock = SystemClock> {
    clock: C,
    theme: Theme,
    ticker: Ticker,
    rings: [ring::Model; 4],
    /// Bindings for quitting.
    pub keymap: KeyMap,
    title_style: Style,
    seconds_left: u64,
    target_year: Option<i32>,
}

impl<C: Clock> Model<C> {
    /// Creates an inactive display and takes a first reading of `clock`.
    pub fn new(clock: C, theme: Theme) -> Self {
        let rings = std::array::from_fn(|_| ring::new(&theme));
        let title_style = Style::new()
            .foreground(Color::from(theme.text_color.as_str()))
            .bold(true);

        let mut model = Self {
            clock,
            theme,
            ticker: Ticker::new(),
            rings,
            keymap: KeyMap::default(),
            title_style,
            seconds_left: 0,
            target_year: None,
        };
        model.recompute();
        model
    }

    /// Replaces the refresh interval. Takes effect on the next [`Model::init`].
    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.ticker.cancel();
        self.ticker = Ticker::with_interval(interval);
        self
    }

    /// Whole seconds left until the next New Year, as of the last refresh.
    pub fn seconds_left(&self) -> u64 {
        self.seconds_left
    }

    /// The remaining time split into units.
    pub fn parts(&self) -> TimeParts {
        TimeParts::decompose(self.seconds_left)
    }

    /// The year being counted down to, or `None` until the clock has given
    /// a usable reading.
    pub fn target_year(&self) -> Option<i32> {
        self.target_year
    }

    /// Whether the display is between activation and teardown.
    pub fn is_active(&self) -> bool {
        self.ticker.is_active()
    }

    /// The theme the display was built with.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Activates the display: refreshes from the clock and starts ticking.
    ///
    /// Calling this again restarts the ticker; ticks from the earlier run
    /// are ignored.
    pub fn init(&mut self) -> Cmd {
        debug!(ticker = self.ticker.id(), "countdown display activated");
        let mut cmds = self.refresh();
        cmds.push(self.ticker.start());
        batch(cmds)
    }

    /// Tears the display down. Idempotent.
    ///
    /// Cancels the ticker. Afterwards [`Model::update`] returns `None` for
    /// every message, so ticks and animation frames still in flight are
    /// dropped without touching state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use newyear_countdown::prelude::*;
    ///
    /// let mut countdown = Countdown::local(Theme::compact());
    /// let _cmd = countdown.init();
    ///
    /// countdown.deactivate();
    /// countdown.deactivate();
    /// assert!(!countdown.is_active());
    /// ```
    pub fn deactivate(&mut self) {
        if !self.ticker.is_active() {
            return;
        }
        self.ticker.cancel();
        debug!(ticker = self.ticker.id(), "countdown display deactivated");
    }

    /// Handles ticks, animation frames and quit keys.
    ///
    /// - An accepted [`TickMsg`] rereads the clock, retargets the rings and
    ///   schedules the next tick.
    /// - A quit key tears the display down and returns `bubbletea_rs::quit()`.
    /// - Ring frames advance the matching ring's animation.
    ///
    /// Anything else, and everything after teardown, returns `None`.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if !self.is_active() {
            return None;
        }

        if let Some(tick) = msg.downcast_ref::<TickMsg>() {
            if !self.ticker.accepts(tick) {
                return None;
            }
            let mut cmds = self.refresh();
            cmds.extend(self.ticker.next());
            return Some(batch(cmds));
        }

        if let Some(key) = msg.downcast_ref::<KeyMsg>() {
            if self.keymap.quit.matches(key) {
                self.deactivate();
                return Some(quit());
            }
            return None;
        }

        self.rings.iter_mut().find_map(|ring| ring.update(&msg))
    }

    /// Renders the title and the four rings.
    pub fn view(&self) -> String {
        let parts = self.parts();

        let mut blocks: Vec<String> = Vec::with_capacity(TimeUnit::ALL.len() * 2);
        for (ring, unit) in self.rings.iter().zip(TimeUnit::ALL) {
            if !blocks.is_empty() {
                blocks.push(" ".repeat(self.theme.gap));
            }
            let value = unit.value(&parts);
            blocks.push(ring.view_with(value, unit.label(value)));
        }
        let block_refs: Vec<&str> = blocks.iter().map(String::as_str).collect();
        let rings = lipgloss::join_horizontal(lipgloss::TOP, &block_refs);

        let year = match self.target_year {
            Some(year) if self.theme.show_title => year,
            _ => return rings,
        };

        let title = format!("До {} года осталось", year);
        let width = rings
            .lines()
            .map(|line| lipgloss::width_visible(line))
            .max()
            .unwrap_or(0);
        let pad = width.saturating_sub(UnicodeWidthStr::width(title.as_str())) / 2;

        format!(
            "{}{}\n\n{}",
            " ".repeat(pad),
            self.title_style.render(&title),
            rings
        )
    }

    // Reads the clock, replaces the countdown and retargets the rings.
    fn refresh(&mut self) -> Vec<Cmd> {
        self.recompute();

        let parts = self.parts();
        self.rings
            .iter_mut()
            .zip(TimeUnit::ALL)
            .filter_map(|(ring, unit)| ring.set_fraction(unit.fraction(unit.value(&parts))))
            .collect()
    }

    fn recompute(&mut self) {
        let now = self.clock.now();
        let year = now.year().saturating_add(1);

        let seconds = match seconds_until_next_year(&now) {
            Ok(seconds) => seconds,
            Err(err) => {
                warn!(error = %err, "could not resolve New Year target; keeping last value");
                return;
            }
        };

        if let Some(previous) = self.target_year {
            let step = self.ticker.interval().as_secs().max(1);
            if year > previous {
                info!(from = previous, to = year, "new year reached, retargeting countdown");
            } else if year < previous || seconds > self.seconds_left + step {
                warn!(
                    previous = self.seconds_left,
                    current = seconds,
                    "clock moved backward"
                );
            }
        }

        trace!(seconds, year, "countdown refreshed");
        self.seconds_left = seconds;
        self.target_year = Some(year);
    }
}

impl<C: Clock> Drop for Model<C> {
    fn drop(&mut self) {
        self.deactivate();
    }
}

impl Model<SystemClock> {
    /// A display on the local system clock.
    pub fn local(theme: Theme) -> Self {
        Self::new(SystemClock, theme)
    }
}

impl Default for Model<SystemClock> {
    fn default() -> Self {
        Self::local(Theme::default())
    }
}

impl BubbleTeaModel for Model<SystemClock> {
    fn init() -> (Self, Option<Cmd>) {
        let mut model = Model::default();
        let cmd = model.init();
        (model, Some(cmd))
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::countdown::SECONDS_PER_DAY;
    use crate::theme::{self, without_title};
    use chrono::{DateTime, NaiveDate, TimeZone, Utc};
    use crossterm::event::{KeyCode, KeyModifiers};
    use std::sync::{Arc, Mutex};

    #[derive(Debug, Clone)]
    struct ManualClock(Arc<Mutex<DateTime<Utc>>>);

    impl ManualClock {
        fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> Self {
            let now = Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap();
            Self(Arc::new(Mutex::new(now)))
        }

        fn advance(&self, secs: i64) {
            let mut now = self.0.lock().unwrap();
            *now += chrono::Duration::seconds(secs);
        }

        fn set(&self, now: DateTime<Utc>) {
            *self.0.lock().unwrap() = now;
        }
    }

    impl Clock for ManualClock {
        type Tz = Utc;

        fn now(&self) -> DateTime<Utc> {
            *self.0.lock().unwrap()
        }
    }

    fn tick(model: &Model<ManualClock>) -> Msg {
        Box::new(model.ticker.current_tick())
    }

    fn plain(s: &str) -> String {
        String::from_utf8(strip_ansi_escapes::strip(s)).unwrap()
    }

    #[test]
    fn test_new_reads_clock_but_stays_inactive() {
        let clock = ManualClock::at(2025, 12, 31, 23, 59, 0);
        let model = Model::new(clock, Theme::default());

        assert_eq!(model.seconds_left(), 60);
        assert_eq!(model.target_year(), Some(2026));
        assert!(!model.is_active());
    }

    #[test]
    fn test_init_recomputes_and_activates() {
        let clock = ManualClock::at(2025, 12, 31, 23, 59, 0);
        let mut model = Model::new(clock.clone(), Theme::default());

        clock.advance(30);
        let _cmd = model.init();

        assert!(model.is_active());
        assert_eq!(model.seconds_left(), 30);
    }

    #[test]
    fn test_each_tick_counts_down_by_one() {
        let clock = ManualClock::at(2025, 6, 15, 12, 0, 0);
        let mut model = Model::new(clock.clone(), Theme::default());
        let _cmd = model.init();
        let start = model.seconds_left();

        for n in 1..=5 {
            clock.advance(1);
            let next = model.update(tick(&model));
            assert!(next.is_some());
            assert_eq!(model.seconds_left(), start - n);
        }
    }

    #[test]
    fn test_parts_follow_seconds() {
        let clock = ManualClock::at(2025, 12, 30, 22, 58, 57);
        let model = Model::new(clock, Theme::default());
        assert_eq!(
            model.parts(),
            TimeParts { days: 1, hours: 1, minutes: 1, seconds: 3 }
        );
    }

    #[test]
    fn test_rollover_retargets_next_year() {
        let clock = ManualClock::at(2025, 12, 31, 23, 59, 59);
        let mut model = Model::new(clock.clone(), Theme::default());
        let _cmd = model.init();
        assert_eq!(model.seconds_left(), 1);
        assert_eq!(model.target_year(), Some(2026));

        clock.advance(1);
        let _next = model.update(tick(&model));

        assert_eq!(model.target_year(), Some(2027));
        assert_eq!(model.seconds_left(), 365 * SECONDS_PER_DAY);
    }

    #[test]
    fn test_clock_moving_backward_never_goes_negative() {
        let clock = ManualClock::at(2026, 1, 1, 0, 0, 5);
        let mut model = Model::new(clock.clone(), Theme::default());
        let _cmd = model.init();

        clock.advance(-10);
        let _next = model.update(tick(&model));

        assert_eq!(model.target_year(), Some(2026));
        assert_eq!(model.seconds_left(), 5);
    }

    #[test]
    fn test_stray_tick_after_teardown_changes_nothing() {
        let clock = ManualClock::at(2025, 3, 1, 8, 0, 0);
        let mut model = Model::new(clock.clone(), Theme::default());
        let _cmd = model.init();
        let in_flight = model.ticker.current_tick();
        let before = model.seconds_left();

        model.deactivate();
        clock.advance(10);

        assert!(model.update(Box::new(in_flight)).is_none());
        assert_eq!(model.seconds_left(), before);
        assert!(!model.is_active());
    }

    #[test]
    fn test_frames_ignored_after_teardown() {
        let clock = ManualClock::at(2025, 3, 1, 8, 0, 0);
        let mut model = Model::new(clock, Theme::default());
        let _cmd = model.init();
        let frame: Msg = Box::new(model.rings[3].current_frame());
        let shown = model.rings[3].shown_fraction();

        model.deactivate();

        assert!(model.update(frame).is_none());
        assert_eq!(model.rings[3].shown_fraction(), shown);
    }

    #[test]
    fn test_frames_animate_rings_while_active() {
        let clock = ManualClock::at(2025, 3, 1, 8, 0, 30);
        let mut model = Model::new(clock, Theme::default());
        let _cmd = model.init();

        let frame: Msg = Box::new(model.rings[3].current_frame());
        assert!(model.update(frame).is_some());
        assert!(model.rings[3].shown_fraction() > 0.0);
    }

    #[test]
    fn test_deactivate_is_idempotent() {
        let clock = ManualClock::at(2025, 3, 1, 8, 0, 0);
        let mut model = Model::new(clock, Theme::default());
        let _cmd = model.init();

        model.deactivate();
        model.deactivate();
        assert!(!model.is_active());
    }

    #[test]
    fn test_reinit_ignores_previous_run() {
        let clock = ManualClock::at(2025, 3, 1, 8, 0, 0);
        let mut model = Model::new(clock.clone(), Theme::default());
        let _first = model.init();
        let old = model.ticker.current_tick();
        let _second = model.init();
        let before = model.seconds_left();

        clock.advance(1);
        assert!(model.update(Box::new(old)).is_none());
        assert_eq!(model.seconds_left(), before);
    }

    #[test]
    fn test_quit_key_tears_down() {
        let clock = ManualClock::at(2025, 3, 1, 8, 0, 0);
        let mut model = Model::new(clock.clone(), Theme::default());
        let _cmd = model.init();
        let pending = model.ticker.current_tick();

        let quit_key = KeyMsg {
            key: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
        };
        assert!(model.update(Box::new(quit_key)).is_some());
        assert!(!model.is_active());

        clock.advance(1);
        assert!(model.update(Box::new(pending)).is_none());
    }

    #[test]
    fn test_other_keys_are_ignored() {
        let clock = ManualClock::at(2025, 3, 1, 8, 0, 0);
        let mut model = Model::new(clock, Theme::default());
        let _cmd = model.init();

        let key = KeyMsg {
            key: KeyCode::Char('x'),
            modifiers: KeyModifiers::NONE,
        };
        assert!(model.update(Box::new(key)).is_none());
        assert!(model.is_active());
    }

    #[test]
    fn test_view_shows_title_values_and_labels() {
        let clock = ManualClock::at(2025, 12, 29, 21, 58, 38);
        let model = Model::new(clock, Theme::compact());
        let view = plain(&model.view());

        assert!(view.contains("До 2026 года осталось"));
        // 2 days, 2 hours, 1 minute, 22 seconds
        for text in ["2", "дня", "часа", "минута", "22", "секунды"] {
            assert!(view.contains(text), "missing {:?} in\n{}", text, view);
        }
    }

    #[test]
    fn test_view_without_title() {
        let clock = ManualClock::at(2025, 12, 29, 21, 58, 38);
        let model = Model::new(clock, theme::new(&[without_title()]));
        let view = plain(&model.view());
        assert!(!view.contains("осталось"));
        assert!(view.contains("секунды"));
    }

    #[test]
    fn test_view_is_stable_without_ticks() {
        let clock = ManualClock::at(2025, 3, 1, 8, 0, 0);
        let model = Model::new(clock.clone(), Theme::default());
        let first = model.view();
        clock.advance(5);
        assert_eq!(model.view(), first);
    }

    fn end_of_calendar() -> DateTime<Utc> {
        NaiveDate::MAX.and_hms_opt(0, 0, 0).unwrap().and_utc()
    }

    #[test]
    fn test_failed_reading_keeps_last_value() {
        let clock = ManualClock::at(2025, 12, 31, 23, 0, 0);
        let mut model = Model::new(clock.clone(), Theme::default());
        let _cmd = model.init();
        assert_eq!(model.seconds_left(), 3600);

        clock.set(end_of_calendar());
        let next = model.update(tick(&model));

        assert!(next.is_some(), "ticking continues after a failed reading");
        assert!(model.is_active());
        assert_eq!(model.seconds_left(), 3600);
        assert_eq!(model.target_year(), Some(2026));
    }

    #[test]
    fn test_no_title_until_first_good_reading() {
        let clock = ManualClock::at(2025, 1, 1, 0, 0, 0);
        clock.set(end_of_calendar());
        let mut model = Model::new(clock.clone(), Theme::default());
        let _cmd = model.init();

        assert_eq!(model.target_year(), None);
        assert_eq!(model.seconds_left(), 0);
        let view = plain(&model.view());
        assert!(!view.contains("осталось"), "{}", view);
        assert!(view.contains("секунд"));

        clock.set(Utc.with_ymd_and_hms(2025, 12, 31, 23, 59, 0).unwrap());
        let _next = model.update(tick(&model));

        assert_eq!(model.target_year(), Some(2026));
        assert_eq!(model.seconds_left(), 60);
        assert!(plain(&model.view()).contains("До 2026 года осталось"));
    }

    #[test]
    fn test_custom_tick_interval() {
        let clock = ManualClock::at(2025, 12, 31, 23, 59, 0);
        let mut model = Model::new(clock.clone(), Theme::default())
            .with_tick_interval(Duration::from_millis(500));
        assert!(!model.is_active());

        let _cmd = model.init();
        assert_eq!(model.ticker.interval(), Duration::from_millis(500));

        // Two ticks per second: the count only moves when the clock does.
        let _next = model.update(tick(&model));
        assert_eq!(model.seconds_left(), 60);

        clock.advance(1);
        let _next = model.update(tick(&model));
        assert_eq!(model.seconds_left(), 59);
    }
}
