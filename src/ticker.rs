//! Cancellable repeating tick for Bubble Tea models.
//!
//! A [`Ticker`] is the handle for a once-per-interval refresh. Starting it
//! returns a command that delivers a [`TickMsg`]; each accepted tick is
//! answered with [`Ticker::next`] to schedule the following one.
//!
//! Commands that are already scheduled cannot be pulled back out of the
//! runtime, so cancellation works on the receiving end: every tick carries
//! the ticker's id and a tag, and [`Ticker::cancel`] bumps the tag. Ticks
//! that were in flight when the ticker was cancelled arrive with a stale tag
//! and are rejected by [`Ticker::accepts`].
//!
//! ```rust
//! use newyear_countdown::ticker::Ticker;
//!
//! let mut ticker = Ticker::new();
//! let _cmd = ticker.start();
//! assert!(ticker.is_active());
//!
//! ticker.cancel();
//! assert!(!ticker.is_active());
//! assert!(ticker.next().is_none());
//! ```

use bubbletea_rs::{tick as bubbletea_tick, Cmd, Msg};
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// Default refresh interval.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(1);

/// Message delivered once per interval by a running [`Ticker`].
///
/// # Message Filtering
///
/// A tick is only honoured by the ticker that scheduled it, and only while
/// that ticker's tag is unchanged:
/// - ticks with another ticker's id are ignored
/// - ticks scheduled before a [`Ticker::cancel`] or a restart are rejected
///
/// The tag is private so a tick can only be made by [`Ticker::start`] or
/// [`Ticker::next`].
#[derive(Debug, Clone)]
pub struct TickMsg {
    /// Id of the ticker that scheduled this tick.
    pub id: i64,
    tag: i64,
}

/// Handle for a repeating tick.
///
/// The ticker does not own a task or thread. It hands out commands for the
/// Bubble Tea runtime and decides, when each [`TickMsg`] comes back, whether
/// it still counts.
///
/// # Examples
///
/// Driving a tick chain from a model's `update`:
///
/// ```rust
/// use bubbletea_rs::{Cmd, Msg};
/// use newyear_countdown::ticker::{TickMsg, Ticker};
///
/// struct Refresher {
///     ticker: Ticker,
///     refreshes: u32,
/// }
///
/// impl Refresher {
///     fn update(&mut self, msg: Msg) -> Option<Cmd> {
///         let tick = msg.downcast_ref::<TickMsg>()?;
///         if !self.ticker.accepts(tick) {
///             return None;
///         }
///         self.refreshes += 1;
///         self.ticker.next()
///     }
/// }
///
/// let mut model = Refresher { ticker: Ticker::new(), refreshes: 0 };
/// let _first = model.ticker.start();
/// model.ticker.cancel();
/// assert!(!model.ticker.is_active());
/// ```
#[derive(Debug)]
pub struct Ticker {
    id: i64,
    tag: i64,
    interval: Duration,
    active: bool,
}

impl Ticker {
    /// Creates an inactive ticker with a one-second interval.
    pub fn new() -> Self {
        Self::with_interval(DEFAULT_INTERVAL)
    }

    /// Creates an inactive ticker with a custom interval.
    pub fn with_interval(interval: Duration) -> Self {
        Self {
            id: next_id(),
            tag: 0,
            interval,
            active: false,
        }
    }

    /// Unique id of this ticker.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Time between ticks.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Whether ticks are currently being accepted.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Activates the ticker and schedules the first tick.
    ///
    /// Starting an active ticker restarts it: the previous chain of ticks
    /// is invalidated so two chains never run side by side.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use newyear_countdown::ticker::Ticker;
    /// use std::time::Duration;
    ///
    /// let mut ticker = Ticker::with_interval(Duration::from_millis(250));
    /// assert!(!ticker.is_active());
    ///
    /// let _cmd = ticker.start();
    /// assert!(ticker.is_active());
    /// assert!(ticker.next().is_some());
    /// ```
    pub fn start(&mut self) -> Cmd {
        self.active = true;
        self.tag += 1;
        self.tick()
    }

    /// Stops the ticker. Ticks already scheduled are rejected when they
    /// arrive. Calling this on an inactive ticker does nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use newyear_countdown::ticker::Ticker;
    ///
    /// let mut ticker = Ticker::new();
    /// let _cmd = ticker.start();
    ///
    /// ticker.cancel();
    /// ticker.cancel();
    /// assert!(!ticker.is_active());
    /// assert!(ticker.next().is_none());
    /// ```
    pub fn cancel(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        self.tag += 1;
    }

    /// Whether `msg` belongs to the current, active chain of this ticker.
    pub fn accepts(&self, msg: &TickMsg) -> bool {
        self.active && msg.id == self.id && msg.tag == self.tag
    }

    /// Schedules the next tick, or `None` once cancelled.
    pub fn next(&self) -> Option<Cmd> {
        if !self.active {
            return None;
        }
        Some(self.tick())
    }

    fn tick(&self) -> Cmd {
        let id = self.id;
        let tag = self.tag;

        bubbletea_tick(self.interval, move |_| Box::new(TickMsg { id, tag }) as Msg)
    }

    #[cfg(test)]
    pub(crate) fn current_tick(&self) -> TickMsg {
        TickMsg {
            id: self.id,
            tag: self.tag,
        }
    }
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new()
    }
}
