//! Circular progress ring.
//!
//! A ring is a circle of glyphs drawn on the terminal grid, filled clockwise
//! from twelve o'clock. The current number sits in the middle row and the
//! unit label sits underneath. Cells are roughly twice as tall as they are
//! wide, so the grid is `4r + 1` columns by `2r + 1` rows.
//!
//! Fill changes are animated with a damped spring: [`Model::set_fraction`]
//! moves the target and returns a command that starts a stream of
//! [`FrameMsg`]s, which [`Model::update`] consumes until the shown fill
//! settles.
//!
//! ```rust
//! use newyear_countdown::ring;
//! use newyear_countdown::theme::Theme;
//!
//! let ring = ring::new(&Theme::compact());
//! let view = ring.view_as(0.5, 30, "секунд");
//! assert!(view.contains("30"));
//! assert!(view.contains("секунд"));
//! ```

use crate::theme::Theme;
use bubbletea_rs::{tick as bubbletea_tick, Cmd, Msg};
use lipgloss_extras::lipgloss::{Color, Style};
use std::f64::consts::TAU;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;
use unicode_width::UnicodeWidthStr;

static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

const FPS: u32 = 60;

/// Animation frame for one ring.
#[derive(Debug, Clone)]
pub struct FrameMsg {
    id: i64,
    tag: i64,
}

#[derive(Debug, Clone)]
struct Spring {
    frequency: f64,
    damping: f64,
    fps: f64,
}

impl Spring {
    fn new(fps: f64, frequency: f64, damping: f64) -> Self {
        Self {
            frequency,
            damping,
            fps,
        }
    }

    fn update(&self, position: f64, velocity: f64, target: f64) -> (f64, f64) {
        let dt = 1.0 / self.fps;
        let spring_force = -self.frequency * (position - target);
        let damping_force = -self.damping * velocity;
        let acceleration = spring_force + damping_force;

        let new_velocity = velocity + acceleration * dt;
        let new_position = position + new_velocity * dt;

        (new_position, new_velocity)
    }
}

/// Which part of the ring grid a cell belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cell {
    Path,
    Trail,
    Blank,
}

/// Animated ring widget.
///
/// Each ring has its own id, and every fill change bumps its tag, so frames
/// meant for another ring or for an older target are dropped in
/// [`Model::update`].
///
/// # Examples
///
/// ```rust
/// use newyear_countdown::ring;
/// use newyear_countdown::theme::{self, with_glyphs, with_radius};
///
/// let mut ring = ring::new(&theme::new(&[with_radius(2), with_glyphs('#', '.')]));
///
/// // A new target starts the animation.
/// let first_frame = ring.set_fraction(0.5);
/// assert!(first_frame.is_some());
/// assert!(ring.is_animating());
/// assert_eq!(ring.shown_fraction(), 0.0);
///
/// // The same target again schedules nothing.
/// assert!(ring.set_fraction(0.5).is_none());
/// ```
#[derive(Debug, Clone)]
pub struct Model {
    id: i64,
    tag: i64,

    radius: i32,
    grid_width: usize,
    grid_height: usize,
    path_glyph: char,
    trail_glyph: char,
    path_style: Style,
    trail_style: Style,
    text_style: Style,

    spring: Spring,
    shown: f64,
    target: f64,
    velocity: f64,
}

/// Creates an empty ring styled by `theme`.
pub fn new(theme: &Theme) -> Model {
    Model {
        id: next_id(),
        tag: 0,
        radius: theme.radius,
        grid_width: theme.ring_width(),
        grid_height: theme.ring_height(),
        path_glyph: theme.path_glyph,
        trail_glyph: theme.trail_glyph,
        path_style: Style::new().foreground(Color::from(theme.path_color.as_str())),
        trail_style: Style::new().foreground(Color::from(theme.trail_color.as_str())),
        text_style: Style::new()
            .foreground(Color::from(theme.text_color.as_str()))
            .bold(true),
        spring: Spring::new(FPS as f64, theme.frequency, theme.damping),
        shown: 0.0,
        target: 0.0,
        velocity: 0.0,
    }
}

impl Model {
    /// Fill the ring is animating toward.
    pub fn fraction(&self) -> f64 {
        self.target
    }

    /// Fill currently drawn.
    pub fn shown_fraction(&self) -> f64 {
        self.shown
    }

    /// Moves the fill target, clamped to `0.0..=1.0`.
    ///
    /// Returns the first animation frame, or `None` when the target did not
    /// change. Frames from an earlier target become stale.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use newyear_countdown::ring;
    /// use newyear_countdown::theme::Theme;
    ///
    /// let mut ring = ring::new(&Theme::default());
    /// let _cmd = ring.set_fraction(1.7);
    /// assert_eq!(ring.fraction(), 1.0);
    /// ```
    pub fn set_fraction(&mut self, f: f64) -> Option<Cmd> {
        let f = f.clamp(0.0, 1.0);
        if f == self.target {
            return None;
        }
        self.target = f;
        self.tag += 1;
        Some(self.next_frame())
    }

    /// Advances the animation on this ring's frames; other messages are
    /// ignored.
    pub fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        let frame = msg.downcast_ref::<FrameMsg>()?;
        if frame.id != self.id || frame.tag != self.tag {
            return None;
        }

        if !self.is_animating() {
            self.shown = self.target;
            self.velocity = 0.0;
            return None;
        }

        let (shown, velocity) = self.spring.update(self.shown, self.velocity, self.target);
        self.shown = shown;
        self.velocity = velocity;

        Some(self.next_frame())
    }

    /// Whether the shown fill is still moving toward the target.
    pub fn is_animating(&self) -> bool {
        let dist = (self.shown - self.target).abs();
        !(dist < 0.001 && self.velocity.abs() < 0.01)
    }

    /// Renders the ring at its current animated fill.
    pub fn view_with(&self, value: u64, label: &str) -> String {
        self.view_as(self.shown, value, label)
    }

    /// Renders the ring at an explicit fill.
    ///
    /// The block is `ring_width()` columns wide and `ring_height() + 1` rows
    /// tall for the theme it was built with, widened when the number or the
    /// label does not fit.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use newyear_countdown::ring;
    /// use newyear_countdown::theme::{self, with_glyphs, with_radius};
    ///
    /// let theme = theme::new(&[with_radius(2), with_glyphs('#', '.')]);
    /// let ring = ring::new(&theme);
    ///
    /// let view = ring.view_as(1.0, 7, "дней");
    /// assert_eq!(view.lines().count(), theme.ring_height() + 1);
    /// assert!(view.contains('#'));
    /// assert!(!view.contains('.'));
    /// ```
    pub fn view_as(&self, fraction: f64, value: u64, label: &str) -> String {
        let fraction = fraction.clamp(0.0, 1.0);
        let text = value.to_string();
        let label_width = UnicodeWidthStr::width(label);
        let block_width = self.grid_width.max(text.len()).max(label_width);

        let mut lines = Vec::with_capacity(self.grid_height + 1);
        for row in 0..self.grid_height as i32 {
            let cells: Vec<Cell> = (0..self.grid_width as i32)
                .map(|col| self.cell(row, col, fraction))
                .collect();

            let (line, width) = if row == self.radius {
                self.center_row(&cells, &text)
            } else {
                let line: String = cells.iter().map(|c| self.render_cell(*c)).collect();
                (line, self.grid_width)
            };
            lines.push(center(&line, width, block_width));
        }

        lines.push(center(&self.text_style.render(label), label_width, block_width));
        lines.join("\n")
    }

    fn cell(&self, row: i32, col: i32, fraction: f64) -> Cell {
        let r = self.radius as f64;
        let dx = (col as f64 - 2.0 * r) / 2.0;
        let dy = row as f64 - r;
        let dist = (dx * dx + dy * dy).sqrt();

        if (dist - r).abs() >= 0.5 {
            return Cell::Blank;
        }

        let mut angle = dx.atan2(-dy);
        if angle < 0.0 {
            angle += TAU;
        }
        if angle / TAU < fraction {
            Cell::Path
        } else {
            Cell::Trail
        }
    }

    fn render_cell(&self, cell: Cell) -> String {
        match cell {
            Cell::Path => self.path_style.render(&self.path_glyph.to_string()),
            Cell::Trail => self.trail_style.render(&self.trail_glyph.to_string()),
            Cell::Blank => " ".to_string(),
        }
    }

    // The middle row keeps its two arc cells and prints the number across
    // the blank interior between them. Returns the row and its visible width.
    fn center_row(&self, cells: &[Cell], text: &str) -> (String, usize) {
        let first = cells.iter().position(|c| *c != Cell::Blank).unwrap_or(0);
        let last = cells.iter().rposition(|c| *c != Cell::Blank).unwrap_or(0);
        let interior = last.saturating_sub(first + 1);

        if text.len() > interior {
            return (self.text_style.render(text), text.len());
        }

        let pad_left = (interior - text.len()) / 2;
        let pad_right = interior - text.len() - pad_left;
        let mut out = String::new();
        for cell in &cells[..=first] {
            out.push_str(&self.render_cell(*cell));
        }
        out.push_str(&" ".repeat(pad_left));
        out.push_str(&self.text_style.render(text));
        out.push_str(&" ".repeat(pad_right));
        for cell in &cells[last..] {
            out.push_str(&self.render_cell(*cell));
        }
        (out, cells.len())
    }

    fn next_frame(&self) -> Cmd {
        let id = self.id;
        let tag = self.tag;
        let duration = Duration::from_nanos(1_000_000_000 / FPS as u64);

        bubbletea_tick(duration, move |_| Box::new(FrameMsg { id, tag }) as Msg)
    }

    #[cfg(test)]
    pub(crate) fn current_frame(&self) -> FrameMsg {
        FrameMsg {
            id: self.id,
            tag: self.tag,
        }
    }
}

fn center(styled: &str, visible_width: usize, width: usize) -> String {
    let pad = width.saturating_sub(visible_width);
    let left = pad / 2;
    format!("{}{}{}", " ".repeat(left), styled, " ".repeat(pad - left))
}
