//! Sizing and colour configuration for the countdown display.
//!
//! A [`Theme`] is built from a list of options applied over the defaults,
//! the same way the ring and display widgets are configured elsewhere in
//! the crate:
//!
//! ```rust
//! use newyear_countdown::theme::{new, with_gap, with_path_color, with_radius};
//!
//! let theme = new(&[
//!     with_radius(4),
//!     with_gap(6),
//!     with_path_color("#FF00FF".to_string()),
//! ]);
//! assert_eq!(theme.radius, 4);
//! assert_eq!(theme.path_color, "#FF00FF");
//! ```
//!
//! Two presets cover the usual layouts: [`Theme::compact`] for narrow
//! terminals and [`Theme::large`] (the default) for full-screen use.

/// Smallest ring radius that still draws a closed ring.
pub const MIN_RADIUS: i32 = 1;

const DEFAULT_RADIUS: i32 = 3;
const DEFAULT_GAP: usize = 4;
const COMPACT_RADIUS: i32 = 2;
const COMPACT_GAP: usize = 2;

/// Default spring frequency for the ring fill animation.
pub const DEFAULT_FREQUENCY: f64 = 30.0;
/// Default spring damping for the ring fill animation.
pub const DEFAULT_DAMPING: f64 = 11.0;

/// Configuration option for [`new`].
#[derive(Debug, Clone)]
pub enum ThemeOption {
    /// Ring radius in terminal rows.
    WithRadius(i32),
    /// Blank columns between rings.
    WithGap(usize),
    /// Colour of the filled arc.
    WithPathColor(String),
    /// Colour of the unfilled arc.
    WithTrailColor(String),
    /// Colour of numbers, labels and the title.
    WithTextColor(String),
    /// Glyphs for the filled and unfilled arc.
    WithGlyphs(char, char),
    /// Hide the title line.
    WithoutTitle,
    /// Spring frequency and damping for the fill animation.
    WithSpringOptions(f64, f64),
}

impl ThemeOption {
    fn apply(&self, t: &mut Theme) {
        match self {
            ThemeOption::WithRadius(radius) => {
                t.radius = (*radius).max(MIN_RADIUS);
            }
            ThemeOption::WithGap(gap) => {
                t.gap = *gap;
            }
            ThemeOption::WithPathColor(color) => {
                t.path_color = color.clone();
            }
            ThemeOption::WithTrailColor(color) => {
                t.trail_color = color.clone();
            }
            ThemeOption::WithTextColor(color) => {
                t.text_color = color.clone();
            }
            ThemeOption::WithGlyphs(path, trail) => {
                t.path_glyph = *path;
                t.trail_glyph = *trail;
            }
            ThemeOption::WithoutTitle => {
                t.show_title = false;
            }
            ThemeOption::WithSpringOptions(frequency, damping) => {
                t.frequency = *frequency;
                t.damping = *damping;
            }
        }
    }
}

/// Sets the ring radius. Values below [`MIN_RADIUS`] are raised to it.
pub fn with_radius(radius: i32) -> ThemeOption {
    ThemeOption::WithRadius(radius)
}

/// Sets the gap between rings.
pub fn with_gap(gap: usize) -> ThemeOption {
    ThemeOption::WithGap(gap)
}

/// Sets the filled arc colour.
pub fn with_path_color(color: String) -> ThemeOption {
    ThemeOption::WithPathColor(color)
}

/// Sets the unfilled arc colour.
pub fn with_trail_color(color: String) -> ThemeOption {
    ThemeOption::WithTrailColor(color)
}

/// Sets the text colour.
pub fn with_text_color(color: String) -> ThemeOption {
    ThemeOption::WithTextColor(color)
}

/// Sets the arc glyphs.
pub fn with_glyphs(path: char, trail: char) -> ThemeOption {
    ThemeOption::WithGlyphs(path, trail)
}

/// Hides the title.
pub fn without_title() -> ThemeOption {
    ThemeOption::WithoutTitle
}

/// Sets the spring parameters of the fill animation.
pub fn with_spring_options(frequency: f64, damping: f64) -> ThemeOption {
    ThemeOption::WithSpringOptions(frequency, damping)
}

/// Layout and colours of the countdown display.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Ring radius in rows. Rings are twice as wide as they are tall.
    pub radius: i32,
    /// Blank columns between adjacent rings.
    pub gap: usize,
    /// Filled arc colour.
    pub path_color: String,
    /// Unfilled arc colour.
    pub trail_color: String,
    /// Colour of numbers, labels and the title.
    pub text_color: String,
    /// Glyph for filled arc cells.
    pub path_glyph: char,
    /// Glyph for unfilled arc cells.
    pub trail_glyph: char,
    /// Whether the "До N года осталось" title is drawn.
    pub show_title: bool,
    /// Spring frequency of the fill animation.
    pub frequency: f64,
    /// Spring damping of the fill animation.
    pub damping: f64,
}

/// Builds a theme from the defaults plus `opts`, applied in order.
pub fn new(opts: &[ThemeOption]) -> Theme {
    let mut t = Theme {
        radius: DEFAULT_RADIUS,
        gap: DEFAULT_GAP,
        path_color: "#00FFFF".to_string(),
        trail_color: "#222222".to_string(),
        text_color: "#FFFFFF".to_string(),
        path_glyph: '●',
        trail_glyph: '●',
        show_title: true,
        frequency: DEFAULT_FREQUENCY,
        damping: DEFAULT_DAMPING,
    };

    for opt in opts {
        opt.apply(&mut t);
    }

    t
}

impl Theme {
    /// Small rings with narrow gaps.
    pub fn compact() -> Self {
        new(&[with_radius(COMPACT_RADIUS), with_gap(COMPACT_GAP)])
    }

    /// Large rings with wide gaps.
    pub fn large() -> Self {
        new(&[])
    }

    /// Width of one ring cell in columns.
    pub fn ring_width(&self) -> usize {
        (4 * self.radius + 1) as usize
    }

    /// Height of one ring in rows.
    pub fn ring_height(&self) -> usize {
        (2 * self.radius + 1) as usize
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::large()
    }
}
