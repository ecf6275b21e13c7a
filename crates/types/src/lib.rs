//! Core types module - shared data structures and constants
//!
//! This module defines the plain data exchanged between a game, the terminal
//! surface and the loop controller. Nothing here performs I/O, so the types are
//! usable from game logic, renderers and tests alike.
//!
//! # Screen Layout
//!
//! The terminal is split into two bordered regions stacked vertically:
//!
//! | Region | Rows | Offset |
//! |--------|------|--------|
//! | play   | `total_height - STATUS_HEIGHT` | `(0, 0)` |
//! | status | `STATUS_HEIGHT` | `(total_height - STATUS_HEIGHT, 0)` |
//!
//! Both regions span the full terminal width. Every region reserves a one-cell
//! border on each side; drawable coordinates are relative to the *interior*.
//!
//! # Examples
//!
//! ```
//! use tui_runner_types::{Color, Drawable};
//!
//! let star = Drawable::glyph(3, 0, '*').with_color(Color::Yellow);
//! assert_eq!(star.position(), (3, 0));
//! assert_eq!(star.resolved_color(), Color::Yellow);
//!
//! let ship = Drawable::texture(10, 4, ["/^\\", "###"]);
//! assert_eq!(ship.height(), 2);
//! assert_eq!(ship.resolved_color(), Color::White);
//! ```

/// Height of the status region in rows, border included.
pub const STATUS_HEIGHT: u16 = 5;

/// Width of the border drawn around every region, in cells.
pub const BORDER: u16 = 1;

/// Smallest width or height a region may have (border + one interior cell + border).
pub const MIN_REGION_SIDE: u16 = 2 * BORDER + 1;

/// Interior row the status text is anchored at (screen row 2 inside the status box).
pub const STATUS_ANCHOR_ROW: u16 = 1;

/// Interior column the status text is anchored at (screen column 3 inside the status box).
pub const STATUS_ANCHOR_COL: u16 = 2;

/// Glyph used for the left and right border.
pub const BORDER_SIDE: char = '|';

/// Glyph used for the top and bottom border.
pub const BORDER_EDGE: char = '-';

/// Glyph used where two border lines meet.
pub const BORDER_CORNER: char = '+';

/// Glyph written into cleared interior cells.
pub const BLANK: char = ' ';

/// The fixed color palette.
///
/// Every color is drawn on a black background. [`Color::White`] is the default
/// for drawables that do not carry a color of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    #[default]
    White,
    Red,
    Blue,
    Green,
    Cyan,
    Magenta,
    Yellow,
}

impl Color {
    /// All palette entries, in registration order.
    pub const ALL: [Color; 7] = [
        Color::White,
        Color::Red,
        Color::Blue,
        Color::Green,
        Color::Cyan,
        Color::Magenta,
        Color::Yellow,
    ];

    /// Parse a color name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_runner_types::Color;
    ///
    /// assert_eq!(Color::from_str("red"), Some(Color::Red));
    /// assert_eq!(Color::from_str("CYAN"), Some(Color::Cyan));
    /// assert_eq!(Color::from_str("orange"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "white" => Some(Color::White),
            "red" => Some(Color::Red),
            "blue" => Some(Color::Blue),
            "green" => Some(Color::Green),
            "cyan" => Some(Color::Cyan),
            "magenta" => Some(Color::Magenta),
            "yellow" => Some(Color::Yellow),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Red => "red",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Cyan => "cyan",
            Color::Magenta => "magenta",
            Color::Yellow => "yellow",
        }
    }
}

/// A positioned entity the game wants drawn this frame.
///
/// `x`/`y` are interior cell coordinates of the play region, origin top-left.
/// A texture is drawn one row per element, starting at `y` and moving down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Drawable {
    Glyph {
        x: u16,
        y: u16,
        ch: char,
        color: Option<Color>,
    },
    Texture {
        x: u16,
        y: u16,
        rows: Vec<String>,
        color: Option<Color>,
    },
}

impl Drawable {
    pub fn glyph(x: u16, y: u16, ch: char) -> Self {
        Drawable::Glyph {
            x,
            y,
            ch,
            color: None,
        }
    }

    pub fn texture<I, S>(x: u16, y: u16, rows: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Drawable::Texture {
            x,
            y,
            rows: rows.into_iter().map(Into::into).collect(),
            color: None,
        }
    }

    pub fn with_color(mut self, c: Color) -> Self {
        match &mut self {
            Drawable::Glyph { color, .. } | Drawable::Texture { color, .. } => *color = Some(c),
        }
        self
    }

    /// `(x, y)` in play-region interior coordinates.
    pub fn position(&self) -> (u16, u16) {
        match self {
            Drawable::Glyph { x, y, .. } | Drawable::Texture { x, y, .. } => (*x, *y),
        }
    }

    pub fn color(&self) -> Option<Color> {
        match self {
            Drawable::Glyph { color, .. } | Drawable::Texture { color, .. } => *color,
        }
    }

    /// The color to draw with: the entity's own, else the palette default.
    pub fn resolved_color(&self) -> Color {
        self.color().unwrap_or_default()
    }

    /// Number of rows the entity occupies, saturating at `u16::MAX`.
    pub fn height(&self) -> u16 {
        match self {
            Drawable::Glyph { .. } => 1,
            Drawable::Texture { rows, .. } => u16::try_from(rows.len()).unwrap_or(u16::MAX),
        }
    }
}

/// Identifies one of the two surface regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionId {
    /// The larger area where game entities are drawn.
    Play,
    /// The strip below the play area holding the status line.
    Status,
}

impl RegionId {
    /// Both regions, in flush order.
    pub const ALL: [RegionId; 2] = [RegionId::Play, RegionId::Status];

    pub fn as_str(&self) -> &'static str {
        match self {
            RegionId::Play => "play",
            RegionId::Status => "status",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_anchor_sits_inside_border() {
        assert_eq!(STATUS_ANCHOR_ROW + BORDER, 2);
        assert_eq!(STATUS_ANCHOR_COL + BORDER, 3);
        assert!(STATUS_ANCHOR_ROW + BORDER < STATUS_HEIGHT - BORDER);
    }

    #[test]
    fn color_names_round_trip_through_the_palette() {
        for c in Color::ALL {
            assert_eq!(Color::from_str(c.as_str()), Some(c));
        }
        assert_eq!(Color::default(), Color::White);
    }

    #[test]
    fn with_color_applies_to_both_variants() {
        let g = Drawable::glyph(0, 0, '@').with_color(Color::Red);
        let t = Drawable::texture(0, 0, ["ab"]).with_color(Color::Blue);
        assert_eq!(g.color(), Some(Color::Red));
        assert_eq!(t.color(), Some(Color::Blue));
    }

    #[test]
    fn texture_height_counts_rows() {
        let t = Drawable::texture(2, 1, ["##", "##", "##"]);
        assert_eq!(t.height(), 3);
        assert_eq!(t.position(), (2, 1));
        assert_eq!(Drawable::glyph(5, 5, 'x').height(), 1);
    }

    #[test]
    fn oversized_texture_height_saturates() {
        let rows = vec![String::new(); u16::MAX as usize + 2];
        assert_eq!(Drawable::texture(0, 0, rows).height(), u16::MAX);
    }
}
