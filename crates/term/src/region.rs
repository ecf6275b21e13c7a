//! A bordered rectangular character region.
//!
//! The border is drawn once when the region is created and is never touched
//! again: every write goes through interior coordinates, which are shifted by
//! one cell on each axis and clipped at the interior edge.
//!
//! Characters are stored by display width. A double-width character takes two
//! cells, the second holding [`WIDE_TAIL`]. Control characters, zero-width
//! characters and a double-width character that would straddle the right edge
//! are stored as [`PLACEHOLDER`], so game text can never emit escape
//! sequences or shift the border.

use unicode_width::UnicodeWidthChar;

use crate::fb::{Cell, FrameBuffer, WIDE_TAIL};
use crate::layout::RegionRect;
use crate::types::{Color, RegionId, BLANK, BORDER, BORDER_CORNER, BORDER_EDGE, BORDER_SIDE};

/// Stored in place of a character that cannot occupy its cells.
pub const PLACEHOLDER: char = '?';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    id: RegionId,
    rect: RegionRect,
    buf: FrameBuffer,
}

impl Region {
    pub fn new(id: RegionId, rect: RegionRect) -> Self {
        let mut region = Self {
            id,
            rect,
            buf: FrameBuffer::new(rect.width, rect.height),
        };
        region.draw_border();
        region
    }

    pub fn id(&self) -> RegionId {
        self.id
    }

    pub fn rect(&self) -> RegionRect {
        self.rect
    }

    /// Region-local buffer, border included.
    pub fn buffer(&self) -> &FrameBuffer {
        &self.buf
    }

    pub fn interior_width(&self) -> u16 {
        self.rect.interior_width()
    }

    pub fn interior_height(&self) -> u16 {
        self.rect.interior_height()
    }

    /// Write one character at interior `(row, col)`.
    ///
    /// Returns `false` when the coordinate lies outside the interior; nothing is
    /// written in that case.
    pub fn write_glyph(&mut self, row: u16, col: u16, ch: char, color: Color) -> bool {
        self.put_glyph(row, col, ch, color) > 0
    }

    /// Write `text` left to right starting at interior `(row, col)`.
    ///
    /// Returns the number of characters clipped at the interior edge.
    pub fn write_str(&mut self, row: u16, col: u16, text: &str, color: Color) -> usize {
        let mut clipped = 0;
        let mut at = Some(col);
        for ch in text.chars() {
            let width = at.map_or(0, |c| self.put_glyph(row, c, ch, color));
            if width == 0 {
                clipped += 1;
            }
            at = at.and_then(|c| c.checked_add(width.max(1)));
        }
        clipped
    }

    /// Store `ch` and return the number of columns it took, 0 if clipped.
    fn put_glyph(&mut self, row: u16, col: u16, ch: char, color: Color) -> u16 {
        let width = self.interior_width();
        if row >= self.interior_height() || col >= width {
            return 0;
        }
        let (ch, cols) = if ch.is_control() {
            (PLACEHOLDER, 1)
        } else {
            match ch.width() {
                Some(1) => (ch, 1),
                Some(2) if col + 1 < width => (ch, 2),
                _ => (PLACEHOLDER, 1),
            }
        };

        let x = col + BORDER;
        let y = row + BORDER;
        for dx in 0..cols {
            self.split_wide(x + dx, y);
        }
        self.buf.put_char(x, y, ch, color);
        if cols == 2 {
            self.buf.put_char(x + 1, y, WIDE_TAIL, color);
        }
        cols
    }

    /// Blank the other half of a double-width character that covers `(x, y)`.
    fn split_wide(&mut self, x: u16, y: u16) {
        let Some(cell) = self.buf.get(x, y) else {
            return;
        };
        if cell.ch == WIDE_TAIL {
            self.buf.put_char(x - 1, y, BLANK, Color::White);
            self.buf.put_char(x, y, BLANK, Color::White);
        } else if self.buf.get(x + 1, y).map(|c| c.ch) == Some(WIDE_TAIL) {
            self.buf.put_char(x + 1, y, BLANK, Color::White);
        }
    }

    /// Blank every interior cell, leaving the border intact.
    pub fn clear_interior(&mut self) {
        self.buf.fill_rect(
            BORDER,
            BORDER,
            self.interior_width(),
            self.interior_height(),
            Cell::new(BLANK, Color::White),
        );
    }

    /// Interior row `row` as text, without the border columns.
    pub fn interior_row(&self, row: u16) -> Option<String> {
        if row >= self.interior_height() {
            return None;
        }
        let y = row + BORDER;
        Some(
            (0..self.interior_width())
                .filter_map(|col| self.buf.get(col + BORDER, y))
                .map(|cell| cell.ch)
                .filter(|&ch| ch != WIDE_TAIL)
                .collect(),
        )
    }

    /// Whether every interior cell is blank.
    pub fn interior_is_blank(&self) -> bool {
        (0..self.interior_height()).all(|row| {
            (0..self.interior_width()).all(|col| {
                self.buf.get(col + BORDER, row + BORDER) == Some(Cell::default())
            })
        })
    }

    /// Whether the border still holds the glyphs drawn at construction.
    pub fn border_intact(&self) -> bool {
        let w = self.rect.width;
        let h = self.rect.height;
        (0..h).all(|y| (0..w).all(|x| match border_glyph(x, y, w, h) {
            Some(ch) => self.buf.get(x, y).map(|c| c.ch) == Some(ch),
            None => true,
        }))
    }

    fn draw_border(&mut self) {
        let w = self.rect.width;
        let h = self.rect.height;
        for y in 0..h {
            for x in 0..w {
                if let Some(ch) = border_glyph(x, y, w, h) {
                    self.buf.put_char(x, y, ch, Color::White);
                }
            }
        }
    }
}

fn border_glyph(x: u16, y: u16, w: u16, h: u16) -> Option<char> {
    let edge_row = y == 0 || y + 1 == h;
    let edge_col = x == 0 || x + 1 == w;
    match (edge_row, edge_col) {
        (true, true) => Some(BORDER_CORNER),
        (true, false) => Some(BORDER_EDGE),
        (false, true) => Some(BORDER_SIDE),
        (false, false) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region(width: u16, height: u16) -> Region {
        Region::new(RegionId::Play, RegionRect::new(0, 0, width, height))
    }

    #[test]
    fn border_is_drawn_on_creation() {
        let r = region(5, 4);
        let fb = r.buffer();
        assert_eq!(fb.row_text(0).as_deref(), Some("+---+"));
        assert_eq!(fb.row_text(1).as_deref(), Some("|   |"));
        assert_eq!(fb.row_text(2).as_deref(), Some("|   |"));
        assert_eq!(fb.row_text(3).as_deref(), Some("+---+"));
        assert!(r.border_intact());
        assert!(r.interior_is_blank());
    }

    #[test]
    fn interior_origin_is_inside_the_border() {
        let mut r = region(5, 4);
        assert!(r.write_glyph(0, 0, '@', Color::Red));
        assert_eq!(r.buffer().get(1, 1).map(|c| c.ch), Some('@'));
        assert_eq!(r.buffer().get(1, 1).map(|c| c.color), Some(Color::Red));
        assert!(r.border_intact());
    }

    #[test]
    fn out_of_interior_writes_are_clipped() {
        let mut r = region(5, 4);
        assert!(!r.write_glyph(2, 0, 'x', Color::White));
        assert!(!r.write_glyph(0, 3, 'x', Color::White));
        assert_eq!(r.write_str(1, 1, "abcd", Color::White), 2);
        assert_eq!(r.interior_row(1).as_deref(), Some(" ab"));
        assert!(r.border_intact());
    }

    #[test]
    fn clear_interior_preserves_border() {
        let mut r = region(6, 5);
        r.write_str(0, 0, "abcd", Color::Cyan);
        r.write_str(2, 1, "xy", Color::Cyan);
        assert!(!r.interior_is_blank());

        r.clear_interior();
        assert!(r.interior_is_blank());
        assert!(r.border_intact());
        assert_eq!(r, region(6, 5));
    }

    #[test]
    fn control_characters_are_stored_as_placeholders() {
        let mut r = region(10, 3);
        assert_eq!(r.write_str(0, 0, "a\tb\n\x1b[2J", Color::White), 0);
        assert_eq!(r.interior_row(0).as_deref(), Some("a?b??[2J"));
        assert!(r.write_glyph(1, 0, '\u{7f}', Color::White));
        assert!(r.buffer().cells().iter().all(|c| !c.ch.is_control()));
        assert!(r.border_intact());
    }

    #[test]
    fn double_width_characters_take_two_cells() {
        let mut r = region(7, 3);
        assert_eq!(r.write_str(0, 0, "日本x", Color::Green), 0);
        assert_eq!(r.buffer().get(2, 1).map(|c| c.ch), Some(WIDE_TAIL));
        assert_eq!(r.interior_row(0).as_deref(), Some("日本x"));
        assert_eq!(r.buffer().row_text(1).as_deref(), Some("|日本x|"));
        assert!(r.border_intact());
    }

    #[test]
    fn double_width_character_at_the_right_edge_becomes_a_placeholder() {
        let mut r = region(5, 3);
        assert_eq!(r.write_str(0, 1, "ab日", Color::White), 1);
        assert_eq!(r.interior_row(0).as_deref(), Some(" ab"));
        assert!(r.write_glyph(0, 2, '日', Color::White));
        assert_eq!(r.interior_row(0).as_deref(), Some(" a?"));
        assert!(r.border_intact());
    }

    #[test]
    fn overwriting_half_of_a_wide_character_blanks_the_other_half() {
        let mut r = region(6, 3);
        r.write_str(0, 0, "日本", Color::White);
        r.write_glyph(0, 1, 'x', Color::White);
        assert_eq!(r.interior_row(0).as_deref(), Some(" x本"));
        r.write_glyph(0, 2, 'y', Color::White);
        assert_eq!(r.interior_row(0).as_deref(), Some(" xy "));
        assert!(r.buffer().cells().iter().all(|c| c.ch != WIDE_TAIL));
    }
}
