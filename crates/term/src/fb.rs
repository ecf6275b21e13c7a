//! Framebuffer of colored character cells.

use crate::types::{Color, BLANK};

/// Fills the cell to the right of a double-width character. It is never
/// printed; the character to its left already covers that column.
pub const WIDE_TAIL: char = '\0';

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub color: Color,
}

impl Cell {
    pub const fn new(ch: char, color: Color) -> Self {
        Self { ch, color }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: BLANK,
            color: Color::White,
        }
    }
}

/// 2D framebuffer of colored character cells, addressed as `(x, y)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, color: Color) {
        self.set(x, y, Cell { ch, color });
    }

    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, cell: Cell) {
        for dy in 0..h {
            for dx in 0..w {
                self.set(x.saturating_add(dx), y.saturating_add(dy), cell);
            }
        }
    }

    /// Row `y` as it appears on screen, or `None` past the bottom edge.
    pub fn row_text(&self, y: u16) -> Option<String> {
        if y >= self.height {
            return None;
        }
        let start = (y as usize) * (self.width as usize);
        let end = start + self.width as usize;
        Some(
            self.cells[start..end]
                .iter()
                .map(|c| c.ch)
                .filter(|&ch| ch != WIDE_TAIL)
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_buffer_is_blank() {
        let fb = FrameBuffer::new(4, 2);
        assert!(fb.cells().iter().all(|c| *c == Cell::default()));
        assert_eq!(fb.row_text(1).as_deref(), Some("    "));
        assert_eq!(fb.row_text(2), None);
    }

    #[test]
    fn writes_outside_the_buffer_are_dropped() {
        let mut fb = FrameBuffer::new(3, 3);
        fb.put_char(3, 0, 'x', Color::Red);
        fb.put_char(0, 3, 'x', Color::Red);
        assert!(fb.cells().iter().all(|c| c.ch == BLANK));
    }

    #[test]
    fn fill_rect_covers_exactly_the_rect() {
        let mut fb = FrameBuffer::new(4, 3);
        fb.fill_rect(1, 1, 2, 1, Cell::new('#', Color::Green));
        assert_eq!(fb.row_text(0).as_deref(), Some("    "));
        assert_eq!(fb.row_text(1).as_deref(), Some(" ## "));
        assert_eq!(fb.get(1, 1).map(|c| c.color), Some(Color::Green));
    }
}
