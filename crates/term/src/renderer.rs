//! Display backends: push a region's cells to the physical terminal.
//!
//! Every present is a full redraw of the region. Regions are disjoint on
//! screen, so presenting them one after the other never tears.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Color as TermColor, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    QueueableCommand,
};

use crate::fb::WIDE_TAIL;
use crate::region::Region;
use crate::types::Color;

/// Something that can show a region on screen.
pub trait Display {
    fn present(&mut self, region: &Region) -> Result<()>;
}

impl<D: Display + ?Sized> Display for &mut D {
    fn present(&mut self, region: &Region) -> Result<()> {
        (**self).present(region)
    }
}

/// Crossterm display writing to stdout.
pub struct CrosstermDisplay {
    stdout: io::Stdout,
    buf: Vec<u8>,
}

impl Default for CrosstermDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl CrosstermDisplay {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(64 * 1024),
        }
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Display for CrosstermDisplay {
    fn present(&mut self, region: &Region) -> Result<()> {
        self.buf.clear();
        encode_region_into(region, &mut self.buf)?;
        self.flush_buf()
    }
}

/// Encode a full redraw of `region` at its screen offset into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_region_into(region: &Region, out: &mut Vec<u8>) -> Result<()> {
    let rect = region.rect();
    let fb = region.buffer();

    out.queue(SetBackgroundColor(TermColor::Black))?;
    let mut current: Option<Color> = None;
    for y in 0..fb.height() {
        out.queue(cursor::MoveTo(rect.col, rect.row + y))?;
        for x in 0..fb.width() {
            let cell = fb.get(x, y).unwrap_or_default();
            if cell.ch == WIDE_TAIL {
                continue;
            }
            if current != Some(cell.color) {
                out.queue(SetForegroundColor(palette_color(cell.color)))?;
                current = Some(cell.color);
            }
            out.queue(Print(cell.ch))?;
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

pub fn palette_color(color: Color) -> TermColor {
    match color {
        Color::White => TermColor::White,
        Color::Red => TermColor::Red,
        Color::Blue => TermColor::Blue,
        Color::Green => TermColor::Green,
        Color::Cyan => TermColor::Cyan,
        Color::Magenta => TermColor::Magenta,
        Color::Yellow => TermColor::Yellow,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::RegionRect;
    use crate::types::RegionId;

    #[test]
    fn encoded_region_moves_to_each_row_at_its_offset() {
        let region = Region::new(RegionId::Status, RegionRect::new(7, 0, 4, 3));
        let mut out = Vec::new();
        encode_region_into(&region, &mut out).unwrap();
        let text = String::from_utf8_lossy(&out);

        // CSI row;col H is 1-based. The first row also carries the initial color.
        assert!(text.contains("\x1b[8;1H"));
        assert!(text.contains("+--+"));
        assert!(text.contains("\x1b[9;1H|  |"));
        assert!(text.contains("\x1b[10;1H+--+"));
    }

    #[test]
    fn color_change_is_emitted_only_at_boundaries() {
        let mut region = Region::new(RegionId::Play, RegionRect::new(0, 0, 6, 3));
        region.write_str(0, 0, "ab", Color::Red);

        let mut out = Vec::new();
        encode_region_into(&region, &mut out).unwrap();
        let text = String::from_utf8_lossy(&out);

        let mut red = Vec::new();
        red.queue(SetForegroundColor(TermColor::Red)).unwrap();
        let red = String::from_utf8(red).unwrap();
        assert_eq!(text.matches(red.as_str()).count(), 1);
        assert!(text.contains(&format!("|{red}ab")));
    }

    #[test]
    fn wide_character_is_printed_once_and_keeps_the_border_in_place() {
        let mut region = Region::new(RegionId::Play, RegionRect::new(0, 0, 5, 3));
        region.write_str(0, 0, "日", Color::White);

        let mut out = Vec::new();
        encode_region_into(&region, &mut out).unwrap();
        let text = String::from_utf8_lossy(&out);

        assert!(text.contains("\x1b[2;1H|日 |"));
        assert!(!text.contains('\0'));
    }

    #[test]
    fn every_palette_entry_maps_to_a_distinct_terminal_color() {
        let mut seen = Vec::new();
        for c in Color::ALL {
            let t = palette_color(c);
            assert!(!seen.contains(&t));
            seen.push(t);
        }
    }
}
