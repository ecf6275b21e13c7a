//! TerminalSurface: owns the play and status regions.

use anyhow::Result;

use crate::error::SurfaceError;
use crate::layout::SurfaceLayout;
use crate::projection::{project_all, Projection};
use crate::region::Region;
use crate::renderer::Display;
use crate::types::{Color, Drawable, RegionId, STATUS_ANCHOR_COL, STATUS_ANCHOR_ROW};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalSurface {
    layout: SurfaceLayout,
    play: Region,
    status: Region,
}

impl TerminalSurface {
    /// Build both regions and draw their borders.
    ///
    /// Fails when the terminal cannot hold a play area above the status box.
    pub fn new(
        total_width: u16,
        total_height: u16,
        status_height: u16,
    ) -> Result<Self, SurfaceError> {
        let layout = SurfaceLayout::compute(total_width, total_height, status_height)?;
        Ok(Self::from_layout(layout))
    }

    pub fn from_layout(layout: SurfaceLayout) -> Self {
        Self {
            layout,
            play: Region::new(RegionId::Play, layout.play),
            status: Region::new(RegionId::Status, layout.status),
        }
    }

    pub fn layout(&self) -> SurfaceLayout {
        self.layout
    }

    pub fn region(&self, id: RegionId) -> &Region {
        match id {
            RegionId::Play => &self.play,
            RegionId::Status => &self.status,
        }
    }

    pub fn region_mut(&mut self, id: RegionId) -> &mut Region {
        match id {
            RegionId::Play => &mut self.play,
            RegionId::Status => &mut self.status,
        }
    }

    /// Interior `(width, height)` of the play region.
    pub fn play_interior(&self) -> (u16, u16) {
        self.layout.play_interior()
    }

    pub fn write_glyph(&mut self, id: RegionId, row: u16, col: u16, ch: char, color: Color) -> bool {
        self.region_mut(id).write_glyph(row, col, ch, color)
    }

    pub fn draw_entities(&mut self, entities: &[Drawable]) -> Projection {
        project_all(&mut self.play, entities)
    }

    /// Write the status line at its fixed anchor, returning clipped characters.
    pub fn write_status(&mut self, text: &str) -> usize {
        self.status
            .write_str(STATUS_ANCHOR_ROW, STATUS_ANCHOR_COL, text, Color::White)
    }

    pub fn flush<D: Display + ?Sized>(&self, id: RegionId, display: &mut D) -> Result<()> {
        display.present(self.region(id))
    }

    /// Flush the play region, then the status region.
    pub fn flush_all<D: Display + ?Sized>(&self, display: &mut D) -> Result<()> {
        for id in RegionId::ALL {
            self.flush(id, display)?;
        }
        Ok(())
    }

    pub fn clear_interior(&mut self, id: RegionId) {
        self.region_mut(id).clear_interior();
    }

    pub fn clear_all(&mut self) {
        for id in RegionId::ALL {
            self.clear_interior(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::HeadlessDisplay;

    #[test]
    fn status_text_lands_at_fixed_anchor() {
        let mut s = TerminalSurface::new(20, 12, 5).unwrap();
        assert_eq!(s.write_status("hi"), 0);
        let fb = s.region(RegionId::Status).buffer();
        assert_eq!(fb.get(3, 2).map(|c| c.ch), Some('h'));
        assert_eq!(fb.get(4, 2).map(|c| c.ch), Some('i'));
    }

    #[test]
    fn long_status_text_is_clipped_at_the_border() {
        let mut s = TerminalSurface::new(10, 12, 5).unwrap();
        // interior width 8, anchor column 2 => 6 cells available
        assert_eq!(s.write_status("0123456789"), 4);
        assert!(s.region(RegionId::Status).border_intact());
    }

    #[test]
    fn flush_all_presents_play_before_status() {
        let s = TerminalSurface::new(10, 12, 5).unwrap();
        let mut display = HeadlessDisplay::new();
        s.flush_all(&mut display).unwrap();
        let order: Vec<_> = display.presented().iter().map(|p| p.id).collect();
        assert_eq!(order, vec![RegionId::Play, RegionId::Status]);
    }
}
