//! Partitioning of the terminal into the play and status regions.

use crate::error::SurfaceError;
use crate::types::{RegionId, BORDER, MIN_REGION_SIDE};

/// Placement and size of a region on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionRect {
    /// Screen row of the region's top border.
    pub row: u16,
    /// Screen column of the region's left border.
    pub col: u16,
    pub width: u16,
    pub height: u16,
}

impl RegionRect {
    pub const fn new(row: u16, col: u16, width: u16, height: u16) -> Self {
        Self {
            row,
            col,
            width,
            height,
        }
    }

    /// One past the last screen row covered by the region.
    pub fn bottom(&self) -> u16 {
        self.row + self.height
    }

    pub fn interior_width(&self) -> u16 {
        self.width.saturating_sub(2 * BORDER)
    }

    pub fn interior_height(&self) -> u16 {
        self.height.saturating_sub(2 * BORDER)
    }
}

/// The two-region split of a terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceLayout {
    pub play: RegionRect,
    pub status: RegionRect,
}

impl SurfaceLayout {
    /// Split a `total_width` x `total_height` terminal into a play region on
    /// top and a `status_height`-row status region below it.
    pub fn compute(
        total_width: u16,
        total_height: u16,
        status_height: u16,
    ) -> Result<Self, SurfaceError> {
        if total_height <= status_height {
            return Err(SurfaceError::Degenerate {
                total_height,
                status_height,
            });
        }

        let play_height = total_height - status_height;
        if total_width < MIN_REGION_SIDE
            || play_height < MIN_REGION_SIDE
            || status_height < MIN_REGION_SIDE
        {
            return Err(SurfaceError::TooSmall {
                width: total_width,
                height: total_height,
                status_height,
                min: MIN_REGION_SIDE,
            });
        }

        Ok(Self {
            play: RegionRect::new(0, 0, total_width, play_height),
            status: RegionRect::new(play_height, 0, total_width, status_height),
        })
    }

    pub fn rect(&self, id: RegionId) -> RegionRect {
        match id {
            RegionId::Play => self.play,
            RegionId::Status => self.status,
        }
    }

    /// Interior size of the play region, the dimensions a game is built with.
    pub fn play_interior(&self) -> (u16, u16) {
        (self.play.interior_width(), self.play.interior_height())
    }
}
