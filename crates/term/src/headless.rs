//! Headless display and terminal for tests and benchmarks.

use anyhow::{bail, Result};

use crate::fb::FrameBuffer;
use crate::guard::TerminalOps;
use crate::region::Region;
use crate::renderer::Display;
use crate::types::RegionId;

/// A copy of a region as it was presented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presented {
    pub id: RegionId,
    pub frame: FrameBuffer,
}

/// Display that keeps every presented region in memory.
#[derive(Debug)]
pub struct HeadlessDisplay {
    presented: Vec<Presented>,
    record: bool,
}

impl Default for HeadlessDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadlessDisplay {
    pub fn new() -> Self {
        Self {
            presented: Vec::new(),
            record: true,
        }
    }

    /// A display that accepts presents without keeping copies.
    pub fn discarding() -> Self {
        Self {
            presented: Vec::new(),
            record: false,
        }
    }

    pub fn presented(&self) -> &[Presented] {
        &self.presented
    }

    /// The most recent present of region `id`.
    pub fn last(&self, id: RegionId) -> Option<&FrameBuffer> {
        self.presented
            .iter()
            .rev()
            .find(|p| p.id == id)
            .map(|p| &p.frame)
    }

    /// Every present of region `id`, oldest first.
    pub fn frames(&self, id: RegionId) -> impl Iterator<Item = &FrameBuffer> {
        self.presented
            .iter()
            .filter(move |p| p.id == id)
            .map(|p| &p.frame)
    }
}

impl Display for HeadlessDisplay {
    fn present(&mut self, region: &Region) -> Result<()> {
        if self.record {
            self.presented.push(Presented {
                id: region.id(),
                frame: region.buffer().clone(),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalCall {
    Setup,
    Restore,
}

/// Terminal ops that only record what was asked of them.
#[derive(Debug, Default)]
pub struct RecordingTerminal {
    calls: Vec<TerminalCall>,
    fail_setup: bool,
}

impl RecordingTerminal {
    pub fn failing_setup() -> Self {
        Self {
            calls: Vec::new(),
            fail_setup: true,
        }
    }

    pub fn calls(&self) -> &[TerminalCall] {
        &self.calls
    }

    pub fn restore_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| **c == TerminalCall::Restore)
            .count()
    }
}

impl TerminalOps for RecordingTerminal {
    fn setup(&mut self) -> Result<()> {
        self.calls.push(TerminalCall::Setup);
        if self.fail_setup {
            bail!("terminal setup refused");
        }
        Ok(())
    }

    fn restore(&mut self) -> Result<()> {
        self.calls.push(TerminalCall::Restore);
        Ok(())
    }
}
