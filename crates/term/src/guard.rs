//! Raw terminal mode as a scoped resource.
//!
//! [`TerminalGuard::enter`] puts the terminal into raw mode; the mode is
//! restored exactly once, either by an explicit [`TerminalGuard::restore`] or
//! when the guard is dropped (including during a panic unwind). A setup that
//! fails part way is rolled back before the error is returned.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{Attribute, ResetColor, SetAttribute},
    terminal, QueueableCommand,
};

/// Platform calls that switch the terminal in and out of game mode.
pub trait TerminalOps {
    fn setup(&mut self) -> Result<()>;
    fn restore(&mut self) -> Result<()>;
}

/// Raw mode, alternate screen, hidden cursor, no line wrap.
#[derive(Debug, Default)]
pub struct CrosstermTerminal;

impl TerminalOps for CrosstermTerminal {
    fn setup(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.queue(terminal::EnterAlternateScreen)?;
        stdout.queue(cursor::Hide)?;
        stdout.queue(terminal::DisableLineWrap)?;
        stdout.queue(terminal::Clear(terminal::ClearType::All))?;
        stdout.flush()?;
        Ok(())
    }

    fn restore(&mut self) -> Result<()> {
        // Best-effort restore: try all steps even if one fails.
        let mut first_err: Option<anyhow::Error> = None;

        let mut stdout = io::stdout();
        let screen = (|| -> io::Result<()> {
            stdout.queue(ResetColor)?;
            stdout.queue(SetAttribute(Attribute::Reset))?;
            stdout.queue(terminal::EnableLineWrap)?;
            stdout.queue(cursor::Show)?;
            stdout.queue(terminal::LeaveAlternateScreen)?;
            stdout.flush()
        })();
        if let Err(err) = screen {
            first_err.get_or_insert(err.into());
        }
        if let Err(err) = terminal::disable_raw_mode() {
            first_err.get_or_insert(err.into());
        }

        match first_err {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

pub struct TerminalGuard<'a, O: TerminalOps + ?Sized> {
    ops: &'a mut O,
    restored: bool,
}

impl<'a, O: TerminalOps + ?Sized> TerminalGuard<'a, O> {
    pub fn enter(ops: &'a mut O) -> Result<Self> {
        if let Err(err) = ops.setup() {
            // Setup may have got as far as raw mode before failing.
            if let Err(restore_err) = ops.restore() {
                tracing::warn!(error = %restore_err, "rollback after failed setup also failed");
            }
            return Err(err);
        }
        tracing::debug!("terminal entered game mode");
        Ok(Self {
            ops,
            restored: false,
        })
    }

    pub fn is_restored(&self) -> bool {
        self.restored
    }

    /// Restore the terminal. Later calls (and the drop) are no-ops.
    pub fn restore(&mut self) -> Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;
        let result = self.ops.restore();
        tracing::debug!(ok = result.is_ok(), "terminal restored");
        result
    }
}

impl<O: TerminalOps + ?Sized> Drop for TerminalGuard<'_, O> {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}
