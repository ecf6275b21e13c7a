//! GameRunner: the fixed-cadence advance/input/render loop.
//!
//! One frame is:
//!
//! 1. advance the game by one tick
//! 2. take at most one pending key and dispatch its bound action
//! 3. project the game's entities onto the play region
//! 4. write the status line at its anchor
//! 5. flush the play region, then the status region
//! 6. blank both interiors
//! 7. sleep for the game's current frame delay
//!
//! [`GameRunner::step`] runs steps 1-6 and returns the delay, so frames can be
//! driven without sleeping. [`GameRunner::run`] owns raw terminal mode for the
//! whole loop and always restores it before printing the exit message, whether
//! the loop stopped on request, failed, or panicked.

use std::io::Write;
use std::panic::{self, AssertUnwindSafe};
use std::time::Duration;

use crate::config::RunnerConfig;
use crate::error::{Result, RunnerError};
use crate::game::Game;
use crate::input::{is_stop_key, InputSource};
use crate::stop::StopHandle;
use crate::term::{Display, Projection, TerminalGuard, TerminalOps, TerminalSurface};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Running,
    Terminating,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The [`StopHandle`] was raised (signal or another owner).
    Interrupted,
    /// `Ctrl+C` was read from the terminal.
    StopKey,
    /// The configured frame limit was reached.
    FrameLimit,
}

impl StopReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            StopReason::Interrupted => "interrupted",
            StopReason::StopKey => "stop_key",
            StopReason::FrameLimit => "frame_limit",
        }
    }
}

/// How a clean run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub frames: u64,
    pub stop: StopReason,
}

/// What happened in one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameReport {
    /// 1-based frame number.
    pub frame: u64,
    pub action_applied: bool,
    pub projection: Projection,
    pub status_clipped: usize,
    pub delay: Duration,
}

pub struct GameRunner<G: Game, D: Display, I: InputSource> {
    surface: TerminalSurface,
    game: G,
    display: D,
    input: I,
    stop: StopHandle,
    stop_key_seen: bool,
    max_frames: u64,
    frames: u64,
    state: RunState,
}

impl<G: Game, D: Display, I: InputSource> GameRunner<G, D, I> {
    /// Lay out a `size` = `(width, height)` terminal and build the game for
    /// its play area with [`Game::new`].
    pub fn new(config: &RunnerConfig, size: (u16, u16), display: D, input: I) -> Result<Self> {
        Self::with_factory(config, size, display, input, G::new)
    }

    /// Like [`GameRunner::new`], building the game with `build(width, height)`.
    pub fn with_factory<F>(
        config: &RunnerConfig,
        size: (u16, u16),
        display: D,
        input: I,
        build: F,
    ) -> Result<Self>
    where
        F: FnOnce(u16, u16) -> anyhow::Result<G>,
    {
        let (width, height) = size;
        let surface = TerminalSurface::new(width, height, config.status_height)?;
        let (play_w, play_h) = surface.play_interior();
        let game = build(play_w, play_h).map_err(|cause| RunnerError::GameInit {
            width: play_w,
            height: play_h,
            cause,
        })?;

        tracing::info!(
            width,
            height,
            status_height = config.status_height,
            play_w,
            play_h,
            "runner initialized"
        );

        Ok(Self {
            surface,
            game,
            display,
            input,
            stop: StopHandle::new(),
            stop_key_seen: false,
            max_frames: config.max_frames,
            frames: 0,
            state: RunState::Running,
        })
    }

    /// Use `stop` instead of the runner's own handle.
    pub fn with_stop_handle(mut self, stop: StopHandle) -> Self {
        self.stop = stop;
        self
    }

    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut G {
        &mut self.game
    }

    pub fn surface(&self) -> &TerminalSurface {
        &self.surface
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    /// Run one frame without pacing.
    pub fn step(&mut self) -> Result<FrameReport> {
        let frame = self.frames + 1;
        let fault = move |cause: anyhow::Error| RunnerError::Fault { frame, cause };

        self.game.advance().map_err(fault)?;

        let action_applied = self.handle_input().map_err(fault)?;

        let entities = self.game.entities();
        let projection = self.surface.draw_entities(&entities);
        if projection.clipped > 0 {
            tracing::debug!(frame, clipped = projection.clipped, "entities outside play area");
        }

        let status = self.game.status_text();
        let status_clipped = self.surface.write_status(&status);

        self.surface.flush_all(&mut self.display).map_err(fault)?;
        self.surface.clear_all();

        self.frames = frame;
        let delay = self.game.frame_delay();
        tracing::trace!(frame, drawn = projection.drawn, ?delay, "frame done");

        Ok(FrameReport {
            frame,
            action_applied,
            projection,
            status_clipped,
            delay,
        })
    }

    fn handle_input(&mut self) -> anyhow::Result<bool> {
        let Some(key) = self.input.poll_key()? else {
            return Ok(false);
        };
        if is_stop_key(&key) {
            self.stop_key_seen = true;
            return Ok(false);
        }
        match self.game.input_map().lookup(&key) {
            Some(action) => {
                self.game.apply(action);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn pending_stop(&self) -> Option<StopReason> {
        if self.stop_key_seen {
            Some(StopReason::StopKey)
        } else if self.stop.is_requested() {
            Some(StopReason::Interrupted)
        } else if self.max_frames > 0 && self.frames >= self.max_frames {
            Some(StopReason::FrameLimit)
        } else {
            None
        }
    }

    fn run_frames(&mut self) -> Result<RunSummary> {
        loop {
            if let Some(stop) = self.pending_stop() {
                return Ok(RunSummary {
                    frames: self.frames,
                    stop,
                });
            }
            let report = self.step()?;
            if self.pending_stop().is_none() && !report.delay.is_zero() {
                std::thread::sleep(report.delay);
            }
        }
    }

    /// Run frames until a stop is requested or a frame fails.
    ///
    /// `ops` switches the terminal into game mode for the duration of the
    /// loop. On every exit path the terminal is restored first, then a blank
    /// line and the game's exit message are written to `out`. A panic inside
    /// the loop is resumed after that.
    pub fn run<O, W>(&mut self, ops: &mut O, out: &mut W) -> Result<RunSummary>
    where
        O: TerminalOps + ?Sized,
        W: Write + ?Sized,
    {
        if self.state == RunState::Terminating {
            return Err(RunnerError::Terminal(anyhow::anyhow!(
                "runner has already terminated"
            )));
        }
        let mut guard = TerminalGuard::enter(ops).map_err(RunnerError::Terminal)?;

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| self.run_frames()));
        self.state = RunState::Terminating;

        if let Err(err) = guard.restore() {
            tracing::warn!(error = %format!("{err:#}"), "terminal restore failed");
        }
        drop(guard);

        let message = self.game.exit_message();
        if let Err(err) = writeln!(out).and_then(|_| writeln!(out, "{message}")) {
            tracing::warn!(error = %err, "failed to write exit message");
        }

        match outcome {
            Ok(Ok(summary)) => {
                tracing::info!(frames = summary.frames, stop = summary.stop.as_str(), "runner stopped");
                Ok(summary)
            }
            Ok(Err(err)) => {
                tracing::error!(frames = self.frames, error = %err, "runner failed");
                Err(err)
            }
            Err(payload) => {
                tracing::error!(frames = self.frames, "runner panicked");
                panic::resume_unwind(payload)
            }
        }
    }
}
