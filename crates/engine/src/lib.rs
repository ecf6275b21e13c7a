//! Game loop module - drives a [`Game`] inside the terminal surface.
//!
//! The engine owns the [`TerminalSurface`](crate::term::TerminalSurface), one
//! game instance, a display and an input source, and runs the frame cycle on a
//! single thread until a stop is requested or a frame fails.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//!
//! use tui_runner_engine::{Game, GameRunner, RunnerConfig, StopReason};
//! use tui_runner_engine::input::{InputMap, InputPolicy, KeyCode, KeyEvent, ScriptedInput};
//! use tui_runner_engine::term::{HeadlessDisplay, RecordingTerminal};
//! use tui_runner_engine::types::Drawable;
//!
//! #[derive(Clone, Copy)]
//! enum Act { Left, Right }
//!
//! struct Walker { x: u16, width: u16, map: InputMap<Act> }
//!
//! impl Game for Walker {
//!     type Action = Act;
//!     fn new(width: u16, _height: u16) -> anyhow::Result<Self> {
//!         let map = InputMap::new().bind(KeyCode::Left, Act::Left).bind(KeyCode::Right, Act::Right);
//!         Ok(Self { x: 0, width, map })
//!     }
//!     fn entities(&self) -> Vec<Drawable> { vec![Drawable::glyph(self.x, 0, '@')] }
//!     fn input_map(&self) -> &InputMap<Act> { &self.map }
//!     fn apply(&mut self, action: Act) {
//!         match action {
//!             Act::Left => self.x = self.x.saturating_sub(1),
//!             Act::Right => self.x = (self.x + 1).min(self.width - 1),
//!         }
//!     }
//!     fn advance(&mut self) -> anyhow::Result<()> { Ok(()) }
//!     fn exit_message(&self) -> String { format!("ended at {}", self.x) }
//!     fn status_text(&self) -> String { format!("x = {}", self.x) }
//!     fn frame_delay(&self) -> Duration { Duration::ZERO }
//! }
//!
//! let config = RunnerConfig { max_frames: 2, ..RunnerConfig::default() };
//! let input = ScriptedInput::new(InputPolicy::Discard).then([KeyEvent::from(KeyCode::Right)]);
//! let mut runner: GameRunner<Walker, _, _> =
//!     GameRunner::new(&config, (20, 10), HeadlessDisplay::new(), input).unwrap();
//!
//! let mut out = Vec::new();
//! let summary = runner.run(&mut RecordingTerminal::default(), &mut out).unwrap();
//! assert_eq!(summary.stop, StopReason::FrameLimit);
//! assert_eq!(String::from_utf8(out).unwrap(), "\nended at 1\n");
//! ```

pub mod config;
pub mod error;
pub mod game;
pub mod runner;
pub mod stop;

pub use tui_runner_input as input;
pub use tui_runner_term as term;
pub use tui_runner_types as types;

pub use config::RunnerConfig;
pub use error::{Result, RunnerError};
pub use game::Game;
pub use runner::{FrameReport, GameRunner, RunState, RunSummary, StopReason};
pub use stop::StopHandle;
