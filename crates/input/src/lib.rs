//! Terminal input module (engine-facing).
//!
//! This module maps `crossterm` key events onto a game's own action values and
//! reads the terminal without ever blocking the frame loop.

pub mod map;
pub mod source;

pub use tui_runner_types as types;

pub use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
pub use map::{is_stop_key, InputMap};
pub use source::{accept, select_key, CrosstermInput, InputPolicy, InputSource, ScriptedInput};
