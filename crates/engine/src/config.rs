//! Runner configuration.
//!
//! # Environment Variables
//!
//! - `TUI_RUNNER_STATUS_HEIGHT`: rows of the status box, border included (default: 5)
//! - `TUI_RUNNER_INPUT_POLICY`: `discard` or `backlog` (default: discard)
//! - `TUI_RUNNER_MAX_FRAMES`: stop after this many frames, 0 for no limit (default: 0)
//! - `TUI_RUNNER_LOG_DIR`: directory for the log file (default: OS temp dir)
//!
//! Values that do not parse fall back to the default.

use std::path::PathBuf;

use crate::input::InputPolicy;
use crate::types::STATUS_HEIGHT;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerConfig {
    pub status_height: u16,
    pub input_policy: InputPolicy,
    /// 0 means unlimited.
    pub max_frames: u64,
    pub log_dir: Option<PathBuf>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            status_height: STATUS_HEIGHT,
            input_policy: InputPolicy::default(),
            max_frames: 0,
            log_dir: None,
        }
    }
}

impl RunnerConfig {
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build from any variable lookup (the process environment in
    /// [`RunnerConfig::from_env`]).
    pub fn from_vars<F>(var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let status_height = var("TUI_RUNNER_STATUS_HEIGHT")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.status_height);

        let input_policy = var("TUI_RUNNER_INPUT_POLICY")
            .and_then(|s| InputPolicy::from_str(&s))
            .unwrap_or(defaults.input_policy);

        let max_frames = var("TUI_RUNNER_MAX_FRAMES")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.max_frames);

        let log_dir = var("TUI_RUNNER_LOG_DIR")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) });

        Self {
            status_height,
            input_policy,
            max_frames,
            log_dir,
        }
    }
}
