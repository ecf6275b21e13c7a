//! TUI runner (workspace facade crate).
//!
//! Re-exports the workspace crates under short names and bundles the demo
//! game played by the `tui-runner` binary.

pub use tui_runner_engine as engine;
pub use tui_runner_input as input;
pub use tui_runner_term as term;
pub use tui_runner_types as types;

pub mod demo;
