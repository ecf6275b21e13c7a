//! Terminal surface module.
//!
//! The terminal is split into a bordered play region and a bordered status
//! region below it. Each frame the game's drawables are projected onto the
//! play region, the status line is written into the status region, both are
//! flushed to a [`Display`] and then their interiors are blanked again.
//!
//! Goals:
//! - Keep projection and region bookkeeping pure and unit-testable
//! - Keep all crossterm I/O behind [`Display`] and [`TerminalOps`]
//! - Never let a drawable overwrite a region border

pub mod error;
pub mod fb;
pub mod guard;
pub mod headless;
pub mod layout;
pub mod projection;
pub mod region;
pub mod renderer;
pub mod surface;

pub use tui_runner_types as types;

pub use error::SurfaceError;
pub use fb::{Cell, FrameBuffer, WIDE_TAIL};
pub use guard::{CrosstermTerminal, TerminalGuard, TerminalOps};
pub use headless::{HeadlessDisplay, Presented, RecordingTerminal, TerminalCall};
pub use layout::{RegionRect, SurfaceLayout};
pub use projection::{project, project_all, Projection};
pub use region::{Region, PLACEHOLDER};
pub use renderer::{encode_region_into, palette_color, CrosstermDisplay, Display};
pub use surface::TerminalSurface;
