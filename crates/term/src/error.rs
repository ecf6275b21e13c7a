//! Error types for surface construction

use thiserror::Error;

/// Startup precondition violations for the terminal surface.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    /// The status strip would consume the whole terminal.
    #[error("terminal height {total_height} leaves no room for a play area above a {status_height}-row status box")]
    Degenerate { total_height: u16, status_height: u16 },

    /// A region would have no interior left inside its border.
    #[error("terminal {width}x{height} is too small for a {status_height}-row status box (each region needs at least {min}x{min} cells)")]
    TooSmall {
        width: u16,
        height: u16,
        status_height: u16,
        min: u16,
    },
}
