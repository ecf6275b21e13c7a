//! Error types for the game loop

use thiserror::Error;

use crate::term::SurfaceError;

#[derive(Error, Debug)]
pub enum RunnerError {
    /// The terminal cannot be partitioned.
    #[error(transparent)]
    Surface(#[from] SurfaceError),

    /// The game could not be constructed for the play area.
    #[error("game failed to start on a {width}x{height} play area: {cause:#}")]
    GameInit {
        width: u16,
        height: u16,
        cause: anyhow::Error,
    },

    /// Entering or leaving raw terminal mode failed.
    #[error("terminal mode switch failed: {0:#}")]
    Terminal(anyhow::Error),

    /// Advance, input or presentation failed during a frame.
    #[error("frame {frame} failed: {cause:#}")]
    Fault { frame: u64, cause: anyhow::Error },
}

pub type Result<T> = std::result::Result<T, RunnerError>;
