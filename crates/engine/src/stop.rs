//! External stop requests.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared flag that asks the runner to stop before its next frame.
///
/// Cloning is cheap; every clone observes the same flag.
#[derive(Debug, Clone, Default)]
pub struct StopHandle {
    flag: Arc<AtomicBool>,
}

impl StopHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    pub fn is_requested(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }

    /// Raise the flag on SIGINT and SIGTERM.
    #[cfg(unix)]
    pub fn register_signals(&self) -> io::Result<()> {
        use signal_hook::consts::signal::{SIGINT, SIGTERM};

        for sig in [SIGINT, SIGTERM] {
            signal_hook::flag::register(sig, Arc::clone(&self.flag))?;
        }
        Ok(())
    }

    #[cfg(not(unix))]
    pub fn register_signals(&self) -> io::Result<()> {
        Ok(())
    }
}
