//! File logging for the binary.
//!
//! The terminal is the game screen, so log records go to a file through a
//! non-blocking appender.

use std::any::Any;
use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

pub struct LoggingGuard {
    _guard: WorkerGuard,
    log_dir: PathBuf,
}

impl LoggingGuard {
    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }
}

/// Install the global subscriber. Returns `None` when logging cannot be set up;
/// the game runs either way.
pub fn init(log_dir: Option<&Path>) -> Option<LoggingGuard> {
    let log_dir = match log_dir {
        Some(dir) => dir.to_path_buf(),
        None => std::env::temp_dir().join("tui-runner").join("logs"),
    };
    std::fs::create_dir_all(&log_dir).ok()?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, "tui-runner.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_target(true),
    );

    if subscriber.try_init().is_err() {
        return None;
    }

    // Replaces the default hook: stderr is not visible while the game owns
    // the screen. `panic_notice` covers stderr once the terminal is back.
    std::panic::set_hook(Box::new(|panic_info| {
        tracing::error!(panic = %panic_info, "panic");
    }));

    tracing::info!(log_dir = %log_dir.display(), "tracing initialized");

    Some(LoggingGuard {
        _guard: guard,
        log_dir,
    })
}

/// One line for stderr after a panic has unwound out of the game loop.
pub fn panic_notice(payload: &(dyn Any + Send), log_dir: Option<&Path>) -> String {
    let reason = payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("unknown cause");
    match log_dir {
        Some(dir) => format!("tui-runner panicked: {reason} (details in {})", dir.display()),
        None => format!("tui-runner panicked: {reason}"),
    }
}
