//! Terminal game runner (default binary).
//!
//! Plays the bundled star catcher demo in the current terminal. `Ctrl+C`,
//! SIGINT or SIGTERM stop the loop; the terminal is restored and the final
//! score printed. A panic is reported on stderr after the terminal is back.

mod logging;

use std::io;
use std::panic::{self, AssertUnwindSafe};

use anyhow::{Context, Result};

use tui_runner::demo::StarCatcher;
use tui_runner::engine::{GameRunner, RunnerConfig, StopHandle};
use tui_runner::input::CrosstermInput;
use tui_runner::term::{CrosstermDisplay, CrosstermTerminal};

fn main() -> Result<()> {
    let config = RunnerConfig::from_env();
    let logging = logging::init(config.log_dir.as_deref());

    let stop = StopHandle::new();
    stop.register_signals().context("failed to install signal handlers")?;

    let size = crossterm::terminal::size().context("failed to read terminal size")?;

    let mut runner: GameRunner<StarCatcher, _, _> = GameRunner::new(
        &config,
        size,
        CrosstermDisplay::new(),
        CrosstermInput::new(config.input_policy),
    )?
    .with_stop_handle(stop);

    let result = match panic::catch_unwind(AssertUnwindSafe(|| {
        runner.run(&mut CrosstermTerminal, &mut io::stdout())
    })) {
        Ok(result) => result,
        Err(payload) => {
            // The terminal is restored by now.
            let log_dir = logging.as_ref().map(|guard| guard.log_dir());
            eprintln!("{}", logging::panic_notice(payload.as_ref(), log_dir));
            panic::resume_unwind(payload)
        }
    };

    if let Some(guard) = &logging {
        tracing::info!(log_dir = %guard.log_dir().display(), frames = runner.frames(), "exiting");
    }
    result?;
    Ok(())
}
