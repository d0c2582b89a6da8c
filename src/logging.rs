//! Tracing subscriber setup for the binary

use anyhow::{Context, Result};
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn filter(verbose: bool) -> EnvFilter {
    let default = if verbose {
        "wordle_game=debug,wordle=debug"
    } else {
        "wordle_game=warn,wordle=warn"
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Install the global subscriber
///
/// `RUST_LOG` overrides the level chosen by `verbose`. With a `log_file` the
/// output goes there without colours, which keeps the TUI screen clean;
/// otherwise it goes to stderr.
///
/// # Errors
///
/// Returns an error if the log file cannot be created.
pub fn init_logger(verbose: bool, log_file: Option<&Path>) -> Result<()> {
    let registry = tracing_subscriber::registry().with(filter(verbose));

    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("failed to create log file {}", path.display()))?;

        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(Mutex::new(file))
                    .with_ansi(false)
                    .with_target(false)
                    .compact(),
            )
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .compact(),
            )
            .init();
    }

    Ok(())
}
