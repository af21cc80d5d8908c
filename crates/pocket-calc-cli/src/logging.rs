//! Log subscriber setup
//!
//! `RUST_LOG` wins; otherwise the filter comes from the configured verbosity.
//! A log file gets JSON lines. Without one, logs go to stderr, except while
//! the terminal UI owns the screen, where they are dropped.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::CliConfig;
use crate::error::CliResult;

/// Where the running command draws its output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    /// Line-oriented output; stderr is free for logs
    Batch,
    /// Full-screen terminal UI
    Tui,
}

/// Filter from `RUST_LOG`, or from the verbosity when it is unset
#[must_use]
pub fn env_filter(config: &CliConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.verbosity.log_filter()))
}

/// Installs the global subscriber. A second call is a no-op.
pub fn init(config: &CliConfig, surface: Surface) -> CliResult<()> {
    let filter = env_filter(config);

    if let Some(path) = &config.log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let _ = tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(Mutex::new(file))
            .try_init();
        return Ok(());
    }

    if surface == Surface::Batch {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    }
    Ok(())
}
