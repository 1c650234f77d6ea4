//! Logging setup.
//!
//! Logs go to a file only: stdout and stderr belong to the terminal UI
//! while it runs.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::LogSettings;

/// Install the global `tracing` subscriber described by `settings`.
///
/// Returns `Ok(false)` when no log file is configured and nothing was
/// installed. `RUST_LOG` overrides `settings.level`.
pub fn init(settings: &LogSettings) -> Result<bool, Box<dyn std::error::Error>> {
    let Some(path) = &settings.file else {
        return Ok(false);
    };

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&settings.level)?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| e as Box<dyn std::error::Error>)?;

    tracing::info!(path = %path.display(), "logging initialized");
    Ok(true)
}
