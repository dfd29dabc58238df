//! Tracing setup.
//!
//! The terminal belongs to the game, so logs only ever go to a file.

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;

use crate::config::Config;

/// Install the global subscriber if a log file is configured.
///
/// Returns whether logging was enabled.
pub fn init(config: &Config) -> Result<bool> {
    let Some(path) = &config.log_path else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .with(LevelFilter::from_level(config.log_level))
        .try_init()
        .context("install tracing subscriber")?;

    tracing::info!(level = %config.log_level, "logging initialized");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_log_path_means_no_subscriber() {
        let config = Config::from_lookup(|_| None);
        assert!(!init(&config).unwrap());
    }
}
