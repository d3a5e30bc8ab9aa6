//! Logging setup.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use crate::error::{Result, StartupError};

/// Parses a level such as `info` or `DEBUG`.
pub fn parse_level(level: &str) -> Result<LevelFilter> {
    level
        .parse::<LevelFilter>()
        .map_err(|_| StartupError::LogLevel(level.to_owned()))
}

/// Installs the global `fmt` subscriber.
///
/// `RUST_LOG` directives override `level`.
pub fn setup_logging(level: &str) -> Result<()> {
    let level = parse_level(level)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .try_init()
        .map_err(StartupError::Subscriber)
}
