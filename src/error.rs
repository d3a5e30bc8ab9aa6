//! Error handler for the composition root.

use application::error::ApplicationError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, StartupError>;

/// Errors raised while starting the account service.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid log level `{0}`")]
    LogLevel(String),

    #[error("cannot install tracing subscriber")]
    Subscriber(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("cannot create bootstrap administrator: {0}")]
    Bootstrap(#[from] ApplicationError),
}
