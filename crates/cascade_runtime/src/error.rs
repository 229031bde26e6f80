//! Errors raised by the demo driver.

use std::io;

use thiserror::Error;

/// Errors from running the demo or setting up its environment.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// Writing demo output failed.
    #[error("output error: {0}")]
    Io(#[from] io::Error),

    /// A layered map operation failed.
    #[error(transparent)]
    Map(#[from] cascade_foundation::Error),

    /// The log filter directive could not be parsed.
    #[error("invalid log filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),

    /// A global subscriber was already installed.
    #[error("logging already initialized: {0}")]
    Subscriber(#[from] tracing_subscriber::util::TryInitError),

    /// Command-line arguments were malformed.
    #[error("{0}")]
    Usage(String),
}

/// Result alias for the runtime crate.
pub type Result<T> = std::result::Result<T, RuntimeError>;
