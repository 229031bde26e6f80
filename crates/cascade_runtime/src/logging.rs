//! Logging setup for the demo binary.
//!
//! Library crates only emit `tracing` events; this module installs the
//! subscriber that prints them. Output goes to stderr so it never mixes with
//! the walkthrough on stdout.

use std::io;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::DEFAULT_LOG_FILTER;
use crate::error::Result;

/// Builds the event filter.
///
/// An explicit directive wins; otherwise `RUST_LOG` is used, falling back to
/// [`DEFAULT_LOG_FILTER`].
///
/// # Errors
///
/// Returns an error if `directive` is not a valid filter.
pub fn build_filter(directive: Option<&str>) -> Result<EnvFilter> {
    match directive {
        Some(directive) => Ok(EnvFilter::try_new(directive)?),
        None => Ok(EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))),
    }
}

/// Installs the global subscriber.
///
/// # Errors
///
/// Returns an error if the filter is invalid or a subscriber is already set.
pub fn init_logging(directive: Option<&str>) -> Result<()> {
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_target(true);

    tracing_subscriber::registry()
        .with(build_filter(directive)?)
        .with(stderr_layer)
        .try_init()?;
    Ok(())
}
