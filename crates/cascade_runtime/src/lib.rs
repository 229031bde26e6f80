//! Demo driver, CLI, and logging setup for Cascade.
//!
//! This crate provides:
//! - [`run_walkthrough`] - Narrated tour of layered lookups
//! - [`DemoConfig`] - Presentation settings for the walkthrough
//! - CLI argument parsing and logging initialization

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cli;
pub mod config;
pub mod demo;
pub mod error;
pub mod logging;

pub use cli::{CliConfig, help_text, parse_args};
pub use config::DemoConfig;
pub use demo::{fixture, run_walkthrough};
pub use error::{Result, RuntimeError};
pub use logging::init_logging;
