//! Command-line argument parsing for `cascade-demo`.

use crate::config::DemoConfig;
use crate::error::{Result, RuntimeError};

/// CLI configuration parsed from arguments.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Walkthrough presentation settings.
    pub demo: DemoConfig,
    /// Print usage and exit.
    pub show_help: bool,
    /// Print the version and exit.
    pub show_version: bool,
}

/// Parses arguments, skipping the program name in `args[0]`.
///
/// # Errors
///
/// Returns a usage error for unknown options or a missing `--log` value.
pub fn parse_args(args: &[String]) -> Result<CliConfig> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "--origins" => config.demo.show_origins = true,
            "-q" | "--quiet" => config.demo.narrate = false,
            "--log" => {
                i += 1;
                let Some(filter) = args.get(i) else {
                    return Err(RuntimeError::Usage("--log requires a value".to_string()));
                };
                config.demo.log_filter = Some(filter.clone());
            }
            arg => {
                return Err(RuntimeError::Usage(format!("unknown argument: {arg}")));
            }
        }
        i += 1;
    }

    Ok(config)
}

/// Returns the usage text.
#[must_use]
pub fn help_text() -> String {
    format!(
        "cascade-demo {}

Walks through a three-layer map and prints how each key resolves.

USAGE:
    cascade-demo [OPTIONS]

OPTIONS:
    -h, --help         Print this help and exit
    -V, --version      Print version and exit
        --origins      Show which layer each value resolved through
    -q, --quiet        Omit step headings
        --log <FILTER> Tracing filter (overrides RUST_LOG), e.g. cascade_map=debug
",
        env!("CARGO_PKG_VERSION")
    )
}
