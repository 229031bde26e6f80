//! Cascade demo entry point.

use std::env;
use std::io;
use std::process::ExitCode;

use cascade_runtime::{help_text, init_logging, parse_args, run_walkthrough};

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print!("{}", help_text());
        return Ok(());
    }

    if config.show_version {
        println!("cascade-demo {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    init_logging(config.demo.log_filter.as_deref())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_walkthrough(&mut out, &config.demo)?;
    Ok(())
}
