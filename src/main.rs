//! Symptrace - step-traced diagnosis over a symptom graph
//!
//! Walks a directed symptom graph towards a diagnosis with breadth-first or
//! depth-first search, or asks about one symptom at a time.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::{parse, Cli, OutputFormat};
use symptrace_core::error::ExitCode as SymptraceExitCode;
use symptrace_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // `--format` may not be parsed yet, so JSON is detected from argv
        Err(err) if argv_requests_json() => match parse::clap_failure(&err) {
            Some(error) => {
                eprintln!("{}", error.to_json());
                return ExitCode::from(error.exit_code() as u8);
            }
            None => err.exit(),
        },
        Err(err) => err.exit(),
    };

    // Initialize structured logging
    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    let result = commands::dispatch::run(&cli, start);

    match result {
        Ok(()) => ExitCode::from(SymptraceExitCode::Success as u8),
        Err(e) => {
            let exit_code = e.exit_code();

            if cli.format == OutputFormat::Json {
                eprintln!("{}", e.to_json());
            } else if !cli.quiet {
                eprintln!("error: {}", e);
            }

            ExitCode::from(exit_code as u8)
        }
    }
}

fn argv_requests_json() -> bool {
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--format" {
            if args.next().is_some_and(|v| v == "json") {
                return true;
            }
        } else if arg == "--format=json" {
            return true;
        }
    }
    false
}
