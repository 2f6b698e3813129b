//! Command dispatch logic for symptrace

use std::time::Instant;

use crate::cli::Cli;
use symptrace_core::error::Result;
use tracing::debug;

mod command;
mod macros;

pub use command::CommandContext;
use command::{Command, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let ctx = CommandContext::load(cli, start)?;

    debug!(elapsed = ?start.elapsed(), "load_config");

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
