//! Command trait and context for dispatching commands

use std::time::Instant;

use super::macros::trace_command;
use crate::cli::{Cli, Commands};
use crate::commands;
use symptrace_core::config::GlobalConfig;
use symptrace_core::error::{Result, SymptraceError};
use symptrace_core::graph::{load_graph, otitis_graph, Algorithm, GraphModel};

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: GlobalConfig,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    /// Build the context, reading the global config file if present
    pub fn load(cli: &'a Cli, start: Instant) -> Result<Self> {
        Ok(Self {
            cli,
            config: GlobalConfig::load()?,
            start,
        })
    }

    /// The graph named by `--graph`, else by the config, else the built-in one
    pub fn graph(&self) -> Result<GraphModel> {
        let graph = match self.cli.graph.as_ref().or(self.config.graph.as_ref()) {
            Some(path) => load_graph(path)?,
            None => otitis_graph(),
        };
        trace_command!(self.cli, self.start, "load_graph");
        Ok(graph)
    }

    /// Requested algorithm, falling back to the configured default
    pub fn algorithm(&self, requested: Option<Algorithm>) -> Algorithm {
        requested.unwrap_or(self.config.default_algorithm)
    }

    /// Resolve user input to a start node of `graph`
    pub fn resolve_start<'g>(&self, graph: &'g GraphModel, input: &str) -> Result<&'g str> {
        graph
            .resolve(input)
            .ok_or_else(|| SymptraceError::UnknownSymptom(input.to_string()))
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("symptrace {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Step-traced BFS/DFS diagnosis over a symptom graph.");
        println!();
        println!("Run `symptrace --help` for usage information.");
        Ok(())
    }
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Symptoms => commands::symptoms::execute(ctx),
            Commands::Graph => commands::graph::execute_show(ctx),
            Commands::Check => commands::graph::execute_check(ctx),
            Commands::Run(args) => commands::run::execute(ctx, args),
            Commands::Compare { start } => commands::compare::execute(ctx, start),
            Commands::Ask(args) => commands::ask::execute(ctx, args),
            Commands::Config => commands::config::execute(ctx),
        }
    }
}
