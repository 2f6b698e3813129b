//! CLI argument parsing for symptrace
//!
//! Global flags: --graph, --format, --quiet, --verbose, --log-level, --log-json

pub mod args;
pub mod format;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{AskArgs, RunArgs};
use parse::parse_output_format;
pub use symptrace_core::format::OutputFormat;

/// Symptrace - step-traced BFS/DFS diagnosis over a symptom graph
#[derive(Parser, Debug)]
#[command(name = "symptrace")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Graph document to use instead of the built-in graph (.toml, .json, .yaml)
    #[arg(long, global = true, env = "SYMPTRACE_GRAPH")]
    pub graph: Option<PathBuf>,

    /// Output format (human, json, records)
    #[arg(long, global = true, value_parser = parse_output_format, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging and phase timing
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level (error, warn, info, debug, trace) or a full filter directive
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the symptoms a search can start from
    Symptoms,

    /// Show the graph: successors and weights of every node
    Graph,

    /// Check the graph for dangling successors, an unreachable target and bad weights
    Check,

    /// Run a complete BFS or DFS from a start symptom
    Run(RunArgs),

    /// Run BFS and DFS from the same symptom and compare the paths
    Compare {
        /// Start symptom (id or label)
        start: String,
    },

    /// Diagnose interactively, one yes/no question per candidate symptom
    Ask(AskArgs),

    /// Show the effective configuration
    Config,
}
