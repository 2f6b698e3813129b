use super::parse::parse_algorithm;
use clap::Args;
use symptrace_core::graph::Algorithm;

#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Start symptom (id or label, e.g. `dolor_oido` or "Dolor Oido")
    pub start: String,

    /// Search strategy (bfs, dfs); defaults to the configured algorithm
    #[arg(long, short, value_parser = parse_algorithm)]
    pub algorithm: Option<Algorithm>,

    /// Print every recorded step, not only the outcome
    #[arg(long)]
    pub steps: bool,
}

#[derive(Args, Debug, Clone)]
pub struct AskArgs {
    /// Start symptom (id or label)
    pub start: String,

    /// Search strategy (bfs, dfs); defaults to the configured algorithm
    #[arg(long, short, value_parser = parse_algorithm)]
    pub algorithm: Option<Algorithm>,
}
