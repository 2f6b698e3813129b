//! Run command: a complete BFS or DFS from one start symptom

mod human;
mod records;

use symptrace_core::error::Result;
use symptrace_core::graph::TraversalEngine;

use super::dispatch::CommandContext;
use super::output::print_json;
use crate::cli::RunArgs;
use crate::output_by_format_result;

pub fn execute(ctx: &CommandContext, args: &RunArgs) -> Result<()> {
    let graph = ctx.graph()?;
    let start = ctx.resolve_start(&graph, &args.start)?;
    let algorithm = ctx.algorithm(args.algorithm);
    let show_steps = args.steps || ctx.config.show_steps;

    let result = TraversalEngine::new(&graph).run(algorithm, start);

    output_by_format_result!(ctx.cli.format,
        json => print_json(&result),
        human => { human::print_run(&graph, &result, show_steps, ctx.cli.quiet); },
        records => {
            for line in records::run_lines(graph.target(), &result) {
                println!("{}", line);
            }
        }
    )
}
