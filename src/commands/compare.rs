//! Compare command: BFS and DFS from the same start symptom

use serde::Serialize;
use symptrace_core::error::Result;
use symptrace_core::graph::{GraphModel, RunResult, TraversalEngine};
use symptrace_core::records::join_nodes;

use super::dispatch::CommandContext;
use super::output::{print_json, print_records_header};
use super::render::path_line;
use crate::output_by_format_result;

/// Which strategy reached the target with fewer nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    BfsShorter,
    Equal,
    DfsShorter,
    /// At least one strategy did not reach the target
    Undecided,
}

impl Verdict {
    pub fn of(bfs: &RunResult, dfs: &RunResult) -> Self {
        if !bfs.found || !dfs.found {
            return Verdict::Undecided;
        }
        match bfs.path_length.cmp(&dfs.path_length) {
            std::cmp::Ordering::Less => Verdict::BfsShorter,
            std::cmp::Ordering::Equal => Verdict::Equal,
            std::cmp::Ordering::Greater => Verdict::DfsShorter,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::BfsShorter => "bfs_shorter",
            Verdict::Equal => "equal",
            Verdict::DfsShorter => "dfs_shorter",
            Verdict::Undecided => "undecided",
        }
    }

    fn describe(self) -> &'static str {
        match self {
            Verdict::BfsShorter => "BFS found the shorter path",
            Verdict::Equal => "Both paths have the same length",
            Verdict::DfsShorter => "DFS found the shorter path",
            Verdict::Undecided => "No comparison: the target was not reached",
        }
    }
}

#[derive(Debug, Serialize)]
struct Comparison<'a> {
    start: &'a str,
    target: &'a str,
    verdict: Verdict,
    bfs: &'a RunResult,
    dfs: &'a RunResult,
}

pub fn execute(ctx: &CommandContext, start: &str) -> Result<()> {
    let graph = ctx.graph()?;
    let start = ctx.resolve_start(&graph, start)?;

    let engine = TraversalEngine::new(&graph);
    let bfs = engine.bfs(start);
    let dfs = engine.dfs(start);
    let verdict = Verdict::of(&bfs, &dfs);
    tracing::debug!(?verdict, bfs = bfs.path_length, dfs = dfs.path_length, "compare");

    output_by_format_result!(ctx.cli.format,
        json => print_json(&Comparison {
            start,
            target: graph.target(),
            verdict,
            bfs: &bfs,
            dfs: &dfs,
        }),
        human => { print_human(&graph, start, &bfs, &dfs, verdict); },
        records => {
            print_records_header(
                "compare",
                &[
                    ("start", start.to_string()),
                    ("target", graph.target().to_string()),
                    ("verdict", verdict.as_str().to_string()),
                ],
            );
            for result in [&bfs, &dfs] {
                println!(
                    "R {} found={} length={} steps={} visited={} path={}",
                    result.algorithm,
                    result.found,
                    result.path_length,
                    result.step_count(),
                    result.visited_count,
                    join_nodes(&result.final_path)
                );
            }
        }
    )
}

fn print_human(
    graph: &GraphModel,
    start: &str,
    bfs: &RunResult,
    dfs: &RunResult,
    verdict: Verdict,
) {
    println!("Comparing BFS and DFS from {}", graph.display_name(start));
    println!();
    for result in [bfs, dfs] {
        println!("{}:", result.algorithm.label());
        println!("  Path: {}", path_line(graph, &result.final_path));
        println!(
            "  Length: {}  Steps: {}  Visited: {}",
            result.path_length,
            result.step_count(),
            result.visited_count
        );
    }
    println!();
    println!("{}", verdict.describe());
}
