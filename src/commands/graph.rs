//! Graph commands: show the adjacency, check the structure

use serde_json::json;
use symptrace_core::error::{Result, SymptraceError};
use symptrace_core::graph::GraphModel;
use symptrace_core::records::join_nodes;

use super::dispatch::CommandContext;
use super::output::{print_json, print_records_data, print_records_header};
use crate::output_by_format_result;

/// Print every node with its successors and weight
pub fn execute_show(ctx: &CommandContext) -> Result<()> {
    let graph = ctx.graph()?;

    output_by_format_result!(ctx.cli.format,
        json => print_json(&graph),
        human => { print_graph_human(&graph); },
        records => {
            print_records_header(
                "graph",
                &[
                    ("target", graph.target().to_string()),
                    ("nodes", graph.nodes().len().to_string()),
                    ("edges", graph.edge_count().to_string()),
                ],
            );
            for node in graph.nodes() {
                println!(
                    "E {} -> {} weight={}",
                    node,
                    join_nodes(graph.successors(node)),
                    graph.weight(node)
                );
            }
        }
    )
}

fn print_graph_human(graph: &GraphModel) {
    println!("Target: {}", graph.target());
    println!(
        "{} node(s), {} edge(s)",
        graph.nodes().len(),
        graph.edge_count()
    );
    println!();
    for node in graph.nodes() {
        let successors = graph.successors(node);
        let next = if successors.is_empty() {
            "(terminal)".to_string()
        } else {
            successors
                .iter()
                .map(|s| graph.display_name(s))
                .collect::<Vec<_>>()
                .join(", ")
        };
        println!(
            "{} [{:.2}] -> {}",
            graph.display_name(node),
            graph.weight(node),
            next
        );
    }
}

/// Validate the graph; fails with a data error when issues are found
pub fn execute_check(ctx: &CommandContext) -> Result<()> {
    let graph = ctx.graph()?;
    let issues = graph.validate();
    tracing::debug!(issues = issues.len(), "graph check");

    output_by_format_result!(ctx.cli.format,
        json => print_json(&json!({
            "target": graph.target(),
            "ok": issues.is_empty(),
            "issues": issues,
        })),
        human => {
            if issues.is_empty() {
                if !ctx.cli.quiet {
                    println!("Graph OK: target {} reachable, no issues", graph.target());
                }
            } else {
                for issue in &issues {
                    println!("- {}", issue);
                }
            }
        },
        records => {
            print_records_header(
                "check",
                &[
                    ("target", graph.target().to_string()),
                    ("issues", issues.len().to_string()),
                ],
            );
            for issue in &issues {
                print_records_data("issue", &issue.to_string());
            }
        }
    )?;

    if issues.is_empty() {
        Ok(())
    } else {
        Err(SymptraceError::GraphCheckFailed {
            count: issues.len(),
        })
    }
}
