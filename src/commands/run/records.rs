use symptrace_core::graph::RunResult;
use symptrace_core::records::join_nodes;

use crate::commands::output::records_header;

/// Header, one `S` line per step, then the `P` line with the final path
pub fn run_lines(target: &str, result: &RunResult) -> Vec<String> {
    let mut lines = Vec::with_capacity(result.steps.len() + 2);
    lines.push(records_header(
        "run",
        &[
            ("algorithm", result.algorithm.to_string()),
            ("start", result.start.clone()),
            ("target", target.to_string()),
            ("found", result.found.to_string()),
            ("length", result.path_length.to_string()),
            ("steps", result.step_count().to_string()),
            ("visited", result.visited_count.to_string()),
        ],
    ));

    for step in &result.steps {
        lines.push(format!(
            "S {} {} path={} frontier={} visited={} final={}",
            step.step_index,
            step.current_node,
            join_nodes(&step.path_so_far),
            join_nodes(&step.frontier_snapshot),
            step.visited_set.len(),
            step.on_final_path
        ));
    }

    lines.push(format!(
        "P {} probability={} importance={:.2}",
        join_nodes(&result.final_path),
        result.probability,
        result.importance
    ));
    lines
}
