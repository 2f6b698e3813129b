use symptrace_core::graph::{GraphModel, RunResult, TraceStep};

use crate::commands::render::{frontier_label, frontier_line, path_line};

/// Outcome line, e.g. "Diagnosis: OTITIS (probability 80%)"
pub fn outcome_line(graph: &GraphModel, result: &RunResult) -> String {
    if result.found {
        format!(
            "Diagnosis: {} (probability {:.0}%)",
            graph.display_name(graph.target()),
            result.probability * 100.0
        )
    } else {
        format!("No diagnosis: {} not reachable", graph.target())
    }
}

pub fn print_run(graph: &GraphModel, result: &RunResult, show_steps: bool, quiet: bool) {
    if !quiet {
        println!(
            "{} from {}",
            result.algorithm.label(),
            graph.display_name(&result.start)
        );
        println!();
    }

    println!("{}", outcome_line(graph, result));
    println!("Path: {}", path_line(graph, &result.final_path));

    if !quiet {
        println!(
            "Path length: {}  Visited: {}  Steps: {}",
            result.path_length,
            result.visited_count,
            result.step_count()
        );
        println!(
            "Importance: {:.2}  Time: {:.3} ms",
            result.importance,
            result.elapsed.as_secs_f64() * 1000.0
        );
    }

    if show_steps {
        println!();
        println!("Steps ({}):", frontier_label(result.algorithm));
        for step in &result.steps {
            for line in step_lines(graph, result, step) {
                println!("{}", line);
            }
        }
    }
}

/// Three lines per step; `*` marks steps whose node lies on the final path
fn step_lines(graph: &GraphModel, result: &RunResult, step: &TraceStep) -> [String; 3] {
    let marker = if step.on_final_path { "*" } else { " " };
    [
        format!(
            "{} {:>3}. {}",
            marker,
            step.step_index,
            graph.display_name(&step.current_node)
        ),
        format!("       path: {}", path_line(graph, &step.path_so_far)),
        format!(
            "       frontier: {}  visited: {}",
            frontier_line(graph, result.algorithm, &step.frontier_snapshot),
            step.visited_set.len()
        ),
    ]
}
