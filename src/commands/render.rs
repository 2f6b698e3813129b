//! Human-readable rendering of paths and frontiers

use symptrace_core::graph::{Algorithm, GraphModel};

/// "A → B → C" using display names; "(none)" for an empty path
pub fn path_line(graph: &GraphModel, path: &[String]) -> String {
    if path.is_empty() {
        return "(none)".to_string();
    }
    path.iter()
        .map(|n| graph.display_name(n))
        .collect::<Vec<_>>()
        .join(" → ")
}

pub fn frontier_label(algorithm: Algorithm) -> &'static str {
    match algorithm {
        Algorithm::Bfs => "Queue (FIFO)",
        Algorithm::Dfs => "Stack (LIFO)",
    }
}

/// Render a frontier snapshot given in storage order.
///
/// Queues read head to tail between `[OUT]` and `[IN]`; stacks read top to
/// base.
pub fn frontier_line(graph: &GraphModel, algorithm: Algorithm, nodes: &[String]) -> String {
    let names: Vec<String> = match algorithm {
        Algorithm::Bfs => nodes.iter().map(|n| graph.display_name(n)).collect(),
        Algorithm::Dfs => nodes.iter().rev().map(|n| graph.display_name(n)).collect(),
    };
    match (algorithm, names.is_empty()) {
        (Algorithm::Bfs, true) => "(empty queue)".to_string(),
        (Algorithm::Dfs, true) => "(empty stack)".to_string(),
        (Algorithm::Bfs, false) => format!("[OUT] ← {} [IN]", names.join(" ← ")),
        (Algorithm::Dfs, false) => format!("[TOP] {} [BASE]", names.join(" | ")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nodes(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_path_line() {
        let graph = GraphModel::new("OTITIS");
        assert_eq!(
            path_line(&graph, &nodes(&["fiebre_alta", "OTITIS"])),
            "Fiebre Alta → OTITIS"
        );
        assert_eq!(path_line(&graph, &[]), "(none)");
    }

    #[test]
    fn test_queue_reads_head_first() {
        let graph = GraphModel::new("T");
        assert_eq!(
            frontier_line(&graph, Algorithm::Bfs, &nodes(&["a", "b"])),
            "[OUT] ← A ← B [IN]"
        );
        assert_eq!(frontier_line(&graph, Algorithm::Bfs, &[]), "(empty queue)");
    }

    #[test]
    fn test_stack_reads_top_first() {
        let graph = GraphModel::new("T");
        assert_eq!(
            frontier_line(&graph, Algorithm::Dfs, &nodes(&["a", "b"])),
            "[TOP] B | A [BASE]"
        );
    }
}
