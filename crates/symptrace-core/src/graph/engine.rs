//! Full-run breadth-first and depth-first search with step traces
//!
//! Both strategies share one loop; only the frontier discipline differs.
//! Each iteration records a [`TraceStep`] before the head/top leaves the
//! frontier, and nodes are marked visited when scheduled, not when examined.

use std::collections::BTreeSet;
use std::time::Instant;

use crate::graph::frontier::Frontier;
use crate::graph::types::{probability_label, Algorithm, RunResult, TraceStep};
use crate::graph::GraphModel;
use crate::trace_time;

/// Runs complete traversals over a borrowed graph
#[derive(Debug, Clone, Copy)]
pub struct TraversalEngine<'g> {
    graph: &'g GraphModel,
}

impl<'g> TraversalEngine<'g> {
    pub fn new(graph: &'g GraphModel) -> Self {
        TraversalEngine { graph }
    }

    pub fn graph(&self) -> &'g GraphModel {
        self.graph
    }

    /// Breadth-first run from `start`
    pub fn bfs(&self, start: &str) -> RunResult {
        self.run(Algorithm::Bfs, start)
    }

    /// Depth-first run from `start`
    pub fn dfs(&self, start: &str) -> RunResult {
        self.run(Algorithm::Dfs, start)
    }

    /// Run `algorithm` from `start` until the target is removed from the
    /// frontier or the frontier empties.
    ///
    /// An empty or unknown `start` yields [`RunResult::empty`].
    #[tracing::instrument(skip(self), fields(algorithm = %algorithm, start = %start))]
    pub fn run(&self, algorithm: Algorithm, start: &str) -> RunResult {
        if start.is_empty() || !self.graph.contains(start) {
            tracing::debug!("start node not in graph, nothing to run");
            return RunResult::empty(algorithm, start);
        }

        let started = Instant::now();
        let mut frontier = Frontier::seeded(algorithm.discipline(), start);
        let mut visited = BTreeSet::from([start.to_string()]);
        let mut steps: Vec<TraceStep> = Vec::new();
        let mut final_path: Option<Vec<String>> = None;

        while let Some(head) = frontier.peek() {
            steps.push(TraceStep {
                step_index: steps.len() + 1,
                current_node: head.node.clone(),
                path_so_far: head.path.clone(),
                visited_set: visited.clone(),
                frontier_snapshot: frontier.nodes(),
                on_final_path: false,
            });

            let Some(current) = frontier.pop() else {
                break;
            };

            if self.graph.is_target(&current.node) {
                final_path = Some(current.path);
                break;
            }

            let scheduled = frontier.expand(self.graph, &current, &mut visited);
            tracing::trace!(node = %current.node, scheduled, pending = frontier.len(), "expand");
        }

        let elapsed = started.elapsed();
        trace_time!(started, "traversal");

        let found = final_path.is_some();
        let final_path = final_path.unwrap_or_default();
        let steps = mark_final_path(steps, &final_path);

        tracing::debug!(
            found,
            steps = steps.len(),
            visited = visited.len(),
            path_length = final_path.len(),
            "run complete"
        );

        RunResult {
            algorithm,
            start: start.to_string(),
            found,
            path_length: final_path.len(),
            visited_count: visited.len(),
            probability: probability_label(found),
            importance: self.graph.average_weight(&final_path),
            elapsed,
            steps,
            final_path,
        }
    }
}

/// Derive `on_final_path` for every step once the run has concluded
fn mark_final_path(steps: Vec<TraceStep>, final_path: &[String]) -> Vec<TraceStep> {
    if final_path.is_empty() {
        return steps;
    }
    steps
        .into_iter()
        .map(|step| step.with_final_path(final_path))
        .collect()
}
