use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize, Serializer};

use crate::error::SymptraceError;
use crate::graph::frontier::Discipline;

/// Fixed probability label attached to a positive diagnosis.
///
/// This is a placeholder value, not an inference: it is 0.8 whenever the target is
/// reached and 0.0 otherwise.
pub const FOUND_PROBABILITY: f64 = 0.8;

/// Probability label for an outcome
pub fn probability_label(found: bool) -> f64 {
    if found {
        FOUND_PROBABILITY
    } else {
        0.0
    }
}

/// Uninformed search strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Breadth-first search (FIFO queue)
    #[default]
    Bfs,
    /// Depth-first search (LIFO stack)
    Dfs,
}

impl Algorithm {
    /// Frontier discipline used by this strategy
    pub fn discipline(self) -> Discipline {
        match self {
            Algorithm::Bfs => Discipline::Fifo,
            Algorithm::Dfs => Discipline::Lifo,
        }
    }

    /// Upper-case label for display ("BFS" / "DFS")
    pub fn label(self) -> &'static str {
        match self {
            Algorithm::Bfs => "BFS",
            Algorithm::Dfs => "DFS",
        }
    }
}

impl FromStr for Algorithm {
    type Err = SymptraceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bfs" | "breadth" | "breadth-first" => Ok(Algorithm::Bfs),
            "dfs" | "depth" | "depth-first" => Ok(Algorithm::Dfs),
            other => Err(SymptraceError::UnknownAlgorithm(other.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Bfs => write!(f, "bfs"),
            Algorithm::Dfs => write!(f, "dfs"),
        }
    }
}

/// One recorded iteration of a full run.
///
/// The step is captured before the current node leaves the frontier, so
/// `frontier_snapshot` still contains it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraceStep {
    /// 1-based position within the run
    pub step_index: usize,
    /// Node at the head of the queue / top of the stack
    pub current_node: String,
    /// Discovery path from the start node to `current_node`
    pub path_so_far: Vec<String>,
    /// Every node scheduled so far
    pub visited_set: BTreeSet<String>,
    /// Frontier in storage order (queue head to tail, stack bottom to top)
    pub frontier_snapshot: Vec<String>,
    /// Whether `current_node` lies on the final path
    pub on_final_path: bool,
}

impl TraceStep {
    /// Copy of this step with `on_final_path` derived from the final path
    pub fn with_final_path(self, final_path: &[String]) -> Self {
        let on_final_path = final_path.iter().any(|n| *n == self.current_node);
        TraceStep {
            on_final_path,
            ..self
        }
    }
}

fn serialize_millis<S: Serializer>(elapsed: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(elapsed.as_secs_f64() * 1000.0)
}

/// Outcome of a full run
#[derive(Debug, Clone, Serialize)]
pub struct RunResult {
    pub algorithm: Algorithm,
    pub start: String,
    pub found: bool,
    pub final_path: Vec<String>,
    pub path_length: usize,
    pub visited_count: usize,
    /// Constant label, see [`FOUND_PROBABILITY`]
    pub probability: f64,
    /// Average importance weight of the nodes on `final_path`
    pub importance: f64,
    #[serde(rename = "elapsed_ms", serialize_with = "serialize_millis")]
    pub elapsed: Duration,
    pub steps: Vec<TraceStep>,
}

impl RunResult {
    /// Result for a missing or unknown start node: nothing ran.
    pub fn empty(algorithm: Algorithm, start: &str) -> Self {
        RunResult {
            algorithm,
            start: start.to_string(),
            found: false,
            final_path: Vec::new(),
            path_length: 0,
            visited_count: 0,
            probability: 0.0,
            importance: 0.0,
            elapsed: Duration::ZERO,
            steps: Vec::new(),
        }
    }

    /// True if the run never started (no steps were recorded)
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }
}
