//! Resumable traversal driven by yes/no answers
//!
//! A session keeps the same frontier discipline as a full run but pauses
//! before every expansion. A "yes" expands the candidate along its edges, a
//! "no" discards it. Reaching the target is a diagnosis without a question.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use crate::error::{Result, SymptraceError};
use crate::graph::frontier::{Frontier, FrontierEntry};
use crate::graph::types::{probability_label, Algorithm};
use crate::graph::GraphModel;

/// Protocol state of an [`InteractiveSession`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    /// A candidate is waiting for an answer
    AwaitingAnswer,
    /// The target was reached
    Found,
    /// The frontier emptied without reaching the target
    NotFound,
}

impl SessionState {
    pub fn is_terminal(self) -> bool {
        !matches!(self, SessionState::AwaitingAnswer)
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionState::AwaitingAnswer => write!(f, "awaiting answer"),
            SessionState::Found => write!(f, "found"),
            SessionState::NotFound => write!(f, "not found"),
        }
    }
}

/// What the caller should do next
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompt {
    /// Ask whether this candidate symptom is present
    Ask(FrontierEntry),
    /// The target is next in line; the session is now `Found`
    Diagnosed(Vec<String>),
}

/// Read-only snapshot for rendering the session between calls
#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub algorithm: Algorithm,
    pub state: SessionState,
    pub candidate: Option<String>,
    pub frontier: Vec<String>,
    pub accumulated_path: Vec<String>,
    pub visited: BTreeSet<String>,
    pub questions_asked: usize,
}

/// Final (or current) outcome of a session
#[derive(Debug, Clone, Serialize)]
pub struct SessionSummary {
    pub algorithm: Algorithm,
    pub start: String,
    pub state: SessionState,
    pub found: bool,
    /// Path to the target; empty unless found
    pub final_path: Vec<String>,
    /// Path confirmed by the most recent "yes"
    pub confirmed_path: Vec<String>,
    pub questions_asked: usize,
    pub visited_count: usize,
    pub probability: f64,
}

/// Single-step BFS/DFS over a borrowed graph
#[derive(Debug, Clone)]
pub struct InteractiveSession<'g> {
    graph: &'g GraphModel,
    algorithm: Algorithm,
    start: String,
    frontier: Frontier,
    visited: BTreeSet<String>,
    accumulated_path: Vec<String>,
    step_counter: usize,
    state: SessionState,
}

impl<'g> InteractiveSession<'g> {
    /// Start a session at `start`. An empty or unknown start leaves the
    /// frontier empty, so the session begins in `NotFound`.
    pub fn new(graph: &'g GraphModel, algorithm: Algorithm, start: &str) -> Self {
        let valid = !start.is_empty() && graph.contains(start);
        let (frontier, visited) = if valid {
            (
                Frontier::seeded(algorithm.discipline(), start),
                BTreeSet::from([start.to_string()]),
            )
        } else {
            (Frontier::empty(algorithm.discipline()), BTreeSet::new())
        };
        let state = if frontier.is_empty() {
            SessionState::NotFound
        } else {
            SessionState::AwaitingAnswer
        };

        tracing::debug!(%algorithm, start, ?state, "session started");

        InteractiveSession {
            graph,
            algorithm,
            start: start.to_string(),
            frontier,
            visited,
            accumulated_path: Vec::new(),
            step_counter: 0,
            state,
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    pub fn accumulated_path(&self) -> &[String] {
        &self.accumulated_path
    }

    pub fn visited(&self) -> &BTreeSet<String> {
        &self.visited
    }

    /// Number of answers applied so far
    pub fn questions_asked(&self) -> usize {
        self.step_counter
    }

    /// Pending nodes in storage order (queue head to tail, stack bottom to top)
    pub fn frontier_nodes(&self) -> Vec<String> {
        self.frontier.nodes()
    }

    fn ensure_active(&self) -> Result<()> {
        if self.state.is_terminal() {
            return Err(SymptraceError::SessionFinished {
                outcome: self.state,
            });
        }
        Ok(())
    }

    /// If the target is next in line, conclude the session with its path
    fn conclude_if_target(&mut self) -> Option<Vec<String>> {
        let head = self.frontier.peek()?;
        if !self.graph.is_target(&head.node) {
            return None;
        }
        let path = head.path.clone();
        self.accumulated_path = path.clone();
        self.state = SessionState::Found;
        tracing::info!(
            algorithm = %self.algorithm,
            questions = self.step_counter,
            path_length = path.len(),
            "target reached"
        );
        Some(path)
    }

    /// The candidate awaiting an answer, without consuming it.
    ///
    /// When the candidate is the target the session transitions to `Found`
    /// and returns [`Prompt::Diagnosed`]. Fails once the session is terminal.
    pub fn peek_next(&mut self) -> Result<Prompt> {
        self.ensure_active()?;
        if let Some(path) = self.conclude_if_target() {
            return Ok(Prompt::Diagnosed(path));
        }
        match self.frontier.peek() {
            Some(entry) => Ok(Prompt::Ask(entry.clone())),
            // Unreachable while awaiting: an empty frontier moves to NotFound
            None => {
                self.state = SessionState::NotFound;
                Err(SymptraceError::SessionFinished {
                    outcome: self.state,
                })
            }
        }
    }

    /// Apply the answer for the current candidate and return the new state.
    ///
    /// The candidate leaves the frontier either way. Only a "yes" schedules its
    /// unvisited successors and makes its path the accumulated path.
    pub fn answer(&mut self, is_present: bool) -> Result<SessionState> {
        self.ensure_active()?;
        if self.conclude_if_target().is_some() {
            return Ok(self.state);
        }

        let Some(candidate) = self.frontier.pop() else {
            self.state = SessionState::NotFound;
            return Ok(self.state);
        };
        self.step_counter += 1;

        if is_present {
            let scheduled = self
                .frontier
                .expand(self.graph, &candidate, &mut self.visited);
            tracing::debug!(node = %candidate.node, scheduled, "symptom confirmed");
            self.accumulated_path = candidate.path;
        } else {
            tracing::debug!(node = %candidate.node, "symptom ruled out");
        }

        if self.frontier.is_empty() {
            self.state = SessionState::NotFound;
            tracing::info!(
                algorithm = %self.algorithm,
                questions = self.step_counter,
                "frontier exhausted without reaching target"
            );
        }
        Ok(self.state)
    }

    pub fn view(&self) -> SessionView {
        let candidate = if self.state.is_terminal() {
            None
        } else {
            self.frontier.peek().map(|e| e.node.clone())
        };
        SessionView {
            algorithm: self.algorithm,
            state: self.state,
            candidate,
            frontier: self.frontier.nodes(),
            accumulated_path: self.accumulated_path.clone(),
            visited: self.visited.clone(),
            questions_asked: self.step_counter,
        }
    }

    pub fn summary(&self) -> SessionSummary {
        let found = self.state == SessionState::Found;
        SessionSummary {
            algorithm: self.algorithm,
            start: self.start.clone(),
            state: self.state,
            found,
            final_path: if found {
                self.accumulated_path.clone()
            } else {
                Vec::new()
            },
            confirmed_path: self.accumulated_path.clone(),
            questions_asked: self.step_counter,
            visited_count: self.visited.len(),
            probability: probability_label(found),
        }
    }
}

#[cfg(test)]
mod tests;
