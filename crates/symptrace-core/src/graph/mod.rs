//! Symptom graph search
//!
//! Provides the pieces a front end needs to diagnose by graph search:
//! - an immutable symptom graph with a single target
//! - full-run BFS/DFS with a per-step trace
//! - an interactive session that asks before every expansion

pub mod builtin;
pub mod engine;
pub mod frontier;
pub mod load;
pub mod model;
pub mod session;
pub mod types;

pub use builtin::{otitis_graph, OTITIS};
pub use engine::TraversalEngine;
pub use frontier::{Discipline, Frontier, FrontierEntry};
pub use load::{load_graph, parse_graph, GraphFormat};
pub use model::{GraphIssue, GraphModel};
pub use session::{InteractiveSession, Prompt, SessionState, SessionSummary, SessionView};
pub use types::{Algorithm, RunResult, TraceStep, FOUND_PROBABILITY};
