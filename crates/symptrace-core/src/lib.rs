//! Symptrace Core Library
//!
//! Search engine behind the symptrace CLI: the symptom graph model, step-traced
//! BFS/DFS, and the yes/no interactive session protocol.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod records;
