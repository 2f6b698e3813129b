//! Loading a symptom graph from a TOML, JSON or YAML document
//!
//! ```toml
//! target = "OTITIS"
//!
//! [edges]
//! dolor_oido = ["presion_oido", "dolor_punzante"]
//! dolor_punzante = ["OTITIS"]
//!
//! [weights]
//! dolor_oido = 0.3
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::bail_unsupported;
use crate::error::{Result, SymptraceError};
use crate::graph::GraphModel;

/// Serialization format of a graph document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphFormat {
    Toml,
    Json,
    Yaml,
}

impl GraphFormat {
    /// Pick the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase);
        match ext.as_deref() {
            Some("toml") => Ok(GraphFormat::Toml),
            Some("json") => Ok(GraphFormat::Json),
            Some("yaml") | Some("yml") => Ok(GraphFormat::Yaml),
            other => bail_unsupported!(
                "graph file extension",
                other.unwrap_or("(none)"),
                "toml, json, yaml, yml"
            ),
        }
    }
}

#[derive(Debug, Deserialize)]
struct GraphDocument {
    target: String,
    #[serde(default)]
    edges: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    weights: BTreeMap<String, f64>,
}

/// Parse a graph document. `origin` only labels errors.
pub fn parse_graph(content: &str, format: GraphFormat, origin: &Path) -> Result<GraphModel> {
    let invalid = |reason: &str| SymptraceError::InvalidGraph {
        path: origin.to_path_buf(),
        reason: reason.to_string(),
    };

    // Syntax errors are data errors too, reported against the document path
    let doc: GraphDocument = match format {
        GraphFormat::Toml => toml::from_str(content).map_err(|e| invalid(&e.to_string())),
        GraphFormat::Json => serde_json::from_str(content).map_err(|e| invalid(&e.to_string())),
        GraphFormat::Yaml => serde_yaml::from_str(content).map_err(|e| invalid(&e.to_string())),
    }?;

    let target = doc.target.trim();
    if target.is_empty() {
        return Err(invalid("target must not be empty"));
    }
    let blank_id = doc
        .edges
        .iter()
        .any(|(node, succ)| node.trim().is_empty() || succ.iter().any(|s| s.trim().is_empty()));
    if blank_id {
        return Err(invalid("node identifiers must not be empty"));
    }
    if let Some((node, weight)) = doc.weights.iter().find(|(_, w)| !w.is_finite()) {
        return Err(invalid(&format!("weight of {} is not a number: {}", node, weight)));
    }

    Ok(GraphModel::from_parts(target, doc.edges, doc.weights))
}

/// Read and parse the graph document at `path`
#[tracing::instrument(fields(path = %path.display()))]
pub fn load_graph(path: &Path) -> Result<GraphModel> {
    let format = GraphFormat::from_path(path)?;
    if !path.exists() {
        return Err(SymptraceError::not_found("graph file", path.display()));
    }
    let content = fs::read_to_string(path)
        .map_err(|e| SymptraceError::io_operation("read graph", path.display(), e))?;
    let graph = parse_graph(&content, format, path)?;
    tracing::debug!(
        nodes = graph.nodes().len(),
        edges = graph.edge_count(),
        target = graph.target(),
        "graph loaded"
    );
    Ok(graph)
}
