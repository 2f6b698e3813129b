//! Directed symptom graph with a single diagnostic target

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::Serialize;

/// Immutable adjacency structure the engine and sessions read from.
///
/// Lookups are total: an unknown node has no successors and weight 0.0.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphModel {
    target: String,
    edges: BTreeMap<String, Vec<String>>,
    weights: BTreeMap<String, f64>,
}

/// A structural problem reported by [`GraphModel::validate`]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GraphIssue {
    /// A successor that has no adjacency entry of its own
    DanglingSuccessor { from: String, to: String },
    /// The target is neither declared nor referenced
    MissingTarget { target: String },
    /// No node lists the target as a successor
    UnreachableTarget { target: String },
    /// A weight outside [0, 1]
    WeightOutOfRange { node: String, weight: f64 },
}

impl fmt::Display for GraphIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphIssue::DanglingSuccessor { from, to } => {
                write!(f, "{} -> {}: successor has no adjacency entry", from, to)
            }
            GraphIssue::MissingTarget { target } => {
                write!(f, "target {} does not appear in the graph", target)
            }
            GraphIssue::UnreachableTarget { target } => {
                write!(f, "target {} is not a successor of any node", target)
            }
            GraphIssue::WeightOutOfRange { node, weight } => {
                write!(f, "weight of {} is {} (expected 0.0..=1.0)", node, weight)
            }
        }
    }
}

impl GraphModel {
    /// Create an empty graph with the given target
    pub fn new(target: impl Into<String>) -> Self {
        GraphModel {
            target: target.into(),
            edges: BTreeMap::new(),
            weights: BTreeMap::new(),
        }
    }

    /// Build a graph from prepared adjacency and weight tables
    pub fn from_parts(
        target: impl Into<String>,
        edges: BTreeMap<String, Vec<String>>,
        weights: BTreeMap<String, f64>,
    ) -> Self {
        GraphModel {
            target: target.into(),
            edges,
            weights,
        }
    }

    /// Declare the ordered successors of `node`, replacing any previous entry
    pub fn with_edges<I, S>(mut self, node: &str, successors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.edges.insert(
            node.to_string(),
            successors.into_iter().map(Into::into).collect(),
        );
        self
    }

    /// Set the importance weight of `node`
    pub fn with_weight(mut self, node: &str, weight: f64) -> Self {
        self.weights.insert(node.to_string(), weight);
        self
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn is_target(&self, node: &str) -> bool {
        node == self.target
    }

    /// Ordered successors of `node`; empty for unknown and terminal nodes
    pub fn successors(&self, node: &str) -> &[String] {
        self.edges.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether `node` is part of the graph (declared, referenced, or the target)
    pub fn contains(&self, node: &str) -> bool {
        self.is_target(node)
            || self.edges.contains_key(node)
            || self.edges.values().any(|succ| succ.iter().any(|s| s == node))
    }

    /// Every node identifier, sorted
    pub fn nodes(&self) -> BTreeSet<&str> {
        let mut nodes: BTreeSet<&str> = self.edges.keys().map(String::as_str).collect();
        nodes.extend(self.edges.values().flatten().map(String::as_str));
        nodes.insert(self.target.as_str());
        nodes
    }

    /// Selectable start symptoms: every node except the target, sorted
    pub fn all_symptom_nodes(&self) -> Vec<String> {
        self.nodes()
            .into_iter()
            .filter(|n| !self.is_target(n))
            .map(str::to_string)
            .collect()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.values().map(Vec::len).sum()
    }

    /// Importance weight of `node`, 0.0 when unset
    pub fn weight(&self, node: &str) -> f64 {
        self.weights.get(node).copied().unwrap_or(0.0)
    }

    /// Average weight of `nodes`, capped at 1.0; 0.0 for an empty slice
    pub fn average_weight(&self, nodes: &[String]) -> f64 {
        if nodes.is_empty() {
            return 0.0;
        }
        let total: f64 = nodes.iter().map(|n| self.weight(n)).sum();
        (total / nodes.len() as f64).min(1.0)
    }

    /// Human-readable label: separators become spaces and words are title-cased.
    /// The target identifier is returned unchanged.
    pub fn display_name(&self, node: &str) -> String {
        if self.is_target(node) {
            return node.to_string();
        }
        node.split(['_', '-', ' '])
            .filter(|w| !w.is_empty())
            .map(title_case)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Map user input to a node id, by exact id or by its display label.
    ///
    /// A label shared by several ids is ambiguous and resolves to nothing;
    /// only the exact id selects one of them.
    pub fn resolve(&self, input: &str) -> Option<&str> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }
        let nodes = self.nodes();
        if let Some(exact) = nodes.get(input) {
            return Some(*exact);
        }
        let wanted = slug::slugify(input);
        let mut matches = nodes.into_iter().filter(|n| slug::slugify(n) == wanted);
        let first = matches.next()?;
        if matches.next().is_some() {
            tracing::debug!(input, "ambiguous symptom label");
            return None;
        }
        Some(first)
    }

    /// Report structural problems without rejecting the graph
    pub fn validate(&self) -> Vec<GraphIssue> {
        let mut issues = Vec::new();

        for (from, successors) in &self.edges {
            for to in successors {
                if !self.edges.contains_key(to) && !self.is_target(to) {
                    issues.push(GraphIssue::DanglingSuccessor {
                        from: from.clone(),
                        to: to.clone(),
                    });
                }
            }
        }

        let referenced = self.edges.values().flatten().any(|s| self.is_target(s));
        if !referenced {
            if self.edges.contains_key(&self.target) {
                issues.push(GraphIssue::UnreachableTarget {
                    target: self.target.clone(),
                });
            } else {
                issues.push(GraphIssue::MissingTarget {
                    target: self.target.clone(),
                });
            }
        }

        for (node, &weight) in &self.weights {
            if !(0.0..=1.0).contains(&weight) {
                issues.push(GraphIssue::WeightOutOfRange {
                    node: node.clone(),
                    weight,
                });
            }
        }

        issues
    }
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diamond() -> GraphModel {
        GraphModel::new("TARGET")
            .with_edges("A", ["B", "C"])
            .with_edges("B", ["D"])
            .with_edges("C", ["D"])
            .with_edges("D", ["TARGET"])
            .with_edges("TARGET", Vec::<String>::new())
            .with_weight("A", 0.2)
            .with_weight("D", 0.6)
    }

    #[test]
    fn test_successors_preserve_order() {
        let graph = diamond();
        assert_eq!(graph.successors("A"), ["B", "C"]);
        assert!(graph.successors("TARGET").is_empty());
    }

    #[test]
    fn test_successors_of_unknown_node_is_empty() {
        assert!(diamond().successors("nope").is_empty());
    }

    #[test]
    fn test_all_symptom_nodes_sorted_without_target() {
        assert_eq!(diamond().all_symptom_nodes(), ["A", "B", "C", "D"]);
    }

    #[test]
    fn test_contains() {
        let graph = GraphModel::new("T").with_edges("x", ["y"]);
        assert!(graph.contains("x"));
        assert!(graph.contains("y"));
        assert!(graph.contains("T"));
        assert!(!graph.contains("z"));
    }

    #[test]
    fn test_display_name() {
        let graph = GraphModel::new("OTITIS");
        assert_eq!(graph.display_name("dolor_oido"), "Dolor Oido");
        assert_eq!(graph.display_name("fiebre-ALTA"), "Fiebre Alta");
        assert_eq!(graph.display_name("OTITIS"), "OTITIS");
    }

    #[test]
    fn test_resolve_ambiguous_label() {
        let graph = GraphModel::new("T")
            .with_edges("dolor_oido", ["T"])
            .with_edges("dolor-oido", ["T"]);
        assert_eq!(graph.resolve("Dolor Oido"), None);
        assert_eq!(graph.resolve("dolor_oido"), Some("dolor_oido"));
        assert_eq!(graph.resolve("dolor-oido"), Some("dolor-oido"));
    }

    #[test]
    fn test_resolve_by_id_and_label() {
        let graph = GraphModel::new("OTITIS").with_edges("dolor_oido", ["OTITIS"]);
        assert_eq!(graph.resolve("dolor_oido"), Some("dolor_oido"));
        assert_eq!(graph.resolve("Dolor Oido"), Some("dolor_oido"));
        assert_eq!(graph.resolve("  dolor-oido "), Some("dolor_oido"));
        assert_eq!(graph.resolve("otitis"), Some("OTITIS"));
        assert_eq!(graph.resolve("fiebre"), None);
        assert_eq!(graph.resolve(""), None);
    }

    #[test]
    fn test_weights_and_average() {
        let graph = diamond();
        assert_eq!(graph.weight("A"), 0.2);
        assert_eq!(graph.weight("missing"), 0.0);
        let avg = graph.average_weight(&["A".to_string(), "D".to_string()]);
        assert!((avg - 0.4).abs() < 1e-9);
        assert_eq!(graph.average_weight(&[]), 0.0);
    }

    #[test]
    fn test_average_weight_is_capped() {
        let graph = GraphModel::new("T").with_weight("a", 3.0);
        assert_eq!(graph.average_weight(&["a".to_string()]), 1.0);
    }

    #[test]
    fn test_validate_clean_graph() {
        assert!(diamond().validate().is_empty());
    }

    #[test]
    fn test_validate_reports_issues() {
        let graph = GraphModel::new("T")
            .with_edges("x", ["y"])
            .with_weight("x", 1.5);
        let issues = graph.validate();
        assert!(issues.contains(&GraphIssue::DanglingSuccessor {
            from: "x".into(),
            to: "y".into()
        }));
        assert!(issues.contains(&GraphIssue::MissingTarget { target: "T".into() }));
        assert!(issues.contains(&GraphIssue::WeightOutOfRange {
            node: "x".into(),
            weight: 1.5
        }));
    }

    #[test]
    fn test_validate_unreachable_declared_target() {
        let graph = GraphModel::new("T")
            .with_edges("x", Vec::<String>::new())
            .with_edges("T", Vec::<String>::new());
        assert_eq!(
            graph.validate(),
            vec![GraphIssue::UnreachableTarget { target: "T".into() }]
        );
    }
}
