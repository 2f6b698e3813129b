//! Utilities for records output format

/// Escape double quotes in a string for records format.
/// Replaces `"` with `\"` to allow safe embedding in quoted fields.
pub fn escape_quotes(s: &str) -> String {
    s.replace('\"', r#"\""#)
}

/// Join node ids into a single records field; `-` stands for an empty list.
pub fn join_nodes(nodes: &[String]) -> String {
    if nodes.is_empty() {
        "-".to_string()
    } else {
        nodes.join(",")
    }
}
