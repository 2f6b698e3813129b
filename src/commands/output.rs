//! Shared output helpers for commands
//!
//! JSON documents, Records header and data lines.

use serde::Serialize;
use symptrace_core::error::Result;
use symptrace_core::records::escape_quotes;

/// Print any serializable value as pretty JSON
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Build a Records format header line
///
/// # Examples
/// ```ignore
/// records_header("run", &[("algorithm", "bfs".into()), ("found", "true".into())]);
/// ```
pub fn records_header(mode: &str, extra_fields: &[(&str, String)]) -> String {
    let mut parts = vec![
        "H symptrace=1 records=1".to_string(),
        format!("mode={}", mode),
    ];

    for (key, value) in extra_fields {
        parts.push(format!("{}={}", key, value));
    }

    parts.join(" ")
}

pub fn print_records_header(mode: &str, extra_fields: &[(&str, String)]) {
    println!("{}", records_header(mode, extra_fields));
}

/// Print a Records format data line with a quoted value
pub fn print_records_data(key: &str, value: &str) {
    println!("D {} \"{}\"", key, escape_quotes(value));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_header() {
        assert_eq!(
            records_header("run", &[("found", "true".to_string())]),
            "H symptrace=1 records=1 mode=run found=true"
        );
        assert_eq!(records_header("check", &[]), "H symptrace=1 records=1 mode=check");
    }
}
