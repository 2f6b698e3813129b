//! Symptoms command: the start nodes a search can begin from

use serde::Serialize;
use symptrace_core::error::Result;
use symptrace_core::records::escape_quotes;

use super::dispatch::CommandContext;
use super::output::{print_json, print_records_header};
use crate::output_by_format_result;

#[derive(Debug, Serialize)]
struct SymptomEntry {
    id: String,
    name: String,
    weight: f64,
}

pub fn execute(ctx: &CommandContext) -> Result<()> {
    let graph = ctx.graph()?;
    let entries: Vec<SymptomEntry> = graph
        .all_symptom_nodes()
        .into_iter()
        .map(|id| SymptomEntry {
            name: graph.display_name(&id),
            weight: graph.weight(&id),
            id,
        })
        .collect();

    output_by_format_result!(ctx.cli.format,
        json => print_json(&entries),
        human => {
            if entries.is_empty() && !ctx.cli.quiet {
                println!("No symptoms in graph");
            }
            for entry in &entries {
                println!("{:<20} {:<20} {:.2}", entry.id, entry.name, entry.weight);
            }
        },
        records => {
            print_records_header(
                "symptoms",
                &[
                    ("target", graph.target().to_string()),
                    ("count", entries.len().to_string()),
                ],
            );
            for entry in &entries {
                println!(
                    "N {} \"{}\" weight={}",
                    entry.id,
                    escape_quotes(&entry.name),
                    entry.weight
                );
            }
        }
    )
}
