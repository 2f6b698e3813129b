//! Config command: show where the config lives and what is in effect

use serde_json::json;
use symptrace_core::config::GlobalConfig;
use symptrace_core::error::Result;

use super::dispatch::CommandContext;
use super::output::{print_json, print_records_data, print_records_header};
use crate::output_by_format_result;

pub fn execute(ctx: &CommandContext) -> Result<()> {
    let path = GlobalConfig::config_path()?;
    let graph_source = ctx
        .cli
        .graph
        .as_ref()
        .or(ctx.config.graph.as_ref())
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "builtin".to_string());

    output_by_format_result!(ctx.cli.format,
        json => print_json(&json!({
            "config_path": path.display().to_string(),
            "config_exists": path.exists(),
            "default_algorithm": ctx.config.default_algorithm,
            "show_steps": ctx.config.show_steps,
            "graph": graph_source,
        })),
        human => {
            let marker = if path.exists() { "" } else { " (not present, using defaults)" };
            println!("Config file: {}{}", path.display(), marker);
            println!("Default algorithm: {}", ctx.config.default_algorithm.label());
            println!("Show steps: {}", ctx.config.show_steps);
            println!("Graph: {}", graph_source);
        },
        records => {
            print_records_header(
                "config",
                &[
                    ("algorithm", ctx.config.default_algorithm.to_string()),
                    ("show_steps", ctx.config.show_steps.to_string()),
                ],
            );
            print_records_data("path", &path.display().to_string());
            print_records_data("graph", &graph_source);
        }
    )
}
