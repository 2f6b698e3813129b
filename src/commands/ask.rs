//! Ask command: interactive diagnosis, one yes/no question per candidate

use std::io::{self, BufRead, Write};

use symptrace_core::bail_usage;
use symptrace_core::error::Result;
use symptrace_core::graph::{
    GraphModel, InteractiveSession, Prompt, SessionState, SessionSummary, SessionView,
};
use symptrace_core::records::join_nodes;

use super::dispatch::CommandContext;
use super::output::{print_json, print_records_header};
use super::render::{frontier_line, path_line};
use crate::cli::{AskArgs, OutputFormat};
use crate::output_by_format_result;

/// Interpret one line of input: `Some(true)` for yes, `Some(false)` for no
pub fn parse_answer(input: &str) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "y" | "yes" | "s" | "si" | "sí" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

pub fn execute(ctx: &CommandContext, args: &AskArgs) -> Result<()> {
    let graph = ctx.graph()?;
    let start = ctx.resolve_start(&graph, &args.start)?;
    let algorithm = ctx.algorithm(args.algorithm);
    let mut session = InteractiveSession::new(&graph, algorithm, start);

    let input = io::stdin().lock();
    // Keep stdout clean for machine-readable formats
    if ctx.cli.format == OutputFormat::Human {
        dialogue(&graph, &mut session, input, &mut io::stdout().lock(), ctx.cli.quiet)?;
    } else {
        dialogue(&graph, &mut session, input, &mut io::stderr().lock(), ctx.cli.quiet)?;
    }

    let summary = session.summary();
    output_by_format_result!(ctx.cli.format,
        json => print_json(&summary),
        human => { print_summary_human(&graph, &summary); },
        records => {
            print_records_header(
                "ask",
                &[
                    ("algorithm", summary.algorithm.to_string()),
                    ("start", summary.start.clone()),
                    ("state", state_field(summary.state).to_string()),
                    ("questions", summary.questions_asked.to_string()),
                    ("visited", summary.visited_count.to_string()),
                ],
            );
            println!(
                "P {} probability={}",
                join_nodes(&summary.final_path),
                summary.probability
            );
        }
    )
}

fn state_field(state: SessionState) -> &'static str {
    match state {
        SessionState::AwaitingAnswer => "awaiting_answer",
        SessionState::Found => "found",
        SessionState::NotFound => "not_found",
    }
}

/// Ask questions until the session concludes. Unrecognized answers are asked
/// again; end of input is a usage error.
fn dialogue<R: BufRead, W: Write>(
    graph: &GraphModel,
    session: &mut InteractiveSession<'_>,
    mut input: R,
    out: &mut W,
    quiet: bool,
) -> Result<()> {
    let mut line = String::new();

    while !session.is_terminal() {
        let entry = match session.peek_next()? {
            Prompt::Diagnosed(_) => break,
            Prompt::Ask(entry) => entry,
        };

        if !quiet {
            for line in view_lines(graph, &session.view()) {
                writeln!(out, "{}", line)?;
            }
        }
        write!(out, "Do you have {}? [y/n] ", graph.display_name(&entry.node))?;
        out.flush()?;

        let present = loop {
            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(out)?;
                bail_usage!("input ended before the diagnosis concluded");
            }
            match parse_answer(&line) {
                Some(answer) => break answer,
                None => {
                    write!(out, "Please answer y or n: ")?;
                    out.flush()?;
                }
            }
        };

        let state = session.answer(present)?;
        tracing::debug!(node = %entry.node, present, %state, "answer applied");
    }

    Ok(())
}

/// Session snapshot shown before each question: frontier, confirmed path, visited set
fn view_lines(graph: &GraphModel, view: &SessionView) -> [String; 3] {
    let visited: Vec<String> = view.visited.iter().map(|n| graph.display_name(n)).collect();
    [
        format!(
            "[{}] {}",
            view.algorithm.label(),
            frontier_line(graph, view.algorithm, &view.frontier)
        ),
        format!(
            "Confirmed path: {}",
            path_line(graph, &view.accumulated_path)
        ),
        format!("Visited ({}): {}", visited.len(), visited.join(", ")),
    ]
}

fn print_summary_human(graph: &GraphModel, summary: &SessionSummary) {
    println!();
    match summary.state {
        SessionState::Found => {
            println!(
                "Diagnosis: {} (probability {:.0}%)",
                graph.display_name(graph.target()),
                summary.probability * 100.0
            );
            println!("Path: {}", path_line(graph, &summary.final_path));
        }
        _ => {
            println!("No diagnosis: {} not reached", graph.target());
            println!(
                "Last confirmed path: {}",
                path_line(graph, &summary.confirmed_path)
            );
        }
    }
    println!(
        "Questions: {}  Visited: {}",
        summary.questions_asked, summary.visited_count
    );
}
