mod cli;

use clap::Parser;
use cli::Cli;
use diffvis_algos::{format_cost_table, format_edit_history, Alignment};
use diffvis_types::{Cost, EditHistory, OpCounts};
use log::info;
use serde::Serialize;
use std::process::ExitCode;

#[derive(thiserror::Error, Debug)]
enum RunError {
    #[error(transparent)]
    Align(#[from] diffvis_types::Error),
    #[error("failed to write the JSON report: {0}")]
    Json(#[from] serde_json::Error),
}

/// Everything known about one alignment, for `--json`.
#[derive(Serialize)]
struct Report<'a> {
    model: &'static str,
    source: &'a [String],
    target: &'a [String],
    score: f64,
    normalized: f64,
    edits: usize,
    counts: OpCounts,
    history: &'a EditHistory,
    cigar: String,
    template: Vec<String>,
    table: Vec<Vec<Cost>>,
}

/// Align the two inputs and build the text to print.
fn run(cli: &Cli) -> Result<String, RunError> {
    let model = cli.align.model()?;
    let source = cli.align.split(&cli.source);
    let target = cli.align.split(&cli.target);
    let alignment = Alignment::new(model, source, target)?;
    info!(
        "{model}: score {} with {} edits",
        alignment.distance(false),
        alignment.edit_count()
    );

    let template = alignment.template(cli.report.placeholder.clone())?;
    if cli.report.json {
        let report = Report {
            model: model.name(),
            source: alignment.source(),
            target: alignment.target(),
            score: alignment.distance(false),
            normalized: alignment.distance(true),
            edits: alignment.edit_count(),
            counts: alignment.counts(),
            history: alignment.history(),
            cigar: alignment.history().cigar(),
            template,
            table: alignment.table().to_rows(),
        };
        return Ok(serde_json::to_string_pretty(&report)?);
    }

    let label = if model.is_similarity() {
        "Similarity"
    } else {
        "Distance"
    };
    let mut out = vec![cli.render.render(&alignment)?];
    if cli.report.all {
        let sep = if cli.align.tokens { " " } else { "" };
        out.extend([
            String::new(),
            format!("{label}: {}", alignment.distance(false)),
            format!("Normalized {label}: {:.3}", alignment.distance(true)),
            format!("Edits: {}", alignment.edit_count()),
            String::new(),
            format_cost_table(alignment.source(), alignment.target(), alignment.table())?,
            String::new(),
            format_edit_history(alignment.history()),
            String::new(),
            format!("Template: {}", template.join(sep)),
        ]);
    } else if cli.report.normalize {
        out.push(format!("Normalized {label}: {:.3}", alignment.distance(true)));
    }
    Ok(out.join("\n"))
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    match run(&cli) {
        Ok(out) => {
            println!("{out}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
