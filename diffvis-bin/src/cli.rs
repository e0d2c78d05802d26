use clap::{Args, Parser};
use diffvis_algos::cli::AlignArgs;
use diffvis_render::cli::RenderArgs;
use serde::{Deserialize, Serialize};

/// Visualize the difference between two sequences by aligning and coloring them.
#[derive(Parser, Debug, Serialize, Deserialize)]
#[clap(author, version, about)]
pub struct Cli {
    /// The source sequence.
    pub source: String,

    /// The target sequence.
    pub target: String,

    #[clap(flatten)]
    pub align: AlignArgs,

    #[clap(flatten)]
    pub render: RenderArgs,

    #[clap(flatten)]
    pub report: ReportArgs,
}

#[derive(Args, Debug, Serialize, Deserialize)]
#[clap(next_help_heading = "Report")]
pub struct ReportArgs {
    /// Print the score scaled into [0, 1].
    #[clap(short, long)]
    pub normalize: bool,

    /// Also print the scores, cost table, edit history and template.
    #[clap(short, long)]
    pub all: bool,

    /// Print a JSON report instead of the visualization.
    #[clap(long, conflicts_with = "all")]
    pub json: bool,

    /// Stands in for every run of unmatched elements in the template.
    #[clap(long, default_value = "<blank>", hide_short_help = true)]
    pub placeholder: String,
}
