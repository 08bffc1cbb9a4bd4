use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "referee",
    version,
    about = "Score and compare technologies across weighted criteria"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compare 1-5 technologies by id or name
    Compare(CompareCommand),
    /// List catalog technologies grouped by category
    List(ListCommand),
    /// Validate the catalog
    Lint(LintCommand),
}

#[derive(Args)]
pub struct CompareCommand {
    #[arg(required = true)]
    pub technologies: Vec<String>,
    /// Directory containing referee.toml
    #[arg(long, default_value = ".")]
    pub root: PathBuf,
    /// Priority tag, e.g. performance or learning-curve (repeatable)
    #[arg(long = "tag")]
    pub tags: Vec<String>,
    #[arg(long)]
    pub project_type: Option<String>,
    #[arg(long)]
    pub team_size: Option<String>,
    #[arg(long)]
    pub timeline: Option<String>,
    /// Defaults to [defaults].format, then md
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
    /// Attach a recommendation summarizing the scores
    #[arg(long)]
    pub summary: bool,
}

#[derive(Args)]
pub struct ListCommand {
    #[arg(long, default_value = ".")]
    pub root: PathBuf,
}

#[derive(Args)]
pub struct LintCommand {
    #[arg(long, default_value = ".")]
    pub root: PathBuf,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}
