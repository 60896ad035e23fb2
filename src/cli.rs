use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "repscore",
    version,
    about = "Credential reputation scoring for governance voting weight"
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
    /// Score a credential batch and print the report
    Score(ScoreCommand),
    /// Summarize a batch without scoring it
    Inspect(InspectCommand),
    /// Score a batch and persist the result to the blob store
    Store(StoreCommand),
}

#[derive(Args)]
pub struct ScoreCommand {
    /// Batch file or directory of batch files
    pub input: PathBuf,

    #[arg(short, long, value_enum, default_value = "json")]
    pub format: ReportFormat,

    /// Config file overriding repscore.toml discovery
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Args)]
pub struct InspectCommand {
    pub input: PathBuf,

    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Args)]
pub struct StoreCommand {
    pub input: PathBuf,

    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}
