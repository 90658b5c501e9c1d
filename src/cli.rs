use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Lectio balanced Bible reading-plan generator.
#[derive(Parser)]
#[command(
    name = "lectio",
    version,
    about = "Balanced daily Bible reading plans"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file. A missing file means defaults.
    #[arg(short, long, global = true, default_value = "lectio.toml")]
    pub config: PathBuf,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Generate a plan and print or write it as JSON.
    Generate(GenerateArgs),
    /// Show one day of a plan.
    Show(ShowArgs),
    /// Record or inspect reading progress.
    Progress(ProgressArgs),
    /// Export a plan with its progress.
    Export(ExportArgs),
    /// Manage saved plans.
    Plans(PlansArgs),
}

/// Which plan a command works on.
#[derive(clap::Args, Debug, Clone)]
pub struct PlanSource {
    /// Plan length in days; defaults to `[plan].days` from config.
    #[arg(short, long, conflicts_with = "plan")]
    pub days: Option<u32>,

    /// Key of a saved plan (see `lectio plans list`).
    #[arg(short, long)]
    pub plan: Option<String>,
}

/// Arguments for the `generate` subcommand.
#[derive(clap::Args)]
pub struct GenerateArgs {
    /// Plan length in days; defaults to `[plan].days` from config.
    #[arg(short, long)]
    pub days: Option<u32>,

    /// Write the plan JSON here instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also save the plan into the store.
    #[arg(long)]
    pub save: bool,
}

/// Arguments for the `show` subcommand.
#[derive(clap::Args)]
pub struct ShowArgs {
    #[command(flatten)]
    pub source: PlanSource,

    /// Day to show (1-indexed).
    #[arg(long)]
    pub day: u32,

    /// Translation id for passage references; overrides config.
    #[arg(short, long)]
    pub translation: Option<String>,
}

/// Arguments for the `progress` subcommand.
#[derive(clap::Args)]
pub struct ProgressArgs {
    #[command(subcommand)]
    pub action: ProgressAction,
}

/// Progress actions.
#[derive(Subcommand)]
pub enum ProgressAction {
    /// Mark one section of one day as read.
    Mark(MarkArgs),
    /// Print completion figures.
    Status(StatusArgs),
}

/// Arguments for `progress mark`.
#[derive(clap::Args)]
pub struct MarkArgs {
    #[command(flatten)]
    pub source: PlanSource,

    /// Day to mark (1-indexed).
    #[arg(long)]
    pub day: u32,

    /// Section label, e.g. "psalms" or "new-testament".
    #[arg(short, long)]
    pub section: String,

    /// Clear the mark instead of setting it.
    #[arg(long)]
    pub undo: bool,
}

/// Arguments for `progress status`.
#[derive(clap::Args)]
pub struct StatusArgs {
    #[command(flatten)]
    pub source: PlanSource,
}

/// Arguments for the `export` subcommand.
#[derive(clap::Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub source: PlanSource,

    /// Output format (csv, json, html); overrides config.
    #[arg(short, long)]
    pub format: Option<String>,

    /// Output file; defaults to the conventional name in `[export].dir`.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `plans` subcommand.
#[derive(clap::Args)]
pub struct PlansArgs {
    #[command(subcommand)]
    pub action: PlansAction,
}

/// Saved-plan actions.
#[derive(Subcommand)]
pub enum PlansAction {
    /// List saved plans, newest first.
    List,
    /// Delete one saved plan.
    Delete {
        /// Key of the plan to delete.
        key: String,
    },
}
