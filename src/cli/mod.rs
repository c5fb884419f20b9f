//! CLI argument parsing for campgen.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Hyperspace Campaign Generator: marketing campaign plans and messages from
/// a hosted language model.
///
/// Campaign inputs given to `plan` or `messages` are remembered in
/// `.campgen/session.json`, so later commands only need the flags that
/// change. `save` writes everything generated so far to a markdown report.
#[derive(Parser, Debug)]
#[command(name = "campgen")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log output (-v info, -vv debug). Logs go to stderr.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Available commands for campgen.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a campaign plan.
    ///
    /// Sends the campaign inputs to the model, prints the markdown plan,
    /// and stores it for `save`.
    Plan(PlanArgs),

    /// Generate campaign messages.
    ///
    /// Produces a slogan, social posts, an email, and SMS texts in the given
    /// tone for the given channels.
    Messages(MessagesArgs),

    /// Save the campaign report.
    ///
    /// Writes inputs and every generated artifact to
    /// `campaign_plan_<YYYYMMDD_HHMMSS>.md`.
    Save(SaveArgs),

    /// Print the prompt that would be sent, without calling the model.
    Prompt(PromptArgs),

    /// Show the stored campaign inputs and generated artifacts.
    Show,

    /// List saved campaign reports, newest first.
    Reports(ReportsArgs),

    /// Forget the stored campaign inputs and artifacts.
    Reset,

    /// Write a `campgen.yaml` template in the current directory.
    Init(InitArgs),
}

/// Campaign inputs. Omitted flags fall back to the stored session.
#[derive(Args, Debug, Clone, Default)]
pub struct CampaignArgs {
    /// Business name.
    #[arg(long)]
    pub business_name: Option<String>,

    /// Business type (e.g., "Bakery").
    #[arg(long)]
    pub business_type: Option<String>,

    /// Business location (e.g., "Austin").
    #[arg(long)]
    pub business_location: Option<String>,

    /// Campaign goal.
    #[arg(long)]
    pub goal: Option<String>,

    /// Target audience description.
    #[arg(long)]
    pub audience: Option<String>,

    /// Campaign duration in days [default: 30].
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub duration: Option<u32>,

    /// Campaign budget in dollars [default: 1000].
    #[arg(long)]
    pub budget: Option<f64>,
}

/// Tone and channel inputs for message generation.
#[derive(Args, Debug, Clone, Default)]
pub struct MessageArgs {
    /// Tone of voice [default: Professional].
    #[arg(long)]
    pub tone: Option<String>,

    /// Marketing channels, comma separated, in priority order.
    #[arg(long, value_delimiter = ',')]
    pub channels: Vec<String>,

    /// Send an empty channel list, replacing any stored channels.
    #[arg(long, conflicts_with = "channels")]
    pub no_channels: bool,
}

/// Arguments for the `plan` command.
#[derive(Parser, Debug)]
pub struct PlanArgs {
    #[command(flatten)]
    pub campaign: CampaignArgs,
}

/// Arguments for the `messages` command.
#[derive(Parser, Debug)]
pub struct MessagesArgs {
    #[command(flatten)]
    pub campaign: CampaignArgs,

    #[command(flatten)]
    pub messages: MessageArgs,
}

/// Arguments for the `save` command.
#[derive(Parser, Debug)]
pub struct SaveArgs {
    /// Directory to write the report to (overrides `output_dir` in campgen.yaml).
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,
}

/// Which prompt to print.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    Plan,
    Messages,
}

/// Arguments for the `prompt` command.
#[derive(Parser, Debug)]
pub struct PromptArgs {
    /// Prompt to render.
    #[arg(value_enum)]
    pub kind: PromptKind,

    #[command(flatten)]
    pub campaign: CampaignArgs,

    #[command(flatten)]
    pub messages: MessageArgs,
}

/// Arguments for the `reports` command.
#[derive(Parser, Debug)]
pub struct ReportsArgs {
    /// Directory to look in (overrides `output_dir` in campgen.yaml).
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,
}

/// Arguments for the `init` command.
#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Overwrite an existing campgen.yaml.
    #[arg(long)]
    pub force: bool,
}
