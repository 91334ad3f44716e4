//! Clap argument definitions for the `feedrank` CLI.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use feedrank_engine::RankingMode;

/// Parse a ranking mode from a string.
fn parse_mode(s: &str) -> Result<RankingMode, String> {
    s.parse()
}

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "feedrank")]
#[command(about = "Feedrank - content ranking and topic bubbles for social feeds")]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Shared output mode flags.
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `feedrank rank`.
#[derive(Args, Debug, Clone)]
pub struct RankCommand {
    /// Input JSON file with a profile and candidates
    pub input: PathBuf,

    /// Ranking mode: balanced, interests, content, serendipity [default: feed.default_mode]
    #[arg(short = 'm', long, value_parser = parse_mode)]
    pub mode: Option<RankingMode>,

    /// Show the per-candidate signal breakdown
    #[arg(long)]
    pub explain: bool,

    /// Seed for serendipity mode, for reproducible shuffles
    #[arg(long)]
    pub seed: Option<u64>,

    #[command(flatten)]
    /// Output formatting flags.
    pub output: OutputArgs,
}

/// Arguments for `feedrank feed`.
#[derive(Args, Debug, Clone)]
pub struct FeedCommand {
    /// Input JSON file with a profile and candidates
    pub input: PathBuf,

    /// Feed view: a ranking mode or bubbles; unknown names use balanced [default: feed.default_mode]
    #[arg(short = 'm', long)]
    pub mode: Option<String>,

    /// Page number, starting at 1
    #[arg(short = 'p', long, default_value = "1")]
    pub page: usize,

    /// Seed for serendipity mode, for reproducible shuffles
    #[arg(long)]
    pub seed: Option<u64>,

    #[command(flatten)]
    /// Output formatting flags.
    pub output: OutputArgs,
}

/// Arguments for `feedrank cluster`.
#[derive(Args, Debug, Clone)]
pub struct ClusterCommand {
    /// Input JSON file; its candidates are clustered in the given order
    pub input: PathBuf,

    #[command(flatten)]
    /// Output formatting flags.
    pub output: OutputArgs,
}

/// Arguments for `feedrank init`.
#[derive(Args, Debug, Clone)]
pub struct InitCommand {
    /// Create global ~/.feedrank.toml instead
    #[arg(long)]
    pub global: bool,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}

/// Supported `feedrank` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Rank candidates for the profile
    #[command(after_help = "\
INPUT FORMAT:
  {
    \"profile\": { \"interests\": [\"rust\"], \"history\": [DOCUMENT, ...] },
    \"candidates\": [DOCUMENT, ...]
  }

  DOCUMENT = { \"id\": \"p1\", \"body\": \"...\", \"created_at\": \"2024-06-01T12:00:00Z\", \"author\": \"alice\" }

EXAMPLES:
  feedrank rank input.json
  feedrank rank input.json --mode interests --explain
  feedrank rank input.json --mode serendipity --seed 7 --json")]
    Rank(RankCommand),

    /// Assemble one page of the feed
    Feed(FeedCommand),

    /// Group candidates into topic bubbles
    Cluster(ClusterCommand),

    /// Initialize feedrank configuration in current directory
    Init(InitCommand),

    /// Show effective configuration settings
    Config,
}
