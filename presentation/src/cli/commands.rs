//! CLI command definitions

use clap::{Parser, ValueEnum};
use sensemaker_domain::{OutputFormat, SummarizationType};
use std::path::PathBuf;

/// Scoring policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PolicyArg {
    /// Agreement must hold across every opinion group
    GroupInformed,
    /// Pooled majority vote, groups ignored
    Majority,
}

impl From<PolicyArg> for SummarizationType {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::GroupInformed => SummarizationType::GroupInformedConsensus,
            PolicyArg::Majority => SummarizationType::AggregateVote,
        }
    }
}

/// Output format for analysis reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputArg {
    /// Human-readable report
    Text,
    /// JSON output
    Json,
}

impl From<OutputArg> for OutputFormat {
    fn from(arg: OutputArg) -> Self {
        match arg {
            OutputArg::Text => OutputFormat::Text,
            OutputArg::Json => OutputFormat::Json,
        }
    }
}

/// CLI arguments for sensemaker
#[derive(Parser, Debug)]
#[command(name = "sensemaker")]
#[command(author, version, about = "Find common ground and differences of opinion in voted comments")]
#[command(long_about = r#"
Sensemaker scores the comments of a deliberation by their votes and selects
the ones that best represent common ground, differences of opinion and
uncertainty, overall and per topic.

Two policies are available:
  group-informed  Agreement must hold in every opinion group (needs per-group votes)
  majority        Pooled agree/disagree/pass rates, groups ignored

Configuration files are loaded from (in priority order):
1. --config <path>            Explicit config file
2. ./sensemaker.toml          Project-level config
3. ~/.config/sensemaker/config.toml   Global config

Example:
  sensemaker comments.json
  sensemaker --policy majority -k 5 comments.json
  sensemaker -o json --no-topics comments.json
"#)]
pub struct Cli {
    /// JSON file with the comments to analyze
    #[arg(value_name = "FILE", required_unless_present = "show_config")]
    pub input: Option<PathBuf>,

    /// Scoring policy
    #[arg(long, value_enum)]
    pub policy: Option<PolicyArg>,

    /// Comments per category (defaults to the policy's max_sample_size)
    #[arg(short = 'k', long, value_name = "N")]
    pub sample_size: Option<usize>,

    /// Ignore comments with fewer votes (passes included)
    #[arg(long, value_name = "N")]
    pub min_vote_count: Option<u64>,

    /// Agreement needed to count as common ground
    #[arg(long, value_name = "PROB")]
    pub min_common_ground_prob: Option<f64>,

    /// Skip the per-topic breakdown
    #[arg(long)]
    pub no_topics: bool,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputArg>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}
