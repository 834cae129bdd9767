//! CLI command definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use council_domain::CommitteeType;
use std::path::PathBuf;

/// Output format for decision records
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON output
    Json,
}

/// CLI arguments for sortition-council
#[derive(Parser, Debug)]
#[command(name = "sortition-council")]
#[command(author, version, about = "Randomized committee & decision engine")]
#[command(long_about = r#"
Sortition Council delegates decisions to small committees drawn at random
from a registry of validators.

A committee decides on one proposal: a charity event, a milestone
completion, or a validator application. Each member votes once with
feedback; when every member has voted the decision is sealed by simple
majority (ties reject) and handed to the store that owns the proposal.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./council.toml      Project-level config
3. ~/.config/sortition-council/config.toml   Global config
4. COUNCIL_<SECTION>__<KEY> environment variables

Example:
  sortition-council simulate --type milestone --type-id 7 \
      --vote approve:ok --vote approve:fine --vote reject:no
  sortition-council -o json simulate --type validator --validators 9 --size 5
  sortition-council show-config
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text", global = true)]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Also write logs to a daily rolling file in this directory
    #[arg(long, value_name = "DIR", global = true)]
    pub log_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run an end-to-end committee round against in-memory stores
    Simulate(SimulateArgs),
    /// Show configuration sources and the effective configuration
    ShowConfig,
}

#[derive(Args, Debug, Clone)]
pub struct SimulateArgs {
    /// What the committee decides on (event, milestone, validator)
    #[arg(long = "type", value_name = "TYPE", default_value = "event")]
    pub committee_type: CommitteeType,

    /// Proposal id (for milestones, the owning event id)
    #[arg(long, value_name = "ID", default_value_t = 1)]
    pub type_id: u64,

    /// Committee size (defaults to the configured size)
    #[arg(long)]
    pub size: Option<usize>,

    /// Validators to synthesize when the configuration lists none
    #[arg(long, default_value_t = 5)]
    pub validators: usize,

    /// Sortition seed (overrides the configured seed)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Votes in member order, as approve[:feedback] or reject[:feedback].
    /// Members without a listed vote approve with empty feedback.
    #[arg(long = "vote", value_name = "VOTE", value_parser = parse_vote)]
    pub votes: Vec<VoteSpec>,
}

/// One scripted vote
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteSpec {
    pub approve: bool,
    pub feedback: String,
}

/// Parse `approve[:feedback]` / `reject[:feedback]`
pub fn parse_vote(raw: &str) -> Result<VoteSpec, String> {
    let (choice, feedback) = raw.split_once(':').unwrap_or((raw, ""));
    let approve = match choice.trim().to_lowercase().as_str() {
        "approve" | "yes" | "y" | "true" => true,
        "reject" | "no" | "n" | "false" => false,
        other => {
            return Err(format!(
                "Invalid vote '{}'. Valid: approve[:feedback], reject[:feedback]",
                other
            ));
        }
    };
    Ok(VoteSpec {
        approve,
        feedback: feedback.to_string(),
    })
}
