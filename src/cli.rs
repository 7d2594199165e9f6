use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human readable summary
    Terminal,
    /// Pretty-printed JSON
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "rankcalc")]
#[command(about = "Activity rank and letter grade calculator", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute a rank and letter grade
    Rank {
        #[command(flatten)]
        stats: StatsArgs,

        /// Read the statistics from a JSON document instead of flags ("-" for stdin)
        #[arg(short, long, conflicts_with_all = ["commits", "pull_requests", "issues", "reviews", "repositories", "stars", "followers", "all_commits"])]
        input: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Show how each metric contributed to the rank
        #[arg(long)]
        explain: bool,

        /// Configuration file (defaults to searching for .rankcalc.toml)
        #[arg(short, long, env = "RANKCALC_CONFIG")]
        config: Option<PathBuf>,

        /// Disable colored output
        #[arg(long)]
        plain: bool,
    },

    /// Write a default .rankcalc.toml to the current directory
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}

/// Activity statistics given on the command line.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct StatsArgs {
    /// Number of commits
    #[arg(long, default_value_t = 0.0)]
    pub commits: f64,

    /// Number of pull requests
    #[arg(long = "pull-requests", visible_alias = "prs", default_value_t = 0.0)]
    pub pull_requests: f64,

    /// Number of issues
    #[arg(long, default_value_t = 0.0)]
    pub issues: f64,

    /// Number of reviews
    #[arg(long, default_value_t = 0.0)]
    pub reviews: f64,

    /// Number of repositories (accepted, not scored)
    #[arg(long, visible_alias = "repos", default_value_t = 0.0)]
    pub repositories: f64,

    /// Number of stars
    #[arg(long, default_value_t = 0.0)]
    pub stars: f64,

    /// Number of followers
    #[arg(long, default_value_t = 0.0)]
    pub followers: f64,

    /// Commits were counted over the full history
    #[arg(long = "all-commits")]
    pub all_commits: bool,
}
