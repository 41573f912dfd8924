//! CLI argument definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use linkrank_core::{DEFAULT_DAMPING, DEFAULT_SAMPLES};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "linkrank")]
#[command(
    author,
    version,
    about = "PageRank estimation for local HTML corpora"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "cli")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run both estimators over a corpus directory
    Rank(RankArgs),

    /// Monte-Carlo estimation only
    Sample(SampleArgs),

    /// Fixed-point iteration only
    Iterate(IterateArgs),
}

#[derive(Args)]
pub struct RankArgs {
    /// Directory of HTML pages
    pub corpus: PathBuf,

    /// Probability of following a link rather than teleporting
    #[arg(short, long, default_value_t = DEFAULT_DAMPING)]
    pub damping: f64,

    /// Number of random-surfer samples
    #[arg(short = 'n', long, default_value_t = DEFAULT_SAMPLES)]
    pub samples: usize,

    /// Seed for the sampling estimator (reproducible runs)
    #[arg(long, env = "LINKRANK_SEED")]
    pub seed: Option<u64>,
}

#[derive(Args)]
pub struct SampleArgs {
    /// Directory of HTML pages
    pub corpus: PathBuf,

    /// Probability of following a link rather than teleporting
    #[arg(short, long, default_value_t = DEFAULT_DAMPING)]
    pub damping: f64,

    /// Number of random-surfer samples
    #[arg(short = 'n', long, default_value_t = DEFAULT_SAMPLES)]
    pub samples: usize,

    /// Seed for the sampling estimator (reproducible runs)
    #[arg(long, env = "LINKRANK_SEED")]
    pub seed: Option<u64>,
}

#[derive(Args)]
pub struct IterateArgs {
    /// Directory of HTML pages
    pub corpus: PathBuf,

    /// Probability of following a link rather than teleporting
    #[arg(short, long, default_value_t = DEFAULT_DAMPING)]
    pub damping: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report
    Cli,
    /// Pretty-printed JSON
    Json,
}
