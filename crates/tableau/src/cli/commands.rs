//! Command-line arguments.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tableau::{FailurePolicy, LogFormat};

/// Generate candidate images from character and background references.
#[derive(Debug, Parser)]
#[command(name = "tableau", version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (TOML)
    #[arg(long, global = true, env = "TABLEAU_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log line format (human or json)
    #[arg(long, global = true, default_value = "human")]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate candidates and save them to disk
    Generate(GenerateArgs),
}

/// Arguments for `tableau generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Character reference image; repeat for several characters
    #[arg(long = "character", short = 'c', required = true)]
    pub characters: Vec<PathBuf>,

    /// Background reference image
    #[arg(long, short = 'b')]
    pub background: Option<PathBuf>,

    /// Keep the background fixed in the generated images
    #[arg(long, requires = "background")]
    pub use_background: bool,

    /// What the characters should be doing
    #[arg(long, short = 'p')]
    pub prompt: String,

    /// Number of candidates (overrides config)
    #[arg(long, short = 'n')]
    pub count: Option<usize>,

    /// Failure policy: all-or-nothing or partial-success (overrides config)
    #[arg(long)]
    pub policy: Option<FailurePolicy>,

    /// Model identifier (overrides config)
    #[arg(long)]
    pub model: Option<String>,

    /// Directory to save candidates into (overrides config)
    #[arg(long, short = 'o')]
    pub output_dir: Option<PathBuf>,

    /// Abort the whole generation after this many seconds (overrides config)
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Echo the first reference image instead of calling the provider
    #[arg(long)]
    pub dry_run: bool,

    /// Print a JSON report instead of human-readable lines
    #[arg(long)]
    pub json: bool,
}
