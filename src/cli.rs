use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "logcheck")]
#[command(author, version, about = "Concurrent log file checker")]
#[command(long_about = "Checks a batch of log files in parallel: each file is tested for \
    existence, readability and known parsing-error markers.\n\n\
    Exit codes:\n  \
    0 - Analysis ran (individual file failures are reported, not fatal)\n  \
    2 - Configuration or usage error")]
pub struct Cli {
    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze the log files listed in a configuration file
    Analyze(AnalyzeArgs),
}

#[derive(Parser, Debug)]
#[command(after_help = "Example: logcheck analyze -c config.json -o report.json")]
pub struct AnalyzeArgs {
    /// Path to the check list (JSON array, or TOML with [[logs]] tables)
    #[arg(short, long)]
    pub config: PathBuf,

    /// Write the JSON report to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Maximum number of files analyzed at once (default: one worker per file)
    #[arg(short, long)]
    pub jobs: Option<usize>,

    /// Skip the simulated processing delay
    #[arg(long)]
    pub no_delay: bool,

    /// Order results by id and path instead of completion order
    #[arg(long)]
    pub sort: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
