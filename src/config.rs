//! Command-line configuration for the `countdown` binary.

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// CLI arguments.
#[derive(Debug, Clone, Parser)]
#[command(name = "countdown")]
#[command(about = "A countdown timer for the terminal")]
#[command(version)]
pub struct Config {
    /// Duration in seconds to set at startup
    #[arg(short, long)]
    pub duration: Option<i64>,

    /// Tick interval in milliseconds
    #[arg(long, default_value = "1000")]
    pub interval_ms: u64,

    /// Write logs to this file (the terminal is used by the UI)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Tick interval as a `Duration`. Zero is raised to one millisecond.
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms.max(1))
    }

    /// Log level for the crate based on the verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}
