//! Command line argument parsing for the Purser CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Purser - natural-language analytics for the Titanic passenger manifest
#[derive(Parser, Debug, Clone)]
#[command(name = "purser")]
#[command(about = "Ask natural-language questions about the Titanic passenger dataset")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct PurserArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Dataset CSV path (defaults to the bundled data/titanic.csv)
    #[arg(long, value_name = "FILE", env = "PURSER_DATA")]
    pub data: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl PurserArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Ask a question about the dataset
    Ask(AskArgs),

    /// Show dataset metadata (shape, columns, missing values)
    Info,
}

/// Arguments for asking a question
#[derive(Parser, Debug, Clone)]
pub struct AskArgs {
    /// The question, e.g. "What percentage of passengers were male?"
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Write the rendered chart (if any) to this PNG file
    #[arg(short = 'o', long = "chart-out", value_name = "FILE")]
    pub chart_out: Option<PathBuf>,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text
    Human,
    /// JSON (the transport wire format: answer + base64 visualization)
    Json,
}
