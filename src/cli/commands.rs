//! Command implementations for the Purser CLI.

use std::fs;
use std::sync::Arc;

use crate::agent::QueryAgent;
use crate::analysis::Analyzer;
use crate::cli::args::{AskArgs, Command, PurserArgs};
use crate::cli::output::{output_info, output_response};
use crate::dataset::Dataset;
use crate::error::Result;

/// Execute a CLI command.
pub fn execute_command(args: PurserArgs) -> Result<()> {
    match &args.command {
        Command::Ask(ask_args) => ask_query(ask_args.clone(), &args),
        Command::Info => show_info(&args),
    }
}

/// Load the dataset from `--data`/`PURSER_DATA` or the default location.
/// A load failure here is fatal: no queries are served without data.
fn load_dataset(cli_args: &PurserArgs) -> Result<Dataset> {
    match &cli_args.data {
        Some(path) => Dataset::load_from(path),
        None => Dataset::load(),
    }
}

/// Ask one question and print the structured response.
fn ask_query(args: AskArgs, cli_args: &PurserArgs) -> Result<()> {
    let dataset = Arc::new(load_dataset(cli_args)?);
    if cli_args.verbosity() > 1 {
        println!("dataset loaded: {} passengers", dataset.len());
    }

    let agent = QueryAgent::new(Analyzer::new(dataset));
    let response = agent.process_query(&args.query);

    if let (Some(path), Some(png)) = (&args.chart_out, &response.visualization) {
        fs::write(path, png)?;
    }

    output_response(&response, &args.chart_out, cli_args)
}

/// Show dataset metadata.
fn show_info(cli_args: &PurserArgs) -> Result<()> {
    let dataset = load_dataset(cli_args)?;
    output_info(&dataset.info(), cli_args)
}
