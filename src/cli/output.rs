//! Output formatting for CLI commands.

use std::path::PathBuf;

use serde::Serialize;

use crate::agent::Response;
use crate::cli::args::{OutputFormat, PurserArgs};
use crate::dataset::DatasetInfo;
use crate::error::Result;

/// Output a query response in the selected format.
pub fn output_response(
    response: &Response,
    chart_out: &Option<PathBuf>,
    args: &PurserArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => output_json(response, args),
        OutputFormat::Human => {
            if !response.answer.is_empty() {
                println!("{}", response.answer);
            }
            if response.has_visualization() {
                match chart_out {
                    Some(path) => println!("[chart written to {}]", path.display()),
                    None => println!("[a chart was rendered; pass --chart-out FILE to save it]"),
                }
            }
            Ok(())
        }
    }
}

/// Output dataset metadata in the selected format.
pub fn output_info(info: &DatasetInfo, args: &PurserArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => output_json(info, args),
        OutputFormat::Human => {
            println!("Dataset Information:");
            println!("════════════════════");
            println!("Rows: {}", info.shape[0]);
            println!("Columns: {}", info.shape[1]);
            println!();
            println!("{:<14} {:<8} {}", "Column", "Type", "Missing");
            println!("─────────────────────────────────");
            for column in &info.columns {
                let dtype = info.dtypes.get(column).map(String::as_str).unwrap_or("?");
                let missing = info.missing_values.get(column).copied().unwrap_or(0);
                println!("{column:<14} {dtype:<8} {missing}");
            }
            Ok(())
        }
    }
}

/// Output any serializable value as JSON, honoring `--pretty`.
fn output_json<T: Serialize>(value: &T, args: &PurserArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{json}");
    Ok(())
}
