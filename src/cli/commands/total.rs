//! Total command: feed a JSON file or stdin through the aggregator.

use std::fs;
use std::io::Read;
use std::path::Path;

use tracing::{debug, info};

use crate::io::ExitCode;
use crate::sales::{SaleRecord, SalesResult, calculate_sales_total};

/// Run the total command. Prints the sum on stdout; failures go to
/// stderr with the matching exit code.
pub fn run(file: Option<&Path>) -> ExitCode {
    match execute(file) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("Error: {e}");
            e.exit_code()
        }
    }
}

fn execute(file: Option<&Path>) -> SalesResult<()> {
    let raw = read_input(file)?;
    let records: Vec<SaleRecord> = serde_json::from_str(&raw)?;
    debug!("loaded {} sale records", records.len());

    let total = calculate_sales_total(&records)?;
    info!("total over {} records: {}", records.len(), total);

    println!("{total}");
    Ok(())
}

fn read_input(file: Option<&Path>) -> SalesResult<String> {
    match file {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut raw = String::new();
            std::io::stdin().read_to_string(&mut raw)?;
            Ok(raw)
        }
    }
}
