//! Solve command implementation
//!
//! Reads a CSV of option quotes, solves each for its implied volatility and
//! writes one output row per input row, in input order.

use std::path::Path;

use pricer_optimiser::implied_vol::ImpliedVolSolver;
use tracing::info;

use crate::batch::{self, BatchSummary};
use crate::config::CliConfig;
use crate::records::{InputRecord, OUTPUT_HEADERS};
use crate::{CliError, Result};

/// Run the solve command
pub fn run(input: &Path, output: &Path, sequential: bool, config: &CliConfig) -> Result<BatchSummary> {
    let parallel = config.parallel && !sequential;

    info!("Starting implied volatility batch...");
    info!("  Input: {}", input.display());
    info!("  Output: {}", output.display());
    info!("  Days per year: {}", config.days_per_year);
    info!("  Parallel: {}", parallel);

    if !input.exists() {
        return Err(CliError::FileNotFound(input.display().to_string()));
    }

    let records = read_records(input)?;
    info!("Loaded {} records", records.len());

    let solver = ImpliedVolSolver::new(config.solver);
    let outcomes = batch::solve_all(&records, &solver, config, parallel);

    let mut writer = csv::Writer::from_path(output)?;
    if records.is_empty() {
        writer.write_record(OUTPUT_HEADERS)?;
    }
    for (record, outcome) in records.iter().zip(&outcomes) {
        writer.serialize(batch::to_output(record, outcome, config))?;
    }
    writer.flush()?;

    let summary = BatchSummary::from_outcomes(&outcomes);
    summary.log();
    info!("Results written to {}", output.display());

    Ok(summary)
}

/// Read every input row. A malformed numeric field fails the whole file.
fn read_records(input: &Path) -> Result<Vec<InputRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(input)?;

    let records = reader
        .deserialize()
        .collect::<std::result::Result<Vec<InputRecord>, csv::Error>>()?;
    Ok(records)
}
