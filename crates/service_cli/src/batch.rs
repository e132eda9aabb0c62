//! Record-level solving for the batch driver.
//!
//! Each record is independent: it is parsed, solved and formatted on its
//! own, so the batch can run on the rayon pool and still keep input order.

use std::collections::BTreeMap;

use pricer_models::instruments::{ContractError, OptionContract, OptionSide};
use pricer_models::models::ModelKind;
use pricer_optimiser::implied_vol::{
    ImpliedVolError, ImpliedVolSolution, ImpliedVolSolver, MarketObservation, SolveMethod,
};
use rayon::prelude::*;
use thiserror::Error;
use tracing::{info, warn};

use crate::config::CliConfig;
use crate::format::format_general;
use crate::records::{InputRecord, OutputRecord};

/// Why a single record produced no volatility.
#[derive(Debug, Error)]
pub enum RecordFailure {
    #[error(transparent)]
    Contract(#[from] ContractError),

    #[error(transparent)]
    Solve(#[from] ImpliedVolError),
}

impl RecordFailure {
    /// Short failure name used in the run summary.
    pub fn kind(&self) -> &'static str {
        match self {
            RecordFailure::Contract(ContractError::UnknownSide(_)) => "UnknownSide",
            RecordFailure::Contract(ContractError::UnknownModel(_)) => "UnknownModel",
            RecordFailure::Solve(err) => err.kind(),
        }
    }
}

/// Outcome of one record.
pub type RecordOutcome = Result<ImpliedVolSolution<f64>, RecordFailure>;

/// Parse the textual fields of `record` and solve it.
pub fn solve_record(
    record: &InputRecord,
    solver: &ImpliedVolSolver<f64>,
    config: &CliConfig,
) -> RecordOutcome {
    let side: OptionSide = record.option_type.parse()?;
    let model: ModelKind = record.model_type.parse()?;

    let contract = OptionContract::new(
        record.underlying,
        record.strike,
        config.years(record.days_to_expiry),
        record.rate,
        side,
    );
    let observation = MarketObservation::new(record.market_price, model);

    solver
        .solve(&contract, &observation)
        .map_err(RecordFailure::from)
}

/// Build the output row, writing the NaN sentinel for a failed record.
pub fn to_output(record: &InputRecord, outcome: &RecordOutcome, config: &CliConfig) -> OutputRecord {
    let digits = config.significant_digits;
    let volatility = match outcome {
        Ok(solution) => solution.volatility,
        Err(_) => f64::NAN,
    };

    OutputRecord {
        id: record.id.clone(),
        spot: format_general(record.underlying, digits),
        strike: format_general(record.strike, digits),
        rate: format_general(record.rate, digits),
        years_to_expiry: format_general(config.years(record.days_to_expiry), digits),
        option_type: record.option_type.clone(),
        model_type: record.model_type.clone(),
        implied_volatility: format_general(volatility, digits),
        market_price: format_general(record.market_price, digits),
    }
}

/// Solve every record, in parallel unless `parallel` is false.
///
/// The result has one outcome per record, in input order.
pub fn solve_all(
    records: &[InputRecord],
    solver: &ImpliedVolSolver<f64>,
    config: &CliConfig,
    parallel: bool,
) -> Vec<RecordOutcome> {
    let solve_one = |record: &InputRecord| {
        let outcome = solve_record(record, solver, config);
        if let Err(err) = &outcome {
            warn!("Record {}: no implied volatility ({})", record.id, err);
        }
        outcome
    };

    if parallel {
        records.par_iter().map(solve_one).collect()
    } else {
        records.iter().map(solve_one).collect()
    }
}

/// Counts over a finished batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub records: usize,
    pub solved: usize,
    pub by_newton: usize,
    pub by_bisection: usize,
    pub failures: BTreeMap<&'static str, usize>,
}

impl BatchSummary {
    /// Tally a batch of outcomes.
    pub fn from_outcomes(outcomes: &[RecordOutcome]) -> Self {
        let mut summary = BatchSummary {
            records: outcomes.len(),
            ..Default::default()
        };

        for outcome in outcomes {
            match outcome {
                Ok(solution) => {
                    summary.solved += 1;
                    match solution.method {
                        SolveMethod::Newton => summary.by_newton += 1,
                        SolveMethod::Bisection => summary.by_bisection += 1,
                    }
                }
                Err(failure) => *summary.failures.entry(failure.kind()).or_insert(0) += 1,
            }
        }

        summary
    }

    /// Records that ended with the NaN sentinel.
    pub fn unsolved(&self) -> usize {
        self.records - self.solved
    }

    /// Write the summary to the log at info level.
    pub fn log(&self) {
        info!(
            "Solved {}/{} records ({} Newton, {} bisection), {} unsolved",
            self.solved,
            self.records,
            self.by_newton,
            self.by_bisection,
            self.unsolved()
        );
        for (kind, count) in &self.failures {
            info!("  {}: {}", kind, count);
        }
    }
}
