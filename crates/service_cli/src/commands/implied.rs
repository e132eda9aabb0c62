//! Implied command implementation
//!
//! Solves one quote and reports the volatility with its diagnostics, or the
//! reason no volatility exists.

use pricer_models::instruments::OptionSide;
use pricer_models::models::ModelKind;
use pricer_optimiser::implied_vol::{
    no_arbitrage_bounds, ImpliedVolError, ImpliedVolSolver, MarketObservation, SolveMethod,
};
use serde::Serialize;
use tracing::{info, warn};

use super::{render_table, ContractArgs, ReportFormat};
use crate::config::CliConfig;
use crate::format::format_general;
use crate::Result;

/// Result of the implied command.
#[derive(Debug, Clone, Serialize)]
pub struct ImpliedReport {
    pub model: ModelKind,
    pub side: OptionSide,
    pub market_price: f64,
    pub lower_bound: f64,
    pub upper_bound: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volatility: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<SolveMethod>,
    pub newton_iterations: usize,
    pub bisection_iterations: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_kind: Option<&'static str>,
}

/// Solve the quote without printing anything.
pub fn compute(args: &ContractArgs, market_price: f64, config: &CliConfig) -> ImpliedReport {
    let contract = args.contract(config);
    let bounds = no_arbitrage_bounds(&contract, args.model);
    let solver = ImpliedVolSolver::new(config.solver);

    let mut report = ImpliedReport {
        model: args.model,
        side: args.side,
        market_price,
        lower_bound: bounds.lower,
        upper_bound: bounds.upper,
        volatility: None,
        method: None,
        newton_iterations: 0,
        bisection_iterations: 0,
        failure: None,
        failure_kind: None,
    };

    match solver.solve(&contract, &MarketObservation::new(market_price, args.model)) {
        Ok(solution) => {
            report.volatility = Some(solution.volatility);
            report.method = Some(solution.method);
            report.newton_iterations = solution.newton_iterations;
            report.bisection_iterations = solution.bisection_iterations;
        }
        Err(err) => {
            warn!("No implied volatility: {}", err);
            if let ImpliedVolError::NonConvergence {
                newton_iterations,
                bisection_iterations,
            } = err
            {
                report.newton_iterations = newton_iterations;
                report.bisection_iterations = bisection_iterations;
            }
            report.failure_kind = Some(err.kind());
            report.failure = Some(err.to_string());
        }
    }

    report
}

/// Run the implied command
pub fn run(args: &ContractArgs, market_price: f64, format: &str, config: &CliConfig) -> Result<()> {
    let format = ReportFormat::parse(format)?;
    info!(
        "Solving {} {} under {} at price {}",
        args.side, args.strike, args.model, market_price
    );

    let report = compute(args, market_price, config);
    let digits = config.significant_digits;

    match format {
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        ReportFormat::Table => {
            let mut rows = vec![
                ("Model", report.model.to_string()),
                ("Side", report.side.to_string()),
                ("Market Price", format_general(report.market_price, digits)),
                ("Lower Bound", format_general(report.lower_bound, digits)),
                (
                    "Upper Bound",
                    report
                        .upper_bound
                        .map(|upper| format_general(upper, digits))
                        .unwrap_or_else(|| "none".to_string()),
                ),
                (
                    "Implied Volatility",
                    format_general(report.volatility.unwrap_or(f64::NAN), digits),
                ),
            ];
            if let Some(method) = report.method {
                rows.push(("Method", method.to_string()));
            }
            if let Some(kind) = report.failure_kind {
                rows.push(("Failure", kind.to_string()));
            }
            rows.push(("Newton Iterations", report.newton_iterations.to_string()));
            rows.push(("Bisection Iterations", report.bisection_iterations.to_string()));
            println!("{}", render_table(&rows));
        }
    }

    Ok(())
}
