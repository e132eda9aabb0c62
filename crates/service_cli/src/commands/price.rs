//! Price command implementation
//!
//! Prices a single European option under the chosen model.

use pricer_models::instruments::OptionSide;
use pricer_models::models::{model_for, ModelKind};
use serde::Serialize;
use tracing::info;

use super::{render_table, ContractArgs, ReportFormat};
use crate::config::CliConfig;
use crate::format::format_general;
use crate::{CliError, Result};

/// Result of the price command.
#[derive(Debug, Clone, Serialize)]
pub struct PriceReport {
    pub model: ModelKind,
    pub side: OptionSide,
    pub spot: f64,
    pub strike: f64,
    pub years_to_expiry: f64,
    pub rate: f64,
    pub volatility: f64,
    pub price: f64,
}

/// Compute the report without printing it.
pub fn compute(args: &ContractArgs, volatility: f64, config: &CliConfig) -> Result<PriceReport> {
    if !volatility.is_finite() {
        return Err(CliError::InvalidArgument(format!(
            "volatility must be finite, got {}",
            volatility
        )));
    }

    let contract = args.contract(config);
    let price = model_for(args.model).price(&contract, volatility);

    Ok(PriceReport {
        model: args.model,
        side: args.side,
        spot: contract.spot(),
        strike: contract.strike(),
        years_to_expiry: contract.expiry(),
        rate: contract.rate(),
        volatility,
        price,
    })
}

/// Run the price command
pub fn run(args: &ContractArgs, volatility: f64, format: &str, config: &CliConfig) -> Result<()> {
    let format = ReportFormat::parse(format)?;
    info!("Pricing {} {} under {}", args.side, args.strike, args.model);

    let report = compute(args, volatility, config)?;
    let digits = config.significant_digits;

    match format {
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        ReportFormat::Table => println!(
            "{}",
            render_table(&[
                ("Model", report.model.to_string()),
                ("Side", report.side.to_string()),
                ("Spot", format_general(report.spot, digits)),
                ("Strike", format_general(report.strike, digits)),
                ("Years To Expiry", format_general(report.years_to_expiry, digits)),
                ("Risk-Free Rate", format_general(report.rate, digits)),
                ("Volatility", format_general(report.volatility, digits)),
                ("Price", format_general(report.price, digits)),
            ])
        ),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn args(model: ModelKind) -> ContractArgs {
        ContractArgs {
            spot: 100.0,
            strike: 100.0,
            days: 365.0,
            rate: 0.05,
            side: OptionSide::Call,
            model,
        }
    }

    #[test]
    fn test_black_scholes_reference_price() {
        let report = compute(&args(ModelKind::BlackScholes), 0.2, &CliConfig::default()).unwrap();
        assert_relative_eq!(report.price, 10.4506, epsilon = 1e-3);
        assert_eq!(report.years_to_expiry, 1.0);
    }

    #[test]
    fn test_degenerate_volatility_prices_zero() {
        let report = compute(&args(ModelKind::Bachelier), 0.0, &CliConfig::default()).unwrap();
        assert_eq!(report.price, 0.0);
    }

    #[test]
    fn test_non_finite_volatility_rejected() {
        let result = compute(&args(ModelKind::BlackScholes), f64::NAN, &CliConfig::default());
        assert!(matches!(result, Err(CliError::InvalidArgument(_))));
    }

    #[test]
    fn test_json_field_names() {
        let report = compute(&args(ModelKind::BlackScholes), 0.2, &CliConfig::default()).unwrap();
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["model"], "BlackScholes");
        assert_eq!(value["side"], "Call");
        assert!(value["price"].as_f64().unwrap() > 10.0);
    }

    #[test]
    fn test_unknown_format_rejected() {
        let result = run(&args(ModelKind::BlackScholes), 0.2, "xml", &CliConfig::default());
        assert!(matches!(result, Err(CliError::InvalidArgument(_))));
    }
}
