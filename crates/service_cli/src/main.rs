//! ivol - batch implied volatility for European options
//!
//! Command-line driver over the pricer crates.
//!
//! # Commands
//!
//! - `ivol solve --input <csv> --output <csv>` - Solve a file of quotes
//! - `ivol price ... --vol <sigma>` - Price one contract
//! - `ivol implied ... --market-price <p>` - Solve one quote with diagnostics
//! - `ivol check` - Print the effective configuration
//!
//! # Architecture
//!
//! As part of the **S**ervice layer, this crate owns file formats, logging
//! setup and the parallelism decision. The pricer crates stay pure.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod batch;
mod commands;
mod config;
mod error;
mod format;
mod records;

pub use error::{CliError, Result};

use commands::ContractArgs;
use config::CliConfig;

/// Implied volatility calculator for European options
#[derive(Parser)]
#[command(name = "ivol")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "ivol.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve implied volatilities for a CSV file of option quotes
    Solve {
        /// Input CSV file
        #[arg(short, long)]
        input: PathBuf,

        /// Output CSV file
        #[arg(short, long)]
        output: PathBuf,

        /// Solve records one after another instead of on the thread pool
        #[arg(long)]
        sequential: bool,
    },

    /// Price a single contract at a given volatility
    Price {
        #[command(flatten)]
        contract: ContractArgs,

        /// Volatility (lognormal for BlackScholes, absolute for Bachelier)
        #[arg(long)]
        vol: f64,

        /// Output format (json, table)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Solve the implied volatility of a single quote
    Implied {
        #[command(flatten)]
        contract: ContractArgs,

        /// Observed option price
        #[arg(long, allow_negative_numbers = true)]
        market_price: f64,

        /// Output format (json, table)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Check configuration
    Check,
}

/// Install the global subscriber. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn load_config(path: &Path) -> anyhow::Result<CliConfig> {
    CliConfig::load(path)
        .with_context(|| format!("failed to load configuration from {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let config = load_config(&cli.config)?;
    debug!(?config, "effective configuration");

    match cli.command {
        Commands::Solve {
            input,
            output,
            sequential,
        } => {
            let summary = commands::solve::run(&input, &output, sequential, &config)?;
            debug!(?summary, "batch finished");
        }
        Commands::Price {
            contract,
            vol,
            format,
        } => commands::price::run(&contract, vol, &format, &config)?,
        Commands::Implied {
            contract,
            market_price,
            format,
        } => commands::implied::run(&contract, market_price, &format, &config)?,
        Commands::Check => commands::check::run(&config, &cli.config)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use pricer_models::instruments::OptionSide;
    use pricer_models::models::ModelKind;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_solve() {
        let cli = Cli::try_parse_from(["ivol", "solve", "-i", "in.csv", "-o", "out.csv", "--sequential"])
            .unwrap();
        assert_eq!(cli.config, PathBuf::from("ivol.toml"));
        match cli.command {
            Commands::Solve {
                input,
                output,
                sequential,
            } => {
                assert_eq!(input, PathBuf::from("in.csv"));
                assert_eq!(output, PathBuf::from("out.csv"));
                assert!(sequential);
            }
            _ => panic!("expected solve"),
        }
    }

    #[test]
    fn test_parse_implied_with_typed_fields() {
        let cli = Cli::try_parse_from([
            "ivol",
            "implied",
            "--spot",
            "100",
            "--strike",
            "95",
            "--days",
            "30",
            "--rate",
            "-0.005",
            "--side",
            "put",
            "--model",
            "Bachelier",
            "--market-price",
            "1.5",
            "--format",
            "json",
        ])
        .unwrap();

        match cli.command {
            Commands::Implied {
                contract,
                market_price,
                format,
            } => {
                assert_eq!(contract.rate, -0.005);
                assert_eq!(contract.side, OptionSide::Put);
                assert_eq!(contract.model, ModelKind::Bachelier);
                assert_eq!(market_price, 1.5);
                assert_eq!(format, "json");
            }
            _ => panic!("expected implied"),
        }
    }

    #[test]
    fn test_unknown_side_rejected_by_parser() {
        let result = Cli::try_parse_from([
            "ivol", "price", "--spot", "100", "--strike", "100", "--days", "30", "--side",
            "straddle", "--vol", "0.2",
        ]);
        assert!(result.is_err());
    }
}
