//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod check;
pub mod implied;
pub mod price;
pub mod solve;

use clap::Args;
use pricer_models::instruments::{OptionContract, OptionSide};
use pricer_models::models::ModelKind;

use crate::config::CliConfig;
use crate::{CliError, Result};

/// Contract terms shared by the single-contract commands.
#[derive(Debug, Clone, Args)]
pub struct ContractArgs {
    /// Spot price of the underlying
    #[arg(long)]
    pub spot: f64,

    /// Strike price
    #[arg(long)]
    pub strike: f64,

    /// Calendar days to expiry
    #[arg(long)]
    pub days: f64,

    /// Continuously compounded risk-free rate
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub rate: f64,

    /// Option side (Call, Put)
    #[arg(long, default_value = "Call")]
    pub side: OptionSide,

    /// Pricing model (BlackScholes, Bachelier)
    #[arg(long, default_value = "BlackScholes")]
    pub model: ModelKind,
}

impl ContractArgs {
    /// Build the contract, converting days to years with the configured basis.
    pub fn contract(&self, config: &CliConfig) -> OptionContract<f64> {
        OptionContract::new(
            self.spot,
            self.strike,
            config.years(self.days),
            self.rate,
            self.side,
        )
    }
}

/// Output formats of the single-contract commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Table,
    Json,
}

impl ReportFormat {
    /// Parse the `--format` argument.
    pub fn parse(format: &str) -> Result<Self> {
        match format {
            "table" => Ok(ReportFormat::Table),
            "json" => Ok(ReportFormat::Json),
            other => Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: json, table",
                other
            ))),
        }
    }
}

/// Render key/value rows as a two-column box table.
pub fn render_table(rows: &[(&str, String)]) -> String {
    let key_width = rows.iter().map(|(k, _)| k.chars().count()).max().unwrap_or(0);
    let value_width = rows.iter().map(|(_, v)| v.chars().count()).max().unwrap_or(0);
    let rule = |left: &str, mid: &str, right: &str| {
        format!(
            "{}{}{}{}{}",
            left,
            "─".repeat(key_width + 2),
            mid,
            "─".repeat(value_width + 2),
            right
        )
    };

    let mut lines = vec![rule("┌", "┬", "┐")];
    for (key, value) in rows {
        lines.push(format!(
            "│ {:<kw$} │ {:<vw$} │",
            key,
            value,
            kw = key_width,
            vw = value_width
        ));
    }
    lines.push(rule("└", "┴", "┘"));
    lines.join("\n")
}
