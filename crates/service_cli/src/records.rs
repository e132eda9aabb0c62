//! CSV row layouts for the batch driver.

use serde::{Deserialize, Serialize};

/// One quote read from the input file.
///
/// Side and model stay as raw strings so that a bad value fails only its
/// own row.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InputRecord {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Underlying")]
    pub underlying: f64,
    #[serde(rename = "Strike")]
    pub strike: f64,
    #[serde(rename = "Risk-Free Rate")]
    pub rate: f64,
    #[serde(rename = "Days To Expiry")]
    pub days_to_expiry: f64,
    #[serde(rename = "Option Type")]
    pub option_type: String,
    #[serde(rename = "Model Type")]
    pub model_type: String,
    #[serde(rename = "Market Price")]
    pub market_price: f64,
}

/// One solved row written to the output file.
///
/// Numbers are pre-formatted so the writer emits exactly the configured
/// significant digits.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputRecord {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Spot")]
    pub spot: String,
    #[serde(rename = "Strike")]
    pub strike: String,
    #[serde(rename = "Risk-Free Rate")]
    pub rate: String,
    #[serde(rename = "Years To Expiry")]
    pub years_to_expiry: String,
    #[serde(rename = "Option Type")]
    pub option_type: String,
    #[serde(rename = "Model Type")]
    pub model_type: String,
    #[serde(rename = "Implied Volatility")]
    pub implied_volatility: String,
    #[serde(rename = "Market Price")]
    pub market_price: String,
}

/// Output column order, written on its own when the batch is empty.
pub const OUTPUT_HEADERS: [&str; 9] = [
    "ID",
    "Spot",
    "Strike",
    "Risk-Free Rate",
    "Years To Expiry",
    "Option Type",
    "Model Type",
    "Implied Volatility",
    "Market Price",
];
