//! Sensitivities of model prices.
//!
//! - [`VegaEstimator`]: central finite-difference vega on any pricing formula

mod vega;

pub use vega::VegaEstimator;
