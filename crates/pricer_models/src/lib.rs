//! # Pricer Models (L2: Business Logic)
//!
//! European option contracts and the closed-form models that price them.
//!
//! This crate provides:
//! - Contract definitions (`OptionContract`, `OptionSide`)
//! - Black-Scholes and Bachelier closed-form formulas
//! - Model selection by name (`ModelKind`) with static dispatch (`PricingModel`)
//! - Finite-difference vega (`VegaEstimator`)
//!
//! ## Design Principles
//!
//! - **Enum-based models** for static dispatch
//! - **Pure formulas**: no state, no I/O, never a negative price
//! - **Degenerate inputs are values, not errors**: `σ <= 0` or `T <= 0` prices at zero
//!
//! ## Example
//!
//! ```
//! use pricer_models::greeks::VegaEstimator;
//! use pricer_models::instruments::{OptionContract, OptionSide};
//! use pricer_models::models::{model_for, ModelKind};
//!
//! let contract = OptionContract::new(100.0_f64, 100.0, 1.0, 0.05, OptionSide::Call);
//! let model = model_for("BlackScholes".parse::<ModelKind>().unwrap());
//!
//! let price = model.price(&contract, 0.2);
//! let vega = VegaEstimator::default().estimate(&model, &contract, 0.2);
//! assert!(price > 10.0 && vega > 30.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod greeks;
pub mod instruments;
pub mod models;
