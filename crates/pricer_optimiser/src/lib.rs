//! # pricer_optimiser
//!
//! Implied volatility inversion for European options.
//!
//! This crate sits above Models (L2) and solves the inverse problem: given
//! an observed option price, find the volatility a closed-form model needs
//! to reproduce it.
//!
//! ## Architecture Position
//!
//! Layer 2.5 in the **P**ricer layer.
//! Depends on `pricer_core` (L1) for root finders and `pricer_models` (L2)
//! for contracts and pricing formulas.
//!
//! ## Modules
//!
//! - `implied_vol`: validation, Newton-Raphson with bisection fallback,
//!   solution diagnostics
//!
//! ## Example
//!
//! ```rust
//! use pricer_models::instruments::{OptionContract, OptionSide};
//! use pricer_models::models::ModelKind;
//! use pricer_optimiser::prelude::*;
//!
//! let contract = OptionContract::new(100.0_f64, 95.0, 0.5, 0.02, OptionSide::Put);
//! let quote = MarketObservation::new(3.1, ModelKind::BlackScholes);
//!
//! match ImpliedVolSolver::with_defaults().solve(&contract, &quote) {
//!     Ok(solution) => assert!(solution.volatility > 0.0),
//!     Err(err) => panic!("{}", err),
//! }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod implied_vol;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::implied_vol::*;
}
