//! Implied volatility inversion for European options.
//!
//! Turns an observed option price into the volatility that reproduces it
//! under Black-Scholes or Bachelier.
//!
//! ## Components
//!
//! - [`InputValidator`] and [`no_arbitrage_bounds`]: reject unsolvable quotes
//! - [`ImpliedVolSolver`]: Newton-Raphson with bisection fallback
//! - [`ImpliedVolSolution`] / [`ImpliedVolError`]: explicit outcome
//! - [`solve_implied_volatility`]: NaN-sentinel entry point
//!
//! ## Example
//!
//! ```
//! use pricer_models::instruments::{OptionContract, OptionSide};
//! use pricer_models::models::{model_for, ModelKind};
//! use pricer_optimiser::implied_vol::{solve_implied_volatility, MarketObservation};
//!
//! let contract = OptionContract::new(100.0_f64, 100.0, 1.0, 0.05, OptionSide::Call);
//! let price = model_for(ModelKind::Bachelier).price(&contract, 20.0);
//!
//! let vol = solve_implied_volatility(&contract, &MarketObservation::new(price, ModelKind::Bachelier));
//! assert!((vol - 20.0).abs() < 1e-6);
//! ```

mod config;
mod error;
mod observation;
mod solution;
mod solver;
mod validation;

pub use config::{ImpliedVolConfig, ImpliedVolConfigBuilder};
pub use error::ImpliedVolError;
pub use observation::MarketObservation;
pub use solution::{volatility_or_nan, ImpliedVolSolution, SolveMethod, VolatilityResult};
pub use solver::{solve_implied_volatility, ImpliedVolSolver};
pub use validation::{no_arbitrage_bounds, InputValidator, PriceBounds};
