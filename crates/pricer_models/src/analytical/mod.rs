//! Analytical pricing formulas for European options.
//!
//! This module provides closed-form solutions for option pricing:
//! - Black-Scholes model for lognormal dynamics
//! - Bachelier model for normal dynamics
//!
//! ## Design Principles
//!
//! - **Generic over `T: Float`**: the same formula runs in `f64` and `f32`
//! - **Stateless formulas**: contract terms and volatility are arguments, so
//!   one formula value serves every trial volatility of a solve
//! - **Non-negative prices**: every result is clamped at zero

pub mod bachelier;
pub mod black_scholes;
pub mod distributions;
mod formula;

// Re-export main types at module level
pub use bachelier::Bachelier;
pub use black_scholes::BlackScholes;
pub use distributions::{norm_cdf, norm_pdf};
pub use formula::PricingFormula;
