//! Implied volatility error types.

use thiserror::Error;

/// Reasons an implied volatility could not be produced.
///
/// Validation failures (`InvalidInput`, `ArbitrageViolation`) are raised
/// before any iteration and carry no iteration counts. Flat vega and
/// negative Newton steps are handled inside the solver and never surface.
///
/// # Examples
/// ```
/// use pricer_optimiser::implied_vol::ImpliedVolError;
///
/// let err = ImpliedVolError::NonConvergence {
///     newton_iterations: 100,
///     bisection_iterations: 100,
/// };
/// assert_eq!(err.kind(), "NonConvergence");
/// assert!(format!("{}", err).contains("100"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ImpliedVolError {
    /// A contract field or the market price is out of its domain.
    #[error("Invalid input: {field} = {value}")]
    InvalidInput {
        /// Name of the offending field
        field: &'static str,
        /// The rejected value
        value: f64,
    },

    /// The market price lies outside the model's no-arbitrage bounds.
    #[error("Market price {price} outside no-arbitrage bounds [{lower}, {upper}]")]
    ArbitrageViolation {
        /// Observed market price
        price: f64,
        /// Lower bound
        lower: f64,
        /// Upper bound (infinite when the model has none)
        upper: f64,
    },

    /// Neither phase met the tolerance within its iteration budget.
    #[error(
        "No convergence after {newton_iterations} Newton and {bisection_iterations} bisection iterations"
    )]
    NonConvergence {
        /// Iterations spent in the Newton phase
        newton_iterations: usize,
        /// Iterations spent in the bisection phase
        bisection_iterations: usize,
    },
}

impl ImpliedVolError {
    /// Short name of the failure kind, for logs and summaries.
    pub fn kind(&self) -> &'static str {
        match self {
            ImpliedVolError::InvalidInput { .. } => "InvalidInput",
            ImpliedVolError::ArbitrageViolation { .. } => "ArbitrageViolation",
            ImpliedVolError::NonConvergence { .. } => "NonConvergence",
        }
    }

    /// Total iterations consumed before the failure.
    pub fn iterations(&self) -> usize {
        match self {
            ImpliedVolError::NonConvergence {
                newton_iterations,
                bisection_iterations,
            } => newton_iterations + bisection_iterations,
            _ => 0,
        }
    }
}
