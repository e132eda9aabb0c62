//! Solver outcome types.

use std::fmt;

use num_traits::Float;

use super::error::ImpliedVolError;

/// Phase that produced the converged volatility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolveMethod {
    /// Converged during the Newton-Raphson phase
    Newton,
    /// Converged during the bisection fallback
    Bisection,
}

impl fmt::Display for SolveMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveMethod::Newton => f.write_str("Newton"),
            SolveMethod::Bisection => f.write_str("Bisection"),
        }
    }
}

/// A converged implied volatility with diagnostics.
///
/// `volatility` is finite and strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImpliedVolSolution<T> {
    /// Implied volatility in the model's units
    pub volatility: T,
    /// Phase that converged
    pub method: SolveMethod,
    /// Newton iterations used (including a failed Newton phase before bisection)
    pub newton_iterations: usize,
    /// Bisection iterations used (zero when Newton converged)
    pub bisection_iterations: usize,
}

impl<T> ImpliedVolSolution<T> {
    /// Total iterations across both phases.
    pub fn total_iterations(&self) -> usize {
        self.newton_iterations + self.bisection_iterations
    }
}

/// Outcome of one implied volatility solve.
pub type VolatilityResult<T> = Result<ImpliedVolSolution<T>, ImpliedVolError>;

/// Collapse a solve outcome to the NaN-sentinel form.
///
/// Every failure kind maps to NaN, which callers must read as "no result".
///
/// # Examples
/// ```
/// use pricer_optimiser::implied_vol::{volatility_or_nan, ImpliedVolError, VolatilityResult};
///
/// let failed: VolatilityResult<f64> = Err(ImpliedVolError::InvalidInput {
///     field: "expiry",
///     value: 0.0,
/// });
/// assert!(volatility_or_nan(&failed).is_nan());
/// ```
pub fn volatility_or_nan<T: Float>(result: &VolatilityResult<T>) -> T {
    match result {
        Ok(solution) => solution.volatility,
        Err(_) => T::nan(),
    }
}
