//! Error types for structured error handling.
//!
//! This module provides:
//! - `SolverError`: Errors from root-finding solvers

use thiserror::Error;

/// Root-finding solver errors.
///
/// Provides structured error handling for root-finding solver operations
/// with descriptive context for each failure mode. Every variant raised
/// after iterating records how many iterations were consumed, so callers
/// chaining solvers can report the full cost of a failed solve.
///
/// # Variants
/// - `MaxIterationsExceeded`: Solver failed to converge within iteration limit
/// - `DerivativeNearZero`: Derivative too small for Newton-Raphson
/// - `InvalidBracket`: Bracket endpoints are not an increasing finite pair
/// - `NonFiniteValue`: An iterate or function value became NaN or infinite
///
/// # Examples
/// ```
/// use pricer_core::types::SolverError;
///
/// let err = SolverError::MaxIterationsExceeded { iterations: 100 };
/// assert!(format!("{}", err).contains("100 iterations"));
/// assert_eq!(err.iterations(), 100);
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolverError {
    /// Solver failed to converge within maximum iterations.
    #[error("Failed to converge after {iterations} iterations")]
    MaxIterationsExceeded {
        /// Number of iterations attempted
        iterations: usize,
    },

    /// Derivative near zero (division by zero risk in Newton-Raphson).
    #[error("Derivative near zero at x = {x} (iteration {iterations})")]
    DerivativeNearZero {
        /// The x value where derivative was near zero
        x: f64,
        /// Iterations completed before the flat derivative was hit
        iterations: usize,
    },

    /// Bracket endpoints do not form a valid interval.
    #[error("Invalid bracket: [{a}, {b}]")]
    InvalidBracket {
        /// Left bracket endpoint
        a: f64,
        /// Right bracket endpoint
        b: f64,
    },

    /// A function value or iterate became NaN or infinite.
    #[error("Non-finite value encountered at iteration {iterations}")]
    NonFiniteValue {
        /// Iterations completed before the non-finite value appeared
        iterations: usize,
    },
}

impl SolverError {
    /// Number of iterations consumed before the error was raised.
    ///
    /// `InvalidBracket` is detected before iterating and reports zero.
    pub fn iterations(&self) -> usize {
        match self {
            SolverError::MaxIterationsExceeded { iterations }
            | SolverError::DerivativeNearZero { iterations, .. }
            | SolverError::NonFiniteValue { iterations } => *iterations,
            SolverError::InvalidBracket { .. } => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_iterations_display() {
        let err = SolverError::MaxIterationsExceeded { iterations: 100 };
        assert_eq!(format!("{}", err), "Failed to converge after 100 iterations");
    }

    #[test]
    fn test_derivative_near_zero_display() {
        let err = SolverError::DerivativeNearZero {
            x: 0.2,
            iterations: 3,
        };
        assert_eq!(
            format!("{}", err),
            "Derivative near zero at x = 0.2 (iteration 3)"
        );
    }

    #[test]
    fn test_invalid_bracket_display() {
        let err = SolverError::InvalidBracket { a: 5.0, b: 1.0 };
        assert_eq!(format!("{}", err), "Invalid bracket: [5, 1]");
    }

    #[test]
    fn test_iterations_accessor() {
        assert_eq!(
            SolverError::DerivativeNearZero {
                x: 1.0,
                iterations: 7
            }
            .iterations(),
            7
        );
        assert_eq!(SolverError::NonFiniteValue { iterations: 2 }.iterations(), 2);
        assert_eq!(SolverError::InvalidBracket { a: 0.0, b: 0.0 }.iterations(), 0);
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = SolverError::NonFiniteValue { iterations: 0 };
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_clone_and_equality() {
        let err1 = SolverError::MaxIterationsExceeded { iterations: 5 };
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }
}
