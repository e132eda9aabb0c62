//! Bisection root-finding solver for increasing functions.

use super::{RootSolution, SolverConfig};
use crate::types::SolverError;
use num_traits::Float;

/// Bisection root finder over a bracket `[a, b]`.
///
/// Halves the bracket each iteration, keeping the half that still contains
/// the root. The function is assumed to be monotonically increasing on the
/// bracket: a negative midpoint value moves the lower end up, a positive one
/// moves the upper end down. No sign check is made on the endpoints, so a
/// root outside the bracket drives the iteration towards the nearer endpoint
/// until the bracket collapses below tolerance.
///
/// Slower than Newton-Raphson but needs no derivative and cannot diverge.
///
/// # Example
///
/// ```
/// use pricer_core::math::solvers::{BisectionSolver, SolverConfig};
///
/// let solver = BisectionSolver::new(SolverConfig::new(1e-12, 100));
///
/// // x³ - 2 is increasing; its root is ∛2
/// let solution = solver.find_root(|x: f64| x * x * x - 2.0, 0.0, 2.0).unwrap();
/// assert!((solution.root - 2.0_f64.cbrt()).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct BisectionSolver<T: Float> {
    config: SolverConfig<T>,
}

impl<T: Float> BisectionSolver<T> {
    /// Create a new bisection solver with the given configuration.
    pub fn new(config: SolverConfig<T>) -> Self {
        Self { config }
    }

    /// Create a solver with default configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: SolverConfig::default(),
        }
    }

    /// Find a root of the increasing function `f` in `[a, b]`.
    ///
    /// Each iteration evaluates `f` at the midpoint `m`. The midpoint is
    /// returned as soon as `|f(m)| < tolerance` or the current bracket is
    /// narrower than tolerance.
    ///
    /// # Arguments
    ///
    /// * `f` - Increasing function to find root of
    /// * `a` - Lower bracket endpoint
    /// * `b` - Upper bracket endpoint (must exceed `a`)
    ///
    /// # Returns
    ///
    /// * `Ok(RootSolution)` - Midpoint root and the number of iterations used
    /// * `Err(SolverError::InvalidBracket)` - `a >= b` or a non-finite endpoint
    /// * `Err(SolverError::NonFiniteValue)` - `f` returned NaN or infinity
    /// * `Err(SolverError::MaxIterationsExceeded)` - Failed to converge
    pub fn find_root<F>(&self, f: F, a: T, b: T) -> Result<RootSolution<T>, SolverError>
    where
        F: Fn(T) -> T,
    {
        if !a.is_finite() || !b.is_finite() || a >= b {
            return Err(SolverError::InvalidBracket {
                a: a.to_f64().unwrap_or(f64::NAN),
                b: b.to_f64().unwrap_or(f64::NAN),
            });
        }

        let zero = T::zero();
        let two = T::from(2.0).unwrap();
        let mut low = a;
        let mut high = b;

        for iteration in 0..self.config.max_iterations {
            let mid = (low + high) / two;
            let f_mid = f(mid);

            if !f_mid.is_finite() {
                return Err(SolverError::NonFiniteValue {
                    iterations: iteration,
                });
            }

            if f_mid.abs() < self.config.tolerance || high - low < self.config.tolerance {
                return Ok(RootSolution {
                    root: mid,
                    iterations: iteration + 1,
                });
            }

            if f_mid < zero {
                low = mid;
            } else {
                high = mid;
            }
        }

        Err(SolverError::MaxIterationsExceeded {
            iterations: self.config.max_iterations,
        })
    }

    /// Returns a reference to the solver configuration.
    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_find_sqrt_2() {
        let solver = BisectionSolver::new(SolverConfig::new(1e-12, 100));

        let solution = solver.find_root(|x: f64| x * x - 2.0, 0.0, 2.0).unwrap();
        assert_relative_eq!(solution.root, std::f64::consts::SQRT_2, epsilon = 1e-10);
    }

    #[test]
    fn test_midpoint_root_found_on_first_iteration() {
        let solver: BisectionSolver<f64> = BisectionSolver::with_defaults();

        let solution = solver.find_root(|x: f64| x - 1.0, 0.0, 2.0).unwrap();
        assert_eq!(solution.root, 1.0);
        assert_eq!(solution.iterations, 1);
    }

    #[test]
    fn test_width_criterion_stops_on_flat_function() {
        // |f| never drops below tolerance, so only the width test can stop it.
        let solver = BisectionSolver::new(SolverConfig::new(1e-8, 100));

        let solution = solver.find_root(|x: f64| x + 1.0, 0.0, 4.0).unwrap();
        // f(m) > 0 everywhere, so the bracket collapses onto the lower end.
        assert!(solution.root < 1e-8);
        // 4 / 2^k < 1e-8 first holds at k = 29; the check runs one iteration later.
        assert_eq!(solution.iterations, 30);
    }

    #[test]
    fn test_root_outside_bracket_collapses_to_upper_end() {
        let solver = BisectionSolver::new(SolverConfig::new(1e-8, 100));

        let solution = solver.find_root(|x: f64| x - 10.0, 0.0, 5.0).unwrap();
        assert!((solution.root - 5.0).abs() < 1e-8);
    }

    #[test]
    fn test_max_iterations_exceeded() {
        let solver = BisectionSolver::new(SolverConfig::new(1e-12, 5));

        let result = solver.find_root(|x: f64| x * x - 2.0, 0.0, 2.0);
        assert_eq!(
            result.unwrap_err(),
            SolverError::MaxIterationsExceeded { iterations: 5 }
        );
    }

    #[test]
    fn test_invalid_bracket() {
        let solver: BisectionSolver<f64> = BisectionSolver::with_defaults();

        assert!(matches!(
            solver.find_root(|x: f64| x, 2.0, 1.0),
            Err(SolverError::InvalidBracket { .. })
        ));
        assert!(matches!(
            solver.find_root(|x: f64| x, 1.0, 1.0),
            Err(SolverError::InvalidBracket { .. })
        ));
        assert!(matches!(
            solver.find_root(|x: f64| x, 0.0, f64::INFINITY),
            Err(SolverError::InvalidBracket { .. })
        ));
    }

    #[test]
    fn test_non_finite_function_value() {
        let solver: BisectionSolver<f64> = BisectionSolver::with_defaults();

        let result = solver.find_root(|_x: f64| f64::NAN, 0.0, 1.0);
        assert_eq!(
            result.unwrap_err(),
            SolverError::NonFiniteValue { iterations: 0 }
        );
    }
}
