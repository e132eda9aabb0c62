//! Newton-Raphson root-finding solver.

use super::{RootSolution, SolverConfig};
use crate::types::SolverError;
use num_traits::Float;

/// Newton-Raphson root finder.
///
/// Uses Newton's method: `x_{n+1} = x_n - f(x_n) / f'(x_n)` for fast
/// quadratic convergence on smooth functions.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`)
///
/// # Convergence
///
/// Newton-Raphson converges quadratically near a root, meaning the number
/// of correct digits approximately doubles each iteration. However, it may
/// fail if:
/// - The derivative is near zero
/// - The initial guess is far from the root
/// - The function has discontinuities
///
/// # Example
///
/// ```
/// use pricer_core::math::solvers::{NewtonRaphsonSolver, SolverConfig};
///
/// // Solve x² - 2 = 0 (find √2)
/// let solver = NewtonRaphsonSolver::new(SolverConfig::new(1e-12, 100));
///
/// let f = |x: f64| x * x - 2.0;
/// let f_prime = |x: f64| 2.0 * x;
///
/// let solution = solver.find_positive_root(f, f_prime, 1.0).unwrap();
/// assert!((solution.root - std::f64::consts::SQRT_2).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct NewtonRaphsonSolver<T: Float> {
    /// Solver configuration
    config: SolverConfig<T>,
}

impl<T: Float> NewtonRaphsonSolver<T> {
    /// Create a new Newton-Raphson solver with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Solver configuration with tolerance and max iterations
    pub fn new(config: SolverConfig<T>) -> Self {
        Self { config }
    }

    /// Find a strictly positive root of `f` with damped Newton steps.
    ///
    /// Each iteration evaluates `f(x)` and `f'(x)`, then:
    /// 1. stops with `DerivativeNearZero` if `|f'(x)| < min_derivative`;
    /// 2. returns `x` if `|f(x)| < tolerance`;
    /// 3. takes the Newton step, unless it would land at or below zero, in
    ///    which case `x` is halved instead.
    ///
    /// The derivative is checked before convergence, so a flat region is
    /// reported even when `f(x)` happens to be inside tolerance there.
    ///
    /// # Arguments
    ///
    /// * `f` - Function to find root of
    /// * `f_prime` - Derivative (or derivative estimate) of f
    /// * `x0` - Strictly positive initial guess
    ///
    /// # Returns
    ///
    /// * `Ok(RootSolution)` - Root and the number of iterations used
    /// * `Err(SolverError)` - Flat derivative, non-finite value or exhausted budget
    ///
    /// # Example
    ///
    /// ```
    /// use pricer_core::math::solvers::{NewtonRaphsonSolver, SolverConfig};
    ///
    /// let solver = NewtonRaphsonSolver::new(SolverConfig::new(1e-12, 100));
    ///
    /// // ln(x) = 0 from x0 = 3: the first Newton step overshoots below zero.
    /// let solution = solver
    ///     .find_positive_root(|x: f64| x.ln(), |x: f64| 1.0 / x, 3.0)
    ///     .unwrap();
    /// assert!((solution.root - 1.0).abs() < 1e-10);
    /// ```
    pub fn find_positive_root<F, G>(
        &self,
        f: F,
        f_prime: G,
        x0: T,
    ) -> Result<RootSolution<T>, SolverError>
    where
        F: Fn(T) -> T,
        G: Fn(T) -> T,
    {
        let zero = T::zero();
        let two = T::from(2.0).unwrap();
        let mut x = x0;

        for iteration in 0..self.config.max_iterations {
            let f_val = f(x);
            let f_prime_val = f_prime(x);

            if !f_val.is_finite() || !f_prime_val.is_finite() {
                return Err(SolverError::NonFiniteValue {
                    iterations: iteration,
                });
            }

            if f_prime_val.abs() < self.config.min_derivative {
                return Err(SolverError::DerivativeNearZero {
                    x: x.to_f64().unwrap_or(f64::NAN),
                    iterations: iteration,
                });
            }

            if f_val.abs() < self.config.tolerance {
                return Ok(RootSolution {
                    root: x,
                    iterations: iteration + 1,
                });
            }

            let x_next = x - f_val / f_prime_val;
            x = if x_next <= zero { x / two } else { x_next };
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
    use std::cell::Cell;

    fn tight() -> SolverConfig<f64> {
        SolverConfig::new(1e-12, 100)
    }

    #[test]
    fn test_positive_root_sqrt_2() {
        let solver = NewtonRaphsonSolver::new(tight());

        let solution = solver
            .find_positive_root(|x: f64| x * x - 2.0, |x: f64| 2.0 * x, 1.0)
            .unwrap();
        assert!((solution.root - std::f64::consts::SQRT_2).abs() < 1e-10);
        assert!(solution.iterations > 1);
        assert!(solution.iterations < 10);
    }

    #[test]
    fn test_positive_root_immediate_convergence_counts_one_iteration() {
        let solver = NewtonRaphsonSolver::new(tight());

        let solution = solver
            .find_positive_root(|x: f64| x - 0.2, |_x: f64| 1.0, 0.2)
            .unwrap();
        assert_eq!(solution.root, 0.2);
        assert_eq!(solution.iterations, 1);
    }

    #[test]
    fn test_positive_root_halves_instead_of_crossing_zero() {
        let solver = NewtonRaphsonSolver::new(tight());
        let visited = Cell::new(Vec::<f64>::new());

        // From x0 = 3 the raw step for ln(x) is 3 - 3·ln(3) ≈ -0.296.
        let f = |x: f64| {
            let mut v = visited.take();
            v.push(x);
            visited.set(v);
            x.ln()
        };
        let solution = solver.find_positive_root(f, |x: f64| 1.0 / x, 3.0).unwrap();

        let visited = visited.take();
        assert_eq!(visited[0], 3.0);
        assert_eq!(visited[1], 1.5);
        assert!(visited.iter().all(|&x| x > 0.0));
        assert!((solution.root - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_positive_root_flat_derivative_checked_before_convergence() {
        let solver = NewtonRaphsonSolver::new(SolverConfig::default());

        // f is already within tolerance, but the derivative is flat.
        let result = solver.find_positive_root(|_x: f64| 0.0, |_x: f64| 1e-12, 0.2);

        assert!(matches!(
            result,
            Err(SolverError::DerivativeNearZero { iterations: 0, .. })
        ));
    }

    #[test]
    fn test_positive_root_reports_exhausted_budget() {
        let solver = NewtonRaphsonSolver::new(SolverConfig::new(1e-100, 4));

        let result = solver.find_positive_root(|x: f64| x * x - 2.0, |x: f64| 2.0 * x, 1.0);

        assert_eq!(
            result.unwrap_err(),
            SolverError::MaxIterationsExceeded { iterations: 4 }
        );
    }

    #[test]
    fn test_positive_root_non_finite_function() {
        let solver = NewtonRaphsonSolver::new(SolverConfig::default());

        let result = solver.find_positive_root(|_x: f64| f64::NAN, |_x: f64| 1.0, 1.0);

        assert_eq!(
            result.unwrap_err(),
            SolverError::NonFiniteValue { iterations: 0 }
        );
    }

    #[test]
    fn test_config_accessor() {
        let config = SolverConfig::new(1e-8, 50);
        let solver = NewtonRaphsonSolver::new(config);

        assert!((solver.config().tolerance - 1e-8).abs() < 1e-15);
        assert_eq!(solver.config().max_iterations, 50);
    }

    #[test]
    fn test_positive_root_with_f32() {
        let solver: NewtonRaphsonSolver<f32> = NewtonRaphsonSolver::new(SolverConfig::new(1e-5, 50));

        let solution = solver
            .find_positive_root(|x: f32| x * x - 2.0, |x: f32| 2.0 * x, 1.0_f32)
            .unwrap();
        assert!((solution.root - std::f32::consts::SQRT_2).abs() < 1e-4);
    }
}
