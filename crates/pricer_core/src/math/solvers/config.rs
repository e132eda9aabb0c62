//! Solver configuration types.

use num_traits::Float;

/// Configuration for root-finding algorithms.
///
/// Provides common settings shared across all solver implementations:
/// convergence tolerance, iteration limit and the derivative floor used by
/// Newton-type methods to detect flat regions.
///
/// # Type Parameters
///
/// * `T` - Floating-point type for tolerance (e.g., `f64`)
///
/// # Example
///
/// ```
/// use pricer_core::math::solvers::SolverConfig;
///
/// // Use default configuration
/// let config: SolverConfig<f64> = SolverConfig::default();
/// assert_eq!(config.tolerance, 1e-8);
/// assert_eq!(config.max_iterations, 100);
///
/// // Custom configuration
/// let custom = SolverConfig {
///     tolerance: 1e-12,
///     max_iterations: 200,
///     min_derivative: 1e-14,
/// };
/// assert_eq!(custom.max_iterations, 200);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SolverConfig<T: Float> {
    /// Convergence tolerance for root finding.
    ///
    /// The solver stops when `|f(x)| < tolerance`. Bracketing solvers also
    /// stop once the bracket is narrower than this value.
    pub tolerance: T,

    /// Maximum number of iterations before giving up.
    ///
    /// If the solver doesn't converge within this limit,
    /// it returns `SolverError::MaxIterationsExceeded`.
    pub max_iterations: usize,

    /// Smallest derivative magnitude Newton iterations accept.
    ///
    /// Below this the update `f / f'` is considered meaningless and the
    /// solver returns `SolverError::DerivativeNearZero`.
    pub min_derivative: T,
}

impl<T: Float> Default for SolverConfig<T> {
    /// Create a default configuration.
    ///
    /// Default values:
    /// - `tolerance`: 1e-8
    /// - `max_iterations`: 100
    /// - `min_derivative`: 1e-10
    fn default() -> Self {
        Self {
            tolerance: T::from(1e-8).unwrap(),
            max_iterations: 100,
            min_derivative: T::from(1e-10).unwrap(),
        }
    }
}

impl<T: Float> SolverConfig<T> {
    /// Create a new configuration with specified tolerance and iteration cap.
    ///
    /// The derivative floor keeps its default of 1e-10.
    ///
    /// # Arguments
    ///
    /// * `tolerance` - Convergence tolerance (must be positive)
    /// * `max_iterations` - Maximum iteration count (must be > 0)
    ///
    /// # Panics
    ///
    /// Panics if `tolerance <= 0` or `max_iterations == 0`.
    ///
    /// # Example
    ///
    /// ```
    /// use pricer_core::math::solvers::SolverConfig;
    ///
    /// let config = SolverConfig::new(1e-12, 200);
    /// assert_eq!(config.max_iterations, 200);
    /// ```
    pub fn new(tolerance: T, max_iterations: usize) -> Self {
        assert!(tolerance > T::zero(), "tolerance must be positive");
        assert!(max_iterations > 0, "max_iterations must be > 0");
        Self {
            tolerance,
            max_iterations,
            ..Self::default()
        }
    }

    /// Replace the derivative floor.
    ///
    /// # Panics
    ///
    /// Panics if `min_derivative` is negative.
    pub fn with_min_derivative(mut self, min_derivative: T) -> Self {
        assert!(
            min_derivative >= T::zero(),
            "min_derivative must be non-negative"
        );
        self.min_derivative = min_derivative;
        self
    }

    /// Check the configuration without panicking.
    ///
    /// Returns a description of the first invalid field, if any. Used when the
    /// configuration comes from a file rather than from code.
    pub fn check(&self) -> Result<(), String> {
        if !(self.tolerance > T::zero()) || !self.tolerance.is_finite() {
            return Err("tolerance must be positive and finite".to_string());
        }
        if self.max_iterations == 0 {
            return Err("max_iterations must be > 0".to_string());
        }
        if !(self.min_derivative >= T::zero()) {
            return Err("min_derivative must be non-negative".to_string());
        }
        Ok(())
    }
}
