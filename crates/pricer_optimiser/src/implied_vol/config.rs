//! Implied volatility solver configuration.
//!
//! Volatility-valued settings that depend on the model's units
//! (`initial_guess`, `bracket_high`) are levels multiplied by
//! [`ModelKind::volatility_scale`](pricer_models::models::ModelKind::volatility_scale):
//! as-is for Black-Scholes, times the spot for Bachelier.

use num_traits::Float;
use pricer_core::math::solvers::SolverConfig;

/// Configuration for implied volatility inversion.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`)
///
/// # Examples
///
/// ```
/// use pricer_optimiser::implied_vol::ImpliedVolConfig;
///
/// let config: ImpliedVolConfig<f64> = ImpliedVolConfig::default();
/// assert_eq!(config.tolerance, 1e-8);
/// assert_eq!(config.newton_max_iterations, 100);
///
/// let tight = ImpliedVolConfig::<f64>::builder()
///     .tolerance(1e-12)
///     .bisection_max_iterations(200)
///     .build();
/// assert!(tight.check().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ImpliedVolConfig<T: Float> {
    /// Price tolerance shared by both phases, and the bracket-width
    /// tolerance of the bisection phase.
    ///
    /// Default: 1e-8
    pub tolerance: T,

    /// Newton iteration budget.
    ///
    /// Default: 100
    pub newton_max_iterations: usize,

    /// Bisection iteration budget.
    ///
    /// Default: 100
    pub bisection_max_iterations: usize,

    /// Vega magnitude below which Newton hands over to bisection.
    ///
    /// Default: 1e-10
    pub min_vega: T,

    /// Finite-difference bump for vega.
    ///
    /// Default: 1e-4
    pub vega_bump: T,

    /// Newton starting level, scaled by the model's volatility scale.
    ///
    /// Default: 0.2
    pub initial_guess: T,

    /// Lower bisection bracket, in absolute volatility units.
    ///
    /// Default: 1e-6
    pub bracket_low: T,

    /// Upper bisection bracket level, scaled by the model's volatility scale.
    ///
    /// Default: 5.0
    pub bracket_high: T,
}

impl<T: Float> Default for ImpliedVolConfig<T> {
    fn default() -> Self {
        Self {
            tolerance: T::from(1e-8).unwrap(),
            newton_max_iterations: 100,
            bisection_max_iterations: 100,
            min_vega: T::from(1e-10).unwrap(),
            vega_bump: T::from(1e-4).unwrap(),
            initial_guess: T::from(0.2).unwrap(),
            bracket_low: T::from(1e-6).unwrap(),
            bracket_high: T::from(5.0).unwrap(),
        }
    }
}

impl<T: Float> ImpliedVolConfig<T> {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration builder for fluent construction.
    pub fn builder() -> ImpliedVolConfigBuilder<T> {
        ImpliedVolConfigBuilder::new()
    }

    /// Root-finder settings for the Newton phase.
    pub fn newton_config(&self) -> SolverConfig<T> {
        SolverConfig {
            tolerance: self.tolerance,
            max_iterations: self.newton_max_iterations,
            min_derivative: self.min_vega,
        }
    }

    /// Root-finder settings for the bisection phase.
    pub fn bisection_config(&self) -> SolverConfig<T> {
        SolverConfig {
            tolerance: self.tolerance,
            max_iterations: self.bisection_max_iterations,
            min_derivative: T::zero(),
        }
    }

    /// Check the configuration without panicking.
    ///
    /// Returns a description of the first invalid field, if any.
    pub fn check(&self) -> Result<(), String> {
        let zero = T::zero();
        let positive = |value: T| value > zero && value.is_finite();

        self.newton_config()
            .check()
            .map_err(|reason| format!("newton phase: {}", reason))?;
        if self.bisection_max_iterations == 0 {
            return Err("bisection_max_iterations must be > 0".to_string());
        }
        if !positive(self.vega_bump) {
            return Err("vega_bump must be positive and finite".to_string());
        }
        if !positive(self.initial_guess) {
            return Err("initial_guess must be positive and finite".to_string());
        }
        if !positive(self.bracket_low) || !positive(self.bracket_high) {
            return Err("bisection bracket must be positive and finite".to_string());
        }
        if self.bracket_low >= self.bracket_high {
            return Err("bracket_low must be below bracket_high".to_string());
        }
        Ok(())
    }
}

/// Builder for `ImpliedVolConfig`.
#[derive(Debug, Clone)]
pub struct ImpliedVolConfigBuilder<T: Float> {
    config: ImpliedVolConfig<T>,
}

impl<T: Float> ImpliedVolConfigBuilder<T> {
    /// Create a new builder with default values.
    pub fn new() -> Self {
        Self {
            config: ImpliedVolConfig::default(),
        }
    }

    /// Set the convergence tolerance.
    pub fn tolerance(mut self, tolerance: T) -> Self {
        self.config.tolerance = tolerance;
        self
    }

    /// Set the Newton iteration budget.
    pub fn newton_max_iterations(mut self, max_iterations: usize) -> Self {
        self.config.newton_max_iterations = max_iterations;
        self
    }

    /// Set the bisection iteration budget.
    pub fn bisection_max_iterations(mut self, max_iterations: usize) -> Self {
        self.config.bisection_max_iterations = max_iterations;
        self
    }

    /// Set the flat-vega threshold.
    pub fn min_vega(mut self, min_vega: T) -> Self {
        self.config.min_vega = min_vega;
        self
    }

    /// Set the vega bump.
    pub fn vega_bump(mut self, bump: T) -> Self {
        self.config.vega_bump = bump;
        self
    }

    /// Set the Newton starting level.
    pub fn initial_guess(mut self, level: T) -> Self {
        self.config.initial_guess = level;
        self
    }

    /// Set the bisection bracket.
    pub fn bracket(mut self, low: T, high: T) -> Self {
        self.config.bracket_low = low;
        self.config.bracket_high = high;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> ImpliedVolConfig<T> {
        self.config
    }
}

impl<T: Float> Default for ImpliedVolConfigBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
