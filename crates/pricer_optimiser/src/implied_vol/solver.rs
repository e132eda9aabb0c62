//! Implied volatility solver: validation, Newton phase, bisection fallback.
//!
//! ## Phases
//!
//! 1. **Validating**: [`InputValidator`] rejects bad terms and quotes outside
//!    the no-arbitrage bounds. No pricing call is made for a rejected quote.
//! 2. **Newton**: damped Newton-Raphson on `price(σ) - market_price` with
//!    finite-difference vega, starting from `initial_guess` times the model's
//!    volatility scale. A flat vega, a non-finite value or an exhausted
//!    budget hands over to bisection.
//! 3. **Bisection**: on `[bracket_low, bracket_high · scale]`, assuming the
//!    price increases with volatility. Exhausting this budget is the only
//!    way a validated quote ends unsolved.

use num_traits::Float;
use pricer_core::math::solvers::{BisectionSolver, NewtonRaphsonSolver};
use pricer_models::greeks::VegaEstimator;
use pricer_models::instruments::OptionContract;
use pricer_models::models::model_for;
use tracing::{debug, trace};

use super::config::ImpliedVolConfig;
use super::error::ImpliedVolError;
use super::observation::MarketObservation;
use super::solution::{volatility_or_nan, ImpliedVolSolution, SolveMethod, VolatilityResult};
use super::validation::InputValidator;

/// Implied volatility solver for European options.
///
/// Stateless between calls: one instance can solve any number of
/// contracts, from any number of threads.
///
/// # Examples
/// ```
/// use pricer_models::instruments::{OptionContract, OptionSide};
/// use pricer_models::models::ModelKind;
/// use pricer_optimiser::implied_vol::{ImpliedVolSolver, MarketObservation, SolveMethod};
///
/// let contract = OptionContract::new(100.0_f64, 100.0, 1.0, 0.05, OptionSide::Call);
/// let quote = MarketObservation::new(10.450583572185565, ModelKind::BlackScholes);
///
/// let solution = ImpliedVolSolver::with_defaults().solve(&contract, &quote).unwrap();
/// assert!((solution.volatility - 0.2).abs() < 1e-4);
/// assert_eq!(solution.method, SolveMethod::Newton);
/// ```
#[derive(Debug, Clone)]
pub struct ImpliedVolSolver<T: Float> {
    config: ImpliedVolConfig<T>,
    vega: VegaEstimator<T>,
}

impl<T: Float> ImpliedVolSolver<T> {
    /// Create a solver with the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if [`ImpliedVolConfig::check`] rejects the configuration.
    pub fn new(config: ImpliedVolConfig<T>) -> Self {
        if let Err(reason) = config.check() {
            panic!("invalid implied volatility configuration: {}", reason);
        }
        Self {
            vega: VegaEstimator::new(config.vega_bump),
            config,
        }
    }

    /// Create a solver with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(ImpliedVolConfig::default())
    }

    /// Returns a reference to the solver configuration.
    pub fn config(&self) -> &ImpliedVolConfig<T> {
        &self.config
    }

    /// Solve for the volatility that reproduces the observed price.
    ///
    /// # Returns
    ///
    /// * `Ok(ImpliedVolSolution)` - Volatility, converging phase and iteration counts
    /// * `Err(ImpliedVolError::InvalidInput)` - Bad contract terms or price
    /// * `Err(ImpliedVolError::ArbitrageViolation)` - Price outside the bounds
    /// * `Err(ImpliedVolError::NonConvergence)` - Both phases exhausted
    pub fn solve(
        &self,
        contract: &OptionContract<T>,
        observation: &MarketObservation<T>,
    ) -> VolatilityResult<T> {
        let market_price = observation.market_price();
        let kind = observation.model();

        if let Err(err) = InputValidator.validate(contract, market_price, kind) {
            debug!(model = %kind, reason = %err, "quote rejected before solving");
            return Err(err);
        }

        let model = model_for(kind);
        let scale = kind.volatility_scale(contract.spot());
        let objective = |sigma: T| model.price(contract, sigma) - market_price;

        // Newton phase
        let newton = NewtonRaphsonSolver::new(self.config.newton_config());
        let initial_guess = self.config.initial_guess * scale;

        let newton_iterations = match newton.find_positive_root(
            |sigma| {
                let diff = objective(sigma);
                trace!(phase = "newton", sigma = to_f64(sigma), diff = to_f64(diff));
                diff
            },
            |sigma| self.vega.estimate(&model, contract, sigma),
            initial_guess,
        ) {
            Ok(root) => {
                debug!(
                    model = %kind,
                    volatility = to_f64(root.root),
                    iterations = root.iterations,
                    "Newton converged"
                );
                return Ok(ImpliedVolSolution {
                    volatility: root.root,
                    method: SolveMethod::Newton,
                    newton_iterations: root.iterations,
                    bisection_iterations: 0,
                });
            }
            Err(err) => {
                debug!(model = %kind, reason = %err, "Newton stalled, falling back to bisection");
                err.iterations()
            }
        };

        // Bisection phase
        let bisection = BisectionSolver::new(self.config.bisection_config());
        let high = self.config.bracket_high * scale;

        match bisection.find_root(
            |sigma| {
                let diff = objective(sigma);
                trace!(phase = "bisection", sigma = to_f64(sigma), diff = to_f64(diff));
                diff
            },
            self.config.bracket_low,
            high,
        ) {
            Ok(root) => {
                debug!(
                    model = %kind,
                    volatility = to_f64(root.root),
                    iterations = root.iterations,
                    "bisection converged"
                );
                Ok(ImpliedVolSolution {
                    volatility: root.root,
                    method: SolveMethod::Bisection,
                    newton_iterations,
                    bisection_iterations: root.iterations,
                })
            }
            Err(err) => {
                debug!(model = %kind, reason = %err, "unsolved");
                Err(ImpliedVolError::NonConvergence {
                    newton_iterations,
                    bisection_iterations: err.iterations(),
                })
            }
        }
    }

    /// Solve and collapse any failure to NaN.
    pub fn solve_or_nan(&self, contract: &OptionContract<T>, observation: &MarketObservation<T>) -> T {
        volatility_or_nan(&self.solve(contract, observation))
    }
}

impl<T: Float> Default for ImpliedVolSolver<T> {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Implied volatility with default settings, NaN when unsolved.
///
/// This is the sentinel-valued entry point for callers that only need a
/// number per contract.
///
/// # Examples
/// ```
/// use pricer_models::instruments::{OptionContract, OptionSide};
/// use pricer_models::models::ModelKind;
/// use pricer_optimiser::implied_vol::{solve_implied_volatility, MarketObservation};
///
/// let contract = OptionContract::new(100.0_f64, 100.0, 1.0, 0.05, OptionSide::Call);
///
/// // Above the spot: no Black-Scholes volatility can produce it
/// let impossible = MarketObservation::new(120.0, ModelKind::BlackScholes);
/// assert!(solve_implied_volatility(&contract, &impossible).is_nan());
/// ```
pub fn solve_implied_volatility<T: Float>(
    contract: &OptionContract<T>,
    observation: &MarketObservation<T>,
) -> T {
    ImpliedVolSolver::with_defaults().solve_or_nan(contract, observation)
}

fn to_f64<T: Float>(value: T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}
