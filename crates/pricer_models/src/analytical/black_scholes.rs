//! Black-Scholes pricing formula for European options.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! Volatility is the dimensionless lognormal volatility of returns.

use num_traits::Float;

use super::distributions::norm_cdf;
use super::formula::{is_degenerate, PricingFormula};
use crate::instruments::{OptionContract, OptionSide};

/// Black-Scholes model for European option pricing under lognormal dynamics.
///
/// A stateless formula: all contract terms arrive through
/// [`OptionContract`], the volatility as a separate argument.
///
/// # Examples
/// ```
/// use pricer_models::analytical::{BlackScholes, PricingFormula};
/// use pricer_models::instruments::{OptionContract, OptionSide};
///
/// let call = OptionContract::new(100.0_f64, 100.0, 1.0, 0.05, OptionSide::Call);
/// let put = call.with_side(OptionSide::Put);
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = BlackScholes.price(&call, 0.2) - BlackScholes.price(&put, 0.2)
///     - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlackScholes;

impl BlackScholes {
    /// Computes d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T).
    ///
    /// Only meaningful for `S, K, T, σ > 0`.
    #[inline]
    pub fn d1<T: Float>(contract: &OptionContract<T>, volatility: T) -> T {
        let half = T::from(0.5).unwrap();
        let expiry = contract.expiry();
        let log_moneyness = (contract.spot() / contract.strike()).ln();
        let drift = (contract.rate() + half * volatility * volatility) * expiry;
        (log_moneyness + drift) / (volatility * expiry.sqrt())
    }

    /// Computes d₂ = d₁ - σ√T.
    #[inline]
    pub fn d2<T: Float>(contract: &OptionContract<T>, volatility: T) -> T {
        Self::d1(contract, volatility) - volatility * contract.expiry().sqrt()
    }
}

impl<T: Float> PricingFormula<T> for BlackScholes {
    /// Black-Scholes price, clamped at zero.
    ///
    /// Returns zero for `T <= 0` or `σ <= 0`, and also for a non-positive
    /// spot or strike where the log-moneyness is undefined.
    fn price(&self, contract: &OptionContract<T>, volatility: T) -> T {
        let zero = T::zero();
        if is_degenerate(contract, volatility)
            || contract.spot() <= zero
            || contract.strike() <= zero
        {
            return zero;
        }

        let d1 = Self::d1(contract, volatility);
        let d2 = d1 - volatility * contract.expiry().sqrt();
        let spot = contract.spot();
        let discounted_strike = contract.discounted_strike();

        let value = match contract.side() {
            OptionSide::Call => spot * norm_cdf(d1) - discounted_strike * norm_cdf(d2),
            OptionSide::Put => discounted_strike * norm_cdf(-d2) - spot * norm_cdf(-d1),
        };

        value.max(zero)
    }
}
