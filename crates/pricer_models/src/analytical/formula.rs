//! Common interface of the closed-form pricing formulas.

use num_traits::Float;

use crate::instruments::OptionContract;

/// A closed-form European option pricing formula.
///
/// Implementations are pure: the same contract and volatility always give
/// the same price, and the price is never negative. A trial volatility
/// `σ <= 0` or a maturity `T <= 0` yields exactly zero.
///
/// # Examples
/// ```
/// use pricer_models::analytical::{BlackScholes, PricingFormula};
/// use pricer_models::instruments::{OptionContract, OptionSide};
///
/// let contract = OptionContract::new(100.0_f64, 100.0, 1.0, 0.05, OptionSide::Call);
/// assert!(BlackScholes.price(&contract, 0.2) > 0.0);
/// assert_eq!(BlackScholes.price(&contract, 0.0), 0.0);
/// ```
pub trait PricingFormula<T: Float> {
    /// Theoretical price of `contract` at the given volatility.
    fn price(&self, contract: &OptionContract<T>, volatility: T) -> T;
}

/// Whether the degenerate zero-price rule applies.
#[inline]
pub(crate) fn is_degenerate<T: Float>(contract: &OptionContract<T>, volatility: T) -> bool {
    contract.expiry() <= T::zero() || volatility <= T::zero()
}
