//! Finite-difference vega.

use num_traits::Float;

use crate::analytical::PricingFormula;
use crate::instruments::OptionContract;

/// Central finite-difference estimator of ∂price/∂σ.
///
/// `vega(σ) = (price(σ + h) - price(σ - h)) / 2h` with a fixed bump `h`
/// (1e-4 by default). Works on any [`PricingFormula`], so both models share
/// one derivative path. A near-zero result is normal for contracts far from
/// the money and is left for the caller to interpret.
///
/// # Examples
/// ```
/// use pricer_models::greeks::VegaEstimator;
/// use pricer_models::instruments::{OptionContract, OptionSide};
/// use pricer_models::models::{model_for, ModelKind};
///
/// let contract = OptionContract::new(100.0_f64, 100.0, 1.0, 0.05, OptionSide::Call);
/// let vega = VegaEstimator::default().estimate(&model_for(ModelKind::BlackScholes), &contract, 0.2);
///
/// // ATM Black-Scholes vega ≈ S φ(d1) √T ≈ 37.5
/// assert!((vega - 37.52).abs() < 0.05);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VegaEstimator<T: Float> {
    bump: T,
}

impl<T: Float> Default for VegaEstimator<T> {
    fn default() -> Self {
        Self {
            bump: T::from(1e-4).unwrap(),
        }
    }
}

impl<T: Float> VegaEstimator<T> {
    /// Creates an estimator with the given volatility bump.
    ///
    /// # Panics
    /// Panics if `bump <= 0`.
    pub fn new(bump: T) -> Self {
        assert!(bump > T::zero(), "vega bump must be positive");
        Self { bump }
    }

    /// Returns the volatility bump `h`.
    #[inline]
    pub fn bump(&self) -> T {
        self.bump
    }

    /// Estimates vega of `contract` under `model` at `volatility`.
    #[inline]
    pub fn estimate<M>(&self, model: &M, contract: &OptionContract<T>, volatility: T) -> T
    where
        M: PricingFormula<T>,
    {
        let up = model.price(contract, volatility + self.bump);
        let down = model.price(contract, volatility - self.bump);
        (up - down) / (T::from(2.0).unwrap() * self.bump)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytical::{norm_pdf, Bachelier, BlackScholes};
    use crate::instruments::OptionSide;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_bump() {
        let estimator: VegaEstimator<f64> = VegaEstimator::default();
        assert_eq!(estimator.bump(), 1e-4);
    }

    #[test]
    #[should_panic(expected = "vega bump must be positive")]
    fn test_zero_bump_panics() {
        let _ = VegaEstimator::new(0.0_f64);
    }

    #[test]
    fn test_black_scholes_vega_matches_closed_form() {
        let c = OptionContract::new(100.0_f64, 110.0, 0.5, 0.03, OptionSide::Put);
        let sigma = 0.25;
        let vega = VegaEstimator::default().estimate(&BlackScholes, &c, sigma);
        let expected = 100.0 * norm_pdf(BlackScholes::d1(&c, sigma)) * 0.5_f64.sqrt();
        assert_relative_eq!(vega, expected, epsilon = 1e-3);
    }

    #[test]
    fn test_bachelier_vega_matches_closed_form() {
        // r = 0: vega = √T φ(d)
        let c = OptionContract::new(100.0_f64, 105.0, 2.0, 0.0, OptionSide::Call);
        let sigma = 15.0;
        let vega = VegaEstimator::default().estimate(&Bachelier, &c, sigma);
        let d = (100.0 - 105.0) / (sigma * 2.0_f64.sqrt());
        assert_relative_eq!(vega, 2.0_f64.sqrt() * norm_pdf(d), epsilon = 1e-6);
    }

    #[test]
    fn test_far_out_of_the_money_vega_is_flat() {
        let c = OptionContract::new(100.0_f64, 200.0, 0.1, 0.05, OptionSide::Call);
        let vega = VegaEstimator::default().estimate(&BlackScholes, &c, 0.2);
        assert!(vega.abs() < 1e-10);
    }

    #[test]
    fn test_vega_at_tiny_volatility_uses_zero_price_below() {
        // σ - h < 0 prices at zero by the degenerate rule
        let c = OptionContract::new(100.0_f64, 100.0, 1.0, 0.0, OptionSide::Call);
        let estimator = VegaEstimator::default();
        let vega = estimator.estimate(&BlackScholes, &c, 5e-5);
        let expected = BlackScholes.price(&c, 1.5e-4) / 2e-4;
        assert_relative_eq!(vega, expected, epsilon = 1e-12);
    }
}
