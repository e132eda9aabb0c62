//! Bachelier (normal) pricing formula for European options.
//!
//! The underlying follows arithmetic Brownian motion under the risk-neutral
//! measure, so volatility is quoted in price units on the scale of S.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = e^(-rT)·[(F - K)·N(d) + D·φ(d)]
//! **Put Price**: P = e^(-rT)·[(K - F)·N(-d) + D·φ(d)]
//!
//! Where:
//! - F = S·e^(rT)
//! - D = σ·√((e^(2rT) - 1) / (2r)), and D = σ·√T as r → 0
//! - d = (F - K) / D

use num_traits::Float;

use super::distributions::{norm_cdf, norm_pdf};
use super::formula::{is_degenerate, PricingFormula};
use crate::instruments::{OptionContract, OptionSide};

/// Rates below this magnitude use the r → 0 limit of the spread scale.
const ZERO_RATE_THRESHOLD: f64 = 1e-12;

/// Bachelier (normal) model for European option pricing.
///
/// # Examples
/// ```
/// use pricer_models::analytical::{Bachelier, PricingFormula};
/// use pricer_models::instruments::{OptionContract, OptionSide};
///
/// // ATM at zero rate: C = σ√T·φ(0)
/// let call = OptionContract::new(100.0_f64, 100.0, 1.0, 0.0, OptionSide::Call);
/// let price = Bachelier.price(&call, 20.0);
/// assert!((price - 20.0 * 0.3989422804).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bachelier;

impl Bachelier {
    /// Standard deviation D of the terminal forward-measure price.
    ///
    /// Uses `exp_m1` so that small non-zero rates stay accurate, and the
    /// exact limit `σ√T` once `|r|` is below 1e-12. There is no division by
    /// `2r` at or near zero rate.
    #[inline]
    pub fn spread_scale<T: Float>(contract: &OptionContract<T>, volatility: T) -> T {
        let rate = contract.rate();
        let expiry = contract.expiry();

        let variance_time = if rate.abs() < T::from(ZERO_RATE_THRESHOLD).unwrap() {
            expiry
        } else {
            let two_rate = T::from(2.0).unwrap() * rate;
            (two_rate * expiry).exp_m1() / two_rate
        };

        volatility * variance_time.sqrt()
    }
}

impl<T: Float> PricingFormula<T> for Bachelier {
    /// Bachelier price, clamped at zero. Zero for `T <= 0` or `σ <= 0`.
    fn price(&self, contract: &OptionContract<T>, volatility: T) -> T {
        let zero = T::zero();
        if is_degenerate(contract, volatility) {
            return zero;
        }

        let forward = contract.forward();
        let strike = contract.strike();
        let spread = Self::spread_scale(contract, volatility);
        let d = (forward - strike) / spread;
        let time_value = spread * norm_pdf(d);

        let undiscounted = match contract.side() {
            OptionSide::Call => (forward - strike) * norm_cdf(d) + time_value,
            OptionSide::Put => (strike - forward) * norm_cdf(-d) + time_value,
        };

        (contract.discount_factor() * undiscounted).max(zero)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn contract(spot: f64, strike: f64, expiry: f64, rate: f64, side: OptionSide) -> OptionContract<f64> {
        OptionContract::new(spot, strike, expiry, rate, side)
    }

    #[test]
    fn test_atm_zero_rate_closed_form() {
        let c = contract(100.0, 100.0, 4.0, 0.0, OptionSide::Call);
        // D = 15 * 2 = 30, price = 30 φ(0)
        assert_relative_eq!(Bachelier.price(&c, 15.0), 30.0 * 0.3989422804014327, epsilon = 1e-9);
    }

    #[test]
    fn test_out_of_the_money_reference_values() {
        let call = contract(100.0, 110.0, 0.5, 0.02, OptionSide::Call);
        assert_relative_eq!(Bachelier.price(&call, 15.0), 1.173569826434708, epsilon = 1e-10);

        let put = contract(100.0, 70.0, 0.5, 0.02, OptionSide::Put);
        assert_relative_eq!(Bachelier.price(&put, 15.0), 0.0055501034649401365, epsilon = 1e-10);
    }

    #[test]
    fn test_spread_scale_limit_at_zero_rate() {
        let c = contract(100.0, 100.0, 2.0, 0.0, OptionSide::Call);
        assert_eq!(Bachelier::spread_scale(&c, 10.0), 10.0 * 2.0_f64.sqrt());
    }

    #[test]
    fn test_spread_scale_non_zero_rate() {
        let c = contract(100.0, 100.0, 1.0, 0.05, OptionSide::Call);
        let expected = 20.0 * ((0.1_f64.exp() - 1.0) / 0.1).sqrt();
        assert_relative_eq!(Bachelier::spread_scale(&c, 20.0), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_spread_scale_negative_rate() {
        let c = contract(100.0, 100.0, 1.0, -0.01, OptionSide::Call);
        let expected = 20.0 * ((1.0 - (-0.02_f64).exp()) / 0.02).sqrt();
        assert_relative_eq!(Bachelier::spread_scale(&c, 20.0), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_continuity_near_zero_rate() {
        for side in [OptionSide::Call, OptionSide::Put] {
            for (strike, expiry) in [(100.0, 1.0), (90.0, 0.5), (120.0, 5.0)] {
                let at_zero = Bachelier.price(&contract(100.0, strike, expiry, 0.0, side), 20.0);
                let tiny = Bachelier.price(&contract(100.0, strike, expiry, 1e-9, side), 20.0);
                let tiny_neg = Bachelier.price(&contract(100.0, strike, expiry, -1e-9, side), 20.0);
                assert!((at_zero - tiny).abs() < 1e-6);
                assert!((at_zero - tiny_neg).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn test_continuity_across_threshold() {
        let below = Bachelier.price(&contract(100.0, 95.0, 1.0, 5e-13, OptionSide::Call), 20.0);
        let above = Bachelier.price(&contract(100.0, 95.0, 1.0, 5e-12, OptionSide::Call), 20.0);
        assert!((below - above).abs() < 1e-9);
    }

    #[test]
    fn test_zero_volatility_and_expiry_give_zero() {
        for side in [OptionSide::Call, OptionSide::Put] {
            let c = contract(100.0, 50.0, 1.0, 0.05, side);
            assert_eq!(Bachelier.price(&c, 0.0), 0.0);
            let expired = contract(100.0, 50.0, 0.0, 0.05, side);
            assert_eq!(Bachelier.price(&expired, 20.0), 0.0);
        }
    }

    #[test]
    fn test_price_increases_with_volatility() {
        let p = contract(100.0, 90.0, 1.0, 0.03, OptionSide::Put);
        let mut previous = 0.0;
        for i in 1..=50 {
            let price = Bachelier.price(&p, i as f64);
            assert!(price > previous);
            previous = price;
        }
    }

    proptest! {
        #[test]
        fn prop_forward_symmetry_at_zero_rate(
            spot in 50.0_f64..150.0,
            strike in 50.0_f64..150.0,
            expiry in 0.1_f64..3.0,
            sigma in 1.0_f64..50.0,
        ) {
            let call = Bachelier.price(&contract(spot, strike, expiry, 0.0, OptionSide::Call), sigma);
            let put = Bachelier.price(&contract(strike, spot, expiry, 0.0, OptionSide::Put), sigma);
            prop_assert!((call - put).abs() < 1e-6, "symmetry gap {}", call - put);
        }

        #[test]
        fn prop_put_call_parity(
            spot in 50.0_f64..150.0,
            moneyness in 0.8_f64..1.2,
            expiry in 0.25_f64..2.0,
            rate in -0.02_f64..0.08,
            sigma in 5.0_f64..40.0,
        ) {
            let call = contract(spot, spot * moneyness, expiry, rate, OptionSide::Call);
            let put = call.with_side(OptionSide::Put);
            let lhs = Bachelier.price(&call, sigma) - Bachelier.price(&put, sigma);
            let rhs = spot - call.discounted_strike();
            prop_assert!((lhs - rhs).abs() < 1e-6, "parity gap {}", lhs - rhs);
        }
    }
}
