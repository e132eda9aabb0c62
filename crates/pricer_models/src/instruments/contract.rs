//! European option contract parameters.

use num_traits::Float;

use super::side::OptionSide;

/// A European option contract: spot, strike, maturity, rate and side.
///
/// Construction performs no validation. A contract with `T = 0` or a
/// negative strike is representable so that it can reach the implied
/// volatility validator, which is the single place where such inputs are
/// rejected. Pricing formulas treat `T <= 0` as a degenerate zero price.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`)
///
/// # Examples
/// ```
/// use pricer_models::instruments::{OptionContract, OptionSide};
///
/// let contract = OptionContract::new(100.0_f64, 100.0, 1.0, 0.05, OptionSide::Call);
/// assert_eq!(contract.spot(), 100.0);
/// assert!((contract.discount_factor() - (-0.05_f64).exp()).abs() < 1e-15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionContract<T: Float> {
    spot: T,
    strike: T,
    expiry: T,
    rate: T,
    side: OptionSide,
}

impl<T: Float> OptionContract<T> {
    /// Creates a contract.
    ///
    /// # Arguments
    /// * `spot` - Underlying spot price (S)
    /// * `strike` - Strike price (K)
    /// * `expiry` - Time to maturity in years (T)
    /// * `rate` - Continuously compounded risk-free rate (r), any sign
    /// * `side` - Call or put
    pub fn new(spot: T, strike: T, expiry: T, rate: T, side: OptionSide) -> Self {
        Self {
            spot,
            strike,
            expiry,
            rate,
            side,
        }
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> T {
        self.strike
    }

    /// Returns the time to maturity in years.
    #[inline]
    pub fn expiry(&self) -> T {
        self.expiry
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Returns the option side.
    #[inline]
    pub fn side(&self) -> OptionSide {
        self.side
    }

    /// Same contract on the other side (call becomes put and vice versa).
    pub fn with_side(self, side: OptionSide) -> Self {
        Self { side, ..self }
    }

    /// Discount factor `e^{-rT}`.
    #[inline]
    pub fn discount_factor(&self) -> T {
        (-self.rate * self.expiry).exp()
    }

    /// Forward price `S e^{rT}`.
    #[inline]
    pub fn forward(&self) -> T {
        self.spot * (self.rate * self.expiry).exp()
    }

    /// Present value of the strike, `K e^{-rT}`.
    #[inline]
    pub fn discounted_strike(&self) -> T {
        self.strike * self.discount_factor()
    }

    /// Whether every numeric field is finite.
    pub fn is_finite(&self) -> bool {
        self.spot.is_finite()
            && self.strike.is_finite()
            && self.expiry.is_finite()
            && self.rate.is_finite()
    }
}
