//! Pre-solve input checks and no-arbitrage bounds.
//!
//! Everything here runs before the first pricing call, so a provably
//! unsolvable quote fails fast and without iterating.

use num_traits::Float;
use pricer_models::instruments::{OptionContract, OptionSide};
use pricer_models::models::ModelKind;

use super::error::ImpliedVolError;

/// Static no-arbitrage price range for one contract under one model.
///
/// `upper` is `None` when the model imposes no upper bound.
///
/// # Examples
/// ```
/// use pricer_models::instruments::{OptionContract, OptionSide};
/// use pricer_models::models::ModelKind;
/// use pricer_optimiser::implied_vol::no_arbitrage_bounds;
///
/// let call = OptionContract::new(100.0_f64, 100.0, 1.0, 0.0, OptionSide::Call);
/// let bounds = no_arbitrage_bounds(&call, ModelKind::BlackScholes);
/// assert_eq!(bounds.lower, 0.0);
/// assert_eq!(bounds.upper, Some(100.0));
/// assert!(no_arbitrage_bounds(&call, ModelKind::Bachelier).upper.is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PriceBounds<T> {
    /// Smallest admissible price (may be negative, in which case it never binds)
    pub lower: T,
    /// Largest admissible price, if any
    pub upper: Option<T>,
}

impl<T: Float> PriceBounds<T> {
    /// Whether `price` lies within the bounds, endpoints included.
    pub fn contains(&self, price: T) -> bool {
        price >= self.lower && self.upper.map_or(true, |upper| price <= upper)
    }
}

/// No-arbitrage bounds for `contract` under `model`.
///
/// | Model        | Side | Lower           | Upper      |
/// |--------------|------|-----------------|------------|
/// | BlackScholes | Call | S - K·e^(-rT)   | S          |
/// | BlackScholes | Put  | K·e^(-rT) - S   | K·e^(-rT)  |
/// | Bachelier    | Call | S - K·e^(-rT)   | none       |
/// | Bachelier    | Put  | K·e^(-rT) - S   | none       |
pub fn no_arbitrage_bounds<T: Float>(contract: &OptionContract<T>, model: ModelKind) -> PriceBounds<T> {
    let spot = contract.spot();
    let discounted_strike = contract.discounted_strike();

    let (lower, upper) = match contract.side() {
        OptionSide::Call => (spot - discounted_strike, spot),
        OptionSide::Put => (discounted_strike - spot, discounted_strike),
    };

    let upper = match model {
        ModelKind::BlackScholes => Some(upper),
        ModelKind::Bachelier => None,
    };

    PriceBounds { lower, upper }
}

/// Gatekeeper run before any solver iteration.
///
/// Rejects, in order:
/// 1. any non-finite S, K, T, r or market price (`InvalidInput`);
/// 2. `T <= 0`, `S <= 0`, `K <= 0` or a negative market price (`InvalidInput`);
/// 3. a market price outside [`no_arbitrage_bounds`] (`ArbitrageViolation`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputValidator;

impl InputValidator {
    /// Validate one quote.
    ///
    /// # Examples
    /// ```
    /// use pricer_models::instruments::{OptionContract, OptionSide};
    /// use pricer_models::models::ModelKind;
    /// use pricer_optimiser::implied_vol::{ImpliedVolError, InputValidator};
    ///
    /// let expired = OptionContract::new(100.0_f64, 100.0, 0.0, 0.05, OptionSide::Call);
    /// let result = InputValidator.validate(&expired, 5.0, ModelKind::BlackScholes);
    /// assert!(matches!(result, Err(ImpliedVolError::InvalidInput { field: "expiry", .. })));
    /// ```
    pub fn validate<T: Float>(
        &self,
        contract: &OptionContract<T>,
        market_price: T,
        model: ModelKind,
    ) -> Result<(), ImpliedVolError> {
        let zero = T::zero();
        let fields = [
            ("spot", contract.spot()),
            ("strike", contract.strike()),
            ("expiry", contract.expiry()),
            ("rate", contract.rate()),
            ("market_price", market_price),
        ];

        if let Some(&(field, value)) = fields.iter().find(|(_, value)| !value.is_finite()) {
            return Err(invalid(field, value));
        }

        if contract.expiry() <= zero {
            return Err(invalid("expiry", contract.expiry()));
        }
        if contract.spot() <= zero {
            return Err(invalid("spot", contract.spot()));
        }
        if contract.strike() <= zero {
            return Err(invalid("strike", contract.strike()));
        }
        if market_price < zero {
            return Err(invalid("market_price", market_price));
        }

        let bounds = no_arbitrage_bounds(contract, model);
        if !bounds.contains(market_price) {
            return Err(ImpliedVolError::ArbitrageViolation {
                price: to_f64(market_price),
                lower: to_f64(bounds.lower),
                upper: bounds.upper.map_or(f64::INFINITY, to_f64),
            });
        }

        Ok(())
    }
}

fn invalid<T: Float>(field: &'static str, value: T) -> ImpliedVolError {
    ImpliedVolError::InvalidInput {
        field,
        value: to_f64(value),
    }
}

fn to_f64<T: Float>(value: T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}
