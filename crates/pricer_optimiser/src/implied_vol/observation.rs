//! Observed market quote to invert.

use num_traits::Float;
use pricer_models::models::ModelKind;

/// A market price together with the model it is quoted under.
///
/// # Examples
/// ```
/// use pricer_models::models::ModelKind;
/// use pricer_optimiser::implied_vol::MarketObservation;
///
/// let quote = MarketObservation::new(10.45_f64, ModelKind::BlackScholes);
/// assert_eq!(quote.market_price(), 10.45);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketObservation<T: Float> {
    market_price: T,
    model: ModelKind,
}

impl<T: Float> MarketObservation<T> {
    /// Creates an observation. The price is checked by the validator, not here.
    pub fn new(market_price: T, model: ModelKind) -> Self {
        Self {
            market_price,
            model,
        }
    }

    /// Returns the observed price.
    #[inline]
    pub fn market_price(&self) -> T {
        self.market_price
    }

    /// Returns the model the price is quoted under.
    #[inline]
    pub fn model(&self) -> ModelKind {
        self.model
    }
}
