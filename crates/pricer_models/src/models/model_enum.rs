//! Static dispatch enum for the closed-form pricing models.
//!
//! `PricingModel` wraps each formula in a variant and dispatches with
//! `match`, so callers hold a concrete, `Copy` value instead of a trait
//! object. [`model_for`] maps a [`ModelKind`] to its variant.
//!
//! ## Example
//!
//! ```
//! use pricer_models::instruments::{OptionContract, OptionSide};
//! use pricer_models::models::{model_for, ModelKind};
//!
//! let model = model_for(ModelKind::BlackScholes);
//! let contract = OptionContract::new(100.0_f64, 100.0, 1.0, 0.05, OptionSide::Call);
//!
//! assert_eq!(model.kind(), ModelKind::BlackScholes);
//! assert!((model.price(&contract, 0.2) - 10.4506).abs() < 1e-3);
//! ```

use pricer_core::traits::Float;

use super::kind::ModelKind;
use crate::analytical::{Bachelier, BlackScholes, PricingFormula};
use crate::instruments::OptionContract;

/// Static dispatch enum over the supported pricing formulas.
///
/// Use this instead of `Box<dyn PricingFormula<T>>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PricingModel {
    /// Black-Scholes (lognormal)
    BlackScholes(BlackScholes),
    /// Bachelier (normal)
    Bachelier(Bachelier),
}

/// Build the pricing model for a kind.
///
/// Pure and cheap: models are stateless, so this is called once per solve.
#[inline]
pub fn model_for(kind: ModelKind) -> PricingModel {
    match kind {
        ModelKind::BlackScholes => PricingModel::BlackScholes(BlackScholes),
        ModelKind::Bachelier => PricingModel::Bachelier(Bachelier),
    }
}

impl PricingModel {
    /// The kind this model was built from.
    pub fn kind(&self) -> ModelKind {
        match self {
            PricingModel::BlackScholes(_) => ModelKind::BlackScholes,
            PricingModel::Bachelier(_) => ModelKind::Bachelier,
        }
    }

    /// Get the model name.
    pub fn model_name(&self) -> &'static str {
        self.kind().as_str()
    }

    /// Theoretical price of `contract` at `volatility`.
    ///
    /// Inherent shorthand for [`PricingFormula::price`].
    #[inline]
    pub fn price<T: Float>(&self, contract: &OptionContract<T>, volatility: T) -> T {
        PricingFormula::price(self, contract, volatility)
    }
}

impl From<ModelKind> for PricingModel {
    fn from(kind: ModelKind) -> Self {
        model_for(kind)
    }
}

impl<T: Float> PricingFormula<T> for PricingModel {
    #[inline]
    fn price(&self, contract: &OptionContract<T>, volatility: T) -> T {
        match self {
            PricingModel::BlackScholes(m) => m.price(contract, volatility),
            PricingModel::Bachelier(m) => m.price(contract, volatility),
        }
    }
}
