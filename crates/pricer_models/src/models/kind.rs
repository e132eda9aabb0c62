//! Model selector.

use std::fmt;
use std::str::FromStr;

use num_traits::Float;

use crate::instruments::ContractError;

/// Which closed-form model to price or invert with.
///
/// The kind also fixes the units of volatility: Black-Scholes volatility is
/// dimensionless, Bachelier volatility is in price units on the scale of the
/// spot.
///
/// # Examples
/// ```
/// use pricer_models::models::ModelKind;
///
/// let kind: ModelKind = "bachelier".parse().unwrap();
/// assert_eq!(kind, ModelKind::Bachelier);
/// assert_eq!(kind.to_string(), "Bachelier");
/// assert_eq!(kind.volatility_scale(250.0_f64), 250.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ModelKind {
    /// Lognormal dynamics
    BlackScholes,
    /// Normal (arithmetic) dynamics
    Bachelier,
}

impl ModelKind {
    /// All supported kinds.
    pub const ALL: [ModelKind; 2] = [ModelKind::BlackScholes, ModelKind::Bachelier];

    /// Canonical name, as written in input and output files.
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelKind::BlackScholes => "BlackScholes",
            ModelKind::Bachelier => "Bachelier",
        }
    }

    /// Factor converting a dimensionless volatility level into this model's
    /// units: 1 for Black-Scholes, the spot for Bachelier.
    ///
    /// Initial guesses and bisection brackets are expressed as multiples
    /// of this scale.
    #[inline]
    pub fn volatility_scale<T: Float>(&self, spot: T) -> T {
        match self {
            ModelKind::BlackScholes => T::one(),
            ModelKind::Bachelier => spot,
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelKind {
    type Err = ContractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        ModelKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ContractError::UnknownModel(s.to_string()))
    }
}
