//! Option side (call or put).

use std::fmt;
use std::str::FromStr;

use super::error::ContractError;

/// Side of a European option.
///
/// # Variants
/// - `Call`: right to buy at the strike, payoff max(S - K, 0)
/// - `Put`: right to sell at the strike, payoff max(K - S, 0)
///
/// # Examples
/// ```
/// use pricer_models::instruments::OptionSide;
///
/// let side: OptionSide = " call ".parse().unwrap();
/// assert_eq!(side, OptionSide::Call);
/// assert_eq!(side.to_string(), "Call");
///
/// assert!("Straddle".parse::<OptionSide>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OptionSide {
    /// Call option: max(S - K, 0)
    Call,
    /// Put option: max(K - S, 0)
    Put,
}

impl OptionSide {
    /// Returns whether this is a call.
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, OptionSide::Call)
    }

    /// Returns whether this is a put.
    #[inline]
    pub fn is_put(&self) -> bool {
        matches!(self, OptionSide::Put)
    }

    /// The opposite side.
    #[inline]
    pub fn flip(&self) -> Self {
        match self {
            OptionSide::Call => OptionSide::Put,
            OptionSide::Put => OptionSide::Call,
        }
    }

    /// Canonical name, as written in input and output files.
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionSide::Call => "Call",
            OptionSide::Put => "Put",
        }
    }
}

impl fmt::Display for OptionSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptionSide {
    type Err = ContractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("call") {
            Ok(OptionSide::Call)
        } else if trimmed.eq_ignore_ascii_case("put") {
            Ok(OptionSide::Put)
        } else {
            Err(ContractError::UnknownSide(s.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonical_names() {
        assert_eq!("Call".parse::<OptionSide>().unwrap(), OptionSide::Call);
        assert_eq!("Put".parse::<OptionSide>().unwrap(), OptionSide::Put);
    }

    #[test]
    fn test_parse_is_case_insensitive_and_trimmed() {
        assert_eq!("CALL".parse::<OptionSide>().unwrap(), OptionSide::Call);
        assert_eq!("  put\t".parse::<OptionSide>().unwrap(), OptionSide::Put);
    }

    #[test]
    fn test_parse_unknown_side_is_error() {
        assert_eq!(
            "".parse::<OptionSide>().unwrap_err(),
            ContractError::UnknownSide(String::new())
        );
        assert!("C".parse::<OptionSide>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for side in [OptionSide::Call, OptionSide::Put] {
            assert_eq!(side.to_string().parse::<OptionSide>().unwrap(), side);
        }
    }

    #[test]
    fn test_flip_and_predicates() {
        assert_eq!(OptionSide::Call.flip(), OptionSide::Put);
        assert_eq!(OptionSide::Put.flip(), OptionSide::Call);
        assert!(OptionSide::Call.is_call());
        assert!(!OptionSide::Call.is_put());
        assert!(OptionSide::Put.is_put());
    }
}
