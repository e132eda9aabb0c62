//! Contract error types.
//!
//! This module provides structured error handling for turning raw
//! strings into typed contract fields.

use thiserror::Error;

/// Contract-related errors.
///
/// Raised when a textual field (for example a CSV column) cannot be mapped
/// onto the typed contract inputs.
///
/// # Variants
/// - `UnknownSide`: Option side is neither `Call` nor `Put`
/// - `UnknownModel`: Model name is neither `BlackScholes` nor `Bachelier`
///
/// # Examples
/// ```
/// use pricer_models::instruments::ContractError;
///
/// let err = ContractError::UnknownSide("Straddle".to_string());
/// assert!(format!("{}", err).contains("Straddle"));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContractError {
    /// Option side string not recognised.
    #[error("Unknown option side: '{0}' (expected Call or Put)")]
    UnknownSide(String),

    /// Pricing model name not recognised.
    #[error("Unknown model: '{0}' (expected BlackScholes or Bachelier)")]
    UnknownModel(String),
}
