//! Pricing model selection and dispatch.
//!
//! - [`ModelKind`]: the model named in input data, with its volatility units
//! - [`PricingModel`]: static dispatch enum over the closed-form formulas
//! - [`model_for`]: factory from kind to model

pub mod kind;
pub mod model_enum;

pub use kind::ModelKind;
pub use model_enum::{model_for, PricingModel};
