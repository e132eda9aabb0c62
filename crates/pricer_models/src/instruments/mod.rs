//! European option contract definitions.
//!
//! - [`OptionContract`]: spot, strike, maturity, rate and side as one value
//! - [`OptionSide`]: call or put, parseable from its canonical name
//! - [`ContractError`]: failures mapping raw strings onto typed fields

mod contract;
mod error;
mod side;

pub use contract::OptionContract;
pub use error::ContractError;
pub use side::OptionSide;
