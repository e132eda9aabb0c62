//! Numerical routines shared by the pricing and calibration layers.
//!
//! - `solvers`: Newton-Raphson and bisection root finders

pub mod solvers;
