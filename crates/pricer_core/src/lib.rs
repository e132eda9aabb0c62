//! # pricer_core: Numeric Foundation for Implied Volatility Inversion
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core serves as the bottom layer of the workspace, providing:
//! - Root-finding solvers: Newton-Raphson and bisection (`math::solvers`)
//! - The generic floating-point trait used throughout (`traits::Float`)
//! - Solver error types: `SolverError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::math::solvers::{NewtonRaphsonSolver, SolverConfig};
//!
//! // Square root of 2 as the positive root of x² - 2
//! let solver = NewtonRaphsonSolver::new(SolverConfig::default());
//! let solution = solver
//!     .find_positive_root(|x: f64| x * x - 2.0, |x: f64| 2.0 * x, 1.0)
//!     .unwrap();
//! # assert!((solution.root - 2.0_f64.sqrt()).abs() < 1e-8);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `SolverConfig`, `RootSolution` and `SolverError`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod traits;
pub mod types;
