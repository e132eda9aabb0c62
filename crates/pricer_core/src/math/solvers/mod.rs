//! Root-finding solvers for numerical computation.
//!
//! This module provides the one-dimensional root finders used for implied
//! volatility inversion and similar inverse problems.
//!
//! ## Available Solvers
//!
//! - [`NewtonRaphsonSolver`]: Damped Newton iteration confined to positive
//!   roots, for quantities such as volatility
//! - [`BisectionSolver`]: Bracketing fallback for increasing functions
//!
//! ## Configuration
//!
//! All solvers use [`SolverConfig`] for configuring:
//! - `tolerance`: Convergence tolerance (default: 1e-8)
//! - `max_iterations`: Maximum iteration count (default: 100)
//! - `min_derivative`: Newton flat-derivative guard (default: 1e-10)
//!
//! ## Examples
//!
//! ```
//! use pricer_core::math::solvers::{BisectionSolver, NewtonRaphsonSolver, SolverConfig};
//!
//! let f = |x: f64| x * x - 2.0;
//! let f_prime = |x: f64| 2.0 * x;
//!
//! let newton = NewtonRaphsonSolver::new(SolverConfig::default());
//! let fast = newton.find_positive_root(f, f_prime, 1.0).unwrap();
//!
//! let bisection = BisectionSolver::new(SolverConfig::default());
//! let slow = bisection.find_root(f, 0.0, 2.0).unwrap();
//!
//! assert!((fast.root - slow.root).abs() < 1e-7);
//! assert!(fast.iterations < slow.iterations);
//! ```

mod bisection;
mod config;
mod newton_raphson;

// Re-export public types at module level
pub use bisection::BisectionSolver;
pub use config::SolverConfig;
pub use newton_raphson::NewtonRaphsonSolver;

/// A converged root together with the iterations spent finding it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RootSolution<T> {
    /// Location of the root.
    pub root: T,
    /// Iterations consumed, counting the one that met the stopping criterion.
    pub iterations: usize,
}
