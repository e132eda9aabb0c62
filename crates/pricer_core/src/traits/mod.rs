//! Core numeric traits.
//!
//! Every formula and solver in the workspace is generic over [`Float`], so the
//! same code runs in `f64` for production and `f32` for quick experiments.

/// Generic floating-point trait for numeric computations.
///
/// This trait provides a unified interface for the standard floating-point
/// types (f64, f32).
///
/// # Type Safety
/// All implementing types must support:
/// - Arithmetic operations (+, -, *, /)
/// - Comparisons (PartialOrd)
/// - Mathematical functions (exp, ln, sqrt, etc.)
/// - Copy and Clone semantics
///
/// # Examples
/// ```
/// use pricer_core::traits::Float;
///
/// fn compute_discount<T: Float>(rate: T, time: T) -> T {
///     (-rate * time).exp()
/// }
///
/// let discount_f64: f64 = compute_discount(0.05, 1.0);
/// assert!((discount_f64 - 0.951229).abs() < 1e-5);
/// ```
pub use num_traits::Float;
