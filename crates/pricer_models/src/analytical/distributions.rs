//! Standard normal distribution functions.
//!
//! - `norm_cdf`: cumulative distribution function Φ
//! - `norm_pdf`: probability density function φ
//!
//! Both are generic over `T: Float`. The CDF evaluates erfc in double
//! precision through `statrs` and applies the reflection
//! `erfc(-x) = 2 - erfc(x)` itself, so `Φ(x) + Φ(-x) = 1` holds to rounding.
//! Put-call parity and the Bachelier forward symmetry inherit that exactness.

use num_traits::Float;

/// 1 / sqrt(2π)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Complementary error function, reflected for negative arguments.
#[inline]
fn erfc<T: Float>(x: T) -> T {
    let magnitude = x.abs().to_f64().unwrap_or(f64::NAN);
    let tail = statrs::function::erf::erfc(magnitude);
    let reflected = if x < T::zero() { 2.0 - tail } else { tail };
    T::from(reflected).unwrap_or_else(T::nan)
}

/// Standard normal cumulative distribution function.
///
/// Φ(x) = erfc(-x / √2) / 2, to double precision.
///
/// # Examples
/// ```
/// use pricer_models::analytical::distributions::norm_cdf;
///
/// assert_eq!(norm_cdf(0.0_f64), 0.5);
/// assert!(norm_cdf(-3.0_f64) < 0.01);
/// assert!(norm_cdf(3.0_f64) > 0.99);
/// ```
#[inline]
pub fn norm_cdf<T: Float>(x: T) -> T {
    let half = T::from(0.5).unwrap();
    half * erfc(-x / T::from(std::f64::consts::SQRT_2).unwrap())
}

/// Standard normal probability density function.
///
/// φ(x) = exp(-x² / 2) / √(2π)
///
/// # Examples
/// ```
/// use pricer_models::analytical::distributions::norm_pdf;
///
/// assert!((norm_pdf(0.0_f64) - 0.3989422804).abs() < 1e-10);
/// ```
#[inline]
pub fn norm_pdf<T: Float>(x: T) -> T {
    let half = T::from(0.5).unwrap();
    T::from(FRAC_1_SQRT_2PI).unwrap() * (-half * x * x).exp()
}
