//! Monte Carlo square root estimation.
//!
//! Estimates `sqrt(x)` as the integral of its derivative:
//!
//! ```text
//! sqrt(x) = integral over [0, x] of 1 / (2 sqrt(t)) dt
//! ```
//!
//! The integrand is itself approximated with the fast inverse square root,
//! so no library square root appears anywhere in the estimate. The bit
//! trick contributes a deterministic bias of roughly 0.17% on top of the
//! sampling noise.

use crate::error::{EstimarError, Result};
use crate::isqrt::fast_inv_sqrt;
use crate::sampler::UniformSampler;

/// Default number of draws per square-root estimate.
pub const DEFAULT_SQRT_SAMPLES: usize = 100_000;

/// Estimates `sqrt(x)` with [`DEFAULT_SQRT_SAMPLES`] draws.
///
/// # Errors
///
/// Returns a domain error if `x` is negative or non-finite.
pub fn sqrt(x: f64, sampler: &mut UniformSampler) -> Result<f64> {
    sqrt_with_samples(x, DEFAULT_SQRT_SAMPLES, sampler)
}

/// Estimates `sqrt(x)` by averaging `0.5 * fast_inv_sqrt(t)` over `samples`
/// uniform draws on `[0, x]` and scaling by the interval length.
///
/// `x == 0` is a zero-length integration interval: the result is exactly
/// `0.0` and the sampler is not invoked.
///
/// # Errors
///
/// Returns a domain error if `x` is negative or non-finite, or if
/// `samples` is zero.
pub fn sqrt_with_samples(x: f64, samples: usize, sampler: &mut UniformSampler) -> Result<f64> {
    if !x.is_finite() || x < 0.0 {
        return Err(EstimarError::domain("x", x, ">= 0 and finite"));
    }
    if samples == 0 {
        return Err(EstimarError::domain("samples", 0.0, "> 0"));
    }
    if x == 0.0 {
        return Ok(0.0);
    }

    let draws = sampler.sample(0.0, x, samples);
    let mean = draws
        .iter()
        .map(|&t| 0.5 * f64::from(fast_inv_sqrt(t as f32)))
        .sum::<f64>()
        / samples as f64;

    Ok(x * mean)
}
