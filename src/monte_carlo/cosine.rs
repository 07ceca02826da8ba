//! Monte Carlo cosine estimation.
//!
//! Estimates `cos(x)` from the identity:
//!
//! ```text
//! cos(x) = 1 + integral over [0, x] of -sin(t) dt
//! ```
//!
//! The integrand uses the exact `f64::sin` — estimating sine would in turn
//! require cosine, so sine stays an external primitive here.

use crate::error::{EstimarError, Result};
use crate::sampler::UniformSampler;

/// Default number of draws per cosine estimate.
pub const DEFAULT_COS_SAMPLES: usize = 1_000;

/// Estimates `cos(x)` with [`DEFAULT_COS_SAMPLES`] draws.
///
/// # Errors
///
/// Returns a domain error if `x` is non-finite.
pub fn cos(x: f64, sampler: &mut UniformSampler) -> Result<f64> {
    cos_with_samples(x, DEFAULT_COS_SAMPLES, sampler)
}

/// Estimates `cos(x)` by averaging `-sin(t)` over `samples` uniform draws
/// on the signed interval from 0 to `x`, scaling by `x`, and adding 1.
///
/// Negative `x` reverses the interval; the draws then fall in `[x, 0]` and
/// the scaling by the (negative) `x` negates the reversed integral, so the
/// estimate remains consistent for any finite `x`. `x == 0` is a
/// zero-length interval: the result is exactly `1.0` and the sampler is
/// not invoked.
///
/// # Errors
///
/// Returns a domain error if `x` is non-finite or `samples` is zero.
pub fn cos_with_samples(x: f64, samples: usize, sampler: &mut UniformSampler) -> Result<f64> {
    if !x.is_finite() {
        return Err(EstimarError::domain("x", x, "finite"));
    }
    if samples == 0 {
        return Err(EstimarError::domain("samples", 0.0, "> 0"));
    }
    if x == 0.0 {
        return Ok(1.0);
    }

    let draws = sampler.sample(0.0, x, samples);
    let mean = draws.iter().map(|&t| -t.sin()).sum::<f64>() / samples as f64;

    Ok(1.0 + x * mean)
}
