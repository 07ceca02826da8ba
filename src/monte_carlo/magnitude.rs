//! Monte Carlo Euclidean norm estimation.
//!
//! Reduces the vector to its exact sum of squares, then defers the square
//! root to the Monte Carlo square-root estimator. Only the root is
//! estimated; the reduction is exact arithmetic.

use crate::error::Result;
use crate::monte_carlo::sqrt::{sqrt_with_samples, DEFAULT_SQRT_SAMPLES};
use crate::primitives::Vector;
use crate::sampler::UniformSampler;

/// Estimates the Euclidean norm of `v` with [`DEFAULT_SQRT_SAMPLES`] draws.
///
/// # Errors
///
/// Returns a domain error if the sum of squares overflows to infinity.
pub fn magnitude(v: &Vector<f64>, sampler: &mut UniformSampler) -> Result<f64> {
    magnitude_with_samples(v, DEFAULT_SQRT_SAMPLES, sampler)
}

/// Estimates the Euclidean norm of `v` with an explicit sample count.
///
/// A zero (or empty) vector has a sum of squares of 0, which the square-root
/// estimator resolves to exactly `0.0` without invoking the sampler.
///
/// # Errors
///
/// Returns a domain error if the sum of squares overflows to infinity or
/// `samples` is zero.
pub fn magnitude_with_samples(
    v: &Vector<f64>,
    samples: usize,
    sampler: &mut UniformSampler,
) -> Result<f64> {
    sqrt_with_samples(v.sum_of_squares(), samples, sampler)
}
