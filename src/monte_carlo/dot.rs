//! Monte Carlo dot product estimation via the law of cosines.
//!
//! Recovers `v1 . v2` from the three magnitudes `|v1|`, `|v2|` and
//! `|v1 - v2|`:
//!
//! ```text
//! cos(theta) = (|v1|^2 + |v2|^2 - |v1 - v2|^2) / (2 |v1| |v2|)
//! v1 . v2    = |v1| |v2| cos(theta)
//! ```
//!
//! Algebraically this collapses to the polarization identity, but routing
//! it through the angle keeps every square root inside the Monte Carlo
//! magnitude estimator. The subtraction `v1 - v2` is exact.

use crate::error::{EstimarError, Result};
use crate::monte_carlo::magnitude::magnitude_with_samples;
use crate::monte_carlo::sqrt::DEFAULT_SQRT_SAMPLES;
use crate::primitives::Vector;
use crate::sampler::UniformSampler;

/// Estimates `v1 . v2` with [`DEFAULT_SQRT_SAMPLES`] draws per magnitude.
///
/// # Errors
///
/// Returns [`EstimarError::DimensionMismatch`] if the vectors have
/// different dimensions.
pub fn dot(v1: &Vector<f64>, v2: &Vector<f64>, sampler: &mut UniformSampler) -> Result<f64> {
    dot_with_samples(v1, v2, DEFAULT_SQRT_SAMPLES, sampler)
}

/// Estimates `v1 . v2` with an explicit sample count per magnitude.
///
/// If either vector has magnitude 0 (possible only for an exactly zero
/// vector, since the magnitude estimator returns 0 just for a zero sum of
/// squares), the law-of-cosines division is undefined; the dot product of
/// a zero vector with anything is 0, so the estimate is exactly `0.0`.
///
/// # Errors
///
/// Returns [`EstimarError::DimensionMismatch`] carrying both dimensions if
/// the vectors differ in length, or a domain error propagated from the
/// magnitude estimator.
pub fn dot_with_samples(
    v1: &Vector<f64>,
    v2: &Vector<f64>,
    samples: usize,
    sampler: &mut UniformSampler,
) -> Result<f64> {
    if v1.len() != v2.len() {
        return Err(EstimarError::dimension_mismatch("len", v1.len(), v2.len()));
    }

    let m1 = magnitude_with_samples(v1, samples, sampler)?;
    let m2 = magnitude_with_samples(v2, samples, sampler)?;
    if m1 == 0.0 || m2 == 0.0 {
        return Ok(0.0);
    }

    let diff = v1.sub(v2)?;
    let mdiff = magnitude_with_samples(&diff, samples, sampler)?;

    let cos_theta = (m1 * m1 + m2 * m2 - mdiff * mdiff) / (2.0 * m1 * m2);
    Ok(m1 * m2 * cos_theta)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_mismatch() {
        let mut sampler = UniformSampler::seeded(42);
        let a = Vector::from_slice(&[1.0, 2.0, 3.0]);
        let b = Vector::from_slice(&[1.0, 2.0]);
        let err = dot(&a, &b, &mut sampler).expect_err("unequal dimensions");
        assert!(matches!(err, EstimarError::DimensionMismatch { .. }));
        let msg = err.to_string();
        assert!(msg.contains('3') && msg.contains('2'), "message: {msg}");
    }

    #[test]
    fn test_zero_vector_is_exact_zero() {
        let mut sampler = UniformSampler::seeded(42);
        let zero = Vector::from_slice(&[0.0, 0.0]);
        let v = Vector::from_slice(&[1.0, 2.0]);
        assert_eq!(dot(&zero, &v, &mut sampler).expect("valid input"), 0.0);
        assert_eq!(dot(&v, &zero, &mut sampler).expect("valid input"), 0.0);
    }

    #[test]
    fn test_parallel_vectors_rough() {
        let mut sampler = UniformSampler::seeded(42);
        let a = Vector::from_slice(&[2.0, 0.0]);
        let b = Vector::from_slice(&[3.0, 0.0]);
        let est = dot_with_samples(&a, &b, 20_000, &mut sampler).expect("valid input");
        assert!((est - 6.0).abs() < 0.5, "estimate {est}");
    }

    #[test]
    fn test_seeded_deterministic() {
        let a = Vector::from_slice(&[0.1, 0.4, 0.9]);
        let b = Vector::from_slice(&[0.4, 0.1, 0.5]);
        let mut s1 = UniformSampler::seeded(11);
        let mut s2 = UniformSampler::seeded(11);
        let e1 = dot_with_samples(&a, &b, 5_000, &mut s1).expect("valid input");
        let e2 = dot_with_samples(&a, &b, 5_000, &mut s2).expect("valid input");
        assert_eq!(e1, e2);
    }
}
