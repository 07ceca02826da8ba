//! Monte Carlo matrix multiplication.
//!
//! Each output cell `(i, j)` is an independent dot-product estimate of row
//! `i` of the left matrix and column `j` of the right matrix. Cells are
//! computed sequentially from a single injected sampler; the inputs are
//! never mutated.

use crate::error::{EstimarError, Result};
use crate::monte_carlo::dot::dot_with_samples;
use crate::monte_carlo::sqrt::DEFAULT_SQRT_SAMPLES;
use crate::primitives::Matrix;
use crate::sampler::UniformSampler;

/// Estimates `m1 * m2` with [`DEFAULT_SQRT_SAMPLES`] draws per magnitude.
///
/// # Errors
///
/// Returns [`EstimarError::DimensionMismatch`] if `m1`'s column count
/// differs from `m2`'s row count.
pub fn matmul(
    m1: &Matrix<f64>,
    m2: &Matrix<f64>,
    sampler: &mut UniformSampler,
) -> Result<Matrix<f64>> {
    matmul_with_samples(m1, m2, DEFAULT_SQRT_SAMPLES, sampler)
}

/// Estimates the product of an R1 x C1 matrix and an R2 x C2 matrix,
/// producing an R1 x C2 matrix of per-cell dot-product estimates.
///
/// # Errors
///
/// Returns [`EstimarError::DimensionMismatch`] if the inner dimensions are
/// incompatible (`C1 != R2`), or a domain error propagated from the
/// dot-product estimator.
pub fn matmul_with_samples(
    m1: &Matrix<f64>,
    m2: &Matrix<f64>,
    samples: usize,
    sampler: &mut UniformSampler,
) -> Result<Matrix<f64>> {
    if m1.n_cols() != m2.n_rows() {
        return Err(EstimarError::DimensionMismatch {
            expected: format!("inner dimension {}", m1.n_cols()),
            actual: format!("{}x{}", m2.n_rows(), m2.n_cols()),
        });
    }

    let mut out = Matrix::zeros(m1.n_rows(), m2.n_cols());
    for i in 0..m1.n_rows() {
        let row = m1.row(i);
        for j in 0..m2.n_cols() {
            let col = m2.column(j);
            let cell = dot_with_samples(&row, &col, samples, sampler)?;
            out.set(i, j, cell);
        }
    }

    Ok(out)
}
