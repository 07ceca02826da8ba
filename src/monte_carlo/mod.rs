//! Monte Carlo estimators for elementary numeric operations.
//!
//! Each operation is estimated by integrating its derivative with uniform
//! random sampling rather than calling the closed-form routine:
//!
//! - [`sqrt`]: `sqrt(x) = integral of 1/(2 sqrt(t)) over [0, x]`, with the
//!   integrand itself approximated by the fast inverse square root.
//! - [`cos`]: `cos(x) = 1 + integral of -sin(t) over [0, x]`.
//! - [`magnitude`]: exact sum of squares, square root estimated.
//! - [`dot`]: recovered from three magnitude estimates via the law of
//!   cosines.
//! - [`matmul`]: one dot-product estimate per output cell.
//!
//! Every call draws fresh samples from an explicitly injected
//! [`UniformSampler`](crate::sampler::UniformSampler); estimates converge
//! toward the exact values as the sample count grows, with estimator
//! variance shrinking as O(1/sqrt(N)).

mod cosine;
mod dot;
mod magnitude;
mod matmul;
mod sqrt;

pub use cosine::{cos, cos_with_samples, DEFAULT_COS_SAMPLES};
pub use dot::{dot, dot_with_samples};
pub use magnitude::{magnitude, magnitude_with_samples};
pub use matmul::{matmul, matmul_with_samples};
pub use sqrt::{sqrt, sqrt_with_samples, DEFAULT_SQRT_SAMPLES};
