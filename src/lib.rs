//! Estimar: Monte Carlo estimation of elementary numeric operations.
//!
//! Estimar approximates cosine, square root, vector magnitude, dot product,
//! and matrix multiplication by stochastic integration of each operation's
//! derivative, plus a bit-level fast inverse square root, instead of calling
//! the closed-form library routines. It is a didactic toolkit illustrating
//! how integration-based estimators trade exactness for statistical
//! convergence.
//!
//! # Quick Start
//!
//! ```
//! use estimar::prelude::*;
//!
//! let mut sampler = UniformSampler::seeded(42);
//!
//! // sqrt(4) as the integral of 1/(2 sqrt(t)) over [0, 4]
//! let root = sqrt(4.0, &mut sampler).unwrap();
//! assert!((root - 2.0).abs() < 0.1);
//!
//! // Dot product via the law of cosines over three magnitude estimates
//! let a = Vector::from_slice(&[1.0, 0.0]);
//! let b = Vector::from_slice(&[0.0, 1.0]);
//! let d = dot(&a, &b, &mut sampler).unwrap();
//! assert!(d.abs() < 0.3);
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: Core Vector and Matrix types
//! - [`sampler`]: Seedable uniform random sampling, injected per call
//! - [`isqrt`]: Fast inverse square root bit trick
//! - [`monte_carlo`]: The estimator chain (sqrt, cos, magnitude, dot, matmul)
//! - [`error`]: Error types and Result alias
//!
//! Every estimator is a pure function of its inputs and the injected
//! sampler; no component holds persistent state.

pub mod error;
pub mod isqrt;
pub mod monte_carlo;
pub mod prelude;
pub mod primitives;
pub mod sampler;

pub use error::{EstimarError, Result};
pub use primitives::{Matrix, Vector};
pub use sampler::UniformSampler;
