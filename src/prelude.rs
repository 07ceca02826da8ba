//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use estimar::prelude::*;
//! ```

pub use crate::error::{EstimarError, Result};
pub use crate::isqrt::{fast_inv_sqrt, fast_inv_sqrt_all};
pub use crate::monte_carlo::{cos, dot, magnitude, matmul, sqrt};
pub use crate::primitives::{Matrix, Vector};
pub use crate::sampler::UniformSampler;
