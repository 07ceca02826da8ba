//! Uniform random sampling for Monte Carlo estimators.
//!
//! The sampler is an explicit handle passed into every estimation call,
//! so tests can seed it for reproducible results. There is no process-wide
//! random state anywhere in the crate.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of independent uniform draws on an interval.
///
/// # Examples
///
/// ```
/// use estimar::sampler::UniformSampler;
///
/// let mut sampler = UniformSampler::seeded(42);
/// let draws = sampler.sample(0.0, 4.0, 100);
/// assert_eq!(draws.len(), 100);
/// assert!(draws.iter().all(|&t| (0.0..4.0).contains(&t)));
/// ```
#[derive(Debug, Clone)]
pub struct UniformSampler {
    rng: StdRng,
}

impl UniformSampler {
    /// Create a sampler with a fixed seed for reproducible draws.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a sampler seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Draw `count` independent uniforms on the interval between `low` and
    /// `high`.
    ///
    /// The interval may be reversed (`low > high`); draws then fall in
    /// `[high, low]`. A degenerate interval (`low == high`) yields `count`
    /// copies of that endpoint.
    pub fn sample(&mut self, low: f64, high: f64, count: usize) -> Vec<f64> {
        (0..count)
            .map(|_| {
                let u: f64 = self.rng.gen();
                low + u * (high - low)
            })
            .collect()
    }
}
