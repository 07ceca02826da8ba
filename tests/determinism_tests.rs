//! Reproducibility guarantees under explicit seeding.
//!
//! The sampler is the only source of randomness, so equal seeds must give
//! bitwise-equal estimates across the whole chain.

use estimar::monte_carlo;
use estimar::primitives::{Matrix, Vector};
use estimar::sampler::UniformSampler;

#[test]
fn sqrt_bitwise_equal_under_same_seed() {
    let mut a = UniformSampler::seeded(7);
    let mut b = UniformSampler::seeded(7);
    assert_eq!(
        monte_carlo::sqrt(2.0, &mut a).expect("valid input"),
        monte_carlo::sqrt(2.0, &mut b).expect("valid input"),
    );
}

#[test]
fn cos_bitwise_equal_under_same_seed() {
    let mut a = UniformSampler::seeded(7);
    let mut b = UniformSampler::seeded(7);
    assert_eq!(
        monte_carlo::cos(2.0, &mut a).expect("valid input"),
        monte_carlo::cos(2.0, &mut b).expect("valid input"),
    );
}

#[test]
fn matmul_bitwise_equal_under_same_seed() {
    let m1 = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).expect("valid shape");
    let m2 = Matrix::from_vec(2, 2, vec![5.0, 6.0, 7.0, 8.0]).expect("valid shape");
    let mut a = UniformSampler::seeded(7);
    let mut b = UniformSampler::seeded(7);
    assert_eq!(
        monte_carlo::matmul_with_samples(&m1, &m2, 2_000, &mut a).expect("compatible shapes"),
        monte_carlo::matmul_with_samples(&m1, &m2, 2_000, &mut b).expect("compatible shapes"),
    );
}

#[test]
fn different_seeds_give_different_estimates() {
    let mut a = UniformSampler::seeded(1);
    let mut b = UniformSampler::seeded(2);
    let ea = monte_carlo::sqrt(2.0, &mut a).expect("valid input");
    let eb = monte_carlo::sqrt(2.0, &mut b).expect("valid input");
    assert_ne!(ea, eb);
}

#[test]
fn sequential_estimates_advance_the_stream() {
    // Two calls on one sampler consume distinct draws
    let mut sampler = UniformSampler::seeded(7);
    let first = monte_carlo::sqrt(2.0, &mut sampler).expect("valid input");
    let second = monte_carlo::sqrt(2.0, &mut sampler).expect("valid input");
    assert_ne!(first, second);
}

#[test]
fn degenerate_cases_ignore_the_sampler_state() {
    // Exact shortcuts leave the stream untouched
    let mut sampler = UniformSampler::seeded(7);
    let zero = Vector::from_slice(&[0.0, 0.0]);
    assert_eq!(monte_carlo::magnitude(&zero, &mut sampler).expect("valid input"), 0.0);
    assert_eq!(monte_carlo::cos(0.0, &mut sampler).expect("valid input"), 1.0);

    let mut fresh = UniformSampler::seeded(7);
    assert_eq!(sampler.sample(0.0, 1.0, 10), fresh.sample(0.0, 1.0, 10));
}
