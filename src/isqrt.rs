//! Fast inverse square root.
//!
//! Bit-manipulation approximation of 1/sqrt(x) exploiting the
//! near-logarithmic relationship between an IEEE-754 binary32 bit pattern
//! and its exponent, refined by one Newton-Raphson iteration.
//!
//! Reference: id Software, Quake III Arena `q_math.c` (the 0x5f3759df
//! constant analyzed in Lomont (2003), "Fast Inverse Square Root").

/// Initial-guess constant for the bit-level approximation.
const MAGIC: i32 = 0x5f37_59df;

/// Approximates `1 / sqrt(x)` without division or library square roots.
///
/// Reinterprets the binary32 bit pattern as an `i32`, computes
/// `MAGIC - (i >> 1)`, reinterprets back, then applies one Newton-Raphson
/// step `y * (1.5 - 0.5 * x * y * y)`. Relative error is about 0.17% for
/// positive normal input.
///
/// The input must be a strictly positive normal float. Zero, negative,
/// subnormal, and non-finite input are outside the contract and the output
/// for them is undefined.
///
/// # Examples
///
/// ```
/// use estimar::isqrt::fast_inv_sqrt;
///
/// let y = fast_inv_sqrt(4.0);
/// assert!((y - 0.5).abs() < 0.005);
/// ```
#[must_use]
pub fn fast_inv_sqrt(x: f32) -> f32 {
    let i = MAGIC - ((x.to_bits() as i32) >> 1);
    let y = f32::from_bits(i as u32);
    y * (1.5 - 0.5 * x * y * y)
}

/// Applies [`fast_inv_sqrt`] independently to each element.
///
/// Each value is narrowed to binary32, run through the identical bit trick,
/// and widened back. The per-element contract is the same as the scalar
/// form's.
#[must_use]
pub fn fast_inv_sqrt_all(values: &[f64]) -> Vec<f64> {
    values
        .iter()
        .map(|&x| f64::from(fast_inv_sqrt(x as f32)))
        .collect()
}
