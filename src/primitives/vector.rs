//! Vector type for 1D numeric data.

use serde::{Deserialize, Serialize};
use std::ops::Index;

/// An ordered, fixed-length sequence of numeric values.
///
/// The vector's dimension is its element count.
///
/// # Examples
///
/// ```
/// use estimar::primitives::Vector;
///
/// let v = Vector::from_slice(&[3.0, 4.0]);
/// assert_eq!(v.len(), 2);
/// assert_eq!(v.sum_of_squares(), 25.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vector<T> {
    data: Vec<T>,
}

impl<T: Copy> Vector<T> {
    /// Creates a vector from owned data.
    #[must_use]
    pub fn from_vec(data: Vec<T>) -> Self {
        Self { data }
    }

    /// Creates a vector by copying a slice.
    #[must_use]
    pub fn from_slice(data: &[T]) -> Self {
        Self {
            data: data.to_vec(),
        }
    }

    /// Returns the dimension (element count).
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the vector has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the underlying data as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl Vector<f64> {
    /// Returns the exact sum of squared components.
    #[must_use]
    pub fn sum_of_squares(&self) -> f64 {
        self.data.iter().map(|x| x * x).sum()
    }

    /// Exact dot product with another vector.
    ///
    /// # Panics
    ///
    /// Panics if the vectors have different dimensions.
    #[must_use]
    pub fn dot(&self, other: &Self) -> f64 {
        assert_eq!(
            self.len(),
            other.len(),
            "dot product requires equal dimensions"
        );
        self.data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a * b)
            .sum()
    }

    /// Subtracts another vector element-wise.
    ///
    /// # Errors
    ///
    /// Returns an error if dimensions don't match.
    pub fn sub(&self, other: &Self) -> Result<Self, &'static str> {
        if self.len() != other.len() {
            return Err("Vector dimensions must match for subtraction");
        }

        let data: Vec<f64> = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a - b)
            .collect();

        Ok(Self { data })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_slice_len() {
        let v = Vector::from_slice(&[1.0, 2.0, 3.0]);
        assert_eq!(v.len(), 3);
        assert!(!v.is_empty());
    }

    #[test]
    fn test_empty() {
        let v: Vector<f64> = Vector::from_vec(vec![]);
        assert!(v.is_empty());
        assert_eq!(v.sum_of_squares(), 0.0);
    }

    #[test]
    fn test_index() {
        let v = Vector::from_slice(&[1.0, 2.0, 3.0]);
        assert_eq!(v[0], 1.0);
        assert_eq!(v[2], 3.0);
    }

    #[test]
    fn test_sum_of_squares() {
        let v = Vector::from_slice(&[3.0, 4.0]);
        assert!((v.sum_of_squares() - 25.0).abs() < 1e-12);
    }

    #[test]
    fn test_dot_exact() {
        let a = Vector::from_slice(&[1.0, 2.0, 3.0]);
        let b = Vector::from_slice(&[4.0, 5.0, 6.0]);
        assert!((a.dot(&b) - 32.0).abs() < 1e-12);
    }

    #[test]
    #[should_panic(expected = "equal dimensions")]
    fn test_dot_dimension_panic() {
        let a = Vector::from_slice(&[1.0, 2.0, 3.0]);
        let b = Vector::from_slice(&[4.0, 5.0]);
        let _ = a.dot(&b);
    }

    #[test]
    fn test_sub() {
        let a = Vector::from_slice(&[3.0, 5.0]);
        let b = Vector::from_slice(&[1.0, 2.0]);
        let d = a.sub(&b).expect("matching dimensions");
        assert_eq!(d.as_slice(), &[2.0, 3.0]);
    }

    #[test]
    fn test_sub_dimension_mismatch() {
        let a = Vector::from_slice(&[3.0, 5.0]);
        let b = Vector::from_slice(&[1.0]);
        assert!(a.sub(&b).is_err());
    }

    #[test]
    fn test_serde_round_trip() {
        let v = Vector::from_slice(&[1.5, -2.5]);
        let json = serde_json::to_string(&v).expect("serializable");
        let back: Vector<f64> = serde_json::from_str(&json).expect("deserializable");
        assert_eq!(back, v);
    }
}
