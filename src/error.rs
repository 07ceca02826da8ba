//! Error types for Estimar operations.
//!
//! Provides rich error context for library consumers.

use std::fmt;

/// Main error type for Estimar operations.
///
/// Provides detailed context about failures including dimension mismatches
/// and estimator domain violations.
///
/// # Examples
///
/// ```
/// use estimar::error::EstimarError;
///
/// let err = EstimarError::DimensionMismatch {
///     expected: "3".to_string(),
///     actual: "2".to_string(),
/// };
/// assert!(err.to_string().contains("dimension mismatch"));
/// ```
#[derive(Debug)]
pub enum EstimarError {
    /// Vector/matrix dimensions don't match for the operation.
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// Estimator received input outside its valid domain.
    Domain {
        /// Parameter name
        param: String,
        /// Provided value
        value: f64,
        /// Constraint description
        constraint: String,
    },

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for EstimarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EstimarError::DimensionMismatch { expected, actual } => {
                write!(f, "dimension mismatch: expected {expected}, got {actual}")
            }
            EstimarError::Domain {
                param,
                value,
                constraint,
            } => {
                write!(f, "domain error: {param} = {value}, expected {constraint}")
            }
            EstimarError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for EstimarError {}

impl From<&str> for EstimarError {
    fn from(msg: &str) -> Self {
        EstimarError::Other(msg.to_string())
    }
}

impl From<String> for EstimarError {
    fn from(msg: String) -> Self {
        EstimarError::Other(msg)
    }
}

impl EstimarError {
    /// Create a dimension mismatch error with descriptive context
    #[must_use]
    pub fn dimension_mismatch(context: &str, expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch {
            expected: format!("{context}={expected}"),
            actual: format!("{actual}"),
        }
    }

    /// Create a domain error for a named parameter
    #[must_use]
    pub fn domain(param: &str, value: f64, constraint: &str) -> Self {
        Self::Domain {
            param: param.to_string(),
            value,
            constraint: constraint.to_string(),
        }
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, EstimarError>;
