//! Error types for manifold operations.
//!
//! Unsupported operations and degenerate geometry are hard failures surfaced
//! synchronously to the caller; there is no internal retry and no partial
//! result. Recoverable conditions (such as a missing closed-form exponential
//! map) are *not* errors and are reported through
//! [`Advised`](crate::manifold::Advised) instead.

use thiserror::Error;

/// Errors that can occur during manifold operations.
#[derive(Debug, Clone, Error)]
pub enum ManifoldError {
    /// Point is not a valid element for this manifold.
    ///
    /// Raised when a manifold is configured with inconsistent sizes or when
    /// an operand fails a structural check.
    #[error("Invalid point: {reason}")]
    InvalidPoint {
        /// Description of why the point is invalid
        reason: String,
    },

    /// Dimension mismatch between operands.
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected dimensions
        expected: String,
        /// Actual dimensions
        actual: String,
    },

    /// Numerical failure, such as a singular matrix in a linear solve.
    ///
    /// For the fixed-rank quotient geometry this is the signature of a
    /// rank-deficient factor: the Gram matrix in the horizontal projection
    /// becomes singular and the geometry is no longer valid at that point.
    #[error("Numerical failure: {reason}")]
    NumericalError {
        /// Description of the numerical issue
        reason: String,
    },

    /// Operation not implemented for this manifold.
    ///
    /// Used for contract operations a concrete manifold declares unsupported
    /// (for example `distance` on the real fixed-rank PSD quotient).
    #[error("Operation not implemented: {operation}")]
    NotImplemented {
        /// Name of the unimplemented operation
        operation: String,
    },
}

impl ManifoldError {
    /// Create an `InvalidPoint` error with a custom reason.
    pub fn invalid_point<S: Into<String>>(reason: S) -> Self {
        Self::InvalidPoint {
            reason: reason.into(),
        }
    }

    /// Create a `DimensionMismatch` error.
    pub fn dimension_mismatch<S1, S2>(expected: S1, actual: S2) -> Self
    where
        S1: std::fmt::Display,
        S2: std::fmt::Display,
    {
        Self::DimensionMismatch {
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }

    /// Create a `NumericalError` with a custom reason.
    pub fn numerical_error<S: Into<String>>(reason: S) -> Self {
        Self::NumericalError {
            reason: reason.into(),
        }
    }

    /// Create a `NotImplemented` error for a specific operation.
    pub fn not_implemented<S: Into<String>>(operation: S) -> Self {
        Self::NotImplemented {
            operation: operation.into(),
        }
    }
}

/// Result type for manifold operations.
pub type Result<T> = std::result::Result<T, ManifoldError>;
