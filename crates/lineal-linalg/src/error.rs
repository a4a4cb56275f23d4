//! Errors raised by the linear-algebra engine.

use lineal_rings::AlgebraError;
use thiserror::Error;

/// Errors that can occur in matrix and vector operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LinalgError {
    /// Element arithmetic failed (mixed factories, division by zero,
    /// unsupported operation).
    #[error(transparent)]
    Algebra(#[from] AlgebraError),

    /// Operand shapes are incompatible.
    #[error("{operation}: expected dimension {expected}, found {found}")]
    DimensionMismatch {
        /// The operation that was attempted.
        operation: &'static str,
        /// The dimension the operation required.
        expected: usize,
        /// The dimension it got.
        found: usize,
    },

    /// A square matrix was required.
    #[error("matrix must be square, found {rows}x{cols}")]
    NotSquare {
        /// Number of rows.
        rows: usize,
        /// Number of columns.
        cols: usize,
    },

    /// A 1-based index fell outside `1..=len`.
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds {
        /// The requested index.
        index: usize,
        /// The valid upper bound.
        len: usize,
    },

    /// The operation needs at least one entry.
    #[error("{0} requires a non-empty input")]
    Empty(&'static str),

    /// An infinite or NaN entry where finite values are required.
    #[error("entry ({row}, {col}) is not finite")]
    NonFinite {
        /// 1-based row of the entry.
        row: usize,
        /// 1-based column of the entry.
        col: usize,
    },

    /// The QR iteration hit its iteration cap.
    #[error("eigenvalue {eigenvalue} did not converge after {iterations} iterations")]
    NoConvergence {
        /// 1-based position of the eigenvalue being isolated.
        eigenvalue: usize,
        /// Iterations spent on it.
        iterations: usize,
    },
}

impl LinalgError {
    /// Returns true if this is an inversion of, or division by, zero.
    #[must_use]
    pub fn is_division_by_zero(&self) -> bool {
        matches!(self, Self::Algebra(AlgebraError::DivisionByZero))
    }

    /// Returns true for contract violations: shape errors, mixed
    /// factories, unsupported operations and bad arguments.
    #[must_use]
    pub fn is_invalid_operation(&self) -> bool {
        !self.is_division_by_zero() && !matches!(self, Self::NoConvergence { .. })
    }

    pub(crate) fn dimension(operation: &'static str, expected: usize, found: usize) -> Self {
        Self::DimensionMismatch {
            operation,
            expected,
            found,
        }
    }
}

/// Result alias for linear-algebra operations.
pub type Result<T> = std::result::Result<T, LinalgError>;
