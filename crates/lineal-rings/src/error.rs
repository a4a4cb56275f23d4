//! Errors raised by element arithmetic.

use thiserror::Error;

/// Errors that can occur when combining or converting ring elements.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AlgebraError {
    /// Two elements created by different factories were combined.
    #[error("cannot combine elements of {left} with elements of {right}")]
    FactoryMismatch {
        /// Description of the left operand's factory.
        left: String,
        /// Description of the right operand's factory.
        right: String,
    },

    /// Inversion of, or division by, the additive identity.
    #[error("division by zero")]
    DivisionByZero,

    /// The element type does not provide the requested operation.
    #[error("{operation} is not supported in {ring}")]
    Unsupported {
        /// The operation that was attempted.
        operation: &'static str,
        /// The ring that lacks it.
        ring: &'static str,
    },

    /// A value could not be represented in the target element type.
    #[error("cannot convert {value} into an element of {target}")]
    Conversion {
        /// The offending value, rendered for display.
        value: String,
        /// The target ring.
        target: &'static str,
    },

    /// A factory was configured with an unusable parameter.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl AlgebraError {
    /// A [`FactoryMismatch`](Self::FactoryMismatch) naming both factories.
    pub fn mismatch(left: &impl std::fmt::Debug, right: &impl std::fmt::Debug) -> Self {
        Self::FactoryMismatch {
            left: format!("{left:?}"),
            right: format!("{right:?}"),
        }
    }
}

/// Result alias for element arithmetic.
pub type Result<T> = std::result::Result<T, AlgebraError>;
