//! Error types for bit strings.

use thiserror::Error;

/// Errors that can occur when building or editing a bit string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum BitStringError {
    /// Text input is not an unsigned binary literal.
    #[error("Malformed binary string '{input}': {reason}")]
    Format {
        /// The rejected input, as given.
        input: String,
        /// What is wrong with it.
        reason: String,
    },

    /// Input has the wrong shape for the requested factory.
    #[error("Type constraint violated: {0}")]
    TypeConstraint(String),

    /// Bit position outside the declared width.
    #[error("Bit index {index} out of bounds for bit string of width {nbits}")]
    IndexOutOfBounds {
        /// The requested position.
        index: usize,
        /// The width of the bit string.
        nbits: usize,
    },
}

/// Result type for bit string operations.
pub type BitResult<T> = Result<T, BitStringError>;
