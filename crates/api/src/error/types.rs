//! Error type definitions for cipher operations

use core::fmt;

/// Primary error type for cipher operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid key error
    InvalidKey {
        /// Operation or type that rejected the key
        context: &'static str,
        /// Detailed error message
        message: String,
    },

    /// Invalid ciphertext error
    InvalidCiphertext {
        /// Operation that rejected the ciphertext
        context: &'static str,
        /// Detailed error message
        message: String,
    },

    /// Invalid length error with context
    InvalidLength {
        /// Operation or type with the length requirement
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Invalid parameter error
    InvalidParameter {
        /// Name of the invalid parameter
        context: &'static str,
        /// Detailed error message
        message: String,
    },

    /// Random generation error
    RandomGenerationError {
        /// Operation that needed randomness
        context: &'static str,
        /// Detailed error message
        message: String,
    },

    /// Other error
    Other {
        /// Operation that failed
        context: &'static str,
        /// Detailed error message
        message: String,
    },
}

/// Result type for cipher operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Add context to an existing error
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidKey { message, .. } => Self::InvalidKey { context, message },
            Self::InvalidCiphertext { message, .. } => Self::InvalidCiphertext { context, message },
            Self::InvalidLength {
                expected, actual, ..
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
            Self::RandomGenerationError { message, .. } => {
                Self::RandomGenerationError { context, message }
            }
            Self::Other { message, .. } => Self::Other { context, message },
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidKey { context, message } => {
                write!(f, "Invalid key in {}: {}", context, message)
            }
            Error::InvalidCiphertext { context, message } => {
                write!(f, "Invalid ciphertext in {}: {}", context, message)
            }
            Error::InvalidLength {
                context,
                expected,
                actual,
            } => write!(
                f,
                "Invalid length for {}: expected {}, got {}",
                context, expected, actual
            ),
            Error::InvalidParameter { context, message } => {
                write!(f, "Invalid parameter '{}': {}", context, message)
            }
            Error::RandomGenerationError { context, message } => {
                write!(f, "Random generation failed in {}: {}", context, message)
            }
            Error::Other { context, message } => write!(f, "Error in {}: {}", context, message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_context() {
        let err = Error::InvalidLength {
            context: "ChaCha key",
            expected: 32,
            actual: 31,
        };
        assert_eq!(
            err.to_string(),
            "Invalid length for ChaCha key: expected 32, got 31"
        );

        let err = Error::InvalidKey {
            context: "Salsa20",
            message: "key must be 16 or 32 bytes".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid key in Salsa20: key must be 16 or 32 bytes"
        );
    }

    #[test]
    fn with_context_replaces_context_only() {
        let err = Error::InvalidLength {
            context: "somewhere",
            expected: 8,
            actual: 7,
        }
        .with_context("FEAL-NX block");
        assert_eq!(
            err,
            Error::InvalidLength {
                context: "FEAL-NX block",
                expected: 8,
                actual: 7,
            }
        );
    }
}
