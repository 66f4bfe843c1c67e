//! Public error types and common types for the cipherlab library
//!
//! This crate provides the shared API surface for the cipherlab workspace:
//! the unified [`Error`] type, the [`validate`](error::validate) helpers used
//! at every public cipher entry point, and secret-holding byte containers.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod error;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use types::SecretBytes;
