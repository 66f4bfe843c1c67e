//! High-level symmetric encryption for the cipherlab workspace
//!
//! This crate wraps the primitives in `cipherlab-algorithms` behind a small
//! whole-message interface: a cipher is configured once with key material,
//! then encrypts and decrypts byte slices. The stream ciphers generate a
//! random IV per message and carry it as a prefix of the ciphertext, so two
//! encryptions of the same plaintext do not match.
//!
//! Everything here exists for studying the underlying algorithms. FEAL-NX
//! is broken, ECB leaks plaintext structure, and none of the ciphers
//! authenticate anything; keep real data away from this crate.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod chacha;
pub mod cipher;
pub mod error;
pub mod feal;
pub mod salsa20;

// Re-export main types for convenience
pub use chacha::ChaChaCipher;
pub use cipher::SymmetricCipher;
pub use feal::{FealCipher, Mode};
pub use salsa20::Salsa20Cipher;

// Re-export the API error system instead of custom error types
pub use error::{Error, Result};
