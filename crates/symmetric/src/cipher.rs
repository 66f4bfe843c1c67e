//! Symmetric cipher traits
//!
//! This module defines the core trait shared by all whole-message cipher
//! interfaces in this crate.

use crate::error::Result;

/// Common trait for all symmetric encryption interfaces
///
/// Implementations hold their key material and any per-instance
/// configuration; `encrypt` and `decrypt` operate on whole messages. For
/// the stream ciphers the two calls are not inverses of the same keystream
/// position: `encrypt` picks a fresh IV and prepends it, and `decrypt`
/// expects that prefix.
pub trait SymmetricCipher {
    /// Returns the name of this cipher, including its configuration
    fn name(&self) -> String;

    /// Encrypts a plaintext message
    fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>>;

    /// Decrypts a ciphertext message
    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>>;
}
