//! Block cipher implementations
//!
//! This module provides block cipher primitives and the modes of operation
//! that drive them. The only block cipher implemented is FEAL-NX; the
//! [`BlockCipher`] trait is the seam between a cipher and a mode, so a mode
//! never needs to know which cipher it is driving.

pub mod feal;
pub mod modes;

// Re-export commonly used types
pub use feal::FealNx;
pub use modes::ecb::Ecb;

use crate::error::{validate, Result};

/// Common trait for block cipher implementations
///
/// A block cipher transforms exactly [`BLOCK_SIZE`](Self::BLOCK_SIZE) bytes
/// at a time. Implementations validate the slice width and reject anything
/// that is not exactly one block; splitting and padding are the mode's job.
pub trait BlockCipher {
    /// The block size in bytes
    const BLOCK_SIZE: usize;

    /// Encrypt a single block in place
    ///
    /// `block` must be exactly [`BLOCK_SIZE`](Self::BLOCK_SIZE) bytes.
    fn encrypt_block(&self, block: &mut [u8]) -> Result<()>;

    /// Decrypt a single block in place
    ///
    /// `block` must be exactly [`BLOCK_SIZE`](Self::BLOCK_SIZE) bytes.
    fn decrypt_block(&self, block: &mut [u8]) -> Result<()>;
}

/// Validate that a slice is exactly one block wide
#[inline]
pub(crate) fn check_block_width<C: BlockCipher>(block: &[u8]) -> Result<()> {
    validate::length("block", block.len(), C::BLOCK_SIZE)
}
