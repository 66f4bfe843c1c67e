//! Stream cipher implementations
//!
//! This module provides the Salsa20 and ChaCha families of ARX stream
//! ciphers. Both expand a key, a nonce and a 64-byte-block counter into a
//! keystream that is XORed over the message; encryption and decryption are
//! the same operation.

pub mod chacha;
pub mod salsa;

// Re-export for convenience
pub use chacha::{ChaCha, Variant};
pub use salsa::{Salsa20, SalsaKey};

use crate::error::{validate, Result};

/// Size of a Salsa20/ChaCha keystream block in bytes
pub const STREAM_BLOCK_SIZE: usize = 64;

/// Round count of a Salsa20 or ChaCha core
///
/// Both families are specified for 8, 12 and 20 rounds; 20 is the
/// conservative default and the only count the IETF profile uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Rounds {
    /// 8 rounds (Salsa20/8, ChaCha8)
    R8,
    /// 12 rounds (Salsa20/12, ChaCha12)
    R12,
    /// 20 rounds (Salsa20/20, ChaCha20)
    #[default]
    R20,
}

impl Rounds {
    /// Total round count
    pub const fn count(self) -> usize {
        match self {
            Rounds::R8 => 8,
            Rounds::R12 => 12,
            Rounds::R20 => 20,
        }
    }

    /// Number of double rounds the core iterates
    pub const fn double_rounds(self) -> usize {
        self.count() / 2
    }

    /// Map a numeric round count to a variant, rejecting anything that is
    /// not 8, 12 or 20
    pub fn from_count(count: usize) -> Result<Self> {
        validate::parameter(
            matches!(count, 8 | 12 | 20),
            "rounds",
            "must be 8, 12 or 20",
        )?;
        Ok(match count {
            8 => Rounds::R8,
            12 => Rounds::R12,
            _ => Rounds::R20,
        })
    }
}

/// Common trait for stream cipher implementations
///
/// A stream cipher keeps a position in an unbounded keystream; [`process`]
/// XORs the next keystream bytes over the data in place, so applying it
/// twice with the same starting position recovers the original.
///
/// [`process`]: Self::process
pub trait StreamCipher {
    /// Encrypt or decrypt data in place
    fn process(&mut self, data: &mut [u8]);

    /// Write raw keystream bytes into `output`, starting at the current
    /// block boundary
    fn keystream(&mut self, output: &mut [u8]);

    /// Position the keystream at the start of the given 64-byte block
    fn seek(&mut self, block: u64);

    /// Rewind to the initial counter, keeping key and nonce
    fn reset(&mut self);
}

