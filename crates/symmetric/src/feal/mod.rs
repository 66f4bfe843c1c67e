//! FEAL-NX whole-message interface
//!
//! Wraps the FEAL-NX primitive in the padding and mode handling the cipher
//! was historically used with: short keys and messages are zero-padded on
//! the left, and messages longer than one block go through ECB.

use cipherlab_algorithms::block::feal::{FEAL_BLOCK_SIZE, FEAL_DEFAULT_ROUNDS, FEAL_KEY_SIZE};
use cipherlab_algorithms::{BlockCipher, Ecb, FealNx};
use cipherlab_api::SecretBytes;

use crate::cipher::SymmetricCipher;
use crate::error::{validate, Result};

/// How a message maps onto FEAL-NX blocks
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// A single 8-byte block; shorter messages are zero-padded on the left
    #[default]
    Block,
    /// ECB over any message length
    Ecb,
}

/// FEAL-NX message cipher
///
/// The key may be up to 16 bytes and is zero-padded on the left to the full
/// 128 bits, matching how the cipher's test vectors write short keys.
pub struct FealCipher {
    ecb: Ecb<FealNx>,
    layout: Mode,
    rounds: usize,
}

impl FealCipher {
    /// Creates a cipher from a key of at most 16 bytes
    pub fn new(key: &[u8], rounds: usize, layout: Mode) -> Result<Self> {
        let key = pad_key(key)?;
        let cipher = FealNx::new(&key, rounds)?;
        Ok(Self {
            ecb: Ecb::new(cipher),
            layout,
            rounds,
        })
    }

    /// Creates a cipher with the reference round count of 32
    pub fn with_key(key: &[u8], layout: Mode) -> Result<Self> {
        Self::new(key, FEAL_DEFAULT_ROUNDS, layout)
    }
}

impl SymmetricCipher for FealCipher {
    fn name(&self) -> String {
        format!("FEAL-NX/{}", self.rounds)
    }

    fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        match self.layout {
            Mode::Block => {
                let mut block = pad_block(plaintext)?;
                self.ecb.cipher().encrypt_block(&mut block)?;
                Ok(block.to_vec())
            }
            Mode::Ecb => Ok(self.ecb.encrypt(plaintext)?),
        }
    }

    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        match self.layout {
            Mode::Block => {
                let mut block = pad_block(ciphertext)?;
                self.ecb.cipher().decrypt_block(&mut block)?;
                Ok(block.to_vec())
            }
            Mode::Ecb => Ok(self.ecb.decrypt(ciphertext)?),
        }
    }
}

/// Zero-pad a key of at most 16 bytes on the left to the full key width
fn pad_key(key: &[u8]) -> Result<SecretBytes<FEAL_KEY_SIZE>> {
    validate::max_length("FEAL-NX key", key.len(), FEAL_KEY_SIZE)?;

    let mut padded = SecretBytes::zeroed();
    padded.as_mut()[FEAL_KEY_SIZE - key.len()..].copy_from_slice(key);
    Ok(padded)
}

/// Zero-pad a message of at most 8 bytes on the left to one block
fn pad_block(data: &[u8]) -> Result<[u8; FEAL_BLOCK_SIZE]> {
    validate::max_length("FEAL-NX block", data.len(), FEAL_BLOCK_SIZE)?;

    let mut block = [0u8; FEAL_BLOCK_SIZE];
    block[FEAL_BLOCK_SIZE - data.len()..].copy_from_slice(data);
    Ok(block)
}

#[cfg(test)]
mod tests;
