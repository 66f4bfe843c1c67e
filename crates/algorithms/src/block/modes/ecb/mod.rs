//! Electronic Codebook (ECB) mode
//!
//! Each block is enciphered independently, so equal plaintext blocks map to
//! equal ciphertext blocks. Short messages are padded with zero bytes on the
//! left up to the next block boundary; decryption deliberately leaves that
//! padding in place, since the mode has no way to tell padding zeroes from
//! plaintext zeroes.

use crate::block::BlockCipher;
use crate::error::Result;

/// ECB mode driver over any [`BlockCipher`]
pub struct Ecb<C: BlockCipher> {
    cipher: C,
}

impl<C: BlockCipher> Ecb<C> {
    /// Wrap a block cipher in ECB mode
    pub fn new(cipher: C) -> Self {
        Self { cipher }
    }

    /// Returns a reference to the underlying block cipher
    pub fn cipher(&self) -> &C {
        &self.cipher
    }

    /// Encrypt a message of any length
    ///
    /// The input is zero-padded on the left to a whole number of blocks, so
    /// the output length is `data.len()` rounded up to a multiple of the
    /// block size. An empty input produces an empty output.
    pub fn encrypt(&self, data: &[u8]) -> Result<Vec<u8>> {
        self.process(data, |cipher, block| cipher.encrypt_block(block))
    }

    /// Decrypt a message of any length
    ///
    /// Inputs that are not a whole number of blocks are zero-padded on the
    /// left like in [`encrypt`](Self::encrypt). Padding introduced during
    /// encryption is not stripped; callers that need the exact plaintext
    /// length must track it out of band.
    pub fn decrypt(&self, data: &[u8]) -> Result<Vec<u8>> {
        self.process(data, |cipher, block| cipher.decrypt_block(block))
    }

    fn process<F>(&self, data: &[u8], per_block: F) -> Result<Vec<u8>>
    where
        F: Fn(&C, &mut [u8]) -> Result<()>,
    {
        if data.is_empty() {
            return Ok(Vec::new());
        }

        let mut buffer = pad_left(data, C::BLOCK_SIZE);
        for block in buffer.chunks_exact_mut(C::BLOCK_SIZE) {
            per_block(&self.cipher, block)?;
        }
        Ok(buffer)
    }
}

/// Zero-pad `data` on the left to the next multiple of `block_size`
fn pad_left(data: &[u8], block_size: usize) -> Vec<u8> {
    let padding = (block_size - data.len() % block_size) % block_size;
    let mut buffer = vec![0u8; padding + data.len()];
    buffer[padding..].copy_from_slice(data);
    buffer
}

#[cfg(test)]
mod tests;
