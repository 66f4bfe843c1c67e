//! Salsa20 whole-message interface
//!
//! Each encryption draws a fresh 8-byte IV from the operating system RNG
//! and carries it in front of the ciphertext; decryption strips it again.

use cipherlab_algorithms::stream::salsa::SALSA20_NONCE_SIZE;
use cipherlab_algorithms::stream::{Rounds, StreamCipher};
use cipherlab_algorithms::{Nonce, Salsa20, SalsaKey};
use rand::rngs::OsRng;

use crate::cipher::SymmetricCipher;
use crate::error::{Error, Result};

/// Salsa20 message cipher
///
/// Accepts 16- or 32-byte keys and any of the specified round counts.
pub struct Salsa20Cipher {
    key: SalsaKey,
    rounds: Rounds,
}

impl Salsa20Cipher {
    /// Creates a cipher from a 16- or 32-byte key
    pub fn new(key: &[u8], rounds: Rounds) -> Result<Self> {
        let key = SalsaKey::from_slice(key).map_err(|_| Error::InvalidKey {
            context: "Salsa20",
            message: "key must be 16 or 32 bytes".to_string(),
        })?;
        Ok(Self { key, rounds })
    }

    /// Encrypts or decrypts with an explicit IV, without the IV prefix
    ///
    /// This is the deterministic core of [`encrypt`](SymmetricCipher::encrypt)
    /// and [`decrypt`](SymmetricCipher::decrypt); it is also the right entry
    /// point for checking published keystream vectors.
    pub fn xcrypt_with_iv(&self, iv: &Nonce<SALSA20_NONCE_SIZE>, data: &[u8]) -> Vec<u8> {
        let mut output = data.to_vec();
        let mut cipher = Salsa20::new(&self.key, iv, self.rounds);
        cipher.process(&mut output);
        output
    }
}

impl SymmetricCipher for Salsa20Cipher {
    fn name(&self) -> String {
        format!("Salsa20/{}", self.rounds.count())
    }

    fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let mut iv = Nonce::<SALSA20_NONCE_SIZE>::zeroed();
        rand::RngCore::try_fill_bytes(&mut OsRng, iv.as_mut()).map_err(|e| {
            Error::RandomGenerationError {
                context: "Salsa20 IV",
                message: e.to_string(),
            }
        })?;

        let mut message = Vec::with_capacity(SALSA20_NONCE_SIZE + plaintext.len());
        message.extend_from_slice(iv.as_ref());
        message.extend_from_slice(&self.xcrypt_with_iv(&iv, plaintext));
        Ok(message)
    }

    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        if ciphertext.len() <= SALSA20_NONCE_SIZE {
            return Err(Error::InvalidCiphertext {
                context: "Salsa20",
                message: "ciphertext must be longer than the 8-byte IV".to_string(),
            });
        }

        let (iv, payload) = ciphertext.split_at(SALSA20_NONCE_SIZE);
        let iv = Nonce::<SALSA20_NONCE_SIZE>::from_slice(iv).map_err(Error::from)?;
        Ok(self.xcrypt_with_iv(&iv, payload))
    }
}

#[cfg(test)]
mod tests;
