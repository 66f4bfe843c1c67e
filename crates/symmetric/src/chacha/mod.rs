//! ChaCha whole-message interface
//!
//! Like the Salsa20 interface, every encryption draws a fresh IV from the
//! operating system RNG and prepends it to the ciphertext. The IV width
//! follows the configured layout: 8 bytes in the original layout, 12 in
//! the IETF layout.

use cipherlab_algorithms::stream::chacha::{
    CHACHA_DJB_NONCE_SIZE, CHACHA_IETF_NONCE_SIZE, CHACHA_KEY_SIZE,
};
use cipherlab_algorithms::stream::{Rounds, StreamCipher};
use cipherlab_algorithms::{ChaCha, Nonce, Variant};
use cipherlab_api::SecretBytes;
use rand::rngs::OsRng;

use crate::cipher::SymmetricCipher;
use crate::error::{Error, Result};

/// ChaCha message cipher
pub struct ChaChaCipher {
    key: SecretBytes<CHACHA_KEY_SIZE>,
    variant: Variant,
    rounds: Rounds,
    initial_counter: u64,
}

impl ChaChaCipher {
    /// Creates a cipher from a 32-byte key, starting each message at
    /// block 0
    pub fn new(key: &[u8], variant: Variant, rounds: Rounds) -> Result<Self> {
        Self::with_counter(key, variant, rounds, 0)
    }

    /// Creates a cipher that starts each message at the given block
    /// counter
    ///
    /// In the IETF layout the counter is a single state word, so it must
    /// fit in 32 bits.
    pub fn with_counter(
        key: &[u8],
        variant: Variant,
        rounds: Rounds,
        initial_counter: u64,
    ) -> Result<Self> {
        let key = SecretBytes::from_slice(key).map_err(|_| Error::InvalidKey {
            context: "ChaCha",
            message: "key must be 32 bytes".to_string(),
        })?;
        if variant == Variant::Ietf && u32::try_from(initial_counter).is_err() {
            return Err(Error::InvalidParameter {
                context: "ChaCha",
                message: "IETF layout limits the initial counter to 32 bits".to_string(),
            });
        }
        Ok(Self {
            key,
            variant,
            rounds,
            initial_counter,
        })
    }

    /// The IV width of the configured layout in bytes
    pub fn iv_size(&self) -> usize {
        match self.variant {
            Variant::Djb => CHACHA_DJB_NONCE_SIZE,
            Variant::Ietf => CHACHA_IETF_NONCE_SIZE,
        }
    }

    /// Encrypts or decrypts with an explicit IV, without the IV prefix
    ///
    /// The IV must match the configured layout's width.
    pub fn xcrypt_with_iv(&self, iv: &[u8], data: &[u8]) -> Result<Vec<u8>> {
        let mut output = data.to_vec();
        let mut cipher = self.instance(iv)?;
        cipher.process(&mut output);
        Ok(output)
    }

    fn instance(&self, iv: &[u8]) -> Result<ChaCha> {
        Ok(match self.variant {
            Variant::Djb => {
                let nonce = Nonce::<CHACHA_DJB_NONCE_SIZE>::from_slice(iv).map_err(Error::from)?;
                ChaCha::djb_with_counter(&self.key, &nonce, self.rounds, self.initial_counter)
            }
            Variant::Ietf => {
                let nonce = Nonce::<CHACHA_IETF_NONCE_SIZE>::from_slice(iv).map_err(Error::from)?;
                ChaCha::ietf_with_counter(
                    &self.key,
                    &nonce,
                    self.rounds,
                    self.initial_counter as u32,
                )
            }
        })
    }
}

impl SymmetricCipher for ChaChaCipher {
    fn name(&self) -> String {
        match self.variant {
            Variant::Djb => format!("ChaCha{}", self.rounds.count()),
            Variant::Ietf => format!("ChaCha{}-IETF", self.rounds.count()),
        }
    }

    fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let mut iv = vec![0u8; self.iv_size()];
        rand::RngCore::try_fill_bytes(&mut OsRng, &mut iv).map_err(|e| {
            Error::RandomGenerationError {
                context: "ChaCha IV",
                message: e.to_string(),
            }
        })?;

        let mut message = Vec::with_capacity(iv.len() + plaintext.len());
        message.extend_from_slice(&iv);
        message.extend_from_slice(&self.xcrypt_with_iv(&iv, plaintext)?);
        Ok(message)
    }

    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        if ciphertext.len() <= self.iv_size() {
            return Err(Error::InvalidCiphertext {
                context: "ChaCha",
                message: format!(
                    "ciphertext must be longer than the {}-byte IV",
                    self.iv_size()
                ),
            });
        }

        let (iv, payload) = ciphertext.split_at(self.iv_size());
        self.xcrypt_with_iv(iv, payload)
    }
}
