//! # cipherlab
//!
//! A modular library of classic symmetric cipher primitives, implemented
//! bit-exact against the published specifications: the FEAL-NX Feistel block
//! cipher, the Salsa20 and ChaCha ARX stream cipher families, and an ECB mode
//! driver.
//!
//! These ciphers are of historical and educational interest. FEAL in
//! particular acted as a catalyst for differential and linear cryptanalysis
//! and is thoroughly broken; nothing in this workspace is hardened against
//! side channels. Do not use it to protect real data.
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several
//! sub-crates:
//!
//! - `cipherlab-algorithms`: the cipher cores (FEAL-NX, Salsa20, ChaCha, ECB)
//! - `cipherlab-symmetric`: high-level encryption with IV packaging and the
//!   reference key/text padding conventions
//! - `cipherlab-api`: unified error types and validation helpers

#![forbid(unsafe_code)]

pub use cipherlab_api as api;
pub use cipherlab_algorithms as algorithms;
pub use cipherlab_symmetric as symmetric;

/// Common imports for cipherlab users
pub mod prelude {
    pub use cipherlab_api::{Error, Result};
    pub use cipherlab_algorithms::block::feal::FealNx;
    pub use cipherlab_algorithms::block::modes::ecb::Ecb;
    pub use cipherlab_algorithms::block::BlockCipher;
    pub use cipherlab_algorithms::stream::chacha::{ChaCha, Variant};
    pub use cipherlab_algorithms::stream::salsa::{Salsa20, SalsaKey};
    pub use cipherlab_algorithms::stream::{Rounds, StreamCipher};
    pub use cipherlab_algorithms::types::Nonce;
    pub use cipherlab_symmetric::chacha::ChaChaCipher;
    pub use cipherlab_symmetric::feal::{FealCipher, Mode};
    pub use cipherlab_symmetric::salsa20::Salsa20Cipher;
    pub use cipherlab_symmetric::SymmetricCipher;
}
