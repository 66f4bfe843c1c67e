//! Cipher primitives for the cipherlab library
//!
//! This crate provides bit-exact implementations of a set of classic
//! symmetric ciphers:
//!
//! - FEAL-NX, the N-round Feistel block cipher with a 128-bit key
//! - Salsa20/8, /12 and /20, with 128- or 256-bit keys
//! - ChaCha8, 12 and 20 in both the original (DJB) and the IETF layout
//! - the ECB mode of operation for block ciphers
//!
//! Every transform matches its published specification to the bit; the unit
//! tests pin the reference vectors from the FEAL call-3e paper, the Salsa20
//! specification, RFC 7539 and draft-strombergson-chacha-test-vectors.
//!
//! These ciphers are implemented for study, not for protecting data: FEAL is
//! broken, and none of the implementations here attempt side-channel
//! resistance beyond zeroizing key material on drop.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Block cipher implementations
pub mod block;
pub use block::feal::FealNx;
pub use block::modes::ecb::Ecb;
pub use block::BlockCipher;

// Stream cipher implementations
pub mod stream;
pub use stream::chacha::{ChaCha, Variant};
pub use stream::salsa::{Salsa20, SalsaKey};
pub use stream::{Rounds, StreamCipher};

// Type system
pub mod types;
pub use types::Nonce;
