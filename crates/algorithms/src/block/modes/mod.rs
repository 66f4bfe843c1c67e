//! Block cipher modes of operation
//!
//! A mode turns a one-block primitive into a whole-message transform. Only
//! ECB is implemented; it is the mode the FEAL-NX paper describes and it is
//! kept for compatibility with the reference vectors, not because it hides
//! anything about the plaintext structure.

pub mod ecb;

pub use ecb::Ecb;
