//! Typed containers used at the cipher boundaries
//!
//! Fixed-width integers and const-generic byte arrays carry their width in
//! the type, which makes most of the width violations the reference
//! implementation checked at runtime unrepresentable here. The remaining
//! runtime-validated surface is collected in this module.

pub mod nonce;

pub use nonce::{ChaChaDjbCompatible, ChaChaIetfCompatible, Nonce, Salsa20Compatible};

/// Private module for sealed traits
pub(crate) mod sealed {
    /// Sealed trait to prevent external implementations
    pub trait Sealed {}
}
