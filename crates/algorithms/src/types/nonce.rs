//! Type-safe nonce implementation with generic size parameter
//!
//! This module provides a generic nonce type with compile-time size
//! guarantees, plus marker traits tying the permitted sizes to the stream
//! cipher variants that accept them.

use core::fmt;
use core::ops::{Deref, DerefMut};

use rand::{CryptoRng, RngCore};
use subtle::ConstantTimeEq;
use zeroize::Zeroize;

use crate::error::{validate, Result};
use crate::types::sealed::Sealed;

/// Generic nonce type with compile-time size guarantee
#[derive(Clone, Zeroize)]
pub struct Nonce<const N: usize> {
    data: [u8; N],
}

// Mark Nonce types as sealed
impl<const N: usize> Sealed for Nonce<N> {}

impl<const N: usize> Nonce<N> {
    /// Create a new nonce from an existing array
    pub fn new(data: [u8; N]) -> Self {
        Self { data }
    }

    /// Create a zeroed nonce
    pub fn zeroed() -> Self {
        Self { data: [0u8; N] }
    }

    /// Create from a slice, if it has the correct length
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        validate::length("Nonce", slice.len(), N)?;

        let mut data = [0u8; N];
        data.copy_from_slice(slice);

        Ok(Self { data })
    }

    /// Generate a random nonce
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let mut data = [0u8; N];
        rng.fill_bytes(&mut data);
        Self { data }
    }

    /// Get the size of this nonce in bytes
    pub fn size() -> usize {
        N
    }
}

impl<const N: usize> AsRef<[u8]> for Nonce<N> {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl<const N: usize> AsMut<[u8]> for Nonce<N> {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

impl<const N: usize> Deref for Nonce<N> {
    type Target = [u8; N];

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<const N: usize> DerefMut for Nonce<N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}

impl<const N: usize> PartialEq for Nonce<N> {
    fn eq(&self, other: &Self) -> bool {
        self.data.ct_eq(&other.data).into()
    }
}

impl<const N: usize> Eq for Nonce<N> {}

impl<const N: usize> fmt::Debug for Nonce<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Nonce<{}>({:?})", N, &self.data[..])
    }
}

// Algorithm compatibility marker traits

/// Salsa20 compatible IV sizes (64-bit message number)
pub trait Salsa20Compatible: Sealed {}
impl Salsa20Compatible for Nonce<8> {}

/// ChaCha (original DJB layout) compatible IV sizes (64-bit nonce)
pub trait ChaChaDjbCompatible: Sealed {}
impl ChaChaDjbCompatible for Nonce<8> {}

/// ChaCha (IETF layout, RFC 7539) compatible IV sizes (96-bit nonce)
pub trait ChaChaIetfCompatible: Sealed {}
impl ChaChaIetfCompatible for Nonce<12> {}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn from_slice_accepts_exact_width_only() {
        assert!(Nonce::<8>::from_slice(&[0u8; 8]).is_ok());
        assert!(Nonce::<8>::from_slice(&[0u8; 7]).is_err());
        assert!(Nonce::<8>::from_slice(&[0u8; 9]).is_err());
    }

    #[test]
    fn random_nonces_differ() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let a = Nonce::<12>::random(&mut rng);
        let b = Nonce::<12>::random(&mut rng);
        assert_ne!(a, b);
    }

    #[test]
    fn zeroed_is_all_zero() {
        let nonce = Nonce::<8>::zeroed();
        assert_eq!(nonce.as_ref(), &[0u8; 8]);
        assert_eq!(Nonce::<8>::size(), 8);
    }
}
