//! FEAL-NX block cipher implementation
//!
//! FEAL-NX is the N-round variant of the Fast data Encipherment ALgorithm
//! with a 128-bit key and no key parity, as specified in
//! <https://info.isl.ntt.co.jp/crypt/archive/dl/feal/call-3e.pdf>.
//!
//! The cipher enciphers 64-bit blocks through an N-round Feistel network
//! (N even, at least 2, 32 in the reference configuration) driven by N+8
//! 16-bit subkeys. FEAL is a historically important target of differential
//! and linear cryptanalysis and must not be used to protect data.

use byteorder::{BigEndian, ByteOrder};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::block::{check_block_width, BlockCipher};
use crate::error::{validate, Result};

/// Size of the FEAL-NX key in bytes
pub const FEAL_KEY_SIZE: usize = 16;
/// Size of a FEAL-NX block in bytes
pub const FEAL_BLOCK_SIZE: usize = 8;
/// Round count of the reference configuration
pub const FEAL_DEFAULT_ROUNDS: usize = 32;

/// FEAL-NX block cipher
///
/// Holds the precomputed subkey schedule for one key and round count.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct FealNx {
    /// The N+8 16-bit subkeys
    subkeys: Vec<u16>,
    /// Round count N (even, >= 2)
    rounds: usize,
}

impl FealNx {
    /// Creates a new FEAL-NX instance with the given key and round count
    ///
    /// The round count must be even and at least 2.
    pub fn new(key: &[u8; FEAL_KEY_SIZE], rounds: usize) -> Result<Self> {
        Self::from_key_u128(u128::from_be_bytes(*key), rounds)
    }

    /// Creates a new FEAL-NX instance with the reference round count of 32
    pub fn with_key(key: &[u8; FEAL_KEY_SIZE]) -> Self {
        // 32 always satisfies the round count validation
        Self::from_key_u128(u128::from_be_bytes(*key), FEAL_DEFAULT_ROUNDS)
            .expect("default round count is valid")
    }

    /// Creates a new FEAL-NX instance from a 128-bit key value
    pub fn from_key_u128(key: u128, rounds: usize) -> Result<Self> {
        let subkeys = key_schedule(key, rounds)?;
        Ok(Self { subkeys, rounds })
    }

    /// Returns the round count N
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// Returns the subkey schedule (N+8 16-bit subkeys)
    pub fn subkeys(&self) -> &[u16] {
        &self.subkeys
    }

    /// Encrypt a single 64-bit block
    pub fn encrypt_block_u64(&self, plaintext: u64) -> u64 {
        let n = self.rounds;
        let sk = &self.subkeys;

        // Pre-processing: XOR with (K_N .. K_N+3), then fold L0 into the
        // right half.
        let mut p = plaintext ^ concat_subkeys(&sk[n..n + 4]);
        let l0 = (p >> 32) as u32;
        p ^= u64::from(l0);

        let (l0, r0) = split_block(p);
        let (l, r) = iterate_encrypt(l0, r0, sk, n);
        let (ln, rn) = (l[n], r[n]);

        // Post-processing: (R_N, L_N), fold R_N into the right half, XOR
        // with (K_N+4 .. K_N+7).
        let mut c = join_block(rn, ln);
        c ^= u64::from(rn);
        c ^ concat_subkeys(&sk[n + 4..n + 8])
    }

    /// Decrypt a single 64-bit block
    pub fn decrypt_block_u64(&self, ciphertext: u64) -> u64 {
        let n = self.rounds;
        let sk = &self.subkeys;

        // Mirror of the encryption pre-processing, using (K_N+4 .. K_N+7)
        // and folding R_N.
        let mut c = ciphertext ^ concat_subkeys(&sk[n + 4..n + 8]);
        let rn = (c >> 32) as u32;
        c ^= u64::from(rn);

        let (rn, ln) = split_block(c);
        let (l, r) = iterate_decrypt(ln, rn, sk, n);
        let (l0, r0) = (l[0], r[0]);

        let mut p = join_block(l0, r0);
        p ^= u64::from(l0);
        p ^ concat_subkeys(&sk[n..n + 4])
    }
}

impl BlockCipher for FealNx {
    const BLOCK_SIZE: usize = FEAL_BLOCK_SIZE;

    fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
        check_block_width::<Self>(block)?;
        let value = BigEndian::read_u64(block);
        BigEndian::write_u64(block, self.encrypt_block_u64(value));
        Ok(())
    }

    fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
        check_block_width::<Self>(block)?;
        let value = BigEndian::read_u64(block);
        BigEndian::write_u64(block, self.decrypt_block_u64(value));
        Ok(())
    }
}

/// S-box 0 of FEAL-NX
#[inline]
pub fn s0(a: u8, b: u8) -> u8 {
    s(a, b, 0)
}

/// S-box 1 of FEAL-NX
#[inline]
pub fn s1(a: u8, b: u8) -> u8 {
    s(a, b, 1)
}

/// General substitution box: rotl2((a + b + i) mod 256)
#[inline]
fn s(a: u8, b: u8, i: u8) -> u8 {
    a.wrapping_add(b).wrapping_add(i).rotate_left(2)
}

/// f-function of FEAL-NX (data randomization)
///
/// Mixes a 32-bit half-block with a 16-bit subkey. See section 5.1 and
/// figure 3 of the call-3e paper.
pub fn f(a: u32, b: u16) -> u32 {
    let [a0, a1, a2, a3] = a.to_be_bytes();
    let [b0, b1] = b.to_be_bytes();

    let mut f1 = a1 ^ b0 ^ a0;
    let mut f2 = a2 ^ b1 ^ a3;
    f1 = s1(f1, f2);
    f2 = s0(f2, f1);
    let f0 = s0(a0, f1);
    let f3 = s1(a3, f2);

    u32::from_be_bytes([f0, f1, f2, f3])
}

/// f_K-function of FEAL-NX (key schedule)
///
/// Same byte structure as [`f`] but with a 32-bit second input. See section
/// 5.2 and figure 4 of the call-3e paper.
pub fn fk(a: u32, b: u32) -> u32 {
    let [a0, a1, a2, a3] = a.to_be_bytes();
    let [b0, b1, b2, b3] = b.to_be_bytes();

    let mut fk1 = a1 ^ a0;
    let mut fk2 = a2 ^ a3;
    fk1 = s1(fk1, fk2 ^ b0);
    fk2 = s0(fk2, fk1 ^ b1);
    let fk0 = s0(a0, fk1 ^ b2);
    let fk3 = s1(a3, fk2 ^ b3);

    u32::from_be_bytes([fk0, fk1, fk2, fk3])
}

/// Subkey schedule of FEAL-NX
///
/// Derives the N+8 16-bit subkeys used during en-/decryption from the
/// 128-bit key. The round count must be even and at least 2.
pub fn key_schedule(key: u128, rounds: usize) -> Result<Vec<u16>> {
    validate::parameter(rounds >= 2, "rounds", "must be at least 2")?;
    validate::parameter(rounds % 2 == 0, "rounds", "must be even")?;

    let kl = (key >> 64) as u64;
    let kr = key as u64;

    // Processing of the right key KR: the q_r sequence cycles through
    // KR1 ^ KR2, KR1, KR2.
    let kr1 = (kr >> 32) as u32;
    let kr2 = kr as u32;
    let q = |r: usize| -> u32 {
        match r % 3 {
            1 => kr1 ^ kr2,
            2 => kr1,
            _ => kr2,
        }
    };

    // Processing of the left key KL through the fk recurrence.
    let mut a = (kl >> 32) as u32;
    let mut b = kl as u32;
    let mut d = 0u32;

    let mut subkeys = Vec::with_capacity(rounds + 8);
    for r in 1..=(rounds / 2 + 4) {
        let next_b = fk(a, b ^ d ^ q(r));
        d = a;
        a = b;
        b = next_b;

        // Each b_r yields two 16-bit subkeys: (b0, b1) and (b2, b3).
        subkeys.push((b >> 16) as u16);
        subkeys.push(b as u16);
    }

    Ok(subkeys)
}

/// Feistel iteration of the encryption pipeline
///
/// Returns the full (L, R) history across all N+1 states so the
/// round-by-round vectors of the call-3e paper can be checked.
fn iterate_encrypt(l0: u32, r0: u32, sk: &[u16], n: usize) -> (Vec<u32>, Vec<u32>) {
    let mut l = Vec::with_capacity(n + 1);
    let mut r = Vec::with_capacity(n + 1);
    l.push(l0);
    r.push(r0);
    for i in 1..=n {
        r.push(l[i - 1] ^ f(r[i - 1], sk[i - 1]));
        l.push(r[i - 1]);
    }
    (l, r)
}

/// Feistel iteration of the decryption pipeline, running the rounds in
/// reverse from (L_N, R_N) down to (L_0, R_0)
fn iterate_decrypt(ln: u32, rn: u32, sk: &[u16], n: usize) -> (Vec<u32>, Vec<u32>) {
    let mut l = vec![0u32; n + 1];
    let mut r = vec![0u32; n + 1];
    l[n] = ln;
    r[n] = rn;
    for i in (1..=n).rev() {
        l[i - 1] = r[i] ^ f(l[i], sk[i - 1]);
        r[i - 1] = l[i];
    }
    (l, r)
}

/// Concatenate four 16-bit subkeys into a 64-bit value, first subkey in the
/// most significant position
#[inline]
fn concat_subkeys(sk: &[u16]) -> u64 {
    debug_assert_eq!(sk.len(), 4);
    (u64::from(sk[0]) << 48) | (u64::from(sk[1]) << 32) | (u64::from(sk[2]) << 16) | u64::from(sk[3])
}

#[inline]
fn split_block(block: u64) -> (u32, u32) {
    ((block >> 32) as u32, block as u32)
}

#[inline]
fn join_block(upper: u32, lower: u32) -> u64 {
    (u64::from(upper) << 32) | u64::from(lower)
}
