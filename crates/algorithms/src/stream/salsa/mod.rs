//! Salsa20 stream cipher implementation
//!
//! This module implements the Salsa20 stream cipher as defined in
//! D. J. Bernstein's specification, including the reduced-round Salsa20/8
//! and Salsa20/12 variants and both the 128-bit and 256-bit key expansions.
//!
//! The core functions (`quarterround`, `rowround`, `columnround`,
//! `doubleround`, [`hash`]) are exposed so the word-level examples from the
//! specification can be checked directly.

use byteorder::{ByteOrder, LittleEndian};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{validate, Error, Result};
use crate::stream::{Rounds, StreamCipher, STREAM_BLOCK_SIZE};
use crate::types::nonce::Salsa20Compatible;
use crate::types::Nonce;

/// Size of a Salsa20 key with the 256-bit expansion
pub const SALSA20_KEY_SIZE: usize = 32;
/// Size of a Salsa20 key with the 128-bit expansion
pub const SALSA20_SHORT_KEY_SIZE: usize = 16;
/// Size of the Salsa20 nonce in bytes
pub const SALSA20_NONCE_SIZE: usize = 8;
/// Size of a Salsa20 block in bytes
pub const SALSA20_BLOCK_SIZE: usize = STREAM_BLOCK_SIZE;

/// "expand 32-byte k", the constants of the 256-bit expansion
const SIGMA: [u32; 4] = [0x6170_7865, 0x3320_646E, 0x7962_2D32, 0x6B20_6574];
/// "expand 16-byte k", the constants of the 128-bit expansion
const TAU: [u32; 4] = [0x6170_7865, 0x3120_646E, 0x7962_2D36, 0x6B20_6574];

/// A Salsa20 key of either supported width
///
/// The 128-bit expansion reuses the key for both halves of the state and
/// swaps the `SIGMA` constants for `TAU`.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub enum SalsaKey {
    /// 128-bit key ("expand 16-byte k")
    K128([u8; SALSA20_SHORT_KEY_SIZE]),
    /// 256-bit key ("expand 32-byte k")
    K256([u8; SALSA20_KEY_SIZE]),
}

impl SalsaKey {
    /// Create a key from a slice of 16 or 32 bytes
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        match slice.len() {
            SALSA20_SHORT_KEY_SIZE => {
                let mut key = [0u8; SALSA20_SHORT_KEY_SIZE];
                key.copy_from_slice(slice);
                Ok(SalsaKey::K128(key))
            }
            SALSA20_KEY_SIZE => {
                let mut key = [0u8; SALSA20_KEY_SIZE];
                key.copy_from_slice(slice);
                Ok(SalsaKey::K256(key))
            }
            _ => Err(Error::param("key", "must be 16 or 32 bytes")),
        }
    }

    /// The two 16-byte key halves and the expansion constants
    fn layout(&self) -> ([u8; 16], [u8; 16], [u32; 4]) {
        match self {
            SalsaKey::K128(key) => (*key, *key, TAU),
            SalsaKey::K256(key) => {
                let mut k0 = [0u8; 16];
                let mut k1 = [0u8; 16];
                k0.copy_from_slice(&key[..16]);
                k1.copy_from_slice(&key[16..]);
                (k0, k1, SIGMA)
            }
        }
    }
}

/// Salsa20 stream cipher
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Salsa20 {
    /// The expanded input block: constants, key, nonce, counter
    state: [u32; 16],
    /// Keystream buffer
    buffer: [u8; SALSA20_BLOCK_SIZE],
    /// Current position in the buffer
    position: usize,
    /// Current block counter
    counter: u64,
    /// Counter the cipher started at
    initial_counter: u64,
    /// Round configuration
    #[zeroize(skip)]
    rounds: Rounds,
}

impl Salsa20 {
    /// Creates a new Salsa20 instance with the specified key, nonce and
    /// round count, starting at block 0
    pub fn new<const N: usize>(key: &SalsaKey, nonce: &Nonce<N>, rounds: Rounds) -> Self
    where
        Nonce<N>: Salsa20Compatible,
    {
        Self::with_counter(key, nonce, rounds, 0)
    }

    /// Creates a new Salsa20 instance starting at the given block counter
    pub fn with_counter<const N: usize>(
        key: &SalsaKey,
        nonce: &Nonce<N>,
        rounds: Rounds,
        counter: u64,
    ) -> Self
    where
        Nonce<N>: Salsa20Compatible,
    {
        // The per-block input is the expansion of IV ‖ LE64(counter).
        let mut block_nonce = [0u8; 16];
        block_nonce[..SALSA20_NONCE_SIZE].copy_from_slice(nonce.as_ref());
        LittleEndian::write_u64(&mut block_nonce[SALSA20_NONCE_SIZE..], counter);
        let state = input_words(key, &block_nonce);

        Self {
            state,
            buffer: [0; SALSA20_BLOCK_SIZE],
            position: SALSA20_BLOCK_SIZE, // Force initial keystream generation
            counter,
            initial_counter: counter,
            rounds,
        }
    }

    /// Encrypt data in place
    pub fn encrypt(&mut self, data: &mut [u8]) {
        self.process(data);
    }

    /// Decrypt data in place
    pub fn decrypt(&mut self, data: &mut [u8]) {
        self.process(data);
    }

    /// Generate a block of keystream
    fn generate_keystream(&mut self) {
        let mut input = self.state;
        input[8] = self.counter as u32;
        input[9] = (self.counter >> 32) as u32;

        self.buffer = hash(&input, self.rounds);

        self.position = 0;
        self.counter = self.counter.wrapping_add(1);
    }
}

impl StreamCipher for Salsa20 {
    fn process(&mut self, data: &mut [u8]) {
        for byte in data.iter_mut() {
            if self.position >= SALSA20_BLOCK_SIZE {
                self.generate_keystream();
            }
            *byte ^= self.buffer[self.position];
            self.position += 1;
        }
    }

    fn keystream(&mut self, output: &mut [u8]) {
        for byte in output.iter_mut() {
            *byte = 0;
        }

        // Start from a block boundary, discarding any partial block
        self.position = SALSA20_BLOCK_SIZE;
        self.process(output);
    }

    fn seek(&mut self, block: u64) {
        self.counter = block;
        self.position = SALSA20_BLOCK_SIZE;
        self.buffer.zeroize();
    }

    fn reset(&mut self) {
        self.seek(self.initial_counter);
    }
}

/// The Salsa20 quarterround function
#[inline]
pub fn quarterround(y0: u32, y1: u32, y2: u32, y3: u32) -> (u32, u32, u32, u32) {
    let z1 = y1 ^ y0.wrapping_add(y3).rotate_left(7);
    let z2 = y2 ^ z1.wrapping_add(y0).rotate_left(9);
    let z3 = y3 ^ z2.wrapping_add(z1).rotate_left(13);
    let z0 = y0 ^ z3.wrapping_add(z2).rotate_left(18);
    (z0, z1, z2, z3)
}

/// Apply a quarterround to four words of the state in place
#[inline]
fn quarterround_at(state: &mut [u32; 16], a: usize, b: usize, c: usize, d: usize) {
    let (z0, z1, z2, z3) = quarterround(state[a], state[b], state[c], state[d]);
    state[a] = z0;
    state[b] = z1;
    state[c] = z2;
    state[d] = z3;
}

/// The Salsa20 rowround function: one quarterround per row, each rotated
/// one position further than the last
pub fn rowround(state: &mut [u32; 16]) {
    quarterround_at(state, 0, 1, 2, 3);
    quarterround_at(state, 5, 6, 7, 4);
    quarterround_at(state, 10, 11, 8, 9);
    quarterround_at(state, 15, 12, 13, 14);
}

/// The Salsa20 columnround function, the transpose of [`rowround`]
pub fn columnround(state: &mut [u32; 16]) {
    quarterround_at(state, 0, 4, 8, 12);
    quarterround_at(state, 5, 9, 13, 1);
    quarterround_at(state, 10, 14, 2, 6);
    quarterround_at(state, 15, 3, 7, 11);
}

/// The Salsa20 doubleround function: a columnround followed by a rowround
pub fn doubleround(state: &mut [u32; 16]) {
    columnround(state);
    rowround(state);
}

/// The Salsa20 hash function over one 16-word input block
///
/// Iterates the requested number of double rounds, then adds the input
/// block word-for-word and serializes little-endian.
pub fn hash(input: &[u32; 16], rounds: Rounds) -> [u8; SALSA20_BLOCK_SIZE] {
    let mut working = *input;
    for _ in 0..rounds.double_rounds() {
        doubleround(&mut working);
    }

    let mut output = [0u8; SALSA20_BLOCK_SIZE];
    for i in 0..16 {
        LittleEndian::write_u32(&mut output[i * 4..], working[i].wrapping_add(input[i]));
    }
    output
}

/// The Salsa20 expansion function
///
/// Expands a key and a 16-byte nonce block into 64 keystream bytes. For
/// the cipher the nonce block is IV ‖ LE64(block counter); the function is
/// exposed with the free 16-byte parameter the specification defines.
pub fn expansion(key: &SalsaKey, nonce: &[u8; 16], rounds: Rounds) -> [u8; SALSA20_BLOCK_SIZE] {
    hash(&input_words(key, nonce), rounds)
}

/// Lay out constants, key halves and the 16-byte nonce block as state
/// words: the constants sit on the main diagonal
fn input_words(key: &SalsaKey, nonce: &[u8; 16]) -> [u32; 16] {
    let (k0, k1, constants) = key.layout();

    let mut words = [0u32; 16];
    words[0] = constants[0];
    for i in 0..4 {
        words[1 + i] = LittleEndian::read_u32(&k0[i * 4..]);
    }
    words[5] = constants[1];
    for i in 0..4 {
        words[6 + i] = LittleEndian::read_u32(&nonce[i * 4..]);
    }
    words[10] = constants[2];
    for i in 0..4 {
        words[11 + i] = LittleEndian::read_u32(&k1[i * 4..]);
    }
    words[15] = constants[3];
    words
}

/// The Salsa20 hash over a 64-byte block, as the specification phrases it
pub fn hash_bytes(input: &[u8], rounds: Rounds) -> Result<[u8; SALSA20_BLOCK_SIZE]> {
    validate::length("Salsa20 hash input", input.len(), SALSA20_BLOCK_SIZE)?;

    let mut words = [0u32; 16];
    for (i, word) in words.iter_mut().enumerate() {
        *word = LittleEndian::read_u32(&input[i * 4..]);
    }
    Ok(hash(&words, rounds))
}
