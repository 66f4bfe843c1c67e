//! ChaCha stream cipher implementation
//!
//! This module implements the ChaCha stream cipher in both its original
//! layout (64-bit nonce, 64-bit block counter) and the IETF layout from
//! RFC 7539 (96-bit nonce, 32-bit block counter), with 8, 12 or 20 rounds.
//!
//! ChaCha is Salsa20 with a different quarterround and a rearranged state:
//! the constants occupy the first row, and the rounds alternate between
//! columns and diagonals instead of columns and rows.

use byteorder::{ByteOrder, LittleEndian};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::stream::{Rounds, StreamCipher, STREAM_BLOCK_SIZE};
use crate::types::nonce::{ChaChaDjbCompatible, ChaChaIetfCompatible};
use crate::types::Nonce;

/// Size of a ChaCha key in bytes
pub const CHACHA_KEY_SIZE: usize = 32;
/// Size of the nonce in the original layout
pub const CHACHA_DJB_NONCE_SIZE: usize = 8;
/// Size of the nonce in the IETF layout
pub const CHACHA_IETF_NONCE_SIZE: usize = 12;
/// Size of a ChaCha block in bytes
pub const CHACHA_BLOCK_SIZE: usize = STREAM_BLOCK_SIZE;

/// "expand 32-byte k" in little-endian
const CONSTANTS: [u32; 4] = [0x6170_7865, 0x3320_646E, 0x7962_2D32, 0x6B20_6574];

/// State layout of the counter and nonce words
///
/// The two layouts share the core; they differ only in how words 12..16
/// are split between the block counter and the nonce.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    /// Original layout: 64-bit counter in words 12-13, 64-bit nonce in
    /// words 14-15
    Djb,
    /// RFC 7539 layout: 32-bit counter in word 12, 96-bit nonce in words
    /// 13-15
    Ietf,
}

/// ChaCha stream cipher
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct ChaCha {
    /// The key schedule: constants, key, counter, nonce
    state: [u32; 16],
    /// Keystream buffer
    buffer: [u8; CHACHA_BLOCK_SIZE],
    /// Current position in the buffer
    position: usize,
    /// Current block counter
    counter: u64,
    /// Counter the cipher started at
    initial_counter: u64,
    /// Counter/nonce word layout
    #[zeroize(skip)]
    variant: Variant,
    /// Round configuration
    #[zeroize(skip)]
    rounds: Rounds,
}

impl ChaCha {
    /// Creates a ChaCha instance in the original layout, starting at
    /// block 0
    pub fn new_djb<const N: usize>(
        key: &[u8; CHACHA_KEY_SIZE],
        nonce: &Nonce<N>,
        rounds: Rounds,
    ) -> Self
    where
        Nonce<N>: ChaChaDjbCompatible,
    {
        Self::djb_with_counter(key, nonce, rounds, 0)
    }

    /// Creates a ChaCha instance in the original layout with an explicit
    /// 64-bit initial block counter
    pub fn djb_with_counter<const N: usize>(
        key: &[u8; CHACHA_KEY_SIZE],
        nonce: &Nonce<N>,
        rounds: Rounds,
        counter: u64,
    ) -> Self
    where
        Nonce<N>: ChaChaDjbCompatible,
    {
        let mut state = Self::base_state(key);
        let nonce_bytes = nonce.as_ref();
        state[12] = counter as u32;
        state[13] = (counter >> 32) as u32;
        state[14] = LittleEndian::read_u32(&nonce_bytes[0..4]);
        state[15] = LittleEndian::read_u32(&nonce_bytes[4..8]);

        Self::from_state(state, counter, Variant::Djb, rounds)
    }

    /// Creates a ChaCha instance in the IETF layout, starting at block 0
    pub fn new_ietf<const N: usize>(
        key: &[u8; CHACHA_KEY_SIZE],
        nonce: &Nonce<N>,
        rounds: Rounds,
    ) -> Self
    where
        Nonce<N>: ChaChaIetfCompatible,
    {
        Self::ietf_with_counter(key, nonce, rounds, 0)
    }

    /// Creates a ChaCha instance in the IETF layout with an explicit
    /// 32-bit initial block counter
    pub fn ietf_with_counter<const N: usize>(
        key: &[u8; CHACHA_KEY_SIZE],
        nonce: &Nonce<N>,
        rounds: Rounds,
        counter: u32,
    ) -> Self
    where
        Nonce<N>: ChaChaIetfCompatible,
    {
        let mut state = Self::base_state(key);
        let nonce_bytes = nonce.as_ref();
        state[12] = counter;
        state[13] = LittleEndian::read_u32(&nonce_bytes[0..4]);
        state[14] = LittleEndian::read_u32(&nonce_bytes[4..8]);
        state[15] = LittleEndian::read_u32(&nonce_bytes[8..12]);

        Self::from_state(state, u64::from(counter), Variant::Ietf, rounds)
    }

    /// Returns the counter/nonce layout of this instance
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Returns the round configuration of this instance
    pub fn rounds(&self) -> Rounds {
        self.rounds
    }

    /// Constants and key words, shared by both layouts
    fn base_state(key: &[u8; CHACHA_KEY_SIZE]) -> [u32; 16] {
        let mut state = [0u32; 16];
        state[..4].copy_from_slice(&CONSTANTS);
        for i in 0..8 {
            state[4 + i] = LittleEndian::read_u32(&key[i * 4..]);
        }
        state
    }

    fn from_state(state: [u32; 16], counter: u64, variant: Variant, rounds: Rounds) -> Self {
        Self {
            state,
            buffer: [0; CHACHA_BLOCK_SIZE],
            position: CHACHA_BLOCK_SIZE, // Force initial keystream generation
            counter,
            initial_counter: counter,
            variant,
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
        match self.variant {
            Variant::Djb => {
                input[12] = self.counter as u32;
                input[13] = (self.counter >> 32) as u32;
            }
            Variant::Ietf => {
                // The IETF counter is a single word and wraps at 2^32.
                input[12] = self.counter as u32;
            }
        }

        self.buffer = hash(&input, self.rounds);

        self.position = 0;
        self.counter = self.counter.wrapping_add(1);
    }
}

impl StreamCipher for ChaCha {
    fn process(&mut self, data: &mut [u8]) {
        for byte in data.iter_mut() {
            if self.position >= CHACHA_BLOCK_SIZE {
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
        self.position = CHACHA_BLOCK_SIZE;
        self.process(output);
    }

    fn seek(&mut self, block: u64) {
        self.counter = block;
        self.position = CHACHA_BLOCK_SIZE;
        self.buffer.zeroize();
    }

    fn reset(&mut self) {
        self.seek(self.initial_counter);
    }
}

/// The ChaCha quarterround function
#[inline]
pub fn quarterround(a: u32, b: u32, c: u32, d: u32) -> (u32, u32, u32, u32) {
    let (mut a, mut b, mut c, mut d) = (a, b, c, d);
    a = a.wrapping_add(b);
    d = (d ^ a).rotate_left(16);
    c = c.wrapping_add(d);
    b = (b ^ c).rotate_left(12);
    a = a.wrapping_add(b);
    d = (d ^ a).rotate_left(8);
    c = c.wrapping_add(d);
    b = (b ^ c).rotate_left(7);
    (a, b, c, d)
}

/// Apply a quarterround to four words of the state in place
#[inline]
pub fn quarterround_idx(state: &mut [u32; 16], a: usize, b: usize, c: usize, d: usize) {
    let (qa, qb, qc, qd) = quarterround(state[a], state[b], state[c], state[d]);
    state[a] = qa;
    state[b] = qb;
    state[c] = qc;
    state[d] = qd;
}

/// One double round: four column quarterrounds followed by four diagonal
/// quarterrounds
pub fn doubleround(state: &mut [u32; 16]) {
    quarterround_idx(state, 0, 4, 8, 12);
    quarterround_idx(state, 1, 5, 9, 13);
    quarterround_idx(state, 2, 6, 10, 14);
    quarterround_idx(state, 3, 7, 11, 15);

    quarterround_idx(state, 0, 5, 10, 15);
    quarterround_idx(state, 1, 6, 11, 12);
    quarterround_idx(state, 2, 7, 8, 13);
    quarterround_idx(state, 3, 4, 9, 14);
}

/// The ChaCha block function over one 16-word input block
///
/// Iterates the requested number of double rounds, then adds the input
/// block word-for-word and serializes little-endian.
pub fn hash(input: &[u32; 16], rounds: Rounds) -> [u8; CHACHA_BLOCK_SIZE] {
    let mut working = *input;
    for _ in 0..rounds.double_rounds() {
        doubleround(&mut working);
    }

    let mut output = [0u8; CHACHA_BLOCK_SIZE];
    for i in 0..16 {
        LittleEndian::write_u32(&mut output[i * 4..], working[i].wrapping_add(input[i]));
    }
    output
}
