use super::*;
use crate::block::feal::{FealNx, FEAL_BLOCK_SIZE};

fn test_mode() -> Ecb<FealNx> {
    let key = 0x0123_4567_89AB_CDEF_0123_4567_89AB_CDEFu128;
    Ecb::new(FealNx::from_key_u128(key, 32).unwrap())
}

#[test]
fn single_block_matches_raw_cipher() {
    let mode = test_mode();
    let ciphertext = mode.encrypt(&[0u8; 8]).unwrap();
    assert_eq!(ciphertext, 0x9C9B_5497_3DF6_85F8u64.to_be_bytes());
}

#[test]
fn blocks_are_independent() {
    let mode = test_mode();
    let plaintext = [0u8; 16];
    let ciphertext = mode.encrypt(&plaintext).unwrap();
    assert_eq!(ciphertext.len(), 16);
    // Equal plaintext blocks produce equal ciphertext blocks.
    assert_eq!(ciphertext[..8], ciphertext[8..]);
}

#[test]
fn short_input_is_left_padded() {
    let mode = test_mode();
    let ciphertext = mode.encrypt(b"abc").unwrap();
    assert_eq!(ciphertext.len(), FEAL_BLOCK_SIZE);

    // Explicit padding yields the same ciphertext.
    let padded = mode.encrypt(b"\x00\x00\x00\x00\x00abc").unwrap();
    assert_eq!(ciphertext, padded);
}

#[test]
fn decrypt_keeps_padding() {
    let mode = test_mode();
    let ciphertext = mode.encrypt(b"abc").unwrap();
    let recovered = mode.decrypt(&ciphertext).unwrap();
    assert_eq!(recovered, b"\x00\x00\x00\x00\x00abc");
}

#[test]
fn round_trips_multi_block_messages() {
    let mode = test_mode();
    for len in [8usize, 16, 24, 64] {
        let plaintext: Vec<u8> = (0..len).map(|i| i as u8).collect();
        let ciphertext = mode.encrypt(&plaintext).unwrap();
        assert_eq!(ciphertext.len(), len);
        assert_eq!(mode.decrypt(&ciphertext).unwrap(), plaintext);
    }
}

#[test]
fn empty_input_yields_empty_output() {
    let mode = test_mode();
    assert!(mode.encrypt(&[]).unwrap().is_empty());
    assert!(mode.decrypt(&[]).unwrap().is_empty());
}
