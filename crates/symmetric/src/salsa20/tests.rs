use super::*;

fn set1v0_key() -> [u8; 16] {
    let mut key = [0u8; 16];
    key[0] = 0x80;
    key
}

#[test]
fn deterministic_core_matches_keystream_vector() {
    let cipher = Salsa20Cipher::new(&set1v0_key(), Rounds::R20).unwrap();
    // XOR over zeros exposes the raw keystream.
    let keystream = cipher.xcrypt_with_iv(&Nonce::zeroed(), &[0u8; 16]);
    assert_eq!(
        hex::encode_upper(keystream),
        "4DFA5E481DA23EA09A31022050859936"
    );
}

#[test]
fn encrypt_prepends_iv_and_round_trips() {
    let cipher = Salsa20Cipher::new(&[7u8; 32], Rounds::R20).unwrap();
    let plaintext = b"the quick brown fox";

    let ciphertext = cipher.encrypt(plaintext).unwrap();
    assert_eq!(ciphertext.len(), 8 + plaintext.len());
    assert_eq!(cipher.decrypt(&ciphertext).unwrap(), plaintext);
}

#[test]
fn encryptions_of_same_message_differ() {
    let cipher = Salsa20Cipher::new(&[7u8; 32], Rounds::R12).unwrap();
    let a = cipher.encrypt(b"repeated message").unwrap();
    let b = cipher.encrypt(b"repeated message").unwrap();
    assert_ne!(a, b);
}

#[test]
fn decrypt_rejects_truncated_ciphertext() {
    let cipher = Salsa20Cipher::new(&[7u8; 16], Rounds::R20).unwrap();
    assert!(cipher.decrypt(&[]).is_err());
    assert!(cipher.decrypt(&[0u8; 8]).is_err());
    assert!(cipher.decrypt(&[0u8; 9]).is_ok());
}

#[test]
fn rejects_unsupported_key_widths() {
    assert!(Salsa20Cipher::new(&[0u8; 16], Rounds::R20).is_ok());
    assert!(Salsa20Cipher::new(&[0u8; 32], Rounds::R20).is_ok());
    assert!(Salsa20Cipher::new(&[0u8; 24], Rounds::R20).is_err());
    assert!(Salsa20Cipher::new(&[0u8; 0], Rounds::R20).is_err());
}

#[test]
fn name_reports_round_count() {
    let cipher = Salsa20Cipher::new(&[1u8; 32], Rounds::R8).unwrap();
    assert_eq!(cipher.name(), "Salsa20/8");
}
