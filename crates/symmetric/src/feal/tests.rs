use super::*;

#[test]
fn short_key_single_block_vector() {
    let cipher = FealCipher::with_key(&[0xFF, 0xFF], Mode::Block).unwrap();
    let ciphertext = cipher.encrypt(b"secret").unwrap();
    assert_eq!(ciphertext, 0xC6C0_ACF4_2710_6A8Du64.to_be_bytes());

    // The left padding is part of the recovered plaintext.
    let recovered = cipher.decrypt(&ciphertext).unwrap();
    assert_eq!(recovered, b"\x00\x00secret");
}

#[test]
fn text_key_single_block_vector() {
    let cipher = FealCipher::with_key(b"secret", Mode::Block).unwrap();
    let ciphertext = cipher.encrypt(&[0xFF, 0xFF]).unwrap();
    assert_eq!(ciphertext, 0x7485_8883_2169_C1BDu64.to_be_bytes());
}

#[test]
fn ecb_mode_multi_block_vector() {
    let cipher = FealCipher::new(b"secret", 8, Mode::Ecb).unwrap();
    let ciphertext = cipher.encrypt(b"attack at dawn!!").unwrap();
    assert_eq!(
        hex::encode(&ciphertext),
        "6695bbe0a27d509607e5cd98ac3c01c0"
    );
    assert_eq!(cipher.decrypt(&ciphertext).unwrap(), b"attack at dawn!!");
}

#[test]
fn block_mode_rejects_oversized_input() {
    let cipher = FealCipher::with_key(b"k", Mode::Block).unwrap();
    assert!(cipher.encrypt(&[0u8; 9]).is_err());
    assert!(cipher.decrypt(&[0u8; 9]).is_err());
    assert!(cipher.encrypt(&[0u8; 8]).is_ok());
}

#[test]
fn rejects_oversized_key() {
    assert!(FealCipher::with_key(&[0u8; 17], Mode::Block).is_err());
    assert!(FealCipher::with_key(&[0u8; 16], Mode::Block).is_ok());
    assert!(FealCipher::with_key(&[], Mode::Block).is_ok());
}

#[test]
fn rejects_invalid_rounds() {
    assert!(FealCipher::new(b"secret", 7, Mode::Block).is_err());
    assert!(FealCipher::new(b"secret", 0, Mode::Ecb).is_err());
}

#[test]
fn short_key_equals_left_padded_key() {
    let short = FealCipher::with_key(b"secret", Mode::Block).unwrap();
    let padded = FealCipher::with_key(b"\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00secret", Mode::Block)
        .unwrap();
    let message = [0xAB; 8];
    assert_eq!(
        short.encrypt(&message).unwrap(),
        padded.encrypt(&message).unwrap()
    );
}

#[test]
fn name_reports_round_count() {
    let cipher = FealCipher::new(b"secret", 8, Mode::Ecb).unwrap();
    assert_eq!(cipher.name(), "FEAL-NX/8");
}

#[test]
fn ecb_round_trips_unaligned_lengths() {
    let cipher = FealCipher::with_key(b"another key", Mode::Ecb).unwrap();
    let message = b"this message is not block aligned";
    let ciphertext = cipher.encrypt(message).unwrap();
    assert_eq!(ciphertext.len() % 8, 0);

    let recovered = cipher.decrypt(&ciphertext).unwrap();
    // Left padding sticks to the front of the first block.
    assert_eq!(&recovered[recovered.len() - message.len()..], message);
    assert!(recovered[..recovered.len() - message.len()]
        .iter()
        .all(|&b| b == 0));
}
