//! Property tests: decrypt(encrypt(m)) recovers m for every cipher
//! configuration, across arbitrary keys and messages.

use cipherlab_algorithms::stream::Rounds;
use cipherlab_algorithms::Variant;
use cipherlab_symmetric::{ChaChaCipher, FealCipher, Mode, Salsa20Cipher, SymmetricCipher};
use proptest::prelude::*;

fn rounds_strategy() -> impl Strategy<Value = Rounds> {
    prop_oneof![Just(Rounds::R8), Just(Rounds::R12), Just(Rounds::R20)]
}

proptest! {
    #[test]
    fn feal_ecb_round_trips(
        key in proptest::collection::vec(any::<u8>(), 0..=16),
        message in proptest::collection::vec(any::<u8>(), 0..256),
    ) {
        let cipher = FealCipher::with_key(&key, Mode::Ecb).unwrap();
        let ciphertext = cipher.encrypt(&message).unwrap();
        let recovered = cipher.decrypt(&ciphertext).unwrap();
        // Decryption keeps the zero left-padding of the first block.
        prop_assert_eq!(&recovered[recovered.len() - message.len()..], &message[..]);
        prop_assert!(recovered[..recovered.len() - message.len()].iter().all(|&b| b == 0));
    }

    #[test]
    fn feal_block_round_trips(
        key in proptest::collection::vec(any::<u8>(), 0..=16),
        message in proptest::collection::vec(any::<u8>(), 0..=8),
    ) {
        let cipher = FealCipher::with_key(&key, Mode::Block).unwrap();
        let ciphertext = cipher.encrypt(&message).unwrap();
        let recovered = cipher.decrypt(&ciphertext).unwrap();
        prop_assert_eq!(&recovered[8 - message.len()..], &message[..]);
    }

    #[test]
    fn salsa20_round_trips(
        key in prop_oneof![
            proptest::collection::vec(any::<u8>(), 16..=16),
            proptest::collection::vec(any::<u8>(), 32..=32),
        ],
        rounds in rounds_strategy(),
        message in proptest::collection::vec(any::<u8>(), 1..512),
    ) {
        let cipher = Salsa20Cipher::new(&key, rounds).unwrap();
        let ciphertext = cipher.encrypt(&message).unwrap();
        prop_assert_eq!(ciphertext.len(), message.len() + 8);
        prop_assert_eq!(cipher.decrypt(&ciphertext).unwrap(), message);
    }

    #[test]
    fn chacha_round_trips(
        key in proptest::collection::vec(any::<u8>(), 32..=32),
        variant in prop_oneof![Just(Variant::Djb), Just(Variant::Ietf)],
        rounds in rounds_strategy(),
        message in proptest::collection::vec(any::<u8>(), 1..512),
    ) {
        let cipher = ChaChaCipher::new(&key, variant, rounds).unwrap();
        let ciphertext = cipher.encrypt(&message).unwrap();
        prop_assert_eq!(cipher.decrypt(&ciphertext).unwrap(), message);
    }

    #[test]
    fn stream_ciphertext_is_not_plaintext(
        key in proptest::collection::vec(any::<u8>(), 32..=32),
        message in proptest::collection::vec(any::<u8>(), 32..128),
    ) {
        let cipher = ChaChaCipher::new(&key, Variant::Ietf, Rounds::R20).unwrap();
        let ciphertext = cipher.encrypt(&message).unwrap();
        prop_assert_ne!(&ciphertext[12..], &message[..]);
    }
}
