use block_cipher::crypto::cipher_traits::{BlockCipher, CipherAlgorithm, SymmetricCipher};
use block_cipher::crypto::deal::Deal;
use block_cipher::crypto::deal_key_expansion::{deal_rounds_for_key, DealKeyExpansion};
use block_cipher::crypto::errors::CipherError;
use block_cipher::crypto::key_expansion::KeyExpansion;

#[test]
fn rounds_follow_key_size() {
    assert_eq!(deal_rounds_for_key(16), Some(6));
    assert_eq!(deal_rounds_for_key(24), Some(6));
    assert_eq!(deal_rounds_for_key(32), Some(8));
    assert_eq!(deal_rounds_for_key(8), None);

    let mut deal = Deal::new();
    deal.initialize(&[1u8; 16]).unwrap();
    assert_eq!(deal.rounds_count(), 6);
    deal.initialize(&[1u8; 32]).unwrap();
    assert_eq!(deal.rounds_count(), 8);
}

#[test]
fn round_keys_are_des_sized_and_chained() {
    let keys = DealKeyExpansion.expand_key(&[0x42u8; 24]).unwrap();
    assert_eq!(keys.len(), 6);
    assert!(keys.iter().all(|k| k.len() == 8));

    // The feedback chain must keep equal segments from collapsing into
    // equal round keys.
    assert_ne!(keys[0], keys[1]);
    assert_ne!(keys[1], keys[2]);
}

#[test]
fn roundtrip_all_key_sizes() {
    for size in [16usize, 24, 32] {
        let key: Vec<u8> = (0..size as u8).collect();
        let mut deal = Deal::new();
        deal.initialize(&key).unwrap();

        let block: Vec<u8> = (100u8..116).collect();
        let ciphertext = deal.encrypt_block(&block).unwrap();
        assert_ne!(ciphertext, block);
        assert_eq!(deal.decrypt_block(&ciphertext).unwrap(), block);
    }
}

#[test]
fn rejects_unsupported_keys() {
    let mut deal = Deal::new();
    for size in [0, 8, 15, 17, 33] {
        assert!(matches!(
            deal.initialize(&vec![0u8; size]),
            Err(CipherError::InvalidArgument(_))
        ));
    }
}

#[test]
fn whole_buffer_roundtrip() {
    let mut deal = Deal::new();
    deal.initialize(&[9u8; 16]).unwrap();

    let data: Vec<u8> = (0..64u8).collect();
    let encrypted = CipherAlgorithm::encrypt(&deal, &data).unwrap();
    assert_eq!(CipherAlgorithm::decrypt(&deal, &encrypted).unwrap(), data);
}
