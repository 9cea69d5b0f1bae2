use block_cipher::crypto::cipher_traits::{BlockCipher, SymmetricCipher};
use block_cipher::crypto::des::Des;
use block_cipher::crypto::errors::CipherError;
use block_cipher::crypto::triple_des::TripleDes;
use hex_literal::hex;

#[test]
fn equal_thirds_degenerate_to_single_des() {
    let third = hex!("13 34 57 79 9B BC DF F1");
    let mut key = Vec::new();
    for _ in 0..3 {
        key.extend_from_slice(&third);
    }

    let mut tdes = TripleDes::new();
    tdes.initialize(&key).unwrap();

    let mut des = Des::new();
    des.initialize(&third).unwrap();

    let block = hex!("01 23 45 67 89 AB CD EF");
    assert_eq!(
        tdes.encrypt_block(&block).unwrap(),
        des.encrypt_block(&block).unwrap()
    );
}

#[test]
fn roundtrip_with_distinct_thirds() {
    let key: Vec<u8> = (0u8..24).collect();
    let mut tdes = TripleDes::new();
    tdes.initialize(&key).unwrap();

    let block = hex!("DE AD BE EF 01 02 03 04");
    let ciphertext = tdes.encrypt_block(&block).unwrap();
    assert_ne!(ciphertext, block);
    assert_eq!(tdes.decrypt_block(&ciphertext).unwrap(), block);
}

#[test]
fn accepts_raw_21_byte_keys() {
    let key: Vec<u8> = (0u8..21).collect();
    let mut tdes = TripleDes::new();
    tdes.initialize(&key).unwrap();

    let block = [0x5Au8; 8];
    let ciphertext = tdes.encrypt_block(&block).unwrap();
    assert_eq!(tdes.decrypt_block(&ciphertext).unwrap(), block);
}

#[test]
fn rejects_other_key_sizes() {
    let mut tdes = TripleDes::new();
    for size in [8, 16, 22, 23, 25, 48] {
        assert!(matches!(
            tdes.initialize(&vec![0u8; size]),
            Err(CipherError::InvalidArgument(_))
        ));
    }
}

#[test]
fn forty_eight_round_keys() {
    let tdes = TripleDes::new();
    let key: Vec<u8> = (0u8..24).collect();
    let keys = tdes.generate_round_keys(&key).unwrap();
    assert_eq!(keys.len(), 48);
    assert!(keys.iter().all(|k| k.len() == 6));
}
