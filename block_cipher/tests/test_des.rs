use block_cipher::crypto::cipher_traits::{BlockCipher, CipherAlgorithm, SymmetricCipher};
use block_cipher::crypto::des::Des;
use block_cipher::crypto::des_key_expansion::DesKeyExpansion;
use block_cipher::crypto::errors::CipherError;
use block_cipher::crypto::key_expansion::KeyExpansion;
use hex_literal::hex;

#[test]
fn des_published_vector() {
    let key = hex!("13 34 57 79 9B BC DF F1");
    let plaintext = hex!("01 23 45 67 89 AB CD EF");
    let expected = hex!("85 E8 13 54 0F 0A B4 05");

    let mut des = Des::new();
    des.initialize(&key).unwrap();

    let ciphertext = des.encrypt_block(&plaintext).unwrap();
    assert_eq!(ciphertext, expected);

    let decrypted = des.decrypt_block(&ciphertext).unwrap();
    assert_eq!(decrypted, plaintext);
}

#[test]
fn des_weak_key_fixed_point() {
    // Seven zero bytes widen to the weak key 01 01 .. 01.
    let mut des = Des::new();
    des.initialize(&[0u8; 7]).unwrap();

    let ciphertext = des.encrypt_block(&[0u8; 8]).unwrap();
    assert_eq!(ciphertext, hex!("8C A6 4D E9 C1 B1 23 A7"));

    // A weak key encrypts twice back to the plaintext.
    let twice = des.encrypt_block(&ciphertext).unwrap();
    assert_eq!(twice, [0u8; 8]);
}

#[test]
fn raw_and_parity_key_forms_agree() {
    let mut raw = Des::new();
    raw.initialize(&[0u8; 7]).unwrap();

    let mut wide = Des::new();
    wide.initialize(&hex!("01 01 01 01 01 01 01 01")).unwrap();

    let block = hex!("0011223344556677");
    assert_eq!(
        raw.encrypt_block(&block).unwrap(),
        wide.encrypt_block(&block).unwrap()
    );
}

#[test]
fn parity_bits_are_regenerated() {
    // Same 56 key bits with scrambled parity must give the same schedule.
    let mut a = Des::new();
    a.initialize(&hex!("13 34 57 79 9B BC DF F1")).unwrap();
    let mut b = Des::new();
    b.initialize(&hex!("12 34 56 78 9A BC DE F0")).unwrap();

    let block = hex!("01 23 45 67 89 AB CD EF");
    assert_eq!(
        a.encrypt_block(&block).unwrap(),
        b.encrypt_block(&block).unwrap()
    );
}

#[test]
fn sixteen_round_keys_of_six_bytes() {
    let keys = DesKeyExpansion
        .expand_key(&hex!("13 34 57 79 9B BC DF F1"))
        .unwrap();
    assert_eq!(keys.len(), 16);
    assert!(keys.iter().all(|k| k.len() == 6));
}

#[test]
fn rejects_bad_key_and_block_sizes() {
    let mut des = Des::new();
    assert!(matches!(
        des.initialize(&[0u8; 6]),
        Err(CipherError::InvalidArgument(_))
    ));

    des.initialize(&[7u8; 8]).unwrap();
    assert!(matches!(
        des.encrypt_block(&[0u8; 4]),
        Err(CipherError::InvalidData(_))
    ));
}

#[test]
fn block_operations_require_initialization() {
    let des = Des::new();
    assert!(matches!(
        des.encrypt_block(&[0u8; 8]),
        Err(CipherError::NotInitialized)
    ));
    assert!(matches!(
        des.decrypt_block(&[0u8; 8]),
        Err(CipherError::NotInitialized)
    ));
}

#[test]
fn whole_buffer_matches_per_block() {
    let mut des = Des::new();
    des.initialize(&hex!("0F 15 71 C9 47 D9 E8 59")).unwrap();

    let data: Vec<u8> = (0u8..32).collect();
    let whole = CipherAlgorithm::encrypt(&des, &data).unwrap();

    let mut blocks = Vec::new();
    for chunk in data.chunks(8) {
        blocks.extend(des.encrypt_block(chunk).unwrap());
    }
    assert_eq!(whole, blocks);

    assert_eq!(CipherAlgorithm::decrypt(&des, &whole).unwrap(), data);
}
