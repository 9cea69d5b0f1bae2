use block_cipher::crypto::cipher_traits::{BlockCipher, CipherAlgorithm, SymmetricCipher};
use block_cipher::crypto::errors::CipherError;
use block_cipher::crypto::rc4::Rc4;
use hex_literal::hex;

/// RFC 6229, 40-bit key, first keystream row.
#[test]
fn rfc6229_keystream_40_bit() {
    let mut rc4 = Rc4::new();
    rc4.initialize(&hex!("01 02 03 04 05")).unwrap();

    let keystream = rc4.encrypt(&[0u8; 16]).unwrap();
    assert_eq!(
        keystream,
        hex!("b2 39 63 05 f0 3d c0 27 cc c3 52 4a 0a 11 18 a8")
    );
}

/// RFC 6229, 56-bit key, first keystream row.
#[test]
fn rfc6229_keystream_56_bit() {
    let mut rc4 = Rc4::new();
    rc4.initialize(&hex!("01 02 03 04 05 06 07")).unwrap();

    let keystream = rc4.encrypt(&[0u8; 16]).unwrap();
    assert_eq!(
        keystream,
        hex!("29 3f 02 d4 7f 37 c9 b6 33 f2 af 52 85 fe b4 6b")
    );
}

#[test]
fn encrypt_reset_decrypt_recovers_plaintext() {
    let mut rc4 = Rc4::new();
    rc4.initialize(b"1234567890123456").unwrap();

    let plaintext = b"Hello World!!! This is a test message for RC4 algorithm.";
    let ciphertext = rc4.encrypt(plaintext).unwrap();
    assert_ne!(&ciphertext[..], &plaintext[..]);

    rc4.reset().unwrap();
    let decrypted = rc4.decrypt(&ciphertext).unwrap();
    assert_eq!(decrypted, plaintext);
}

#[test]
fn keystream_continues_across_calls() {
    let mut rc4 = Rc4::new();
    rc4.initialize(&hex!("01 02 03 04 05")).unwrap();

    let first = rc4.encrypt(&[0u8; 8]).unwrap();
    let second = rc4.encrypt(&[0u8; 8]).unwrap();

    rc4.reset().unwrap();
    let joined = rc4.encrypt(&[0u8; 16]).unwrap();
    assert_eq!(&joined[..8], &first[..]);
    assert_eq!(&joined[8..], &second[..]);
}

#[test]
fn key_size_gates() {
    let mut rc4 = Rc4::new();
    assert!(matches!(
        rc4.initialize(&[0u8; 4]),
        Err(CipherError::InvalidArgument(_))
    ));
    rc4.initialize(&[0u8; 5]).unwrap();
    rc4.initialize(&[0u8; 256]).unwrap();
}

#[test]
fn reports_no_block_structure() {
    let rc4 = Rc4::new();
    assert_eq!(rc4.block_size(), 0);
    assert!(matches!(rc4.reset(), Err(CipherError::NotInitialized)));
}

#[test]
fn operations_require_key_setup() {
    let rc4 = Rc4::new();
    assert!(matches!(
        rc4.encrypt(b"data"),
        Err(CipherError::NotInitialized)
    ));
}
