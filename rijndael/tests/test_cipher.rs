use block_cipher::crypto::cipher_context::CipherContext;
use block_cipher::crypto::cipher_traits::{BlockCipher, CipherAlgorithm, SymmetricCipher};
use block_cipher::crypto::cipher_types::{CipherMode, PaddingMode};
use block_cipher::crypto::errors::CipherError;
use hex_literal::hex;
use rijndael::Rijndael;

#[test]
fn fips197_aes128_vector() {
    let mut aes = Rijndael::aes128().unwrap();
    aes.initialize(&hex!("000102030405060708090a0b0c0d0e0f"))
        .unwrap();
    assert_eq!(aes.rounds_count(), 10);

    let plaintext = hex!("00112233445566778899aabbccddeeff");
    let ciphertext = aes.encrypt_block(&plaintext).unwrap();
    assert_eq!(ciphertext, hex!("69c4e0d86a7b0430d8cdb78070b4c55a"));

    assert_eq!(aes.decrypt_block(&ciphertext).unwrap(), plaintext);
}

#[test]
fn aes256_key_raises_round_count() {
    let mut aes = Rijndael::new(16, 0x1B).unwrap();
    aes.initialize(&[0u8; 32]).unwrap();
    assert_eq!(aes.rounds_count(), 14);

    let mut aes = Rijndael::new(16, 0x1B).unwrap();
    aes.initialize(&[0u8; 24]).unwrap();
    assert_eq!(aes.rounds_count(), 12);
}

#[test]
fn wide_blocks_roundtrip() {
    for block_size in [16usize, 24, 32] {
        for key_size in [16usize, 24, 32] {
            let mut cipher = Rijndael::new(block_size, 0x1B).unwrap();
            cipher.initialize(&vec![0x5Cu8; key_size]).unwrap();

            let block: Vec<u8> = (0..block_size as u8).collect();
            let ciphertext = cipher.encrypt_block(&block).unwrap();
            assert_ne!(ciphertext, block);
            assert_eq!(
                cipher.decrypt_block(&ciphertext).unwrap(),
                block,
                "block {}, key {}",
                block_size,
                key_size
            );
        }
    }
}

#[test]
fn alternate_polynomial_still_inverts() {
    // 0x1D (x^8+x^4+x^3+x^2+1) is another irreducible degree-8 polynomial.
    let mut cipher = Rijndael::new(16, 0x1D).unwrap();
    cipher.initialize(&[0x42u8; 16]).unwrap();

    let block = [0x33u8; 16];
    let ciphertext = cipher.encrypt_block(&block).unwrap();
    assert_eq!(cipher.decrypt_block(&ciphertext).unwrap(), block);

    // And it must disagree with the standard field.
    let mut standard = Rijndael::new(16, 0x1B).unwrap();
    standard.initialize(&[0x42u8; 16]).unwrap();
    assert_ne!(standard.encrypt_block(&block).unwrap(), ciphertext);
}

#[test]
fn reducible_polynomial_rejected() {
    // 0x00 stands for x^8, which factors trivially.
    assert!(matches!(
        Rijndael::new(16, 0x00),
        Err(CipherError::InvalidArgument(_))
    ));
}

#[test]
fn invalid_sizes_rejected() {
    assert!(Rijndael::new(20, 0x1B).is_err());

    let mut aes = Rijndael::aes128().unwrap();
    assert!(matches!(
        aes.initialize(&[0u8; 20]),
        Err(CipherError::InvalidArgument(_))
    ));
    aes.initialize(&[0u8; 16]).unwrap();
    assert!(matches!(
        aes.encrypt_block(&[0u8; 24]),
        Err(CipherError::InvalidData(_))
    ));
}

#[test]
fn whole_buffer_roundtrip() {
    let mut aes = Rijndael::aes128().unwrap();
    aes.initialize(&[7u8; 16]).unwrap();

    let data: Vec<u8> = (0..128u8).collect();
    let encrypted = CipherAlgorithm::encrypt(&aes, &data).unwrap();
    assert_eq!(CipherAlgorithm::decrypt(&aes, &encrypted).unwrap(), data);
}

/// Rijndael-128 under ECB with PKCS#7: "Short" pads to a single block.
#[tokio::test]
async fn scenario_short_string_under_ecb() {
    let mut aes = Rijndael::aes128().unwrap();
    aes.initialize(&[0x2Bu8; 16]).unwrap();
    let ctx = CipherContext::new(Box::new(aes), CipherMode::ECB, PaddingMode::PKCS7, None)
        .unwrap();

    let ciphertext = ctx.encrypt(b"Short").await.unwrap();
    assert_eq!(ciphertext.len(), 16);
    assert_eq!(ctx.decrypt(&ciphertext).await.unwrap(), b"Short");
}
