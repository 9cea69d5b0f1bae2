use block_cipher::crypto::cipher_context::CipherContext;
use block_cipher::crypto::cipher_types::{CipherMode, PaddingMode};
use block_cipher::crypto::des::Des;
use block_cipher::crypto::cipher_traits::SymmetricCipher;
use rand::RngCore;
use std::fs;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let dir = std::env::temp_dir();
    let source = dir.join("block_cipher_demo.bin");
    let encrypted = dir.join("block_cipher_demo.enc");
    let restored = dir.join("block_cipher_demo.out");

    let mut payload = vec![0u8; 1024 * 1024];
    rand::rng().fill_bytes(&mut payload);
    fs::write(&source, &payload)?;

    let mut des = Des::new();
    des.initialize(&[0x0E, 0x32, 0x92, 0x32, 0xEA, 0x6D, 0x0D, 0x73])?;
    let ctx = CipherContext::new(
        Box::new(des),
        CipherMode::CTR,
        PaddingMode::Zeros,
        Some(vec![0u8; 8]),
    )?;

    ctx.encrypt_file(&source, &encrypted, 4096).await?;
    ctx.decrypt_file(&encrypted, &restored, 4096).await?;

    assert_eq!(fs::read(&source)?, fs::read(&restored)?);
    println!(
        "streamed {} bytes -> {} bytes and back",
        fs::metadata(&source)?.len(),
        fs::metadata(&encrypted)?.len()
    );

    fs::remove_file(&source).ok();
    fs::remove_file(&encrypted).ok();
    fs::remove_file(&restored).ok();
    Ok(())
}
