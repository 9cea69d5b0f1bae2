use block_cipher::crypto::cipher_context::CipherContext;
use block_cipher::crypto::cipher_types::{CipherMode, PaddingMode};
use block_cipher::crypto::deal::Deal;
use block_cipher::crypto::des::Des;
use block_cipher::crypto::cipher_traits::SymmetricCipher;
use rand::RngCore;

fn random_bytes(len: usize) -> Vec<u8> {
    let mut buf = vec![0u8; len];
    rand::rng().fill_bytes(&mut buf);
    buf
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let text = "The quick brown fox jumps over the lazy dog. Symmetric encryption test string!";
    let data = text.as_bytes();

    // === DES / CBC / PKCS7 ===
    let mut des = Des::new();
    des.initialize(&random_bytes(8))?;
    let ctx = CipherContext::new(
        Box::new(des),
        CipherMode::CBC,
        PaddingMode::PKCS7,
        Some(random_bytes(8)),
    )?;

    let encrypted = ctx.encrypt(data).await?;
    let decrypted = ctx.decrypt(&encrypted).await?;
    assert_eq!(data, &decrypted[..]);
    println!("DES CBC+PKCS7 OK ({} -> {} bytes)", data.len(), encrypted.len());

    // === DEAL / CTR ===
    let mut deal = Deal::new();
    deal.initialize(&random_bytes(24))?;
    let ctx = CipherContext::new(
        Box::new(deal),
        CipherMode::CTR,
        PaddingMode::Zeros,
        Some(random_bytes(16)),
    )?;

    let encrypted = ctx.encrypt(data).await?;
    let decrypted = ctx.decrypt(&encrypted).await?;
    assert_eq!(data, &decrypted[..]);
    println!("DEAL CTR OK ({} -> {} bytes)", data.len(), encrypted.len());

    Ok(())
}
